//! Router assembly for the SSR server.
//!
//! SYSTEM CONTEXT
//! ==============
//! Job drafts never reach the server; it only renders the Leptos app, serves
//! the WASM/JS bundle under `/pkg`, and answers a liveness check.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};
use crate::pages::new_job::NEW_JOB_PATH;

/// Leptos SSR routes, static bundle, `/` redirect, and `/healthz`.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Router::new()
        .route("/", get(redirect_root))
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn redirect_root() -> Redirect {
    Redirect::temporary(NEW_JOB_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
