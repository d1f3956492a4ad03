use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let mut leptos_options = conf.leptos_options;
    if let Ok(raw) = std::env::var("PORT") {
        let port: u16 = raw.parse().expect("invalid PORT");
        leptos_options.site_addr.set_port(port);
    }
    let addr = leptos_options.site_addr;

    let app = jobs_client::server::router(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "jobs client listening");
    axum::serve(listener, app).await.expect("server failed");
}
