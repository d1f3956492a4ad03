//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{job_preview::JobPreviewPage, new_job::NewJobPage};
use crate::state::jobs::JobsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the jobs store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let jobs = RwSignal::new(JobsState::default());
    provide_context(jobs);

    view! {
        <Title text="Create Your Job Post"/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=(StaticSegment("jobs"), StaticSegment("new")) view=NewJobPage/>
                    <Route
                        path=(StaticSegment("jobs"), StaticSegment("new"), StaticSegment("preview"))
                        view=JobPreviewPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
