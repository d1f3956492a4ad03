//! Preview of the saved job draft.
//!
//! Draft values were filtered for their HTML context at submit time, so text
//! fields are inserted as markup and URI fields as attribute values.

#[cfg(test)]
#[path = "job_preview_test.rs"]
mod job_preview_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::pages::new_job::NEW_JOB_PATH;
use crate::state::draft::JobDraft;
use crate::state::jobs::{JobActions, JobsState};

/// Human-readable posting date, e.g. `January 12, 2016`.
pub fn posted_label(posted_on: &DateTime<Utc>) -> String {
    posted_on.format("%B %-d, %Y").to_string()
}

/// Undo the quote escaping applied for raw single-quoted attributes. The view
/// sets attributes through the DOM, where `&#39;` would be taken literally.
pub fn bound_uri(filtered: &str) -> String {
    filtered.replace("&#39;", "'")
}

/// Card class; highlighted listings get the accent modifier.
pub fn preview_class(highlight: bool) -> &'static str {
    if highlight {
        "job-preview job-preview--highlight"
    } else {
        "job-preview"
    }
}

#[component]
pub fn JobPreviewPage() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();

    // A reload lands here with an empty store; resume from storage.
    Effect::new(move || {
        if jobs.with_untracked(|state| state.new_job.is_none()) {
            jobs.get_saved_form();
        }
    });

    view! {
        <div class="row">
            <div class="col-md-10 col-md-offset-1">
                {move || match jobs.with(|state| state.new_job.clone()) {
                    Some(job) => view! { <JobPreviewCard job=job/> }.into_any(),
                    None => view! {
                        <div class="job-preview job-preview--empty text-center">
                            <p>"There is no job post to preview yet."</p>
                            <a class="btn btn-primary" href=NEW_JOB_PATH>
                                "Create Your Job Post"
                            </a>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn JobPreviewCard(job: JobDraft) -> impl IntoView {
    let posted = posted_label(&job.posted_on);
    let class = preview_class(job.highlight);
    let JobDraft {
        position,
        locale,
        description,
        email,
        phone,
        url,
        logo,
        company,
        ..
    } = job;

    view! {
        <div class=class>
            <div class="panel panel-default">
                <div class="panel-body">
                    {logo.map(|src| view! { <img class="job-preview__logo" src=bound_uri(&src) alt="Company logo"/> })}
                    <h2 class="job-preview__position" inner_html=position.unwrap_or_default()></h2>
                    {company.map(|name| view! { <h3 class="job-preview__company" inner_html=name></h3> })}
                    {locale.map(|place| view! { <h4 class="job-preview__locale" inner_html=place></h4> })}
                    <p class="job-preview__posted">"Posted on " {posted}</p>
                    <div class="job-preview__description" inner_html=description.unwrap_or_default()></div>
                    <ul class="job-preview__contact">
                        {email.map(|addr| view! { <li inner_html=addr></li> })}
                        {phone.map(|number| view! { <li inner_html=number></li> })}
                        {url.map(|href| {
                            let href = bound_uri(&href);
                            let text = href.clone();
                            view! { <li><a href=href target="_blank">{text}</a></li> }
                        })}
                    </ul>
                    <a class="btn btn-default" href=NEW_JOB_PATH>
                        "Edit"
                    </a>
                </div>
            </div>
        </div>
    }
}
