//! New job form page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is a projection of the jobs store: field states are re-derived
//! from the raw form on every change and every edit is dispatched back to the
//! store. Submitting runs the validity gate, sanitizes the values into a
//! [`JobDraft`](crate::state::draft::JobDraft), saves it, and moves on to the
//! preview route.

#[cfg(test)]
#[path = "new_job_test.rs"]
mod new_job_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::state::draft::{SubmitError, build_draft, check_validity};
use crate::state::job_fields::{FieldState, JobField, JobFields};
use crate::state::jobs::{FormUpdate, JobActions, JobsState};

/// Route of this page.
pub const NEW_JOB_PATH: &str = "/jobs/new";

/// Route the page navigates to after a successful submit.
pub const PREVIEW_PATH: &str = "/jobs/new/preview";

/// Validate, sanitize, save, then navigate to the preview.
///
/// An invalid form is refused without dispatching anything; the inline field
/// styles are the only feedback.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] when any field blocks submission.
pub fn handle_submit<A, N>(
    fields: &JobFields,
    actions: &A,
    navigate: N,
    now: DateTime<Utc>,
) -> Result<(), SubmitError>
where
    A: JobActions + ?Sized,
    N: FnOnce(&str),
{
    check_validity(fields)?;

    let job = build_draft(fields, now);
    log::debug!("job sanitized: {job:?}");
    actions.save_form(job);
    navigate(PREVIEW_PATH);
    Ok(())
}

/// Mount hook: pull a draft saved by an earlier visit back into the store.
pub fn resume_saved_form<A: JobActions + ?Sized>(actions: &A) {
    actions.get_saved_form();
}

/// Dispatch a text edit through the generic form update.
pub fn change_text<A: JobActions + ?Sized>(actions: &A, field: JobField, value: String) {
    actions.handle_form(FormUpdate::Text { field, value });
}

/// Dispatch the highlight checkbox state directly.
pub fn toggle_highlight<A: JobActions + ?Sized>(actions: &A, checked: bool) {
    actions.handle_form(FormUpdate::Highlight(checked));
}

#[component]
pub fn NewJobPage() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();
    let navigate = use_navigate();

    let fields = Memo::new(move |_| jobs.with(|state| JobFields::from_form(&state.form)));
    let field_state =
        move |field: JobField| -> Signal<FieldState> { Signal::derive(move || fields.with(|f| f.get(field).clone())) };

    // Effects only run in the browser, so server rendering never reads storage.
    Effect::new(move || resume_saved_form(&jobs));

    let on_input = Callback::new(move |(field, value): (JobField, String)| change_text(&jobs, field, value));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = fields.get_untracked();
        if let Err(e) = handle_submit(
            &snapshot,
            &jobs,
            |path| navigate(path, NavigateOptions::default()),
            Utc::now(),
        ) {
            log::debug!("submit refused: {e}");
        }
    };

    view! {
        <div class="row">
            <div class="col-md-10 col-md-offset-1">
                <div class="panel panel-default text-center">
                    <div class="panel-body">
                        <h1>"Create Your Job Post"</h1>
                        <form class="form-horizontal" on:submit=on_submit>
                            <div class="spacer">
                                <h2>"First, tell us about the position"</h2>
                            </div>
                            <FormInput
                                field=JobField::Position
                                label="Job Title"
                                state=field_state(JobField::Position)
                                on_input=on_input
                                placeholder="e.g. Full Stack Developer, Front End Developer, etc."
                            />
                            <FormInput
                                field=JobField::Locale
                                label="Location"
                                state=field_state(JobField::Locale)
                                on_input=on_input
                                placeholder="e.g. San Francisco, Remote, etc."
                            />
                            <FormInput
                                field=JobField::Description
                                label="Description"
                                state=field_state(JobField::Description)
                                on_input=on_input
                                rows=10
                            />

                            <div class="divider">
                                <h2>"Tell us about your organization"</h2>
                            </div>
                            <FormInput
                                field=JobField::Company
                                label="Company Name"
                                state=field_state(JobField::Company)
                                on_input=on_input
                            />
                            <FormInput
                                field=JobField::Email
                                label="Email"
                                state=field_state(JobField::Email)
                                on_input=on_input
                                placeholder="you@yourcompany.com"
                                input_type="email"
                            />
                            <FormInput
                                field=JobField::Phone
                                label="Phone"
                                state=field_state(JobField::Phone)
                                on_input=on_input
                                placeholder="555-867-5309"
                                input_type="tel"
                            />
                            <FormInput
                                field=JobField::Url
                                label="URL"
                                state=field_state(JobField::Url)
                                on_input=on_input
                                placeholder="http://freecodecamp.com"
                                input_type="url"
                            />
                            <FormInput
                                field=JobField::Logo
                                label="Logo"
                                state=field_state(JobField::Logo)
                                on_input=on_input
                                placeholder="http://freecatphotoapp.com/logo.png"
                                input_type="url"
                            />

                            <div class="divider">
                                <h2>"Highlight your listing to make it stand out"</h2>
                            </div>
                            <div class="form-group">
                                <div class="checkbox col-sm-offset-1 col-sm-6">
                                    <label>
                                        <input
                                            type="checkbox"
                                            name="highlight"
                                            prop:checked=move || fields.with(|f| f.highlight.flag())
                                            on:change=move |ev| toggle_highlight(&jobs, event_target_checked(&ev))
                                        />
                                        "\u{2009}\u{2009}\u{2009}Sure - I'll pay $50 more for that."
                                    </label>
                                </div>
                            </div>
                            <div class="spacer"></div>
                            <div class="row">
                                <div class="col-lg-6 col-lg-offset-3">
                                    <button class="btn btn-primary btn-lg btn-block" type="submit">
                                        "Preview My Ad"
                                    </button>
                                </div>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
