use chrono::{TimeZone, Utc};

use super::*;

fn draft() -> JobDraft {
    JobDraft {
        position: Some("Dev".to_owned()),
        locale: Some("Remote".to_owned()),
        description: Some("Work".to_owned()),
        email: Some("a@b.com".to_owned()),
        phone: None,
        url: Some("http://a.com".to_owned()),
        logo: None,
        company: Some("Acme".to_owned()),
        highlight: true,
        posted_on: Utc.with_ymd_and_hms(2016, 1, 12, 0, 0, 0).single().expect("valid timestamp"),
    }
}

// =============================================================
// JobForm
// =============================================================

#[test]
fn job_form_default_is_empty() {
    let form = JobForm::default();
    assert!(form.position.is_empty());
    assert!(!form.highlight);
}

#[test]
fn job_form_missing_keys_deserialize_as_empty() {
    let form: JobForm = serde_json::from_str(r#"{"position":"Dev"}"#).expect("parse form");
    assert_eq!(form.position, "Dev");
    assert!(form.email.is_empty());
    assert!(!form.highlight);
}

#[test]
fn apply_text_update_touches_only_that_field() {
    let mut form = JobForm {
        locale: "Remote".to_owned(),
        ..JobForm::default()
    };
    form.apply(FormUpdate::Text {
        field: JobField::Position,
        value: "Dev".to_owned(),
    });
    assert_eq!(form.position, "Dev");
    assert_eq!(form.locale, "Remote");
}

#[test]
fn apply_highlight_update_sets_flag() {
    let mut form = JobForm::default();
    form.apply(FormUpdate::Highlight(true));
    assert!(form.highlight);
    form.apply(FormUpdate::Highlight(false));
    assert!(!form.highlight);
}

#[test]
fn apply_text_update_to_highlight_is_ignored() {
    let mut form = JobForm::default();
    form.apply(FormUpdate::Text {
        field: JobField::Highlight,
        value: "true".to_owned(),
    });
    assert_eq!(form, JobForm::default());
}

#[test]
fn job_form_from_draft_fills_missing_with_empty() {
    let form = JobForm::from(&draft());
    assert_eq!(form.position, "Dev");
    assert_eq!(form.url, "http://a.com");
    assert!(form.phone.is_empty());
    assert!(form.highlight);
}

// =============================================================
// JobsState
// =============================================================

#[test]
fn jobs_state_default_has_no_saved_draft() {
    let state = JobsState::default();
    assert!(state.new_job.is_none());
    assert_eq!(state.form, JobForm::default());
}

#[test]
fn restore_populates_form_and_preview() {
    let mut state = JobsState::default();
    state.restore(draft());
    assert_eq!(state.form.company, "Acme");
    assert_eq!(state.new_job, Some(draft()));
}

#[test]
fn save_keeps_form_values() {
    let mut state = JobsState::default();
    state.form.position = "typed".to_owned();
    state.save(draft());
    assert_eq!(state.form.position, "typed");
    assert_eq!(state.new_job, Some(draft()));
}

// =============================================================
// JobActions for RwSignal
// =============================================================

#[test]
fn signal_actions_update_store() {
    let jobs = RwSignal::new(JobsState::default());

    jobs.handle_form(FormUpdate::Text {
        field: JobField::Email,
        value: "a@b.com".to_owned(),
    });
    jobs.handle_form(FormUpdate::Highlight(true));
    jobs.save_form(draft());

    let state = jobs.get_untracked();
    assert_eq!(state.form.email, "a@b.com");
    assert!(state.form.highlight);
    assert_eq!(state.new_job, Some(draft()));
}

#[test]
fn signal_get_saved_form_without_storage_keeps_state() {
    let jobs = RwSignal::new(JobsState::default());
    jobs.get_saved_form();
    assert_eq!(jobs.get_untracked(), JobsState::default());
}
