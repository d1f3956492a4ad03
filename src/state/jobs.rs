//! Jobs store: raw form values, the saved draft, and the actions that mutate
//! them.
//!
//! DESIGN
//! ======
//! `JobsState` lives in an `RwSignal` provided via context. Pages never write
//! to it directly; they dispatch through [`JobActions`], which the signal
//! implements. Tests substitute a recording implementation.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::state::draft::JobDraft;
use crate::state::job_fields::JobField;
use crate::util::ui_persistence::{load_json, save_json};

/// `localStorage` key holding the last saved draft.
pub const SAVED_FORM_KEY: &str = "newJob";

/// Raw values exactly as typed. Absent keys deserialize as empty/false.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobForm {
    pub position: String,
    pub locale: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub url: String,
    pub logo: String,
    pub company: String,
    pub highlight: bool,
}

impl JobForm {
    /// Merge a single-field update, leaving every other field untouched.
    pub fn apply(&mut self, update: FormUpdate) {
        match update {
            FormUpdate::Text { field, value } => match self.text_mut(field) {
                Some(slot) => *slot = value,
                None => log::warn!("ignoring text update for boolean field {field}"),
            },
            FormUpdate::Highlight(checked) => self.highlight = checked,
        }
    }

    fn text_mut(&mut self, field: JobField) -> Option<&mut String> {
        match field {
            JobField::Position => Some(&mut self.position),
            JobField::Locale => Some(&mut self.locale),
            JobField::Description => Some(&mut self.description),
            JobField::Email => Some(&mut self.email),
            JobField::Phone => Some(&mut self.phone),
            JobField::Url => Some(&mut self.url),
            JobField::Logo => Some(&mut self.logo),
            JobField::Company => Some(&mut self.company),
            JobField::Highlight => None,
        }
    }
}

impl From<&JobDraft> for JobForm {
    fn from(draft: &JobDraft) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            position: text(&draft.position),
            locale: text(&draft.locale),
            description: text(&draft.description),
            email: text(&draft.email),
            phone: text(&draft.phone),
            url: text(&draft.url),
            logo: text(&draft.logo),
            company: text(&draft.company),
            highlight: draft.highlight,
        }
    }
}

/// Partial form update dispatched on input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormUpdate {
    Text { field: JobField, value: String },
    /// The highlight checkbox bypasses the text path.
    Highlight(bool),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobsState {
    pub form: JobForm,
    /// Last draft handed to `save_form`, shown by the preview page.
    pub new_job: Option<JobDraft>,
}

impl JobsState {
    /// Resume from a previously saved draft.
    pub fn restore(&mut self, draft: JobDraft) {
        self.form = JobForm::from(&draft);
        self.new_job = Some(draft);
    }

    /// Record a submitted draft.
    pub fn save(&mut self, draft: JobDraft) {
        self.new_job = Some(draft);
    }
}

/// Actions the new job page dispatches to the store.
pub trait JobActions {
    /// Hydrate the form from a previously saved draft, if any.
    fn get_saved_form(&self);
    /// Merge a partial update into the form.
    fn handle_form(&self, update: FormUpdate);
    /// Persist a sanitized draft.
    fn save_form(&self, draft: JobDraft);
}

impl JobActions for RwSignal<JobsState> {
    fn get_saved_form(&self) {
        let Some(draft) = load_json::<JobDraft>(SAVED_FORM_KEY) else {
            log::debug!("no saved job draft");
            return;
        };
        log::debug!("restoring saved job draft");
        self.update(|state| state.restore(draft));
    }

    fn handle_form(&self, update: FormUpdate) {
        self.update(|state| state.form.apply(update));
    }

    fn save_form(&self, draft: JobDraft) {
        save_json(SAVED_FORM_KEY, &draft);
        self.update(|state| state.save(draft));
    }
}
