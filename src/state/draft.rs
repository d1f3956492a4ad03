//! Submit-time job draft: validity gate and sanitized snapshot.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::job_fields::{FieldKind, FieldState, JobField, JobFields};
use crate::util::sanitize::{in_html_data, uri_in_single_quoted_attr};

/// Reasons a submission is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form not valid: {}", field_list(.fields))]
    Invalid { fields: Vec<JobField> },
}

fn field_list(fields: &[JobField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sanitized, submission-ready job listing.
///
/// Empty values are absent, `highlight` is only present when set, and
/// `postedOn` is always stamped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub highlight: bool,
    pub posted_on: DateTime<Utc>,
}

/// Refuse the submission if any text field blocks it.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] listing every blocking field, in check
/// list order.
pub fn check_validity(fields: &JobFields) -> Result<(), SubmitError> {
    let invalid: Vec<JobField> = fields
        .iter()
        .filter(|(field, state)| blocks_submit(*field, state))
        .map(|(field, _)| field)
        .collect();
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(SubmitError::Invalid { fields: invalid })
    }
}

/// A filled text field must be valid; a required one must be valid even when
/// empty. Boolean fields never block.
fn blocks_submit(field: JobField, state: &FieldState) -> bool {
    if state.kind() == FieldKind::Boolean || state.valid {
        return false;
    }
    state.is_filled() || field.is_required()
}

/// Sanitize every field for its output context and stamp `posted_on`.
pub fn build_draft(fields: &JobFields, posted_on: DateTime<Utc>) -> JobDraft {
    let text = |state: &FieldState| non_empty(in_html_data(state.text()));
    let uri = |state: &FieldState| non_empty(uri_in_single_quoted_attr(state.text()));
    JobDraft {
        position: text(&fields.position),
        locale: text(&fields.locale),
        description: text(&fields.description),
        email: text(&fields.email),
        phone: text(&fields.phone),
        url: uri(&fields.url),
        logo: uri(&fields.logo),
        company: text(&fields.company),
        highlight: fields.highlight.flag(),
        posted_on,
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
