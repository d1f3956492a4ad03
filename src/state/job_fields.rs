//! Per-field view model derived from the raw job form.
//!
//! DESIGN
//! ======
//! The store only holds raw values. Validity and status styling are recomputed
//! from those values on every render by [`JobFields::from_form`], which keeps
//! the derivation pure and independent of Leptos.

#[cfg(test)]
#[path = "job_fields_test.rs"]
mod job_fields_test;

use std::fmt;

use crate::state::jobs::JobForm;
use crate::util::validate::{is_ascii, is_email, is_valid_phone, is_valid_url, make_required};

/// Every field on the new job form, in display order of the check list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobField {
    Position,
    Locale,
    Description,
    Email,
    Phone,
    Url,
    Logo,
    Company,
    Highlight,
}

impl JobField {
    pub const ALL: [JobField; 9] = [
        JobField::Position,
        JobField::Locale,
        JobField::Description,
        JobField::Email,
        JobField::Phone,
        JobField::Url,
        JobField::Logo,
        JobField::Company,
        JobField::Highlight,
    ];

    /// Form/JSON field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Locale => "locale",
            Self::Description => "description",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::Logo => "logo",
            Self::Company => "company",
            Self::Highlight => "highlight",
        }
    }

    /// Required fields must be non-empty and valid before the form submits.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::Position | Self::Locale | Self::Description | Self::Email | Self::Company
        )
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Highlight => FieldKind::Boolean,
            _ => FieldKind::String,
        }
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
}

/// Bootstrap validation state shown on a form group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BsStyle {
    Success,
    Error,
}

impl BsStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Current value, validity, and status style for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldState {
    pub value: FieldValue,
    /// Result of the field validator. Always `true` for boolean fields.
    pub valid: bool,
    /// Set only once the value is non-empty.
    pub bs_style: Option<BsStyle>,
}

impl FieldState {
    /// Untouched state for a field of `kind`.
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => Self {
                value: FieldValue::Text(String::new()),
                valid: false,
                bs_style: None,
            },
            FieldKind::Boolean => Self {
                value: FieldValue::Flag(false),
                valid: true,
                bs_style: None,
            },
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self.value {
            FieldValue::Text(_) => FieldKind::String,
            FieldValue::Flag(_) => FieldKind::Boolean,
        }
    }

    /// Text value, or `""` for boolean fields.
    pub fn text(&self) -> &str {
        match &self.value {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    /// Boolean value, or `false` for text fields.
    pub fn flag(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    /// Whether the field holds a truthy value.
    pub fn is_filled(&self) -> bool {
        match &self.value {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Flag(flag) => *flag,
        }
    }
}

/// Build the state for a text field.
///
/// The validator, when present, sees the raw value even if it is empty. The
/// value and style are only recorded when the value is non-empty, so an empty
/// optional field shows neither success nor error.
pub fn format_value(value: &str, validator: Option<&dyn Fn(&str) -> bool>) -> FieldState {
    let mut state = FieldState::empty(FieldKind::String);
    if let Some(validator) = validator {
        state.valid = validator(value);
    }
    if !value.is_empty() {
        state.value = FieldValue::Text(value.to_owned());
        state.bs_style = Some(style_for(state.valid));
    }
    state
}

/// Build the state for a boolean field. No validator ever runs.
pub fn format_flag(value: bool) -> FieldState {
    let mut state = FieldState::empty(FieldKind::Boolean);
    if value {
        state.value = FieldValue::Flag(true);
        state.bs_style = Some(style_for(state.valid));
    }
    state
}

fn style_for(valid: bool) -> BsStyle {
    if valid { BsStyle::Success } else { BsStyle::Error }
}

/// Field states for the whole form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobFields {
    pub position: FieldState,
    pub locale: FieldState,
    pub description: FieldState,
    pub email: FieldState,
    pub phone: FieldState,
    pub url: FieldState,
    pub logo: FieldState,
    pub company: FieldState,
    pub highlight: FieldState,
}

impl JobFields {
    /// Map raw store values to field states.
    pub fn from_form(form: &JobForm) -> Self {
        let required_ascii = make_required(is_ascii);
        let required_email = make_required(is_email);
        Self {
            position: format_value(&form.position, Some(&required_ascii)),
            locale: format_value(&form.locale, Some(&required_ascii)),
            description: format_value(&form.description, Some(&required_ascii)),
            email: format_value(&form.email, Some(&required_email)),
            phone: format_value(&form.phone, Some(&is_valid_phone)),
            url: format_value(&form.url, Some(&is_valid_url)),
            logo: format_value(&form.logo, Some(&is_valid_url)),
            company: format_value(&form.company, Some(&required_ascii)),
            highlight: format_flag(form.highlight),
        }
    }

    pub fn get(&self, field: JobField) -> &FieldState {
        match field {
            JobField::Position => &self.position,
            JobField::Locale => &self.locale,
            JobField::Description => &self.description,
            JobField::Email => &self.email,
            JobField::Phone => &self.phone,
            JobField::Url => &self.url,
            JobField::Logo => &self.logo,
            JobField::Company => &self.company,
            JobField::Highlight => &self.highlight,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobField, &FieldState)> {
        JobField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

impl Default for JobFields {
    fn default() -> Self {
        Self::from_form(&JobForm::default())
    }
}
