//! Reusable UI component modules.

pub mod form_input;
