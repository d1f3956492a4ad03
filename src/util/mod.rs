//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation, output filtering, and browser storage live here so the pages
//! and the jobs store stay free of string-munging and web-sys glue.

pub mod sanitize;
pub mod ui_persistence;
pub mod validate;
