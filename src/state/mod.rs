//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `jobs` owns the store and its actions, `job_fields` derives per-field
//! validity and styling from raw values, and `draft` builds the sanitized
//! snapshot handed to the store on submit.

pub mod draft;
pub mod job_fields;
pub mod jobs;
