//! `telinv-forms` — create-or-edit form state.
//!
//! One controller tracks one in-progress draft plus an optional editing id
//! marking update-vs-insert mode. Only one draft/editing-id pair exists per
//! feature area at a time; there are no overlapping edits.

pub mod controller;

pub use controller::{FormController, Submission};
