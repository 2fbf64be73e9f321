// src/lib.rs
//! Core logic for a password input control: a pure length-based strength
//! classifier, the field state that reacts to edits and commits, and the
//! presentation configuration the host view renders from.

pub mod cli;
pub mod field;
pub mod models;
pub mod strength;
pub mod style;

pub use field::{EditError, PasswordField};
pub use models::{Category, ClassificationResult, CommittedValue, FieldEvent, VisibilityIcon};
pub use strength::{classify, classify_transition};
