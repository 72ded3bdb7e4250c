//! Unified validation for request payloads.
//!
//! Field-level rules live in [`rules`] and are attached to payload structs
//! through the `validator` derive; cross-field rules are plain functions the
//! service layer calls before touching the database.

pub mod rules;

pub use validator::Validate;

/// Flattens a `validator` error tree into one human-readable message per
/// violation, preferring the rule's message over its code.
pub fn error_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect()
}
