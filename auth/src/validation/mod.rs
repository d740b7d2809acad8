//! Field validation with an explicit, enumerated rule set.
//!
//! Each field declares an ordered list of [`Rule`]s. Validation reports the
//! first failing rule per field as a [`FieldViolation`], and [`translate`]
//! turns violations into user-facing sentences.

pub mod rules;
pub mod translator;

pub use rules::validate;
pub use rules::FieldRules;
pub use rules::FieldViolation;
pub use rules::Rule;
pub use translator::translate;
