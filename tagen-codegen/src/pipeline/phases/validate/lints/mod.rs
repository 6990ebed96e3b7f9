//! Built-in lints for schema validation.

mod abbreviation_identifier;
mod duplicate_abbreviation;
mod empty_description;
mod singleton_field;

pub use abbreviation_identifier::AbbreviationIdentifierLint;
pub use duplicate_abbreviation::DuplicateAbbreviationLint;
pub use empty_description::EmptyDescriptionLint;
pub use singleton_field::SingletonFieldLint;
