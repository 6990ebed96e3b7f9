use tagen_ir::Role;
use thiserror::Error;

/// Errors raised while resolving a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{function}: {role} '{argument}' must have exactly one {field}, found {count}")]
    Classification {
        function: String,
        role: Role,
        argument: String,
        field: &'static str,
        count: usize,
    },

    #[error("{function}: {role} '{argument}' has unrecognized type '{ty}'")]
    UnrecognizedType {
        function: String,
        role: Role,
        argument: String,
        ty: String,
    },

    #[error("{function}: optional input '{argument}' has invalid default '{value}' for type '{ty}'")]
    InvalidDefault {
        function: String,
        argument: String,
        value: String,
        ty: String,
    },

    #[error("{function}: identifier '{identifier}' is used more than once")]
    DuplicateName {
        function: String,
        identifier: String,
    },

    #[error("{function}: identifier '{identifier}' is reserved by the binding template")]
    ReservedName {
        function: String,
        identifier: String,
    },

    #[error("abbreviation '{function}' is not a valid C identifier")]
    InvalidAbbreviation { function: String },

    #[error("{function}: must declare at least one {role}")]
    MissingArgument { function: String, role: Role },
}
