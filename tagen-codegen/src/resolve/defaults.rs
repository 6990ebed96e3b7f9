//! Classification and default values of optional inputs.

use tagen_ir::{MaType, OptionalInput, Role};

use super::{
    ResolveError,
    kinds::{declared_type, unrecognized},
};

/// Declared type of an optional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalKind {
    Integer,
    Double,
    MaType,
}

impl OptionalKind {
    /// Match a declared type from the schema vocabulary.
    pub fn from_declared_type(ty: &str) -> Option<Self> {
        match ty {
            "Integer" => Some(OptionalKind::Integer),
            "Double" => Some(OptionalKind::Double),
            "MA Type" => Some(OptionalKind::MaType),
            _ => None,
        }
    }

    /// Returns true if the value is a moving average code.
    pub fn is_ma_type(&self) -> bool {
        matches!(self, OptionalKind::MaType)
    }
}

/// A parsed default value.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedDefault {
    /// Numeric literal, kept as written.
    Number(String),
    MaType(MaType),
}

impl ResolvedDefault {
    /// Expression for native code (e.g., `14`, `TA_MAType_SMA`).
    pub fn native(&self) -> &str {
        match self {
            ResolvedDefault::Number(literal) => literal,
            ResolvedDefault::MaType(ma) => ma.native(),
        }
    }

    /// Symbolic form for documentation (e.g., `14`, `SMA`).
    pub fn symbol(&self) -> &str {
        match self {
            ResolvedDefault::Number(literal) => literal,
            ResolvedDefault::MaType(ma) => ma.symbol(),
        }
    }
}

/// Classify an optional input and parse its default value.
pub fn resolve_optional(
    function: &str,
    input: &OptionalInput,
) -> Result<(OptionalKind, ResolvedDefault), ResolveError> {
    let ty = declared_type(function, Role::Optional, &input.arg)?;
    let kind = OptionalKind::from_declared_type(ty)
        .ok_or_else(|| unrecognized(function, Role::Optional, &input.arg, ty))?;

    let value = input.default_value.trim();
    let default = match kind {
        OptionalKind::Integer => value
            .parse::<i32>()
            .ok()
            .map(|_| ResolvedDefault::Number(value.to_string())),
        OptionalKind::Double => value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|_| ResolvedDefault::Number(value.to_string())),
        OptionalKind::MaType => value
            .parse::<i32>()
            .ok()
            .and_then(MaType::from_code)
            .or_else(|| MaType::from_name(value))
            .map(ResolvedDefault::MaType),
    };

    let default = default.ok_or_else(|| ResolveError::InvalidDefault {
        function: function.to_string(),
        argument: input.arg.label(),
        value: input.default_value.clone(),
        ty: ty.to_string(),
    })?;

    Ok((kind, default))
}
