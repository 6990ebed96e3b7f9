//! Classification of required inputs and outputs.

use tagen_ir::{Argument, OutputArgument, RecordField, RequiredInput, Role};

use super::ResolveError;

/// Primitive element type of a native buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Double,
    Integer,
}

impl ElementType {
    /// Element name as written in the schema (`Double`, `Integer`).
    pub fn label(&self) -> &'static str {
        match self {
            ElementType::Double => "Double",
            ElementType::Integer => "Integer",
        }
    }

    fn from_array_type(ty: &str) -> Option<Self> {
        match ty {
            "Double Array" => Some(ElementType::Double),
            "Integer Array" => Some(ElementType::Integer),
            _ => None,
        }
    }
}

/// How a required input is fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredKind {
    /// Backed by a fixed record field.
    Intrinsic(RecordField),
    /// Generic array whose record field name is supplied by the caller.
    Explicit(ElementType),
}

impl RequiredKind {
    pub fn is_intrinsic(&self) -> bool {
        matches!(self, RequiredKind::Intrinsic(_))
    }

    /// The backing record field of an intrinsic input.
    pub fn record_field(&self) -> Option<RecordField> {
        match self {
            RequiredKind::Intrinsic(field) => Some(*field),
            RequiredKind::Explicit(_) => None,
        }
    }

    /// Element type of the native buffer.
    pub fn element(&self) -> ElementType {
        match self {
            // Record fields are always doubles.
            RequiredKind::Intrinsic(_) => ElementType::Double,
            RequiredKind::Explicit(element) => *element,
        }
    }
}

/// Element type of an output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    DoubleArray,
    IntegerArray,
}

impl OutputKind {
    pub fn element(&self) -> ElementType {
        match self {
            OutputKind::DoubleArray => ElementType::Double,
            OutputKind::IntegerArray => ElementType::Integer,
        }
    }
}

pub(super) fn declared_type<'a>(
    function: &str,
    role: Role,
    arg: &'a Argument,
) -> Result<&'a str, ResolveError> {
    arg.declared_type()
        .ok_or_else(|| ResolveError::Classification {
            function: function.to_string(),
            role,
            argument: arg.label(),
            field: "Type",
            count: arg.types.len(),
        })
}

/// Classify a required input.
pub fn resolve_required(
    function: &str,
    input: &RequiredInput,
) -> Result<RequiredKind, ResolveError> {
    let ty = declared_type(function, Role::Required, &input.arg)?;

    if let Some(field) = RecordField::from_declared_type(ty) {
        return Ok(RequiredKind::Intrinsic(field));
    }

    ElementType::from_array_type(ty)
        .map(RequiredKind::Explicit)
        .ok_or_else(|| unrecognized(function, Role::Required, &input.arg, ty))
}

/// Classify an output.
pub fn resolve_output(
    function: &str,
    output: &OutputArgument,
) -> Result<OutputKind, ResolveError> {
    let ty = declared_type(function, Role::Output, &output.arg)?;

    match ElementType::from_array_type(ty) {
        Some(ElementType::Double) => Ok(OutputKind::DoubleArray),
        Some(ElementType::Integer) => Ok(OutputKind::IntegerArray),
        None => Err(unrecognized(function, Role::Output, &output.arg, ty)),
    }
}

pub(super) fn unrecognized(function: &str, role: Role, arg: &Argument, ty: &str) -> ResolveError {
    ResolveError::UnrecognizedType {
        function: function.to_string(),
        role,
        argument: arg.label(),
        ty: ty.to_string(),
    }
}
