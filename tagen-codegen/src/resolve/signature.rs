//! Resolved function signatures.
//!
//! A [`FunctionSignature`] is everything a generator needs to emit one
//! function: canonical names, argument kinds, parsed defaults, and the
//! positional layout of both calling conventions.

use std::collections::HashSet;

use tagen_core::is_c_identifier;
use tagen_ir::{ApiIR, FunctionSpec, Range, Role};

use super::{
    OptionalKind, OutputKind, RESERVED_IDENTIFIERS, RequiredKind, ResolveError, ResolvedDefault,
    ResolvedName, Surface, resolve_name, resolve_optional, resolve_output, resolve_required,
};

/// Calling convention of a generated entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// One positional array per required input.
    Array,
    /// A single array of records, plus one field name per explicit input.
    Record,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequiredParam {
    pub name: ResolvedName,
    pub kind: RequiredKind,
}

impl RequiredParam {
    pub fn is_intrinsic(&self) -> bool {
        self.kind.is_intrinsic()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionalParam {
    pub name: ResolvedName,
    pub kind: OptionalKind,
    pub default: ResolvedDefault,
    pub description: String,
    pub range: Option<Range>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputParam {
    pub name: ResolvedName,
    pub kind: OutputKind,
}

/// An emission-ready function signature.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub abbreviation: String,
    pub description: String,
    pub required: Vec<RequiredParam>,
    pub optional: Vec<OptionalParam>,
    pub outputs: Vec<OutputParam>,
}

impl FunctionSignature {
    /// Resolve every argument of a function.
    pub fn resolve(spec: &FunctionSpec) -> Result<Self, ResolveError> {
        let function = spec.abbreviation.as_str();
        if !is_c_identifier(function) {
            return Err(ResolveError::InvalidAbbreviation {
                function: function.to_string(),
            });
        }

        let required = spec
            .required
            .iter()
            .map(|input| {
                Ok(RequiredParam {
                    name: resolve_name(function, Role::Required, &input.arg)?,
                    kind: resolve_required(function, input)?,
                })
            })
            .collect::<Result<Vec<_>, ResolveError>>()?;

        let optional = spec
            .optional
            .iter()
            .map(|input| {
                let (kind, default) = resolve_optional(function, input)?;
                Ok(OptionalParam {
                    name: resolve_name(function, Role::Optional, &input.arg)?,
                    kind,
                    default,
                    description: input.description.clone(),
                    range: input.range.clone(),
                })
            })
            .collect::<Result<Vec<_>, ResolveError>>()?;

        let outputs = spec
            .outputs
            .iter()
            .map(|output| {
                Ok(OutputParam {
                    name: resolve_name(function, Role::Output, &output.arg)?,
                    kind: resolve_output(function, output)?,
                })
            })
            .collect::<Result<Vec<_>, ResolveError>>()?;

        if required.is_empty() {
            return Err(ResolveError::MissingArgument {
                function: function.to_string(),
                role: Role::Required,
            });
        }
        if outputs.is_empty() {
            return Err(ResolveError::MissingArgument {
                function: function.to_string(),
                role: Role::Output,
            });
        }

        let signature = Self {
            abbreviation: spec.abbreviation.clone(),
            description: spec.description.clone(),
            required,
            optional,
            outputs,
        };
        signature.check_identifiers()?;
        Ok(signature)
    }

    /// Required inputs backed by a fixed record field.
    pub fn intrinsic(&self) -> impl Iterator<Item = &RequiredParam> {
        self.required.iter().filter(|p| p.is_intrinsic())
    }

    /// Required inputs whose record field name is supplied by the caller.
    pub fn explicit(&self) -> impl Iterator<Item = &RequiredParam> {
        self.required.iter().filter(|p| !p.is_intrinsic())
    }

    /// Number of leading positional arguments before the first optional.
    pub fn optional_offset(&self, convention: Convention) -> usize {
        match convention {
            Convention::Array => self.required.len(),
            Convention::Record => 1 + self.explicit().count(),
        }
    }

    /// Position of the `index`-th optional input, counted from the
    /// convention's optional offset.
    pub fn optional_slot(&self, index: usize) -> usize {
        index
    }

    /// Position of the start index argument, counted from the optional offset.
    pub fn start_index_slot(&self) -> usize {
        self.optional.len()
    }

    /// Position of the end index argument, counted from the optional offset.
    pub fn end_index_slot(&self) -> usize {
        self.start_index_slot() + 1
    }

    /// Absolute argument position of a slot under one convention.
    pub fn position(&self, convention: Convention, slot: usize) -> usize {
        self.optional_offset(convention) + slot
    }

    pub fn has_single_output(&self) -> bool {
        self.outputs.len() == 1
    }

    /// Native lookback function name (e.g., `TA_SMA_Lookback`).
    pub fn lookback_function(&self) -> String {
        format!("TA_{}_Lookback", self.abbreviation)
    }

    /// Native computation function name (e.g., `TA_SMA`).
    pub fn native_function(&self) -> String {
        format!("TA_{}", self.abbreviation)
    }

    /// Generated entry point name (e.g., `TA_FUNC_SMA`).
    pub fn entry_point(&self) -> String {
        format!("TA_FUNC_{}", self.abbreviation)
    }

    fn names(&self) -> impl Iterator<Item = &ResolvedName> {
        self.required
            .iter()
            .map(|p| &p.name)
            .chain(self.optional.iter().map(|p| &p.name))
            .chain(self.outputs.iter().map(|p| &p.name))
    }

    fn check_identifiers(&self) -> Result<(), ResolveError> {
        let mut seen = HashSet::new();
        for name in self.names() {
            if RESERVED_IDENTIFIERS.contains(&name.canonical()) {
                return Err(ResolveError::ReservedName {
                    function: self.abbreviation.clone(),
                    identifier: name.canonical().to_string(),
                });
            }
            for surface in [Surface::NativeBuffer, Surface::RuntimeValue, Surface::FieldName] {
                let identifier = name.on(surface);
                if !seen.insert(identifier.clone()) {
                    return Err(ResolveError::DuplicateName {
                        function: self.abbreviation.clone(),
                        identifier,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Resolve every function of the model, in order.
pub fn resolve_all(api: &ApiIR) -> Result<Vec<FunctionSignature>, ResolveError> {
    api.functions.iter().map(FunctionSignature::resolve).collect()
}
