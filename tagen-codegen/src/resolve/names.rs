//! Canonical argument identifiers.
//!
//! Every argument gets one canonical identifier: its role prefix (`in`,
//! `opt`, `out`) followed by the schema name with the first letter
//! upper-cased, hyphens stripped and whitespace collapsed into `_`. Every
//! place the argument appears in generated code derives its spelling from
//! that identifier through a [`Surface`].

use tagen_core::{starts_with_word, to_identifier, to_upper_first};
use tagen_ir::{Argument, Role};

use super::ResolveError;

/// Identifiers the binding template declares itself.
///
/// Only names that a role prefix could produce are listed.
pub const RESERVED_IDENTIFIERS: &[&str] = &[
    "inFirst",
    "inLength",
    "optOffset",
    "outBegIdx",
    "outNBElement",
];

/// A place an argument identifier appears in generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Native buffer or scalar local (`inReal`).
    NativeBuffer,
    /// Handle to the runtime array value (`inReal_JS`).
    RuntimeValue,
    /// Record field key local (`inRealName`).
    FieldName,
    /// Parameter name in declarations (`inReal`).
    Declaration,
}

impl Surface {
    /// All surfaces.
    pub const ALL: [Surface; 4] = [
        Surface::NativeBuffer,
        Surface::RuntimeValue,
        Surface::FieldName,
        Surface::Declaration,
    ];

    /// Suffix appended to the canonical identifier.
    pub fn suffix(&self) -> &'static str {
        match self {
            Surface::NativeBuffer | Surface::Declaration => "",
            Surface::RuntimeValue => "_JS",
            Surface::FieldName => "Name",
        }
    }
}

/// Canonical identifier of one argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedName {
    raw: String,
    canonical: String,
}

impl ResolvedName {
    /// Name as written in the schema.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical identifier.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Spelling of the identifier on the given surface.
    pub fn on(&self, surface: Surface) -> String {
        format!("{}{}", self.canonical, surface.suffix())
    }

    pub fn buffer(&self) -> String {
        self.on(Surface::NativeBuffer)
    }

    pub fn runtime(&self) -> String {
        self.on(Surface::RuntimeValue)
    }

    pub fn field(&self) -> String {
        self.on(Surface::FieldName)
    }

    pub fn declaration(&self) -> String {
        self.on(Surface::Declaration)
    }
}

/// Compute the canonical identifier for a raw schema name.
///
/// # Example
///
/// ```
/// use tagen_codegen::resolve::canonical_name;
/// use tagen_ir::Role;
///
/// assert_eq!(canonical_name(Role::Optional, "Time Period"), "optTime_Period");
/// assert_eq!(canonical_name(Role::Required, "inReal"), "inReal");
/// assert_eq!(canonical_name(Role::Output, "Real"), "outReal");
/// ```
pub fn canonical_name(role: Role, raw: &str) -> String {
    let ident = to_identifier(raw);
    if starts_with_word(&ident, role.prefix()) {
        ident
    } else {
        format!("{}{}", role.prefix(), to_upper_first(&ident))
    }
}

/// Resolve the name of an argument of `function`.
pub fn resolve_name(
    function: &str,
    role: Role,
    arg: &Argument,
) -> Result<ResolvedName, ResolveError> {
    let raw = arg.name().ok_or_else(|| ResolveError::Classification {
        function: function.to_string(),
        role,
        argument: arg.label(),
        field: "Name",
        count: arg.names.len(),
    })?;

    if to_identifier(raw).is_empty() {
        return Err(ResolveError::Classification {
            function: function.to_string(),
            role,
            argument: arg.label(),
            field: "Name",
            count: 0,
        });
    }

    Ok(ResolvedName {
        raw: raw.to_string(),
        canonical: canonical_name(role, raw),
    })
}
