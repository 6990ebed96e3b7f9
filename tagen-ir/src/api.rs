//! Function API model.
//!
//! ```text
//! ta_func_api.xml → Schema (parsing) → ApiIR (lowering) → Generator (codegen)
//! ```

use serde::Serialize;

/// The whole API surface, in schema order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiIR {
    /// Function definitions.
    pub functions: Vec<FunctionSpec>,
}

impl ApiIR {
    /// Look up a function by abbreviation.
    pub fn function(&self, abbreviation: &str) -> Option<&FunctionSpec> {
        self.functions
            .iter()
            .find(|f| f.abbreviation == abbreviation)
    }

    /// Number of functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if there are no functions.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// The contract of one library function.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    /// Unique short identifier (e.g., "SMA"). Used as exported and native name.
    pub abbreviation: String,
    /// Camel case name (e.g., "Sma").
    pub camel_case_name: Option<String>,
    /// Human description.
    pub description: String,
    /// Group the function belongs to (e.g., "Overlap Studies").
    pub group: Option<String>,
    /// Function level flags.
    pub flags: Vec<String>,
    /// Required inputs, in positional order.
    pub required: Vec<RequiredInput>,
    /// Optional inputs, in positional order.
    pub optional: Vec<OptionalInput>,
    /// Outputs, in declaration order.
    pub outputs: Vec<OutputArgument>,
}

/// Name and type collections shared by every argument role.
///
/// Both collections are expected to contain exactly one element. The lists
/// are kept as parsed so that violations can be reported precisely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub names: Vec<String>,
    pub types: Vec<String>,
}

impl Argument {
    /// Create an argument with a single name and type.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            types: vec![ty.into()],
        }
    }

    /// The name, if the collection holds exactly one.
    pub fn name(&self) -> Option<&str> {
        single(&self.names)
    }

    /// The declared type, if the collection holds exactly one.
    pub fn declared_type(&self) -> Option<&str> {
        single(&self.types)
    }

    /// Best-effort label for diagnostics.
    pub fn label(&self) -> String {
        if self.names.is_empty() {
            "<unnamed>".to_string()
        } else {
            self.names.join("|")
        }
    }
}

fn single(values: &[String]) -> Option<&str> {
    match values {
        [value] => Some(value.as_str()),
        _ => None,
    }
}

/// A required input argument.
#[derive(Debug, Clone, Serialize)]
pub struct RequiredInput {
    #[serde(flatten)]
    pub arg: Argument,
}

/// An optional input argument.
#[derive(Debug, Clone, Serialize)]
pub struct OptionalInput {
    #[serde(flatten)]
    pub arg: Argument,
    /// Default value as written in the schema.
    pub default_value: String,
    /// Short description for documentation.
    pub description: String,
    /// Accepted numeric range, when the schema provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

/// An output argument.
#[derive(Debug, Clone, Serialize)]
pub struct OutputArgument {
    #[serde(flatten)]
    pub arg: Argument,
    /// Output flags (e.g., "Line", "Upper Limit"). Not used by emission.
    pub flags: Vec<String>,
}

/// Numeric range metadata of an optional argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Range {
    pub minimum: Option<String>,
    pub maximum: Option<String>,
    pub suggested_start: Option<String>,
    pub suggested_end: Option<String>,
    pub suggested_increment: Option<String>,
}
