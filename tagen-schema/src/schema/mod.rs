//! Function schema (`ta_func_api.xml`) parsing.
//!
//! The XML format wraps almost every field in a collection: argument groups
//! hold argument lists, flags live under a `<Flags>` element, and so on. The
//! raw serde types below mirror that shape; [`flatten`] turns it into the
//! plain ordered lists of [`ApiIR`] right after parsing, so nothing
//! downstream has to unwrap singletons.

mod parse;

pub use parse::{parse_schema, schema_from_file, schema_from_str};
use serde::Deserialize;
use tagen_ir::{ApiIR, Argument, FunctionSpec, OptionalInput, OutputArgument, Range, RequiredInput};

#[derive(Debug, Deserialize)]
struct RawFunctions {
    #[serde(rename = "FinancialFunction", default)]
    functions: Vec<RawFunction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawFunction {
    abbreviation: String,
    #[serde(default)]
    camel_case_name: Option<String>,
    #[serde(default)]
    short_description: Option<String>,
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    flags: Vec<RawFlags>,
    #[serde(default)]
    required_input_arguments: Vec<RawRequiredGroup>,
    #[serde(default)]
    optional_input_arguments: Vec<RawOptionalGroup>,
    #[serde(default)]
    output_arguments: Vec<RawOutputGroup>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFlags {
    #[serde(rename = "Flag", default)]
    flags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawRequiredGroup {
    #[serde(rename = "RequiredInputArgument", default)]
    arguments: Vec<RawArgument>,
}

#[derive(Debug, Deserialize)]
struct RawOptionalGroup {
    #[serde(rename = "OptionalInputArgument", default)]
    arguments: Vec<RawOptionalArgument>,
}

#[derive(Debug, Deserialize)]
struct RawOutputGroup {
    #[serde(rename = "OutputArgument", default)]
    arguments: Vec<RawOutputArgument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawArgument {
    #[serde(rename = "Name", default)]
    names: Vec<String>,
    #[serde(rename = "Type", default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawOptionalArgument {
    #[serde(rename = "Name", default)]
    names: Vec<String>,
    #[serde(rename = "Type", default)]
    types: Vec<String>,
    #[serde(default)]
    short_description: Option<String>,
    #[serde(default)]
    default_value: Option<String>,
    #[serde(default)]
    range: Vec<RawRange>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawOutputArgument {
    #[serde(rename = "Name", default)]
    names: Vec<String>,
    #[serde(rename = "Type", default)]
    types: Vec<String>,
    #[serde(default)]
    flags: Vec<RawFlags>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawRange {
    #[serde(default)]
    minimum: Option<String>,
    #[serde(default)]
    maximum: Option<String>,
    #[serde(default)]
    suggested_start: Option<String>,
    #[serde(default)]
    suggested_end: Option<String>,
    #[serde(default)]
    suggested_increment: Option<String>,
}

/// Flatten the raw document into the normalized model.
fn flatten(raw: RawFunctions) -> ApiIR {
    ApiIR {
        functions: raw.functions.into_iter().map(flatten_function).collect(),
    }
}

fn flatten_function(raw: RawFunction) -> FunctionSpec {
    FunctionSpec {
        abbreviation: raw.abbreviation.trim().to_string(),
        camel_case_name: raw.camel_case_name,
        description: raw.short_description.unwrap_or_default(),
        group: raw.group_id,
        flags: flatten_flags(raw.flags),
        required: raw
            .required_input_arguments
            .into_iter()
            .flat_map(|group| group.arguments)
            .map(|arg| RequiredInput {
                arg: Argument {
                    names: arg.names,
                    types: arg.types,
                },
            })
            .collect(),
        optional: raw
            .optional_input_arguments
            .into_iter()
            .flat_map(|group| group.arguments)
            .map(|arg| OptionalInput {
                arg: Argument {
                    names: arg.names,
                    types: arg.types,
                },
                default_value: arg.default_value.unwrap_or_default(),
                description: arg.short_description.unwrap_or_default(),
                range: arg.range.into_iter().next().map(|r| Range {
                    minimum: r.minimum,
                    maximum: r.maximum,
                    suggested_start: r.suggested_start,
                    suggested_end: r.suggested_end,
                    suggested_increment: r.suggested_increment,
                }),
            })
            .collect(),
        outputs: raw
            .output_arguments
            .into_iter()
            .flat_map(|group| group.arguments)
            .map(|arg| OutputArgument {
                arg: Argument {
                    names: arg.names,
                    types: arg.types,
                },
                flags: flatten_flags(arg.flags),
            })
            .collect(),
    }
}

fn flatten_flags(groups: Vec<RawFlags>) -> Vec<String> {
    groups.into_iter().flat_map(|group| group.flags).collect()
}
