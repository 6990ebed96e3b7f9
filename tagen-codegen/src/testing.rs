//! Test fixtures for artifact generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. The functions mirror real entries of `ta_func_api.xml`.

use std::fs;

use eyre::Result;
use tagen_ir::{
    ApiIR, Argument, FunctionSpec, OptionalInput, OutputArgument, Range, RequiredInput,
};

fn spec(abbreviation: &str, description: &str, group: &str) -> FunctionSpec {
    FunctionSpec {
        abbreviation: abbreviation.to_string(),
        camel_case_name: None,
        description: description.to_string(),
        group: Some(group.to_string()),
        flags: vec![],
        required: vec![],
        optional: vec![],
        outputs: vec![],
    }
}

fn required(name: &str, ty: &str) -> RequiredInput {
    RequiredInput {
        arg: Argument::new(name, ty),
    }
}

fn optional(name: &str, ty: &str, default: &str, description: &str) -> OptionalInput {
    OptionalInput {
        arg: Argument::new(name, ty),
        default_value: default.to_string(),
        description: description.to_string(),
        range: None,
    }
}

fn period(default: &str, description: &str) -> OptionalInput {
    OptionalInput {
        range: Some(Range {
            minimum: Some("2".to_string()),
            maximum: Some("100000".to_string()),
            ..Range::default()
        }),
        ..optional("Time Period", "Integer", default, description)
    }
}

fn output(name: &str, ty: &str) -> OutputArgument {
    OutputArgument {
        arg: Argument::new(name, ty),
        flags: vec!["Line".to_string()],
    }
}

/// Single array input, one integer option, one output.
pub fn sma() -> FunctionSpec {
    FunctionSpec {
        camel_case_name: Some("Sma".to_string()),
        required: vec![required("inReal", "Double Array")],
        optional: vec![period("30", "Number of period")],
        outputs: vec![output("outReal", "Double Array")],
        ..spec("SMA", "Simple Moving Average", "Overlap Studies")
    }
}

/// Single array input, three outputs.
pub fn macd() -> FunctionSpec {
    FunctionSpec {
        required: vec![required("inReal", "Double Array")],
        optional: vec![
            optional("Fast Period", "Integer", "12", "Number of period for the fast MA"),
            optional("Slow Period", "Integer", "26", "Number of period for the slow MA"),
            optional("Signal Period", "Integer", "9", "Smoothing for the signal line"),
        ],
        outputs: vec![
            output("outMACD", "Double Array"),
            output("outMACDSignal", "Double Array"),
            output("outMACDHist", "Double Array"),
        ],
        ..spec(
            "MACD",
            "Moving Average Convergence/Divergence",
            "Momentum Indicators",
        )
    }
}

/// Intrinsic record inputs with double options.
pub fn sar() -> FunctionSpec {
    FunctionSpec {
        required: vec![required("High", "High"), required("Low", "Low")],
        optional: vec![
            optional("Acceleration", "Double", "0.02", "Acceleration Factor"),
            optional("Maximum", "Double", "0.2", "Acceleration Factor Maximum value"),
        ],
        outputs: vec![output("outReal", "Double Array")],
        ..spec("SAR", "Parabolic SAR", "Overlap Studies")
    }
}

/// Moving average type option.
pub fn ma() -> FunctionSpec {
    FunctionSpec {
        required: vec![required("inReal", "Double Array")],
        optional: vec![
            period("30", "Number of period"),
            optional("MA Type", "MA Type", "0", "Type of Moving Average"),
        ],
        outputs: vec![output("outReal", "Double Array")],
        ..spec("MA", "Moving average", "Overlap Studies")
    }
}

/// Four intrinsic inputs and an integer output.
pub fn cdl_doji() -> FunctionSpec {
    FunctionSpec {
        required: vec![
            required("Open", "Open"),
            required("High", "High"),
            required("Low", "Low"),
            required("Close", "Close"),
        ],
        outputs: vec![output("outInteger", "Integer Array")],
        ..spec("CDLDOJI", "Doji", "Pattern Recognition")
    }
}

/// Two explicit inputs.
pub fn mavp() -> FunctionSpec {
    FunctionSpec {
        required: vec![
            required("inReal", "Double Array"),
            required("inPeriods", "Double Array"),
        ],
        optional: vec![
            optional("Minimum Period", "Integer", "2", "Minimum period"),
            optional("Maximum Period", "Integer", "30", "Maximum period"),
            optional("MA Type", "MA Type", "0", "Type of Moving Average"),
        ],
        outputs: vec![output("outReal", "Double Array")],
        ..spec("MAVP", "Moving average with variable period", "Overlap Studies")
    }
}

/// Build a model from the given functions.
pub fn api(functions: impl IntoIterator<Item = FunctionSpec>) -> ApiIR {
    ApiIR {
        functions: functions.into_iter().collect(),
    }
}

/// Every fixture, in a stable order.
pub fn all() -> ApiIR {
    api([sma(), macd(), sar(), ma(), cdl_doji(), mavp()])
}

/// Create a temporary project root holding an empty file at each relative
/// path, for build descriptor scans.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn native_tree(paths: &[&str]) -> Result<tempfile::TempDir> {
    let temp_dir = tempfile::TempDir::new()?;
    for path in paths {
        let path = temp_dir.path().join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, "")?;
    }
    Ok(temp_dir)
}
