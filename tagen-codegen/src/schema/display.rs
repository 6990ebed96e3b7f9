//! Function list display formatting.
//!
//! # Example
//!
//! ```ignore
//! use tagen_codegen::schema::{DisplayStyle, FunctionGroups, FunctionListDisplay};
//!
//! let groups = FunctionGroups::new(&api);
//! let display = FunctionListDisplay::new(&groups)
//!     .style(DisplayStyle::WithSignature)
//!     .indent("  ");
//!
//! println!("{}", display);
//! ```

use std::fmt;

use tagen_ir::{Argument, FunctionSpec, Role};

use super::FunctionGroups;
use crate::resolve::canonical_name;

/// Display style for function lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Abbreviations only.
    ///
    /// ```text
    /// Overlap Studies
    ///   SMA
    ///   SAR
    /// ```
    #[default]
    Simple,

    /// Abbreviations with descriptions.
    ///
    /// ```text
    /// Overlap Studies
    ///   SMA - Simple Moving Average
    /// ```
    WithDescriptions,

    /// Abbreviations with the argument layout.
    ///
    /// ```text
    /// Overlap Studies
    ///   SMA(inReal, [optTime_Period=30]) -> outReal
    /// ```
    WithSignature,
}

/// Declarative function list formatter.
#[derive(Debug, Clone)]
pub struct FunctionListDisplay<'a> {
    groups: &'a FunctionGroups<'a>,
    style: DisplayStyle,
    indent_str: &'a str,
}

impl<'a> FunctionListDisplay<'a> {
    /// Create a new display formatter for grouped functions.
    pub fn new(groups: &'a FunctionGroups<'a>) -> Self {
        Self {
            groups,
            style: DisplayStyle::default(),
            indent_str: "  ",
        }
    }

    /// Set the display style.
    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation string (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    /// Render the list to a string.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for (group, functions) in self.groups.iter() {
            output.push_str(group);
            output.push('\n');
            for function in functions {
                output.push_str(self.indent_str);
                output.push_str(&self.format_function(function));
                output.push('\n');
            }
        }
        output
    }

    fn format_function(&self, function: &FunctionSpec) -> String {
        match self.style {
            DisplayStyle::Simple => function.abbreviation.clone(),
            DisplayStyle::WithDescriptions => {
                format!("{} - {}", function.abbreviation, function.description)
            }
            DisplayStyle::WithSignature => format_signature(function),
        }
    }
}

fn format_signature(function: &FunctionSpec) -> String {
    let inputs = function
        .required
        .iter()
        .map(|a| display_name(Role::Required, &a.arg))
        .chain(function.optional.iter().map(|a| {
            format!(
                "[{}={}]",
                display_name(Role::Optional, &a.arg),
                a.default_value
            )
        }))
        .collect::<Vec<_>>()
        .join(", ");

    let outputs = function
        .outputs
        .iter()
        .map(|a| display_name(Role::Output, &a.arg))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{}({}) -> {}", function.abbreviation, inputs, outputs)
}

fn display_name(role: Role, arg: &Argument) -> String {
    match arg.name() {
        Some(name) => canonical_name(role, name),
        None => arg.label(),
    }
}

impl fmt::Display for FunctionListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = self.render();
        // Remove trailing newline for Display
        write!(f, "{}", output.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_display_style_default() {
        assert_eq!(DisplayStyle::default(), DisplayStyle::Simple);
    }

    #[test]
    fn test_simple() {
        let api = testing::api([testing::sma(), testing::macd()]);
        let groups = FunctionGroups::new(&api);

        let out = FunctionListDisplay::new(&groups).to_string();

        assert_eq!(out, "Overlap Studies\n  SMA\nMomentum Indicators\n  MACD");
    }

    #[test]
    fn test_with_descriptions() {
        let api = testing::api([testing::sar()]);
        let groups = FunctionGroups::new(&api);

        let out = FunctionListDisplay::new(&groups)
            .style(DisplayStyle::WithDescriptions)
            .indent("    ")
            .render();

        assert_eq!(out, "Overlap Studies\n    SAR - Parabolic SAR\n");
    }

    #[test]
    fn test_with_signature() {
        let api = testing::api([testing::ma(), testing::macd()]);
        let groups = FunctionGroups::new(&api);

        let out = FunctionListDisplay::new(&groups)
            .style(DisplayStyle::WithSignature)
            .render();

        assert_eq!(
            out,
            "Overlap Studies\n  MA(inReal, [optTime_Period=30], [optMA_Type=0]) -> outReal\n\
             Momentum Indicators\n  MACD(inReal, [optFast_Period=12], [optSlow_Period=26], \
             [optSignal_Period=9]) -> outMACD, outMACDSignal, outMACDHist\n"
        );
    }
}
