//! The TypeScript declaration file.

use std::path::{Path, PathBuf};

use tagen_codegen::{
    builder::CodeBuilder,
    language::TypeMapper,
    resolve::{FunctionSignature, OptionalKind, OptionalParam, RequiredKind, ResolvedDefault},
};
use tagen_core::{GENERATED_NOTICE, GeneratedFile};
use tagen_ir::{MaType, Range, RecordField};

use crate::TypeScriptTypeMapper;

/// `talib-binding.generated.d.ts`: the `MATypes` enum, the `Record`
/// interface and two documented overloads per function.
pub struct DeclarationTs<'a> {
    path: &'a Path,
    functions: &'a [FunctionSignature],
}

impl<'a> DeclarationTs<'a> {
    pub fn new(path: &'a Path, functions: &'a [FunctionSignature]) -> Self {
        Self { path, functions }
    }

    fn prelude(&self, b: CodeBuilder) -> CodeBuilder {
        b.comment("//", GENERATED_NOTICE)
            .blank()
            .jsdoc(["Moving average types accepted by `MA Type` options."])
            .block_with_close("export declare enum MATypes {", "}", |b| {
                b.each(MaType::ALL, |b, ma| {
                    b.line(&format!("{} = {},", ma.symbol(), ma.code()))
                })
            })
            .blank()
            .jsdoc(["One bar of market data, read by the record overloads."])
            .block_with_close("export interface Record {", "}", |b| {
                b.each(RecordField::ALL, |b, field| {
                    b.line(&format!("{}: number;", field.key()))
                })
            })
    }
}

impl GeneratedFile for DeclarationTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        let builder = self.prelude(CodeBuilder::typescript());
        self.functions
            .iter()
            .fold(builder, |b, sig| {
                let overloads = Overloads::new(sig);
                let b = overloads.array(b.blank());
                overloads.record(b.blank())
            })
            .build()
    }
}

/// The array and record overloads of one function.
struct Overloads<'a> {
    sig: &'a FunctionSignature,
    types: TypeScriptTypeMapper,
}

impl<'a> Overloads<'a> {
    fn new(sig: &'a FunctionSignature) -> Self {
        Self {
            sig,
            types: TypeScriptTypeMapper,
        }
    }

    fn array(&self, b: CodeBuilder) -> CodeBuilder {
        let inputs = self.sig.required.iter().map(|p| {
            (
                format!("{}: {}", p.name.declaration(), self.types.map_required(p.kind)),
                format!("@param {} - {}", p.name.declaration(), describe_required(p.kind)),
            )
        });
        self.declare(b, inputs.collect())
    }

    fn record(&self, b: CodeBuilder) -> CodeBuilder {
        let fields: Vec<_> = self
            .sig
            .intrinsic()
            .filter_map(|p| p.kind.record_field())
            .map(|f| format!("`{}`", f.key()))
            .collect();
        let records_doc = if fields.is_empty() {
            "@param records - Input records".to_string()
        } else {
            format!("@param records - Input records, reading {}", fields.join(", "))
        };

        let names = self.sig.explicit().map(|p| {
            (
                format!("{}: string", p.name.field()),
                format!(
                    "@param {} - Record field holding {}",
                    p.name.field(),
                    p.name.canonical()
                ),
            )
        });

        let inputs = std::iter::once(("records: Record[]".to_string(), records_doc))
            .chain(names)
            .collect();
        self.declare(b, inputs)
    }

    /// Emit one documented overload after the given leading parameters.
    fn declare(&self, b: CodeBuilder, inputs: Vec<(String, String)>) -> CodeBuilder {
        let (mut params, mut docs): (Vec<_>, Vec<_>) = inputs.into_iter().unzip();

        for p in &self.sig.optional {
            params.push(format!(
                "{}?: {}",
                p.name.declaration(),
                self.types.map_optional(p.kind)
            ));
            docs.push(format!("@param {} - {}", p.name.declaration(), describe_optional(p)));
        }
        params.push("startIdx?: number".to_string());
        params.push("endIdx?: number".to_string());
        docs.push("@param startIdx - First index to compute. Default `0`".to_string());
        docs.push("@param endIdx - Last index to compute. Default: the last input index".to_string());
        docs.push(format!("@returns {}", self.describe_return()));

        let summary = (!self.sig.description.is_empty())
            .then(|| [self.sig.description.clone(), String::new()])
            .into_iter()
            .flatten();

        b.jsdoc(summary.chain(docs)).line(&format!(
            "export declare function {}({}): {};",
            self.sig.abbreviation,
            params.join(", "),
            self.types.map_return(self.sig.outputs.iter().map(|p| p.kind))
        ))
    }

    fn describe_return(&self) -> String {
        let names: Vec<_> = self
            .sig
            .outputs
            .iter()
            .map(|p| p.name.declaration())
            .collect();
        match names.as_slice() {
            [single] => single.clone(),
            _ => format!("[{}]", names.join(", ")),
        }
    }
}

fn describe_required(kind: RequiredKind) -> String {
    match kind {
        RequiredKind::Intrinsic(field) => format!("{} values", field.key()),
        RequiredKind::Explicit(element) => format!("{} Array input", element.label()),
    }
}

fn describe_optional(p: &OptionalParam) -> String {
    let default = match &p.default {
        ResolvedDefault::MaType(ma) => format!("MATypes.{}", ma.symbol()),
        ResolvedDefault::Number(literal) => literal.clone(),
    };
    let kind = match p.kind {
        OptionalKind::Integer => "Integer",
        OptionalKind::Double => "Double",
        OptionalKind::MaType => "MA Type",
    };

    let mut text = String::new();
    if !p.description.is_empty() {
        text.push_str(&p.description);
        text.push_str(". ");
    }
    text.push_str(&format!("{}, default `{}`", kind, default));
    if let Some(range) = p.range.as_ref().and_then(describe_range) {
        text.push_str(&format!(", range {}", range));
    }
    text
}

fn describe_range(range: &Range) -> Option<String> {
    match (&range.minimum, &range.maximum) {
        (Some(min), Some(max)) => Some(format!("`{}..{}`", min, max)),
        (Some(min), None) => Some(format!("`>= {}`", min)),
        (None, Some(max)) => Some(format!("`<= {}`", max)),
        (None, None) => None,
    }
}
