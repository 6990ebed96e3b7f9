//! Emission of one native entry point.
//!
//! Every early return (empty input, bad arguments, range error, empty output
//! window) happens before the first allocation. After allocation every exit
//! releases every buffer: a failed element read in either fill loop, a
//! failed native call, and the normal return.

use tagen_codegen::{
    builder::CodeBuilder,
    language::TypeMapper,
    resolve::{Convention, FunctionSignature, OptionalKind},
};

use crate::NativeTypeMapper;

/// Emits `TA_FUNC_<ABBR>` for one resolved signature.
pub struct NativeFunction<'a> {
    sig: &'a FunctionSignature,
    types: NativeTypeMapper,
}

impl<'a> NativeFunction<'a> {
    pub fn new(sig: &'a FunctionSignature) -> Self {
        Self {
            sig,
            types: NativeTypeMapper,
        }
    }

    /// Append the whole function definition.
    pub fn emit(&self, b: CodeBuilder) -> CodeBuilder {
        let header = format!(
            "void {}(const Nan::FunctionCallbackInfo<v8::Value> &info) {{",
            self.sig.entry_point()
        );

        b.block_with_close(&header, "}", |b| {
            let b = self.first_argument(b);
            let b = self.required_handles(b);
            let b = self.optional_values(b);
            let b = self.index_range(b);
            let b = self.output_window(b);
            let b = self.allocate(b);
            let b = self.fill(b);
            let b = self.call(b);
            self.collect(b)
        })
    }

    fn first_argument(&self, b: CodeBuilder) -> CodeBuilder {
        let b = b.line("int argc = info.Length();");
        let b = self.guard(
            b,
            "argc < 1 || !info[0]->IsArray()",
            "TypeError",
            "expected an array as the first argument",
        );
        b.line("v8::Local<v8::Array> inFirst = info[0].As<v8::Array>();")
            .line("int inLength = (int) inFirst->Length();")
            .block_with_close("if (inLength == 0) {", "}", |b| self.empty_return(b))
            .line("v8::Local<v8::Value> firstItem;")
            .block_with_close("if (!Nan::Get(inFirst, 0).ToLocal(&firstItem)) {", "}", |b| {
                b.line("return;")
            })
            .line("bool isRecord = firstItem->IsObject();")
    }

    fn required_handles(&self, b: CodeBuilder) -> CodeBuilder {
        let record_offset = self.sig.optional_offset(Convention::Record);
        let array_offset = self.sig.optional_offset(Convention::Array);

        let b = b.each(&self.sig.required, |b, p| {
            b.line(&format!("v8::Local<v8::Array> {};", p.name.runtime()))
                .line(&format!("v8::Local<v8::String> {};", p.name.field()))
        });

        if_else(
            b,
            "isRecord",
            |b| {
                let b = self.sig.explicit().enumerate().fold(b, |b, (j, p)| {
                    let position = 1 + j;
                    self.guard(
                        b,
                        &format!("argc <= {0} || !info[{0}]->IsString()", position),
                        "TypeError",
                        &format!("expected a field name for {}", p.name.canonical()),
                    )
                    .line(&format!(
                        "{} = info[{}].As<v8::String>();",
                        p.name.field(),
                        position
                    ))
                });
                self.sig
                    .required
                    .iter()
                    .filter_map(|p| p.kind.record_field().map(|field| (p, field)))
                    .fold(b, |b, (p, field)| {
                        b.line(&format!(
                            "{} = Nan::New(\"{}\").ToLocalChecked();",
                            p.name.field(),
                            field.key()
                        ))
                    })
            },
            |b| {
                self.sig
                    .required
                    .iter()
                    .enumerate()
                    .fold(b, |b, (position, p)| {
                        if position == 0 {
                            return b.line(&format!("{} = inFirst;", p.name.runtime()));
                        }
                        self.guard(
                            b,
                            &format!("argc <= {0} || !info[{0}]->IsArray()", position),
                            "TypeError",
                            &format!("expected an array for {}", p.name.canonical()),
                        )
                        .line(&format!(
                            "{} = info[{}].As<v8::Array>();",
                            p.name.runtime(),
                            position
                        ))
                    })
            },
        )
        .line(&format!(
            "int optOffset = isRecord ? {} : {};",
            record_offset, array_offset
        ))
    }

    fn optional_values(&self, b: CodeBuilder) -> CodeBuilder {
        b.each(self.sig.optional.iter().enumerate(), |b, (i, p)| {
            let name = p.name.buffer();
            let position = offset_expr(self.sig.optional_slot(i));
            b.line(&format!(
                "{} {} = {};",
                self.types.map_optional(p.kind),
                name,
                p.default.native()
            ))
            .block_with_close(
                &format!(
                    "if (argc > {0} && info[{0}]->{1}()) {{",
                    position,
                    self.types.runtime_check(p.kind)
                ),
                "}",
                |b| {
                    b.line(&format!(
                        "{} = Nan::To<{}>(info[{}]).FromJust();",
                        name,
                        self.types.conversion(p.kind),
                        position
                    ))
                },
            )
        })
    }

    fn index_range(&self, b: CodeBuilder) -> CodeBuilder {
        let start = offset_expr(self.sig.start_index_slot());
        let end = offset_expr(self.sig.end_index_slot());

        let b = b
            .line("int startIdx = 0;")
            .line("int endIdx = inLength - 1;")
            .block_with_close(
                &format!("if (argc > {0} && info[{0}]->IsInt32()) {{", start),
                "}",
                |b| b.line(&format!("startIdx = Nan::To<int32_t>(info[{}]).FromJust();", start)),
            )
            .block_with_close(
                &format!("if (argc > {0} && info[{0}]->IsInt32()) {{", end),
                "}",
                |b| b.line(&format!("endIdx = Nan::To<int32_t>(info[{}]).FromJust();", end)),
            );

        self.guard(
            b,
            "startIdx < 0 || startIdx > endIdx || endIdx >= inLength",
            "RangeError",
            "expected 0 <= startIdx <= endIdx < input length",
        )
    }

    fn output_window(&self, b: CodeBuilder) -> CodeBuilder {
        b.line(&format!(
            "int lookback = {}({});",
            self.sig.lookback_function(),
            self.optional_arguments().join(", ")
        ))
        .line("int effectiveStart = lookback > startIdx ? lookback : startIdx;")
        .line("int outputLength = effectiveStart > endIdx ? 0 : endIdx - effectiveStart + 1;")
        .block_with_close("if (outputLength == 0) {", "}", |b| self.empty_return(b))
    }

    fn allocate(&self, b: CodeBuilder) -> CodeBuilder {
        b.each(&self.sig.required, |b, p| {
            let ty = self.types.map_required(p.kind);
            b.line(&format!(
                "{0} *{1} = new {0}[inLength];",
                ty,
                p.name.buffer()
            ))
        })
        .each(&self.sig.outputs, |b, p| {
            let ty = self.types.map_output(p.kind);
            b.line(&format!(
                "{0} *{1} = new {0}[outputLength];",
                ty,
                p.name.buffer()
            ))
        })
    }

    /// Copy every input element into its buffer.
    ///
    /// `ReadElement` fails when a getter throws or a value cannot be
    /// converted; the pending exception is left for the caller.
    fn fill(&self, b: CodeBuilder) -> CodeBuilder {
        let loop_header = "for (int i = 0; i < inLength; i++) {";

        if_else(
            b,
            "isRecord",
            |b| {
                b.block_with_close(loop_header, "}", |b| {
                    let b = b
                        .line("v8::Local<v8::Value> item;")
                        .line("bool read = Nan::Get(inFirst, i).ToLocal(&item);")
                        .line(
                            "v8::Local<v8::Object> record = \
                             read && item->IsObject() ? item.As<v8::Object>() : Nan::New<v8::Object>();",
                        );
                    let b = b.each(&self.sig.required, |b, p| {
                        b.line(&format!(
                            "read = read && ReadElement(record, {}, &{}[i]);",
                            p.name.field(),
                            p.name.buffer()
                        ))
                    });
                    self.release_unless_read(b)
                })
            },
            |b| {
                b.block_with_close(loop_header, "}", |b| {
                    let b = b.line("bool read = true;").each(&self.sig.required, |b, p| {
                        b.line(&format!(
                            "read = read && ReadElement({}, Nan::New(i), &{}[i]);",
                            p.name.runtime(),
                            p.name.buffer()
                        ))
                    });
                    self.release_unless_read(b)
                })
            },
        )
    }

    fn release_unless_read(&self, b: CodeBuilder) -> CodeBuilder {
        b.block_with_close("if (!read) {", "}", |b| self.release(b).line("return;"))
    }

    fn call(&self, b: CodeBuilder) -> CodeBuilder {
        let arguments: Vec<String> = ["startIdx".to_string(), "endIdx".to_string()]
            .into_iter()
            .chain(self.sig.required.iter().map(|p| p.name.buffer()))
            .chain(self.optional_arguments())
            .chain(["&outBegIdx".to_string(), "&outNBElement".to_string()])
            .chain(self.sig.outputs.iter().map(|p| p.name.buffer()))
            .collect();

        b.line("int outBegIdx = 0;")
            .line("int outNBElement = 0;")
            .line(&format!(
                "TA_RetCode retCode = {}({});",
                self.sig.native_function(),
                arguments.join(", ")
            ))
            .block_with_close("if (retCode != TA_SUCCESS) {", "}", |b| {
                self.release(b)
                    .line(&format!(
                        "ThrowRetCode(\"{}\", retCode);",
                        self.sig.native_function()
                    ))
                    .line("return;")
            })
    }

    fn collect(&self, b: CodeBuilder) -> CodeBuilder {
        let b = b.each(&self.sig.outputs, |b, p| {
            let js = p.name.runtime();
            b.line(&format!(
                "v8::Local<v8::Array> {} = Nan::New<v8::Array>(outNBElement);",
                js
            ))
            .block_with_close("for (int i = 0; i < outNBElement; i++) {", "}", |b| {
                b.line(&format!(
                    "Nan::Set({}, i, Nan::New<{}>({}[i]));",
                    js,
                    self.types.boxed(p.kind),
                    p.name.buffer()
                ))
            })
        });
        let b = self.release(b);

        if self.sig.has_single_output() {
            let js = self.sig.outputs[0].name.runtime();
            return b.line(&format!("info.GetReturnValue().Set({});", js));
        }

        b.line(&format!(
            "v8::Local<v8::Array> result = Nan::New<v8::Array>({});",
            self.sig.outputs.len()
        ))
        .each(self.sig.outputs.iter().enumerate(), |b, (i, p)| {
            b.line(&format!("Nan::Set(result, {}, {});", i, p.name.runtime()))
        })
        .line("info.GetReturnValue().Set(result);")
    }

    fn release(&self, b: CodeBuilder) -> CodeBuilder {
        b.each(&self.sig.required, |b, p| {
            b.line(&format!("delete[] {};", p.name.buffer()))
        })
        .each(&self.sig.outputs, |b, p| {
            b.line(&format!("delete[] {};", p.name.buffer()))
        })
    }

    fn empty_return(&self, b: CodeBuilder) -> CodeBuilder {
        b.line(&format!(
            "info.GetReturnValue().Set(EmptyResult({}));",
            self.sig.outputs.len()
        ))
        .line("return;")
    }

    fn guard(&self, b: CodeBuilder, condition: &str, error: &str, message: &str) -> CodeBuilder {
        b.block_with_close(&format!("if ({}) {{", condition), "}", |b| {
            b.line(&format!(
                "Nan::Throw{}(\"{}: {}\");",
                error, self.sig.abbreviation, message
            ))
            .line("return;")
        })
    }

    fn optional_arguments(&self) -> Vec<String> {
        self.sig
            .optional
            .iter()
            .map(|p| match p.kind {
                OptionalKind::MaType => format!("(TA_MAType) {}", p.name.buffer()),
                OptionalKind::Integer | OptionalKind::Double => p.name.buffer(),
            })
            .collect()
    }
}

fn offset_expr(index: usize) -> String {
    if index == 0 {
        "optOffset".to_string()
    } else {
        format!("optOffset + {}", index)
    }
}

/// `if (condition) { then } else { otherwise }` with both arms indented.
fn if_else<T, E>(b: CodeBuilder, condition: &str, then: T, otherwise: E) -> CodeBuilder
where
    T: FnOnce(CodeBuilder) -> CodeBuilder,
    E: FnOnce(CodeBuilder) -> CodeBuilder,
{
    let b = then(b.line(&format!("if ({}) {{", condition)).indent());
    let b = otherwise(b.dedented("} else {").indent());
    b.dedented("}")
}

#[cfg(test)]
mod tests {
    use tagen_codegen::{resolve::FunctionSignature, testing};
    use tagen_ir::FunctionSpec;

    use super::*;

    fn emit(spec: FunctionSpec) -> (String, bool) {
        let sig = FunctionSignature::resolve(&spec).unwrap();
        let builder = NativeFunction::new(&sig).emit(CodeBuilder::native());
        let balanced = builder.is_balanced();
        (builder.build(), balanced)
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_every_fixture_is_balanced() {
        for spec in testing::all().functions {
            let name = spec.abbreviation.clone();
            let (_, balanced) = emit(spec);
            assert!(balanced, "{} left the builder unbalanced", name);
        }
    }

    #[test]
    fn test_sma_header_and_call() {
        let (out, _) = emit(testing::sma());

        assert!(out.starts_with(
            "void TA_FUNC_SMA(const Nan::FunctionCallbackInfo<v8::Value> &info) {\n"
        ));
        assert!(out.contains("    int lookback = TA_SMA_Lookback(optTime_Period);\n"));
        assert!(out.contains(
            "    TA_RetCode retCode = TA_SMA(startIdx, endIdx, inReal, optTime_Period, \
             &outBegIdx, &outNBElement, outReal);\n"
        ));
        assert!(out.contains("    info.GetReturnValue().Set(outReal_JS);\n"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_optional_offsets_per_convention() {
        let (sma, _) = emit(testing::sma());
        assert!(sma.contains("int optOffset = isRecord ? 2 : 1;"));

        let (sar, _) = emit(testing::sar());
        assert!(sar.contains("int optOffset = isRecord ? 1 : 2;"));

        let (mavp, _) = emit(testing::mavp());
        assert!(mavp.contains("int optOffset = isRecord ? 3 : 2;"));
    }

    #[test]
    fn test_intrinsic_inputs_use_record_keys() {
        let (out, _) = emit(testing::sar());

        assert!(out.contains("inHighName = Nan::New(\"High\").ToLocalChecked();"));
        assert!(out.contains("inLowName = Nan::New(\"Low\").ToLocalChecked();"));
        assert!(!out.contains("inHighName = info["));
    }

    #[test]
    fn test_explicit_inputs_read_field_names() {
        let (out, _) = emit(testing::mavp());

        assert!(out.contains("inRealName = info[1].As<v8::String>();"));
        assert!(out.contains("inPeriodsName = info[2].As<v8::String>();"));
        assert!(out.contains("inPeriods_JS = info[1].As<v8::Array>();"));
    }

    #[test]
    fn test_optional_reads_follow_offset() {
        let (out, _) = emit(testing::mavp());

        assert!(out.contains("int optMinimum_Period = 2;"));
        assert!(out.contains("if (argc > optOffset && info[optOffset]->IsInt32()) {"));
        assert!(out.contains("int optMA_Type = TA_MAType_SMA;"));
        assert!(out.contains("if (argc > optOffset + 2 && info[optOffset + 2]->IsInt32()) {"));
        assert!(out.contains("if (argc > optOffset + 3 && info[optOffset + 3]->IsInt32()) {"));
        assert!(out.contains("if (argc > optOffset + 4 && info[optOffset + 4]->IsInt32()) {"));
        assert!(out.contains("(TA_MAType) optMA_Type"));
    }

    #[test]
    fn test_double_options_use_number_checks() {
        let (out, _) = emit(testing::sar());

        assert!(out.contains("double optAcceleration = 0.02;"));
        assert!(out.contains("if (argc > optOffset && info[optOffset]->IsNumber()) {"));
        assert!(out.contains("optAcceleration = Nan::To<double>(info[optOffset]).FromJust();"));
    }

    #[test]
    fn test_buffers_are_released_on_both_exits() {
        for spec in testing::all().functions {
            let buffers = spec.required.len() + spec.outputs.len();
            let (out, _) = emit(spec);

            assert_eq!(count(&out, " = new "), buffers);
            assert_eq!(count(&out, "delete[] "), 4 * buffers);
        }
    }

    #[test]
    fn test_early_returns_precede_allocation() {
        let (out, _) = emit(testing::macd());

        let first_new = out.find(" = new ").unwrap();
        let empty_input = out.find("if (inLength == 0) {").unwrap();
        let empty_window = out.find("if (outputLength == 0) {").unwrap();
        let range = out.find("Nan::ThrowRangeError").unwrap();

        assert!(empty_input < first_new);
        assert!(empty_window < first_new);
        assert!(range < first_new);
        assert_eq!(count(&out, "EmptyResult(3)"), 2);
    }

    #[test]
    fn test_outputs_copy_only_written_elements() {
        let (out, _) = emit(testing::macd());

        assert!(out.contains("v8::Local<v8::Array> outMACD_JS = Nan::New<v8::Array>(outNBElement);"));
        assert!(!out.contains("Nan::New<v8::Array>(outputLength)"));
        assert!(out.contains("v8::Local<v8::Array> result = Nan::New<v8::Array>(3);"));
        assert!(out.contains("Nan::Set(result, 2, outMACDHist_JS);"));
    }

    #[test]
    fn test_integer_outputs_are_boxed_as_int32() {
        let (out, _) = emit(testing::cdl_doji());

        assert!(out.contains("int *outInteger = new int[outputLength];"));
        assert!(out.contains("Nan::Set(outInteger_JS, i, Nan::New<v8::Int32>(outInteger[i]));"));
    }

    #[test]
    fn test_failure_path_throws_native_name() {
        let (out, _) = emit(testing::sma());

        assert!(out.contains("        ThrowRetCode(\"TA_SMA\", retCode);\n"));
    }

    #[test]
    fn test_failed_reads_release_and_return() {
        let (out, _) = emit(testing::sar());

        assert!(!out.contains("ToLocalChecked()).FromJust()"));
        assert!(out.contains("            read = read && ReadElement(record, inHighName, &inHigh[i]);\n"));
        assert!(out.contains("            read = read && ReadElement(inLow_JS, Nan::New(i), &inLow[i]);\n"));

        let release = "            if (!read) {\n\
                       \x20               delete[] inHigh;\n\
                       \x20               delete[] inLow;\n\
                       \x20               delete[] outReal;\n\
                       \x20               return;\n\
                       \x20           }\n";
        assert_eq!(count(&out, release), 2);
    }

    #[test]
    fn test_first_item_read_is_checked() {
        let (out, _) = emit(testing::sma());

        assert!(out.contains("    if (!Nan::Get(inFirst, 0).ToLocal(&firstItem)) {\n        return;\n    }\n"));
        assert!(out.contains("    bool isRecord = firstItem->IsObject();\n"));
    }

    #[test]
    fn test_positions_follow_signature_slots() {
        let sig = FunctionSignature::resolve(&testing::mavp()).unwrap();
        let (out, _) = emit(testing::mavp());

        let start = offset_expr(sig.start_index_slot());
        let end = offset_expr(sig.end_index_slot());
        assert_eq!(start, "optOffset + 3");
        assert_eq!(end, "optOffset + 4");
        assert!(out.contains(&format!("startIdx = Nan::To<int32_t>(info[{}]).FromJust();", start)));
        assert!(out.contains(&format!("endIdx = Nan::To<int32_t>(info[{}]).FromJust();", end)));
    }
}
