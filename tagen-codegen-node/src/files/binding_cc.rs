//! The native binding source file.

use std::path::{Path, PathBuf};

use tagen_codegen::{builder::CodeBuilder, resolve::FunctionSignature};
use tagen_core::{GENERATED_NOTICE, GeneratedFile};
use tagen_ir::MaType;

use super::NativeFunction;

/// `talib-binding.generated.cc`: one entry point per function, the shared
/// helpers they call, and the module registration footer.
pub struct BindingCc<'a> {
    path: &'a Path,
    target: &'a str,
    functions: &'a [FunctionSignature],
}

impl<'a> BindingCc<'a> {
    pub fn new(path: &'a Path, target: &'a str, functions: &'a [FunctionSignature]) -> Self {
        Self {
            path,
            target,
            functions,
        }
    }

    fn prelude(&self, b: CodeBuilder) -> CodeBuilder {
        b.comment("//", GENERATED_NOTICE)
            .blank()
            .line("#include <string>")
            .line("#include <nan.h>")
            .line("#include \"ta_libc.h\"")
            .blank()
            .block_with_close(
                "static inline v8::Local<v8::Array> EmptyResult(int outputs) {",
                "}",
                |b| {
                    b.block_with_close("if (outputs == 1) {", "}", |b| {
                        b.line("return Nan::New<v8::Array>(0);")
                    })
                    .line("v8::Local<v8::Array> result = Nan::New<v8::Array>(outputs);")
                    .block_with_close("for (int i = 0; i < outputs; i++) {", "}", |b| {
                        b.line("Nan::Set(result, i, Nan::New<v8::Array>(0));")
                    })
                    .line("return result;")
                },
            )
            .blank()
            .line("template <typename T>")
            .block_with_close(
                "static inline bool ReadElement(v8::Local<v8::Object> source, \
                 v8::Local<v8::Value> key, T *out) {",
                "}",
                |b| {
                    b.line("v8::Local<v8::Value> value;")
                        .block_with_close(
                            "if (!Nan::Get(source, key).ToLocal(&value)) {",
                            "}",
                            |b| b.line("return false;"),
                        )
                        .line("return Nan::To<T>(value).To(out);")
                },
            )
            .blank()
            .block_with_close(
                "static inline void ThrowRetCode(const char *function, TA_RetCode retCode) {",
                "}",
                |b| {
                    b.line("TA_RetCodeInfo retCodeInfo;")
                        .line("TA_SetRetCodeInfo(retCode, &retCodeInfo);")
                        .line(
                            "std::string message = std::string(function) + \" ERROR: \" \
                             + retCodeInfo.enumStr + \" - \" + retCodeInfo.infoStr;",
                        )
                        .line("Nan::ThrowError(message.c_str());")
                },
            )
    }

    fn footer(&self, b: CodeBuilder) -> CodeBuilder {
        b.block_with_close("NAN_MODULE_INIT(Init) {", "}", |b| {
            b.line("v8::Local<v8::Object> maTypes = Nan::New<v8::Object>();")
                .each(MaType::ALL, |b, ma| {
                    b.line(&format!(
                        "Nan::Set(maTypes, Nan::New(\"{}\").ToLocalChecked(), Nan::New<v8::Int32>({}));",
                        ma.symbol(),
                        ma.native()
                    ))
                })
                .line("Nan::Set(target, Nan::New(\"MATypes\").ToLocalChecked(), maTypes);")
                .each(self.functions, |b, f| {
                    b.line(&format!(
                        "Nan::SetMethod(target, \"{}\", {});",
                        f.abbreviation,
                        f.entry_point()
                    ))
                })
        })
        .blank()
        .line(&format!("NODE_MODULE({}, Init)", self.target))
    }
}

impl GeneratedFile for BindingCc<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        let builder = self.prelude(CodeBuilder::native());
        let builder = self
            .functions
            .iter()
            .fold(builder, |b, sig| NativeFunction::new(sig).emit(b.blank()));
        self.footer(builder.blank()).build()
    }
}

#[cfg(test)]
mod tests {
    use tagen_codegen::{resolve::resolve_all, testing};

    use super::*;

    fn render(api: &tagen_ir::ApiIR) -> String {
        let functions = resolve_all(api).unwrap();
        BindingCc::new(Path::new("src/binding.cc"), "talib_binding", &functions).render()
    }

    #[test]
    fn test_path_is_relative_to_base() {
        let file = BindingCc::new(Path::new("src/binding.cc"), "t", &[]);
        assert_eq!(
            file.path(Path::new("/project")),
            Path::new("/project/src/binding.cc")
        );
    }

    #[test]
    fn test_zero_functions_still_registers_ma_types() {
        let out = render(&tagen_ir::ApiIR::default());

        assert!(out.starts_with("// Generated by tagen"));
        assert!(out.contains("NAN_MODULE_INIT(Init) {"));
        assert!(out.contains(
            "    Nan::Set(maTypes, Nan::New(\"T3\").ToLocalChecked(), Nan::New<v8::Int32>(TA_MAType_T3));"
        ));
        assert!(!out.contains("Nan::SetMethod"));
        assert!(!out.contains("TA_FUNC_"));
        assert!(out.ends_with("NODE_MODULE(talib_binding, Init)\n"));
    }

    #[test]
    fn test_every_function_is_registered_in_order() {
        let out = render(&testing::all());

        let registrations: Vec<_> = out
            .lines()
            .filter(|l| l.trim_start().starts_with("Nan::SetMethod"))
            .map(str::trim)
            .collect();

        assert_eq!(
            registrations,
            [
                "Nan::SetMethod(target, \"SMA\", TA_FUNC_SMA);",
                "Nan::SetMethod(target, \"MACD\", TA_FUNC_MACD);",
                "Nan::SetMethod(target, \"SAR\", TA_FUNC_SAR);",
                "Nan::SetMethod(target, \"MA\", TA_FUNC_MA);",
                "Nan::SetMethod(target, \"CDLDOJI\", TA_FUNC_CDLDOJI);",
                "Nan::SetMethod(target, \"MAVP\", TA_FUNC_MAVP);",
            ]
        );
    }

    #[test]
    fn test_prelude_defines_checked_element_reader() {
        let out = render(&tagen_ir::ApiIR::default());

        assert!(out.contains(
            "template <typename T>\n\
             static inline bool ReadElement(v8::Local<v8::Object> source, \
             v8::Local<v8::Value> key, T *out) {\n\
             \x20   v8::Local<v8::Value> value;\n\
             \x20   if (!Nan::Get(source, key).ToLocal(&value)) {\n\
             \x20       return false;\n\
             \x20   }\n\
             \x20   return Nan::To<T>(value).To(out);\n\
             }\n"
        ));
    }
}
