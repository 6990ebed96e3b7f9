//! TypeScript type mapper implementation.

use tagen_codegen::{
    language::TypeMapper,
    resolve::{OptionalKind, OutputKind, RequiredKind},
};

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    /// Return type of a function with the given outputs.
    ///
    /// A single output returns its array, several return a tuple.
    pub fn map_return<I>(&self, outputs: I) -> String
    where
        I: IntoIterator<Item = OutputKind>,
    {
        let types: Vec<_> = outputs.into_iter().map(|k| self.map_output(k)).collect();
        match types.as_slice() {
            [single] => single.to_string(),
            _ => format!("[{}]", types.join(", ")),
        }
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_required(&self, _kind: RequiredKind) -> &'static str {
        "number[]"
    }

    fn map_optional(&self, kind: OptionalKind) -> &'static str {
        match kind {
            OptionalKind::Integer | OptionalKind::Double => "number",
            OptionalKind::MaType => "MATypes",
        }
    }

    fn map_output(&self, _kind: OutputKind) -> &'static str {
        "number[]"
    }
}

#[cfg(test)]
mod tests {
    use tagen_codegen::resolve::ElementType;
    use tagen_ir::RecordField;

    use super::*;

    #[test]
    fn test_typescript_required_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(
            mapper.map_required(RequiredKind::Intrinsic(RecordField::High)),
            "number[]"
        );
        assert_eq!(
            mapper.map_required(RequiredKind::Explicit(ElementType::Integer)),
            "number[]"
        );
    }

    #[test]
    fn test_typescript_optional_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_optional(OptionalKind::Integer), "number");
        assert_eq!(mapper.map_optional(OptionalKind::Double), "number");
        assert_eq!(mapper.map_optional(OptionalKind::MaType), "MATypes");
    }

    #[test]
    fn test_typescript_return_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_return([OutputKind::DoubleArray]), "number[]");
        assert_eq!(
            mapper.map_return([OutputKind::DoubleArray, OutputKind::IntegerArray]),
            "[number[], number[]]"
        );
    }
}
