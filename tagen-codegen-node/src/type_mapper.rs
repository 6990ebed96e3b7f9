//! C++ type mapper implementation.

use tagen_codegen::{
    language::TypeMapper,
    resolve::{ElementType, OptionalKind, OutputKind, RequiredKind},
};

/// Maps argument kinds to the C++ types of native buffers and scalars.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTypeMapper;

impl NativeTypeMapper {
    /// C++ element type of a native buffer.
    pub fn element(&self, element: ElementType) -> &'static str {
        match element {
            ElementType::Double => "double",
            ElementType::Integer => "int",
        }
    }

    /// Runtime value check guarding an optional argument read.
    pub fn runtime_check(&self, kind: OptionalKind) -> &'static str {
        match kind {
            OptionalKind::Integer | OptionalKind::MaType => "IsInt32",
            OptionalKind::Double => "IsNumber",
        }
    }

    /// Nan conversion target for an optional argument read.
    pub fn conversion(&self, kind: OptionalKind) -> &'static str {
        match kind {
            OptionalKind::Integer | OptionalKind::MaType => "int32_t",
            OptionalKind::Double => "double",
        }
    }

    /// Nan conversion target for one element of an input buffer.
    pub fn element_conversion(&self, element: ElementType) -> &'static str {
        match element {
            ElementType::Double => "double",
            ElementType::Integer => "int32_t",
        }
    }

    /// v8 value type used to box one output element.
    pub fn boxed(&self, kind: OutputKind) -> &'static str {
        match kind {
            OutputKind::DoubleArray => "v8::Number",
            OutputKind::IntegerArray => "v8::Int32",
        }
    }
}

impl TypeMapper for NativeTypeMapper {
    fn language(&self) -> &'static str {
        "c++"
    }

    fn map_required(&self, kind: RequiredKind) -> &'static str {
        self.element(kind.element())
    }

    fn map_optional(&self, kind: OptionalKind) -> &'static str {
        match kind {
            OptionalKind::Integer => "int",
            OptionalKind::Double => "double",
            // Stored as its integer code, cast at the call site.
            OptionalKind::MaType => "int",
        }
    }

    fn map_output(&self, kind: OutputKind) -> &'static str {
        self.element(kind.element())
    }
}

#[cfg(test)]
mod tests {
    use tagen_ir::RecordField;

    use super::*;

    #[test]
    fn test_required_types() {
        let mapper = NativeTypeMapper;
        assert_eq!(mapper.map_required(RequiredKind::Intrinsic(RecordField::Close)), "double");
        assert_eq!(mapper.map_required(RequiredKind::Explicit(ElementType::Integer)), "int");
    }

    #[test]
    fn test_optional_types() {
        let mapper = NativeTypeMapper;
        assert_eq!(mapper.map_optional(OptionalKind::Double), "double");
        assert_eq!(mapper.map_optional(OptionalKind::MaType), "int");
        assert_eq!(mapper.runtime_check(OptionalKind::Double), "IsNumber");
        assert_eq!(mapper.runtime_check(OptionalKind::MaType), "IsInt32");
    }

    #[test]
    fn test_output_types() {
        let mapper = NativeTypeMapper;
        assert_eq!(mapper.map_output(OutputKind::IntegerArray), "int");
        assert_eq!(mapper.boxed(OutputKind::IntegerArray), "v8::Int32");
        assert_eq!(mapper.boxed(OutputKind::DoubleArray), "v8::Number");
    }
}
