//! Core type definitions.

use std::fmt;

use serde::Serialize;

/// Argument role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Required,
    Optional,
    Output,
}

impl Role {
    /// Identifier prefix for this role.
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::Required => "in",
            Role::Optional => "opt",
            Role::Output => "out",
        }
    }

    /// Lowercase label for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Required => "required input",
            Role::Optional => "optional input",
            Role::Output => "output",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of the structured record calling convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordField {
    Open,
    High,
    Low,
    Close,
    Volume,
    Time,
}

impl RecordField {
    /// Fields that can back a required input, in record order.
    pub const INTRINSIC: [RecordField; 5] = [
        RecordField::Open,
        RecordField::High,
        RecordField::Low,
        RecordField::Close,
        RecordField::Volume,
    ];

    /// All record fields, including the implicit time field.
    pub const ALL: [RecordField; 6] = [
        RecordField::Open,
        RecordField::High,
        RecordField::Low,
        RecordField::Close,
        RecordField::Volume,
        RecordField::Time,
    ];

    /// Key of the field on a record object.
    pub fn key(&self) -> &'static str {
        match self {
            RecordField::Open => "Open",
            RecordField::High => "High",
            RecordField::Low => "Low",
            RecordField::Close => "Close",
            RecordField::Volume => "Volume",
            RecordField::Time => "Time",
        }
    }

    /// Match a declared required-input type against the intrinsic fields.
    pub fn from_declared_type(ty: &str) -> Option<Self> {
        Self::INTRINSIC.into_iter().find(|f| f.key() == ty)
    }
}

/// Moving average algorithm codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MaType {
    Sma,
    Ema,
    Wma,
    Dema,
    Tema,
    Trima,
    Kama,
    Mama,
    T3,
}

impl MaType {
    /// Common prefix of the native constants.
    pub const NATIVE_PREFIX: &'static str = "TA_MAType_";

    /// All variants in code order.
    pub const ALL: [MaType; 9] = [
        MaType::Sma,
        MaType::Ema,
        MaType::Wma,
        MaType::Dema,
        MaType::Tema,
        MaType::Trima,
        MaType::Kama,
        MaType::Mama,
        MaType::T3,
    ];

    /// Integer code used by the native library.
    pub fn code(&self) -> i32 {
        match self {
            MaType::Sma => 0,
            MaType::Ema => 1,
            MaType::Wma => 2,
            MaType::Dema => 3,
            MaType::Tema => 4,
            MaType::Trima => 5,
            MaType::Kama => 6,
            MaType::Mama => 7,
            MaType::T3 => 8,
        }
    }

    /// Native constant (e.g., "TA_MAType_SMA").
    pub fn native(&self) -> &'static str {
        match self {
            MaType::Sma => "TA_MAType_SMA",
            MaType::Ema => "TA_MAType_EMA",
            MaType::Wma => "TA_MAType_WMA",
            MaType::Dema => "TA_MAType_DEMA",
            MaType::Tema => "TA_MAType_TEMA",
            MaType::Trima => "TA_MAType_TRIMA",
            MaType::Kama => "TA_MAType_KAMA",
            MaType::Mama => "TA_MAType_MAMA",
            MaType::T3 => "TA_MAType_T3",
        }
    }

    /// Symbolic name: the native constant without its common prefix.
    pub fn symbol(&self) -> &'static str {
        let native = self.native();
        native.strip_prefix(Self::NATIVE_PREFIX).unwrap_or(native)
    }

    /// Look up a variant by integer code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    /// Look up a variant by symbolic name or native constant.
    pub fn from_name(name: &str) -> Option<Self> {
        let symbol = name.strip_prefix(Self::NATIVE_PREFIX).unwrap_or(name);
        Self::ALL.into_iter().find(|m| m.symbol() == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_prefix() {
        assert_eq!(Role::Required.prefix(), "in");
        assert_eq!(Role::Optional.prefix(), "opt");
        assert_eq!(Role::Output.prefix(), "out");
    }

    #[test]
    fn test_record_field_from_type() {
        assert_eq!(RecordField::from_declared_type("High"), Some(RecordField::High));
        assert_eq!(
            RecordField::from_declared_type("Volume"),
            Some(RecordField::Volume)
        );
        // The time field is implicit and never backs a required input.
        assert_eq!(RecordField::from_declared_type("Time"), None);
        assert_eq!(RecordField::from_declared_type("Double Array"), None);
    }

    #[test]
    fn test_ma_type_symbol_strips_prefix() {
        assert_eq!(MaType::Sma.symbol(), "SMA");
        assert_eq!(MaType::T3.symbol(), "T3");
    }

    #[test]
    fn test_ma_type_table_is_bidirectional() {
        for ma in MaType::ALL {
            assert_eq!(MaType::from_code(ma.code()), Some(ma));
            assert_eq!(MaType::from_name(ma.symbol()), Some(ma));
            assert_eq!(MaType::from_name(ma.native()), Some(ma));
        }
        assert_eq!(MaType::from_code(9), None);
        assert_eq!(MaType::from_name("HMA"), None);
    }
}
