//! Type descriptors for profile validation.

use std::fmt;

/// Type descriptor for a fact attribute or record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Keyword type (members of a closed enumeration).
    Keyword,
}

impl Type {
    /// Returns true if a value of type `actual` is acceptable where `self` is expected.
    ///
    /// Integers widen to floats; nothing else converts.
    #[must_use]
    pub fn accepts(self, actual: Type) -> bool {
        self == actual || (self == Type::Float && actual == Type::Int)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Keyword => "keyword",
        };
        f.write_str(name)
    }
}
