//! The Crema type lattice (spec §4.1).
//!
//! A [`Type`] is a value type `{ kind, is_list, record_name? }`. The
//! promotion order `<` is defined only between types sharing the same
//! `is_list`; `larger` and the assignability rule are built on top of it.

use crema_util::Symbol;
use std::fmt;

/// The scalar kind of a [`Type`]. `Record` carries its name out-of-line in
/// `Type::record_name` (populated iff `kind == Record`), matching spec §3's
/// `{ kind, is_list, record_name? }` shape.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Kind {
    Int,
    UInt,
    Double,
    Char,
    Bool,
    Void,
    Record,
    /// Produced by a failed analysis step; never assignable, never comparable.
    Invalid,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kind::Int => "int",
            Kind::UInt => "uint",
            Kind::Double => "double",
            Kind::Char => "char",
            Kind::Bool => "bool",
            Kind::Void => "void",
            Kind::Record => "record",
            Kind::Invalid => "<invalid>",
        };
        f.write_str(s)
    }
}

/// A Crema value type. `Copy` since `record_name` is just an interned
/// `Symbol`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Type {
    pub kind: Kind,
    pub is_list: bool,
    pub record_name: Option<Symbol>,
}

impl Type {
    pub const fn scalar(kind: Kind) -> Self {
        Type {
            kind,
            is_list: false,
            record_name: None,
        }
    }

    pub const fn list_of(kind: Kind) -> Self {
        Type {
            kind,
            is_list: true,
            record_name: None,
        }
    }

    pub fn record(name: Symbol) -> Self {
        Type {
            kind: Kind::Record,
            is_list: false,
            record_name: Some(name),
        }
    }

    pub fn list_of_record(name: Symbol) -> Self {
        Type {
            kind: Kind::Record,
            is_list: true,
            record_name: Some(name),
        }
    }

    pub const INT: Type = Type::scalar(Kind::Int);
    pub const UINT: Type = Type::scalar(Kind::UInt);
    pub const DOUBLE: Type = Type::scalar(Kind::Double);
    pub const CHAR: Type = Type::scalar(Kind::Char);
    pub const BOOL: Type = Type::scalar(Kind::Bool);
    pub const VOID: Type = Type::scalar(Kind::Void);
    pub const STRING: Type = Type::list_of(Kind::Char);
    pub const INVALID: Type = Type::scalar(Kind::Invalid);

    pub fn is_invalid(&self) -> bool {
        self.kind == Kind::Invalid
    }

    pub fn element_type(&self) -> Option<Type> {
        if self.is_list {
            Some(Type {
                kind: self.kind,
                is_list: false,
                record_name: self.record_name,
            })
        } else {
            None
        }
    }

    /// The scalar kind relevant for promotion comparisons - only meaningful
    /// for non-record, non-list types.
    fn scalar_kind(&self) -> Option<Kind> {
        (!self.is_list && self.record_name.is_none()).then_some(self.kind)
    }

    /// Strict promotion order `<` from spec §4.1. Only defined between types
    /// sharing `is_list`; string is modeled as `list_of(Char)`, so the
    /// `Int/UInt/Double < String` rule is checked against a scalar LHS and a
    /// `STRING` RHS directly (a cross-`is_list` exception, matching the
    /// spec's explicit string-promotion quirk).
    pub fn less_than(&self, other: &Type) -> bool {
        if self.is_invalid() || other.is_invalid() {
            return false;
        }
        if !self.is_list && *other == Type::STRING {
            return matches!(self.kind, Kind::Int | Kind::UInt | Kind::Double);
        }
        if self.is_list != other.is_list {
            return false;
        }
        let (Some(a), Some(b)) = (self.scalar_kind(), other.scalar_kind()) else {
            return false;
        };
        matches!(
            (a, b),
            (Kind::Int, Kind::Double)
                | (Kind::UInt, Kind::Double)
                | (Kind::Char, Kind::Int)
                | (Kind::Bool, Kind::Int)
                | (Kind::Bool, Kind::UInt)
                | (Kind::Bool, Kind::Double)
        )
    }

    /// `≤` = `<` ∪ `=`.
    pub fn less_or_equal(&self, other: &Type) -> bool {
        self == other || self.less_than(other)
    }

    /// `larger(a, b)`: `a` if `a ≥ b`, else `b` if `b ≥ a`, else `Invalid`.
    pub fn larger(a: &Type, b: &Type) -> Type {
        if b.less_or_equal(a) {
            *a
        } else if a.less_or_equal(b) {
            *b
        } else {
            Type::INVALID
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Type::STRING {
            return write!(f, "string");
        }
        let base = match self.record_name {
            Some(name) => name.as_str().to_string(),
            None => self.kind.to_string(),
        };
        if self.is_list {
            write!(f, "{}[]", base)
        } else {
            write!(f, "{}", base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_lt_double() {
        assert!(Type::INT.less_than(&Type::DOUBLE));
        assert!(!Type::DOUBLE.less_than(&Type::INT));
    }

    #[test]
    fn char_lt_int() {
        assert!(Type::CHAR.less_than(&Type::INT));
    }

    #[test]
    fn bool_lt_numeric() {
        assert!(Type::BOOL.less_than(&Type::INT));
        assert!(Type::BOOL.less_than(&Type::UINT));
        assert!(Type::BOOL.less_than(&Type::DOUBLE));
    }

    #[test]
    fn numeric_lt_string() {
        assert!(Type::INT.less_than(&Type::STRING));
        assert!(Type::UINT.less_than(&Type::STRING));
        assert!(Type::DOUBLE.less_than(&Type::STRING));
    }

    #[test]
    fn incomparable_pairs() {
        assert!(!Type::BOOL.less_than(&Type::CHAR));
        assert!(!Type::CHAR.less_than(&Type::BOOL));
    }

    #[test]
    fn reflexive_le() {
        assert!(Type::INT.less_or_equal(&Type::INT));
    }

    #[test]
    fn antisymmetry() {
        // s <= t && t <= s => s == t, for every pair we define as comparable.
        let types = [
            Type::INT,
            Type::UINT,
            Type::DOUBLE,
            Type::CHAR,
            Type::BOOL,
            Type::STRING,
        ];
        for a in types {
            for b in types {
                if a.less_or_equal(&b) && b.less_or_equal(&a) {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn larger_picks_bigger() {
        assert_eq!(Type::larger(&Type::INT, &Type::DOUBLE), Type::DOUBLE);
        assert_eq!(Type::larger(&Type::BOOL, &Type::INT), Type::INT);
        assert_eq!(Type::larger(&Type::INT, &Type::INT), Type::INT);
    }

    #[test]
    fn larger_incomparable_is_invalid() {
        assert_eq!(Type::larger(&Type::BOOL, &Type::CHAR), Type::INVALID);
    }

    #[test]
    fn list_equality_requires_same_shape() {
        assert_ne!(Type::INT, Type::list_of(Kind::Int));
    }

    #[test]
    fn record_equality_requires_same_name() {
        let a = Type::record(Symbol::intern("Pt"));
        let b = Type::record(Symbol::intern("Pt"));
        let c = Type::record(Symbol::intern("Other"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Type::INT.to_string(), "int");
        assert_eq!(Type::list_of(Kind::Int).to_string(), "int[]");
        assert_eq!(Type::STRING.to_string(), "string");
    }
}
