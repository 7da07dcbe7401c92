//! The JSON value model.
//!
//! [`Value`] is a closed sum type over the six JSON kinds. Numbers carry one
//! of two payloads, [`Value::Int`] or [`Value::Double`], which both report
//! [`Kind::Number`].
//!
//! # Default-on-mismatch
//!
//! The typed accessors never fail. Asking a value for a payload it does not
//! hold returns a fixed default instead:
//!
//! | accessor         | default      |
//! |------------------|--------------|
//! | `bool_value`     | `false`      |
//! | `int_value`      | `0`          |
//! | `double_value`   | `0.0`        |
//! | `string_value`   | `""`         |
//! | `array_value`    | `&[]`        |
//! | `object_value`   | empty map    |
//!
//! This also applies across the two number payloads: `int_value()` of a
//! `Double` is `0`. Check [`Value::kind`] before interpreting a payload.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Array payload.
pub type Array = Vec<Value>;

/// Object payload. Member order is not part of the contract.
pub type Object = BTreeMap<String, Value>;

static EMPTY_OBJECT: Object = BTreeMap::new();

/// The kind tag reported by [`Value::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Number,
    Bool,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Number => "number",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One JSON node and the subtree it owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Parse `text` with the default configuration.
    pub fn parse(text: &str) -> crate::error::Result<Value> {
        crate::parser::parse(text)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) | Value::Double(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn bool_value(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            _ => false,
        }
    }

    /// The integer payload. A `Double` yields `0`, not a truncation.
    pub fn int_value(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            _ => 0,
        }
    }

    /// The floating-point payload. An `Int` yields `0.0`, not a conversion.
    pub fn double_value(&self) -> f64 {
        match self {
            Value::Double(f) => *f,
            _ => 0.0,
        }
    }

    pub fn string_value(&self) -> &str {
        match self {
            Value::String(s) => s,
            _ => "",
        }
    }

    pub fn array_value(&self) -> &[Value] {
        match self {
            Value::Array(items) => items,
            _ => &[],
        }
    }

    pub fn object_value(&self) -> &Object {
        match self {
            Value::Object(members) => members,
            _ => &EMPTY_OBJECT,
        }
    }

    /// Element count for arrays, member count for objects, `0` for scalars.
    pub fn size(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(members) => members.len(),
            _ => 0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Array> for Value {
    fn from(items: Array) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(members: Object) -> Self {
        Value::Object(members)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

/// Later pairs overwrite earlier ones with the same key.
impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
