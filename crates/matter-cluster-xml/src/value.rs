// crates/matter-cluster-xml/src/value.rs

//! Scalar values found in attribute bags and text nodes, and the inference
//! pass that types them while parsing.

use crate::hex::HexValue;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize};

/// A typed scalar read from the XML.
///
/// Absence (an empty string in the source or an omitted attribute) is
/// represented by `Option::None` around this type, never by an empty `Str`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Hex(HexValue),
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Convenience constructor for string values.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Coerces the value into a hex identifier.
    ///
    /// Decimal integers go through [`HexValue::from_number`]; anything else is
    /// sanitized from its text form.
    pub fn to_hex(&self) -> HexValue {
        match self {
            Value::Hex(h) => h.clone(),
            Value::Int(i) if *i >= 0 => HexValue::from_number(*i as u64),
            other => HexValue::new(&other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Hex(h) => write!(f, "{}", h),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `HexValue` accepts any string, so hex is recognized by prefix here
        // instead of being tried as an untagged variant.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Int(i64),
            Float(f64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Value::Bool(b),
            Raw::Int(i) => Value::Int(i),
            Raw::Float(x) => Value::Float(x),
            Raw::Str(s) if s.starts_with("0x") || s.starts_with("0X") => {
                Value::Hex(HexValue::new(&s))
            }
            Raw::Str(s) => Value::Str(s),
        })
    }
}

impl From<HexValue> for Value {
    fn from(h: HexValue) -> Self {
        Value::Hex(h)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Types a raw attribute value or text node.
///
/// Precedence: a `0x`/`0X` prefix makes a hex identifier, then the boolean
/// literals `true`/`false` (any case), then decimal numbers, then plain text.
/// The empty string is `None`. `"0"` and `"1"` are numbers, never booleans.
pub fn infer_value(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("0x") || raw.starts_with("0X") {
        return Some(Value::Hex(HexValue::new(raw)));
    }

    if raw.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if raw.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }

    if let Some(number) = infer_number(raw) {
        return Some(number);
    }

    Some(Value::Str(raw.to_string()))
}

/// Accepts decimal literals only. Rust's float parser also takes `inf`,
/// `NaN` and friends, which must stay text.
fn infer_number(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let numeric_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric_chars || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Value::Int(i));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .map(Value::Float)
}

/// Renders a value the way it is written back into an attribute or text
/// node. `None` and empty strings are dropped so the writer omits them.
pub fn encode_value(value: Option<&Value>) -> Option<String> {
    match value {
        None => None,
        Some(Value::Str(s)) if s.is_empty() => None,
        Some(v) => Some(v.to_string()),
    }
}
