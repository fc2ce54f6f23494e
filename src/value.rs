use crate::ValueKind;

/// A parsed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// From an [`ValueKind::Integer`] option.
    Integer(i64),
    /// From a [`ValueKind::Float`] option.
    Float(f64),
    /// From a [`ValueKind::Boolean`] option.
    Boolean(bool),
    /// From a [`ValueKind::Text`] option.
    Text(String),
    /// A flag that was present on the command line.
    Present,
}

impl Value {
    /// The kind this value was converted to, or `None` for [`Value::Present`].
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Integer(_) => Some(ValueKind::Integer),
            Value::Float(_) => Some(ValueKind::Float),
            Value::Boolean(_) => Some(ValueKind::Boolean),
            Value::Text(_) => Some(ValueKind::Text),
            Value::Present => None,
        }
    }
}

/// A token that doesn't match the requested kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CoercionError {
    pub(crate) kind: ValueKind,
    pub(crate) token: String,
}

/// Convert a raw token into a value of the given kind.
///
/// The whole token has to match. Nothing is trimmed and there are no defaults.
pub(crate) fn coerce(token: &str, kind: ValueKind) -> Result<Value, CoercionError> {
    let value = match kind {
        ValueKind::Integer => parse_integer(token).map(Value::Integer),
        ValueKind::Float => parse_float(token).map(Value::Float),
        ValueKind::Boolean => match token {
            "true" => Some(Value::Boolean(true)),
            "false" => Some(Value::Boolean(false)),
            _ => None,
        },
        ValueKind::Text => Some(Value::Text(token.to_owned())),
    };
    value.ok_or_else(|| CoercionError {
        kind,
        token: token.to_owned(),
    })
}

fn parse_integer(token: &str) -> Option<i64> {
    // i64::from_str also takes a leading '+'
    if token.starts_with('+') {
        return None;
    }
    token.parse().ok()
}

fn parse_float(token: &str) -> Option<f64> {
    // f64::from_str also takes "inf", "NaN" and friends, which aren't literals
    if token.starts_with('+') || !token.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

mod private {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
    impl Sealed for &'_ str {}
    impl Sealed for String {}
}

/// Types that can be read back out of [`Matches`][crate::Matches].
///
/// A value is only returned if it was stored under the matching kind:
/// `i64` for integers, `f64` for floats, `bool` for booleans and `&str` or
/// `String` for text. `bool` also reads flags, which are `true` if present.
pub trait FromValue<'a>: private::Sealed + Sized {
    /// Extract the value, or `None` if it has a different kind.
    fn from_value(value: &'a Value) -> Option<Self>;
}

impl<'a> FromValue<'a> for i64 {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for f64 {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for bool {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            Value::Present => Some(true),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for &'a str {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for String {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}
