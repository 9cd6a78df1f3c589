use super::{DecodeError, JsonKind, Result};
use super::types::OpaqueValue;
use serde_json::{Map, Value};

/// Field-by-field view over one JSON object.
///
/// Every record decoder reads its wire names through this reader, so the
/// defaulting rules live in one place:
/// - `required_*`: absent is `MissingField`, present with the wrong kind
///   (including `null`) is `TypeMismatch`
/// - `optional_*`: absent or `null` is `None`
/// - `sequence`: absent or `null` is an empty `Vec`
pub(crate) struct ObjectReader<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> ObjectReader<'a> {
    /// Open `value` as the object for `record`
    pub fn new(value: &'a Value, record: &str) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            other => Err(DecodeError::MalformedDocument(format!(
                "{record} must be a JSON object, found {}",
                JsonKind::of(other)
            ))),
        }
    }

    fn require(&self, field: &'static str) -> Result<&'a Value> {
        self.map.get(field).ok_or(DecodeError::MissingField(field))
    }

    fn present(&self, field: &'static str) -> Option<&'a Value> {
        self.map.get(field).filter(|v| !v.is_null())
    }

    pub fn required_i64(&self, field: &'static str) -> Result<i64> {
        as_i64(field, self.require(field)?)
    }

    pub fn required_u64(&self, field: &'static str) -> Result<u64> {
        as_u64(field, self.require(field)?)
    }

    pub fn required_u32(&self, field: &'static str) -> Result<u32> {
        as_u32(field, self.require(field)?)
    }

    pub fn required_f64(&self, field: &'static str) -> Result<f64> {
        as_f64(field, self.require(field)?)
    }

    pub fn required_bool(&self, field: &'static str) -> Result<bool> {
        as_bool(field, self.require(field)?)
    }

    pub fn required_str(&self, field: &'static str) -> Result<String> {
        as_str(field, self.require(field)?).map(ToString::to_string)
    }

    pub fn optional_u32(&self, field: &'static str) -> Result<Option<u32>> {
        self.present(field).map(|v| as_u32(field, v)).transpose()
    }

    pub fn optional_u64(&self, field: &'static str) -> Result<Option<u64>> {
        self.present(field).map(|v| as_u64(field, v)).transpose()
    }

    pub fn optional_f64(&self, field: &'static str) -> Result<Option<f64>> {
        self.present(field).map(|v| as_f64(field, v)).transpose()
    }

    pub fn optional_bool(&self, field: &'static str) -> Result<Option<bool>> {
        self.present(field).map(|v| as_bool(field, v)).transpose()
    }

    pub fn optional_str(&self, field: &'static str) -> Result<Option<String>> {
        self.present(field)
            .map(|v| as_str(field, v).map(ToString::to_string))
            .transpose()
    }

    /// Raw required value, for fields with their own decoding (enums)
    pub fn required_value(&self, field: &'static str) -> Result<&'a Value> {
        self.require(field)
    }

    /// Required array whose elements all decode, fail-fast on the first bad one
    pub fn required_sequence<T, F>(&self, field: &'static str, decode: F) -> Result<Vec<T>>
    where
        F: Fn(&Value) -> Result<T>,
    {
        decode_array(field, self.require(field)?, decode)
    }

    /// Optional array: absent or `null` decodes to an empty `Vec`
    pub fn sequence<T, F>(&self, field: &'static str, decode: F) -> Result<Vec<T>>
    where
        F: Fn(&Value) -> Result<T>,
    {
        match self.present(field) {
            None => Ok(Vec::new()),
            Some(value) => decode_array(field, value, decode),
        }
    }

    /// Value kept undecoded: `null`/absent or an object
    pub fn opaque(&self, field: &'static str) -> Result<OpaqueValue> {
        match self.present(field) {
            None => Ok(OpaqueValue::Null),
            Some(Value::Object(map)) => Ok(OpaqueValue::Object(map.clone())),
            Some(other) => Err(DecodeError::mismatch(field, JsonKind::Object, other)),
        }
    }
}

fn decode_array<T, F>(field: &'static str, value: &Value, decode: F) -> Result<Vec<T>>
where
    F: Fn(&Value) -> Result<T>,
{
    let Value::Array(items) = value else {
        return Err(DecodeError::mismatch(field, JsonKind::Array, value));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode(item).map_err(|e| DecodeError::element(field, index, e)))
        .collect()
}

pub(crate) fn as_i64(field: &'static str, value: &Value) -> Result<i64> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if value.is_u64() {
        return Err(out_of_range(field, JsonKind::Integer));
    }
    Err(DecodeError::mismatch(field, JsonKind::Integer, value))
}

/// Non-integers report an expected `Integer`; only negative integers
/// report an expected `UnsignedInteger`.
pub(crate) fn as_u64(field: &'static str, value: &Value) -> Result<u64> {
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    let expected = if value.is_i64() {
        JsonKind::UnsignedInteger
    } else {
        JsonKind::Integer
    };
    Err(DecodeError::mismatch(field, expected, value))
}

pub(crate) fn as_u32(field: &'static str, value: &Value) -> Result<u32> {
    as_u64(field, value)
        .and_then(|n| u32::try_from(n).map_err(|_| out_of_range(field, JsonKind::Integer)))
}

fn out_of_range(field: &'static str, expected: JsonKind) -> DecodeError {
    DecodeError::TypeMismatch {
        field,
        expected,
        actual: JsonKind::OutOfRangeInteger,
    }
}

pub(crate) fn as_f64(field: &'static str, value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| DecodeError::mismatch(field, JsonKind::Number, value))
}

pub(crate) fn as_bool(field: &'static str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| DecodeError::mismatch(field, JsonKind::Boolean, value))
}

pub(crate) fn as_str<'v>(field: &'static str, value: &'v Value) -> Result<&'v str> {
    value
        .as_str()
        .ok_or_else(|| DecodeError::mismatch(field, JsonKind::String, value))
}
