mod decode;
mod reader;
mod types;


pub use decode::{
    Decode, decode_genre, decode_movie_detail, decode_movie_detail_str, decode_movie_list_str,
    decode_movie_summary, decode_paged, decode_paged_result, decode_production_company,
    decode_production_country, decode_search_str, decode_spoken_language, parse_document,
};
pub use types::{
    Genre, MovieDetail, MovieStatus, MovieSummary, OpaqueValue, PagedResult, ProductionCompany,
    ProductionCountry, SpokenLanguage,
};

use serde_json::Value;
use std::fmt;

/// Decoder result type
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Decode error types
///
/// Every failure is classified into exactly one variant. Errors are terminal:
/// no partially populated record is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` expected {expected}, found {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: JsonKind,
        actual: JsonKind,
    },

    #[error("element {index} of `{field}` failed to decode: {source}")]
    ElementDecodeFailed {
        field: &'static str,
        index: usize,
        source: Box<DecodeError>,
    },

    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

impl DecodeError {
    pub(crate) fn mismatch(field: &'static str, expected: JsonKind, value: &Value) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            actual: JsonKind::of(value),
        }
    }

    pub(crate) fn element(field: &'static str, index: usize, cause: Self) -> Self {
        Self::ElementDecodeFailed {
            field,
            index,
            source: Box::new(cause),
        }
    }

    /// Innermost cause, following `ElementDecodeFailed` wrappers
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::ElementDecodeFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Kind of a JSON value, as expected by a field or as found in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    /// Any integral number, signed or not
    Integer,
    /// Integral number `>= 0`
    UnsignedInteger,
    /// Integral number too large for the field's width
    OutOfRangeInteger,
    /// Any number, integral or fractional
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a JSON value. Integral numbers report `Integer`, fractional
    /// ones report `Number`. `OutOfRangeInteger` is only ever reported by
    /// the field readers, never by this classification.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::UnsignedInteger => "non-negative integer",
            Self::OutOfRangeInteger => "out-of-range integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}
