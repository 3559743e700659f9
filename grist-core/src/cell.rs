//! # Cell Values
//!
//! Grist exchanges the value of a single cell as one of several JSON shapes:
//!
//! | Variant   | Wire shape                      |
//! |-----------|---------------------------------|
//! | `Number`  | JSON number                     |
//! | `String`  | JSON string                     |
//! | `Boolean` | `true` / `false`                |
//! | `Null`    | `null`                          |
//! | `Object`  | `[code, ...data]` (tagged array) |
//!
//! Three of the five variants carry no tag on the wire, so decoding is done by an ordered
//! classifier (see [`codec::DECODE_ORDER`]). The first shape that matches wins.
//!
//! ## Example
//!
//! ```rust
//! use grist_core::cell::{CellValue, GristObject};
//! use serde_json::json;
//!
//! let cell = CellValue::decode(&json!(["d", 1700000000])).unwrap();
//! assert_eq!(cell, CellValue::Object(GristObject::new("d", vec![json!(1700000000)])));
//! assert_eq!(cell.encode().unwrap(), json!(["d", 1700000000]));
//! ```
mod code;
pub mod codec;

pub use code::{GristObjCode, UnknownObjCode};
pub use codec::{CellKind, DecodeError, EncodeError};

/// The value of a single field of a Grist record.
///
/// A `CellValue` always holds exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    String(String),
    Boolean(bool),
    /// An explicit `null`, distinct from a missing field.
    Null,
    Object(GristObject),
}

/// A rich Grist value (date, reference, error, list...) encoded as `[code, ...data]`.
///
/// See <https://support.getgrist.com/code/enums/GristData.GristObjCode/>
#[derive(Debug, Clone, PartialEq)]
pub struct GristObject {
    /// The tag, first element of the wire array.
    pub code: String,
    /// The remaining elements, in wire order.
    pub data: Vec<serde_json::Value>,
}

impl GristObject {
    pub fn new(code: impl Into<String>, data: Vec<serde_json::Value>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Returns the known object kind for this code, if Grist defines one.
    pub fn kind(&self) -> Option<GristObjCode> {
        self.code.parse().ok()
    }
}

impl CellValue {
    /// Decodes a raw JSON cell. See [`codec::decode`].
    pub fn decode(raw: &serde_json::Value) -> Result<Self, DecodeError> {
        codec::decode(raw)
    }

    /// Encodes this cell into its JSON wire shape. See [`codec::encode`].
    pub fn encode(&self) -> Result<serde_json::Value, EncodeError> {
        codec::encode(self)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&GristObject> {
        match self {
            CellValue::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<GristObject> for CellValue {
    fn from(value: GristObject) -> Self {
        CellValue::Object(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}
