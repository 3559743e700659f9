//! # Cell Codec
//!
//! Bidirectional mapping between [`CellValue`] and Grist's JSON cell representation.
//!
//! ## Decoding
//!
//! Decoding runs the shapes listed in [`DECODE_ORDER`] one after the other and keeps the first
//! one that matches:
//!
//! 1. `null` -> [`CellValue::Null`]
//! 2. number -> [`CellValue::Number`]
//! 3. string -> [`CellValue::String`]
//! 4. boolean -> [`CellValue::Boolean`]
//! 5. non-empty array starting with a string -> [`CellValue::Object`]
//!
//! Anything else (`[]`, `[42, "x"]`, `{"a": 1}`) is a [`DecodeError`].
//!
//! ## Encoding
//!
//! Encoding is the exact inverse. Integral numbers that a double represents exactly are written
//! as JSON integers, so a `99` received from the server is sent back as `99` and not `99.0`.
//!
//! The codec is pure: it never logs and holds no state, so it can be called from any thread.
use super::{CellValue, GristObject};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::{Error as _, SerializeSeq},
};
use serde_json::Value;

/// Largest magnitude up to which every integer is exactly representable as an `f64` (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The wire shapes a cell can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Null,
    Number,
    String,
    Boolean,
    Object,
}

/// Precedence used by [`decode`]. The first kind whose parser accepts the input wins.
pub const DECODE_ORDER: [CellKind; 5] = [
    CellKind::Null,
    CellKind::Number,
    CellKind::String,
    CellKind::Boolean,
    CellKind::Object,
];

/// The raw value matched none of the recognised cell shapes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown CellValue type: {raw}")]
pub struct DecodeError {
    /// The offending input.
    pub raw: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot encode non-finite number '{0}' as a JSON cell")]
    NonFiniteNumber(f64),
}

impl CellKind {
    /// Tries to read `raw` as this kind of cell.
    ///
    /// Returns `None` when the shape does not match, so that the next kind can be tried.
    pub fn try_decode(self, raw: &Value) -> Option<CellValue> {
        match self {
            CellKind::Null => raw.is_null().then_some(CellValue::Null),
            CellKind::Number => raw.as_f64().map(CellValue::Number),
            CellKind::String => raw.as_str().map(|s| CellValue::String(s.to_string())),
            CellKind::Boolean => raw.as_bool().map(CellValue::Boolean),
            CellKind::Object => {
                let (code, data) = raw.as_array()?.split_first()?;
                let code = code.as_str()?;
                Some(CellValue::Object(GristObject::new(code, data.to_vec())))
            }
        }
    }
}

impl CellValue {
    /// The wire shape of this value.
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Number(_) => CellKind::Number,
            CellValue::String(_) => CellKind::String,
            CellValue::Boolean(_) => CellKind::Boolean,
            CellValue::Null => CellKind::Null,
            CellValue::Object(_) => CellKind::Object,
        }
    }
}

/// Decodes a raw JSON cell following [`DECODE_ORDER`].
pub fn decode(raw: &Value) -> Result<CellValue, DecodeError> {
    DECODE_ORDER
        .iter()
        .find_map(|kind| kind.try_decode(raw))
        .ok_or_else(|| DecodeError { raw: raw.clone() })
}

/// Encodes a cell into its JSON wire shape.
pub fn encode(cell: &CellValue) -> Result<Value, EncodeError> {
    let value = match cell {
        CellValue::Number(n) => match WireNumber::try_from(*n)? {
            WireNumber::Integer(i) => Value::from(i),
            WireNumber::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .ok_or(EncodeError::NonFiniteNumber(f))?,
        },
        CellValue::String(s) => Value::String(s.clone()),
        CellValue::Boolean(b) => Value::Bool(*b),
        CellValue::Null => Value::Null,
        CellValue::Object(obj) => {
            let mut items = Vec::with_capacity(obj.data.len() + 1);
            items.push(Value::String(obj.code.clone()));
            items.extend(obj.data.iter().cloned());
            Value::Array(items)
        }
    };
    Ok(value)
}

/// How a double is written on the wire.
#[derive(Debug, PartialEq)]
enum WireNumber {
    Integer(i64),
    Float(f64),
}

impl TryFrom<f64> for WireNumber {
    type Error = EncodeError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if !n.is_finite() {
            return Err(EncodeError::NonFiniteNumber(n));
        }
        // -0.0 keeps its sign only as a float.
        let negative_zero = n == 0.0 && n.is_sign_negative();
        if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER && !negative_zero {
            Ok(WireNumber::Integer(n as i64))
        } else {
            Ok(WireNumber::Float(n))
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CellValue::Number(n) => match WireNumber::try_from(*n).map_err(S::Error::custom)? {
                WireNumber::Integer(i) => serializer.serialize_i64(i),
                WireNumber::Float(f) => serializer.serialize_f64(f),
            },
            CellValue::String(s) => serializer.serialize_str(s),
            CellValue::Boolean(b) => serializer.serialize_bool(*b),
            CellValue::Null => serializer.serialize_unit(),
            CellValue::Object(obj) => {
                let mut seq = serializer.serialize_seq(Some(obj.data.len() + 1))?;
                seq.serialize_element(&obj.code)?;
                for item in &obj.data {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        decode(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_order_is_null_number_string_boolean_object() {
        assert_eq!(
            DECODE_ORDER,
            [
                CellKind::Null,
                CellKind::Number,
                CellKind::String,
                CellKind::Boolean,
                CellKind::Object
            ]
        );
    }

    #[test]
    fn test_each_kind_only_accepts_its_own_shape() {
        let inputs = [
            json!(null),
            json!(12.5),
            json!("123"),
            json!(true),
            json!(["L", 1, 2]),
        ];

        for (expected, raw) in DECODE_ORDER.iter().zip(inputs.iter()) {
            let accepted: Vec<_> = DECODE_ORDER
                .iter()
                .filter(|kind| kind.try_decode(raw).is_some())
                .collect();

            assert_eq!(accepted, vec![expected], "input {raw} matched {accepted:?}");
        }
    }

    #[test]
    fn test_numeric_string_stays_a_string() {
        assert_eq!(CellKind::Number.try_decode(&json!("123")), None);
        assert_eq!(
            decode(&json!("123")).unwrap(),
            CellValue::String("123".to_string())
        );
    }

    #[test]
    fn test_object_kind_rejects_degenerate_arrays() {
        assert_eq!(CellKind::Object.try_decode(&json!([])), None);
        assert_eq!(CellKind::Object.try_decode(&json!([42, "x"])), None);
        assert_eq!(CellKind::Object.try_decode(&json!({"a": 1})), None);
    }

    #[test]
    fn test_object_with_only_a_code_has_empty_data() {
        let cell = decode(&json!(["P"])).unwrap();

        assert_eq!(cell, CellValue::Object(GristObject::new("P", vec![])));
        assert_eq!(encode(&cell).unwrap(), json!(["P"]));
    }

    #[test]
    fn test_wire_number_integral_values() {
        assert_eq!(WireNumber::try_from(99.0), Ok(WireNumber::Integer(99)));
        assert_eq!(WireNumber::try_from(-3.0), Ok(WireNumber::Integer(-3)));
        assert_eq!(WireNumber::try_from(0.0), Ok(WireNumber::Integer(0)));
    }

    #[test]
    fn test_wire_number_keeps_floats() {
        assert_eq!(WireNumber::try_from(0.25), Ok(WireNumber::Float(0.25)));
        assert_eq!(WireNumber::try_from(1e300), Ok(WireNumber::Float(1e300)));
        assert!(matches!(
            WireNumber::try_from(-0.0),
            Ok(WireNumber::Float(f)) if f.is_sign_negative()
        ));
    }

    #[test]
    fn test_wire_number_rejects_non_finite() {
        assert!(matches!(
            WireNumber::try_from(f64::NAN),
            Err(EncodeError::NonFiniteNumber(_))
        ));
        assert_eq!(
            WireNumber::try_from(f64::INFINITY),
            Err(EncodeError::NonFiniteNumber(f64::INFINITY))
        );
    }

    #[test]
    fn test_serialize_matches_encode() {
        let cells = [
            CellValue::Number(99.0),
            CellValue::Number(1.5),
            CellValue::String("Jane".into()),
            CellValue::Boolean(false),
            CellValue::Null,
            CellValue::Object(GristObject::new("R", vec![json!("People"), json!(3)])),
        ];

        for cell in cells {
            let via_serde = serde_json::to_string(&cell).unwrap();
            let via_encode = serde_json::to_string(&encode(&cell).unwrap()).unwrap();
            assert_eq!(via_serde, via_encode);
        }
    }

    #[test]
    fn test_serialize_fails_on_nan() {
        let err = serde_json::to_string(&CellValue::Number(f64::NAN)).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }
}
