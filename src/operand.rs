//! Operand value object.

use crate::error::{InputError, InputResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value to be squared.
///
/// Parsing validates the text up front so the CLI can report bad input
/// before anything crosses the FFI boundary.
///
/// # Example
///
/// ```
/// use squared::Operand;
///
/// let op = Operand::parse(" 5 ", false).unwrap();
/// assert_eq!(op.value(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand(f64);

impl Operand {
    /// Wrap any `f64`, including NaN and infinities.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Parse an operand from text.
    ///
    /// # Errors
    ///
    /// - `InputError::Empty` if the input is blank
    /// - `InputError::NotANumber` if it does not parse as `f64`
    /// - `InputError::NonFinite` if `strict` and the value is NaN or infinite
    pub fn parse(input: &str, strict: bool) -> InputResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
        if strict && !value.is_finite() {
            return Err(InputError::NonFinite(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

// Serde support - finite values as bare numbers, NaN/inf/-inf as strings
impl Serialize for Operand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        float_repr::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        float_repr::deserialize(deserializer).map(Operand)
    }
}

/// `f64` (de)serialization that survives JSON.
///
/// JSON has no NaN or infinity, and serde_json writes them as `null`.
/// Finite values stay numbers; non-finite ones become `"NaN"`, `"inf"` and
/// `"-inf"`. Use with `#[serde(with = "float_repr")]`.
pub mod float_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            // f64's Display already yields NaN, inf and -inf
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => match s.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!(
                    "expected a number, \"NaN\", \"inf\" or \"-inf\", got {:?}",
                    other
                ))),
            },
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
