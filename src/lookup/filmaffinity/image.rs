//! Decoding for the video `image` field.
//!
//! The API documents `image` as an object of tier URLs, but videos without
//! artwork come back with `"image": []`. Any other array is a contract
//! violation and fails the whole decode.

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

use super::dto::Image;

/// Outcome of decoding an `image` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageField {
    /// At least one tier URL is present
    Tiers(Image),
    /// `[]`, `null`, or an object with every tier missing
    Absent,
}

impl ImageField {
    pub fn into_option(self) -> Option<Image> {
        match self {
            ImageField::Tiers(image) => Some(image),
            ImageField::Absent => None,
        }
    }
}

/// Errors raised when the `image` value breaks the API contract
#[derive(Debug, thiserror::Error)]
pub enum ImageDecodeError {
    #[error("expected empty array, found data ({0} elements)")]
    NonEmptyArray(usize),

    #[error("expected image object or empty array, found {0}")]
    UnexpectedType(&'static str),

    #[error("invalid image object: {0}")]
    InvalidObject(#[from] serde_json::Error),
}

/// Decode a raw JSON value into an [`ImageField`]
pub fn decode(value: Value) -> Result<ImageField, ImageDecodeError> {
    match value {
        Value::Null => Ok(ImageField::Absent),
        Value::Array(items) if items.is_empty() => Ok(ImageField::Absent),
        Value::Array(items) => Err(ImageDecodeError::NonEmptyArray(items.len())),
        Value::Object(_) => {
            let image: Image = serde_json::from_value(value)?;
            if image.is_empty() {
                Ok(ImageField::Absent)
            } else {
                Ok(ImageField::Tiers(image))
            }
        }
        Value::Bool(_) => Err(ImageDecodeError::UnexpectedType("boolean")),
        Value::Number(_) => Err(ImageDecodeError::UnexpectedType("number")),
        Value::String(_) => Err(ImageDecodeError::UnexpectedType("string")),
    }
}

/// `deserialize_with` hook for `Video::image`
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Image>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decode(value)
        .map(ImageField::into_option)
        .map_err(D::Error::custom)
}
