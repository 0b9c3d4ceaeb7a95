//! Serialization utilities for optional byte payloads
//!
//! `None` is written as `null`; a missing field deserializes to `None` when the
//! field is also marked `#[serde(default)]`.
use serde::{de, Deserialize, Deserializer, Serializer};

use super::decode_hex;

pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bytes {
        Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| decode_hex(&value).map_err(de::Error::custom))
        .transpose()
}
