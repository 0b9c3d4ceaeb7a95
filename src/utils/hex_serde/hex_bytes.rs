//! Serialization utilities for opaque byte payloads
//!
//! Bytes are written as lowercase hex strings. Deserialization also accepts an
//! optional `0x` prefix and upper case digits.
//!
//! ```ignore
//! #[serde(with = "crate::utils::hex_bytes")]
//! raw_id: Vec<u8>,
//! ```
use serde::{de, Deserialize, Deserializer, Serializer};

/// Decodes a hex string, tolerating a leading `0x`.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let trimmed = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(trimmed)
}

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    decode_hex(&value).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::{from_str, to_string};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Test {
        #[serde(with = "crate::utils::hex_bytes")]
        value: Vec<u8>,
    }

    #[test]
    fn test_serialize_lowercase_hex() {
        let test = Test {
            value: vec![0xde, 0xad, 0xbe, 0xef],
        };
        assert_eq!(to_string(&test).unwrap(), r#"{"value":"deadbeef"}"#);
    }

    #[test]
    fn test_deserialize_with_prefix_and_uppercase() {
        let result: Test = from_str(r#"{"value": "0xDEADBEEF"}"#).unwrap();
        assert_eq!(result.value, vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_deserialize_empty_string() {
        let result: Test = from_str(r#"{"value": ""}"#).unwrap();
        assert!(result.value.is_empty());
    }

    #[test]
    fn test_deserialize_invalid_hex() {
        let result: Result<Test, _> = from_str(r#"{"value": "xyz"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_odd_length() {
        let result: Result<Test, _> = from_str(r#"{"value": "abc"}"#);
        assert!(result.is_err());
    }
}
