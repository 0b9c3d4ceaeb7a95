pub mod hex_bytes;
pub mod optional_hex_bytes;

pub use hex_bytes::decode_hex;
