mod hex_serde;
pub use hex_serde::*;

mod time;
pub use time::*;
