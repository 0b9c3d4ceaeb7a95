mod common;
pub use common::*;

mod status;
pub use status::*;
