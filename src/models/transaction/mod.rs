pub(crate) mod pending;
pub use pending::*;

mod overview;
pub use overview::*;

mod status;
pub use status::*;
