mod transaction;
pub use transaction::*;

mod transactions;
pub use transactions::*;

mod logging;
pub use logging::*;
