mod config_file;
pub use config_file::*;

mod status_config;
pub use status_config::*;
