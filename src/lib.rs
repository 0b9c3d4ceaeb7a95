//! Pending transaction status engine.
//!
//! Derives the lifecycle status of a locally-originated wallet transaction
//! (creating, failed, submitted, mined, confirmed, expired, cancelled) from the
//! fields stored on its record and the current chain height.
//!
//! The crate is organized as:
//! - `models`: the pending transaction record, recipient and overview shapes
//! - `domain`: status classification with an injected confirmation depth
//! - `config`: environment and file based configuration
//! - `constants`: height sentinels, protocol defaults and status groupings
//! - `logging`: logger setup for binaries and tools
//! - `utils`: serde helpers and time utilities

pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod utils;
