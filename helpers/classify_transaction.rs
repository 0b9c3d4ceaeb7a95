//! # Pending Transaction Classification Tool
//!
//! Reads a pending transaction record (JSON) and prints its derived status and
//! display overview at a given chain height.
//!
//! ## Usage
//!
//! ```bash
//! # Confirmation depth from STALE_TOLERANCE (or the default)
//! cargo run --example classify_transaction -- --record tx.json --height 1200000
//!
//! # Confirmation depth from a config file
//! cargo run --example classify_transaction -- \
//!   --record tx.json \
//!   --height 1200000 \
//!   --config status.json
//! ```
//!
//! Omit `--height` when the chain tip is unknown.

use clap::Parser;
use eyre::{Result, WrapErr};
use log::info;
use pending_tx_status::{
    config::StatusConfig, constants::UNKNOWN_HEIGHT, domain::PendingTransactionStatusEngine,
    logging::setup_logging, models::PendingTransaction,
};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the pending transaction record (JSON).
    #[arg(long)]
    record: PathBuf,

    /// Current chain height. Defaults to unknown.
    #[arg(long, default_value_t = UNKNOWN_HEIGHT, allow_negative_numbers = true)]
    height: i64,

    /// Optional status config file overriding STALE_TOLERANCE.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fee passed through to the overview conversion.
    #[arg(long, default_value_t = 0)]
    default_fee: u64,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging()?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => StatusConfig::from_file(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?,
        None => StatusConfig::from_env(),
    };
    let engine = PendingTransactionStatusEngine::new(config);

    let record_str = fs::read_to_string(&args.record)
        .wrap_err_with(|| format!("Failed to read record {}", args.record.display()))?;
    let tx: PendingTransaction =
        serde_json::from_str(&record_str).wrap_err("Failed to parse pending transaction")?;

    let status = engine.status(&tx, args.height);
    info!(
        "Classified record at height {} with stale tolerance {}",
        args.height,
        engine.stale_tolerance()
    );

    println!("status: {}", status);
    println!("pending: {}", engine.is_pending(&tx, args.height));
    println!("final: {}", engine.is_final(&tx, args.height));
    println!("active: {}", engine.is_active(&tx, args.height));
    println!(
        "overview: {}",
        serde_json::to_string_pretty(&tx.to_overview(args.default_fee))?
    );

    Ok(())
}
