//! # Appraise
//!
//! Values a container snapshot from the command line.
//!
//! ## Usage
//! ```bash
//! # Value a snapshot against a price table
//! cargo run -p hoard-live --bin appraise -- --snapshot bank.json --prices prices.json
//!
//! # Use a specific config file
//! cargo run -p hoard-live --bin appraise -- -s bank.json -p prices.json --config ./hoard.toml
//!
//! # Override the active tab from the snapshot
//! cargo run -p hoard-live --bin appraise -- -s bank.json -p prices.json --tab 3
//! ```
//!
//! ## Input Files
//! - Snapshot: `{"items": [{"id": 995, "quantity": 1000}], "vars": {"current_bank_tab": 0}}`
//! - Prices: `[{"id": 4151, "base": 120001, "market": 1650000}]`

use std::env;
use std::path::PathBuf;

use hoard_core::pricing::PriceTable;
use hoard_live::{init_tracing, StaticSource, TabVar, ValueConfig, ValueTracker};
use tracing::info;

fn print_help() {
    println!("Hoard Value Appraiser");
    println!();
    println!("Usage: appraise --snapshot <PATH> --prices <PATH> [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -s, --snapshot <PATH>  Container snapshot JSON");
    println!("  -p, --prices <PATH>    Price table JSON");
    println!("  -c, --config <PATH>    Config file (default: platform config dir)");
    println!("  -t, --tab <N>          Active tab, 0 for all tabs");
    println!("  -h, --help             Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut snapshot_path: Option<PathBuf> = None;
    let mut prices_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut tab: Option<i32> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--snapshot" | "-s" => {
                snapshot_path = args.get(i + 1).map(PathBuf::from);
                i += 1;
            }
            "--prices" | "-p" => {
                prices_path = args.get(i + 1).map(PathBuf::from);
                i += 1;
            }
            "--config" | "-c" => {
                config_path = args.get(i + 1).map(PathBuf::from);
                i += 1;
            }
            "--tab" | "-t" => {
                let raw = args.get(i + 1).ok_or("--tab needs a value")?;
                tab = Some(raw.parse()?);
                i += 1;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                return Err(format!("Unknown argument: {}", other).into());
            }
        }
        i += 1;
    }

    let (Some(snapshot_path), Some(prices_path)) = (snapshot_path, prices_path) else {
        print_help();
        return Err("--snapshot and --prices are required".into());
    };

    let config = ValueConfig::load(config_path)?;

    let mut source = StaticSource::load(&snapshot_path)?;
    if let Some(tab) = tab {
        source.set_var(TabVar::CurrentTab, tab);
    }

    let prices = PriceTable::from_json(&std::fs::read_to_string(&prices_path)?)?;
    info!(items = prices.len(), path = ?prices_path, "Loaded price table");

    let mut tracker = ValueTracker::new(source, prices, config);
    let value = tracker.poll()?;

    println!("Market value:  {}", value.market_value);
    println!("Alchemy value: {}", value.alchemy_value);

    Ok(())
}
