use std::path::PathBuf;
use std::process;

use clap::Parser;
use rocks_bench::{logging, Store, StoreOptions, WriteOptions};

#[derive(Parser)]
#[command(about = "Trace one key through the write path: memtable read, flush, table read")]
struct Args {
    /// Directory holding the database files
    db_path: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(reason) = logging::init() {
        eprintln!("cannot initialize logging: {}", reason);
        process::exit(1);
    }
    if let Err(reason) = run(&args) {
        log::error!("{:#}", reason);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut options = StoreOptions::default();
    options.create_if_missing = true;
    options.enable_statistics = true;
    let store = Store::open(&args.db_path, options)?;

    let key = "test_key";
    let value = "test_value";

    store.put(WriteOptions::default(), key, value)?;
    log::info!("wrote ({}, {}) into the memtable", key, value);

    match store.get(key)? {
        Some(found) => log::info!(
            "read from memtable: {} = {}",
            key,
            String::from_utf8_lossy(&found)
        ),
        None => anyhow::bail!("key {} missing before flush", key),
    }

    store.flush()?;
    log::info!("flushed memtable to a level-0 table");

    match store.get(key)? {
        Some(found) => log::info!(
            "read from table: {} = {}",
            key,
            String::from_utf8_lossy(&found)
        ),
        None => anyhow::bail!("key {} missing after flush", key),
    }

    if let Some(stats) = store.statistics() {
        println!("engine statistics:\n{}", stats);
    }
    Ok(())
}
