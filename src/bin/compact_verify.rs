use std::path::PathBuf;
use std::process;

use clap::Parser;
use rocks_bench::{logging, store, workload, CompactionStyle, Store, StoreOptions, WriteOptions};

#[derive(Parser)]
#[command(
    about = "Bulk-load sequential pairs, compact, then verify every pair and report level file counts"
)]
struct Args {
    /// Directory holding the database files
    db_path: PathBuf,
    /// Number of key-value pairs to write and verify
    #[arg(long, default_value_t = 1000)]
    pairs: u64,
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
    options.compaction_style = CompactionStyle::Level;
    // Small write buffer and low level-0 trigger so the load spills tables
    // and the manual compaction has real work to do.
    options.write_buffer_size = 64 * 1024;
    options.max_write_buffer_number = 3;
    options.level0_file_num_compaction_trigger = 2;
    let store = Store::open(&args.db_path, options)?;

    log::info!("writing {} key-value pairs", args.pairs);
    for i in 0..args.pairs {
        store.put(
            WriteOptions::default(),
            workload::verify_key(i),
            workload::verify_value(i),
        )?;
    }
    log::info!("inserted {} key-value pairs", args.pairs);

    store.compact_all(false);
    log::info!("manual compaction completed");

    log::info!("verifying data");
    let mut mismatched = 0u64;
    for i in 0..args.pairs {
        let key = workload::verify_key(i);
        let expected = workload::verify_value(i);
        match store.get(&key)? {
            Some(found) if found == expected.as_bytes() => {}
            Some(found) => {
                mismatched += 1;
                log::error!(
                    "mismatch: key={} expected={} actual={}",
                    key,
                    expected,
                    String::from_utf8_lossy(&found)
                );
            }
            None => {
                mismatched += 1;
                log::error!("missing key after compaction: {}", key);
            }
        }
    }

    for level in 0..store::NUM_LEVELS {
        if let Some(count) = store.files_at_level(level)? {
            log::info!("files in level {}: {}", level, count);
        }
    }

    if let Some(stats) = store.statistics() {
        println!("engine statistics:\n{}", stats);
    }

    if mismatched > 0 {
        anyhow::bail!("{} of {} pairs failed verification", mismatched, args.pairs);
    }
    log::info!("all {} pairs verified", args.pairs);
    Ok(())
}
