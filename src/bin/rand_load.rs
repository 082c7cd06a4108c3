use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use rocks_bench::perf::{self, PerfLog, Stopwatch};
use rocks_bench::signal::Interrupt;
use rocks_bench::utils::common::now_secs;
use rocks_bench::{logging, workload, CompactionStyle, Store, StoreOptions, WriteOptions};

const PERF_COLUMNS: &[&str] = &[
    "Timestamp",
    "Iteration",
    "InsertTime(ms)",
    "DeleteTime(ms)",
    "CompactionTime(ms)",
    "ReadTime(ms)",
    "Throughput(ops/s)",
];

#[derive(Parser)]
#[command(
    about = "Endless random-key load loop with read-back verification against an in-process \
             mirror; the mirror keeps every surviving pair, so the verify phase grows with runtime"
)]
struct Args {
    /// Directory holding the database files
    db_path: PathBuf,
    /// Pairs inserted per iteration
    #[arg(long, default_value_t = 100_000)]
    inserts: u64,
    /// Random keys deleted per iteration
    #[arg(long, default_value_t = 50_000)]
    deletes: u64,
    /// Length of generated keys
    #[arg(long, default_value_t = 16)]
    key_len: usize,
    /// Length of generated values
    #[arg(long, default_value_t = 64)]
    value_len: usize,
    /// Seconds to pause between iterations
    #[arg(long, default_value_t = 5)]
    pause_secs: u64,
    /// CSV file receiving one row per iteration
    #[arg(long, default_value = "rocks_perf.csv")]
    perf_log: PathBuf,
    /// Compaction style: level, universal or fifo
    #[arg(long, default_value = "level")]
    compaction_style: CompactionStyle,
    /// Memtable size in bytes, engine default when absent
    #[arg(long)]
    write_buffer_size: Option<usize>,
    /// Level-0 file count that triggers compaction, engine default when absent
    #[arg(long)]
    level0_trigger: Option<i32>,
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
    options.compaction_style = args.compaction_style;
    if let Some(size) = args.write_buffer_size {
        options.write_buffer_size = size;
    }
    if let Some(trigger) = args.level0_trigger {
        options.level0_file_num_compaction_trigger = trigger;
    }
    let store = Store::open(&args.db_path, options)?;

    let interrupt = Interrupt::install()?;
    let mut perf_log = PerfLog::create(&args.perf_log, PERF_COLUMNS)?;
    log::info!("logging per-iteration timings to {}", perf_log.path().display());

    let mut rng = rand::thread_rng();
    let mut mirror: HashMap<String, String> = HashMap::new();
    let mut iteration = 0u64;

    while !interrupt.is_raised() {
        iteration += 1;
        log::info!("iteration {}: starting load", iteration);

        let total = Stopwatch::start();

        let insert = Stopwatch::start();
        for _ in 0..args.inserts {
            let key = workload::random_string(&mut rng, args.key_len);
            let value = workload::random_string(&mut rng, args.value_len);
            store.put(WriteOptions::default(), &key, &value)?;
            mirror.insert(key, value);
        }
        let insert_ms = insert.elapsed_ms();

        // Fresh random keys, so most deletes land on keys that never existed.
        let delete = Stopwatch::start();
        for _ in 0..args.deletes {
            let key = workload::random_string(&mut rng, args.key_len);
            store.delete(WriteOptions::default(), &key)?;
            mirror.remove(&key);
        }
        let delete_ms = delete.elapsed_ms();

        let compaction = Stopwatch::start();
        store.compact_all(true);
        let compaction_ms = compaction.elapsed_ms();
        let load_elapsed = total.elapsed();

        let read = Stopwatch::start();
        let mut mismatched = 0u64;
        for (key, expected) in &mirror {
            match store.get(key)? {
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
                    log::error!("missing key: {}", key);
                }
            }
        }
        let read_ms = read.elapsed_ms();

        let rate = perf::throughput(args.inserts + args.deletes, load_elapsed);

        perf_log.append(&[
            now_secs().to_string(),
            iteration.to_string(),
            insert_ms.to_string(),
            delete_ms.to_string(),
            compaction_ms.to_string(),
            read_ms.to_string(),
            format!("{:.2}", rate),
        ])?;
        log::info!(
            "iteration {}: insert={}ms delete={}ms compaction={}ms read={}ms \
             throughput={:.2} ops/s reads_ok={}",
            iteration,
            insert_ms,
            delete_ms,
            compaction_ms,
            read_ms,
            rate,
            if mismatched == 0 { "yes" } else { "no" }
        );

        interrupt.sleep(Duration::from_secs(args.pause_secs));
    }

    if let Some(stats) = store.statistics() {
        println!("engine statistics:\n{}", stats);
    }
    log::info!("load stopped, database directory {}", store.path().display());
    Ok(())
}
