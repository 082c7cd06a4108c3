use assert_fs::prelude::*;
use rocks_bench::perf::PerfLog;

const COLUMNS: &[&str] = &[
    "Timestamp",
    "Iteration",
    "InsertTime(ms)",
    "DeleteTime(ms)",
    "CompactionTime(ms)",
    "Throughput(ops/s)",
];

#[test]
fn test_perf_log_file_layout() {
    let tmp_dir = assert_fs::TempDir::new().unwrap();
    let log_file = tmp_dir.child("perf.csv");

    let mut perf_log = PerfLog::create(log_file.path(), COLUMNS).unwrap();
    perf_log
        .append(&[
            "1700000000".to_string(),
            "1".to_string(),
            "1200".to_string(),
            "480".to_string(),
            "2150".to_string(),
            "39164.49".to_string(),
        ])
        .unwrap();
    perf_log
        .append(&[
            "1700000009".to_string(),
            "2".to_string(),
            "1180".to_string(),
            "490".to_string(),
            "2010".to_string(),
            "40760.87".to_string(),
        ])
        .unwrap();

    log_file.assert(
        "Timestamp,Iteration,InsertTime(ms),DeleteTime(ms),CompactionTime(ms),Throughput(ops/s)\n\
         1700000000,1,1200,480,2150,39164.49\n\
         1700000009,2,1180,490,2010,40760.87\n",
    );
}

#[test]
fn test_rejected_row_leaves_file_untouched() {
    let tmp_dir = assert_fs::TempDir::new().unwrap();
    let log_file = tmp_dir.child("perf.csv");

    let mut perf_log = PerfLog::create(log_file.path(), COLUMNS).unwrap();
    assert!(perf_log.append(&["1700000000".to_string()]).is_err());

    log_file.assert(
        "Timestamp,Iteration,InsertTime(ms),DeleteTime(ms),CompactionTime(ms),Throughput(ops/s)\n",
    );
}
