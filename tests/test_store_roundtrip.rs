use rocks_bench::{store, Store, StoreOptions, WriteOptions};
use tempfile::tempdir;

#[test]
fn test_store_write_and_read() {
    let tmp_dir = tempdir().unwrap();
    let db_path = tmp_dir.path().join("db");

    let mut options = StoreOptions::default();
    options.create_if_missing = true;
    options.enable_statistics = true;
    options.write_buffer_size = 64 * 1024;
    options.level0_file_num_compaction_trigger = 2;

    let store = Store::open(&db_path, options).unwrap();
    let data = [
        ("lang009", "Ruby"),
        ("lang002", "Rust"),
        ("lang001", "C++"),
        ("lang003", "Golang"),
        ("lang004", "Python"),
        ("lang005", "Typescript"),
        ("lang007", "Clojure"),
        ("lang008", "Scala"),
        ("lang006", "Kotlin"),
        ("db02", "Mysql"),
        ("db01", "Oracle"),
        ("db04", "Redis"),
        ("db03", "Sybase"),
        ("db05", "TiDB"),
        ("db05", "MongoDB"),
    ];

    for (key, value) in data {
        store.put(WriteOptions::default(), key, value).unwrap();
    }
    store.delete(WriteOptions::default(), "db01").unwrap();
    store.delete(WriteOptions::default(), "lang005").unwrap();

    assert!(store.get("lang005").unwrap().is_none());
    assert!(store.get("db01").unwrap().is_none());
    assert!(store.get("network").unwrap().is_none());
    assert_eq!(store.get("db05").unwrap().unwrap(), "MongoDB".as_bytes());
    assert_eq!(store.get("lang002").unwrap().unwrap(), "Rust".as_bytes());

    // Same answers once the pairs have moved out of the memtable.
    store.flush().unwrap();
    assert!(store.get("lang005").unwrap().is_none());
    assert_eq!(store.get("db05").unwrap().unwrap(), "MongoDB".as_bytes());
    assert_eq!(store.get("lang006").unwrap().unwrap(), "Kotlin".as_bytes());

    store.compact_all(false);
    assert!(store.get("db01").unwrap().is_none());
    assert_eq!(store.get("lang002").unwrap().unwrap(), "Rust".as_bytes());

    for level in 0..store::NUM_LEVELS {
        let count = store.files_at_level(level).unwrap();
        assert!(count.is_some(), "no file count reported for level {}", level);
    }

    assert!(store.statistics().is_some());
}

#[test]
fn test_statistics_absent_when_disabled() {
    let tmp_dir = tempdir().unwrap();
    let db_path = tmp_dir.path().join("db");

    let mut options = StoreOptions::default();
    options.create_if_missing = true;

    let store = Store::open(&db_path, options).unwrap();
    store.put(WriteOptions::default(), "k", "v").unwrap();
    assert!(store.statistics().is_none());
}

#[test]
fn test_open_fails_without_create_if_missing() {
    let tmp_dir = tempdir().unwrap();
    let db_path = tmp_dir.path().join("absent");

    let result = Store::open(&db_path, StoreOptions::default());
    assert!(result.is_err());
}
