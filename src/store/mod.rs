use std::path::{Path, PathBuf};

use rocksdb::{CompactOptions, DBCompactionStyle, FlushOptions};
use thiserror::Error;

use crate::{CompactionStyle, StoreOptions, WriteOptions};

// The engine reports per-level file counts for this many levels.
pub const NUM_LEVELS: usize = 7;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("engine error: {0}")]
    Engine(#[from] rocksdb::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Store {
    db: rocksdb::DB,
    options: rocksdb::Options,
    path: PathBuf,
}

impl Store {
    pub fn open<P: AsRef<Path>>(path: P, options: StoreOptions) -> Result<Self, StoreError> {
        let mut opts = rocksdb::Options::default();
        opts.create_if_missing(options.create_if_missing);
        opts.set_write_buffer_size(options.write_buffer_size);
        opts.set_max_write_buffer_number(options.max_write_buffer_number);
        opts.set_level_zero_file_num_compaction_trigger(options.level0_file_num_compaction_trigger);
        opts.set_compaction_style(match options.compaction_style {
            CompactionStyle::Level => DBCompactionStyle::Level,
            CompactionStyle::Universal => DBCompactionStyle::Universal,
            CompactionStyle::Fifo => DBCompactionStyle::Fifo,
        });
        if options.enable_statistics {
            opts.enable_statistics();
        }

        log::info!("opening database at {}", path.as_ref().display());
        let db = rocksdb::DB::open(&opts, path.as_ref())?;
        Ok(Self {
            db,
            options: opts,
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn put<K, V>(&self, options: WriteOptions, key: K, value: V) -> Result<(), StoreError>
    where
        K: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        self.db.put_opt(key, value, &write_options(options))?;
        Ok(())
    }

    pub fn delete<K: AsRef<[u8]>>(&self, options: WriteOptions, key: K) -> Result<(), StoreError> {
        self.db.delete_opt(key, &write_options(options))?;
        Ok(())
    }

    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.db.get(key)?)
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        let mut opts = FlushOptions::default();
        opts.set_wait(true);
        self.db.flush_opt(&opts)?;
        Ok(())
    }

    pub fn compact_all(&self, exclusive_manual: bool) {
        let mut opts = CompactOptions::default();
        opts.set_exclusive_manual_compaction(exclusive_manual);
        self.db
            .compact_range_opt(None::<&[u8]>, None::<&[u8]>, &opts);
    }

    pub fn files_at_level(&self, level: usize) -> Result<Option<u64>, StoreError> {
        let name = format!("rocksdb.num-files-at-level{}", level);
        Ok(self.db.property_int_value(name)?)
    }

    // Present only when the store was opened with enable_statistics.
    pub fn statistics(&self) -> Option<String> {
        self.options.get_statistics()
    }
}

fn write_options(options: WriteOptions) -> rocksdb::WriteOptions {
    let mut opts = rocksdb::WriteOptions::default();
    opts.set_sync(options.sync);
    opts.disable_wal(options.disable_wal);
    opts
}
