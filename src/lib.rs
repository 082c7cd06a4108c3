pub mod logging;
pub mod perf;
pub mod signal;
pub mod store;
pub mod utils;
pub mod workload;

pub use store::{Store, StoreError};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CompactionStyle {
    Level,
    Universal,
    Fifo,
}

impl std::str::FromStr for CompactionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level" => Ok(Self::Level),
            "universal" => Ok(Self::Universal),
            "fifo" => Ok(Self::Fifo),
            other => Err(format!(
                "unknown compaction style {:?}, expected level, universal or fifo",
                other
            )),
        }
    }
}

#[derive(Clone)]
pub struct StoreOptions {
    pub create_if_missing: bool,
    pub write_buffer_size: usize,
    pub max_write_buffer_number: i32,
    pub level0_file_num_compaction_trigger: i32,
    pub compaction_style: CompactionStyle,
    pub enable_statistics: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            create_if_missing: false,
            write_buffer_size: 64 * 1024 * 1024,
            max_write_buffer_number: 2,
            level0_file_num_compaction_trigger: 4,
            compaction_style: CompactionStyle::Level,
            enable_statistics: false,
        }
    }
}

#[derive(Default, Copy, Clone)]
pub struct WriteOptions {
    pub sync: bool,
    pub disable_wal: bool,
}

#[cfg(test)]
mod tests {
    use super::CompactionStyle;

    #[test]
    fn test_compaction_style_from_str() {
        assert_eq!("level".parse(), Ok(CompactionStyle::Level));
        assert_eq!("universal".parse(), Ok(CompactionStyle::Universal));
        assert_eq!("fifo".parse(), Ok(CompactionStyle::Fifo));
        assert!("Level".parse::<CompactionStyle>().is_err());
    }
}
