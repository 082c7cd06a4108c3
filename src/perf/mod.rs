use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}

pub fn throughput(ops: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    ops as f64 / secs
}

// One CSV file, header written at creation, one row per append. Rows are
// flushed immediately so an interrupted run keeps everything logged so far.
pub struct PerfLog {
    writer: BufWriter<File>,
    columns: usize,
    path: PathBuf,
}

impl PerfLog {
    pub fn create<P: AsRef<Path>>(path: P, columns: &[&str]) -> io::Result<Self> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", columns.join(","))?;
        writer.flush()?;
        Ok(Self {
            writer,
            columns: columns.len(),
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn append(&mut self, fields: &[String]) -> io::Result<()> {
        if fields.len() != self.columns {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "row has {} fields, header has {}",
                    fields.len(),
                    self.columns
                ),
            ));
        }
        writeln!(self.writer, "{}", fields.join(","))?;
        self.writer.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
