use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::sample::TrainingSample;

/// Sink for recorded training samples.
pub trait SampleWriter {
    fn write_sample(&mut self, sample: &TrainingSample) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    /// Samples written through this writer so far.
    fn count(&self) -> u64;
}

/// Appends samples to a text file, existing content is never truncated.
pub struct FileSampleWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    count: u64,
}

impl FileSampleWriter {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening sample file {}", path.display()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            count: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SampleWriter for FileSampleWriter {
    fn write_sample(&mut self, sample: &TrainingSample) -> Result<()> {
        writeln!(self.writer, "{sample}")
            .with_context(|| format!("writing sample to {}", self.path.display()))?;
        self.count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("flushing {}", self.path.display()))
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl SampleWriter for Vec<TrainingSample> {
    fn write_sample(&mut self, sample: &TrainingSample) -> Result<()> {
        self.push(sample.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn count(&self) -> u64 {
        self.len() as u64
    }
}
