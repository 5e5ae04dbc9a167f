use crate::labeling::label::{LabelRecord, LabelRow, OUTPUT_HEADERS};
use crate::utils::Result;
use csv::Writer;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Every record is flushed and synced before `append` returns, so an
/// interrupted session loses at most the row that was being labeled.
pub struct LabelWriter {
    path: PathBuf,
    writer: Writer<File>,
    rows_written: usize,
}

impl LabelWriter {
    pub fn open_append(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;
        let len = file.metadata()?.len();
        let needs_header = len == 0;

        // A hand-edited file may lack the final newline; the next row must not join the last one.
        if !needs_header && !ends_with_newline(&mut file, len)? {
            file.write_all(b"\n")?;
            tracing::warn!(path = %path.display(), "Output did not end with a newline, terminated last record");
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(OUTPUT_HEADERS)?;
            writer.flush()?;
            tracing::debug!(path = %path.display(), "Wrote output header");
        }

        Ok(Self {
            path,
            writer,
            rows_written: 0,
        })
    }

    pub fn append(&mut self, record: &LabelRecord) -> Result<()> {
        self.writer.serialize(LabelRow::from(record))?;
        self.flush()?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_data()?;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ends_with_newline(file: &mut File, len: u64) -> Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
