use crate::csv_processor::chunker::{ColumnIndices, RowChunks};
use crate::utils::{LabelerError, Result};
use csv::StringRecord;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub identifier: String,
    pub text: String,
}

pub struct SampleLoader {
    path: PathBuf,
    id_column: String,
    text_column: String,
    chunk_size: usize,
}

impl SampleLoader {
    pub fn new(
        path: impl Into<PathBuf>,
        id_column: impl Into<String>,
        text_column: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            id_column: id_column.into(),
            text_column: text_column.into(),
            chunk_size: 10_000,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn load_sample<G: Rng + ?Sized>(
        &self,
        sample_size: usize,
        rng: &mut G,
    ) -> Result<Vec<SourceRow>> {
        let mut rows = self.load_usable_rows()?;
        tracing::info!(usable_rows = rows.len(), "Finished reading input");

        rows.shuffle(rng);
        rows.truncate(sample_size);

        tracing::info!(sampled = rows.len(), requested = sample_size, "Sample drawn");
        Ok(rows)
    }

    pub fn load_usable_rows(&self) -> Result<Vec<SourceRow>> {
        if !self.path.exists() {
            return Err(LabelerError::FileNotFound(self.path.display().to_string()));
        }

        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let headers = reader.headers()?.clone();

        if headers.is_empty() {
            tracing::warn!(path = %self.path.display(), "Input file is empty");
            return Ok(Vec::new());
        }

        let columns = self.resolve_columns(&headers)?;

        tracing::info!(
            path = %self.path.display(),
            chunk_size = self.chunk_size,
            "Reading input in chunks"
        );

        let mut rows = Vec::new();
        for chunk in RowChunks::new(reader, columns, self.chunk_size) {
            let chunk = chunk?;
            tracing::debug!(
                chunk_index = chunk.index,
                records_read = chunk.records_read,
                usable = chunk.rows.len(),
                "Chunk read"
            );
            rows.extend(chunk.rows);
        }

        Ok(rows)
    }

    fn resolve_columns(&self, headers: &StringRecord) -> Result<ColumnIndices> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        match (position(&self.id_column), position(&self.text_column)) {
            (Some(id), Some(text)) => Ok(ColumnIndices { id, text }),
            (id, text) => {
                let mut missing = Vec::new();
                if id.is_none() {
                    missing.push(self.id_column.clone());
                }
                if text.is_none() {
                    missing.push(self.text_column.clone());
                }
                Err(LabelerError::SchemaError {
                    path: self.path.display().to_string(),
                    missing,
                })
            }
        }
    }
}
