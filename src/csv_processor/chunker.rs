use crate::csv_processor::reader::SourceRow;
use crate::utils::Result;
use csv::StringRecord;
use std::io::Read;

#[derive(Debug, Clone, Copy)]
pub struct ColumnIndices {
    pub id: usize,
    pub text: usize,
}

pub struct RowChunks<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnIndices,
    chunk_size: usize,
    record: StringRecord,
    chunk_index: usize,
    exhausted: bool,
}

#[derive(Debug, Clone)]
pub struct RowChunk {
    pub index: usize,
    pub records_read: usize,
    pub rows: Vec<SourceRow>,
}

impl<R: Read> RowChunks<R> {
    pub fn new(reader: csv::Reader<R>, columns: ColumnIndices, chunk_size: usize) -> Self {
        Self {
            reader,
            columns,
            chunk_size: chunk_size.max(1),
            record: StringRecord::new(),
            chunk_index: 0,
            exhausted: false,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn read_chunk(&mut self) -> Result<Option<RowChunk>> {
        let mut rows = Vec::new();
        let mut records_read = 0;

        while records_read < self.chunk_size {
            if !self.reader.read_record(&mut self.record)? {
                self.exhausted = true;
                break;
            }
            records_read += 1;

            if let Some(row) = usable_row(&self.record, self.columns) {
                rows.push(row);
            }
        }

        if records_read == 0 {
            return Ok(None);
        }

        let chunk = RowChunk {
            index: self.chunk_index,
            records_read,
            rows,
        };
        self.chunk_index += 1;
        Ok(Some(chunk))
    }
}

impl<R: Read> Iterator for RowChunks<R> {
    type Item = Result<RowChunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        self.read_chunk().transpose()
    }
}

pub fn usable_row(record: &StringRecord, columns: ColumnIndices) -> Option<SourceRow> {
    let text = record.get(columns.text)?;
    if text.trim().is_empty() {
        return None;
    }

    Some(SourceRow {
        identifier: record.get(columns.id).unwrap_or_default().to_string(),
        text: text.to_string(),
    })
}
