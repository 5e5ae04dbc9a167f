use crate::labeling::label::{LabelRecord, LabelRow, OUTPUT_HEADERS};
use crate::utils::{LabelerError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LabelStore {
    records: HashMap<String, LabelRecord>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No existing labels, starting fresh");
            return Ok(Self::new());
        }

        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Self::new());
        }

        let corrupt = |reason: String| LabelerError::StoreCorruptError {
            path: path.display().to_string(),
            reason,
        };

        let mut reader = csv::Reader::from_reader(file);
        let headers = reader
            .headers()
            .map_err(|e| corrupt(format!("header: {}", e)))?
            .clone();
        let missing: Vec<&str> = OUTPUT_HEADERS
            .iter()
            .copied()
            .filter(|name| !headers.iter().any(|h| h == *name))
            .collect();
        if !missing.is_empty() {
            return Err(corrupt(format!("missing column(s): {}", missing.join(", "))));
        }

        let mut records = HashMap::new();

        for (index, result) in reader.deserialize::<LabelRow>().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let row = result.map_err(|e| corrupt(format!("line {}: {}", line, e)))?;
            let record =
                LabelRecord::try_from(row).map_err(|e| corrupt(format!("line {}: {}", line, e)))?;
            records.insert(record.identifier.clone(), record);
        }

        tracing::info!(
            path = %path.display(),
            existing = records.len(),
            "Loaded existing labels"
        );

        Ok(Self { records })
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.records.contains_key(identifier)
    }

    pub fn insert(&mut self, record: LabelRecord) {
        self.records.insert(record.identifier.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
