//! In-memory model of one compression run.
//!
//! Sizes are tracked in MiB rounded to two decimals, matching what ends up in
//! the report file. Totals are rebuilt from the summed sizes rather than from
//! per-file percentages.

use crate::utils::{bytes_to_mib, round2, size_delta};
use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// 1-based position in processing order
    pub index: usize,
    pub name: String,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    pub original_size_mb: f64,
    pub compressed_size_mb: f64,
    /// Original minus compressed; negative when the re-encode grew the file
    pub delta_mb: f64,
    /// `None` when the original rounds to 0.00 MB
    pub delta_pct: Option<f64>,
}

impl ImageRecord {
    pub fn from_sizes(
        index: usize,
        name: impl Into<String>,
        original_bytes: u64,
        compressed_bytes: u64,
    ) -> Self {
        let original_size_mb = bytes_to_mib(original_bytes);
        let compressed_size_mb = bytes_to_mib(compressed_bytes);
        let (delta_mb, delta_pct) = size_delta(original_size_mb, compressed_size_mb);

        Self {
            index,
            name: name.into(),
            original_bytes,
            compressed_bytes,
            original_size_mb,
            compressed_size_mb,
            delta_mb,
            delta_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportTotals {
    pub original_size_mb: f64,
    pub compressed_size_mb: f64,
    pub delta_mb: f64,
    pub delta_pct: Option<f64>,
}

impl ReportTotals {
    pub fn from_records(records: &[ImageRecord]) -> Self {
        let original_size_mb = round2(records.iter().map(|r| r.original_size_mb).sum());
        let compressed_size_mb = round2(records.iter().map(|r| r.compressed_size_mb).sum());
        let (delta_mb, delta_pct) = size_delta(original_size_mb, compressed_size_mb);

        Self {
            original_size_mb,
            compressed_size_mb,
            delta_mb,
            delta_pct,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompressionReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub timestamp: DateTime<Local>,
    records: Vec<ImageRecord>,
}

impl CompressionReport {
    pub fn new(source: PathBuf, destination: PathBuf, timestamp: DateTime<Local>) -> Self {
        Self {
            source,
            destination,
            timestamp,
            records: Vec::new(),
        }
    }

    /// Appends a record, numbering it after the ones already present.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        original_bytes: u64,
        compressed_bytes: u64,
    ) -> &ImageRecord {
        let index = self.records.len() + 1;
        self.records
            .push(ImageRecord::from_sizes(index, name, original_bytes, compressed_bytes));
        &self.records[index - 1]
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn totals(&self) -> ReportTotals {
        ReportTotals::from_records(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
