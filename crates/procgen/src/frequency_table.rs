//! The frequency table: stellar classifications weighted by how often they occur.

use starmap_core::{ClassificationRecord, GenerationError, GenerationResult};

/// Frequencies are percentages and should add up to this.
pub const EXPECTED_TOTAL: f64 = 100.0;

/// Allowed deviation of the total from [`EXPECTED_TOTAL`] before a warning is logged.
pub const NORMALIZATION_TOLERANCE: f64 = 0.01;

/// A validated, non-empty set of classification records. Immutable once built.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    records: Vec<ClassificationRecord>,
    total: f64,
}

impl FrequencyTable {
    /// Validate `records`. Empty tables, negative or non-finite frequencies and all-zero
    /// tables are data errors; a total away from 100 is only logged.
    pub fn new(records: Vec<ClassificationRecord>) -> GenerationResult<Self> {
        if records.is_empty() {
            return Err(GenerationError::EmptyTable);
        }
        for (index, record) in records.iter().enumerate() {
            if !record.frequency.is_finite() || record.frequency < 0.0 {
                return Err(GenerationError::InvalidFrequency {
                    index,
                    value: record.frequency,
                });
            }
        }

        let total: f64 = records.iter().map(|r| r.frequency).sum();
        if total <= 0.0 {
            return Err(GenerationError::DegenerateTable { total });
        }

        log::info!("Frequency table: {} classifications, total frequency {}%", records.len(), total);
        if (total - EXPECTED_TOTAL).abs() > NORMALIZATION_TOLERANCE {
            log::warn!(
                "Total frequency is {}%, expected {}%; draws above the total fall on the most common class",
                total,
                EXPECTED_TOTAL
            );
        }

        Ok(Self { records, total })
    }

    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_frequency(&self) -> f64 {
        self.total
    }

    pub fn is_normalized(&self) -> bool {
        (self.total - EXPECTED_TOTAL).abs() <= NORMALIZATION_TOLERANCE
    }
}
