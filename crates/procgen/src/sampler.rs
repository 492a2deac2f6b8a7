//! Weighted classification sampling over a cumulative frequency table.
//!
//! Records are stable-sorted by ascending frequency before the running sum is taken, so rare
//! classes occupy the low end of the cumulative range and common classes the high end. A draw is
//! a uniform value in `[0, 100)` looked up with a found-or-next-higher search.

use crate::frequency_table::{FrequencyTable, EXPECTED_TOTAL};
use rand::Rng;
use starmap_core::{ClassificationRecord, GenerationResult};

/// Draws classifications in proportion to their table frequency.
#[derive(Debug, Clone)]
pub struct ClassificationSampler {
    /// Sorted by ascending frequency.
    records: Vec<ClassificationRecord>,
    /// Running sum of `records[..=i].frequency`.
    cumulative: Vec<f64>,
}

impl ClassificationSampler {
    /// Build the cumulative distribution once. The table is non-empty by construction.
    pub fn new(table: &FrequencyTable) -> Self {
        let mut records = table.records().to_vec();
        // Vec::sort_by is stable: zero-frequency ties keep their table order.
        records.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));

        let mut cumulative = Vec::with_capacity(records.len());
        let mut sum = 0.0;
        for record in &records {
            sum += record.frequency;
            cumulative.push(sum);
        }

        log::debug!("Cumulative distribution built over {} classifications", records.len());
        Self { records, cumulative }
    }

    /// Validate `records` as a table and build a sampler from it.
    pub fn from_records(records: Vec<ClassificationRecord>) -> GenerationResult<Self> {
        Ok(Self::new(&FrequencyTable::new(records)?))
    }

    /// Draw one classification.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &ClassificationRecord {
        let u = rng.gen_range(0.0..EXPECTED_TOTAL);
        &self.records[self.index_for(u)]
    }

    /// Index of the first cumulative entry `>= u`, clamped into the table.
    pub fn index_for(&self, u: f64) -> usize {
        let index = self.cumulative.partition_point(|&w| w < u);
        index.min(self.records.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Final running total. Close to 100 for a normalized table.
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Sorted records paired with their cumulative weight.
    pub fn entries(&self) -> impl Iterator<Item = (&ClassificationRecord, f64)> + '_ {
        self.records.iter().zip(self.cumulative.iter().copied())
    }
}
