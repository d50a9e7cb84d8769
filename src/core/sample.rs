use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// One row of `melbourne_trend.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyPopulationSample {
    pub year: i32,
    pub greater_melbourne: f64,
}

impl YearlyPopulationSample {
    #[must_use]
    pub const fn new(year: i32, greater_melbourne: f64) -> Self {
        Self {
            year,
            greater_melbourne,
        }
    }
}

/// Canonical sample sequence: ascending by year, one sample per year.
///
/// The year ordering doubles as the lookup index, so hover resolution is a
/// binary search rather than a scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSet {
    samples: Vec<YearlyPopulationSample>,
}

impl SampleSet {
    /// Sorts by year, drops non-finite values and keeps the last sample seen
    /// for a repeated year.
    #[must_use]
    pub fn canonicalize(mut samples: Vec<YearlyPopulationSample>) -> Self {
        let original_len = samples.len();
        samples.retain(|sample| sample.greater_melbourne.is_finite());
        // Stable sort keeps input order among equal years, so "last wins" holds.
        samples.sort_by_key(|sample| sample.year);

        let mut deduped: Vec<YearlyPopulationSample> = Vec::with_capacity(samples.len());
        let mut duplicate_count = 0_usize;
        for sample in samples {
            if let Some(last) = deduped.last_mut() {
                if last.year == sample.year {
                    *last = sample;
                    duplicate_count += 1;
                    continue;
                }
            }
            deduped.push(sample);
        }

        let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
        if filtered_count > 0 || duplicate_count > 0 {
            warn!(
                filtered_count,
                duplicate_count,
                canonical_count = deduped.len(),
                "canonicalized yearly samples"
            );
        }

        Self { samples: deduped }
    }

    /// Like [`SampleSet::canonicalize`] but rejects an empty result.
    pub fn try_from_samples(samples: Vec<YearlyPopulationSample>) -> ChartResult<Self> {
        let set = Self::canonicalize(samples);
        if set.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        Ok(set)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[YearlyPopulationSample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Exact-year lookup. There is no nearest-match fallback.
    #[must_use]
    pub fn find_year(&self, year: i32) -> Option<&YearlyPopulationSample> {
        self.samples
            .binary_search_by(|sample| sample.year.cmp(&year))
            .ok()
            .map(|idx| &self.samples[idx])
    }

    #[must_use]
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        Some((self.samples.first()?.year, self.samples.last()?.year))
    }

    #[must_use]
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut values = self.samples.iter().map(|sample| sample.greater_melbourne);
        let first = values.next()?;
        Some(values.fold((first, first), |(min, max), value| {
            let min = if value.total_cmp(&min) == Ordering::Less {
                value
            } else {
                min
            };
            let max = if value.total_cmp(&max) == Ordering::Greater {
                value
            } else {
                max
            };
            (min, max)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_keeps_last_duplicate() {
        let set = SampleSet::canonicalize(vec![
            YearlyPopulationSample::new(2010, 1.0),
            YearlyPopulationSample::new(2000, 5.0),
            YearlyPopulationSample::new(2010, 2.0),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].year, 2000);
        assert_eq!(set.as_slice()[1].greater_melbourne, 2.0);
    }

    #[test]
    fn value_extent_covers_all_samples() {
        let set = SampleSet::canonicalize(vec![
            YearlyPopulationSample::new(2001, 7.0),
            YearlyPopulationSample::new(2002, -3.0),
            YearlyPopulationSample::new(2003, 11.0),
        ]);
        assert_eq!(set.value_extent(), Some((-3.0, 11.0)));
    }
}
