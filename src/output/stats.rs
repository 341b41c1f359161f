//! Run statistics
//!
//! Counts where each description came from, for the end-of-run log line.

use crate::enrich::{DescriptionSource, EnrichedEntry};
use std::time::Duration;

/// Enrichment outcome counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Total number of entries rendered
    pub total: usize,

    /// Described from their own page
    pub primary: usize,

    /// Described from the mirror page
    pub fallback: usize,

    /// Given the "no description" sentinel
    pub not_found: usize,

    /// Not fetched at all
    pub skipped: usize,
}

impl RunStatistics {
    /// Tallies the sources of `entries`
    pub fn from_entries(entries: &[EnrichedEntry]) -> Self {
        let mut stats = Self {
            total: entries.len(),
            ..Self::default()
        };

        for entry in entries {
            match entry.enrichment.source {
                DescriptionSource::Primary => stats.primary += 1,
                DescriptionSource::Fallback => stats.fallback += 1,
                DescriptionSource::NotFound => stats.not_found += 1,
                DescriptionSource::Skipped => stats.skipped += 1,
            }
        }

        stats
    }

    /// Share of entries that got a real description, in percent
    pub fn described_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.primary + self.fallback) as f64 * 100.0 / self.total as f64
    }
}

/// Logs the statistics at info level
pub fn log_statistics(stats: &RunStatistics, elapsed: Duration) {
    tracing::info!(
        "Enriched {} entries in {:.2?}: {} primary, {} fallback, {} not found, {} skipped ({:.1}% described)",
        stats.total,
        elapsed,
        stats.primary,
        stats.fallback,
        stats.not_found,
        stats.skipped,
        stats.described_percent()
    );
}
