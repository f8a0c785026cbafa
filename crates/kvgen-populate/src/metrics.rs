//! Per-phase counters and the final run report.

use std::time::Duration;

/// Metrics from one load or delete phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseMetrics {
    /// Rows written or deleted.
    pub rows: u64,
    /// Rows skipped because the key was taken by a concurrent writer.
    pub skipped: u64,
    /// Key re-samples needed to avoid collisions.
    pub resamples: u64,
    /// Wall-clock time of the phase.
    pub duration: Duration,
}

impl PhaseMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.rows as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Written plus skipped.
    pub fn outcomes(&self) -> u64 {
        self.rows + self.skipped
    }
}

/// Everything a run did, returned to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Child rows requested.
    pub target: u64,
    /// Deletions across both tables.
    pub teardown: PhaseMetrics,
    pub children_deleted: u64,
    pub parents_deleted: u64,
    pub parents: PhaseMetrics,
    pub children: PhaseMetrics,
    pub total_duration: Duration,
}

impl LoadReport {
    pub fn deleted(&self) -> u64 {
        self.teardown.rows
    }

    /// New child rows written.
    pub fn inserted(&self) -> u64 {
        self.children.rows
    }

    pub fn skipped(&self) -> u64 {
        self.children.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_second() {
        let metrics = PhaseMetrics {
            rows: 500,
            skipped: 2,
            resamples: 0,
            duration: Duration::from_millis(250),
        };
        assert!((metrics.rows_per_second() - 2000.0).abs() < 1e-6);
        assert_eq!(metrics.outcomes(), 502);
    }

    #[test]
    fn test_report_counters() {
        let report = LoadReport {
            target: 10,
            teardown: PhaseMetrics {
                rows: 12,
                ..PhaseMetrics::default()
            },
            children_deleted: 7,
            parents_deleted: 5,
            children: PhaseMetrics {
                rows: 9,
                skipped: 1,
                ..PhaseMetrics::default()
            },
            ..LoadReport::default()
        };
        assert_eq!(report.deleted(), 12);
        assert_eq!(report.inserted(), 9);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.children.outcomes(), report.target);
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(PhaseMetrics::default().rows_per_second(), 0.0);
    }
}
