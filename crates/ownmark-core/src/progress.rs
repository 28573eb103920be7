//! Batch timing and linear time-to-completion estimate.

use std::time::Duration;

/// Snapshot produced after each completed batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub batch_len: usize,
    pub batch_elapsed: Duration,
    pub marked_so_far: usize,
    pub batches_done: usize,
    pub total_elapsed: Duration,
    pub eta: Duration,
}

/// Accumulates per-batch durations for a run.
#[derive(Debug, Clone)]
pub struct Progress {
    total_names: usize,
    total_batches: usize,
    batches_done: usize,
    marked: usize,
    elapsed: Duration,
}

impl Progress {
    pub fn new(total_names: usize, total_batches: usize) -> Self {
        Self {
            total_names,
            total_batches,
            batches_done: 0,
            marked: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Record a finished batch and return the updated report.
    ///
    /// ETA is the remaining batch count times the mean batch duration so
    /// far, never negative.
    pub fn record(&mut self, batch_len: usize, batch_elapsed: Duration) -> BatchReport {
        self.batches_done += 1;
        self.marked += batch_len;
        self.elapsed += batch_elapsed;

        let remaining = self.total_batches.saturating_sub(self.batches_done);
        let mean = self.elapsed.as_secs_f64() / self.batches_done as f64;
        let eta = Duration::from_secs_f64((remaining as f64 * mean).max(0.0));

        BatchReport {
            batch_len,
            batch_elapsed,
            marked_so_far: self.marked,
            batches_done: self.batches_done,
            total_elapsed: self.elapsed,
            eta,
        }
    }

    pub fn total_names(&self) -> usize {
        self.total_names
    }

    pub fn total_batches(&self) -> usize {
        self.total_batches
    }

    pub fn batches_done(&self) -> usize {
        self.batches_done
    }

    pub fn marked(&self) -> usize {
        self.marked
    }

    /// Sum of recorded batch durations.
    pub fn total_elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progress_is_empty() {
        let progress = Progress::new(1200, 3);
        assert_eq!(progress.total_names(), 1200);
        assert_eq!(progress.total_batches(), 3);
        assert_eq!(progress.batches_done(), 0);
        assert_eq!(progress.marked(), 0);
        assert_eq!(progress.total_elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_eta_after_first_batch() {
        let mut progress = Progress::new(2500, 5);
        let report = progress.record(500, Duration::from_secs(2));
        assert_eq!(report.eta, Duration::from_secs(8));
        assert_eq!(report.marked_so_far, 500);
        assert_eq!(report.batches_done, 1);
    }

    #[test]
    fn test_eta_uses_running_mean() {
        let mut progress = Progress::new(2000, 4);
        progress.record(500, Duration::from_secs(1));
        let report = progress.record(500, Duration::from_secs(3));
        // mean 2s, 2 batches left
        assert_eq!(report.eta, Duration::from_secs(4));
        assert_eq!(report.total_elapsed, Duration::from_secs(4));
    }

    #[test]
    fn test_eta_zero_on_last_batch() {
        let mut progress = Progress::new(700, 2);
        progress.record(500, Duration::from_millis(1500));
        let report = progress.record(200, Duration::from_millis(500));
        assert_eq!(report.eta, Duration::ZERO);
        assert_eq!(progress.marked(), 700);
    }

    #[test]
    fn test_eta_never_negative_past_total() {
        let mut progress = Progress::new(1, 1);
        progress.record(1, Duration::from_secs(1));
        let report = progress.record(1, Duration::from_secs(1));
        assert_eq!(report.eta, Duration::ZERO);
        assert_eq!(progress.batches_done(), 2);
    }
}
