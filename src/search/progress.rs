//! Per-round progress reporting.
//!
//! Sinks are called synchronously from the search thread after each round
//! and must return quickly.

/// Snapshot of the beam after a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// Rounds completed so far (1-based).
    pub depth: usize,
    /// Remaining hit points of the best beam state.
    pub best_health: i64,
    /// Pieces placed by the best beam state.
    pub best_moves: usize,
    /// Children generated this round before truncation.
    pub pool_size: usize,
}

pub trait ProgressSink {
    fn on_round(&mut self, progress: &SearchProgress);
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_round(&mut self, _progress: &SearchProgress) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(&SearchProgress),
{
    fn on_round(&mut self, progress: &SearchProgress) {
        self(progress)
    }
}
