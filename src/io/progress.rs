//! Attempt progress display for multi-attempt generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::algorithm::builder::SearchStats;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Attempts: [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over generation attempts
///
/// Hidden bars accept the same calls, so callers never branch on
/// visibility.
pub struct AttemptProgress {
    bar: ProgressBar,
    attempts_seen: usize,
    last_stats: SearchStats,
}

impl AttemptProgress {
    /// Create a bar for `total` attempts, drawn only when `visible`
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(ATTEMPT_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            attempts_seen: 0,
            last_stats: SearchStats::default(),
        }
    }

    /// Report a finished attempt
    pub fn record(&mut self, index: usize, succeeded: bool, stats: SearchStats) {
        self.attempts_seen = self.attempts_seen.max(index);
        self.last_stats = stats;
        self.bar.set_position(index as u64);
        self.bar.set_message(format!(
            "{} ({} placements, {} rollbacks)",
            if succeeded { "complete" } else { "failed" },
            stats.placements,
            stats.rollbacks
        ));
    }

    /// Number of attempts reported so far
    pub const fn attempts_seen(&self) -> usize {
        self.attempts_seen
    }

    /// Statistics of the most recent attempt
    pub const fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
