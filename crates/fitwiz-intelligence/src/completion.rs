// ABOUTME: Session completion metrics - logged versus prescribed exercise counts
// ABOUTME: Produces the completion percentage reported when a workout is finished
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use serde::{Deserialize, Serialize};

/// How much of a workout was logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    /// Exercises with at least one log
    pub logged: usize,
    /// Exercises prescribed by the workout
    pub total: usize,
    /// `logged / total` as a whole percentage, rounded half up
    pub percent: u32,
}

impl CompletionSummary {
    /// Summarize `logged` out of `total` exercises
    ///
    /// An empty workout reports 0%. Logs beyond the prescribed count are
    /// reported as is and may exceed 100%.
    #[must_use]
    pub fn from_counts(logged: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            let scaled = (logged as f64 / total as f64) * 100.0;
            scaled.round() as u32
        };
        Self {
            logged,
            total,
            percent,
        }
    }

    /// True when every prescribed exercise was logged
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.total > 0 && self.logged >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_to_nearest() {
        assert_eq!(CompletionSummary::from_counts(2, 3).percent, 67);
        assert_eq!(CompletionSummary::from_counts(1, 3).percent, 33);
        assert_eq!(CompletionSummary::from_counts(0, 0).percent, 0);
        assert!(!CompletionSummary::from_counts(0, 0).is_full());
        assert!(CompletionSummary::from_counts(4, 4).is_full());
    }
}
