//! Session progress.

/// Progress through the problem set. Both counters only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    index: usize,
    correct_count: usize,
    total: usize,
}

/// Score so far, always out of the full problem count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub correct: usize,
    pub total: usize,
}

impl SessionState {
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            correct_count: 0,
            total,
        }
    }

    /// Index of the problem currently being asked.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.total
    }

    /// Move past the current problem, counting it if it was answered correctly.
    pub fn record(&mut self, correct: bool) {
        debug_assert!(!self.is_complete(), "recorded past the last problem");
        if correct {
            self.correct_count += 1;
        }
        self.index += 1;
    }

    pub fn tally(&self) -> Tally {
        Tally {
            correct: self.correct_count,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_advances_monotonically() {
        let mut state = SessionState::new(3);
        let mut previous = state.correct_count();

        for correct in [true, false, true] {
            state.record(correct);
            assert!(state.correct_count() >= previous);
            assert!(state.correct_count() <= state.index());
            previous = state.correct_count();
        }

        assert!(state.is_complete());
        assert_eq!(state.tally(), Tally { correct: 2, total: 3 });
    }

    #[test]
    fn test_tally_denominator_is_total() {
        let mut state = SessionState::new(5);
        state.record(true);
        assert_eq!(state.tally().total, 5);
    }

    #[test]
    fn test_empty_session_is_complete() {
        assert!(SessionState::new(0).is_complete());
    }
}
