use chrono::{DateTime, Utc};

use quiz_core::model::PatternId;

/// One pass through a shuffled sequence of pattern ids.
///
/// Pure state: position and counters move only through the `pub(crate)`
/// mutators the engine drives. A wrong guess never advances the position,
/// so `wrong_guesses` can exceed the item count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    order: Vec<PatternId>,
    current: usize,
    hints_requested: u32,
    wrong_guesses: u32,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    pub(crate) fn new(order: Vec<PatternId>, started_at: DateTime<Utc>) -> Self {
        Self {
            order,
            current: 0,
            hints_requested: 0,
            wrong_guesses: 0,
            started_at,
        }
    }

    /// The shuffled id order for this session.
    #[must_use]
    pub fn order(&self) -> &[PatternId] {
        &self.order
    }

    /// Total number of items in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Zero-based position of the item currently shown.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn hints_requested(&self) -> u32 {
        self.hints_requested
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// True once the position has moved past the last item.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.order.len()
    }

    /// Id of the item currently shown, `None` once complete.
    #[must_use]
    pub fn current_id(&self) -> Option<PatternId> {
        self.order.get(self.current).copied()
    }

    pub(crate) fn record_hint(&mut self) {
        self.hints_requested = self.hints_requested.saturating_add(1);
    }

    pub(crate) fn record_wrong(&mut self) {
        self.wrong_guesses = self.wrong_guesses.saturating_add(1);
    }

    pub(crate) fn advance(&mut self) {
        if self.current < self.order.len() {
            self.current += 1;
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
