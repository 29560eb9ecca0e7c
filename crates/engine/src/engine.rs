use rand::RngCore;
use tracing::debug;

use quiz_core::Clock;
use quiz_core::model::{PatternCatalog, PatternId, QuizSettings, QuizSummary};

use crate::display::DisplayInstruction;
use crate::error::QuizError;
use crate::session::QuizSession;
use crate::shuffle::{self, ShuffleStyle};

//
// ─── QUIZ ENGINE ───────────────────────────────────────────────────────────────
//

/// Drives quiz sessions over a fixed range of the pattern catalog.
///
/// The engine owns the active catalog slice, settings, clock, and RNG, and
/// mutates a single live session. Every operation returns the display
/// instructions the presentation layer should act on; the engine never
/// renders or blocks.
///
/// Sessions loop continuously: completing the last item emits a summary and
/// immediately reshuffles into a fresh session.
pub struct QuizEngine {
    catalog: PatternCatalog,
    settings: QuizSettings,
    clock: Clock,
    rng: Box<dyn RngCore>,
    style: ShuffleStyle,
    session: Option<QuizSession>,
}

impl QuizEngine {
    /// Configures an engine over the inclusive id range `start..=end` of the
    /// given catalog.
    ///
    /// No session is running yet; call [`QuizEngine::start_session`] to get
    /// the first item.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the range is reversed or any id in
    /// it is missing from the catalog.
    pub fn new(
        catalog: &PatternCatalog,
        start: PatternId,
        end: PatternId,
    ) -> Result<Self, QuizError> {
        let active = catalog.slice(start, end)?;
        Ok(Self {
            catalog: active,
            settings: QuizSettings::default(),
            clock: Clock::default(),
            rng: Box::new(rand::rng()),
            style: ShuffleStyle::default(),
            session: None,
        })
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the RNG, e.g. with a seeded one for deterministic tests.
    #[must_use]
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    #[must_use]
    pub fn with_shuffle_style(mut self, style: ShuffleStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Number of patterns in the active range.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.catalog.len()
    }

    /// The live session, if one has been started.
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Shuffles a fresh session order, resets counters, and emits the first
    /// item to show.
    ///
    /// Replaces any session already in progress.
    ///
    /// # Errors
    ///
    /// Propagates catalog lookup failures, which cannot occur for an engine
    /// built through [`QuizEngine::new`].
    pub fn start_session(&mut self) -> Result<DisplayInstruction, QuizError> {
        let mut order: Vec<PatternId> = self.catalog.ids().collect();
        shuffle::shuffle(&mut order, self.style, &mut *self.rng);
        debug!(total = order.len(), "starting quiz session");
        self.session = Some(QuizSession::new(order, self.clock.now()));
        self.show_current()
    }

    /// Compares a guess against the item currently shown.
    ///
    /// A wrong guess increments the wrong counter and re-poses the same item
    /// with the expected pattern's highlights as feedback. A correct guess
    /// confirms with the same highlights and advances; finishing the last
    /// item also emits the session summary and the first item of the next,
    /// automatically started session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` before the first `start_session`.
    pub fn submit_guess(
        &mut self,
        choice: PatternId,
    ) -> Result<Vec<DisplayInstruction>, QuizError> {
        let expected = self.current_id()?;
        let highlights = self.catalog.get(expected)?.highlights().to_owned();

        if choice != expected {
            debug!(%choice, %expected, "wrong guess");
            if let Some(session) = self.session.as_mut() {
                session.record_wrong();
            }
            return Ok(vec![DisplayInstruction::ShowFeedback {
                text: highlights,
                correct: false,
            }]);
        }

        let mut out = vec![DisplayInstruction::ShowFeedback {
            text: highlights,
            correct: true,
        }];
        out.extend(self.advance()?);
        Ok(out)
    }

    /// Reveals the current pattern's intent text and counts the hint.
    ///
    /// Hints are counted but never penalized; position and the wrong counter
    /// are untouched.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` before the first `start_session`.
    pub fn request_hint(&mut self) -> Result<DisplayInstruction, QuizError> {
        let id = self.current_id()?;
        let intent = self.catalog.get(id)?.intent().to_owned();
        if let Some(session) = self.session.as_mut() {
            session.record_hint();
        }
        Ok(DisplayInstruction::ShowHint { text: intent })
    }

    fn current_id(&self) -> Result<PatternId, QuizError> {
        let session = self.session.as_ref().ok_or(QuizError::NotStarted)?;
        session.current_id().ok_or(QuizError::Completed)
    }

    fn show_current(&self) -> Result<DisplayInstruction, QuizError> {
        let pattern = self.catalog.get(self.current_id()?)?;
        Ok(DisplayInstruction::ShowItem {
            pattern: pattern.id(),
            image: pattern.image().clone(),
        })
    }

    /// Moves to the next item; on completion, grades the session and rolls
    /// straight into a new one.
    fn advance(&mut self) -> Result<Vec<DisplayInstruction>, QuizError> {
        let session = self.session.as_mut().ok_or(QuizError::NotStarted)?;
        session.advance();
        if !session.is_complete() {
            return Ok(vec![self.show_current()?]);
        }

        let completed_at = self.clock.now();
        let summary = QuizSummary::from_counts(
            session.total(),
            session.hints_requested(),
            session.wrong_guesses(),
            self.settings.pass_threshold(),
            session.started_at(),
            completed_at,
        )?;
        debug!(
            grade = summary.grade(),
            wrong = summary.wrong_guesses(),
            hints = summary.hints_requested(),
            passed = summary.passed(),
            "quiz session complete"
        );

        let mut out = vec![DisplayInstruction::ShowSummary(summary)];
        out.push(self.start_session()?);
        Ok(out)
    }
}

impl std::fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizEngine")
            .field("pattern_count", &self.catalog.len())
            .field("settings", &self.settings)
            .field("style", &self.style)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
