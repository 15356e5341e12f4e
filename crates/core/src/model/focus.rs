use thiserror::Error;

/// Default focus-session length: 25 minutes.
pub const DEFAULT_FOCUS_SECS: u32 = 1500;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FocusConfigError {
    #[error("focus duration must be greater than zero seconds")]
    ZeroDuration,
}

/// Validated configuration for a focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusConfig {
    duration_secs: u32,
}

impl FocusConfig {
    /// Build a config with the given countdown length in seconds.
    ///
    /// # Errors
    ///
    /// Returns `FocusConfigError::ZeroDuration` if `duration_secs` is zero.
    pub fn new(duration_secs: u32) -> Result<Self, FocusConfigError> {
        if duration_secs == 0 {
            return Err(FocusConfigError::ZeroDuration);
        }
        Ok(Self { duration_secs })
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_FOCUS_SECS,
        }
    }
}

/// Growth stage of the companion plant, from seed to full bloom.
///
/// Ordered by progress so views can compare stages directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrowthStage {
    Seed,
    Sprout,
    Seedling,
    Budding,
    Bloom,
}

impl GrowthStage {
    /// Stage for a completion ratio in `[0.0, 1.0]`.
    ///
    /// Buckets are half-open on the upper side: a ratio that lands exactly
    /// on a threshold belongs to the next stage, so a session one fifth of
    /// the way through is already a sprout.
    #[must_use]
    pub fn for_progress(progress: f64) -> Self {
        if progress < 0.2 {
            Self::Seed
        } else if progress < 0.4 {
            Self::Sprout
        } else if progress < 0.6 {
            Self::Seedling
        } else if progress < 0.8 {
            Self::Budding
        } else {
            Self::Bloom
        }
    }

    /// Zero-based index of the stage, `Seed` through `Bloom`.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Seed => 0,
            Self::Sprout => 1,
            Self::Seedling => 2,
            Self::Budding => 3,
            Self::Bloom => 4,
        }
    }
}

/// Lifecycle phase of a [`FocusSession`], as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPhase {
    /// Fresh or reset; the countdown has not consumed any time.
    Idle,
    /// Counting down.
    Running,
    /// Stopped partway; remaining time is held.
    Paused,
    /// Reached zero; waiting for a reset.
    Completed,
}

/// What a single [`FocusSession::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed. A driver receiving
    /// this has been superseded and should stop delivering ticks.
    Skipped,
    /// One second was consumed; the countdown continues.
    Advanced,
    /// This tick consumed the final second.
    Completed,
}

/// Countdown state machine behind the focus-timer screen.
///
/// The machine itself is synchronous and single-owner; something outside
/// (the UI ticker task) calls [`tick`](Self::tick) once per elapsed second
/// while the session runs. All transitions are idempotent where the UI can
/// race them: starting a running session, pausing a paused one and ticking
/// a stopped one are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSession {
    config: FocusConfig,
    remaining_secs: u32,
    running: bool,
    completed_count: u32,
    just_completed: bool,
}

impl FocusSession {
    #[must_use]
    pub fn new(config: FocusConfig) -> Self {
        Self {
            config,
            remaining_secs: config.duration_secs(),
            running: false,
            completed_count: 0,
            just_completed: false,
        }
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.config.duration_secs()
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Sessions completed since this machine was created. Survives resets.
    #[must_use]
    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    /// True between the completing tick and the next reset.
    #[must_use]
    pub fn just_completed(&self) -> bool {
        self.just_completed
    }

    #[must_use]
    pub fn phase(&self) -> FocusPhase {
        if self.just_completed {
            FocusPhase::Completed
        } else if self.running {
            FocusPhase::Running
        } else if self.remaining_secs == self.config.duration_secs() {
            FocusPhase::Idle
        } else {
            FocusPhase::Paused
        }
    }

    /// Fraction of the session already consumed, in `[0.0, 1.0]`.
    ///
    /// Divides the elapsed and total second counts directly; both convert
    /// to `f64` exactly, so ratios like 300/1500 compare equal to their
    /// stage threshold instead of falling a rounding error short.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let elapsed = self.config.duration_secs() - self.remaining_secs;
        f64::from(elapsed) / f64::from(self.config.duration_secs())
    }

    /// Growth stage of the companion plant for the current progress.
    #[must_use]
    pub fn growth_stage(&self) -> GrowthStage {
        GrowthStage::for_progress(self.progress())
    }

    /// Begin or resume the countdown.
    ///
    /// Returns `true` if the session transitioned to running. Returns
    /// `false` without changing anything when the session is already
    /// running or sits in the completed state; a completed session must be
    /// reset before it can run again.
    pub fn start(&mut self) -> bool {
        if self.running || self.just_completed {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop the countdown, holding the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Return to a fresh countdown at the full duration.
    ///
    /// Clears the completed flag but keeps the completion tally.
    pub fn reset(&mut self) {
        self.remaining_secs = self.config.duration_secs();
        self.running = false;
        self.just_completed = false;
    }

    /// Consume one second of the countdown.
    ///
    /// Only a running session advances; anything else reports
    /// [`TickOutcome::Skipped`] and stays untouched, which is how a stale
    /// ticker learns it has been cancelled. The completing tick stops the
    /// session, raises the completed flag and bumps the tally exactly once.
    #[must_use = "a completing tick needs the cue and ticker teardown"]
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Skipped;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            self.just_completed = true;
            self.completed_count = self.completed_count.saturating_add(1);
            return TickOutcome::Completed;
        }
        TickOutcome::Advanced
    }
}

impl Default for FocusSession {
    fn default() -> Self {
        Self::new(FocusConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(duration_secs: u32) -> FocusSession {
        FocusSession::new(FocusConfig::new(duration_secs).unwrap())
    }

    fn tick_n(session: &mut FocusSession, n: u32) {
        for _ in 0..n {
            let _ = session.tick();
        }
    }

    #[test]
    fn config_rejects_zero_duration() {
        assert_eq!(FocusConfig::new(0), Err(FocusConfigError::ZeroDuration));
    }

    #[test]
    fn config_default_is_twenty_five_minutes() {
        assert_eq!(FocusConfig::default().duration_secs(), 1500);
    }

    #[test]
    fn fresh_session_is_idle_at_full_duration() {
        let session = session(1500);
        assert_eq!(session.remaining_secs(), 1500);
        assert!(!session.is_running());
        assert_eq!(session.completed_count(), 0);
        assert_eq!(session.phase(), FocusPhase::Idle);
        assert_eq!(session.growth_stage(), GrowthStage::Seed);
    }

    #[test]
    fn ticks_decrement_only_while_running() {
        let mut session = session(100);

        assert_eq!(session.tick(), TickOutcome::Skipped);
        assert_eq!(session.remaining_secs(), 100);

        assert!(session.start());
        tick_n(&mut session, 30);
        assert_eq!(session.remaining_secs(), 70);
        assert_eq!(session.phase(), FocusPhase::Running);

        session.pause();
        assert_eq!(session.tick(), TickOutcome::Skipped);
        assert_eq!(session.tick(), TickOutcome::Skipped);
        assert_eq!(session.remaining_secs(), 70);
        assert_eq!(session.phase(), FocusPhase::Paused);
    }

    #[test]
    fn start_is_a_no_op_while_running() {
        let mut session = session(100);
        assert!(session.start());
        tick_n(&mut session, 10);

        assert!(!session.start());
        assert_eq!(session.remaining_secs(), 90);
        assert!(session.is_running());
    }

    #[test]
    fn resume_continues_from_held_remaining() {
        let mut session = session(100);
        assert!(session.start());
        tick_n(&mut session, 40);
        session.pause();

        assert!(session.start());
        tick_n(&mut session, 10);
        assert_eq!(session.remaining_secs(), 50);
    }

    #[test]
    fn completing_tick_stops_and_tallies_once() {
        let mut session = session(3);
        assert!(session.start());

        assert_eq!(session.tick(), TickOutcome::Advanced);
        assert_eq!(session.tick(), TickOutcome::Advanced);
        assert_eq!(session.tick(), TickOutcome::Completed);

        assert_eq!(session.remaining_secs(), 0);
        assert!(!session.is_running());
        assert!(session.just_completed());
        assert_eq!(session.completed_count(), 1);
        assert_eq!(session.phase(), FocusPhase::Completed);
        assert_eq!(session.growth_stage(), GrowthStage::Bloom);

        // Stray ticks after completion change nothing.
        assert_eq!(session.tick(), TickOutcome::Skipped);
        assert_eq!(session.completed_count(), 1);
    }

    #[test]
    fn completed_session_cannot_start_until_reset() {
        let mut session = session(2);
        assert!(session.start());
        tick_n(&mut session, 2);
        assert!(session.just_completed());

        assert!(!session.start());
        assert!(!session.is_running());

        session.reset();
        assert!(session.start());
        assert!(session.is_running());
    }

    #[test]
    fn reset_restores_duration_and_keeps_tally() {
        let mut session = session(60);
        assert!(session.start());
        tick_n(&mut session, 60);
        assert_eq!(session.completed_count(), 1);

        session.reset();
        assert_eq!(session.remaining_secs(), 60);
        assert!(!session.is_running());
        assert!(!session.just_completed());
        assert_eq!(session.completed_count(), 1);
        assert_eq!(session.phase(), FocusPhase::Idle);
        assert_eq!(session.growth_stage(), GrowthStage::Seed);
    }

    #[test]
    fn mid_run_reset_discards_progress() {
        let mut session = session(100);
        assert!(session.start());
        tick_n(&mut session, 55);

        session.reset();
        assert_eq!(session.remaining_secs(), 100);
        assert_eq!(session.completed_count(), 0);
        assert_eq!(session.phase(), FocusPhase::Idle);
    }

    #[test]
    fn any_positive_duration_completes_after_exactly_that_many_ticks() {
        for duration in [1, 2, 7, 59, 1500] {
            let mut session = session(duration);
            assert!(session.start());

            for _ in 1..duration {
                assert_eq!(session.tick(), TickOutcome::Advanced);
            }
            assert_eq!(session.tick(), TickOutcome::Completed);
            assert_eq!(session.completed_count(), 1, "duration {duration}");
        }
    }

    #[test]
    fn stage_advances_exactly_on_the_default_thresholds() {
        let mut session = session(1500);
        assert!(session.start());

        tick_n(&mut session, 299);
        assert_eq!(session.growth_stage(), GrowthStage::Seed);
        let _ = session.tick();
        assert_eq!(session.growth_stage(), GrowthStage::Sprout);

        tick_n(&mut session, 299);
        assert_eq!(session.growth_stage(), GrowthStage::Sprout);
        let _ = session.tick();
        assert_eq!(session.growth_stage(), GrowthStage::Seedling);

        tick_n(&mut session, 300);
        assert_eq!(session.growth_stage(), GrowthStage::Budding);

        tick_n(&mut session, 300);
        assert_eq!(session.growth_stage(), GrowthStage::Bloom);

        tick_n(&mut session, 300);
        assert_eq!(session.phase(), FocusPhase::Completed);
    }

    #[test]
    fn stage_never_regresses_during_a_run() {
        let mut session = session(83);
        assert!(session.start());

        let mut previous = session.growth_stage();
        while session.phase() != FocusPhase::Completed {
            let _ = session.tick();
            let stage = session.growth_stage();
            assert!(stage >= previous, "{stage:?} regressed from {previous:?}");
            previous = stage;
        }
        assert_eq!(previous, GrowthStage::Bloom);
    }

    #[test]
    fn stage_ladder_for_a_five_second_session() {
        let mut session = session(5);
        assert!(session.start());

        let expected = [
            GrowthStage::Sprout,
            GrowthStage::Seedling,
            GrowthStage::Budding,
            GrowthStage::Bloom,
            GrowthStage::Bloom,
        ];
        for stage in expected {
            let _ = session.tick();
            assert_eq!(session.growth_stage(), stage);
        }
    }

    #[test]
    fn repeated_sessions_accumulate_the_tally() {
        let mut session = session(2);
        for round in 1..=3 {
            assert!(session.start());
            tick_n(&mut session, 2);
            assert_eq!(session.completed_count(), round);
            session.reset();
        }
    }

    #[test]
    fn paused_at_full_duration_reads_as_idle() {
        let mut session = session(10);
        assert!(session.start());
        session.pause();
        assert_eq!(session.phase(), FocusPhase::Idle);
    }

    #[test]
    fn progress_spans_zero_to_one() {
        let mut session = session(4);
        assert!((session.progress() - 0.0).abs() < f64::EPSILON);
        assert!(session.start());
        tick_n(&mut session, 4);
        assert!((session.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stage_boundary_lands_on_the_next_bucket() {
        assert_eq!(GrowthStage::for_progress(0.0), GrowthStage::Seed);
        assert_eq!(GrowthStage::for_progress(0.2), GrowthStage::Sprout);
        assert_eq!(GrowthStage::for_progress(0.4), GrowthStage::Seedling);
        assert_eq!(GrowthStage::for_progress(0.6), GrowthStage::Budding);
        assert_eq!(GrowthStage::for_progress(0.8), GrowthStage::Bloom);
        assert_eq!(GrowthStage::for_progress(1.0), GrowthStage::Bloom);
    }

    #[test]
    fn stage_indices_cover_seed_to_bloom() {
        assert_eq!(GrowthStage::Seed.index(), 0);
        assert_eq!(GrowthStage::Bloom.index(), 4);
    }
}
