use rand::{rngs::StdRng, SeedableRng};
use std::time::{Duration, SystemTime};
use tracing::{debug, trace};

use crate::scoring::{score, word_marks, RoundResult, WordMark};
use crate::word_bank::WordBank;

pub const DEFAULT_ROUND_SECS: u64 = 60;
pub const DEFAULT_WORD_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    pub round_secs: u64,
    pub word_count: usize,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            round_secs: DEFAULT_ROUND_SECS,
            word_count: DEFAULT_WORD_COUNT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    Idle,
    Active,
    Finished,
}

/// Everything a renderer needs to draw the current round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub prompt: Vec<String>,
    pub typed_text: String,
    pub started_at: Option<SystemTime>,
    pub remaining_secs: u64,
    pub finished: bool,
    pub result: Option<RoundResult>,
}

impl RoundState {
    fn fresh(prompt: Vec<String>, round_secs: u64) -> Self {
        Self {
            prompt,
            typed_text: String::new(),
            started_at: None,
            remaining_secs: round_secs,
            finished: false,
            result: None,
        }
    }
}

/// Owns the one live round: prompt generation, the countdown and scoring.
///
/// Every operation is synchronous and total. Time is passed in by the caller
/// (`*_at` variants) so any scheduler, or a test, can drive the clock.
#[derive(Debug)]
pub struct RoundController {
    settings: RoundSettings,
    bank: WordBank,
    rng: StdRng,
    state: RoundState,
    round_id: u64,
}

impl RoundController {
    pub fn new(settings: RoundSettings, bank: WordBank) -> Self {
        Self::with_rng(settings, bank, StdRng::from_entropy())
    }

    pub fn with_seed(settings: RoundSettings, bank: WordBank, seed: u64) -> Self {
        Self::with_rng(settings, bank, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: RoundSettings, bank: WordBank, rng: StdRng) -> Self {
        let mut controller = Self {
            settings,
            bank,
            rng,
            state: RoundState::fresh(Vec::new(), settings.round_secs),
            round_id: 0,
        };
        controller.start();
        controller
    }

    /// Throw away the current round and set up a fresh, unstarted one.
    pub fn start(&mut self) {
        let prompt = self.bank.sample(self.settings.word_count, &mut self.rng);
        self.state = RoundState::fresh(prompt, self.settings.round_secs);
        self.round_id += 1;

        debug!(
            round = self.round_id,
            words = self.settings.word_count,
            secs = self.settings.round_secs,
            "round reset"
        );
    }

    pub fn begin(&mut self) {
        self.begin_at(SystemTime::now());
    }

    /// Start the clock without any input. No-op once started or finished.
    pub fn begin_at(&mut self, now: SystemTime) {
        if self.state.started_at.is_none() && !self.state.finished {
            self.state.started_at = Some(now);
            debug!(round = self.round_id, "round started");
        }
    }

    pub fn record_input(&mut self, text: &str) -> bool {
        self.record_input_at(text, SystemTime::now())
    }

    /// Replace the typed text. The first accepted input starts the clock.
    ///
    /// Returns false, leaving the round untouched, once the round has finished.
    pub fn record_input_at(&mut self, text: &str, now: SystemTime) -> bool {
        if self.state.finished {
            trace!(round = self.round_id, "input after finish ignored");
            return false;
        }

        self.begin_at(now);
        self.state.typed_text.clear();
        self.state.typed_text.push_str(text);
        true
    }

    /// Recompute the time left from `now`; finishes the round when it hits zero.
    ///
    /// Returns true only for the tick that finished the round.
    pub fn tick(&mut self, now: SystemTime) -> bool {
        let Some(started_at) = self.state.started_at else {
            return false;
        };
        if self.state.finished {
            return false;
        }

        // a clock that went backwards counts as no time elapsed
        let elapsed = now.duration_since(started_at).unwrap_or(Duration::ZERO);
        let remaining = self
            .settings
            .round_secs
            .saturating_sub(elapsed.as_secs())
            .min(self.state.remaining_secs);
        self.state.remaining_secs = remaining;

        if remaining == 0 {
            return self.finish();
        }

        false
    }

    /// Score the typed text and close the round.
    ///
    /// Returns true if this call finished the round, false if it already was.
    pub fn finish(&mut self) -> bool {
        if self.state.finished {
            return false;
        }

        let result = score(&self.state.prompt, &self.state.typed_text);
        self.state.result = Some(result);
        self.state.finished = true;

        debug!(
            round = self.round_id,
            wpm = result.wpm,
            accuracy = result.accuracy,
            remaining = self.state.remaining_secs,
            "round finished"
        );

        true
    }

    pub fn phase(&self) -> Phase {
        match (self.state.started_at, self.state.finished) {
            (_, true) => Phase::Finished,
            (Some(_), false) => Phase::Active,
            (None, false) => Phase::Idle,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn prompt(&self) -> &[String] {
        &self.state.prompt
    }

    pub fn typed_text(&self) -> &str {
        &self.state.typed_text
    }

    pub fn remaining_secs(&self) -> u64 {
        self.state.remaining_secs
    }

    pub fn has_started(&self) -> bool {
        self.state.started_at.is_some()
    }

    pub fn has_finished(&self) -> bool {
        self.state.finished
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.state.result
    }

    pub fn round_id(&self) -> u64 {
        self.round_id
    }

    pub fn settings(&self) -> RoundSettings {
        self.settings
    }

    pub fn word_marks(&self) -> Vec<WordMark> {
        word_marks(&self.state.prompt, &self.state.typed_text)
    }
}
