use std::time::SystemTime;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::round::{Phase, RoundController};
use crate::runtime::AppEvent;
use crate::timer::RoundTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Typing,
    Results,
}

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Glue between terminal events and the round: owns the controller and the
/// refresh timer bound to it.
#[derive(Debug)]
pub struct App {
    pub controller: RoundController,
    pub timer: RoundTimer,
    pub screen: Screen,
}

impl App {
    pub fn new(controller: RoundController) -> Self {
        Self {
            controller,
            timer: RoundTimer::new(),
            screen: Screen::Typing,
        }
    }

    /// New prompt, fresh clock. The old round's timer is stopped first.
    pub fn restart(&mut self) {
        self.timer.cancel();
        self.controller.start();
        self.screen = Screen::Typing;
        debug!(round = self.controller.round_id(), "restarted");
    }

    pub fn handle_event(&mut self, event: AppEvent, now: SystemTime) -> Flow {
        match event {
            AppEvent::Tick => {
                self.on_tick(now);
                Flow::Continue
            }
            AppEvent::Resize => Flow::Continue,
            AppEvent::Key(key) => self.on_key(key, now),
        }
    }

    pub fn on_tick(&mut self, now: SystemTime) {
        if !self.timer.is_armed_for(self.controller.round_id()) {
            return;
        }
        self.controller.tick(now);
        self.sync();
    }

    pub fn on_key(&mut self, key: KeyEvent, now: SystemTime) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Flow::Quit,
                KeyCode::Char('s') if self.screen == Screen::Typing => {
                    self.controller.begin_at(now);
                    self.sync();
                }
                KeyCode::Char('f') if self.screen == Screen::Typing => {
                    self.controller.finish();
                    self.sync();
                }
                _ => {}
            }
            return Flow::Continue;
        }

        match (self.screen, key.code) {
            (_, KeyCode::Esc) => return Flow::Quit,
            (_, KeyCode::Tab) => self.restart(),
            (Screen::Typing, KeyCode::Char(c)) => self.type_char(c, now),
            (Screen::Typing, KeyCode::Enter) => self.type_char('\n', now),
            (Screen::Typing, KeyCode::Backspace) => self.backspace(now),
            (Screen::Results, KeyCode::Char('r') | KeyCode::Char('n') | KeyCode::Enter) => {
                self.restart()
            }
            (Screen::Results, KeyCode::Char('q')) => return Flow::Quit,
            _ => {}
        }

        Flow::Continue
    }

    fn type_char(&mut self, c: char, now: SystemTime) {
        if self.controller.has_finished() {
            return;
        }
        let mut text = self.controller.typed_text().to_owned();
        text.push(c);
        self.controller.record_input_at(&text, now);
        self.sync();
    }

    fn backspace(&mut self, now: SystemTime) {
        if self.controller.has_finished() || self.controller.typed_text().is_empty() {
            return;
        }
        let mut text = self.controller.typed_text().to_owned();
        text.pop();
        self.controller.record_input_at(&text, now);
    }

    /// Keep the timer and screen in step with the round's phase.
    fn sync(&mut self) {
        match self.controller.phase() {
            Phase::Idle => {}
            Phase::Active => {
                self.timer.arm(self.controller.round_id());
            }
            Phase::Finished => {
                self.timer.cancel();
                if self.screen != Screen::Results {
                    if let Some(result) = self.controller.result() {
                        info!(
                            round = self.controller.round_id(),
                            wpm = result.wpm,
                            accuracy = result.accuracy,
                            "round scored"
                        );
                    }
                    self.screen = Screen::Results;
                }
            }
        }
    }
}
