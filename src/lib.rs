// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod round;
pub mod runtime;
pub mod scoring;
pub mod timer;
pub mod ui;
pub mod word_bank;

pub use error::{Error, Result};
pub use round::{Phase, RoundController, RoundSettings, RoundState};
pub use scoring::RoundResult;
