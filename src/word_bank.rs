use include_dir::{include_dir, Dir};
use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;
use serde_json::from_str;

use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// Name of the bank every round draws from.
pub const DEFAULT_BANK: &str = "lorem";

/// Fixed list of words prompts are drawn from.
///
/// Only built through [`WordBank::load`] or [`WordBank::from_json`], which
/// guarantee at least one word.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WordBank {
    name: String,
    words: Vec<String>,
}

impl WordBank {
    /// Load an embedded bank by name (`src/lang/<name>.json`).
    pub fn load(name: &str) -> Result<Self> {
        let file_name = format!("{name}.json");
        let file = LANG_DIR.get_file(&file_name).ok_or_else(|| Error::WordBank {
            message: format!("{file_name} not found"),
        })?;

        let contents = file.contents_utf8().ok_or_else(|| Error::WordBank {
            message: format!("{file_name} is not valid utf-8"),
        })?;

        Self::from_json(contents)
    }

    pub fn lorem() -> Result<Self> {
        Self::load(DEFAULT_BANK)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let bank: WordBank = from_str(json).map_err(|e| Error::WordBank {
            message: e.to_string(),
        })?;

        if bank.words.is_empty() {
            return Err(Error::WordBank {
                message: format!("bank '{}' has no words", bank.name),
            });
        }

        Ok(bank)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Draw `count` words independently and uniformly. Words may repeat.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        (0..count)
            .filter_map(|_| self.words.choose(rng).cloned())
            .collect()
    }
}
