use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::round::{RoundSettings, DEFAULT_ROUND_SECS, DEFAULT_WORD_COUNT};

/// Settings read from `config.json`. Missing fields take their defaults.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub round_secs: u64,
    pub word_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            round_secs: DEFAULT_ROUND_SECS,
            word_count: DEFAULT_WORD_COUNT,
        }
    }
}

impl Config {
    /// Apply command line overrides on top of the stored values.
    pub fn with_overrides(self, round_secs: Option<u64>, word_count: Option<usize>) -> Self {
        Self {
            round_secs: round_secs.unwrap_or(self.round_secs),
            word_count: word_count.unwrap_or(self.word_count),
        }
    }

    pub fn round_settings(&self) -> Result<RoundSettings> {
        if self.round_secs == 0 {
            return Err(Error::InvalidConfig {
                message: "round_secs must be at least 1".into(),
            });
        }
        if self.word_count == 0 {
            return Err(Error::InvalidConfig {
                message: "word_count must be at least 1".into(),
            });
        }

        Ok(RoundSettings {
            round_secs: self.round_secs,
            word_count: self.word_count,
        })
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "typesprint") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("typesprint_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Like [`ConfigStore::load`] but reports why the file was not usable.
    pub fn try_load(&self) -> Result<Option<Config>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice::<Config>(&bytes)?))
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match self.try_load() {
            Ok(Some(cfg)) => {
                debug!(path = %self.path.display(), "loaded config");
                cfg
            }
            Ok(None) => Config::default(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unreadable config");
                Config::default()
            }
        }
    }
}
