//! The one persisted setting: seconds allowed per street.
//!
//! Stored as a bare label (`None`, `10s`, ...) in a text file. Reading never
//! fails from the caller's point of view: anything unusable means no timer.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE: &str = "rtp_config.txt";
/// Overrides the config file location.
pub const CONFIG_ENV: &str = "RTP_DRILL_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerChoice {
    #[default]
    Off,
    Secs10,
    Secs15,
    Secs30,
    Secs45,
    Secs60,
    Secs90,
}

impl TimerChoice {
    pub const ALL: [TimerChoice; 7] = [
        TimerChoice::Off,
        TimerChoice::Secs10,
        TimerChoice::Secs15,
        TimerChoice::Secs30,
        TimerChoice::Secs45,
        TimerChoice::Secs60,
        TimerChoice::Secs90,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            TimerChoice::Off => "None",
            TimerChoice::Secs10 => "10s",
            TimerChoice::Secs15 => "15s",
            TimerChoice::Secs30 => "30s",
            TimerChoice::Secs45 => "45s",
            TimerChoice::Secs60 => "60s",
            TimerChoice::Secs90 => "90s",
        }
    }

    pub const fn seconds(self) -> u32 {
        match self {
            TimerChoice::Off => 0,
            TimerChoice::Secs10 => 10,
            TimerChoice::Secs15 => 15,
            TimerChoice::Secs30 => 30,
            TimerChoice::Secs45 => 45,
            TimerChoice::Secs60 => 60,
            TimerChoice::Secs90 => 90,
        }
    }

    /// Position in [`TimerChoice::ALL`].
    pub fn index(self) -> usize {
        TimerChoice::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for TimerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PrefsError {
    #[error("unknown timer option: '{0}'")]
    UnknownOption(String),
    #[error("config io: {0}")]
    Io(#[from] io::Error),
}

impl FromStr for TimerChoice {
    type Err = PrefsError;

    /// Labels match exactly, as written by [`PrefsStore::save`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        TimerChoice::ALL
            .iter()
            .copied()
            .find(|c| c.label() == t)
            .ok_or_else(|| PrefsError::UnknownOption(t.to_string()))
    }
}

/// File-backed timer preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$RTP_DRILL_CONFIG`, else `rtp_config.txt` beside the executable,
    /// else in the working directory.
    pub fn locate() -> Self {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::new(path);
        }
        Self::new(default_dir().join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<TimerChoice, PrefsError> {
        fs::read_to_string(&self.path)?.parse()
    }

    /// The stored choice, or [`TimerChoice::Off`] when missing or invalid.
    pub fn load(&self) -> TimerChoice {
        match self.read() {
            Ok(choice) => choice,
            Err(PrefsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => TimerChoice::Off,
            Err(e) => {
                log::warn!("ignoring timer preference at {}: {e}", self.path.display());
                TimerChoice::Off
            }
        }
    }

    pub fn write(&self, choice: TimerChoice) -> Result<(), PrefsError> {
        fs::write(&self.path, choice.label())?;
        Ok(())
    }

    /// Best-effort [`PrefsStore::write`]; failures are logged only.
    pub fn save(&self, choice: TimerChoice) {
        match self.write(choice) {
            Ok(()) => log::debug!("saved timer preference {choice}"),
            Err(e) => log::warn!("could not save timer preference: {e}"),
        }
    }
}

/// Directory holding the executable, falling back to the working directory.
pub fn default_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for choice in TimerChoice::ALL {
            assert_eq!(choice.label().parse::<TimerChoice>().unwrap(), choice);
        }
        assert_eq!(" 30s\n".parse::<TimerChoice>().unwrap(), TimerChoice::Secs30);
        assert!(matches!("20s".parse::<TimerChoice>(), Err(PrefsError::UnknownOption(_))));
        assert!("none".parse::<TimerChoice>().is_err());
    }

    #[test]
    fn seconds_and_index() {
        let secs: Vec<u32> = TimerChoice::ALL.iter().map(|c| c.seconds()).collect();
        assert_eq!(secs, [0, 10, 15, 30, 45, 60, 90]);
        assert_eq!(TimerChoice::Secs45.index(), 4);
        assert_eq!(TimerChoice::default(), TimerChoice::Off);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::new(dir.path().join(CONFIG_FILE));
        assert_eq!(store.load(), TimerChoice::Off);
        store.save(TimerChoice::Secs60);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "60s");
        assert_eq!(store.load(), TimerChoice::Secs60);
    }

    #[test]
    fn garbage_defaults_to_off() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::new(dir.path().join(CONFIG_FILE));
        std::fs::write(store.path(), "three minutes").unwrap();
        assert!(store.read().is_err());
        assert_eq!(store.load(), TimerChoice::Off);
    }

    #[test]
    fn unwritable_path_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::new(dir.path().join("missing").join(CONFIG_FILE));
        assert!(store.write(TimerChoice::Secs10).is_err());
        store.save(TimerChoice::Secs10);
        assert_eq!(store.load(), TimerChoice::Off);
    }
}
