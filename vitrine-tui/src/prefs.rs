//! File-backed preference store: favorites and recently viewed.
//!
//! A versioned TOML file under `~/.vitrine/`. Loading is forgiving: a
//! missing, unreadable, or future-versioned file just means starting
//! from defaults, never a startup failure. Saving happens on every
//! mutation; losing a favorite to a crash would be worse than the
//! extra writes.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_core::prefs::{PreferenceStore, RECENT_CAP};

const PREFS_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecentVisit {
    id: String,
    at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefsFile {
    version: u8,
    #[serde(default)]
    favorites: BTreeSet<String>,
    #[serde(default)]
    recents: Vec<RecentVisit>,
}

impl Default for PrefsFile {
    fn default() -> Self {
        Self {
            version: PREFS_VERSION,
            favorites: BTreeSet::new(),
            recents: Vec::new(),
        }
    }
}

pub struct FilePrefs {
    path: PathBuf,
    state: PrefsFile,
}

impl FilePrefs {
    /// Load from `~/.vitrine/prefs.toml`.
    pub fn load_default() -> Result<Self> {
        let dir = dirs::home_dir()
            .context("could not determine home directory")?
            .join(".vitrine");
        Self::load(dir.join("prefs.toml"))
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<PrefsFile>(&raw) {
                Ok(state) if state.version == PREFS_VERSION => state,
                Ok(state) => {
                    tracing::warn!(
                        "preferences file {} has version {}, starting fresh",
                        path.display(),
                        state.version
                    );
                    PrefsFile::default()
                }
                Err(err) => {
                    tracing::warn!(
                        "could not parse preferences file {}: {err}",
                        path.display()
                    );
                    PrefsFile::default()
                }
            },
            Err(_) => PrefsFile::default(),
        };
        Ok(Self { path, state })
    }

    fn save(&self) {
        let write = || -> Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let raw = toml::to_string_pretty(&self.state).context("failed to encode preferences")?;
            fs::write(&self.path, raw)
                .with_context(|| format!("failed to write {}", self.path.display()))?;
            Ok(())
        };
        if let Err(err) = write() {
            tracing::warn!("preferences not saved: {err:#}");
        }
    }
}

impl PreferenceStore for FilePrefs {
    fn is_marked(&self, id: &str) -> bool {
        self.state.favorites.contains(id)
    }

    fn mark(&mut self, id: &str) {
        if self.state.favorites.insert(id.to_owned()) {
            self.save();
        }
    }

    fn unmark(&mut self, id: &str) {
        if self.state.favorites.remove(id) {
            self.save();
        }
    }

    fn record_visit(&mut self, id: &str) {
        self.state.recents.retain(|visit| visit.id != id);
        self.state.recents.insert(
            0,
            RecentVisit {
                id: id.to_owned(),
                at: Utc::now(),
            },
        );
        self.state.recents.truncate(RECENT_CAP);
        self.save();
    }

    fn marked(&self) -> Vec<String> {
        self.state.favorites.iter().cloned().collect()
    }

    fn recent(&self) -> Vec<String> {
        self.state.recents.iter().map(|visit| visit.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePrefs::load(dir.path().join("prefs.toml")).unwrap();
        assert!(prefs.marked().is_empty());
        assert!(prefs.recent().is_empty());
    }

    #[test]
    fn test_state_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut prefs = FilePrefs::load(&path).unwrap();
        prefs.mark("gold-button");
        prefs.record_visit("ice-card");
        prefs.record_visit("gold-button");

        let reloaded = FilePrefs::load(&path).unwrap();
        assert!(reloaded.is_marked("gold-button"));
        assert_eq!(reloaded.recent(), vec!["gold-button", "ice-card"]);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "not = [valid").unwrap();

        let prefs = FilePrefs::load(&path).unwrap();
        assert!(prefs.marked().is_empty());
    }

    #[test]
    fn test_future_version_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "version = 99\nfavorites = [\"gold-button\"]\n").unwrap();

        let prefs = FilePrefs::load(&path).unwrap();
        assert!(!prefs.is_marked("gold-button"));
    }

    #[test]
    fn test_revisits_dedup_and_cap() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = FilePrefs::load(dir.path().join("prefs.toml")).unwrap();

        for i in 0..(RECENT_CAP + 3) {
            prefs.record_visit(&format!("exhibit-{i}"));
        }
        prefs.record_visit("exhibit-2");

        let recent = prefs.recent();
        assert_eq!(recent.len(), RECENT_CAP);
        assert_eq!(recent[0], "exhibit-2");
        assert_eq!(recent.iter().filter(|id| *id == "exhibit-2").count(), 1);
    }
}
