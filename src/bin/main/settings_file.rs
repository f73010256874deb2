use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use steno_core::settings::SettingsStore;

const APP_DIR: &str = "steno";
const SETTINGS_FILE: &str = "settings.json";

pub(super) fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join(APP_DIR)
        .join(SETTINGS_FILE)
}

/// Key/value settings kept in a flat JSON object. Every `set` rewrites the
/// file.
pub(super) struct JsonFileSettings {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileSettings {
    /// Load `path`. A missing or unreadable file starts empty.
    pub(super) fn open(path: PathBuf) -> Self {
        let values: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(values) => values,
                Err(err) => {
                    warn!(
                        "settings: ignoring malformed file path={} err={}",
                        path.display(),
                        err
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        info!(
            "settings: loaded path={} keys={}",
            path.display(),
            values.len()
        );
        Self { path, values }
    }

    fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let data = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, data).with_context(|| format!("writing {}", self.path.display()))
    }
}

impl SettingsStore for JsonFileSettings {
    type Error = anyhow::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use steno_core::settings::{TEXT_KEY, THEME_KEY};

    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = JsonFileSettings::open(path.clone());
        assert_eq!(settings.get(THEME_KEY).unwrap(), None);
        settings.set(THEME_KEY, "night").unwrap();
        settings.set(TEXT_KEY, "hello world").unwrap();

        let reopened = JsonFileSettings::open(path);
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("night"));
        assert_eq!(
            reopened.get(TEXT_KEY).unwrap().as_deref(),
            Some("hello world")
        );
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let settings = JsonFileSettings::open(path);
        assert_eq!(settings.get(THEME_KEY).unwrap(), None);
    }
}
