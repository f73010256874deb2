use std::path::PathBuf;

use anyhow::{Context, Result};
use steno_core::{
    app::PlayerConfig,
    cadence::{CadenceConfig, DEFAULT_WPM},
    scan::DEFAULT_LANGUAGE_HINT,
};

use super::settings_file;

const DEFAULT_SPEECH_COMMAND: &str = "espeak-ng";
const DEFAULT_OCR_COMMAND: &str = "tesseract";

/// Runtime configuration read from `STENO_*` environment variables and the
/// command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct HostConfig {
    pub(super) wpm: u16,
    pub(super) voice: Option<String>,
    pub(super) language_hint: String,
    pub(super) speech_command: String,
    pub(super) ocr_command: String,
    pub(super) settings_path: PathBuf,
    pub(super) text_file: Option<PathBuf>,
}

impl HostConfig {
    pub(super) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    pub(super) fn from_lookup<F, A>(lookup: F, mut args: A) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        A: Iterator<Item = String>,
    {
        let wpm = match lookup("STENO_WPM") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("STENO_WPM must be a number, got {raw:?}"))?,
            None => DEFAULT_WPM,
        };

        let settings_path = lookup("STENO_SETTINGS")
            .map(PathBuf::from)
            .unwrap_or_else(settings_file::default_path);

        Ok(Self {
            wpm,
            voice: lookup("STENO_VOICE").filter(|v| !v.is_empty()),
            language_hint: lookup("STENO_LANG")
                .unwrap_or_else(|| DEFAULT_LANGUAGE_HINT.to_owned()),
            speech_command: lookup("STENO_SPEECH_CMD")
                .unwrap_or_else(|| DEFAULT_SPEECH_COMMAND.to_owned()),
            ocr_command: lookup("STENO_OCR_CMD").unwrap_or_else(|| DEFAULT_OCR_COMMAND.to_owned()),
            settings_path,
            text_file: args.next().map(PathBuf::from),
        })
    }

    pub(super) fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            cadence: CadenceConfig {
                wpm: self.wpm,
                ..CadenceConfig::default()
            },
            voice: self.voice.clone(),
            language_hint: self.language_hint.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = HostConfig::from_lookup(lookup_from(&[]), std::iter::empty()).unwrap();
        assert_eq!(config.wpm, DEFAULT_WPM);
        assert_eq!(config.voice, None);
        assert_eq!(config.language_hint, "eng");
        assert_eq!(config.speech_command, "espeak-ng");
        assert_eq!(config.text_file, None);
    }

    #[test]
    fn environment_and_args_override_defaults() {
        let config = HostConfig::from_lookup(
            lookup_from(&[
                ("STENO_WPM", " 200 "),
                ("STENO_VOICE", "Daniel"),
                ("STENO_SETTINGS", "/tmp/steno.json"),
            ]),
            ["notes.txt".to_owned()].into_iter(),
        )
        .unwrap();
        assert_eq!(config.wpm, 200);
        assert_eq!(config.voice.as_deref(), Some("Daniel"));
        assert_eq!(config.settings_path, PathBuf::from("/tmp/steno.json"));
        assert_eq!(config.text_file, Some(PathBuf::from("notes.txt")));
        assert_eq!(config.player_config().cadence.wpm, 200);
    }

    #[test]
    fn malformed_wpm_is_an_error() {
        let result =
            HostConfig::from_lookup(lookup_from(&[("STENO_WPM", "fast")]), std::iter::empty());
        assert!(result.is_err());
    }
}
