//! Opaque key/value settings persistence.

use std::collections::HashMap;

use core::convert::Infallible;

pub const THEME_KEY: &str = "stenoTheme";
pub const TEXT_KEY: &str = "stenoText";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Night,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Night,
            Self::Night => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Night => "night",
        }
    }

    /// Only `"night"` selects the night theme; anything else is light.
    pub fn from_stored(value: &str) -> Self {
        if value == Self::Night.as_str() {
            Self::Night
        } else {
            Self::Light
        }
    }
}

/// Abstract settings backend. Values are opaque strings.
pub trait SettingsStore {
    type Error: core::fmt::Debug;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Volatile store for tests and hosts without persistence.
#[derive(Clone, Debug, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl SettingsStore for MemorySettingsStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_stored_strings() {
        assert_eq!(Theme::from_stored("night"), Theme::Night);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("NIGHT"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Night);
    }

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemorySettingsStore::new().with_value(THEME_KEY, "night");
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("night"));
        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(store.get(TEXT_KEY).unwrap(), None);
    }
}
