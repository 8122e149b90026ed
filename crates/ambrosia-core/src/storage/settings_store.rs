//! Settings store implementation

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::Settings;

/// Settings file used when the caller does not choose one
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Trait for settings storage operations
pub trait SettingsStore {
    /// Values used for keys the stored settings do not provide
    fn defaults(&self) -> &Settings;

    /// Load stored settings merged over the defaults
    fn try_load(&self) -> Result<Settings>;

    /// Persist the full settings mapping
    fn try_save(&self, settings: &Settings) -> Result<()>;

    /// Like [`Self::try_load`], but falls back to the defaults and logs on error
    fn load(&self) -> Settings {
        self.try_load().unwrap_or_else(|error| {
            tracing::warn!(%error, "Error loading settings file, using defaults");
            self.defaults().clone()
        })
    }

    /// Like [`Self::try_save`], but only logs on error
    fn save(&self, settings: &Settings) {
        if let Err(error) = self.try_save(settings) {
            tracing::warn!(%error, "Error saving settings");
        }
    }
}

/// JSON file implementation of `SettingsStore`
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
    defaults: Settings,
}

impl JsonSettingsStore {
    /// Create a store for `path` that fills missing keys from `defaults`
    pub fn new(path: impl Into<PathBuf>, defaults: Settings) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn defaults(&self) -> &Settings {
        &self.defaults
    }

    fn try_load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(self.defaults.clone());
        }

        let raw = fs::read_to_string(&self.path)?;
        let stored: Map<String, Value> = serde_json::from_str(&raw)?;
        Ok(merge_over_defaults(&self.defaults, stored))
    }

    fn try_save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, serialized)?;
        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

/// Overlay stored keys on the defaults, key by key.
///
/// A fixed key whose value has the wrong type keeps its default; the other
/// stored keys still apply. Unknown keys land in `extra`.
fn merge_over_defaults(defaults: &Settings, stored: Map<String, Value>) -> Settings {
    let mut settings = defaults.clone();
    for (key, value) in stored {
        match key.as_str() {
            "is_dark_mode" => assign_key(&mut settings.is_dark_mode, &key, value),
            "font_family" => assign_key(&mut settings.font_family, &key, value),
            "font_size" => assign_key(&mut settings.font_size, &key, value),
            "font_bold" => assign_key(&mut settings.font_bold, &key, value),
            "default_tags" => assign_key(&mut settings.default_tags, &key, value),
            _ => {
                settings.extra.insert(key, value);
            }
        }
    }
    settings
}

fn assign_key<T: DeserializeOwned>(slot: &mut T, key: &str, value: Value) {
    match serde_json::from_value(value) {
        Ok(parsed) => *slot = parsed,
        Err(error) => {
            tracing::warn!(key, %error, "Ignoring settings value of unexpected type");
        }
    }
}
