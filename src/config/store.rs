//! Persisted setting values
//!
//! Values are stored as text keyed by setting key in a JSON file, the way the
//! host runtime persists them. Anything missing or invalid reads back as the
//! schema default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::{SettingKey, SettingValue};
use super::validation::{ValidationError, parse_candidate, validate};
use crate::constants::{CONFIG_GROUP, config, keys};

/// Store file layout revision. Version 1 was a flat key/value object.
const STORE_VERSION: u32 = 2;

/// On-disk representation
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default = "default_group")]
    group: String,
    #[serde(default)]
    values: BTreeMap<String, Value>,
}

fn default_group() -> String {
    CONFIG_GROUP.to_string()
}

/// User-chosen values, keyed by setting key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    pub fn path() -> PathBuf {
        let mut path = match std::env::var_os(config::DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
                base.push(config::APP_DIR);
                base
            }
        };
        path.push(config::FILENAME);
        path
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load from a JSON file; a missing file is an empty store
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Value store not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read value store from {:?}", path))?;
        let json: Value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        let store = Self::from_json(json)
            .with_context(|| format!("Unrecognized value store layout in {:?}", path))?;
        info!(
            path = %path.display(),
            values = store.values.len(),
            "Loaded value store"
        );
        Ok(store)
    }

    /// Build from parsed JSON, migrating older layouts
    fn from_json(json: Value) -> Result<Self> {
        let is_versioned = json.get("version").is_some();
        let (version, raw_values) = if is_versioned {
            let file: StoreFile =
                serde_json::from_value(json).context("Invalid versioned value store")?;
            if file.group != CONFIG_GROUP {
                warn!(group = %file.group, "Value store belongs to a different config group");
            }
            if file.version > STORE_VERSION {
                warn!(
                    version = file.version,
                    supported = STORE_VERSION,
                    "Value store was written by a newer version; saving will downgrade it"
                );
            }
            (file.version, file.values)
        } else {
            let flat: BTreeMap<String, Value> =
                serde_json::from_value(json).context("Expected a JSON object of values")?;
            (1, flat)
        };

        let mut store = Self::default();
        for (key, value) in raw_values {
            match value {
                Value::String(s) => {
                    store.values.insert(key, s);
                }
                Value::Bool(_) | Value::Number(_) => {
                    store.values.insert(key, value.to_string());
                }
                other => warn!(key = %key, value = %other, "Skipping non-scalar persisted value"),
            }
        }

        if version < STORE_VERSION {
            store.migrate_legacy_keys(version);
        }
        Ok(store)
    }

    /// Before version 2 the animation toggle shared the welcome message key,
    /// so whatever was stored there applied to both toggles.
    fn migrate_legacy_keys(&mut self, from_version: u32) {
        if self.values.contains_key(keys::ANIMATION_ENABLED) {
            return;
        }
        if let Some(shared) = self.values.get(keys::LEGACY_ANIMATION_ENABLED).cloned() {
            warn!(
                from_version,
                legacy_key = keys::LEGACY_ANIMATION_ENABLED,
                key = keys::ANIMATION_ENABLED,
                value = %shared,
                "Animation toggle was stored under the welcome message key; copying it to its own key"
            );
            self.values.insert(keys::ANIMATION_ENABLED.to_string(), shared);
        }
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let file = StoreFile {
            version: STORE_VERSION,
            group: default_group(),
            values: self
                .values
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        };
        let json_string =
            serde_json::to_string_pretty(&file).context("Failed to serialize value store")?;

        fs::write(path, json_string)
            .with_context(|| format!("Failed to write value store to {:?}", path))?;

        info!(path = %path.display(), "Saved value store");
        Ok(())
    }

    /// Raw persisted text, if any
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Effective value: the persisted one if it validates, otherwise the default
    pub fn get(&self, key: SettingKey) -> SettingValue {
        let Some(raw) = self.values.get(key.as_str()) else {
            return key.setting().default;
        };
        match parse_candidate(key, raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring invalid persisted value, using default");
                key.setting().default
            }
        }
    }

    /// Whether a value other than the default has been persisted
    pub fn is_customized(&self, key: SettingKey) -> bool {
        self.values.contains_key(key.as_str()) && self.get(key) != key.setting().default
    }

    /// Validate and store; returns the parsed value
    pub fn set(&mut self, key: &str, candidate: &str) -> Result<SettingValue, ValidationError> {
        let value = validate(key, candidate)?;
        debug!(key, value = %value, "Setting value");
        self.values.insert(key.to_string(), value.to_persisted());
        Ok(value)
    }

    /// Drop the persisted value; returns whether one existed
    pub fn reset(&mut self, key: SettingKey) -> bool {
        self.values.remove(key.as_str()).is_some()
    }

    /// Drop every persisted schema value; unknown keys stay for the host
    pub fn reset_all(&mut self) {
        self.values.retain(|key, _| SettingKey::from_key(key).is_none());
    }

    /// Persisted keys the schema does not know about (kept untouched)
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .filter(|k| SettingKey::from_key(k).is_none())
            .map(String::as_str)
            .collect()
    }
}
