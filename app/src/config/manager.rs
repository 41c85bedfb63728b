//! SettingsManager: environment-backed settings with defaults and validation.

use std::collections::HashMap;

use super::defaults::{DEFAULT_SETTINGS, setting_keys};
use super::validation::validate_setting;
use super::{ConfigError, SettingInfo, SettingSource};

/// Snapshot of raw setting values layered over the defaults table.
#[derive(Debug, Clone, Default)]
pub struct SettingsManager {
    values: HashMap<String, String>,
}

impl SettingsManager {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Capture every known setting present in the process environment.
    pub fn from_env() -> Self {
        let values = setting_keys()
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
            .collect();
        Self { values }
    }

    /// Get a setting value. Falls back to the default when unset or invalid.
    pub fn get_setting(&self, key: &str) -> Result<String, ConfigError> {
        self.resolve(key).map(|(value, _)| value)
    }

    /// All settings with their effective values, in declaration order.
    pub fn get_all_settings(&self) -> Vec<SettingInfo> {
        setting_keys()
            .filter_map(|key| {
                let (value, source) = self.resolve(key).ok()?;
                Some(SettingInfo {
                    key: key.to_string(),
                    value,
                    source,
                    description: DEFAULT_SETTINGS[key].description.to_string(),
                })
            })
            .collect()
    }

    fn resolve(&self, key: &str) -> Result<(String, SettingSource), ConfigError> {
        let def = DEFAULT_SETTINGS
            .get(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        match self.values.get(key) {
            Some(value) => match validate_setting(key, value) {
                Ok(()) => Ok((value.clone(), SettingSource::Environment)),
                Err(e) => {
                    tracing::warn!(key, value = %value, "Invalid setting ({e}), using default");
                    Ok((def.default.to_string(), SettingSource::Default))
                }
            },
            None => Ok((def.default.to_string(), SettingSource::Default)),
        }
    }
}
