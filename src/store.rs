//! In-memory customizer host
//!
//! [`ThemeModStore`] implements [`UiManager`] the way the theme customizer
//! does: settings are registered with a default and a sanitizer, every write
//! is sanitized, and reads fall back to the default. Values can be saved to
//! and loaded from disk through any [`StorageBackend`].
//!
//! Values equal to their default are not kept, so saved files only contain
//! what the user actually customized.

use crate::config::{Control, SectionConfig, Setting};
use crate::error::{Error, Result};
use crate::events::EventManager;
use crate::host::{SettingsReader, UiManager};
use crate::sanitize::Sanitized;
use crate::storage::{StorageBackend, ThemeMods};
use crate::sync::RwLockExt;
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

struct Registered {
    setting: Setting,
    /// `None` while the setting still holds its default
    value: Option<Value>,
}

impl Registered {
    fn current(&self) -> &Value {
        self.value.as_ref().unwrap_or(&self.setting.default)
    }
}

/// Thread-safe theme mod store with sanitized writes
pub struct ThemeModStore {
    settings: RwLock<HashMap<String, Registered>>,
    controls: RwLock<Vec<Control>>,
    sections: RwLock<Vec<SectionConfig>>,
    events: EventManager,
    accepts_controls: bool,
}

impl ThemeModStore {
    /// Create an empty store that accepts registrations
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: RwLock::new(HashMap::new()),
            controls: RwLock::new(Vec::new()),
            sections: RwLock::new(Vec::new()),
            events: EventManager::new(),
            accepts_controls: true,
        }
    }

    /// Create a store that refuses settings and controls.
    ///
    /// Stands in for a host that is not a customizer manager, e.g. the front
    /// end rendering CSS outside the customizer.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            accepts_controls: false,
            ..Self::new()
        }
    }

    /// Change listeners
    pub fn events(&self) -> &EventManager {
        &self.events
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Current value of a setting, falling back to its default
    pub fn get(&self, id: &str) -> Option<Value> {
        self.settings
            .read_recovered()
            .get(id)
            .map(|entry| entry.current().clone())
    }

    /// Sanitize and store a raw value.
    ///
    /// Returns the value actually stored (sanitizers may normalise input,
    /// e.g. lowercase keywords).
    ///
    /// # Errors
    ///
    /// - [`Error::SettingNotFound`] if `id` was never registered
    /// - [`Error::InvalidValue`] if the sanitizer rejects the input; the
    ///   previous value is kept
    pub fn set(&self, id: &str, raw: impl Into<Value>) -> Result<Value> {
        let raw = raw.into();
        let (old, new) = {
            let mut settings = self.settings.write_recovered();
            let entry = settings
                .get_mut(id)
                .ok_or_else(|| Error::SettingNotFound(id.to_string()))?;

            let accepted = match entry.setting.sanitize(&raw) {
                Sanitized::Accepted(value) => value,
                Sanitized::Rejected => {
                    warn!("Rejected value {raw} for '{id}', keeping previous value");
                    return Err(Error::InvalidValue {
                        key: id.to_string(),
                        reason: format!("sanitizer rejected {raw}"),
                    });
                }
            };

            let old = entry.current().clone();
            entry.value = (accepted != entry.setting.default).then(|| accepted.clone());
            (old, accepted)
        };

        debug!("Theme mod '{id}' set to {new}");
        if old != new {
            self.events.notify(id, &old, &new);
        }
        Ok(new)
    }

    /// Restore a setting to its default
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingNotFound`] if `id` was never registered.
    pub fn reset(&self, id: &str) -> Result<Value> {
        let (old, default) = {
            let mut settings = self.settings.write_recovered();
            let entry = settings
                .get_mut(id)
                .ok_or_else(|| Error::SettingNotFound(id.to_string()))?;
            let old = entry.current().clone();
            entry.value = None;
            (old, entry.setting.default.clone())
        };

        if old != default {
            self.events.notify(id, &old, &default);
        }
        Ok(default)
    }

    /// Whether `id` has been registered
    pub fn is_registered(&self, id: &str) -> bool {
        self.settings.read_recovered().contains_key(id)
    }

    /// Registered setting ids, sorted
    pub fn setting_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.settings.read_recovered().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Values that differ from their defaults
    pub fn customized(&self) -> ThemeMods {
        self.settings
            .read_recovered()
            .iter()
            .filter_map(|(id, entry)| entry.value.clone().map(|v| (id.clone(), v)))
            .collect()
    }

    /// Registered default of a setting
    pub fn default_of(&self, id: &str) -> Option<Value> {
        self.settings
            .read_recovered()
            .get(id)
            .map(|entry| entry.setting.default.clone())
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Registered controls in screen order.
    ///
    /// Sections are ordered by their priority (controls whose section was
    /// never registered come last), then controls by their own priority.
    /// Ties keep registration order.
    pub fn controls(&self) -> Vec<Control> {
        let section_priority: HashMap<String, u32> = self
            .sections
            .read_recovered()
            .iter()
            .map(|s| (s.id.clone(), s.priority))
            .collect();
        let rank = |control: &Control| {
            let section = section_priority
                .get(&control.section_id)
                .copied()
                .unwrap_or(u32::MAX);
            (section, control.section_id.clone(), control.priority)
        };

        let mut controls = self.controls.read_recovered().clone();
        controls.sort_by_cached_key(rank);
        controls
    }

    /// Controls of one section in screen order
    pub fn section_controls(&self, section_id: &str) -> Vec<Control> {
        self.controls()
            .into_iter()
            .filter(|c| c.section_id == section_id)
            .collect()
    }

    /// Registered sections ordered by priority
    pub fn sections(&self) -> Vec<SectionConfig> {
        let mut sections = self.sections.read_recovered().clone();
        sections.sort_by_key(|s| s.priority);
        sections
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write customized values to `path`.
    ///
    /// Values the format cannot represent (e.g. `null` in TOML) are left
    /// out with a warning; every other customization is still saved.
    ///
    /// # Errors
    ///
    /// Serialization or I/O errors from the storage backend.
    pub fn save<S: StorageBackend + ?Sized>(&self, storage: &S, path: &Path) -> Result<()> {
        let mut mods = self.customized();
        mods.retain(|id, value| {
            let keep = storage.can_store(value);
            if !keep {
                warn!(
                    "Not saving '{id}': {value} cannot be stored as {}",
                    storage.extension()
                );
            }
            keep
        });

        storage.save(path, &mods)?;
        info!("Saved {} theme mods to {}", mods.len(), path.display());
        Ok(())
    }

    /// Load values from `path` into already registered settings.
    ///
    /// Every value goes through its sanitizer; rejected values and unknown
    /// ids are skipped with a warning. Returns how many values were applied.
    ///
    /// # Errors
    ///
    /// Deserialization or I/O errors from the storage backend.
    pub fn load<S: StorageBackend + ?Sized>(&self, storage: &S, path: &Path) -> Result<usize> {
        let mut applied = 0;

        for (id, raw) in storage.load(path)? {
            match self.set(&id, raw) {
                Ok(_) => applied += 1,
                Err(Error::SettingNotFound(_)) => {
                    warn!("Ignoring stored value for unregistered setting '{id}'");
                }
                Err(e) if e.is_rejection() => {}
                Err(e) => return Err(e),
            }
        }

        info!("Loaded {applied} theme mods from {}", path.display());
        Ok(applied)
    }
}

impl Default for ThemeModStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsReader for ThemeModStore {
    fn read_setting(&self, id: &str) -> Option<Value> {
        self.get(id)
    }
}

impl UiManager for ThemeModStore {
    fn accepts_controls(&self) -> bool {
        self.accepts_controls
    }

    fn register_section(&self, section: &SectionConfig) -> Result<()> {
        let mut sections = self.sections.write_recovered();
        match sections.iter_mut().find(|s| s.id == section.id) {
            Some(existing) => *existing = section.clone(),
            None => sections.push(section.clone()),
        }
        debug!("Registered section '{}'", section.id);
        Ok(())
    }

    fn register_setting(&self, setting: Setting) -> Result<()> {
        if !self.accepts_controls {
            return Err(Error::NotAUiManager);
        }

        let mut settings = self.settings.write_recovered();
        debug!("Registered setting '{}' (default {})", setting.id, setting.default);
        match settings.get_mut(&setting.id) {
            // Re-registration swaps default and sanitizer but keeps what the
            // user stored. A setting still on its default follows the new one.
            Some(entry) => entry.setting = setting,
            None => {
                settings.insert(
                    setting.id.clone(),
                    Registered {
                        setting,
                        value: None,
                    },
                );
            }
        }
        Ok(())
    }

    fn register_control(&self, control: Control) -> Result<()> {
        if !self.accepts_controls {
            return Err(Error::NotAUiManager);
        }
        if !self.is_registered(&control.setting_id) {
            return Err(Error::SettingNotFound(control.setting_id));
        }

        let mut controls = self.controls.write_recovered();
        debug!(
            "Registered {} control for '{}' at priority {}",
            control.kind.name(),
            control.setting_id,
            control.priority
        );
        match controls
            .iter_mut()
            .find(|c| c.setting_id == control.setting_id)
        {
            Some(existing) => *existing = control,
            None => controls.push(control),
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
