//! Host collaborator traits
//!
//! Property groups do not own any state besides their section id and the
//! requested property names. Reading stored values and registering settings
//! and controls is delegated to whatever implements these traits: the real
//! customizer in production, [`ThemeModStore`](crate::ThemeModStore) in tests.

use crate::config::{Control, SectionConfig, Setting};
use crate::error::Result;
use serde_json::Value;

/// Read access to stored theme mods
pub trait SettingsReader {
    /// Current value of a setting, falling back to its registered default.
    ///
    /// Returns `None` when the id is unknown to the host.
    fn read_setting(&self, id: &str) -> Option<Value>;
}

/// Settings and control registration surface of the customizer
pub trait UiManager: SettingsReader {
    /// Whether this host can take registrations at all.
    ///
    /// A host that returns `false` makes registration fail with
    /// [`Error::NotAUiManager`](crate::Error::NotAUiManager) before anything
    /// is registered.
    fn accepts_controls(&self) -> bool {
        true
    }

    /// Register the customizer section that controls are placed in.
    ///
    /// Hosts that lay out controls without sections can ignore this.
    fn register_section(&self, _section: &SectionConfig) -> Result<()> {
        Ok(())
    }

    /// Register a setting with its default and sanitizer
    fn register_setting(&self, setting: Setting) -> Result<()>;

    /// Register a control bound to an already registered setting
    fn register_control(&self, control: Control) -> Result<()>;
}

impl<T: SettingsReader + ?Sized> SettingsReader for &T {
    fn read_setting(&self, id: &str) -> Option<Value> {
        (**self).read_setting(id)
    }
}

impl SettingsReader for std::collections::HashMap<String, Value> {
    fn read_setting(&self, id: &str) -> Option<Value> {
        self.get(id).cloned()
    }
}
