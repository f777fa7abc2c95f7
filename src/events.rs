//! Change notifications for theme mods
//!
//! Lets a live preview react when the customizer stores a new value.

use crate::sync::RwLockExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

/// Type alias for a change callback receiving (`setting_id`, `old_value`, `new_value`)
pub type ChangeCallback = Arc<dyn Fn(&str, &Value, &Value) + Send + Sync>;

/// Manages event listeners for theme mod changes
pub struct EventManager {
    /// Called for every change
    global_listeners: RwLock<Vec<ChangeCallback>>,

    /// Called only for changes to one setting id
    key_listeners: RwLock<HashMap<String, Vec<ChangeCallback>>>,
}

impl EventManager {
    /// Create a new event manager
    #[must_use]
    pub fn new() -> Self {
        Self {
            global_listeners: RwLock::new(Vec::new()),
            key_listeners: RwLock::new(HashMap::new()),
        }
    }

    /// Register a listener called for every change
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(&str, &Value, &Value) + Send + Sync + 'static,
    {
        self.global_listeners
            .write_recovered()
            .push(Arc::new(callback));
    }

    /// Register a listener for a single setting id
    ///
    /// # Arguments
    /// * `setting_id` - e.g. "`post_css_dimension_height`"
    /// * `callback` - Function receiving (`setting_id`, `old_value`, `new_value`)
    pub fn watch<F>(&self, setting_id: &str, callback: F)
    where
        F: Fn(&str, &Value, &Value) + Send + Sync + 'static,
    {
        self.key_listeners
            .write_recovered()
            .entry(setting_id.to_string())
            .or_default()
            .push(Arc::new(callback));
    }

    /// Notify all listeners about a change
    pub fn notify(&self, setting_id: &str, old_value: &Value, new_value: &Value) {
        // Listeners are cloned out so a callback may register further listeners
        let global: Vec<ChangeCallback> = self.global_listeners.read_recovered().clone();
        for callback in &global {
            callback(setting_id, old_value, new_value);
        }

        let keyed: Vec<ChangeCallback> = self
            .key_listeners
            .read_recovered()
            .get(setting_id)
            .cloned()
            .unwrap_or_default();
        for callback in &keyed {
            callback(setting_id, old_value, new_value);
        }
    }

    /// Remove all listeners for a specific setting id
    pub fn unwatch(&self, setting_id: &str) {
        self.key_listeners.write_recovered().remove(setting_id);
    }

    /// Clear all listeners
    pub fn clear(&self) {
        self.global_listeners.write_recovered().clear();
        self.key_listeners.write_recovered().clear();
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
