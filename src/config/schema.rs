//! Setting and control descriptors handed to the customizer host
//!
//! A property group never talks to the host UI directly. It describes what it
//! needs as plain data:
//!
//! - [`Setting`] - a stored theme mod with its default and sanitizer
//! - [`Control`] - an input widget bound to one setting
//!
//! ```
//! use modcss::{Control, ControlKind, Setting, opt, sanitize_unit};
//! use serde_json::json;
//!
//! let setting = Setting::new("post_css_dimension_height_units", json!("value1"), sanitize_unit);
//! let control = Control::select(
//!     "post_css_dimension_height_units",
//!     vec![opt("value1", "px"), opt("value2", "%")],
//! )
//! .section("post")
//! .priority(47);
//!
//! assert_eq!(control.setting_id, setting.id);
//! assert!(matches!(control.kind, ControlKind::Select(_)));
//! ```

use crate::sanitize::{Sanitized, Sanitizer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Control Kinds
// =============================================================================

/// Kind of customizer control, used for UI rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "choices", rename_all = "lowercase")]
pub enum ControlKind {
    /// Free text input
    Text,
    /// Dropdown with predefined options
    Select(Vec<SettingOption>),
}

impl ControlKind {
    /// Short name as the host knows it ("text" / "select")
    pub fn name(&self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Select(_) => "select",
        }
    }
}

/// Option for select-type controls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingOption {
    /// The stored value
    pub value: Value,
    /// Display label
    pub label: String,
}

impl SettingOption {
    /// Create a simple string option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: Value::String(value.into()),
            label: label.into(),
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// A theme mod registration: id, default and input sanitizer
#[derive(Clone)]
pub struct Setting {
    /// Fully qualified setting id (`<section>_css_...`)
    pub id: String,
    /// Value used until the user stores something
    pub default: Value,
    /// Gate for every write
    pub sanitizer: Sanitizer,
}

impl Setting {
    pub fn new(id: impl Into<String>, default: Value, sanitizer: Sanitizer) -> Self {
        Self {
            id: id.into(),
            default,
            sanitizer,
        }
    }

    /// Run the sanitizer against raw input
    pub fn sanitize(&self, raw: &Value) -> Sanitized {
        (self.sanitizer)(raw)
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("id", &self.id)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Controls
// =============================================================================

/// A customizer control bound to a single setting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Control {
    pub kind: ControlKind,
    pub setting_id: String,
    pub label: String,
    pub section_id: String,
    /// Position inside the section; lower renders first
    pub priority: u32,
}

impl Control {
    /// Create a text input control
    pub fn text(setting_id: impl Into<String>) -> Self {
        Self::with_kind(ControlKind::Text, setting_id)
    }

    /// Create a select control.
    ///
    /// **Options are required** - you must provide them at construction time.
    pub fn select(setting_id: impl Into<String>, options: Vec<SettingOption>) -> Self {
        Self::with_kind(ControlKind::Select(options), setting_id)
    }

    fn with_kind(kind: ControlKind, setting_id: impl Into<String>) -> Self {
        Self {
            kind,
            setting_id: setting_id.into(),
            label: String::new(),
            section_id: String::new(),
            priority: 0,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn section(mut self, section_id: impl Into<String>) -> Self {
        self.section_id = section_id.into();
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Options of a select control, `None` for text inputs
    pub fn options(&self) -> Option<&[SettingOption]> {
        match &self.kind {
            ControlKind::Select(options) => Some(options),
            ControlKind::Text => None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Shorthand for creating a `SettingOption`
///
/// # Example
/// ```rust
/// use modcss::opt;
/// let options = vec![opt("value1", "px"), opt("value3", "em")];
/// ```
pub fn opt(value: impl Into<String>, label: impl Into<String>) -> SettingOption {
    SettingOption::new(value, label)
}

// =============================================================================
// Tests
// =============================================================================
