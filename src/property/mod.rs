//! Property groups: value/unit setting pairs rendered as CSS declarations
//!
//! A [`PropertyGroup`] is created for one customizer section with a list of
//! requested property names (e.g. `["height", "min-width"]`, or `["all"]`).
//! It can then:
//!
//! - register a value setting, a unit setting and their two controls per
//!   requested property ([`PropertyGroup::register_controls`])
//! - render the stored values as `property:value<unit>;` declarations
//!   ([`PropertyGroup::render_css`])
//!
//! The per-property details (defaults, sanitizers, labels, priorities) live
//! in a static [`PropertySpec`] looked up through the [`CssProperty`] trait.
//!
//! ```
//! use modcss::{DimensionPropertyGroup, ThemeModStore};
//! use serde_json::json;
//!
//! let store = ThemeModStore::new();
//! let group = DimensionPropertyGroup::new("post", ["height"]);
//! group.register_controls(&store)?;
//!
//! store.set("post_css_dimension_height", json!("10"))?;
//! store.set("post_css_dimension_height_units", json!("value3"))?;
//! assert_eq!(group.render_css(&store), "height:10em;");
//! # Ok::<(), modcss::Error>(())
//! ```

mod dimension;
mod radius;

pub use dimension::{DimensionProperty, DimensionPropertyGroup};
pub use radius::{RadiusCorner, RadiusPropertyGroup};

use crate::config::{Control, Setting};
use crate::error::{Error, Result};
use crate::host::{SettingsReader, UiManager};
use crate::sanitize::{Sanitizer, is_numeric};
use crate::units::{Unit, unit_suffix};
use log::{debug, warn};
use serde_json::{Value, json};
use std::fmt;
use std::marker::PhantomData;

/// Wildcard accepted in the requested property list
pub const ALL_PROPERTIES: &str = "all";

// =============================================================================
// Property Specs
// =============================================================================

/// Default stored for a value setting
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialValue {
    Number(i64),
    Keyword(&'static str),
}

impl InitialValue {
    pub fn to_value(self) -> Value {
        match self {
            InitialValue::Number(n) => json!(n),
            InitialValue::Keyword(k) => Value::String(k.to_string()),
        }
    }
}

/// When the unit suffix is written after the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRule {
    /// Always, even after keywords such as `inherit`
    Always,
    /// Only when the stored value is numeric
    WhenNumeric,
}

/// Static descriptor for one CSS property
#[derive(Debug)]
pub struct PropertySpec {
    /// CSS property name, also the name used in requests
    pub css_name: &'static str,
    /// Key of the value in [`PropertyGroup::default_values`]
    pub key: &'static str,
    /// Appended to the section id to build the value setting id
    pub setting_suffix: &'static str,
    pub default_value: InitialValue,
    pub default_unit: Unit,
    pub value_sanitizer: Sanitizer,
    pub unit_sanitizer: Sanitizer,
    pub label: &'static str,
    /// Control priorities for (value input, unit select)
    pub priority: (u32, u32),
    pub unit_rule: UnitRule,
}

/// A closed set of CSS properties managed together
pub trait CssProperty: Copy + Eq + fmt::Debug + 'static {
    /// Every property of the set, in `"all"` expansion order
    const ALL: &'static [Self];

    fn spec(self) -> &'static PropertySpec;

    fn css_name(self) -> &'static str {
        self.spec().css_name
    }

    /// Look a property up by its CSS name (exact match)
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.css_name() == name)
    }
}

// =============================================================================
// Property Group
// =============================================================================

/// Requested properties of one set, bound to a customizer section
#[derive(Clone, PartialEq, Eq)]
pub struct PropertyGroup<P: CssProperty> {
    section_id: String,
    requested: Vec<String>,
    _property: PhantomData<P>,
}

impl<P: CssProperty> fmt::Debug for PropertyGroup<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyGroup")
            .field("section_id", &self.section_id)
            .field("requested", &self.requested)
            .finish()
    }
}

impl<P: CssProperty> PropertyGroup<P> {
    /// Create a group. Names are stored as given; unknown names are
    /// skipped (with a warning) at registration and render time.
    pub fn new<I, S>(section_id: impl Into<String>, requested: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            section_id: section_id.into(),
            requested: requested.into_iter().map(Into::into).collect(),
            _property: PhantomData,
        }
    }

    /// Like [`new`](Self::new), but fails on the first unknown property name
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] naming the offending entry.
    pub fn try_new<I, S>(section_id: impl Into<String>, requested: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group = Self::new(section_id, requested);
        group.validate()?;
        Ok(group)
    }

    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    pub fn requested_properties(&self) -> &[String] {
        &self.requested
    }

    /// Check that every requested name is known
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] for the first unrecognised name.
    pub fn validate(&self) -> Result<()> {
        match self.unknown_properties().first() {
            Some(name) => Err(Error::UnknownProperty((*name).to_string())),
            None => Ok(()),
        }
    }

    /// Requested names that match no property and are not `"all"`
    pub fn unknown_properties(&self) -> Vec<&str> {
        self.requested
            .iter()
            .map(String::as_str)
            .filter(|name| *name != ALL_PROPERTIES && P::from_name(name).is_none())
            .collect()
    }

    /// Requested properties in processing order, `"all"` expanded in place
    pub fn resolved(&self) -> Vec<P> {
        let mut properties = Vec::new();
        for name in &self.requested {
            if name == ALL_PROPERTIES {
                properties.extend_from_slice(P::ALL);
            } else if let Some(property) = P::from_name(name) {
                properties.push(property);
            } else {
                warn!(
                    "Skipping unknown css property '{}' in section '{}'",
                    name, self.section_id
                );
            }
        }
        properties
    }

    /// Defaults for every property of the set, values first then units
    pub fn default_values(&self) -> Vec<(String, Value)> {
        let values = P::ALL
            .iter()
            .map(|p| (p.spec().key.to_string(), p.spec().default_value.to_value()));
        let units = P::ALL.iter().map(|p| {
            let spec = p.spec();
            (format!("{}_units", spec.key), json!(spec.default_unit.code()))
        });
        values.chain(units).collect()
    }

    /// Id of the value setting for `property` in this section
    pub fn value_setting_id(&self, property: P) -> String {
        format!("{}{}", self.section_id, property.spec().setting_suffix)
    }

    /// Id of the unit setting for `property` in this section
    pub fn unit_setting_id(&self, property: P) -> String {
        format!("{}_units", self.value_setting_id(property))
    }

    /// Register settings and controls for every requested property.
    ///
    /// Per property: the value setting, its text control, the unit setting
    /// and its unit select control. A property requested more than once
    /// (e.g. `["all", "height"]`) is registered once. Returns how many
    /// distinct properties were registered.
    ///
    /// # Errors
    ///
    /// [`Error::NotAUiManager`] if the host refuses controls (nothing is
    /// registered), or any error raised by the host itself.
    pub fn register_controls<M>(&self, manager: &M) -> Result<usize>
    where
        M: UiManager + ?Sized,
    {
        if !manager.accepts_controls() {
            return Err(Error::NotAUiManager);
        }

        let mut registered: Vec<P> = Vec::new();
        for property in self.resolved() {
            if registered.contains(&property) {
                continue;
            }
            self.register_property(manager, property)?;
            registered.push(property);
        }
        Ok(registered.len())
    }

    fn register_property<M>(&self, manager: &M, property: P) -> Result<()>
    where
        M: UiManager + ?Sized,
    {
        let spec = property.spec();
        let value_id = self.value_setting_id(property);
        let unit_id = self.unit_setting_id(property);
        let (value_priority, unit_priority) = spec.priority;

        debug!(
            "Registering '{}' for section '{}' at priority {}/{}",
            spec.css_name, self.section_id, value_priority, unit_priority
        );

        manager.register_setting(Setting::new(
            &value_id,
            spec.default_value.to_value(),
            spec.value_sanitizer,
        ))?;
        manager.register_control(
            Control::text(value_id)
                .label(spec.label)
                .section(&self.section_id)
                .priority(value_priority),
        )?;

        manager.register_setting(Setting::new(
            &unit_id,
            json!(spec.default_unit.code()),
            spec.unit_sanitizer,
        ))?;
        manager.register_control(
            Control::select(unit_id, Unit::options())
                .section(&self.section_id)
                .priority(unit_priority),
        )
    }

    /// Render every requested property as concatenated declarations.
    ///
    /// Returns an empty string when no requested name matched.
    pub fn render_css<R>(&self, reader: &R) -> String
    where
        R: SettingsReader + ?Sized,
    {
        self.resolved()
            .into_iter()
            .map(|property| self.render_property(property, reader))
            .collect()
    }

    /// Render a single `property:value<unit>;` declaration
    pub fn render_property<R>(&self, property: P, reader: &R) -> String
    where
        R: SettingsReader + ?Sized,
    {
        let spec = property.spec();
        let value = reader.read_setting(&self.value_setting_id(property));

        let with_unit = match spec.unit_rule {
            UnitRule::Always => true,
            UnitRule::WhenNumeric => value.as_ref().is_some_and(is_numeric),
        };
        let unit = if with_unit {
            unit_suffix(reader.read_setting(&self.unit_setting_id(property)).as_ref())
        } else {
            ""
        };

        format!("{}:{}{};", spec.css_name, css_text(value.as_ref()), unit)
    }
}

/// Text of a stored value as it appears in a declaration
fn css_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Bool(true)) => "1".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
