//! A customizer section turned into one CSS rule
//!
//! A [`CssSection`] owns the property groups listed in its
//! [`SectionConfig`]. Registering the section registers every group's
//! settings and controls; rendering it wraps the concatenated declarations
//! of all groups in a rule for the section's selector.

use crate::config::{GroupRequest, SectionConfig};
use crate::error::{Error, Result};
use crate::host::{SettingsReader, UiManager};
use crate::property::{DimensionPropertyGroup, RadiusPropertyGroup};
use log::debug;

/// One property group of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssGroup {
    Radius(RadiusPropertyGroup),
    Dimension(DimensionPropertyGroup),
}

impl CssGroup {
    fn from_request(section_id: &str, request: &GroupRequest) -> Self {
        match request {
            GroupRequest::BorderRadius(names) => {
                CssGroup::Radius(RadiusPropertyGroup::new(section_id, names.iter().cloned()))
            }
            GroupRequest::Dimension(names) => CssGroup::Dimension(DimensionPropertyGroup::new(
                section_id,
                names.iter().cloned(),
            )),
        }
    }

    pub fn register_controls<M: UiManager + ?Sized>(&self, manager: &M) -> Result<usize> {
        match self {
            CssGroup::Radius(group) => group.register_controls(manager),
            CssGroup::Dimension(group) => group.register_controls(manager),
        }
    }

    pub fn render_css<R: SettingsReader + ?Sized>(&self, reader: &R) -> String {
        match self {
            CssGroup::Radius(group) => group.render_css(reader),
            CssGroup::Dimension(group) => group.render_css(reader),
        }
    }

    /// Check the group's requested property names
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] for the first unrecognised name.
    pub fn validate(&self) -> Result<()> {
        match self {
            CssGroup::Radius(group) => group.validate(),
            CssGroup::Dimension(group) => group.validate(),
        }
    }
}

/// A section of the customizer and the CSS rule built from it
#[derive(Debug, Clone)]
pub struct CssSection {
    config: SectionConfig,
    groups: Vec<CssGroup>,
}

impl CssSection {
    /// Build the section and its property groups
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSection`] if the config violates a limit.
    pub fn new(config: SectionConfig) -> Result<Self> {
        config.validate()?;
        let groups = config
            .groups
            .iter()
            .map(|request| CssGroup::from_request(&config.id, request))
            .collect();
        Ok(Self { config, groups })
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn groups(&self) -> &[CssGroup] {
        &self.groups
    }

    /// Register the section itself, then every group's settings and controls.
    ///
    /// Returns the number of properties registered across all groups.
    ///
    /// # Errors
    ///
    /// [`Error::NotAUiManager`] if the host refuses controls, or any error
    /// raised by the host while registering.
    pub fn register<M: UiManager + ?Sized>(&self, manager: &M) -> Result<usize> {
        if !manager.accepts_controls() {
            return Err(Error::NotAUiManager);
        }

        manager.register_section(&self.config)?;
        let mut registered = 0;
        for group in &self.groups {
            registered += group.register_controls(manager)?;
        }
        debug!(
            "Section '{}' registered {} properties",
            self.config.id, registered
        );
        Ok(registered)
    }

    /// Render `<selector> {<declarations>} `, or `None` when no group
    /// produced a declaration.
    pub fn render_css<R: SettingsReader + ?Sized>(&self, reader: &R) -> Option<String> {
        let body: String = self.groups.iter().map(|g| g.render_css(reader)).collect();
        if body.is_empty() {
            return None;
        }
        Some(format!("{} {{{}}} ", self.config.rule_selector(), body))
    }
}

/// Render several sections into one stylesheet, skipping empty ones
pub fn render_stylesheet<R: SettingsReader + ?Sized>(sections: &[CssSection], reader: &R) -> String {
    sections
        .iter()
        .filter_map(|section| section.render_css(reader))
        .collect()
}
