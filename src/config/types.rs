//! Customizer section configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Longest accepted section id, title or selector
pub const MAX_NAME_LEN: usize = 50;
/// Highest accepted section priority
pub const MAX_SECTION_PRIORITY: u32 = 500;
/// Most property groups a single section may carry
pub const MAX_PROPERTY_GROUPS: usize = 40;

/// Property group requested by a section, with the property names it should manage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "group", content = "properties", rename_all = "kebab-case")]
pub enum GroupRequest {
    /// `border-*-radius` corners
    BorderRadius(Vec<String>),
    /// height/width and their bounds
    Dimension(Vec<String>),
}

/// Description of one customizer section and the CSS rule it produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Unique section id; also the id/class name when `selector` is `#` or `.`
    pub id: String,

    /// Title shown on the customizer screen
    pub title: String,

    /// Placement of the section on the customizer screen
    pub priority: u32,

    /// `#`, `.` or a full selector such as `article p`
    pub selector: String,

    /// Property groups in render order
    #[serde(default)]
    pub groups: Vec<GroupRequest>,
}

impl SectionConfig {
    /// Create a new builder for SectionConfig
    ///
    /// # Example
    /// ```rust
    /// use modcss::SectionConfig;
    ///
    /// let config = SectionConfig::builder("post")
    ///     .title("Post")
    ///     .priority(30)
    ///     .selector(".")
    ///     .border_radius(["all"])
    ///     .dimension(["height", "width"])
    ///     .build()?;
    ///
    /// assert_eq!(config.rule_selector(), ".post");
    /// # Ok::<(), modcss::Error>(())
    /// ```
    pub fn builder(id: impl Into<String>) -> SectionConfigBuilder {
        SectionConfigBuilder::new(id)
    }

    /// Selector placed in front of the rule body
    pub fn rule_selector(&self) -> String {
        match self.selector.as_str() {
            "#" | "." => format!("{}{}", self.selector, self.id),
            other => other.to_string(),
        }
    }

    /// Check the limits a customizer section has to respect
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSection`] describing the first violated limit.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| {
            Err(Error::InvalidSection {
                id: self.id.clone(),
                reason,
            })
        };

        if self.id.is_empty() {
            return invalid("id must not be empty".into());
        }
        if self.id.chars().count() > MAX_NAME_LEN {
            return invalid(format!("id is longer than {MAX_NAME_LEN} characters"));
        }
        if self.title.chars().count() > MAX_NAME_LEN {
            return invalid(format!("title is longer than {MAX_NAME_LEN} characters"));
        }
        if self.selector.chars().count() > MAX_NAME_LEN {
            return invalid(format!("selector is longer than {MAX_NAME_LEN} characters"));
        }
        if self.priority > MAX_SECTION_PRIORITY {
            return invalid(format!(
                "priority {} exceeds {MAX_SECTION_PRIORITY}",
                self.priority
            ));
        }
        if self.groups.len() > MAX_PROPERTY_GROUPS {
            return invalid(format!(
                "{} property groups exceed the limit of {MAX_PROPERTY_GROUPS}",
                self.groups.len()
            ));
        }
        Ok(())
    }
}

/// Builder for creating SectionConfig with a fluent API
#[derive(Debug, Clone)]
pub struct SectionConfigBuilder {
    id: String,
    title: Option<String>,
    priority: u32,
    selector: String,
    groups: Vec<GroupRequest>,
}

impl SectionConfigBuilder {
    /// Create a new builder with the required section id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            priority: 160,
            selector: "#".into(),
            groups: Vec::new(),
        }
    }

    /// Set the title (default: the section id)
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the section priority (default: 160)
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the selector (default: `#`, i.e. `#<id>`)
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Add a border radius group
    pub fn border_radius<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(GroupRequest::BorderRadius(
            properties.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Add a dimension group
    pub fn dimension<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(GroupRequest::Dimension(
            properties.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Build and validate the SectionConfig
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSection`] if a limit is violated.
    pub fn build(self) -> Result<SectionConfig> {
        let config = SectionConfig {
            title: self.title.unwrap_or_else(|| self.id.clone()),
            id: self.id,
            priority: self.priority,
            selector: self.selector,
            groups: self.groups,
        };
        config.validate()?;
        Ok(config)
    }
}
