//! Documentation generator for registered controls
//!
//! Generates a markdown reference of every control a [`ThemeModStore`] holds,
//! in the order the customizer screen shows them.

use crate::config::{Control, ControlKind};
use crate::store::ThemeModStore;
use serde_json::Value;
use std::fmt::Write;

/// Configuration for docs generation
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    /// Title for the documentation
    pub title: Option<String>,
    /// Description/introduction text
    pub description: Option<String>,
    /// List the choices of select controls
    pub show_options: bool,
    /// Emit one heading per section
    pub group_by_section: bool,
}

impl DocsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_options: true,
            group_by_section: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    #[must_use]
    pub fn hide_options(mut self) -> Self {
        self.show_options = false;
        self
    }
}

/// Generate markdown documentation for the controls registered in `store`
#[must_use]
pub fn generate_docs(store: &ThemeModStore, config: DocsConfig) -> String {
    let mut output = String::new();

    let title = config
        .title
        .as_deref()
        .unwrap_or("Customizer Reference");
    let _ = writeln!(output, "# {title}\n");

    if let Some(desc) = &config.description {
        let _ = writeln!(output, "{desc}\n");
    }

    let sections = store.sections();
    let controls = store.controls();

    if config.group_by_section {
        let mut current_section: Option<&str> = None;
        for control in &controls {
            if current_section != Some(control.section_id.as_str()) {
                let heading = sections
                    .iter()
                    .find(|s| s.id == control.section_id)
                    .map_or(control.section_id.as_str(), |s| s.title.as_str());
                let _ = writeln!(output, "\n## {heading}\n");
                current_section = Some(control.section_id.as_str());
            }
            format_control(&mut output, store, control, &config);
        }
    } else {
        output.push_str("## Controls\n\n");
        for control in &controls {
            format_control(&mut output, store, control, &config);
        }
    }

    output
}

fn format_control(out: &mut String, store: &ThemeModStore, control: &Control, config: &DocsConfig) {
    let _ = writeln!(out, "### `{}`\n", control.setting_id);

    out.push_str("| Property | Value |\n");
    out.push_str("|----------|-------|\n");
    let _ = writeln!(out, "| **Kind** | {} |", control.kind.name());
    if !control.label.is_empty() {
        let _ = writeln!(out, "| **Label** | {} |", control.label);
    }
    if let Some(default) = store.default_of(&control.setting_id) {
        let _ = writeln!(out, "| **Default** | `{}` |", format_value(&default));
    }
    let _ = writeln!(out, "| **Priority** | {} |", control.priority);
    out.push('\n');

    if config.show_options {
        if let ControlKind::Select(options) = &control.kind {
            out.push_str("**Options:**\n\n");
            for opt in options {
                let _ = writeln!(out, "- `{}` - {}", format_value(&opt.value), opt.label);
            }
            out.push('\n');
        }
    }

    out.push_str("---\n\n");
}

fn format_value(v: &Value) -> String {
    match v {
        Value::String(s) => format!("\"{s}\""),
        Value::Null => "null".to_string(),
        _ => v.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SectionConfig;
    use crate::section::CssSection;

    fn registered_store() -> ThemeModStore {
        let store = ThemeModStore::new();
        let config = SectionConfig::builder("post")
            .title("Post Body")
            .dimension(["height"])
            .build()
            .unwrap();
        CssSection::new(config).unwrap().register(&store).unwrap();
        store
    }

    #[test]
    fn test_generate_docs() {
        let docs = generate_docs(
            &registered_store(),
            DocsConfig::new()
                .with_title("Theme Options")
                .with_description("Everything the customizer exposes"),
        );

        assert!(docs.contains("# Theme Options"));
        assert!(docs.contains("## Post Body"));
        assert!(docs.contains("`post_css_dimension_height`"));
        assert!(docs.contains("| **Default** | `\"auto\"` |"));
        assert!(docs.contains("| **Priority** | 47 |"));
        assert!(docs.contains("- `\"value3\"` - em"));
    }

    #[test]
    fn test_hide_options() {
        let docs = generate_docs(&registered_store(), DocsConfig::new().hide_options());
        assert!(!docs.contains("**Options:**"));
        assert!(docs.contains("post_css_dimension_height_units"));
    }
}
