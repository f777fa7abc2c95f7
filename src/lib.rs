//! # modcss - customizer-driven CSS property groups
//!
//! Settings-backed CSS generation for theme customizers. A property group
//! registers a value setting and a unit setting for each CSS property it
//! manages, sanitizes what users type, and renders the stored values as CSS
//! declarations.
//!
//! ## Features
//!
//! - **Border radius**: the four `border-*-radius` corners, numeric value + unit
//! - **Dimensions**: `height`, `width`, `max-*` and `min-*`, number or keyword + unit
//! - **Sanitizers**: explicit `Accepted` / `Rejected` outcomes; rejected input keeps the prior value
//! - **Sections**: wrap several groups into a single CSS rule
//! - **Reference host**: [`ThemeModStore`], an in-memory customizer with JSON/TOML persistence
//!
//! ## Quick Start
//!
//! ```rust
//! use modcss::{CssSection, SectionConfig, ThemeModStore};
//!
//! # fn example() -> modcss::Result<()> {
//! let store = ThemeModStore::new();
//!
//! let section = CssSection::new(
//!     SectionConfig::builder("post")
//!         .title("Post")
//!         .selector(".")
//!         .border_radius(["all"])
//!         .dimension(["height", "min-width"])
//!         .build()?,
//! )?;
//! section.register(&store)?;
//!
//! store.set("post_css_border_top_left_radius", "4")?;
//! store.set("post_css_dimension_height", "AUTO")?;
//!
//! let css = section.render_css(&store).unwrap_or_default();
//! assert!(css.starts_with(".post {border-top-left-radius:4px;"));
//! assert!(css.contains("height:auto;"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Bringing Your Own Host
//!
//! Groups only talk to the host through [`SettingsReader`] and [`UiManager`].
//! Anything that can hand back stored values can render CSS, including a
//! plain `HashMap<String, Value>`:
//!
//! ```rust
//! use modcss::RadiusPropertyGroup;
//! use serde_json::{json, Value};
//! use std::collections::HashMap;
//!
//! let mut mods: HashMap<String, Value> = HashMap::new();
//! mods.insert("card_css_border_top_left_radius".into(), json!("50"));
//! mods.insert("card_css_border_top_left_radius_units".into(), json!("value2"));
//!
//! let group = RadiusPropertyGroup::new("card", ["border-top-left-radius"]);
//! assert_eq!(group.render_css(&mods), "border-top-left-radius:50%;");
//! ```

mod docs;
mod error;
mod events;
mod host;
mod section;
mod store;
mod sync;

pub mod config;
pub mod property;
pub mod sanitize;
pub mod storage;
pub mod units;

pub use docs::{DocsConfig, generate_docs};
pub use error::{Error, Result};
pub use events::EventManager;
pub use host::{SettingsReader, UiManager};
pub use section::{CssGroup, CssSection, render_stylesheet};
pub use store::ThemeModStore;

#[cfg(feature = "toml")]
pub use storage::TomlStorage;
pub use storage::{JsonStorage, StorageBackend, ThemeMods};

pub use config::{
    Control, ControlKind, GroupRequest, SectionConfig, SectionConfigBuilder, Setting,
    SettingOption, opt,
};
pub use property::{
    ALL_PROPERTIES, CssProperty, DimensionProperty, DimensionPropertyGroup, InitialValue,
    PropertyGroup, PropertySpec, RadiusCorner, RadiusPropertyGroup, UnitRule,
};
pub use sanitize::{
    Sanitized, Sanitizer, is_numeric, sanitize_height_width, sanitize_max_height_width,
    sanitize_min_height_width, sanitize_passthrough, sanitize_radius_value, sanitize_unit,
};
pub use units::Unit;
