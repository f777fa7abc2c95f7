//! Configuration types
//!
//! This module contains the plain-data descriptors exchanged with the host:
//! - `SectionConfig` - A customizer section and the property groups it carries
//! - `Setting` - A theme mod registration (default + sanitizer)
//! - `Control` - A UI control bound to a setting

mod schema;
mod types;

pub use schema::{Control, ControlKind, Setting, SettingOption, opt};

pub use types::{
    GroupRequest, MAX_NAME_LEN, MAX_PROPERTY_GROUPS, MAX_SECTION_PRIORITY, SectionConfig,
    SectionConfigBuilder,
};
