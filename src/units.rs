//! CSS length/percentage units and their select-control codes
//!
//! The customizer stores a unit as an opaque option code (`value1`..`value10`)
//! rather than the literal suffix. This module owns that table.

use crate::config::SettingOption;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS length or percentage unit selectable in the customizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "ex")]
    Ex,
    #[serde(rename = "rem")]
    Rem,
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "mm")]
    Mm,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "pc")]
    Pc,
}

impl Unit {
    /// Every unit in select-control order (`value1` first)
    pub const ALL: [Unit; 10] = [
        Unit::Px,
        Unit::Percent,
        Unit::Em,
        Unit::Ex,
        Unit::Rem,
        Unit::Cm,
        Unit::Mm,
        Unit::In,
        Unit::Pt,
        Unit::Pc,
    ];

    /// Code stored for this unit (`value1` = px, ..., `value10` = pc)
    pub fn code(self) -> &'static str {
        match self {
            Unit::Px => "value1",
            Unit::Percent => "value2",
            Unit::Em => "value3",
            Unit::Ex => "value4",
            Unit::Rem => "value5",
            Unit::Cm => "value6",
            Unit::Mm => "value7",
            Unit::In => "value8",
            Unit::Pt => "value9",
            Unit::Pc => "value10",
        }
    }

    /// Literal CSS suffix
    pub fn as_css(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Rem => "rem",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
        }
    }

    /// Look a unit up by its stored code. Codes are exact-match.
    pub fn from_code(code: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.code() == code)
    }

    /// Options for the unit select control
    pub fn options() -> Vec<SettingOption> {
        Unit::ALL
            .into_iter()
            .map(|unit| SettingOption::new(unit.code(), unit.as_css()))
            .collect()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Map a stored unit setting to its CSS suffix.
///
/// Missing values and unknown codes map to an empty suffix.
pub fn unit_suffix(stored: Option<&serde_json::Value>) -> &'static str {
    stored
        .and_then(|v| v.as_str())
        .and_then(Unit::from_code)
        .map_or("", Unit::as_css)
}
