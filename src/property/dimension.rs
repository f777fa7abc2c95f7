//! Box dimensions: height, width and their max/min bounds
//!
//! Height, width and the max-* properties only get a unit suffix when the
//! stored value is numeric, so keywords render bare (`height:auto;`). The
//! min-* properties always get the suffix, keywords included
//! (`min-width:inheritpx;`).

use super::{CssProperty, InitialValue, PropertyGroup, PropertySpec, UnitRule};
use crate::sanitize::{
    Sanitizer, sanitize_height_width, sanitize_max_height_width, sanitize_min_height_width,
    sanitize_passthrough,
};
use crate::units::Unit;

/// Group rendering the six box dimension properties
pub type DimensionPropertyGroup = PropertyGroup<DimensionProperty>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionProperty {
    Height,
    Width,
    MaxHeight,
    MaxWidth,
    MinHeight,
    MinWidth,
}

impl CssProperty for DimensionProperty {
    const ALL: &'static [Self] = &[
        DimensionProperty::Height,
        DimensionProperty::Width,
        DimensionProperty::MaxHeight,
        DimensionProperty::MaxWidth,
        DimensionProperty::MinHeight,
        DimensionProperty::MinWidth,
    ];

    fn spec(self) -> &'static PropertySpec {
        match self {
            DimensionProperty::Height => &HEIGHT,
            DimensionProperty::Width => &WIDTH,
            DimensionProperty::MaxHeight => &MAX_HEIGHT,
            DimensionProperty::MaxWidth => &MAX_WIDTH,
            DimensionProperty::MinHeight => &MIN_HEIGHT,
            DimensionProperty::MinWidth => &MIN_WIDTH,
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn dimension(
    css_name: &'static str,
    key: &'static str,
    setting_suffix: &'static str,
    default_value: InitialValue,
    value_sanitizer: Sanitizer,
    label: &'static str,
    priority: (u32, u32),
    unit_rule: UnitRule,
) -> PropertySpec {
    PropertySpec {
        css_name,
        key,
        setting_suffix,
        default_value,
        default_unit: Unit::Px,
        value_sanitizer,
        unit_sanitizer: sanitize_passthrough,
        label,
        priority,
        unit_rule,
    }
}

// Priorities are not sequential: they reproduce the control order of the
// customizer screen (min-height first, width last).

static HEIGHT: PropertySpec = dimension(
    "height",
    "height",
    "_css_dimension_height",
    InitialValue::Keyword("auto"),
    sanitize_height_width,
    "Height",
    (46, 47),
    UnitRule::WhenNumeric,
);

static WIDTH: PropertySpec = dimension(
    "width",
    "width",
    "_css_dimension_width",
    InitialValue::Keyword("auto"),
    sanitize_height_width,
    "Width",
    (52, 53),
    UnitRule::WhenNumeric,
);

static MAX_HEIGHT: PropertySpec = dimension(
    "max-height",
    "max_height",
    "_css_dimension_max_height",
    InitialValue::Keyword("none"),
    sanitize_max_height_width,
    "Max height",
    (44, 45),
    UnitRule::WhenNumeric,
);

static MAX_WIDTH: PropertySpec = dimension(
    "max-width",
    "max_width",
    "_css_dimension_max_width",
    InitialValue::Keyword("none"),
    sanitize_max_height_width,
    "Max width",
    (50, 51),
    UnitRule::WhenNumeric,
);

static MIN_HEIGHT: PropertySpec = dimension(
    "min-height",
    "min_height",
    "_css_dimension_min_height",
    InitialValue::Number(0),
    sanitize_min_height_width,
    "Min height",
    (42, 43),
    UnitRule::Always,
);

static MIN_WIDTH: PropertySpec = dimension(
    "min-width",
    "min_width",
    "_css_dimension_min_width",
    InitialValue::Number(0),
    sanitize_min_height_width,
    "Min width",
    (48, 49),
    UnitRule::Always,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    fn mods(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_keyword_renders_without_unit() {
        let group = DimensionPropertyGroup::new("post", ["height"]);
        let reader = mods(&[
            ("post_css_dimension_height", json!("auto")),
            ("post_css_dimension_height_units", json!("value1")),
        ]);
        assert_eq!(group.render_css(&reader), "height:auto;");
    }

    #[test]
    fn test_numeric_renders_with_unit() {
        let group = DimensionPropertyGroup::new("post", ["height"]);
        let reader = mods(&[
            ("post_css_dimension_height", json!("10")),
            ("post_css_dimension_height_units", json!("value3")),
        ]);
        assert_eq!(group.render_css(&reader), "height:10em;");
    }

    #[test]
    fn test_min_properties_always_take_the_unit() {
        let group = DimensionPropertyGroup::new("post", ["min-width"]);
        let numeric = mods(&[
            ("post_css_dimension_min_width", json!("20")),
            ("post_css_dimension_min_width_units", json!("value1")),
        ]);
        assert_eq!(group.render_css(&numeric), "min-width:20px;");

        let keyword = mods(&[
            ("post_css_dimension_min_width", json!("inherit")),
            ("post_css_dimension_min_width_units", json!("value1")),
        ]);
        assert_eq!(group.render_css(&keyword), "min-width:inheritpx;");
    }

    #[test]
    fn test_all_order() {
        let group = DimensionPropertyGroup::new("post", ["all"]);
        let names: Vec<_> = group.resolved().iter().map(|p| p.css_name()).collect();
        assert_eq!(
            names,
            vec!["height", "width", "max-height", "max-width", "min-height", "min-width"]
        );
    }

    #[test]
    fn test_priorities() {
        let by_name: HashMap<_, _> = DimensionProperty::ALL
            .iter()
            .map(|p| (p.css_name(), p.spec().priority))
            .collect();
        assert_eq!(by_name["min-height"], (42, 43));
        assert_eq!(by_name["max-height"], (44, 45));
        assert_eq!(by_name["height"], (46, 47));
        assert_eq!(by_name["min-width"], (48, 49));
        assert_eq!(by_name["max-width"], (50, 51));
        assert_eq!(by_name["width"], (52, 53));
    }

    #[test]
    fn test_default_values() {
        let group = DimensionPropertyGroup::new("post", Vec::<String>::new());
        let defaults: HashMap<_, _> = group.default_values().into_iter().collect();
        assert_eq!(defaults["height"], json!("auto"));
        assert_eq!(defaults["max_width"], json!("none"));
        assert_eq!(defaults["min_height"], json!(0));
        assert_eq!(defaults["min_width_units"], json!("value1"));
        assert_eq!(defaults.len(), 12);
    }

    #[test]
    fn test_empty_request_renders_nothing() {
        let group = DimensionPropertyGroup::new("post", Vec::<String>::new());
        assert_eq!(group.render_css(&HashMap::<String, Value>::new()), "");
    }
}
