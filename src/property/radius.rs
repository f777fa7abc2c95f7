//! Border radius: one value/unit pair per corner

use super::{CssProperty, InitialValue, PropertyGroup, PropertySpec, UnitRule};
use crate::sanitize::{sanitize_radius_value, sanitize_unit};
use crate::units::Unit;

/// Group rendering the four `border-*-radius` properties
pub type RadiusPropertyGroup = PropertyGroup<RadiusCorner>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CssProperty for RadiusCorner {
    const ALL: &'static [Self] = &[
        RadiusCorner::TopLeft,
        RadiusCorner::TopRight,
        RadiusCorner::BottomLeft,
        RadiusCorner::BottomRight,
    ];

    fn spec(self) -> &'static PropertySpec {
        match self {
            RadiusCorner::TopLeft => &TOP_LEFT,
            RadiusCorner::TopRight => &TOP_RIGHT,
            RadiusCorner::BottomLeft => &BOTTOM_LEFT,
            RadiusCorner::BottomRight => &BOTTOM_RIGHT,
        }
    }
}

const fn corner(
    css_name: &'static str,
    key: &'static str,
    setting_suffix: &'static str,
    label: &'static str,
    priority: (u32, u32),
) -> PropertySpec {
    PropertySpec {
        css_name,
        key,
        setting_suffix,
        default_value: InitialValue::Number(0),
        default_unit: Unit::Px,
        value_sanitizer: sanitize_radius_value,
        unit_sanitizer: sanitize_unit,
        label,
        priority,
        unit_rule: UnitRule::Always,
    }
}

static TOP_LEFT: PropertySpec = corner(
    "border-top-left-radius",
    "border_top_left_radius",
    "_css_border_top_left_radius",
    "Border top left radius",
    (34, 35),
);

static TOP_RIGHT: PropertySpec = corner(
    "border-top-right-radius",
    "border_top_right_radius",
    "_css_border_top_right_radius",
    "Border top right radius",
    (36, 37),
);

static BOTTOM_LEFT: PropertySpec = corner(
    "border-bottom-left-radius",
    "border_bottom_left_radius",
    "_css_border_bottom_left_radius",
    "Border bottom left radius",
    (38, 39),
);

static BOTTOM_RIGHT: PropertySpec = corner(
    "border-bottom-right-radius",
    "border_bottom_right_radius",
    "_css_border_bottom_right_radius",
    "Border bottom right radius",
    (40, 41),
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    fn all_corners(values: [(&str, &str); 4]) -> HashMap<String, Value> {
        let mut mods = HashMap::new();
        for (corner, (value, unit)) in ["top_left", "top_right", "bottom_left", "bottom_right"]
            .into_iter()
            .zip(values)
        {
            mods.insert(format!("card_css_border_{corner}_radius"), json!(value));
            mods.insert(format!("card_css_border_{corner}_radius_units"), json!(unit));
        }
        mods
    }

    #[test]
    fn test_all_renders_corners_in_fixed_order() {
        let group = RadiusPropertyGroup::new("card", ["all"]);
        let mods = all_corners([
            ("1", "value1"),
            ("2", "value2"),
            ("3", "value3"),
            ("4", "value10"),
        ]);

        assert_eq!(
            group.render_css(&mods),
            "border-top-left-radius:1px;\
             border-top-right-radius:2%;\
             border-bottom-left-radius:3em;\
             border-bottom-right-radius:4pc;"
        );
    }

    #[test]
    fn test_request_order_is_kept() {
        let group =
            RadiusPropertyGroup::new("card", ["border-bottom-left-radius", "border-top-left-radius"]);
        let mods = all_corners([("1", "value1"), ("0", "value1"), ("3", "value5"), ("0", "value1")]);

        assert_eq!(
            group.render_css(&mods),
            "border-bottom-left-radius:3rem;border-top-left-radius:1px;"
        );
    }

    #[test]
    fn test_setting_ids() {
        let group = RadiusPropertyGroup::new("card", ["all"]);
        assert_eq!(
            group.value_setting_id(RadiusCorner::TopRight),
            "card_css_border_top_right_radius"
        );
        assert_eq!(
            group.unit_setting_id(RadiusCorner::BottomRight),
            "card_css_border_bottom_right_radius_units"
        );
    }

    #[test]
    fn test_default_values() {
        let group = RadiusPropertyGroup::new("card", ["all"]);
        let defaults = group.default_values();

        assert_eq!(defaults.len(), 8);
        assert_eq!(defaults[0], ("border_top_left_radius".to_string(), json!(0)));
        assert_eq!(
            defaults[4],
            ("border_top_left_radius_units".to_string(), json!("value1"))
        );
    }

    #[test]
    fn test_priorities_are_sequential() {
        let priorities: Vec<_> = RadiusCorner::ALL.iter().map(|c| c.spec().priority).collect();
        assert_eq!(priorities, vec![(34, 35), (36, 37), (38, 39), (40, 41)]);
    }
}
