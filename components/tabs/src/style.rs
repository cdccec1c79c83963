//! Colors, shapes and the indicator style of a tab row.

use serde::{Deserialize, Serialize};
use tablayout_color::Color;

/// Default colors used in the tab layout.
#[derive(Debug, Clone, Copy)]
pub struct TabLayoutColors;

impl TabLayoutColors {
    /// Light gray behind the tabs.
    pub const TAB_BACKGROUND: Color = Color::srgb_hex("#E6E6E6");
    /// White indicator.
    pub const SELECTED_TAB_INDICATOR: Color = Color::WHITE;
    /// Gray label of unselected tabs.
    pub const TAB_TEXT: Color = Color::srgb_hex("#666666");
    /// Black label of the selected tab.
    pub const SELECTED_TAB_TEXT: Color = Color::srgb_hex("#000000");
}

/// How the indicator is drawn. Both styles share the same edge animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    /// A thin rounded bar along the bottom of the selected tab.
    #[default]
    BottomBar,
    /// A rounded block filling the selected tab, like a segmented control.
    SegmentedFill,
}

/// Rejected style input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// A corner radius was negative, infinite or NaN.
    #[error("{field} must be a finite, non-negative radius (got {value})")]
    InvalidRadius {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
}

/// Visual configuration of a [`TabRow`](crate::TabRow).
///
/// Every field has a default, so partial configuration files are fine:
///
/// ```
/// use tablayout_tabs::{IndicatorStyle, TabRowStyle};
///
/// let style: TabRowStyle = serde_json::from_str(r##"{
///     "indicator_color": "#2563EB",
///     "segmented": true
/// }"##).unwrap();
///
/// assert_eq!(style.indicator_style(), IndicatorStyle::SegmentedFill);
/// assert_eq!(style.tab_corner_radius, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabRowStyle {
    /// Fill behind the whole row.
    pub background_color: Color,
    /// Fill of the indicator.
    pub indicator_color: Color,
    /// Label color of unselected tabs.
    pub text_color: Color,
    /// Label color of the selected tab.
    pub selected_text_color: Color,
    /// Corner radius of the row container.
    pub tab_corner_radius: f32,
    /// Corner radius of the indicator.
    pub indicator_corner_radius: f32,
    /// Draw the indicator as a segmented-control block instead of a bar.
    pub segmented: bool,
}

impl Default for TabRowStyle {
    fn default() -> Self {
        Self {
            background_color: TabLayoutColors::TAB_BACKGROUND,
            indicator_color: TabLayoutColors::SELECTED_TAB_INDICATOR,
            text_color: TabLayoutColors::TAB_TEXT,
            selected_text_color: TabLayoutColors::SELECTED_TAB_TEXT,
            tab_corner_radius: 20.0,
            indicator_corner_radius: 4.0,
            segmented: false,
        }
    }
}

impl TabRowStyle {
    /// The indicator style selected by [`segmented`](Self::segmented).
    #[must_use]
    pub const fn indicator_style(&self) -> IndicatorStyle {
        if self.segmented {
            IndicatorStyle::SegmentedFill
        } else {
            IndicatorStyle::BottomBar
        }
    }

    /// Checks the radii.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidRadius`] for the first radius that is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), StyleError> {
        check_radius("tab_corner_radius", self.tab_corner_radius)?;
        check_radius("indicator_corner_radius", self.indicator_corner_radius)
    }

    /// Returns a copy whose invalid radii are replaced by zero.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.tab_corner_radius = sanitize_radius("tab_corner_radius", self.tab_corner_radius);
        self.indicator_corner_radius =
            sanitize_radius("indicator_corner_radius", self.indicator_corner_radius);
        self
    }
}

fn check_radius(field: &'static str, value: f32) -> Result<(), StyleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StyleError::InvalidRadius { field, value })
    }
}

fn sanitize_radius(field: &'static str, value: f32) -> f32 {
    if let Err(error) = check_radius(field, value) {
        tracing::warn!(%error, "clamping corner radius to zero");
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_palette() {
        let style = TabRowStyle::default();

        assert_eq!(style.background_color, Color::srgb_u32(0xE6_E6_E6));
        assert_eq!(style.indicator_color, Color::WHITE);
        assert_eq!(style.text_color, Color::srgb_u32(0x66_66_66));
        assert_eq!(style.selected_text_color, Color::BLACK);
        assert_eq!(style.indicator_style(), IndicatorStyle::BottomBar);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn negative_radii_are_rejected_and_sanitized() {
        let style = TabRowStyle {
            indicator_corner_radius: -2.0,
            ..TabRowStyle::default()
        };

        assert_eq!(
            style.validate(),
            Err(StyleError::InvalidRadius {
                field: "indicator_corner_radius",
                value: -2.0,
            })
        );
        let fixed = style.sanitized();
        assert_eq!(fixed.indicator_corner_radius, 0.0);
        assert_eq!(fixed.tab_corner_radius, 20.0);
    }

    #[test]
    fn non_finite_radius_is_invalid() {
        let style = TabRowStyle {
            tab_corner_radius: f32::INFINITY,
            ..TabRowStyle::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn style_round_trips_through_json() {
        let style = TabRowStyle {
            segmented: true,
            indicator_color: Color::srgb_u32(0x25_63_EB),
            ..TabRowStyle::default()
        };

        let json = serde_json::to_string(&style).unwrap();
        let back: TabRowStyle = serde_json::from_str(&json).unwrap();

        assert_eq!(back, style);
    }
}
