//! Loading [`TabRowStyle`] from JSON.
//!
//! Every field is optional; missing ones take their defaults. Colors are hex
//! strings such as `"#2563EB"` or `"#2563EB80"`.

use std::{env, fs, path::Path};

use tablayout_color::Color;
use tablayout_tabs::TabRowStyle;

use crate::error::Result;

/// Parses and validates a style from JSON text.
///
/// # Errors
///
/// Fails if the text is not a valid style or a corner radius is negative.
pub fn style_from_json(json: &str) -> Result<TabRowStyle> {
    let style: TabRowStyle = serde_json::from_str(json)?;
    style.validate()?;
    Ok(style)
}

/// Reads a style from a JSON file.
///
/// # Errors
///
/// Fails if the file cannot be read or does not hold a valid style.
pub fn load_style(path: impl AsRef<Path>) -> Result<TabRowStyle> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let style = style_from_json(&text)?;
    tracing::debug!(path = %path.display(), "loaded tab row style");
    Ok(style)
}

/// Reads a style from the JSON held in the environment variable `var`.
///
/// An unset variable yields the default style.
///
/// # Errors
///
/// Fails if the variable is set but does not hold a valid style.
pub fn style_from_env(var: &str) -> Result<TabRowStyle> {
    match env::var(var) {
        Ok(json) => style_from_json(&json),
        Err(_) => {
            tracing::debug!(var, "style variable unset, using defaults");
            Ok(TabRowStyle::default())
        }
    }
}

/// Parses a single hex color, as accepted in style files.
///
/// # Errors
///
/// Fails if `text` is not six or eight hex digits with an optional `#` or
/// `0x` prefix.
pub fn parse_color(text: &str) -> Result<Color> {
    Ok(Color::try_from_hex(text.trim())?)
}

#[cfg(test)]
mod tests {
    use tablayout_tabs::StyleError;

    use super::*;
    use crate::Error;

    #[test]
    fn partial_json_keeps_defaults() {
        let style = style_from_json(r#"{ "segmented": true }"#).unwrap();

        assert!(style.segmented);
        assert_eq!(style.tab_corner_radius, 20.0);
        assert_eq!(style.background_color, TabRowStyle::default().background_color);
    }

    #[test]
    fn negative_radius_is_a_style_error() {
        let err = style_from_json(r#"{ "tab_corner_radius": -1.0 }"#).unwrap_err();

        assert!(matches!(
            err,
            Error::Style(StyleError::InvalidRadius {
                field: "tab_corner_radius",
                ..
            })
        ));
    }

    #[test]
    fn bad_color_is_a_config_error() {
        let err = style_from_json(r##"{ "text_color": "#12" }"##).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn style_file_is_read_back() {
        let path = std::env::temp_dir().join(format!(
            "tablayout-style-{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r##"{ "indicator_color": "#2563EB", "indicator_corner_radius": 6.0 }"##,
        )
        .unwrap();

        let loaded = load_style(&path);
        fs::remove_file(&path).unwrap();
        let style = loaded.unwrap();

        assert_eq!(style.indicator_color, Color::srgb_u32(0x25_63_EB));
        assert_eq!(style.indicator_corner_radius, 6.0);
        assert_eq!(style.tab_corner_radius, 20.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_style("/nonexistent/tablayout/style.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn unset_variable_gives_defaults() {
        let style = style_from_env("TABLAYOUT_TEST_STYLE_UNSET_VARIABLE").unwrap();
        assert_eq!(style, TabRowStyle::default());
    }

    #[test]
    fn colors_parse_with_or_without_prefix() {
        assert_eq!(parse_color("#2563EB").unwrap(), Color::srgb_u32(0x25_63_EB));
        assert_eq!(parse_color(" 0x2563eb ").unwrap(), Color::srgb_u32(0x25_63_EB));
        assert!(matches!(parse_color("blue"), Err(Error::Color(_))));
    }
}
