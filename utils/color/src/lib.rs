#![no_std]
//! # Color Module
//!
//! Plain color values used by the tab layout components.
//!
//! [`Srgb`] stores the three channels, [`Color`] pairs them with an opacity.
//! Colors print and parse as hexadecimal strings (`#RRGGBB`, or `#RRGGBBAA`
//! when translucent), which is also their serde representation so that styles
//! can be written by hand in configuration files.

extern crate alloc;

mod parse;
mod srgb;
pub use srgb::Srgb;

use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    /// The provided string does not have the expected number of hexadecimal digits.
    #[error("expected 6 or 8 hexadecimal digits")]
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

/// An sRGB color with an opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    srgb: Srgb,
    opacity: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(Srgb::BLACK);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(Srgb::WHITE);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(Srgb::BLACK, 0.0);

    /// Creates a color from an sRGB value and an opacity in `0.0..=1.0`.
    #[must_use]
    pub const fn new(srgb: Srgb, opacity: f32) -> Self {
        Self { srgb, opacity }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn opaque(srgb: Srgb) -> Self {
        Self::new(srgb, 1.0)
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn srgb_u32(rgb: u32) -> Self {
        Self::opaque(Srgb::from_u32(rgb))
    }

    /// Creates an opaque color from a hex literal. Panics on malformed input.
    #[must_use]
    pub const fn srgb_hex(hex: &str) -> Self {
        Self::opaque(Srgb::from_hex(hex))
    }

    /// Returns a copy with the given opacity.
    #[must_use]
    pub const fn with_opacity(self, opacity: f32) -> Self {
        Self::new(self.srgb, opacity)
    }

    /// The sRGB channels.
    #[must_use]
    pub const fn srgb_value(&self) -> Srgb {
        self.srgb
    }

    /// The opacity (0.0 = transparent, 1.0 = opaque).
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError`] when the digit count or a digit is invalid.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let (rgb, alpha) = parse::parse_hex_color_runtime(hex)?;
        let opacity = alpha.map_or(1.0, |a| f32::from(a) / 255.0);
        Ok(Self::new(Srgb::from(rgb), opacity))
    }
}

impl From<Srgb> for Color {
    fn from(value: Srgb) -> Self {
        Self::opaque(value)
    }
}

impl FromStr for Color {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.srgb.to_u8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")?;
        let alpha = quantize(self.opacity);
        if alpha != u8::MAX {
            write!(f, "{alpha:02X}")?;
        }
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(channel: f32) -> u8 {
    // `as` saturates, the offset rounds to nearest.
    (channel.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::Color;

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct HexVisitor;

    impl de::Visitor<'_> for HexVisitor {
        type Value = Color;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a hex color such as \"#E6E6E6\"")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Color::try_from_hex(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(HexVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_round_trips_through_hex() {
        let color = Color::srgb_u32(0x66_66_66);
        assert_eq!(color.to_string(), "#666666");
        assert_eq!("#666666".parse::<Color>(), Ok(color));
    }

    #[test]
    fn translucent_colors_print_alpha() {
        let color = Color::WHITE.with_opacity(0.5);
        assert_eq!(color.to_string(), "#FFFFFF80");
    }

    #[test]
    fn eight_digits_carry_opacity() {
        let color = Color::try_from_hex("0x00000080").unwrap();
        assert_eq!(color.srgb_value(), Srgb::BLACK);
        assert!((color.opacity() - 128.0 / 255.0).abs() < f32::EPSILON);

        assert_eq!(Color::try_from_hex("#FFFFF"), Err(HexColorError::InvalidLength));
        assert_eq!(Color::try_from_hex("#FFFFFG"), Err(HexColorError::InvalidDigit(6)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::srgb_hex("#E6E6E6")).unwrap();
        assert_eq!(json, "\"#E6E6E6\"");
        let back: Color = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(back, Color::BLACK);
        assert!(serde_json::from_str::<Color>("\"#00\"").is_err());
    }
}
