use crate::parse::parse_hex_color;

/// Represents a color in the sRGB color space.
///
/// Component values are in the range 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red component (0.0 to 1.0)
    pub red: f32,
    /// Green component (0.0 to 1.0)
    pub green: f32,
    /// Blue component (0.0 to 1.0)
    pub blue: f32,
}

impl Srgb {
    /// Black color.
    pub const BLACK: Self = Self::from_hex("#000000");
    /// White color.
    pub const WHITE: Self = Self::from_hex("#FFFFFF");

    /// Creates a new sRGB color from 8-bit red, green, and blue components.
    #[must_use]
    pub const fn new_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Parses a six-digit hex literal such as `"#FF5722"` or `"0xFF5722"`.
    ///
    /// Intended for constants; panics on malformed input.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        let (red, green, blue) = parse_hex_color(hex);
        Self::new_u8(red, green, blue)
    }

    /// Creates a new sRGB color from a packed 0xRRGGBB value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new_u8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Returns the components quantized to 8 bits.
    #[must_use]
    pub fn to_u8(&self) -> [u8; 3] {
        [
            crate::quantize(self.red),
            crate::quantize(self.green),
            crate::quantize(self.blue),
        ]
    }
}

impl From<[u8; 3]> for Srgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new_u8(value[0], value[1], value[2])
    }
}
