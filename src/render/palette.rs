//! Colours used by the renderer
//!
//! Colours are written as `"#RRGGBB"` strings in configuration files.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// An opaque 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` value
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Draw `self` with opacity `alpha` over `background`
    pub fn over(&self, background: Rgb, alpha: u8) -> Rgb {
        let mix = |fg: u8, bg: u8| -> u8 {
            let a = alpha as u16;
            ((fg as u16 * a + bg as u16 * (255 - a) + 127) / 255) as u8
        };

        Rgb {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value.strip_prefix('#').unwrap_or(&value);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("expected a colour like \"#A6CF98\", got {:?}", value));
        }

        u32::from_str_radix(hex, 16)
            .map(Rgb::from_hex)
            .map_err(|e| format!("invalid colour {:?}: {}", value, e))
    }
}

/// Colours for every element of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Text and borders
    pub foreground: Rgb,
    /// Empty board cells
    pub board: Rgb,
    /// Grid marks and snake segments
    pub snake: Rgb,
    /// Food and the game-over banner
    pub food: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Rgb::from_hex(0xF2FFE9),
            board: Rgb::from_hex(0xA6CF98),
            snake: Rgb::from_hex(0x557C55),
            food: Rgb::from_hex(0xFA7070),
        }
    }
}

impl Palette {
    /// Colour of a snake segment with the given opacity
    pub fn segment(&self, alpha: u8) -> Color {
        self.snake.over(self.board, alpha).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Rgb::from_hex(0xFA7070);
        assert_eq!((c.r, c.g, c.b), (0xFA, 0x70, 0x70));
    }

    #[test]
    fn test_blend_extremes() {
        let fg = Rgb::from_hex(0x557C55);
        let bg = Rgb::from_hex(0xA6CF98);
        assert_eq!(fg.over(bg, 255), fg);
        assert_eq!(fg.over(bg, 0), bg);
    }

    #[test]
    fn test_blend_halfway() {
        let white = Rgb::from_hex(0xFFFFFF);
        let black = Rgb::from_hex(0x000000);
        let grey = white.over(black, 128);
        assert_eq!((grey.r, grey.g, grey.b), (128, 128, 128));
    }

    #[test]
    fn test_string_roundtrip_and_errors() {
        assert_eq!(String::from(Rgb::from_hex(0xA6CF98)), "#A6CF98");
        assert_eq!(Rgb::try_from("a6cf98".to_string()), Ok(Rgb::from_hex(0xA6CF98)));
        assert!(Rgb::try_from("#12345".to_string()).is_err());
        assert!(Rgb::try_from("#GG0000".to_string()).is_err());
        assert!(Rgb::try_from("+12345".to_string()).is_err());
        assert!(Rgb::try_from("#-12345".to_string()).is_err());
    }

    #[test]
    fn test_palette_json() {
        let palette: Palette = serde_json::from_str(r##"{"food": "#FF0000"}"##).unwrap();
        assert_eq!(palette.food, Rgb::from_hex(0xFF0000));
        assert_eq!(palette.board, Palette::default().board);
    }
}
