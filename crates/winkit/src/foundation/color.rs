//! Drawing colors

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color packed as `0x00RRGGBB`.
///
/// Display drivers convert to their native pixel format; the window layer
/// never looks inside a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Black
    pub const BLACK: Self = Self(0x00_0000);
    /// White
    pub const WHITE: Self = Self(0xFF_FFFF);
    /// Red
    pub const RED: Self = Self(0xFF_0000);
    /// Green
    pub const GREEN: Self = Self(0x00_FF00);
    /// Blue
    pub const BLUE: Self = Self(0x00_00FF);
    /// Yellow
    pub const YELLOW: Self = Self(0xFF_FF00);
    /// Mid gray
    pub const GRAY: Self = Self(0x80_8080);

    /// Build a color from its components
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Red component
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}
