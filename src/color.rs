//! RGB888 ⇄ RGB565 conversion.
//!
//! The packed format is `RRRRR GGGGGG BBBBB`, red in the high bits. Both
//! directions use truncating integer division; the exact hex values in
//! exported literals depend on it, so do not switch to rounding.
//!
//! [`to_packed`] followed by [`to_color888`] is lossy and never brightens a
//! channel. Because both directions truncate, a color that already came out
//! of [`to_color888`] can drift down one more level on a second round trip;
//! only the extreme levels (0 and full scale) are fixed points.

use core::fmt;

use rgb::Rgb;

use crate::{Error, Result};

/// 8 bits per channel RGB color.
pub type Color888 = Rgb<u8>;

/// Packed 5/6/5 color. Produced and consumed only through this module.
pub type Color565 = u16;

/// White, the color of every freshly created or newly exposed pixel.
pub const WHITE: Color888 = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Black, `0x0000` expanded.
pub const BLACK: Color888 = Rgb { r: 0, g: 0, b: 0 };

/// Quantize an 8-bit-per-channel color to RGB565.
pub const fn to_packed(c: Color888) -> Color565 {
    let r5 = (c.r as u16 * 31) / 255;
    let g6 = (c.g as u16 * 63) / 255;
    let b5 = (c.b as u16 * 31) / 255;
    (r5 << 11) | (g6 << 5) | b5
}

/// Expand an RGB565 value back to 8 bits per channel.
pub const fn to_color888(v: Color565) -> Color888 {
    let r5 = (v >> 11) & 0x1F;
    let g6 = (v >> 5) & 0x3F;
    let b5 = v & 0x1F;
    // Each quotient is at most 255.
    Rgb {
        r: (r5 * 255 / 31) as u8,
        g: (g6 * 255 / 63) as u8,
        b: (b5 * 255 / 31) as u8,
    }
}

/// The color a pixel will have after export and re-import.
pub const fn quantize(c: Color888) -> Color888 {
    to_color888(to_packed(c))
}

/// Conversion into a stored pixel color, clamping each channel into `[0, 255]`.
///
/// Lets [`RasterBuffer::set`](crate::RasterBuffer::set) take colors computed
/// in wider integer types without the caller clamping first.
pub trait IntoColor888 {
    fn into_color888(self) -> Color888;
}

impl IntoColor888 for Rgb<u8> {
    #[inline]
    fn into_color888(self) -> Color888 {
        self
    }
}

impl IntoColor888 for Rgb<u16> {
    fn into_color888(self) -> Color888 {
        let ch = |v: u16| v.min(255) as u8;
        Rgb {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }
}

impl IntoColor888 for Rgb<i32> {
    fn into_color888(self) -> Color888 {
        let ch = |v: i32| v.clamp(0, 255) as u8;
        Rgb {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }
}

impl IntoColor888 for Rgb<i64> {
    fn into_color888(self) -> Color888 {
        let ch = |v: i64| v.clamp(0, 255) as u8;
        Rgb {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }
}

/// Parse a `#RRGGBB` color string. The `#` is optional and hex digits are
/// case-insensitive.
pub fn parse_hex_color(input: &str) -> Result<Color888> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::MalformedColor {
            input: input.into(),
        });
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Rgb { r, g, b }),
        _ => Err(Error::MalformedColor {
            input: input.into(),
        }),
    }
}

/// Format as lowercase `#rrggbb`.
pub fn hex_string(c: Color888) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// A color together with its packed form, as shown by a color picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorInfo {
    pub color: Color888,
    pub packed: Color565,
}

impl ColorInfo {
    pub const fn new(color: Color888) -> Self {
        Self {
            color,
            packed: to_packed(color),
        }
    }
}

impl From<Color888> for ColorInfo {
    fn from(color: Color888) -> Self {
        Self::new(color)
    }
}

impl fmt::Display for ColorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.color;
        write!(
            f,
            "#{r:02x}{g:02x}{b:02x} RGB({r},{g},{b}) VGA: 0x{:04X}",
            self.packed
        )
    }
}
