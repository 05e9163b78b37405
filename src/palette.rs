//! Default swatch palette.

use rgb::Rgb;

use crate::color::Color888;

const fn rgb24(v: u32) -> Color888 {
    Rgb {
        r: (v >> 16) as u8,
        g: (v >> 8) as u8,
        b: v as u8,
    }
}

/// The 16 standard VGA text-mode colors, in palette index order.
pub const VGA_COLORS: [Color888; 16] = [
    rgb24(0x000000),
    rgb24(0x0000AA),
    rgb24(0x00AA00),
    rgb24(0x00AAAA),
    rgb24(0xAA0000),
    rgb24(0xAA00AA),
    rgb24(0xAA5500),
    rgb24(0xAAAAAA),
    rgb24(0x555555),
    rgb24(0x5555FF),
    rgb24(0x55FF55),
    rgb24(0x55FFFF),
    rgb24(0xFF5555),
    rgb24(0xFF55FF),
    rgb24(0xFFFF55),
    rgb24(0xFFFFFF),
];

/// Common web colors offered after the VGA set.
pub const WEB_COLORS: [Color888; 22] = [
    // primaries and secondaries
    rgb24(0xFF0000),
    rgb24(0x00FF00),
    rgb24(0x0000FF),
    rgb24(0xFFFF00),
    rgb24(0x00FFFF),
    rgb24(0xFF00FF),
    // darker
    rgb24(0x800000),
    rgb24(0x008000),
    rgb24(0x000080),
    rgb24(0x808000),
    rgb24(0x008080),
    rgb24(0x800080),
    rgb24(0xFFA500),
    rgb24(0xA52A2A),
    rgb24(0xFFC0CB),
    rgb24(0xDDA0DD),
    rgb24(0xFF1493),
    rgb24(0x00CED1),
    rgb24(0x1E90FF),
    rgb24(0xFF6347),
    rgb24(0xADFF2F),
    rgb24(0x32CD32),
];

/// Swatches shown by the editor: [`VGA_COLORS`] followed by [`WEB_COLORS`].
pub const DEFAULT_PALETTE: [Color888; 38] = {
    let mut all = [rgb24(0); 38];
    let mut i = 0;
    while i < VGA_COLORS.len() {
        all[i] = VGA_COLORS[i];
        i += 1;
    }
    let mut j = 0;
    while j < WEB_COLORS.len() {
        all[VGA_COLORS.len() + j] = WEB_COLORS[j];
        j += 1;
    }
    all
};
