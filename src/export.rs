//! Rendering a raster as a C array literal.
//!
//! The output is compiled as-is by the display firmware, so the layout is
//! fixed byte for byte:
//!
//! ```text
//! // VGA Image Data - 2x2 - 16-bit color (5R-6G-5B)
//! // Generated by Pixel Editor
//!
//! #define IMAGE_WIDTH 2
//! #define IMAGE_HEIGHT 2
//!
//! const unsigned short pixel_data[IMAGE_HEIGHT][IMAGE_WIDTH] = {
//!     {0xF800, 0x07E0},
//!     {0x001F, 0xFFFF}
//! };
//! ```
//!
//! followed by one blank line.

use core::fmt::Write;

use crate::RasterBuffer;
use crate::color::{Color565, to_packed};

/// Variable name used when the caller supplies an empty or blank one.
pub const DEFAULT_VAR_NAME: &str = "pixel_data";

/// Row-major RGB565 values of `buffer`.
pub fn packed_values(buffer: &RasterBuffer) -> Vec<Color565> {
    buffer.pixels().iter().copied().map(to_packed).collect()
}

/// Render `buffer` as a C array literal named `var_name`.
///
/// `var_name` is trimmed; blank names fall back to [`DEFAULT_VAR_NAME`].
pub fn serialize(buffer: &RasterBuffer, var_name: &str) -> String {
    let var_name = match var_name.trim() {
        "" => DEFAULT_VAR_NAME,
        name => name,
    };
    let (width, height) = (buffer.width(), buffer.height());

    // "0xHHHH, " is 8 bytes per element, plus row framing.
    let mut out = String::with_capacity(256 + height * (width * 8 + 8));
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "// VGA Image Data - {width}x{height} - 16-bit color (5R-6G-5B)\n\
         // Generated by Pixel Editor\n\
         \n\
         #define IMAGE_WIDTH {width}\n\
         #define IMAGE_HEIGHT {height}\n\
         \n\
         const unsigned short {var_name}[IMAGE_HEIGHT][IMAGE_WIDTH] = {{\n"
    );

    for (y, row) in buffer.rows().enumerate() {
        out.push_str("    {");
        for (x, &pixel) in row.iter().enumerate() {
            if x > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{:04X}", to_packed(pixel));
        }
        out.push('}');
        out.push_str(if y + 1 < height { ",\n" } else { "\n" });
    }
    out.push_str("};\n\n");

    log::debug!("serialized {width}x{height} raster as `{var_name}`");
    out
}

/// File kinds the literal is saved as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArrayFileKind {
    /// C source file (`.c`), the default.
    #[default]
    Source,
    /// C header (`.h`).
    Header,
}

impl ArrayFileKind {
    /// Both kinds, default first, for save-dialog filters.
    pub const ALL: [Self; 2] = [Self::Source, Self::Header];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Source => "c",
            Self::Header => "h",
        }
    }

    /// Human-readable filter label.
    pub fn description(self) -> &'static str {
        match self {
            Self::Source => "C files",
            Self::Header => "Header files",
        }
    }

    /// Detect from a file extension, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        if ext.eq_ignore_ascii_case("c") {
            Some(Self::Source)
        } else if ext.eq_ignore_ascii_case("h") {
            Some(Self::Header)
        } else {
            None
        }
    }
}
