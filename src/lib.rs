//! Raster editing core for RGB565 VGA displays.
//!
//! This crate holds the non-UI half of a small pixel editor whose output is
//! a C array literal for embedded firmware:
//!
//! - [`RasterBuffer`] — owned, bounded grid of 8-bit RGB pixels
//! - [`to_packed`] / [`to_color888`] — lossy RGB888 ⇄ RGB565 conversion
//! - [`flood_fill`] — 4-connected region recoloring
//! - [`serialize`] — raster to C array literal
//! - [`parse`] — C array literal back to a raster, with a caller-supplied
//!   [`MismatchHandler`] deciding what happens when the text disagrees with
//!   the declared size
//! - [`DisplayLimits`] — allowed raster sizes (320×240 by default)
//!
//! Everything is synchronous and free of I/O. Window layout, dialogs, and
//! file persistence belong to the caller.
//!
//! ```
//! use vgapixel::{AcceptMismatch, RasterBuffer, Rgb, flood_fill, parse, serialize};
//!
//! let mut raster = RasterBuffer::new(4, 3)?;
//! raster.set(0, 0, Rgb::new(255u8, 0, 0))?;
//! flood_fill(&mut raster, 3, 2, Rgb::new(0u8, 0, 255))?;
//!
//! let text = serialize(&raster, "logo");
//! let outcome = parse(&text, 4, 3, AcceptMismatch)?;
//! assert_eq!(outcome.buffer(), &raster);
//! # Ok::<(), vgapixel::Error>(())
//! ```

#![forbid(unsafe_code)]

mod color;
mod error;
mod export;
mod fill;
mod import;
mod limits;
mod palette;
mod raster;

pub use color::{
    BLACK, Color565, Color888, ColorInfo, IntoColor888, WHITE, hex_string, parse_hex_color,
    quantize, to_color888, to_packed,
};
pub use error::{Axis, Error, Result};
pub use export::{ArrayFileKind, DEFAULT_VAR_NAME, packed_values, serialize};
pub use fill::flood_fill;
pub use import::{
    AcceptMismatch, Mismatch, MismatchHandler, ParseOutcome, RejectMismatch, parse,
    parse_with_limits,
};
pub use limits::{DisplayLimits, MAX_HEIGHT, MAX_WIDTH};
pub use palette::{DEFAULT_PALETTE, VGA_COLORS, WEB_COLORS};
pub use raster::RasterBuffer;

// Re-exports for callers handing pixels to other image code.
pub use imgref::{ImgRef, ImgVec};
pub use rgb;
pub use rgb::Rgb;
