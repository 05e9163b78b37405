//! Display size limits for raster buffers.
//!
//! [`DisplayLimits`] caps the raster size at what the target display can
//! show. Buffer constructors validate against it with
//! [`check_dimensions()`](DisplayLimits::check_dimensions); UI layers that
//! accept free-form width/height input clamp with
//! [`clamp_dimensions()`](DisplayLimits::clamp_dimensions) first.

use crate::{Error, Result};

/// Maximum raster width of the VGA target display.
pub const MAX_WIDTH: usize = 320;
/// Maximum raster height of the VGA target display.
pub const MAX_HEIGHT: usize = 240;

/// Allowed raster dimensions.
///
/// Both axes are bounded below by 1. The default is the 320×240 VGA
/// display.
///
/// # Example
///
/// ```
/// use vgapixel::DisplayLimits;
///
/// let limits = DisplayLimits::default().with_max_width(128).with_max_height(64);
/// assert_eq!(limits.clamp_dimensions(500, -3), (128, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayLimits {
    /// Maximum raster width in pixels.
    pub max_width: usize,
    /// Maximum raster height in pixels.
    pub max_height: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self::VGA
    }
}

impl DisplayLimits {
    /// 320×240, the display the array literal is generated for.
    pub const VGA: Self = Self {
        max_width: MAX_WIDTH,
        max_height: MAX_HEIGHT,
    };

    /// Set maximum width. Values below 1 are raised to 1.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width.max(1);
        self
    }

    /// Set maximum height. Values below 1 are raised to 1.
    pub fn with_max_height(mut self, height: usize) -> Self {
        self.max_height = height.max(1);
        self
    }

    /// Maximum number of pixels a raster may hold.
    pub fn max_pixels(&self) -> usize {
        self.max_width * self.max_height
    }

    /// Check that `width`×`height` lies inside `[1, max_width]×[1, max_height]`.
    pub fn check_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if (1..=self.max_width).contains(&width) && (1..=self.max_height).contains(&height) {
            return Ok(());
        }
        Err(Error::InvalidDimensions {
            width,
            height,
            max_width: self.max_width,
            max_height: self.max_height,
        })
    }

    /// Clamp a requested size into the allowed range.
    ///
    /// Accepts signed input since width/height fields typed by a user can
    /// hold anything; negative and zero requests become 1.
    pub fn clamp_dimensions(&self, width: i64, height: i64) -> (usize, usize) {
        (
            clamp_axis(width, self.max_width),
            clamp_axis(height, self.max_height),
        )
    }
}

fn clamp_axis(value: i64, max: usize) -> usize {
    let max = i64::try_from(max).unwrap_or(i64::MAX);
    // max >= 1 and the clamp keeps value in [1, max], so the cast is lossless.
    value.clamp(1, max) as usize
}
