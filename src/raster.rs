//! The editable pixel grid.
//!
//! [`RasterBuffer`] owns a row-major `imgref::ImgVec<Rgb<u8>>` whose rows are
//! always exactly `width` pixels long. Every dimension change goes through
//! [`resize()`](RasterBuffer::resize), which builds a complete new grid before
//! returning it, so a partially resized buffer is never observable.

use core::fmt;

use imgref::{ImgRef, ImgVec};

use crate::color::{Color888, ColorInfo, IntoColor888, WHITE};
use crate::{DisplayLimits, Error, Result};

/// Owned, bounded grid of 8-bit RGB pixels.
#[derive(Clone)]
pub struct RasterBuffer {
    pixels: ImgVec<Color888>,
    limits: DisplayLimits,
}

impl RasterBuffer {
    /// Create an all-white `width`×`height` raster within the VGA limits.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_limits(width, height, DisplayLimits::default())
    }

    /// Create an all-white raster validated against custom limits.
    pub fn with_limits(width: usize, height: usize, limits: DisplayLimits) -> Result<Self> {
        limits.check_dimensions(width, height)?;
        Ok(Self {
            pixels: ImgVec::new(vec![WHITE; width * height], width, height),
            limits,
        })
    }

    /// Wrap row-major pixels produced by the literal parser.
    pub(crate) fn from_parts(
        pixels: Vec<Color888>,
        width: usize,
        height: usize,
        limits: DisplayLimits,
    ) -> Result<Self> {
        limits.check_dimensions(width, height)?;
        debug_assert_eq!(pixels.len(), width * height);
        Ok(Self {
            pixels: ImgVec::new(pixels, width, height),
            limits,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Limits this raster was validated against. Carried over by
    /// [`resize()`](Self::resize).
    #[inline]
    pub fn limits(&self) -> DisplayLimits {
        self.limits
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }

    /// Always false; a raster holds at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(y * self.width() + x)
    }

    /// Color at (`x`, `y`).
    pub fn get(&self, x: usize, y: usize) -> Result<Color888> {
        let i = self.index(x, y)?;
        Ok(self.pixels.buf()[i])
    }

    /// Store a color at (`x`, `y`), clamping wide channel values into `[0, 255]`.
    pub fn set(&mut self, x: usize, y: usize, color: impl IntoColor888) -> Result<()> {
        let i = self.index(x, y)?;
        self.pixels.buf_mut()[i] = color.into_color888();
        Ok(())
    }

    /// Eyedropper: the color at (`x`, `y`) with its packed form.
    pub fn pick(&self, x: usize, y: usize) -> Result<ColorInfo> {
        self.get(x, y).map(ColorInfo::new)
    }

    /// Paint every pixel with `color`.
    pub fn fill_all(&mut self, color: impl IntoColor888) {
        let color = color.into_color888();
        self.pixels.buf_mut().fill(color);
    }

    /// Reset every pixel to white.
    pub fn clear(&mut self) {
        self.fill_all(WHITE);
    }

    /// Build a `new_width`×`new_height` raster holding this one's top-left
    /// overlap. Newly exposed cells are white.
    ///
    /// Shrinking discards the cropped pixels for good; resizing back does not
    /// bring them back.
    pub fn resize(&self, new_width: usize, new_height: usize) -> Result<Self> {
        let mut resized = Self::with_limits(new_width, new_height, self.limits)?;
        let copy_width = self.width().min(new_width);
        let copy_height = self.height().min(new_height);
        for (dst, src) in resized
            .pixels_mut()
            .chunks_exact_mut(new_width)
            .zip(self.rows())
            .take(copy_height)
        {
            dst[..copy_width].copy_from_slice(&src[..copy_width]);
        }
        log::trace!(
            "resized raster {}x{} -> {}x{}, kept {}x{}",
            self.width(),
            self.height(),
            new_width,
            new_height,
            copy_width,
            copy_height
        );
        Ok(resized)
    }

    /// Row-major pixels, `width * height` long.
    #[inline]
    pub fn pixels(&self) -> &[Color888] {
        self.pixels.buf()
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color888] {
        self.pixels.buf_mut()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Color888]> + '_ {
        self.pixels.buf().chunks_exact(self.width())
    }

    /// Borrow as an `imgref` view for other image code.
    pub fn as_img(&self) -> ImgRef<'_, Color888> {
        self.pixels.as_ref()
    }

    /// Take the pixels as an `imgref::ImgVec`.
    pub fn into_img(self) -> ImgVec<Color888> {
        self.pixels
    }
}

impl PartialEq for RasterBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.pixels() == other.pixels()
    }
}

impl Eq for RasterBuffer {}

impl fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RasterBuffer({}x{})", self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::Rgb;

    const RED: Color888 = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Color888 = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn new_is_white() {
        let buf = RasterBuffer::new(4, 3).unwrap();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.len(), 12);
        assert!(!buf.is_empty());
        assert!(buf.pixels().iter().all(|&p| p == WHITE));
        assert_eq!(buf.rows().len(), 3);
        assert!(buf.rows().all(|row| row.len() == 4));
    }

    #[test]
    fn new_validates_dimensions() {
        assert!(matches!(
            RasterBuffer::new(0, 10),
            Err(Error::InvalidDimensions { width: 0, .. })
        ));
        assert!(matches!(
            RasterBuffer::new(321, 10),
            Err(Error::InvalidDimensions { width: 321, .. })
        ));
        assert!(matches!(
            RasterBuffer::new(10, 241),
            Err(Error::InvalidDimensions { height: 241, .. })
        ));
        assert!(RasterBuffer::new(320, 240).is_ok());
    }

    #[test]
    fn custom_limits() {
        let limits = DisplayLimits::default().with_max_width(8).with_max_height(8);
        assert!(RasterBuffer::with_limits(9, 8, limits).is_err());
        let buf = RasterBuffer::with_limits(8, 8, limits).unwrap();
        assert_eq!(buf.limits(), limits);
        assert!(buf.resize(9, 8).is_err());
    }

    #[test]
    fn get_set_round_trip() {
        let mut buf = RasterBuffer::new(3, 2).unwrap();
        buf.set(2, 1, RED).unwrap();
        assert_eq!(buf.get(2, 1).unwrap(), RED);
        assert_eq!(buf.get(1, 1).unwrap(), WHITE);
        // Row-major layout.
        assert_eq!(buf.pixels()[5], RED);
    }

    #[test]
    fn out_of_bounds_access() {
        let mut buf = RasterBuffer::new(3, 2).unwrap();
        let err = buf.get(3, 0).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            }
        );
        assert!(matches!(
            buf.set(0, 2, RED),
            Err(Error::OutOfBounds { y: 2, .. })
        ));
        assert!(buf.pick(usize::MAX, 0).is_err());
    }

    #[test]
    fn set_clamps_wide_channels() {
        let mut buf = RasterBuffer::new(1, 1).unwrap();
        buf.set(0, 0, Rgb::<i32>::new(-20, 512, 77)).unwrap();
        assert_eq!(buf.get(0, 0).unwrap(), Rgb { r: 0, g: 255, b: 77 });
    }

    #[test]
    fn pick_reports_packed_value() {
        let mut buf = RasterBuffer::new(2, 2).unwrap();
        buf.set(1, 0, BLUE).unwrap();
        let info = buf.pick(1, 0).unwrap();
        assert_eq!(info.color, BLUE);
        assert_eq!(info.packed, 0x001F);
    }

    #[test]
    fn clear_and_fill_all() {
        let mut buf = RasterBuffer::new(5, 5).unwrap();
        buf.fill_all(RED);
        assert!(buf.pixels().iter().all(|&p| p == RED));
        buf.clear();
        assert!(buf.pixels().iter().all(|&p| p == WHITE));
    }

    #[test]
    fn grow_keeps_overlap_and_exposes_white() {
        let mut buf = RasterBuffer::new(2, 2).unwrap();
        buf.fill_all(RED);
        let grown = buf.resize(3, 4).unwrap();
        assert_eq!((grown.width(), grown.height()), (3, 4));
        for y in 0..4 {
            for x in 0..3 {
                let expected = if x < 2 && y < 2 { RED } else { WHITE };
                assert_eq!(grown.get(x, y).unwrap(), expected, "({x}, {y})");
            }
        }
        // Source untouched.
        assert_eq!((buf.width(), buf.height()), (2, 2));
    }

    #[test]
    fn shrink_then_grow_loses_cropped_pixels() {
        let mut buf = RasterBuffer::new(4, 4).unwrap();
        buf.fill_all(BLUE);
        let restored = buf.resize(2, 1).unwrap().resize(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let expected = if x < 2 && y < 1 { BLUE } else { WHITE };
                assert_eq!(restored.get(x, y).unwrap(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn resize_validates() {
        let buf = RasterBuffer::new(4, 4).unwrap();
        assert!(matches!(
            buf.resize(0, 4),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(buf.resize(320, 240).is_ok());
    }

    #[test]
    fn imgref_views() {
        let mut buf = RasterBuffer::new(3, 2).unwrap();
        buf.set(1, 1, RED).unwrap();
        let view = buf.as_img();
        assert_eq!((view.width(), view.height()), (3, 2));
        assert_eq!(view.buf()[4], RED);

        let img = buf.clone().into_img();
        assert_eq!(img.buf().len(), 6);
    }

    #[test]
    fn equality_compares_pixels() {
        let a = RasterBuffer::new(2, 2).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set(0, 0, RED).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, RasterBuffer::new(4, 1).unwrap());
        assert_eq!(format!("{a:?}"), "RasterBuffer(2x2)");
    }
}
