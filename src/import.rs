//! Parsing C array literals back into a raster.
//!
//! The parser only understands braces, commas, and integer tokens, which is
//! enough for text produced by [`serialize()`](crate::serialize) and for most
//! hand-edited arrays. Anything before the first `{` (comments, `#define`s,
//! the declaration) and after the last `}` is ignored.
//!
//! When the literal's row or column count disagrees with the declared size,
//! the parser asks a [`MismatchHandler`] whether to continue with the size
//! found in the text. Only the row count and the first row's element count
//! are ever put to the handler. Once the first row has fixed the width,
//! later rows are truncated or padded with black to fit, with a warning in
//! the log.

use crate::color::{Color565, to_color888};
use crate::error::Axis;
use crate::{DisplayLimits, Error, RasterBuffer, Result};

/// A disagreement between the literal and the declared size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mismatch {
    /// Dimension that disagreed.
    pub axis: Axis,
    /// Zero-based row whose element count disagreed, for [`Axis::Columns`].
    pub row: Option<usize>,
    /// Count found in the text.
    pub actual: usize,
    /// Count the caller declared.
    pub expected: usize,
}

impl core::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.axis, self.row) {
            (Axis::Columns, Some(row)) => write!(
                f,
                "row {} has {} elements but {} columns were specified",
                row + 1,
                self.actual,
                self.expected
            ),
            _ => write!(
                f,
                "array has {} {} but {} were specified",
                self.actual, self.axis, self.expected
            ),
        }
    }
}

/// Decides whether parsing continues after a [`Mismatch`].
///
/// Return `true` to continue with the size found in the text, `false` to
/// abort with [`Error::DimensionMismatch`]. Any `FnMut(&Mismatch) -> bool`
/// closure is a handler.
pub trait MismatchHandler {
    fn decide(&mut self, mismatch: &Mismatch) -> bool;
}

impl<F> MismatchHandler for F
where
    F: FnMut(&Mismatch) -> bool,
{
    fn decide(&mut self, mismatch: &Mismatch) -> bool {
        self(mismatch)
    }
}

/// Handler that always continues with the size found in the text.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptMismatch;

impl MismatchHandler for AcceptMismatch {
    fn decide(&mut self, _: &Mismatch) -> bool {
        true
    }
}

/// Handler that always aborts.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectMismatch;

impl MismatchHandler for RejectMismatch {
    fn decide(&mut self, _: &Mismatch) -> bool {
        false
    }
}

/// A successfully parsed literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutcome {
    buffer: RasterBuffer,
    expected_width: usize,
    expected_height: usize,
}

impl ParseOutcome {
    /// The parsed raster.
    pub fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }

    /// Take the parsed raster.
    pub fn into_buffer(self) -> RasterBuffer {
        self.buffer
    }

    /// Effective width, possibly taken from the first row.
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// Effective height, possibly taken from the row count.
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// Whether a mismatch was accepted and the size differs from the
    /// declared one.
    pub fn was_adjusted(&self) -> bool {
        self.width() != self.expected_width || self.height() != self.expected_height
    }
}

/// Parse `text` declared as `width`×`height`, within the VGA limits.
///
/// # Example
///
/// ```
/// use vgapixel::{Mismatch, parse};
///
/// let text = "{ {0xF800, 0x07E0}, {0x001F, 0xFFFF} }";
/// let outcome = parse(text, 2, 2, |_: &Mismatch| false).unwrap();
/// assert_eq!(outcome.buffer().get(0, 0).unwrap().r, 255);
/// ```
pub fn parse(
    text: &str,
    width: usize,
    height: usize,
    on_mismatch: impl MismatchHandler,
) -> Result<ParseOutcome> {
    parse_with_limits(text, width, height, DisplayLimits::default(), on_mismatch)
}

/// [`parse()`] with custom limits for both the declared and the effective
/// size.
pub fn parse_with_limits(
    text: &str,
    width: usize,
    height: usize,
    limits: DisplayLimits,
    mut on_mismatch: impl MismatchHandler,
) -> Result<ParseOutcome> {
    limits.check_dimensions(width, height)?;

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let rows = row_segments(&compact)?;

    let mut effective_height = height;
    if rows.len() != height {
        let mismatch = Mismatch {
            axis: Axis::Rows,
            row: None,
            actual: rows.len(),
            expected: height,
        };
        confirm(&mut on_mismatch, &mismatch)?;
        effective_height = rows.len();
    }

    let mut effective_width = width;
    let mut pixels = Vec::new();
    for (y, row) in rows.iter().take(effective_height).enumerate() {
        let elements: Vec<&str> = row.split(',').collect();
        if elements.len() != effective_width {
            if y == 0 {
                let mismatch = Mismatch {
                    axis: Axis::Columns,
                    row: Some(0),
                    actual: elements.len(),
                    expected: width,
                };
                confirm(&mut on_mismatch, &mismatch)?;
                effective_width = elements.len();
            } else {
                log::warn!(
                    "row {} has {} elements, fitting to width {}",
                    y + 1,
                    elements.len(),
                    effective_width
                );
            }
        }
        if y == 0 {
            limits.check_dimensions(effective_width, effective_height)?;
            pixels.reserve_exact(effective_width * effective_height);
        }

        for (x, token) in elements.iter().take(effective_width).enumerate() {
            let value = parse_element(token).ok_or_else(|| Error::NumericParseError {
                token: (*token).into(),
                row: y,
                column: x,
            })?;
            pixels.push(to_color888(value));
        }
        let missing = effective_width.saturating_sub(elements.len());
        pixels.extend(core::iter::repeat_n(to_color888(0), missing));
    }

    let buffer = RasterBuffer::from_parts(pixels, effective_width, effective_height, limits)?;
    log::debug!(
        "parsed {}x{} array literal (declared {}x{})",
        effective_width,
        effective_height,
        width,
        height
    );
    Ok(ParseOutcome {
        buffer,
        expected_width: width,
        expected_height: height,
    })
}

fn confirm(handler: &mut impl MismatchHandler, mismatch: &Mismatch) -> Result<()> {
    if handler.decide(mismatch) {
        log::debug!("continuing despite mismatch: {mismatch}");
        return Ok(());
    }
    log::debug!("aborting on mismatch: {mismatch}");
    Err(Error::DimensionMismatch {
        axis: mismatch.axis,
        actual: mismatch.actual,
        expected: mismatch.expected,
    })
}

/// Split whitespace-free text into the contents of the top-level brace
/// pairs inside the outermost `{ ... }`.
fn row_segments(compact: &str) -> Result<Vec<&str>> {
    let Some(start) = compact.find('{') else {
        return Err(Error::MalformedLiteral {
            reason: "missing opening brace",
        });
    };
    let Some(end) = compact.rfind('}') else {
        return Err(Error::MalformedLiteral {
            reason: "missing closing brace",
        });
    };
    if end <= start {
        return Err(Error::MalformedLiteral {
            reason: "closing brace before opening brace",
        });
    }

    let content = &compact[start + 1..end];
    let mut rows = Vec::new();
    // Signed so a stray `}` cannot underflow; it just keeps the segment closed.
    let mut depth: isize = 0;
    let mut row_start = 0;
    for (i, c) in content.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    row_start = i + 1;
                }
                depth += 1;
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    rows.push(&content[row_start..i]);
                }
            }
            _ => {}
        }
    }
    Ok(rows)
}

/// Parse a `0x`/`0X` hexadecimal or a decimal token. Only the low 16 bits
/// are kept; negative decimals wrap like two's complement.
fn parse_element(token: &str) -> Option<Color565> {
    let hex = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"));
    match hex {
        Some(digits) => {
            if !digits.bytes().next().is_some_and(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            u64::from_str_radix(digits, 16).ok().map(|v| v as Color565)
        }
        None => token.parse::<i64>().ok().map(|v| v as Color565),
    }
}
