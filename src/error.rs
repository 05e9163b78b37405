//! Error type shared by every raster and literal operation.

/// Which dimension of a parsed literal disagreed with the declared size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Number of row segments (height).
    Rows,
    /// Number of elements in a row (width).
    Columns,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Rows => f.write_str("rows"),
            Self::Columns => f.write_str("columns"),
        }
    }
}

/// Errors returned by raster, codec, and literal operations.
///
/// Each variant carries the values that caused it so the caller can build
/// its own message. The core never presents errors itself.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Requested raster size is zero or larger than the display allows.
    #[error("dimensions {width}x{height} outside 1x1..={max_width}x{max_height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Largest allowed width.
        max_width: usize,
        /// Largest allowed height.
        max_height: usize,
    },

    /// Coordinate outside the current grid.
    #[error("pixel ({x}, {y}) outside {width}x{height} raster")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Literal text is missing its outer braces or they are out of order.
    #[error("malformed array literal: {reason}")]
    MalformedLiteral { reason: &'static str },

    /// Row or column count disagreed with the declared size and the
    /// caller's mismatch handler declined to continue.
    #[error("array has {actual} {axis} but {expected} were expected")]
    DimensionMismatch {
        axis: Axis,
        actual: usize,
        expected: usize,
    },

    /// An element token is neither a decimal nor a `0x` hexadecimal integer.
    #[error("cannot parse element {token:?} at row {row}, column {column}")]
    NumericParseError {
        token: String,
        row: usize,
        column: usize,
    },

    /// A `#RRGGBB` color string could not be parsed.
    #[error("malformed color {input:?}, expected #RRGGBB")]
    MalformedColor { input: String },
}

/// Crate result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;
