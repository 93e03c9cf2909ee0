use core::fmt;

/// An error from building an [`RgbBitmap`](crate::RgbBitmap).
///
/// The encoders themselves can't fail, so this is the only error type in the
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RgbBitmapError {
  /// The width or height is outside of `1..=i32::MAX`.
  InvalidDimension {
    /// Either `"width"` or `"height"`.
    name: &'static str,
    /// The value that was given.
    value: u32,
  },

  /// The number of pixels isn't `width * height`.
  SizeMismatch {
    /// `width * height`, or `usize::MAX` if that overflowed.
    expected: usize,
    /// The length of the pixel vec that was given.
    actual: usize,
  },
}

impl fmt::Display for RgbBitmapError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidDimension { name, value } => {
        write!(f, "{name} must be in 1..={max}, got {value}", max = i32::MAX)
      }
      Self::SizeMismatch { expected, actual } => {
        write!(f, "expected {expected} pixels (width * height), got {actual}")
      }
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for RgbBitmapError {}
