#![forbid(unsafe_code)]

//! Provides the validated pixel container that the encoders read from.

use alloc::vec::Vec;
use core::slice::ChunksExact;

use crate::{RgbBitmapError, RGB8};

/// The largest width or height that either output format can record.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Converts a `(row, col)` position within a given `width` 2D space into a
/// linear index.
#[inline]
#[must_use]
pub const fn row_col_width_to_index(row: u32, col: u32, width: u32) -> usize {
  row as usize * width as usize + col as usize
}

/// An immutable, row-major grid of [`RGB8`] pixels.
///
/// Row 0 is the *top* of the image, and pixels within a row run left to right.
/// Once built, the width and height are always at least 1 and the pixel count
/// is always exactly `width * height`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RgbBitmap {
  width: u32,
  height: u32,
  pixels: Vec<RGB8>,
}
impl RgbBitmap {
  /// Validates the dimensions and pixel count, then takes ownership of the
  /// pixels.
  ///
  /// ## Failure
  /// * [`InvalidDimension`](RgbBitmapError::InvalidDimension) if either
  ///   dimension is 0 or more than [`MAX_DIMENSION`]. Width is checked first.
  /// * [`SizeMismatch`](RgbBitmapError::SizeMismatch) if `pixels.len()` isn't
  ///   `width * height`.
  pub fn try_new(pixels: Vec<RGB8>, width: u32, height: u32) -> Result<Self, RgbBitmapError> {
    check_dimension("width", width)?;
    check_dimension("height", height)?;
    let expected = (width as usize).checked_mul(height as usize).unwrap_or(usize::MAX);
    if pixels.len() != expected {
      return Err(RgbBitmapError::SizeMismatch { expected, actual: pixels.len() });
    }
    Ok(Self { width, height, pixels })
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// All pixels, row-major, top row first.
  #[inline]
  #[must_use]
  pub fn pixels(&self) -> &[RGB8] {
    &self.pixels
  }

  /// The pixels as a flat `[r, g, b, r, g, b, ...]` byte slice.
  #[inline]
  #[must_use]
  pub fn rgb_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.pixels)
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, row: u32, col: u32) -> Option<RGB8> {
    if row < self.height && col < self.width {
      self.pixels.get(row_col_width_to_index(row, col, self.width)).copied()
    } else {
      None
    }
  }

  /// Iterates the rows, top to bottom.
  ///
  /// This is double-ended, so `.rev()` gives the bottom-up order.
  #[inline]
  pub fn rows(&self) -> ChunksExact<'_, RGB8> {
    self.pixels.chunks_exact(self.width as usize)
  }

  /// Gives back the pixel vec.
  #[inline]
  #[must_use]
  pub fn into_pixels(self) -> Vec<RGB8> {
    self.pixels
  }
}
impl TryFrom<(Vec<RGB8>, u32, u32)> for RgbBitmap {
  type Error = RgbBitmapError;
  #[inline]
  fn try_from((pixels, width, height): (Vec<RGB8>, u32, u32)) -> Result<Self, Self::Error> {
    Self::try_new(pixels, width, height)
  }
}

#[inline]
fn check_dimension(name: &'static str, value: u32) -> Result<(), RgbBitmapError> {
  if (1..=MAX_DIMENSION).contains(&value) {
    Ok(())
  } else {
    Err(RgbBitmapError::InvalidDimension { name, value })
  }
}
