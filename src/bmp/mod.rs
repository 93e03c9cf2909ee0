#![forbid(unsafe_code)]

//! Module for writing Windows Bitmap files (BMP).
//!
//! Note: All multi-byte values in BMP are always little-endian encoded.
//!
//! The files written here are the simplest widely supported kind:
//! * A 14 byte "file header" with the `BM` tag, the total file size, and the
//!   offset of the pixel data.
//! * A 40 byte "info header" (`BITMAPINFOHEADER`) giving the dimensions, 24
//!   bits per pixel, no compression, and a print resolution of 72 DPI.
//! * No bitmasks, no color table, no gap.
//! * The pixel array. Rows are stored **bottom to top**, each row's pixel
//!   bytes are copied as they sit in the [`RgbBitmap`] (`[r, g, b]` per pixel,
//!   the same order the PNG encoder uses), and each row is zero-padded to a
//!   multiple of 4 bytes.

use alloc::vec::Vec;

mod file_header;
pub use file_header::*;

mod info_header;
pub use info_header::*;

use crate::RgbBitmap;

/// Byte size of the file header.
pub const FILE_HEADER_LEN: usize = 14;

/// Byte size of the `BITMAPINFOHEADER`.
pub const INFO_HEADER_LEN: usize = 40;

/// 72 DPI, in pixels per meter.
pub const PIXELS_PER_METER: i32 = 2835;

const BITS_PER_PIXEL: u16 = 24;

/// The stored byte length of one row of a 24-bit image, including padding.
#[inline]
#[must_use]
pub const fn bmp_row_size(width: u32) -> usize {
  (BITS_PER_PIXEL as usize * width as usize + 31) / 32 * 4
}

/// Encodes RGB bitmaps as 24-bit BMP files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BmpEncoder;
impl BmpEncoder {
  /// Encodes the bitmap as a complete BMP file.
  #[must_use]
  pub fn encode(&self, bitmap: &RgbBitmap) -> Vec<u8> {
    let row_size = bmp_row_size(bitmap.width());
    let pixel_array_len = row_size * bitmap.height() as usize;
    let image_byte_size = u32::try_from(pixel_array_len).unwrap_or(u32::MAX);

    let file_header = BmpFileHeader::for_pixel_array_len(image_byte_size);
    let info_header = BmpInfoHeader {
      // dimensions are at most `i32::MAX`
      width: bitmap.width() as i32,
      height: bitmap.height() as i32,
      bits_per_pixel: BITS_PER_PIXEL,
      image_byte_size,
      h_ppm: PIXELS_PER_METER,
      v_ppm: PIXELS_PER_METER,
    };

    let mut out = Vec::with_capacity(FILE_HEADER_LEN + INFO_HEADER_LEN + pixel_array_len);
    out.extend_from_slice(&<[u8; 14]>::from(file_header));
    out.extend_from_slice(&<[u8; 40]>::from(info_header));
    let padding = row_size - bitmap.width() as usize * 3;
    for row in bitmap.rows().rev() {
      out.extend_from_slice(bytemuck::cast_slice(row));
      out.extend(core::iter::repeat(0).take(padding));
    }
    debug_assert_eq!(out.len(), FILE_HEADER_LEN + INFO_HEADER_LEN + pixel_array_len);
    log::debug!(
      "encoded {}x{} BMP: {} bytes ({} padding per row)",
      bitmap.width(),
      bitmap.height(),
      out.len(),
      padding
    );
    out
  }
}

/// Encodes the bitmap as a BMP.
#[inline]
#[must_use]
pub fn bmp_encode(bitmap: &RgbBitmap) -> Vec<u8> {
  BmpEncoder.encode(bitmap)
}

#[test]
fn test_bmp_row_size() {
  assert_eq!(bmp_row_size(1), 4);
  assert_eq!(bmp_row_size(2), 8);
  assert_eq!(bmp_row_size(4), 12);
  assert_eq!(bmp_row_size(5), 16);
  assert_eq!(bmp_row_size(128), 384);
}
