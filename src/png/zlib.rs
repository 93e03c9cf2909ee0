//! Turning pixels into the Zlib stream that goes in an `IDAT` chunk.
//!
//! The work is in three steps:
//! 1) Each row gets a filter-type byte on the front. We always use filter type
//!    0 ("None"), so the row's pixel bytes follow unchanged.
//! 2) All of that filtered data is DEFLATE compressed by some [`Deflate`]
//!    implementation.
//! 3) The compressed bytes get a two byte Zlib header on the front and the
//!    Adler-32 of the *uncompressed* filtered data on the back.

use alloc::vec::Vec;

use crate::RgbBitmap;

/// Filter type 0, "None".
pub const FILTER_NONE: u8 = 0;

/// Zlib `CMF` byte: compression method 8 (DEFLATE), `CINFO` of 0.
pub const ZLIB_CMF: u8 = 0x08;

/// Zlib `FLG` byte: no preset dictionary, lowest `FLEVEL`, and `FCHECK` set so
/// that the header as a big-endian `u16` is a multiple of 31.
pub const ZLIB_FLG: u8 = ((31 - ((ZLIB_CMF as u16 * 256) % 31)) % 31) as u8;

const ADLER_MOD: u32 = 65521;

/// Largest number of bytes that can be summed before the `u32` accumulators
/// must be reduced.
const ADLER_NMAX: usize = 5552;

/// Computes the Adler-32 of the bytes given.
#[inline]
#[must_use]
pub fn adler32(bytes: &[u8]) -> u32 {
  let mut s1: u32 = 1;
  let mut s2: u32 = 0;
  for block in bytes.chunks(ADLER_NMAX) {
    for &b in block {
      s1 += u32::from(b);
      s2 += s1;
    }
    s1 %= ADLER_MOD;
    s2 %= ADLER_MOD;
  }
  (s2 << 16) | s1
}

/// Something that can produce a raw DEFLATE stream (RFC 1951, no Zlib or gzip
/// wrapper).
///
/// The encoder doesn't care how the data is compressed, only that inflating
/// the output gives back the input.
pub trait Deflate {
  /// Compresses all of `data` as one complete DEFLATE stream.
  fn deflate(&self, data: &[u8]) -> Vec<u8>;
}
impl<D: Deflate + ?Sized> Deflate for &D {
  #[inline]
  fn deflate(&self, data: &[u8]) -> Vec<u8> {
    D::deflate(self, data)
  }
}

/// DEFLATE via `miniz_oxide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinizDeflate {
  level: u8,
}
impl MinizDeflate {
  /// The highest level `miniz_oxide` knows about.
  pub const MAX_LEVEL: u8 = 10;

  /// Compression level 0 (stored blocks) through 10 (slowest). Higher values
  /// are clamped to 10.
  #[inline]
  #[must_use]
  pub const fn with_level(level: u8) -> Self {
    Self { level: if level > Self::MAX_LEVEL { Self::MAX_LEVEL } else { level } }
  }

  /// The compression level in use.
  #[inline]
  #[must_use]
  pub const fn level(&self) -> u8 {
    self.level
  }
}
impl Default for MinizDeflate {
  #[inline]
  fn default() -> Self {
    Self::with_level(6)
  }
}
impl Deflate for MinizDeflate {
  #[inline]
  fn deflate(&self, data: &[u8]) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec(data, self.level)
  }
}

/// Builds the filtered image data: for each row, top to bottom, a
/// [`FILTER_NONE`] byte then the row's `[r, g, b]` bytes.
#[must_use]
pub fn filtered_scanlines(bitmap: &RgbBitmap) -> Vec<u8> {
  let line_len = 1 + bitmap.width() as usize * 3;
  let mut out = Vec::with_capacity(line_len * bitmap.height() as usize);
  for row in bitmap.rows() {
    out.push(FILTER_NONE);
    out.extend_from_slice(bytemuck::cast_slice(row));
  }
  debug_assert_eq!(out.len(), line_len * bitmap.height() as usize);
  out
}

/// Puts a DEFLATE stream into a Zlib envelope.
///
/// `uncompressed` must be the data that `deflated` decompresses to, since its
/// Adler-32 becomes the trailer.
#[must_use]
pub fn zlib_wrap(deflated: &[u8], uncompressed: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(2 + deflated.len() + 4);
  out.push(ZLIB_CMF);
  out.push(ZLIB_FLG);
  out.extend_from_slice(deflated);
  out.extend_from_slice(&adler32(uncompressed).to_be_bytes());
  out
}

/// Filters, compresses, and wraps the bitmap, giving the full `IDAT` payload.
#[must_use]
pub fn idat_payload<D: Deflate>(bitmap: &RgbBitmap, deflater: &D) -> Vec<u8> {
  let filtered = filtered_scanlines(bitmap);
  let deflated = deflater.deflate(&filtered);
  log::trace!("deflated {} filtered bytes to {}", filtered.len(), deflated.len());
  zlib_wrap(&deflated, &filtered)
}
