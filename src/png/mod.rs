#![forbid(unsafe_code)]

//! Module for writing PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! A PNG file is an 8 byte signature followed by a series of "chunks". Each
//! chunk is framed the same way:
//! * The length of the chunk's data, as a big-endian `u32`.
//! * A 4 byte ASCII chunk type.
//! * The data itself.
//! * A CRC-32 of the type and data (but not the length), as a big-endian `u32`.
//!
//! This encoder writes only the three chunks it needs:
//! * **IHDR**: width, height, and a fixed pixel format of 8-bit RGB.
//! * **IDAT**: the Zlib compressed image data. See [`idat_payload`] for how
//!   that's made. If the compressed data somehow exceeds
//!   [`MAX_CHUNK_LEN`] it's split over more than one `IDAT`, which PNG allows.
//! * **IEND**: empty, marks the end of the file.
//!
//! Note: PNG is big-endian throughout, unlike BMP.

use alloc::vec::Vec;

mod crc32;
pub use crc32::*;

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod zlib;
pub use zlib::*;

use crate::RgbBitmap;

/// The first 8 bytes of every PNG file.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Encodes RGB bitmaps as PNG files.
///
/// The `D` type is the DEFLATE compressor used for the image data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PngEncoder<D = MinizDeflate> {
  deflater: D,
}
impl PngEncoder<MinizDeflate> {
  /// An encoder using `miniz_oxide` at its default level.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// An encoder using `miniz_oxide` at the compression level given (see
  /// [`MinizDeflate::with_level`]).
  #[inline]
  #[must_use]
  pub const fn with_level(level: u8) -> Self {
    Self { deflater: MinizDeflate::with_level(level) }
  }
}
impl<D: Deflate> PngEncoder<D> {
  /// An encoder using the compressor given.
  #[inline]
  #[must_use]
  pub const fn with_deflater(deflater: D) -> Self {
    Self { deflater }
  }

  /// The compressor in use.
  #[inline]
  #[must_use]
  pub const fn deflater(&self) -> &D {
    &self.deflater
  }

  /// Encodes the bitmap as a complete PNG file.
  #[inline]
  #[must_use]
  pub fn encode(&self, bitmap: &RgbBitmap) -> Vec<u8> {
    self.encode_with_chunk_limit(bitmap, MAX_CHUNK_LEN)
  }

  /// Like `encode`, but the image data is split into `IDAT` chunks of at most
  /// `limit` bytes each.
  pub(crate) fn encode_with_chunk_limit(&self, bitmap: &RgbBitmap, limit: usize) -> Vec<u8> {
    debug_assert!(limit > 0 && limit <= MAX_CHUNK_LEN);
    let ihdr = IHDR { width: bitmap.width(), height: bitmap.height() };
    let idat = idat_payload(bitmap, &self.deflater);

    let idat_chunk_count = idat.len().div_ceil(limit);
    let mut out = Vec::with_capacity(
      PNG_SIGNATURE.len() + (12 + 13) + (idat_chunk_count * 12 + idat.len()) + 12,
    );
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, PngChunkTy::IHDR, &ihdr.to_bytes());
    for part in idat.chunks(limit) {
      write_chunk(&mut out, PngChunkTy::IDAT, part);
    }
    write_chunk(&mut out, PngChunkTy::IEND, &[]);
    log::debug!("encoded {}x{} PNG: {} bytes", ihdr.width, ihdr.height, out.len());
    out
  }
}

/// Encodes the bitmap as a PNG with the default settings.
#[inline]
#[must_use]
pub fn png_encode(bitmap: &RgbBitmap) -> Vec<u8> {
  PngEncoder::new().encode(bitmap)
}
