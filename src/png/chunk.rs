use alloc::vec::Vec;
use core::fmt::{Debug, Write};

use super::Crc32;

/// The 4-byte ASCII tag of a PNG chunk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
impl PngChunkTy {
  /// Image Header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image Data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image End
  pub const IEND: Self = Self(*b"IEND");

  /// The tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }
}
impl Debug for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

/// The CRC that goes at the end of a chunk: computed over the type and the
/// data, but not the length.
#[inline]
#[must_use]
pub fn chunk_crc(ty: PngChunkTy, data: &[u8]) -> u32 {
  let mut c = Crc32::new();
  c.update(ty.as_bytes());
  c.update(data);
  c.finish()
}

/// The most data a single chunk may hold, `2**31 - 1` bytes.
pub const MAX_CHUNK_LEN: usize = i32::MAX as usize;

/// Appends one framed chunk to `out`.
///
/// The framing is: data length (`u32` BE), type, data, CRC (`u32` BE).
///
/// The caller keeps `data` within [`MAX_CHUNK_LEN`].
pub fn write_chunk(out: &mut Vec<u8>, ty: PngChunkTy, data: &[u8]) {
  debug_assert!(data.len() <= MAX_CHUNK_LEN);
  let len = data.len() as u32;
  let crc = chunk_crc(ty, data);
  log::trace!("chunk {ty:?}: {len} bytes, crc {crc:#010X}");
  out.reserve(4 + 4 + data.len() + 4);
  out.extend_from_slice(&len.to_be_bytes());
  out.extend_from_slice(ty.as_bytes());
  out.extend_from_slice(data);
  out.extend_from_slice(&crc.to_be_bytes());
}

#[test]
fn test_chunk_ty_debug() {
  extern crate std;
  assert_eq!(std::format!("{:?}", PngChunkTy::IDAT), "IDAT");
}

#[test]
fn test_write_iend_chunk() {
  let mut out = Vec::new();
  write_chunk(&mut out, PngChunkTy::IEND, &[]);
  assert_eq!(out, [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
}

#[test]
fn test_chunk_crc_covers_type_and_data() {
  let data = [1, 2, 3, 4, 5];
  let mut joined = Vec::new();
  joined.extend_from_slice(b"IDAT");
  joined.extend_from_slice(&data);
  assert_eq!(chunk_crc(PngChunkTy::IDAT, &data), super::crc32(&joined));
}
