//! Module for pixel formats.
//!
//! Both of the output formats in this crate store 8 bits per channel with no
//! alpha, so there's just the one pixel type. Both encoders write a pixel's
//! bytes in `[r, g, b]` order, exactly as `RGB8` lays them out in memory.

use bytemuck::{Pod, Zeroable};

/// Red/Green/Blue, u8 per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGB8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}
impl RGB8 {
  /// Makes a pixel from its channels.
  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}
impl From<[u8; 3]> for RGB8 {
  #[inline]
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}
impl From<(u8, u8, u8)> for RGB8 {
  #[inline]
  fn from((r, g, b): (u8, u8, u8)) -> Self {
    Self { r, g, b }
  }
}
impl From<RGB8> for [u8; 3] {
  #[inline]
  fn from(RGB8 { r, g, b }: RGB8) -> Self {
    [r, g, b]
  }
}

#[test]
fn test_rgb8_is_three_bytes() {
  assert_eq!(core::mem::size_of::<RGB8>(), 3);
  assert_eq!(core::mem::align_of::<RGB8>(), 1);
  let px = RGB8::new(1, 2, 3);
  assert_eq!(bytemuck::bytes_of(&px), &[1, 2, 3]);
  assert_eq!(RGB8::from([1, 2, 3]), px);
  assert_eq!(RGB8::from((1, 2, 3)), px);
  assert_eq!(<[u8; 3]>::from(px), [1, 2, 3]);
}
