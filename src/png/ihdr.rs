/// Image Header.
///
/// This encoder only ever writes 8-bit truecolor, non-interlaced images, so
/// the only fields that vary are the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// Width in pixels.
  pub width: u32,
  /// Height in pixels.
  pub height: u32,
}
impl IHDR {
  /// Bits per channel.
  pub const BIT_DEPTH: u8 = 8;
  /// Color type 2, truecolor (RGB).
  pub const COLOR_TYPE_RGB: u8 = 2;
  /// Compression method 0, Zlib/DEFLATE.
  pub const COMPRESSION_METHOD: u8 = 0;
  /// Filter method 0, the five basic filter types.
  pub const FILTER_METHOD: u8 = 0;
  /// Interlace method 0, no interlacing.
  pub const INTERLACE_METHOD: u8 = 0;

  /// The 13 bytes of chunk data.
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> [u8; 13] {
    let mut a = [0; 13];
    a[0..4].copy_from_slice(&self.width.to_be_bytes());
    a[4..8].copy_from_slice(&self.height.to_be_bytes());
    a[8] = Self::BIT_DEPTH;
    a[9] = Self::COLOR_TYPE_RGB;
    a[10] = Self::COMPRESSION_METHOD;
    a[11] = Self::FILTER_METHOD;
    a[12] = Self::INTERLACE_METHOD;
    a
  }
}
impl From<IHDR> for [u8; 13] {
  #[inline]
  fn from(ihdr: IHDR) -> Self {
    ihdr.to_bytes()
  }
}

#[test]
fn test_ihdr_bytes_are_big_endian() {
  let ihdr = IHDR { width: 0x0102_0304, height: 1 };
  assert_eq!(ihdr.to_bytes(), [1, 2, 3, 4, 0, 0, 0, 1, 8, 2, 0, 0, 0]);
}
