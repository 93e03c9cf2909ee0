/// Header for Windows 3.1 or later.
///
/// Corresponds to the 40 byte `BITMAPINFOHEADER`. The encoder always writes one
/// color plane, no compression, and no palette, so those fields aren't stored
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpInfoHeader {
  /// Image pixel width
  pub width: i32,

  /// Image pixel height.
  ///
  /// * A positive height indicates that the origin is the **bottom** left.
  /// * A negative height indicates that the image origin is the **top** left.
  pub height: i32,

  /// Should be 1, 4, 8, 16, 24, or 32.
  pub bits_per_pixel: u16,

  /// The number of bytes in the raw bitmap data.
  pub image_byte_size: u32,

  /// horizontal pixels per meter
  pub h_ppm: i32,

  /// vertical pixels per meter
  pub v_ppm: i32,
}
impl From<BmpInfoHeader> for [u8; 40] {
  #[inline]
  #[rustfmt::skip]
  fn from(h: BmpInfoHeader) -> Self {
    let mut a = [0; 40];
    a[0..4].copy_from_slice(40_u32.to_le_bytes().as_slice());
    a[4..8].copy_from_slice(h.width.to_le_bytes().as_slice());
    a[8..12].copy_from_slice(h.height.to_le_bytes().as_slice());
    a[12..14].copy_from_slice(1_u16.to_le_bytes().as_slice());
    a[14..16].copy_from_slice(h.bits_per_pixel.to_le_bytes().as_slice());
    // compression: 0 is RGB, no compression
    a[20..24].copy_from_slice(h.image_byte_size.to_le_bytes().as_slice());
    a[24..28].copy_from_slice(h.h_ppm.to_le_bytes().as_slice());
    a[28..32].copy_from_slice(h.v_ppm.to_le_bytes().as_slice());
    // palette length and important colors both 0
    a
  }
}

#[test]
fn test_info_header_bytes() {
  let h = BmpInfoHeader {
    width: 256,
    height: 2,
    bits_per_pixel: 24,
    image_byte_size: 0x0102_0304,
    h_ppm: 2835,
    v_ppm: 2835,
  };
  let a: [u8; 40] = h.into();
  assert_eq!(
    a,
    [
      40, 0, 0, 0, // header size
      0, 1, 0, 0, // width
      2, 0, 0, 0, // height
      1, 0, // planes
      24, 0, // bpp
      0, 0, 0, 0, // compression
      4, 3, 2, 1, // image size
      0x13, 0x0B, 0, 0, // h_ppm
      0x13, 0x0B, 0, 0, // v_ppm
      0, 0, 0, 0, // palette
      0, 0, 0, 0, // important
    ]
  );
}
