use crate::bmp::{FILE_HEADER_LEN, INFO_HEADER_LEN};

/// The header at the start of all BMP files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpFileHeader {
  /// The total size of the file.
  pub total_file_size: u32,

  /// The byte index within the file where the bitmap data starts.
  pub pixel_data_offset: u32,
}
impl BmpFileHeader {
  /// The tag for a Windows 3.1 (or later) bitmap.
  pub const TAG: [u8; 2] = *b"BM";

  /// A header for a file with no color table, so the pixels come right after
  /// the two headers.
  #[inline]
  #[must_use]
  pub const fn for_pixel_array_len(pixel_array_len: u32) -> Self {
    let pixel_data_offset = (FILE_HEADER_LEN + INFO_HEADER_LEN) as u32;
    Self {
      total_file_size: pixel_data_offset.saturating_add(pixel_array_len),
      pixel_data_offset,
    }
  }
}
impl From<BmpFileHeader> for [u8; 14] {
  #[inline]
  fn from(h: BmpFileHeader) -> Self {
    let mut a = [0; 14];
    a[0..2].copy_from_slice(BmpFileHeader::TAG.as_slice());
    a[2..6].copy_from_slice(h.total_file_size.to_le_bytes().as_slice());
    // 4 bytes are left blank
    a[10..14].copy_from_slice(h.pixel_data_offset.to_le_bytes().as_slice());
    a
  }
}

#[test]
fn test_file_header_bytes() {
  let a: [u8; 14] = BmpFileHeader::for_pixel_array_len(16).into();
  assert_eq!(a, [b'B', b'M', 70, 0, 0, 0, 0, 0, 0, 0, 54, 0, 0, 0]);
}
