//! The CRC-32 used by PNG chunks (and by zlib, gzip, ethernet, ...).

/// The per-byte remainder table, computed at compile time.
pub(crate) const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// A running CRC-32 computation.
///
/// Lets a chunk's type and data be fed in separately, without first gluing
/// them into one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc32(u32);
impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}
impl Crc32 {
  /// A fresh computation.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self(u32::MAX)
  }

  /// Feeds more bytes in.
  #[inline]
  pub fn update(&mut self, bytes: &[u8]) {
    let mut crc = self.0;
    for &byte in bytes {
      let i = (crc ^ u32::from(byte)) as u8 as usize;
      crc = CRC_TABLE[i] ^ (crc >> 8);
    }
    self.0 = crc;
  }

  /// The checksum of everything fed in so far.
  #[inline]
  #[must_use]
  pub const fn finish(&self) -> u32 {
    self.0 ^ u32::MAX
  }
}

/// Computes the CRC-32 of the bytes given.
#[inline]
#[must_use]
pub fn crc32(bytes: &[u8]) -> u32 {
  let mut c = Crc32::new();
  c.update(bytes);
  c.finish()
}

#[test]
fn test_crc_table_entries() {
  assert_eq!(CRC_TABLE[0], 0);
  assert_eq!(CRC_TABLE[1], 0x7707_3096);
  assert_eq!(CRC_TABLE[128], 0xEDB8_8320);
  assert_eq!(CRC_TABLE[255], 0x2D02_EF8D);
}

#[test]
fn test_crc32_known_values() {
  assert_eq!(crc32(&[]), 0);
  assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
  assert_eq!(crc32(b"IEND"), 0xAE42_6082);
  // same input, same output
  assert_eq!(crc32(b"IHDR"), crc32(b"IHDR"));
}

#[test]
fn test_crc32_streaming_matches_one_shot() {
  let mut c = Crc32::default();
  c.update(b"1234");
  c.update(b"");
  c.update(b"56789");
  assert_eq!(c.finish(), crc32(b"123456789"));
}
