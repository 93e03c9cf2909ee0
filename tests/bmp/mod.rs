use rgbenc::{bmp::*, RgbBitmap, RGB8};

use super::{bgrw_2x2, rand_bitmap, SIZES};

fn u32_le(bytes: &[u8]) -> u32 {
  u32::from_le_bytes(bytes.try_into().unwrap())
}

fn u16_le(bytes: &[u8]) -> u16 {
  u16::from_le_bytes(bytes.try_into().unwrap())
}

/// Undoes the padding and the bottom-up row order.
fn decode_pixel_array(bmp: &[u8], width: u32, height: u32) -> Vec<RGB8> {
  let row_size = bmp_row_size(width);
  let offset = u32_le(&bmp[10..14]) as usize;
  let mut rows: Vec<Vec<RGB8>> = bmp[offset..]
    .chunks_exact(row_size)
    .map(|row| {
      row[..width as usize * 3].chunks_exact(3).map(|c| RGB8::new(c[0], c[1], c[2])).collect()
    })
    .collect();
  assert_eq!(rows.len(), height as usize);
  rows.reverse();
  rows.concat()
}

#[test]
fn test_bmp_header_identifier() {
  let bmp = bmp_encode(&RgbBitmap::try_new(vec![RGB8::default()], 1, 1).unwrap());
  assert_eq!(&bmp[0..2], &[0x42, 0x4D]);
}

#[test]
fn test_bmp_header_file_size() {
  let bmp = bmp_encode(&RgbBitmap::try_new(vec![RGB8::default(); 512], 128, 4).unwrap());
  // 54 + 512*3 = 1590 = 0x0636
  assert_eq!(&bmp[2..6], &[0x36, 0x06, 0x00, 0x00]);
  assert_eq!(bmp.len(), 1590);
}

#[test]
fn test_bmp_width_and_height() {
  let bmp = bmp_encode(&RgbBitmap::try_new(vec![RGB8::default(); 256], 256, 1).unwrap());
  assert_eq!(&bmp[18..22], &[0, 1, 0, 0]);
  let bmp = bmp_encode(&RgbBitmap::try_new(vec![RGB8::default(); 65536], 1, 65536).unwrap());
  assert_eq!(&bmp[22..26], &[0, 0, 1, 0]);
}

#[test]
fn test_bmp_fixed_header_fields() {
  let bmp = bmp_encode(&rand_bitmap(5, 3));
  assert_eq!(&bmp[6..10], &[0, 0, 0, 0]);
  assert_eq!(u32_le(&bmp[10..14]), 54);
  assert_eq!(u32_le(&bmp[14..18]), 40);
  assert_eq!(u16_le(&bmp[26..28]), 1);
  assert_eq!(u16_le(&bmp[28..30]), 24);
  assert_eq!(u32_le(&bmp[30..34]), 0);
  assert_eq!(u32_le(&bmp[34..38]), 16 * 3);
  assert_eq!(u32_le(&bmp[38..42]), 2835);
  assert_eq!(u32_le(&bmp[42..46]), 2835);
  assert_eq!(u32_le(&bmp[46..50]), 0);
  assert_eq!(u32_le(&bmp[50..54]), 0);
}

#[test]
fn test_bmp_pixel_array_order() {
  let bmp = bmp_encode(&bgrw_2x2());
  assert_eq!(bmp.len(), 54 + 16);
  // bottom row first: red then white
  assert_eq!(&bmp[54..60], &[255, 0, 0, 255, 255, 255]);
  assert_eq!(&bmp[60..62], &[0, 0]);
  // then the top row: blue then green
  assert_eq!(&bmp[62..68], &[0, 0, 255, 0, 255, 0]);
  assert_eq!(&bmp[68..70], &[0, 0]);
}

#[test]
fn test_bmp_pixel_bytes_keep_channel_order() {
  let bitmap = RgbBitmap::try_new(vec![RGB8::new(1, 2, 3), RGB8::new(4, 5, 6)], 1, 2).unwrap();
  let bmp = bmp_encode(&bitmap);
  assert_eq!(
    &bmp[54..],
    &[
      4, 5, 6, 0, // bottom row, 1 byte of padding
      1, 2, 3, 0, // top row
    ]
  );
}

#[test]
fn test_bmp_file_size_field_matches_length() {
  for &(w, h) in SIZES {
    let bmp = bmp_encode(&rand_bitmap(w, h));
    assert_eq!(u32_le(&bmp[2..6]) as usize, bmp.len(), "{w}x{h}");
    assert_eq!(bmp.len(), 54 + bmp_row_size(w) * h as usize, "{w}x{h}");
  }
}

#[test]
fn test_bmp_round_trip() {
  for &(w, h) in SIZES {
    let bitmap = rand_bitmap(w, h);
    let bmp = BmpEncoder.encode(&bitmap);
    assert_eq!(decode_pixel_array(&bmp, w, h), bitmap.pixels(), "{w}x{h}");
  }
}

#[test]
fn test_bmp_padding_is_zero() {
  // width 5 gives 15 bytes of pixels and 1 byte of padding per row
  let bitmap = RgbBitmap::try_new(vec![RGB8::new(0xFF, 0xFF, 0xFF); 10], 5, 2).unwrap();
  let bmp = bmp_encode(&bitmap);
  assert_eq!(bmp_row_size(5), 16);
  assert_eq!(bmp[54 + 15], 0);
  assert_eq!(bmp[54 + 16 + 15], 0);
  assert!(bmp[54..54 + 15].iter().all(|&b| b == 0xFF));
}
