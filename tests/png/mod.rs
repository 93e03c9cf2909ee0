use rgbenc::{png::*, RgbBitmap, RGB8};

use super::{bgrw_2x2, rand_bitmap, rand_bytes, SIZES};

struct RawChunk<'b> {
  declared_len: u32,
  ty: [u8; 4],
  data: &'b [u8],
  declared_crc: u32,
}

fn raw_chunks(png: &[u8]) -> Vec<RawChunk<'_>> {
  let mut rest = &png[8..];
  let mut out = Vec::new();
  while !rest.is_empty() {
    let declared_len = u32::from_be_bytes(rest[0..4].try_into().unwrap());
    let len = declared_len as usize;
    let ty = rest[4..8].try_into().unwrap();
    let data = &rest[8..8 + len];
    let declared_crc = u32::from_be_bytes(rest[8 + len..12 + len].try_into().unwrap());
    out.push(RawChunk { declared_len, ty, data, declared_crc });
    rest = &rest[12 + len..];
  }
  out
}

fn reference_crc(ty: &[u8], data: &[u8]) -> u32 {
  let mut h = crc32fast::Hasher::new();
  h.update(ty);
  h.update(data);
  h.finalize()
}

#[test]
fn test_crc32_matches_reference() {
  assert_eq!(crc32(&[]), 0);
  for len in [1, 7, 64, 1000] {
    let bytes = rand_bytes(len);
    assert_eq!(crc32(&bytes), crc32fast::hash(&bytes));
    assert_eq!(crc32(&bytes), crc32(&bytes));
  }
}

#[test]
fn test_adler32_of_nothing() {
  assert_eq!(adler32(&[]), 1);
}

#[test]
fn test_png_signature_and_ihdr_len() {
  for &(w, h) in SIZES {
    let png = png_encode(&rand_bitmap(w, h));
    assert_eq!(&png[..8], &PNG_SIGNATURE);
    let chunks = raw_chunks(&png);
    assert_eq!(&chunks[0].ty, b"IHDR");
    assert_eq!(chunks[0].declared_len, 13);
    assert_eq!(&chunks[0].data[0..4], &w.to_be_bytes());
    assert_eq!(&chunks[0].data[4..8], &h.to_be_bytes());
    assert_eq!(&chunks[0].data[8..], &[8, 2, 0, 0, 0]);
  }
}

#[test]
fn test_png_chunk_crcs_match_reference() {
  let png = png_encode(&rand_bitmap(33, 17));
  let chunks = raw_chunks(&png);
  let tys: Vec<&[u8; 4]> = chunks.iter().map(|c| &c.ty).collect();
  assert_eq!(tys, [b"IHDR", b"IDAT", b"IEND"]);
  for c in chunks.iter() {
    assert_eq!(c.declared_len as usize, c.data.len());
    assert_eq!(c.declared_crc, reference_crc(&c.ty, c.data));
  }
  assert!(chunks[2].data.is_empty());
}

#[test]
fn test_png_idat_zlib_stream() {
  for &(w, h) in SIZES {
    let bitmap = rand_bitmap(w, h);
    let png = png_encode(&bitmap);
    let idat = raw_chunks(&png).into_iter().find(|c| &c.ty == b"IDAT").unwrap();
    assert_eq!(u16::from_be_bytes([idat.data[0], idat.data[1]]) % 31, 0);
    assert_eq!(idat.data[1] & 0x20, 0, "preset dictionary flag set");

    let filtered = miniz_oxide::inflate::decompress_to_vec_zlib(idat.data).unwrap();
    let line_len = 1 + w as usize * 3;
    assert_eq!(filtered.len(), line_len * h as usize);
    let adler = u32::from_be_bytes(idat.data[idat.data.len() - 4..].try_into().unwrap());
    assert_eq!(adler, adler32(&filtered));

    // every line is filter type None followed by plain RGB bytes
    let mut pixels = Vec::new();
    for line in filtered.chunks_exact(line_len) {
      assert_eq!(line[0], 0);
      pixels.extend(line[1..].chunks_exact(3).map(|c| RGB8::new(c[0], c[1], c[2])));
    }
    assert_eq!(pixels, bitmap.pixels());
  }
}

#[test]
fn test_png_2x2_is_deterministic() {
  let a = png_encode(&bgrw_2x2());
  let b = PngEncoder::new().encode(&bgrw_2x2());
  assert_eq!(a, b);
  let idat = raw_chunks(&a).into_iter().find(|c| &c.ty == b"IDAT").unwrap();
  assert_eq!(
    miniz_oxide::inflate::decompress_to_vec_zlib(idat.data).unwrap(),
    [0, 0, 0, 255, 0, 255, 0, 0, 255, 0, 0, 255, 255, 255]
  );
}

#[test]
fn test_png_single_pixel() {
  let bitmap = RgbBitmap::try_new(vec![RGB8::new(1, 2, 3)], 1, 1).unwrap();
  let png = png_encode(&bitmap);
  let chunks = raw_chunks(&png);
  assert_eq!(chunks.len(), 3);
  let filtered = miniz_oxide::inflate::decompress_to_vec_zlib(chunks[1].data).unwrap();
  assert_eq!(filtered, [0, 1, 2, 3]);
}
