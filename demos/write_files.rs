use rgbenc::{bmp::bmp_encode, png::png_encode, RgbBitmap, RGB8};

fn main() {
  let pixels = vec![
    RGB8::new(0, 0, 255),
    RGB8::new(0, 255, 0),
    RGB8::new(255, 0, 0),
    RGB8::new(255, 255, 255),
  ];
  let bitmap = match RgbBitmap::try_new(pixels, 2, 2) {
    Ok(bitmap) => bitmap,
    Err(e) => {
      eprintln!("Can't build the bitmap: {e}");
      return;
    }
  };

  for (path, bytes) in [("test.png", png_encode(&bitmap)), ("test.bmp", bmp_encode(&bitmap))] {
    match std::fs::write(path, &bytes) {
      Ok(()) => println!("wrote {path} ({} bytes)", bytes.len()),
      Err(e) => eprintln!("Error writing {path}: {e:?}"),
    }
  }
}
