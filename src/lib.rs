#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for encoding RGB pixel data into image files.
//!
//! You build an [`RgbBitmap`] once, then hand a reference to it to any of the
//! encoders. Each encoder produces the complete bytes of a file, which you can
//! then write wherever you like.
//!
//! * [`bmp`]: uncompressed 24-bit Windows Bitmap.
//! * [`png`]: 8-bit truecolor Portable Network Graphics.
//!
//! ```
//! use rgbenc::{RgbBitmap, RGB8};
//! let pixels = vec![RGB8::new(0, 0, 255), RGB8::new(0, 255, 0)];
//! let bitmap = RgbBitmap::try_new(pixels, 2, 1).unwrap();
//! # #[cfg(feature = "bmp")]
//! let bmp_bytes = rgbenc::bmp::bmp_encode(&bitmap);
//! # #[cfg(feature = "png")]
//! let png_bytes = rgbenc::png::png_encode(&bitmap);
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

pub mod pixel_formats;
pub use pixel_formats::*;

pub mod image;
pub use image::*;

#[cfg(feature = "png")]
#[cfg_attr(docs_rs, doc(cfg(feature = "png")))]
pub mod png;

#[cfg(feature = "bmp")]
#[cfg_attr(docs_rs, doc(cfg(feature = "bmp")))]
pub mod bmp;
