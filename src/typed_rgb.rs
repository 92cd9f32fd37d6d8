//! Type-safe RGB → RGBA conversions using [`rgb`] crate types via bytemuck.
//!
//! ```rust
//! use rgb::{Rgb, Rgba};
//! use imgmsg2rgba::typed_rgb;
//!
//! let rgb_pixels: Vec<Rgb<u8>> = vec![Rgb::new(255, 0, 128); 100];
//! let mut rgba_buf: Vec<Rgba<u8>> = vec![Rgba::default(); 100];
//! typed_rgb::rgb_to_rgba_buf(&rgb_pixels, &mut rgba_buf).unwrap();
//! assert_eq!(rgba_buf[0], Rgba::new(255, 0, 128, 255));
//! ```

use crate::{ConvertedImage, SizeError, SourceImage};
use rgb::{Rgb, Rgba};

/// Copy `&[Rgb<u8>]` into `&mut [Rgba<u8>]`, adding alpha=255.
pub fn rgb_to_rgba_buf(src: &[Rgb<u8>], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::bytes::rgb_to_rgba(src_bytes, dst_bytes)
}

/// Set alpha to 255 for every pixel.
pub fn fill_alpha_rgba(pixels: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::bytes::fill_alpha_rgba(bytes)
}

impl<'a> SourceImage<'a> {
    /// View typed RGB pixels as a source image.
    pub fn from_rgb(width: i32, height: i32, pixels: &'a [Rgb<u8>]) -> Self {
        SourceImage::new(width, height, bytemuck::cast_slice(pixels))
    }
}

impl ConvertedImage {
    /// The output as typed RGBA pixels. Zero-copy.
    pub fn as_rgba(&self) -> &[Rgba<u8>] {
        bytemuck::cast_slice(self.pixels())
    }
}
