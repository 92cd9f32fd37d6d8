//! Whole-image RGB → RGBA conversions using [`imgref`] types.
//!
//! Strided sources are handled row by row; padding is never read.
//!
//! ```rust
//! use rgb::{Rgb, Rgba};
//! use ::imgref::{ImgVec, ImgRefMut};
//! use imgmsg2rgba::imgref;
//!
//! let src = ImgVec::new(vec![Rgb::new(255u8, 0, 128); 4], 2, 2);
//! let mut dst_buf = vec![Rgba::default(); 4];
//! let dst = ImgRefMut::new(&mut dst_buf, 2, 2);
//! imgref::convert_rgb_to_rgba(src.as_ref(), dst).unwrap();
//! assert_eq!(dst_buf[3], Rgba::new(255, 0, 128, 255));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgRefMut, ImgVec};
use rgb::{Rgb, Rgba};

use crate::{ConvertedImage, SizeError};

/// Convert into a caller-provided destination of the same dimensions.
pub fn convert_rgb_to_rgba(
    src: ImgRef<'_, Rgb<u8>>,
    mut dst: ImgRefMut<'_, Rgba<u8>>,
) -> Result<(), SizeError> {
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(SizeError::PixelCountMismatch);
    }
    if src.width() == 0 || src.height() == 0 {
        return Ok(());
    }
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        crate::typed_rgb::rgb_to_rgba_buf(src_row, dst_row)?;
    }
    Ok(())
}

/// Convert into a new tightly packed `ImgVec`.
pub fn to_rgba_imgvec(src: ImgRef<'_, Rgb<u8>>) -> Result<ImgVec<Rgba<u8>>, SizeError> {
    let (w, h) = (src.width(), src.height());
    let mut buf = vec![Rgba::default(); w * h];
    convert_rgb_to_rgba(src, ImgRefMut::new(&mut buf, w, h))?;
    Ok(ImgVec::new(buf, w, h))
}

impl ConvertedImage {
    /// Reinterpret the output as an `ImgVec`. Zero-copy unless the
    /// allocation's capacity is not a whole number of pixels.
    ///
    /// Dimensions are non-negative for every successfully converted image.
    pub fn into_imgvec(self) -> ImgVec<Rgba<u8>> {
        let w = usize::try_from(self.width()).unwrap_or(0);
        let h = usize::try_from(self.height()).unwrap_or(0);
        let buf: Vec<Rgba<u8>> = bytemuck::allocation::try_cast_vec(self.into_pixels())
            .unwrap_or_else(|(_, bytes)| bytemuck::cast_slice(&bytes).to_vec());
        ImgVec::new(buf, w, h)
    }
}
