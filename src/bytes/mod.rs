// ---------------------------------------------------------------------------
// Row-level RGB → RGBA operations on raw byte slices.
//
// Public functions validate lengths, then hand whole pixels to the scalar
// row kernels. Strided variants loop over rows and never touch padding.
// ---------------------------------------------------------------------------

//! Byte-slice core.
//!
//! RGB is 3 bytes per pixel, RGBA is 4. Alpha always lands at byte 3 of each
//! output pixel.

use crate::SizeError;

mod scalar;
use scalar::*;

#[cfg(test)]
mod tests;

/// Bytes per RGB pixel.
pub const RGB_BPP: usize = 3;
/// Bytes per RGBA pixel.
pub const RGBA_BPP: usize = 4;
/// Alpha value written for every converted pixel.
pub const OPAQUE: u8 = 0xFF;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize, bpp: usize) -> Result<(), SizeError> {
    if len == 0 || !len.is_multiple_of(bpp) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_copy(
    src_len: usize,
    src_bpp: usize,
    dst_len: usize,
    dst_bpp: usize,
) -> Result<(), SizeError> {
    if src_len == 0 || !src_len.is_multiple_of(src_bpp) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < (src_len / src_bpp) * dst_bpp {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Public API — contiguous
// ===========================================================================

/// RGB (3 bytes/px) → RGBA (4 bytes/px). Keeps channel order, alpha=255.
///
/// Converts `src.len() / 3` pixels. Bytes of `dst` past the last converted
/// pixel are left as they are.
pub fn rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), RGB_BPP, dst.len(), RGBA_BPP)?;
    let pixels = src.len() / RGB_BPP;
    rgb_to_rgba_row_scalar(src, &mut dst[..pixels * RGBA_BPP]);
    Ok(())
}

/// Set the alpha channel (byte 3) to 255 for every 4bpp pixel.
pub fn fill_alpha_rgba(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len(), RGBA_BPP)?;
    fill_alpha_row_scalar(buf);
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// RGB (3 bytes/px) → RGBA (4 bytes/px) between strided buffers. Alpha=255.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start of
/// consecutive rows. Padding bytes between rows are never read or written.
pub fn rgb_to_rgba_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), SizeError> {
    check_strided(src.len(), width, height, src_stride, RGB_BPP)?;
    check_strided(dst.len(), width, height, dst_stride, RGBA_BPP)?;
    rgb_to_rgba_strided_scalar(src, dst, width, height, src_stride, dst_stride);
    Ok(())
}
