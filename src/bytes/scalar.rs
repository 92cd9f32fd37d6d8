use super::{OPAQUE, RGB_BPP, RGBA_BPP};

// ===========================================================================
// Scalar row implementations
// ===========================================================================

// Both slices must hold whole pixels; callers slice them to size first.
pub(super) fn rgb_to_rgba_row_scalar(src: &[u8], dst: &mut [u8]) {
    let src: &[[u8; RGB_BPP]] = bytemuck::cast_slice(src);
    let dst: &mut [[u8; RGBA_BPP]] = bytemuck::cast_slice_mut(dst);
    for (&[r, g, b], d) in src.iter().zip(dst.iter_mut()) {
        *d = [r, g, b, OPAQUE];
    }
}

pub(super) fn fill_alpha_row_scalar(row: &mut [u8]) {
    for px in row.chunks_exact_mut(RGBA_BPP) {
        px[3] = OPAQUE;
    }
}

// ===========================================================================
// Scalar strided wrappers
// ===========================================================================

pub(super) fn rgb_to_rgba_strided_scalar(
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        rgb_to_rgba_row_scalar(
            &src[y * ss..][..w * RGB_BPP],
            &mut dst[y * ds..][..w * RGBA_BPP],
        );
    }
}
