extern crate alloc;
use super::*;
use alloc::{vec, vec::Vec};

// --- Helpers to generate test data ---

fn make_3bpp(n_pixels: usize) -> Vec<u8> {
    (0..n_pixels * 3).map(|i| (i % 251) as u8).collect()
}

fn make_4bpp(n_pixels: usize) -> Vec<u8> {
    (0..n_pixels * 4).map(|i| (i % 251) as u8).collect()
}

// --- Reference implementation for comparison ---

fn ref_rgb_to_rgba(src: &[u8]) -> Vec<u8> {
    let n = src.len() / 3;
    let mut out = vec![0u8; n * 4];
    for i in 0..n {
        out[i * 4] = src[i * 3];
        out[i * 4 + 1] = src[i * 3 + 1];
        out[i * 4 + 2] = src[i * 3 + 2];
        out[i * 4 + 3] = 255;
    }
    out
}

const TEST_PIXEL_COUNTS: &[usize] = &[1, 2, 3, 7, 8, 15, 16, 31, 32, 33, 63, 64, 65, 100];

#[test]
fn rgb_to_rgba_matches_reference() {
    for &n in TEST_PIXEL_COUNTS {
        let src = make_3bpp(n);
        let expected = ref_rgb_to_rgba(&src);
        let mut dst = vec![0u8; n * 4];
        rgb_to_rgba(&src, &mut dst).unwrap();
        assert_eq!(dst, expected, "rgb_to_rgba n={n}");
    }
}

#[test]
fn rgb_to_rgba_single_pixel() {
    let mut dst = [0u8; 4];
    rgb_to_rgba(&[10, 20, 30], &mut dst).unwrap();
    assert_eq!(dst, [10, 20, 30, 255]);
}

#[test]
fn rgb_to_rgba_two_pixels() {
    let mut dst = [0u8; 8];
    rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut dst).unwrap();
    assert_eq!(dst, [1, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn rgb_to_rgba_leaves_dst_tail_alone() {
    let mut dst = [0xAAu8; 12];
    rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut dst).unwrap();
    assert_eq!(&dst[..8], &[1, 2, 3, 255, 4, 5, 6, 255]);
    assert_eq!(&dst[8..], &[0xAA; 4]);
}

#[test]
fn rgb_to_rgba_never_touches_next_pixel_red() {
    // Every red channel must survive: alpha goes to byte 3, not byte 4.
    let src = make_3bpp(16);
    let mut dst = vec![0u8; 16 * 4];
    rgb_to_rgba(&src, &mut dst).unwrap();
    for (i, px) in dst.chunks_exact(4).enumerate() {
        assert_eq!(px[0], src[i * 3], "red of pixel {i}");
        assert_eq!(px[3], 255, "alpha of pixel {i}");
    }
}

#[test]
fn fill_alpha_sets_byte_three_only() {
    for &n in TEST_PIXEL_COUNTS {
        let mut data = make_4bpp(n);
        let orig = data.clone();
        fill_alpha_rgba(&mut data).unwrap();
        for (px, o) in data.chunks_exact(4).zip(orig.chunks_exact(4)) {
            assert_eq!(&px[..3], &o[..3], "fill_alpha n={n}");
            assert_eq!(px[3], 255, "fill_alpha n={n}");
        }
    }
}

// -----------------------------------------------------------------------
// Strided
// -----------------------------------------------------------------------

#[test]
fn strided_rgb_to_rgba_skips_padding() {
    let (w, h) = (5, 3);
    let (ss, ds) = (w * 3 + 4, w * 4 + 8);
    let mut src = vec![0xEEu8; ss * h];
    for y in 0..h {
        for x in 0..w * 3 {
            src[y * ss + x] = (y * 100 + x) as u8;
        }
    }
    let mut dst = vec![0xCDu8; ds * h];
    rgb_to_rgba_strided(&src, &mut dst, w, h, ss, ds).unwrap();
    for y in 0..h {
        let expected = ref_rgb_to_rgba(&src[y * ss..][..w * 3]);
        assert_eq!(&dst[y * ds..][..w * 4], &expected[..], "row {y}");
        assert!(dst[y * ds + w * 4..(y + 1) * ds].iter().all(|&b| b == 0xCD), "padding row {y}");
    }
}

#[test]
fn strided_tight_matches_contiguous() {
    let (w, h) = (7, 4);
    let src = make_3bpp(w * h);
    let mut strided = vec![0u8; w * h * 4];
    let mut flat = vec![0u8; w * h * 4];
    rgb_to_rgba_strided(&src, &mut strided, w, h, w * 3, w * 4).unwrap();
    rgb_to_rgba(&src, &mut flat).unwrap();
    assert_eq!(strided, flat);
}

#[test]
fn strided_last_row_may_omit_padding() {
    // (h-1) * stride + row bytes is enough.
    let (w, h, ss) = (2, 2, 8);
    let src = vec![9u8; ss + w * 3];
    let mut dst = vec![0u8; w * h * 4];
    rgb_to_rgba_strided(&src, &mut dst, w, h, ss, w * 4).unwrap();
    assert!(dst.chunks_exact(4).all(|px| px == [9, 9, 9, 255]));
}

// -----------------------------------------------------------------------
// Error cases
// -----------------------------------------------------------------------

#[test]
fn empty_source_is_rejected() {
    let mut dst = [0u8; 4];
    assert_eq!(rgb_to_rgba(&[], &mut dst), Err(SizeError::NotPixelAligned));
    assert_eq!(fill_alpha_rgba(&mut []), Err(SizeError::NotPixelAligned));
}

#[test]
fn partial_pixel_is_rejected() {
    let mut dst = [0u8; 8];
    assert_eq!(rgb_to_rgba(&[1, 2, 3, 4], &mut dst), Err(SizeError::NotPixelAligned));
    let mut buf = [0u8; 6];
    assert_eq!(fill_alpha_rgba(&mut buf), Err(SizeError::NotPixelAligned));
}

#[test]
fn short_destination_is_rejected() {
    let src = make_3bpp(3);
    let mut dst = vec![0u8; 11];
    assert_eq!(rgb_to_rgba(&src, &mut dst), Err(SizeError::PixelCountMismatch));
    assert!(dst.iter().all(|&b| b == 0));
}

#[test]
fn strided_bad_layouts_are_rejected() {
    let src = vec![0u8; 64];
    let mut dst = vec![0u8; 64];
    // zero dimensions
    assert_eq!(
        rgb_to_rgba_strided(&src, &mut dst, 0, 2, 6, 8),
        Err(SizeError::InvalidStride)
    );
    assert_eq!(
        rgb_to_rgba_strided(&src, &mut dst, 2, 0, 6, 8),
        Err(SizeError::InvalidStride)
    );
    // stride shorter than a row
    assert_eq!(
        rgb_to_rgba_strided(&src, &mut dst, 4, 2, 11, 16),
        Err(SizeError::InvalidStride)
    );
    assert_eq!(
        rgb_to_rgba_strided(&src, &mut dst, 4, 2, 12, 15),
        Err(SizeError::InvalidStride)
    );
    // buffer too short for the layout
    assert_eq!(
        rgb_to_rgba_strided(&src, &mut dst, 4, 5, 12, 16),
        Err(SizeError::InvalidStride)
    );
    // overflow
    assert_eq!(
        rgb_to_rgba_strided(&src, &mut dst, usize::MAX, 1, usize::MAX, usize::MAX),
        Err(SizeError::InvalidStride)
    );
}
