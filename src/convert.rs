//! Whole-message conversion: [`SourceImage`] in, [`ConvertedImage`] out.

use alloc::vec::Vec;

use crate::bytes::{RGB_BPP, RGBA_BPP};
use crate::{ConvertError, SizeError};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// What to do when `data` does not hold exactly `width * height` RGB pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strictness {
    /// Fail with [`ConvertError::DimensionMismatch`].
    #[default]
    Strict,
    /// Convert the whole pixels that are present, up to `width * height`.
    /// Any trailing partial pixel is ignored and output pixels that got no
    /// source stay zero.
    Lenient,
}

/// Conversion settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConvertOptions {
    strictness: Strictness,
}

impl ConvertOptions {
    pub const fn new() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }

    pub const fn strict() -> Self {
        Self::new()
    }

    pub const fn lenient() -> Self {
        Self::new().strictness(Strictness::Lenient)
    }

    #[must_use]
    pub const fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub const fn get_strictness(&self) -> Strictness {
        self.strictness
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// Packed RGB pixels, row-major, no row padding.
///
/// Dimensions are `i32` because that is how the host hands them over; they
/// are checked by [`convert`], not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceImage<'a> {
    pub width: i32,
    pub height: i32,
    pub pixels: &'a [u8],
}

impl<'a> SourceImage<'a> {
    pub const fn new(width: i32, height: i32, pixels: &'a [u8]) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert with [`ConvertOptions::default`].
    pub fn convert(&self) -> Result<ConvertedImage, ConvertError> {
        convert(self, &ConvertOptions::default())
    }
}

/// Packed RGBA pixels, row-major, exactly `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConvertedImage {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

impl ConvertedImage {
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// `width * height`.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / RGBA_BPP
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Width and height as pixel count and output byte length.
fn output_len(width: i32, height: i32) -> Result<(usize, usize), ConvertError> {
    let invalid = ConvertError::InvalidDimensions { width, height };
    let w = usize::try_from(width).map_err(|_| invalid.clone())?;
    let h = usize::try_from(height).map_err(|_| invalid.clone())?;
    let pixels = w.checked_mul(h).ok_or_else(|| invalid.clone())?;
    let bytes = pixels
        .checked_mul(RGBA_BPP)
        .filter(|&b| b <= isize::MAX as usize)
        .ok_or(invalid)?;
    Ok((pixels, bytes))
}

/// Zero-filled output buffer. Allocation failure is a dimension error, not an abort.
fn alloc_output(len: usize, width: i32, height: i32) -> Result<Vec<u8>, ConvertError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|e| {
        log::debug!("cannot allocate {len} bytes for {width}x{height} image: {e}");
        ConvertError::InvalidDimensions { width, height }
    })?;
    out.resize(len, 0);
    Ok(out)
}

/// Convert packed RGB to a freshly allocated packed RGBA image, alpha=255.
///
/// The output is always `width * height * 4` bytes. With
/// [`Strictness::Lenient`] the number of converted pixels is
/// `min(pixels.len() / 3, width * height)` and the rest of the output is zero.
pub fn convert(
    src: &SourceImage<'_>,
    options: &ConvertOptions,
) -> Result<ConvertedImage, ConvertError> {
    let (width, height) = (src.width, src.height);
    let (expected_pixels, out_len) = output_len(width, height)?;

    let available = src.pixels.len() / RGB_BPP;
    match options.strictness {
        Strictness::Strict => {
            let expected = expected_pixels * RGB_BPP;
            if src.pixels.len() != expected {
                log::debug!(
                    "rejecting {width}x{height} image: {} data bytes, expected {expected}",
                    src.pixels.len()
                );
                return Err(ConvertError::DimensionMismatch {
                    width,
                    height,
                    expected,
                    actual: src.pixels.len(),
                });
            }
        }
        Strictness::Lenient => {
            if available != expected_pixels || !src.pixels.len().is_multiple_of(RGB_BPP) {
                log::warn!(
                    "{width}x{height} image carries {} data bytes ({available} whole pixels), converting {}",
                    src.pixels.len(),
                    available.min(expected_pixels)
                );
            }
        }
    }

    let mut out = alloc_output(out_len, width, height)?;
    let n = available.min(expected_pixels);
    if n > 0 {
        crate::bytes::rgb_to_rgba(&src.pixels[..n * RGB_BPP], &mut out[..n * RGBA_BPP])
            .map_err(|e| unreachable_size_error(e, width, height))?;
    }
    log::trace!("converted {n} of {expected_pixels} pixels ({width}x{height})");

    Ok(ConvertedImage {
        width,
        height,
        pixels: out,
    })
}

// Slices above are cut to whole pixels of matching count, so the byte core
// cannot refuse them. Map to a dimension error rather than panicking.
fn unreachable_size_error(e: SizeError, width: i32, height: i32) -> ConvertError {
    log::debug!("byte core rejected {width}x{height} image: {e}");
    ConvertError::InvalidDimensions { width, height }
}
