//! # imgmsg2rgba
//!
//! Turn packed RGB image messages into packed, fully opaque RGBA buffers.
//!
//! A camera topic hands over `{ width, height, data }` with three bytes per
//! pixel. Video encoders want four. This crate inserts the alpha byte.
//!
//! ## Layers
//!
//! - [`bytes`] works on raw `&[u8]` / `&mut [u8]` slices at row granularity.
//! - [`convert()`] turns a [`SourceImage`] into a freshly allocated
//!   [`ConvertedImage`], with [`Strictness`] deciding what happens when the
//!   dimensions and the buffer disagree.
//! - [`host`] is the boundary for a dynamically typed host runtime: it checks
//!   the shape of the incoming message and exposes the `imgmsg2rgba` entry point.
//!
//! ```rust
//! use imgmsg2rgba::{ConvertOptions, SourceImage, convert};
//!
//! let src = SourceImage::new(2, 1, &[1, 2, 3, 4, 5, 6]);
//! let out = convert(&src, &ConvertOptions::default()).unwrap();
//! assert_eq!(out.pixels(), &[1, 2, 3, 255, 4, 5, 6, 255]);
//! ```
//!
//! ## Feature flags
//!
//! - **`std`** (default) — `std::error::Error` support through `thiserror`.
//! - **`rgb`** — Type-safe conversions using [`rgb`] crate pixel types
//!   (`Rgb<u8>`, `Rgba<u8>`) via bytemuck.
//! - **`imgref`** — Whole-image conversions using [`imgref`] types
//!   (`ImgRef`, `ImgVec`). Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod bytes;
mod convert;
mod error;
pub mod host;

pub use bytes::{fill_alpha_rgba, rgb_to_rgba, rgb_to_rgba_strided};
pub use convert::{ConvertOptions, ConvertedImage, SourceImage, Strictness, convert};
pub use error::{ArgumentError, ConvertError, SizeError};
pub use host::{HostValue, imgmsg2rgba, imgmsg2rgba_with};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;
