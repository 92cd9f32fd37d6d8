//! Boundary for a dynamically typed host runtime.
//!
//! The host calls `imgmsg2rgba(msg)` with a single image message
//! (`{ width, height, data, ... }`, e.g. a ROS `sensor_msgs/Image`) and gets
//! back `{ width, height, data }` with RGBA bytes. All shape checks happen
//! here; [`convert`](crate::convert()) only ever sees a typed [`SourceImage`].
//!
//! ```rust
//! use imgmsg2rgba::{HostValue, imgmsg2rgba};
//!
//! let msg = HostValue::object([
//!     ("width", HostValue::Number(1.0)),
//!     ("height", HostValue::Number(1.0)),
//!     ("data", HostValue::Buffer(vec![10, 20, 30])),
//! ]);
//! let out = imgmsg2rgba(&[msg]).unwrap();
//! assert_eq!(out.get("data").and_then(HostValue::as_buffer), Some(&[10, 20, 30, 255][..]));
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{ArgumentError, ConvertError, ConvertOptions, ConvertedImage, SourceImage, Strictness};

/// The only `encoding` accepted in strict mode.
pub const RGB8_ENCODING: &str = "rgb8";

/// A value crossing the host boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HostValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Binary buffer (the host's byte buffer type).
    Buffer(Vec<u8>),
    Array(Vec<HostValue>),
    Object(BTreeMap<String, HostValue>),
}

impl HostValue {
    /// Build an object from `(key, value)` pairs.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, HostValue)>,
    {
        Self::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Field lookup; `None` for missing fields and for non-objects.
    pub fn get(&self, key: &str) -> Option<&HostValue> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_buffer(&self) -> Option<&[u8]> {
        match self {
            Self::Buffer(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Buffer(_) => "buffer",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }
}

// Formats as `[object, number]`; only evaluated when the log record is.
struct ArgKinds<'a>(&'a [HostValue]);

impl fmt::Display for ArgKinds<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(HostValue::kind))
            .finish()
    }
}

impl From<ConvertedImage> for HostValue {
    fn from(img: ConvertedImage) -> Self {
        let (width, height) = (img.width(), img.height());
        HostValue::object([
            ("width", HostValue::Number(f64::from(width))),
            ("height", HostValue::Number(f64::from(height))),
            ("data", HostValue::Buffer(img.into_pixels())),
        ])
    }
}

// ---------------------------------------------------------------------------
// Number coercion
// ---------------------------------------------------------------------------

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Host number → `i32`: truncate toward zero, wrap modulo 2^32,
/// non-finite values become 0.
pub fn to_int32(v: f64) -> i32 {
    if !v.is_finite() {
        return 0;
    }
    // |m| < 2^32, so the i64 cast is exact after truncation.
    let m = v % TWO_POW_32;
    m as i64 as u32 as i32
}

fn int32_field(obj: &HostValue, field: &'static str) -> Result<i32, ArgumentError> {
    obj.get(field)
        .and_then(HostValue::as_number)
        .map(to_int32)
        .ok_or(ArgumentError::NotANumber { field })
}

// ---------------------------------------------------------------------------
// Request parsing
// ---------------------------------------------------------------------------

impl<'a> SourceImage<'a> {
    /// Read `width`, `height` and `data` from a host message object.
    ///
    /// Does not look at `encoding`; see [`imgmsg2rgba_with`].
    pub fn from_host(msg: &'a HostValue) -> Result<Self, ArgumentError> {
        if !matches!(msg, HostValue::Object(_)) {
            return Err(ArgumentError::NotAnObject);
        }
        let width = int32_field(msg, "width")?;
        let height = int32_field(msg, "height")?;
        let pixels = msg
            .get("data")
            .and_then(HostValue::as_buffer)
            .ok_or(ArgumentError::NotABuffer)?;
        Ok(SourceImage::new(width, height, pixels))
    }
}

fn check_encoding(msg: &HostValue) -> Result<(), ArgumentError> {
    match msg.get("encoding").and_then(HostValue::as_str) {
        Some(enc) if enc != RGB8_ENCODING => Err(ArgumentError::UnsupportedEncoding {
            encoding: enc.into(),
        }),
        _ => Ok(()),
    }
}

fn parse_request<'a>(
    args: &'a [HostValue],
    options: &ConvertOptions,
) -> Result<SourceImage<'a>, ArgumentError> {
    let [msg] = args else {
        return Err(ArgumentError::Arity { got: args.len() });
    };
    let src = SourceImage::from_host(msg)?;
    if options.get_strictness() == Strictness::Strict {
        check_encoding(msg)?;
    }
    Ok(src)
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Host entry point with default (strict) options.
pub fn imgmsg2rgba(args: &[HostValue]) -> Result<HostValue, ConvertError> {
    imgmsg2rgba_with(args, &ConvertOptions::default())
}

/// Host entry point.
///
/// Expects exactly one object argument with numeric `width` / `height` and a
/// buffer `data`. Returns `{ width, height, data }` where `data` is RGBA.
pub fn imgmsg2rgba_with(
    args: &[HostValue],
    options: &ConvertOptions,
) -> Result<HostValue, ConvertError> {
    let src = parse_request(args, options).inspect_err(|e| {
        log::debug!("imgmsg2rgba: rejecting call with {}: {e}", ArgKinds(args));
    })?;
    let out = crate::convert(&src, options)?;
    Ok(out.into())
}
