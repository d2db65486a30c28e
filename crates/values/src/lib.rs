//! Value shapes stored under imaging parameters.
//!
//! Codecs interpret these values; the parameter container only stores them.

/// Immutable byte strings such as format signatures.
pub mod binary;
/// Pixel density records.
pub mod density;
/// Buffered-image factory capability.
pub mod factory;
/// Known image formats.
pub mod format;

pub use binary::BinaryConstant;
pub use density::{DensityUnit, PixelDensity};
pub use factory::{BufferedImageFactory, ImageBuffer, PixelLayout, SharedImageFactory, SimpleBufferedImageFactory};
pub use format::ImageFormat;
