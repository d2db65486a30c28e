use std::sync::Arc;

/// Channel layout of an [`ImageBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
	Gray,
	GrayAlpha,
	Rgb,
	Rgba,
}

impl PixelLayout {
	/// Bytes per pixel.
	pub const fn channels(self) -> usize {
		match self {
			PixelLayout::Gray => 1,
			PixelLayout::GrayAlpha => 2,
			PixelLayout::Rgb => 3,
			PixelLayout::Rgba => 4,
		}
	}

	pub const fn has_alpha(self) -> bool {
		matches!(self, PixelLayout::GrayAlpha | PixelLayout::Rgba)
	}
}

/// Zero-initialised pixel storage handed to a decoder.
///
/// `data.len()` is always `width * height * layout.channels()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
	pub width: u32,
	pub height: u32,
	pub layout: PixelLayout,
	pub data: Vec<u8>,
}

impl ImageBuffer {
	/// Byte length of a `width` x `height` image.
	///
	/// `None` if the length exceeds what a `Vec<u8>` can hold (`isize::MAX`).
	pub fn byte_len(width: u32, height: u32, layout: PixelLayout) -> Option<usize> {
		let len = usize::try_from(width).ok()?.checked_mul(usize::try_from(height).ok()?)?.checked_mul(layout.channels())?;
		isize::try_from(len).is_ok().then_some(len)
	}

	/// Allocates a zeroed buffer of `width * height` pixels.
	///
	/// Returns `None` when [`byte_len`](Self::byte_len) does.
	pub fn zeroed(width: u32, height: u32, layout: PixelLayout) -> Option<Self> {
		let len = Self::byte_len(width, height, layout)?;
		Some(Self { width, height, layout, data: vec![0; len] })
	}
}

/// Capability used by decoders to allocate their destination image.
///
/// Implementations are shared between threads through [`SharedImageFactory`].
/// Both methods return `None` for dimensions no buffer can represent.
pub trait BufferedImageFactory: core::fmt::Debug + Send + Sync {
	fn color_image(&self, width: u32, height: u32, has_alpha: bool) -> Option<ImageBuffer>;

	fn grayscale_image(&self, width: u32, height: u32, has_alpha: bool) -> Option<ImageBuffer>;
}

/// Reference-counted factory handle as stored in parameter maps.
pub type SharedImageFactory = Arc<dyn BufferedImageFactory>;

/// Allocates plain interleaved 8-bit buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleBufferedImageFactory;

impl BufferedImageFactory for SimpleBufferedImageFactory {
	fn color_image(&self, width: u32, height: u32, has_alpha: bool) -> Option<ImageBuffer> {
		let layout = if has_alpha { PixelLayout::Rgba } else { PixelLayout::Rgb };
		ImageBuffer::zeroed(width, height, layout)
	}

	fn grayscale_image(&self, width: u32, height: u32, has_alpha: bool) -> Option<ImageBuffer> {
		let layout = if has_alpha { PixelLayout::GrayAlpha } else { PixelLayout::Gray };
		ImageBuffer::zeroed(width, height, layout)
	}
}
