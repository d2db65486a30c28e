use std::sync::Arc;

#[cfg(test)]
mod tests;

/// `JFIF\0`, the APP0 identifier of a JFIF JPEG stream.
pub const JFIF0_SIGNATURE: &[u8] = &[0x4A, 0x46, 0x49, 0x46, 0x00];
/// `JFIF ` with a trailing space, written by some encoders instead of the NUL.
pub const JFIF0_SIGNATURE_ALTERNATIVE: &[u8] = &[0x4A, 0x46, 0x49, 0x46, 0x20];
/// `Exif\0\0`, the APP1 identifier of an EXIF segment.
pub const EXIF_IDENTIFIER_CODE: &[u8] = &[0x45, 0x78, 0x69, 0x66, 0x00, 0x00];
/// Eight-byte PNG file signature.
pub const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Immutable byte string.
///
/// Clones share the underlying bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BinaryConstant {
	bytes: Arc<[u8]>,
}

impl BinaryConstant {
	/// Creates a constant holding a copy of `bytes`.
	pub fn new(bytes: &[u8]) -> Self {
		Self { bytes: Arc::from(bytes) }
	}

	/// Number of bytes in the constant.
	pub fn size(&self) -> usize {
		self.bytes.len()
	}

	/// Returns `true` if the constant holds no bytes.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Returns the byte at `index`, or `None` past the end.
	pub fn get(&self, index: usize) -> Option<u8> {
		self.bytes.get(index).copied()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Returns `true` if `data` starts with this constant.
	pub fn matches(&self, data: &[u8]) -> bool {
		data.starts_with(&self.bytes)
	}
}

impl AsRef<[u8]> for BinaryConstant {
	fn as_ref(&self) -> &[u8] {
		&self.bytes
	}
}

impl From<&[u8]> for BinaryConstant {
	fn from(bytes: &[u8]) -> Self {
		Self::new(bytes)
	}
}

impl<const N: usize> From<&[u8; N]> for BinaryConstant {
	fn from(bytes: &[u8; N]) -> Self {
		Self::new(bytes)
	}
}

impl From<Vec<u8>> for BinaryConstant {
	fn from(bytes: Vec<u8>) -> Self {
		Self { bytes: Arc::from(bytes) }
	}
}

impl core::fmt::Debug for BinaryConstant {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str("BinaryConstant(")?;
		for byte in self.bytes.iter() {
			write!(f, "{byte:02x}")?;
		}
		f.write_str(")")
	}
}
