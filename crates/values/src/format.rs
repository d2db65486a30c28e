use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Image formats known to the codecs.
///
/// Names parse case-insensitively (`"PNG"`, `"png"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageFormat {
	Bmp,
	Dcx,
	Gif,
	Icns,
	Ico,
	Jbig2,
	Jpeg,
	Pam,
	Pbm,
	Pcx,
	Pgm,
	Png,
	Pnm,
	Ppm,
	Psd,
	Rgbe,
	Tga,
	Tiff,
	Wbmp,
	Xbm,
	Xpm,
	/// Placeholder for data whose format could not be determined.
	Unknown,
}

impl ImageFormat {
	/// Lowercase format name.
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// File extensions associated with the format, preferred one first.
	pub fn extensions(self) -> &'static [&'static str] {
		match self {
			ImageFormat::Bmp => &["bmp", "dib"],
			ImageFormat::Dcx => &["dcx"],
			ImageFormat::Gif => &["gif"],
			ImageFormat::Icns => &["icns"],
			ImageFormat::Ico => &["ico", "cur"],
			ImageFormat::Jbig2 => &["jbig2", "jb2"],
			ImageFormat::Jpeg => &["jpg", "jpeg", "jpe", "jfif"],
			ImageFormat::Pam => &["pam"],
			ImageFormat::Pbm => &["pbm"],
			ImageFormat::Pcx => &["pcx", "pcc"],
			ImageFormat::Pgm => &["pgm"],
			ImageFormat::Png => &["png"],
			ImageFormat::Pnm => &["pnm"],
			ImageFormat::Ppm => &["ppm"],
			ImageFormat::Psd => &["psd"],
			ImageFormat::Rgbe => &["hdr", "pic"],
			ImageFormat::Tga => &["tga"],
			ImageFormat::Tiff => &["tif", "tiff"],
			ImageFormat::Wbmp => &["wbmp"],
			ImageFormat::Xbm => &["xbm"],
			ImageFormat::Xpm => &["xpm"],
			ImageFormat::Unknown => &[],
		}
	}

	/// Preferred file extension, if the format has one.
	pub fn default_extension(self) -> Option<&'static str> {
		self.extensions().first().copied()
	}

	/// Looks up a format by file extension, ignoring case and a leading dot.
	pub fn from_extension(extension: &str) -> Option<Self> {
		let extension = extension.strip_prefix('.').unwrap_or(extension);
		ImageFormat::iter().find(|format| {
			format.extensions().iter().any(|known| known.eq_ignore_ascii_case(extension))
		})
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("png", ImageFormat::Png)]
	#[case("PNG", ImageFormat::Png)]
	#[case("Jpeg", ImageFormat::Jpeg)]
	#[case("tiff", ImageFormat::Tiff)]
	#[case("unknown", ImageFormat::Unknown)]
	fn test_parse_name(#[case] input: &str, #[case] expected: ImageFormat) {
		assert_eq!(ImageFormat::from_str(input).ok(), Some(expected));
	}

	#[rstest]
	#[case("jpg", Some(ImageFormat::Jpeg))]
	#[case(".JPEG", Some(ImageFormat::Jpeg))]
	#[case("tif", Some(ImageFormat::Tiff))]
	#[case("hdr", Some(ImageFormat::Rgbe))]
	#[case("docx", None)]
	#[case("", None)]
	fn test_from_extension(#[case] input: &str, #[case] expected: Option<ImageFormat>) {
		assert_eq!(ImageFormat::from_extension(input), expected);
	}

	#[test]
	fn test_display_round_trips_through_parse() {
		for format in ImageFormat::iter() {
			assert_eq!(ImageFormat::from_str(&format.to_string()).ok(), Some(format));
			assert_eq!(format.name(), format.to_string());
		}
	}

	#[test]
	fn test_every_known_format_has_extension() {
		for format in ImageFormat::iter().filter(|f| *f != ImageFormat::Unknown) {
			assert!(format.default_extension().is_some(), "{format} has no extension");
		}
		assert_eq!(ImageFormat::Unknown.default_extension(), None);
	}
}
