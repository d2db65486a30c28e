use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::ValueKind;

/// Identifier of a recognised codec parameter.
///
/// The set is closed: codecs only ever look up these keys. Each parameter has
/// a conventional value kind (see [`Parameter::expected_kinds`]), which is
/// documentation rather than an insertion-time check.
///
/// Names are kebab-case (`file-name-hint`) and parse case-insensitively;
/// snake-case spellings are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Parameter {
	/// Verbose mode for read and write operations.
	Verbose,
	/// Fail on malformed input instead of tolerating small problems.
	Strict,
	/// Filename used to guess the format when reading from bytes or a stream.
	#[strum(to_string = "file-name-hint", serialize = "file_name_hint", serialize = "filename")]
	FileNameHint,
	/// XMP XML document to embed when writing.
	#[strum(to_string = "xmp-xml", serialize = "xmp_xml")]
	XmpXml,
	/// Desired image format for write operations.
	Format,
	/// Factory used to allocate decoded images.
	#[strum(to_string = "buffered-image-factory", serialize = "buffered_image_factory")]
	BufferedImageFactory,
	/// Pixel density (DPI) and/or aspect ratio for write operations.
	#[strum(to_string = "pixel-density", serialize = "pixel_density")]
	PixelDensity,
	/// EXIF data, either a tag value or an encoded block.
	Exif,
}

impl Parameter {
	/// Number of parameters.
	pub const COUNT: usize = <Self as EnumCount>::COUNT;

	/// Iterates all parameters in declaration order.
	pub fn iter() -> ParameterIter {
		<Self as strum::IntoEnumIterator>::iter()
	}

	/// Dense ordinal in `0..Parameter::COUNT`.
	pub const fn index(self) -> usize {
		self as usize
	}

	/// Canonical kebab-case name.
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// Conventional value kinds, preferred first.
	pub fn expected_kinds(self) -> &'static [ValueKind] {
		match self {
			Parameter::Verbose | Parameter::Strict => &[ValueKind::Bool],
			Parameter::FileNameHint | Parameter::XmpXml => &[ValueKind::String],
			Parameter::Format => &[ValueKind::Format],
			Parameter::BufferedImageFactory => &[ValueKind::Factory],
			Parameter::PixelDensity => &[ValueKind::Density],
			Parameter::Exif => &[ValueKind::Int, ValueKind::Binary],
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Parameter::Verbose => "Turns verbose mode on or off",
			Parameter::Strict => "Whether to fail on invalid files or tolerate small problems",
			Parameter::FileNameHint => "Filename hint used to disambiguate the format of byte and stream input",
			Parameter::XmpXml => "XMP XML to embed when writing images",
			Parameter::Format => "Image format to write",
			Parameter::BufferedImageFactory => "Factory that allocates decoded images",
			Parameter::PixelDensity => "Pixel density and aspect ratio to write",
			Parameter::Exif => "EXIF data to read or write",
		}
	}
}
