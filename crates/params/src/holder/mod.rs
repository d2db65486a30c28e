//! Mutable field-per-parameter holder.
//!
//! [`ImagingParameters`] has one field per parameter shared by all formats.
//! There are two kinds of parameters:
//!
//! * Toggles with a default (`verbose`, `strict`). They are always readable
//!   and are switched with `enable_*` / `disable_*`.
//! * Optional values without a default. Nothing is present until a setter
//!   is called; until then `is_*_present` returns `false` and the getter
//!   fails with [`ParamError::NotPresent`].

use imaging_values::{ImageFormat, PixelDensity, SharedImageFactory};

use crate::{ParamError, ParamTable, ParamValue, Parameter, ParameterObject};


fn required<T>(value: Option<T>, parameter: Parameter) -> Result<T, ParamError> {
	value.ok_or(ParamError::NotPresent { parameter })
}

/// Parameters common to every image format.
#[derive(Debug, Clone, Default)]
pub struct ImagingParameters {
	verbose: bool,
	strict: bool,
	file_name_hint: Option<String>,
	xmp_xml: Option<String>,
	image_format: Option<ImageFormat>,
	buffered_image_factory: Option<SharedImageFactory>,
	pixel_density: Option<PixelDensity>,
}

impl ImagingParameters {
	/// Verbose and strict disabled, nothing else present.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether verbose mode is on. Defaults to `false`.
	pub fn is_verbose(&self) -> bool {
		self.verbose
	}

	pub fn enable_verbose(&mut self) {
		self.verbose = true;
	}

	pub fn disable_verbose(&mut self) {
		self.verbose = false;
	}

	/// Whether invalid files are rejected rather than tolerated. Defaults to
	/// `false`.
	pub fn is_strict(&self) -> bool {
		self.strict
	}

	pub fn enable_strict(&mut self) {
		self.strict = true;
	}

	pub fn disable_strict(&mut self) {
		self.strict = false;
	}

	pub fn is_file_name_hint_present(&self) -> bool {
		self.file_name_hint.is_some()
	}

	/// Filename used to guess the format of byte or stream input.
	pub fn file_name_hint(&self) -> Result<&str, ParamError> {
		required(self.file_name_hint.as_deref(), Parameter::FileNameHint)
	}

	pub fn set_file_name_hint(&mut self, value: impl Into<String>) {
		self.file_name_hint = Some(value.into());
	}

	pub fn is_xmp_xml_present(&self) -> bool {
		self.xmp_xml.is_some()
	}

	/// XMP XML to embed. Only used when writing.
	pub fn xmp_xml(&self) -> Result<&str, ParamError> {
		required(self.xmp_xml.as_deref(), Parameter::XmpXml)
	}

	pub fn set_xmp_xml(&mut self, value: impl Into<String>) {
		self.xmp_xml = Some(value.into());
	}

	pub fn is_image_format_present(&self) -> bool {
		self.image_format.is_some()
	}

	/// Format to write.
	pub fn image_format(&self) -> Result<ImageFormat, ParamError> {
		required(self.image_format, Parameter::Format)
	}

	pub fn set_image_format(&mut self, value: ImageFormat) {
		self.image_format = Some(value);
	}

	pub fn is_buffered_image_factory_present(&self) -> bool {
		self.buffered_image_factory.is_some()
	}

	pub fn buffered_image_factory(&self) -> Result<&SharedImageFactory, ParamError> {
		required(self.buffered_image_factory.as_ref(), Parameter::BufferedImageFactory)
	}

	pub fn set_buffered_image_factory(&mut self, value: SharedImageFactory) {
		self.buffered_image_factory = Some(value);
	}

	pub fn is_pixel_density_present(&self) -> bool {
		self.pixel_density.is_some()
	}

	/// Density (DPI) and/or aspect ratio to write.
	pub fn pixel_density(&self) -> Result<PixelDensity, ParamError> {
		required(self.pixel_density, Parameter::PixelDensity)
	}

	pub fn set_pixel_density(&mut self, value: PixelDensity) {
		self.pixel_density = Some(value);
	}
}

/// The toggles are always present; optional values only when set.
impl From<&ImagingParameters> for ParameterObject {
	fn from(holder: &ImagingParameters) -> Self {
		let mut table = ParamTable::default();
		table.insert(Parameter::Verbose, ParamValue::Bool(holder.verbose));
		table.insert(Parameter::Strict, ParamValue::Bool(holder.strict));
		if let Some(hint) = &holder.file_name_hint {
			table.insert(Parameter::FileNameHint, ParamValue::from(hint.as_str()));
		}
		if let Some(xmp) = &holder.xmp_xml {
			table.insert(Parameter::XmpXml, ParamValue::from(xmp.as_str()));
		}
		if let Some(format) = holder.image_format {
			table.insert(Parameter::Format, ParamValue::Format(format));
		}
		if let Some(factory) = &holder.buffered_image_factory {
			table.insert(Parameter::BufferedImageFactory, ParamValue::Factory(factory.clone()));
		}
		if let Some(density) = holder.pixel_density {
			table.insert(Parameter::PixelDensity, ParamValue::Density(density));
		}
		ParameterObject::from_table(table)
	}
}

/// Reads the holder's fields back from a parameter object.
///
/// Absent toggles fall back to `false`; a stored value of the wrong shape is
/// an error.
impl TryFrom<&ParameterObject> for ImagingParameters {
	type Error = ParamError;

	fn try_from(params: &ParameterObject) -> Result<Self, Self::Error> {
		Ok(Self {
			verbose: params.value_or(Parameter::Verbose, false)?,
			strict: params.value_or(Parameter::Strict, false)?,
			file_name_hint: params.optional(Parameter::FileNameHint)?,
			xmp_xml: params.optional(Parameter::XmpXml)?,
			image_format: params.optional(Parameter::Format)?,
			buffered_image_factory: params.optional(Parameter::BufferedImageFactory)?,
			pixel_density: params.optional(Parameter::PixelDensity)?,
		})
	}
}
