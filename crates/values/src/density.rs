/// Unit the density figures are expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityUnit {
	/// Aspect ratio only, no physical unit.
	None,
	Inch,
	Centimetre,
	Metre,
}

/// Horizontal and vertical pixel density, or a bare aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelDensity {
	horizontal: f64,
	vertical: f64,
	unit: DensityUnit,
}

impl PixelDensity {
	/// Density without a physical unit; only the ratio is meaningful.
	pub const fn unitless(horizontal: f64, vertical: f64) -> Self {
		Self { horizontal, vertical, unit: DensityUnit::None }
	}

	/// Pixels per inch (DPI).
	pub const fn per_inch(horizontal: f64, vertical: f64) -> Self {
		Self { horizontal, vertical, unit: DensityUnit::Inch }
	}

	/// Pixels per centimetre.
	pub const fn per_centimetre(horizontal: f64, vertical: f64) -> Self {
		Self { horizontal, vertical, unit: DensityUnit::Centimetre }
	}

	/// Pixels per metre.
	pub const fn per_metre(horizontal: f64, vertical: f64) -> Self {
		Self { horizontal, vertical, unit: DensityUnit::Metre }
	}

	pub const fn horizontal(&self) -> f64 {
		self.horizontal
	}

	pub const fn vertical(&self) -> f64 {
		self.vertical
	}

	pub const fn unit(&self) -> DensityUnit {
		self.unit
	}

	pub fn is_unitless(&self) -> bool {
		self.unit == DensityUnit::None
	}

	pub fn is_in_inches(&self) -> bool {
		self.unit == DensityUnit::Inch
	}

	pub fn is_in_centimetres(&self) -> bool {
		self.unit == DensityUnit::Centimetre
	}

	pub fn is_in_metres(&self) -> bool {
		self.unit == DensityUnit::Metre
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_constructors_record_unit() {
		assert!(PixelDensity::unitless(1.0, 2.0).is_unitless());
		assert!(PixelDensity::per_inch(300.0, 300.0).is_in_inches());
		assert!(PixelDensity::per_centimetre(118.0, 118.0).is_in_centimetres());
		assert!(PixelDensity::per_metre(11811.0, 11811.0).is_in_metres());
	}

	#[test]
	fn test_accessors() {
		let density = PixelDensity::per_inch(72.0, 96.0);
		assert_eq!(density.horizontal(), 72.0);
		assert_eq!(density.vertical(), 96.0);
		assert_eq!(density.unit(), DensityUnit::Inch);
	}
}
