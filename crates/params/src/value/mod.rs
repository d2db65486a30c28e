use std::sync::Arc;

use imaging_values::{BinaryConstant, ImageFormat, PixelDensity, SharedImageFactory};
use strum::{Display, IntoStaticStr};

#[cfg(test)]
mod tests;

/// The value stored under a parameter.
///
/// Strings, binary constants and factories are reference-counted, so copying
/// a parameter table references the stored objects rather than duplicating
/// them.
#[derive(Debug, Clone)]
pub enum ParamValue {
	Bool(bool),
	Int(i64),
	String(Arc<str>),
	Format(ImageFormat),
	Density(PixelDensity),
	Binary(BinaryConstant),
	Factory(SharedImageFactory),
}

/// Tag of a [`ParamValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum ValueKind {
	#[strum(to_string = "bool")]
	Bool,
	#[strum(to_string = "int")]
	Int,
	#[strum(to_string = "string")]
	String,
	#[strum(to_string = "image format")]
	Format,
	#[strum(to_string = "pixel density")]
	Density,
	#[strum(to_string = "binary constant")]
	Binary,
	#[strum(to_string = "image factory")]
	Factory,
}

impl ParamValue {
	pub fn kind(&self) -> ValueKind {
		match self {
			ParamValue::Bool(_) => ValueKind::Bool,
			ParamValue::Int(_) => ValueKind::Int,
			ParamValue::String(_) => ValueKind::String,
			ParamValue::Format(_) => ValueKind::Format,
			ParamValue::Density(_) => ValueKind::Density,
			ParamValue::Binary(_) => ValueKind::Binary,
			ParamValue::Factory(_) => ValueKind::Factory,
		}
	}

	/// Whether [`kind`](Self::kind) equals `kind`.
	pub fn matches_kind(&self, kind: ValueKind) -> bool {
		self.kind() == kind
	}

	/// Kind name as used in error messages.
	pub fn type_name(&self) -> &'static str {
		self.kind().into()
	}

	/// The flag, for `Bool` values.
	pub fn as_bool(&self) -> Option<bool> {
		let ParamValue::Bool(flag) = self else { return None };
		Some(*flag)
	}

	/// The number, for `Int` values.
	pub fn as_int(&self) -> Option<i64> {
		let ParamValue::Int(number) = self else { return None };
		Some(*number)
	}

	/// Borrowed text of a `String` value.
	pub fn as_str(&self) -> Option<&str> {
		let ParamValue::String(text) = self else { return None };
		Some(text)
	}

	pub fn as_format(&self) -> Option<ImageFormat> {
		let ParamValue::Format(format) = self else { return None };
		Some(*format)
	}

	pub fn as_density(&self) -> Option<PixelDensity> {
		let ParamValue::Density(density) = self else { return None };
		Some(*density)
	}

	pub fn as_binary(&self) -> Option<&BinaryConstant> {
		let ParamValue::Binary(bytes) = self else { return None };
		Some(bytes)
	}

	pub fn as_factory(&self) -> Option<&SharedImageFactory> {
		let ParamValue::Factory(factory) = self else { return None };
		Some(factory)
	}
}

/// Factories compare by identity; every other kind compares by value.
impl PartialEq for ParamValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(ParamValue::Bool(a), ParamValue::Bool(b)) => a == b,
			(ParamValue::Int(a), ParamValue::Int(b)) => a == b,
			(ParamValue::String(a), ParamValue::String(b)) => a == b,
			(ParamValue::Format(a), ParamValue::Format(b)) => a == b,
			(ParamValue::Density(a), ParamValue::Density(b)) => a == b,
			(ParamValue::Binary(a), ParamValue::Binary(b)) => a == b,
			(ParamValue::Factory(a), ParamValue::Factory(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

/// Conversion into a storable value.
///
/// Returns `None` for the absent value, which the builder rejects. This is
/// how `Option<T>` arguments reach [`ParameterBuilder::set`](crate::ParameterBuilder::set).
pub trait IntoParamValue {
	fn into_param_value(self) -> Option<ParamValue>;
}

macro_rules! impl_into_param_value {
	($($ty:ty => |$v:ident| $body:expr),* $(,)?) => {
		$(
			impl IntoParamValue for $ty {
				fn into_param_value(self) -> Option<ParamValue> {
					let $v = self;
					Some($body)
				}
			}
		)*
	};
}

impl_into_param_value! {
	ParamValue => |v| v,
	bool => |v| ParamValue::Bool(v),
	i64 => |v| ParamValue::Int(v),
	i32 => |v| ParamValue::Int(v.into()),
	i16 => |v| ParamValue::Int(v.into()),
	u32 => |v| ParamValue::Int(v.into()),
	u16 => |v| ParamValue::Int(v.into()),
	u8 => |v| ParamValue::Int(v.into()),
	String => |v| ParamValue::String(v.into()),
	&str => |v| ParamValue::String(v.into()),
	Arc<str> => |v| ParamValue::String(v),
	ImageFormat => |v| ParamValue::Format(v),
	PixelDensity => |v| ParamValue::Density(v),
	BinaryConstant => |v| ParamValue::Binary(v),
	SharedImageFactory => |v| ParamValue::Factory(v),
}

impl<T: IntoParamValue> IntoParamValue for Option<T> {
	fn into_param_value(self) -> Option<ParamValue> {
		self.and_then(IntoParamValue::into_param_value)
	}
}

impl From<bool> for ParamValue {
	fn from(flag: bool) -> Self {
		ParamValue::Bool(flag)
	}
}

impl From<i64> for ParamValue {
	fn from(number: i64) -> Self {
		ParamValue::Int(number)
	}
}

impl From<String> for ParamValue {
	fn from(text: String) -> Self {
		ParamValue::String(Arc::from(text))
	}
}

impl From<&str> for ParamValue {
	fn from(text: &str) -> Self {
		ParamValue::String(Arc::from(text))
	}
}

// Read shapes are fixed by this crate.
mod sealed {
	pub trait Sealed {}
	impl Sealed for bool {}
	impl Sealed for i64 {}
	impl Sealed for i32 {}
	impl Sealed for u32 {}
	impl Sealed for String {}
	impl Sealed for &str {}
	impl Sealed for std::sync::Arc<str> {}
	impl Sealed for imaging_values::ImageFormat {}
	impl Sealed for imaging_values::PixelDensity {}
	impl Sealed for imaging_values::BinaryConstant {}
	impl Sealed for &imaging_values::BinaryConstant {}
	impl Sealed for imaging_values::SharedImageFactory {}
	impl Sealed for super::ParamValue {}
	impl Sealed for &super::ParamValue {}
}

/// Shape a caller expects when reading a parameter.
///
/// [`ParameterObject::value`](crate::ParameterObject::value) reports
/// [`WrongShape`](crate::ParamError::WrongShape) when `from_param` returns
/// `None`. Integer shapes narrower than `i64` fail for out-of-range values.
/// `ParamValue` itself accepts any stored value.
pub trait FromParamValue<'a>: sealed::Sealed + Sized {
	/// Name of the shape used in error messages.
	const SHAPE: &'static str;

	fn from_param(value: &'a ParamValue) -> Option<Self>;
}

impl FromParamValue<'_> for bool {
	const SHAPE: &'static str = "bool";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_bool()
	}
}

impl FromParamValue<'_> for i64 {
	const SHAPE: &'static str = "int";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_int()
	}
}

impl FromParamValue<'_> for i32 {
	const SHAPE: &'static str = "i32";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_int().and_then(|v| i32::try_from(v).ok())
	}
}

impl FromParamValue<'_> for u32 {
	const SHAPE: &'static str = "u32";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_int().and_then(|v| u32::try_from(v).ok())
	}
}

impl FromParamValue<'_> for String {
	const SHAPE: &'static str = "string";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_str().map(str::to_string)
	}
}

impl<'a> FromParamValue<'a> for &'a str {
	const SHAPE: &'static str = "string";

	fn from_param(value: &'a ParamValue) -> Option<Self> {
		value.as_str()
	}
}

impl FromParamValue<'_> for Arc<str> {
	const SHAPE: &'static str = "string";

	fn from_param(value: &ParamValue) -> Option<Self> {
		let ParamValue::String(text) = value else { return None };
		Some(Arc::clone(text))
	}
}

impl FromParamValue<'_> for ImageFormat {
	const SHAPE: &'static str = "image format";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_format()
	}
}

impl FromParamValue<'_> for PixelDensity {
	const SHAPE: &'static str = "pixel density";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_density()
	}
}

impl FromParamValue<'_> for BinaryConstant {
	const SHAPE: &'static str = "binary constant";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_binary().cloned()
	}
}

impl<'a> FromParamValue<'a> for &'a BinaryConstant {
	const SHAPE: &'static str = "binary constant";

	fn from_param(value: &'a ParamValue) -> Option<Self> {
		value.as_binary()
	}
}

impl FromParamValue<'_> for SharedImageFactory {
	const SHAPE: &'static str = "image factory";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_factory().cloned()
	}
}

impl FromParamValue<'_> for ParamValue {
	const SHAPE: &'static str = "any";

	fn from_param(value: &ParamValue) -> Option<Self> {
		Some(value.clone())
	}
}

impl<'a> FromParamValue<'a> for &'a ParamValue {
	const SHAPE: &'static str = "any";

	fn from_param(value: &'a ParamValue) -> Option<Self> {
		Some(value)
	}
}
