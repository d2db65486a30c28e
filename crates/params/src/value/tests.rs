use std::sync::Arc;

use imaging_values::{BinaryConstant, ImageFormat, PixelDensity, SimpleBufferedImageFactory};

use super::*;

#[test]
fn test_kind_and_type_name() {
	assert_eq!(ParamValue::Bool(true).kind(), ValueKind::Bool);
	assert_eq!(ParamValue::from("yes").kind(), ValueKind::String);
	assert_eq!(ParamValue::Format(ImageFormat::Png).type_name(), "image format");
	assert!(ParamValue::Int(3).matches_kind(ValueKind::Int));
	assert!(!ParamValue::Int(3).matches_kind(ValueKind::Bool));
}

#[test]
fn test_accessors_reject_other_variants() {
	let value = ParamValue::Int(21);
	assert_eq!(value.as_int(), Some(21));
	assert_eq!(value.as_bool(), None);
	assert_eq!(value.as_str(), None);
	assert!(value.as_binary().is_none());
	assert!(value.as_factory().is_none());
}

#[test]
fn test_accessors_return_their_own_variant() {
	let density = PixelDensity::per_inch(300.0, 300.0);
	let exif = BinaryConstant::new(&[0x45, 0x78]);
	let factory: SharedImageFactory = Arc::new(SimpleBufferedImageFactory);
	assert_eq!(ParamValue::from(true).as_bool(), Some(true));
	assert_eq!(ParamValue::from(-7_i64).as_int(), Some(-7));
	assert_eq!(ParamValue::from("photo.jpg").as_str(), Some("photo.jpg"));
	assert_eq!(ParamValue::Format(ImageFormat::Tiff).as_format(), Some(ImageFormat::Tiff));
	assert_eq!(ParamValue::Density(density).as_density(), Some(density));
	assert_eq!(ParamValue::Binary(exif.clone()).as_binary(), Some(&exif));
	assert!(ParamValue::Factory(factory.clone()).as_factory().is_some_and(|stored| Arc::ptr_eq(stored, &factory)));
}

#[test]
fn test_absent_converts_to_none() {
	assert_eq!(None::<bool>.into_param_value(), None);
	assert_eq!(Some(4_u8).into_param_value(), Some(ParamValue::Int(4)));
	assert_eq!(Some("hint.png").into_param_value(), Some(ParamValue::String("hint.png".into())));
}

#[test]
fn test_factories_compare_by_identity() {
	let a: SharedImageFactory = Arc::new(SimpleBufferedImageFactory);
	let b: SharedImageFactory = Arc::new(SimpleBufferedImageFactory);
	assert_eq!(ParamValue::Factory(a.clone()), ParamValue::Factory(a.clone()));
	assert_ne!(ParamValue::Factory(a), ParamValue::Factory(b));
}

#[test]
fn test_narrow_integer_shapes_are_range_checked() {
	let big = ParamValue::Int(i64::from(i32::MAX) + 1);
	assert_eq!(i64::from_param(&big), Some(i64::from(i32::MAX) + 1));
	assert_eq!(i32::from_param(&big), None);
	assert_eq!(u32::from_param(&ParamValue::Int(-1)), None);
	assert_eq!(u32::from_param(&ParamValue::Int(7)), Some(7));
}

#[test]
fn test_borrowed_shapes() {
	let text = ParamValue::from("<x:xmpmeta/>");
	let binary = ParamValue::Binary(BinaryConstant::from(&[1, 2, 3]));
	assert_eq!(<&str>::from_param(&text), Some("<x:xmpmeta/>"));
	assert_eq!(<&BinaryConstant>::from_param(&binary).map(BinaryConstant::size), Some(3));
	assert!(<&str>::from_param(&binary).is_none());
}

#[test]
fn test_any_shape_accepts_everything() {
	let density = ParamValue::Density(PixelDensity::per_inch(300.0, 300.0));
	assert_eq!(ParamValue::from_param(&density), Some(density.clone()));
	assert!(<&ParamValue>::from_param(&density).is_some());
}
