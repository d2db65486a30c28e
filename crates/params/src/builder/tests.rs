use imaging_values::ImageFormat;

use super::*;
use crate::ParamValue;

#[test]
fn test_new_builder_is_empty() {
	let builder = ParameterBuilder::new();
	assert!(builder.is_empty());
	assert_eq!(builder.len(), 0);
	assert!(builder.get().is_empty());
}

#[test]
fn test_set_chains() {
	let mut builder = ParameterBuilder::new();
	builder.set(Parameter::Verbose, true).and_then(|b| b.set(Parameter::Format, ImageFormat::Png)).expect("valid values");
	assert_eq!(builder.len(), 2);
	assert!(builder.contains(Parameter::Format));
}

#[test]
fn test_absent_value_leaves_builder_unchanged() {
	let mut builder = ParameterBuilder::new();
	builder.set(Parameter::Strict, "yes").unwrap();

	let err = builder.set(Parameter::Strict, None::<&str>).unwrap_err();
	assert!(matches!(err, ParamError::InvalidArgument { parameter: Parameter::Strict, .. }));
	assert_eq!(builder.get().raw(Parameter::Strict), Some(&ParamValue::String("yes".into())));

	let err = builder.set(Parameter::Exif, None::<i64>).unwrap_err();
	assert!(matches!(err, ParamError::InvalidArgument { .. }));
	assert!(!builder.contains(Parameter::Exif));
}

#[test]
fn test_some_value_is_accepted() {
	let mut builder = ParameterBuilder::new();
	builder.set(Parameter::Exif, Some(7_i64)).unwrap();
	assert_eq!(builder.get().value::<i64>(Parameter::Exif), Ok(7));
}

#[test]
fn test_with_consumes_and_returns() {
	let params = ParameterBuilder::new().with(Parameter::Exif, 21).and_then(|b| b.with(Parameter::Exif, 42)).unwrap().build();
	assert_eq!(params.value::<i64>(Parameter::Exif), Ok(42));
	assert_eq!(params.len(), 1);
}

#[test]
fn test_get_snapshots_are_independent() {
	let mut builder = ParameterBuilder::new();
	builder.set(Parameter::Verbose, false).unwrap();
	let first = builder.get();

	builder.set(Parameter::Verbose, true).unwrap();
	builder.set(Parameter::Strict, true).unwrap();
	let second = builder.get();

	assert_eq!(first.value::<bool>(Parameter::Verbose), Ok(false));
	assert!(!first.is_present(Parameter::Strict));
	assert_eq!(second.value::<bool>(Parameter::Verbose), Ok(true));
	assert!(second.is_present(Parameter::Strict));
}

#[test]
fn test_merge_overwrites_from_object() {
	let defaults = ParameterBuilder::new().with(Parameter::Verbose, false).and_then(|b| b.with(Parameter::Format, ImageFormat::Tiff)).unwrap().build();

	let mut builder = ParameterBuilder::new();
	builder.set(Parameter::Format, ImageFormat::Png).unwrap();
	builder.merge(&defaults);

	let params = builder.build();
	assert_eq!(params.value::<ImageFormat>(Parameter::Format), Ok(ImageFormat::Tiff));
	assert_eq!(params.value::<bool>(Parameter::Verbose), Ok(false));
}
