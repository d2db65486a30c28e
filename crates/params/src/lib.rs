//! Parameter objects for image codecs.
//!
//! Callers collect named settings (verbose mode, strict parsing, filename
//! hint, target format, ...) into a [`ParameterBuilder`] and hand the
//! resulting immutable [`ParameterObject`] to a codec. The codec asks whether
//! a parameter is present and reads it back under the shape it expects:
//!
//! ```
//! use imaging_params::{Parameter, ParamError, ParameterObject};
//!
//! let params = ParameterObject::builder()
//! 	.with(Parameter::Exif, 21)?
//! 	.with(Parameter::Strict, true)?
//! 	.build();
//!
//! assert_eq!(params.value::<i64>(Parameter::Exif)?, 21);
//! assert!(params.value_or(Parameter::Verbose, false).is_ok());
//! assert!(!params.is_present(Parameter::PixelDensity));
//! # Ok::<(), ParamError>(())
//! ```
//!
//! Absence is a first-class state: a parameter that was never set is not
//! present, which is different from one explicitly set to `false`. Defaults
//! are the codec's business.
//!
//! The storage behind builders and parameter objects is internal. Objects
//! are only made through a builder, so the following will fail to compile:
//!
//! ```compile_fail
//! # use imaging_params::ParamTable;
//! let table = ParamTable::default();
//! ```
//!
//! This crate also carries the earlier prototypes of the same idea behind
//! Cargo features: per-type accessors (`typed-accessors`) and a mutable
//! field-per-parameter holder (`field-holder`). The `text` feature parses
//! parameter names and values from configuration strings.

mod builder;
mod error;
#[cfg(feature = "field-holder")]
pub mod holder;
mod object;
mod parameter;
#[cfg(feature = "typed-accessors")]
pub mod specialized;
mod table;
#[cfg(feature = "text")]
pub mod text;
mod value;

use table::ParamTable;

pub use builder::ParameterBuilder;
pub use error::ParamError;
pub use imaging_values as values;
pub use object::ParameterObject;
pub use parameter::Parameter;
pub use value::{FromParamValue, IntoParamValue, ParamValue, ValueKind};
