//! Parameters from configuration text.
//!
//! Settings loaded from a config file arrive as `name = value` strings. The
//! name resolves to a [`Parameter`]; the value is parsed according to the
//! parameter's conventional kind.

use std::str::FromStr;

use imaging_values::ImageFormat;
use tracing::debug;

use crate::{ParamError, ParamValue, Parameter, ParameterBuilder, ValueKind};


/// Resolves a parameter name, suggesting a close match when unknown.
pub fn resolve_parameter(name: &str) -> Result<Parameter, ParamError> {
	Parameter::from_str(name.trim()).map_err(|_| ParamError::UnknownParameter { name: name.to_string(), suggestion: suggest_parameter(name) })
}

/// Closest canonical name within three edits of `name`.
pub fn suggest_parameter(name: &str) -> Option<&'static str> {
	let name = name.trim().to_lowercase().replace('_', "-");
	Parameter::iter().map(Parameter::name).min_by_key(|known| strsim::levenshtein(&name, known)).filter(|known| strsim::levenshtein(&name, known) <= 3)
}

/// Parses `text` into a value for `parameter`.
///
/// Uses the first of [`Parameter::expected_kinds`] that has a text form.
pub fn parse_value(parameter: Parameter, text: &str) -> Result<ParamValue, ParamError> {
	let kinds = parameter.expected_kinds();
	let Some(kind) = kinds.iter().copied().find(|kind| has_text_form(*kind)) else {
		return Err(ParamError::InvalidArgument { parameter, reason: format!("{} values cannot be given as text", kinds[0]) });
	};
	parse_value_for_kind(text, kind).map_err(|reason| ParamError::InvalidArgument { parameter, reason })
}

fn has_text_form(kind: ValueKind) -> bool {
	matches!(kind, ValueKind::Bool | ValueKind::Int | ValueKind::String | ValueKind::Format)
}

/// Parses `text` as a value of a known kind.
pub fn parse_value_for_kind(text: &str, kind: ValueKind) -> Result<ParamValue, String> {
	match kind {
		ValueKind::Bool => parse_bool(text).map(ParamValue::Bool),
		ValueKind::Int => parse_int(text).map(ParamValue::Int),
		ValueKind::String => Ok(ParamValue::from(text)),
		ValueKind::Format => parse_format(text).map(ParamValue::Format),
		ValueKind::Density | ValueKind::Binary | ValueKind::Factory => Err(format!("{kind} values cannot be given as text")),
	}
}

const TRUE_WORDS: [&str; 4] = ["true", "yes", "on", "1"];
const FALSE_WORDS: [&str; 4] = ["false", "no", "off", "0"];

/// Reads a switch. Surrounding whitespace and letter case are ignored.
pub fn parse_bool(text: &str) -> Result<bool, String> {
	let word = text.trim();
	if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
		Ok(true)
	} else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
		Ok(false)
	} else {
		Err(format!("'{text}' is not a switch; use one of {} or {}", TRUE_WORDS.join("/"), FALSE_WORDS.join("/")))
	}
}

/// Reads a signed decimal number, ignoring surrounding whitespace.
pub fn parse_int(text: &str) -> Result<i64, String> {
	text.trim().parse().map_err(|err| format!("'{text}' is not a whole number: {err}"))
}

/// Reads an image format by name, ignoring case.
pub fn parse_format(text: &str) -> Result<ImageFormat, String> {
	ImageFormat::from_str(text.trim()).map_err(|_| format!("unknown image format: '{text}'"))
}

impl ParameterBuilder {
	/// Sets a parameter from its name and textual value.
	///
	/// Fails with [`ParamError::UnknownParameter`] for an unrecognised name
	/// and [`ParamError::InvalidArgument`] for unparseable text. The builder
	/// is unchanged on failure.
	pub fn set_text(&mut self, name: &str, text: &str) -> Result<&mut Self, ParamError> {
		let parameter = resolve_parameter(name).inspect_err(|_| debug!(name, "unknown parameter name"))?;
		let value = parse_value(parameter, text)?;
		self.set(parameter, value)
	}

	/// Builds from `(name, value)` text pairs, later pairs winning.
	pub fn from_text_pairs<'a, I>(pairs: I) -> Result<Self, ParamError>
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut builder = Self::new();
		for (name, text) in pairs {
			builder.set_text(name, text)?;
		}
		Ok(builder)
	}
}
