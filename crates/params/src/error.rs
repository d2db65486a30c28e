use thiserror::Error;

use crate::{Parameter, ValueKind};

/// Errors raised while assembling or reading a parameter object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
	/// A value handed to a builder was absent or broke a per-parameter rule.
	#[error("invalid value for parameter '{parameter}': {reason}")]
	InvalidArgument {
		parameter: Parameter,
		/// Human-readable reason for the rejection.
		reason: String,
	},

	/// The parameter is not present in the parameter object.
	#[error("parameter '{parameter}' is not present")]
	NotPresent { parameter: Parameter },

	/// The parameter is present but its value has another shape.
	#[error("type mismatch for parameter '{parameter}': expected {expected}, got {found}")]
	WrongShape {
		parameter: Parameter,
		/// Shape requested by the caller.
		expected: &'static str,
		/// Kind of the stored value.
		found: ValueKind,
	},

	/// A parameter name in configuration text is not recognised.
	#[cfg(feature = "text")]
	#[error("unknown parameter: {name}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownParameter { name: String, suggestion: Option<&'static str> },
}

impl ParamError {
	pub(crate) fn absent(parameter: Parameter) -> Self {
		ParamError::InvalidArgument { parameter, reason: "the value must not be absent".to_string() }
	}

	/// The parameter the error refers to, if any.
	pub fn parameter(&self) -> Option<Parameter> {
		match self {
			ParamError::InvalidArgument { parameter, .. } | ParamError::NotPresent { parameter } | ParamError::WrongShape { parameter, .. } => Some(*parameter),
			#[cfg(feature = "text")]
			ParamError::UnknownParameter { .. } => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parameter_of_value_errors() {
		let errors = [
			ParamError::absent(Parameter::Strict),
			ParamError::NotPresent { parameter: Parameter::Strict },
			ParamError::WrongShape { parameter: Parameter::Strict, expected: "int", found: ValueKind::Bool },
		];
		for err in errors {
			assert_eq!(err.parameter(), Some(Parameter::Strict));
		}
	}

	#[cfg(feature = "text")]
	#[test]
	fn test_unknown_parameter_has_no_parameter() {
		let err = ParamError::UnknownParameter { name: "dpi".to_string(), suggestion: None };
		assert_eq!(err.parameter(), None);
		assert_eq!(err.to_string(), "unknown parameter: dpi");
	}
}
