//! Parameter objects with one accessor per value type.
//!
//! Unlike the generic [`ParameterBuilder`](crate::ParameterBuilder), setters
//! here fix the stored kind and may enforce per-kind rules: binary constants
//! must not be empty.

use imaging_values::BinaryConstant;
use tracing::{debug, trace};

use crate::{ParamError, ParamTable, ParamValue, Parameter, ParameterObject};


/// Builder for [`TypedParameters`].
#[derive(Debug, Clone, Default)]
pub struct TypedParameterBuilder {
	table: ParamTable,
}

impl TypedParameterBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	fn store(&mut self, parameter: Parameter, value: ParamValue) -> &mut Self {
		let kind = value.kind();
		let replaced = self.table.insert(parameter, value).is_some();
		trace!(parameter = parameter.name(), %kind, replaced, "typed parameter set");
		self
	}

	pub fn set_int(&mut self, parameter: Parameter, value: i64) -> &mut Self {
		self.store(parameter, ParamValue::Int(value))
	}

	pub fn set_bool(&mut self, parameter: Parameter, value: bool) -> &mut Self {
		self.store(parameter, ParamValue::Bool(value))
	}

	pub fn set_string(&mut self, parameter: Parameter, value: impl Into<String>) -> &mut Self {
		let value: String = value.into();
		self.store(parameter, ParamValue::from(value))
	}

	/// Stores a binary constant.
	///
	/// Fails with [`ParamError::InvalidArgument`] for a zero-length constant,
	/// leaving the builder unchanged.
	pub fn set_binary_constant(&mut self, parameter: Parameter, value: BinaryConstant) -> Result<&mut Self, ParamError> {
		if value.is_empty() {
			debug!(parameter = parameter.name(), "rejected empty binary constant");
			return Err(ParamError::InvalidArgument { parameter, reason: "the size of the binary constant must be > 0".to_string() });
		}
		Ok(self.store(parameter, ParamValue::Binary(value)))
	}

	/// Returns a snapshot of the current parameters.
	pub fn get(&self) -> TypedParameters {
		TypedParameters { table: self.table.clone() }
	}

	pub fn build(self) -> TypedParameters {
		TypedParameters { table: self.table }
	}
}

/// Immutable parameter set read through per-type getters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedParameters {
	table: ParamTable,
}

impl TypedParameters {
	pub fn builder() -> TypedParameterBuilder {
		TypedParameterBuilder::new()
	}

	pub fn is_present(&self, parameter: Parameter) -> bool {
		self.table.contains(parameter)
	}

	pub fn get_int(&self, parameter: Parameter) -> Result<i64, ParamError> {
		self.table.read(parameter)
	}

	pub fn get_bool(&self, parameter: Parameter) -> Result<bool, ParamError> {
		self.table.read(parameter)
	}

	pub fn get_str(&self, parameter: Parameter) -> Result<&str, ParamError> {
		self.table.read(parameter)
	}

	pub fn get_binary_constant(&self, parameter: Parameter) -> Result<&BinaryConstant, ParamError> {
		self.table.read(parameter)
	}
}

impl From<TypedParameters> for ParameterObject {
	fn from(params: TypedParameters) -> Self {
		ParameterObject::from_table(params.table)
	}
}
