//! Immutable parameter objects read by codecs.

use crate::{FromParamValue, ParamError, ParamTable, ParamValue, Parameter, ParameterBuilder};


/// Immutable set of parameters produced by a [`ParameterBuilder`].
///
/// Nothing mutates a parameter object after construction, so it can be
/// shared freely between threads. Stored values are reference-counted and
/// treated as immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterObject {
	table: ParamTable,
}

impl ParameterObject {
	/// Returns a fresh, empty builder.
	pub fn builder() -> ParameterBuilder {
		ParameterBuilder::new()
	}

	pub(crate) fn from_table(table: ParamTable) -> Self {
		Self { table }
	}

	pub(crate) fn table(&self) -> &ParamTable {
		&self.table
	}

	/// Returns a builder preloaded with this object's parameters.
	///
	/// The builder works on a copy; this object is unaffected.
	pub fn to_builder(&self) -> ParameterBuilder {
		ParameterBuilder::from_table(self.table.clone())
	}

	/// Returns `true` if a value is stored for `parameter`.
	pub fn is_present(&self, parameter: Parameter) -> bool {
		self.table.contains(parameter)
	}

	/// Reads `parameter` as shape `T`.
	///
	/// # Errors
	///
	/// * [`ParamError::NotPresent`] if nothing is stored for `parameter`.
	/// * [`ParamError::WrongShape`] if the stored value cannot be read as `T`.
	pub fn value<'a, T: FromParamValue<'a>>(&'a self, parameter: Parameter) -> Result<T, ParamError> {
		self.table.read(parameter)
	}

	/// Reads `parameter` as shape `T`, or returns `default` if it is absent.
	///
	/// A present value of the wrong shape is still an error.
	pub fn value_or<'a, T: FromParamValue<'a>>(&'a self, parameter: Parameter, default: T) -> Result<T, ParamError> {
		match self.value(parameter) {
			Err(ParamError::NotPresent { .. }) => Ok(default),
			other => other,
		}
	}

	/// Reads `parameter` as shape `T`, mapping absence to `None`.
	pub fn optional<'a, T: FromParamValue<'a>>(&'a self, parameter: Parameter) -> Result<Option<T>, ParamError> {
		match self.value(parameter) {
			Ok(value) => Ok(Some(value)),
			Err(ParamError::NotPresent { .. }) => Ok(None),
			Err(err) => Err(err),
		}
	}

	/// Gets the stored value without a shape check.
	pub fn raw(&self, parameter: Parameter) -> Option<&ParamValue> {
		self.table.get(parameter)
	}

	/// Iterates the stored parameters. The order is not part of the contract.
	pub fn iter(&self) -> impl Iterator<Item = (Parameter, &ParamValue)> + '_ {
		self.table.iter()
	}

	/// Iterates the parameters that are present.
	pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
		self.table.iter().map(|(parameter, _)| parameter)
	}

	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}

impl<'a> IntoIterator for &'a ParameterObject {
	type Item = (Parameter, &'a ParamValue);
	type IntoIter = Box<dyn Iterator<Item = (Parameter, &'a ParamValue)> + 'a>;

	fn into_iter(self) -> Self::IntoIter {
		Box::new(self.iter())
	}
}
