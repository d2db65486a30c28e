//! Fluent accumulation of parameters.

use tracing::{debug, trace};

use crate::{IntoParamValue, ParamError, ParamTable, Parameter, ParameterObject};

#[cfg(test)]
mod tests;

/// Mutable accumulator producing immutable [`ParameterObject`]s.
///
/// Setting a parameter twice keeps the last value. No shape check happens
/// here; [`ParameterObject::value`] checks the shape on read.
///
/// ```
/// use imaging_params::{Parameter, ParamError, ParameterBuilder};
///
/// let mut builder = ParameterBuilder::new();
/// builder
/// 	.set(Parameter::FileNameHint, "scan.tif")?
/// 	.set(Parameter::Strict, true)?;
/// let first = builder.get();
///
/// builder.set(Parameter::Verbose, true)?;
/// assert!(!first.is_present(Parameter::Verbose));
/// # Ok::<(), ParamError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterBuilder {
	table: ParamTable,
}

impl ParameterBuilder {
	/// Creates a builder with no parameters set.
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn from_table(table: ParamTable) -> Self {
		Self { table }
	}

	/// Sets `parameter` to `value`, replacing any earlier value.
	///
	/// Fails with [`ParamError::InvalidArgument`] if `value` is absent
	/// (`None`); the builder is left unchanged in that case.
	pub fn set(&mut self, parameter: Parameter, value: impl IntoParamValue) -> Result<&mut Self, ParamError> {
		let Some(value) = value.into_param_value() else {
			debug!(parameter = parameter.name(), "rejected absent parameter value");
			return Err(ParamError::absent(parameter));
		};
		let kind = value.kind();
		let replaced = self.table.insert(parameter, value).is_some();
		trace!(parameter = parameter.name(), %kind, replaced, "parameter set");
		Ok(self)
	}

	/// By-value form of [`set`](Self::set) for one-expression chains.
	pub fn with(mut self, parameter: Parameter, value: impl IntoParamValue) -> Result<Self, ParamError> {
		self.set(parameter, value)?;
		Ok(self)
	}

	/// Copies every parameter of `other` into this builder, overwriting.
	pub fn merge(&mut self, other: &ParameterObject) -> &mut Self {
		self.table.merge(other.table());
		self
	}

	pub fn contains(&self, parameter: Parameter) -> bool {
		self.table.contains(parameter)
	}

	/// Returns the number of parameters set so far.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Returns a snapshot of the current parameters.
	///
	/// The snapshot owns a copy of the table, so later calls to
	/// [`set`](Self::set) do not reach it. Stored strings, binary constants
	/// and factories are shared, not duplicated.
	pub fn get(&self) -> ParameterObject {
		debug!(entries = self.table.len(), "parameter object created");
		ParameterObject::from_table(self.table.clone())
	}

	/// Consumes the builder and moves its table into a snapshot.
	pub fn build(self) -> ParameterObject {
		debug!(entries = self.table.len(), "parameter object created");
		ParameterObject::from_table(self.table)
	}
}
