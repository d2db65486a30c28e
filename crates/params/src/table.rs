//! Dense storage for parameter values.

use crate::{FromParamValue, ParamError, ParamValue, Parameter};

/// Parameter values indexed by [`Parameter::index`].
///
/// An empty slot means the parameter is absent; there is no stored "absent"
/// value. Only the builders and parameter objects of this crate hold one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParamTable {
	slots: [Option<ParamValue>; Parameter::COUNT],
}

impl Default for ParamTable {
	fn default() -> Self {
		Self { slots: std::array::from_fn(|_| None) }
	}
}

impl ParamTable {
	/// Gets a value, returning `None` if not set.
	pub(crate) fn get(&self, parameter: Parameter) -> Option<&ParamValue> {
		self.slots[parameter.index()].as_ref()
	}

	/// Reads a value as shape `T`, distinguishing absence from a shape mismatch.
	pub(crate) fn read<'a, T: FromParamValue<'a>>(&'a self, parameter: Parameter) -> Result<T, ParamError> {
		let stored = self.get(parameter).ok_or(ParamError::NotPresent { parameter })?;
		T::from_param(stored).ok_or_else(|| ParamError::WrongShape { parameter, expected: T::SHAPE, found: stored.kind() })
	}

	pub(crate) fn contains(&self, parameter: Parameter) -> bool {
		self.slots[parameter.index()].is_some()
	}

	/// Stores `value`, returning the value it replaced.
	pub(crate) fn insert(&mut self, parameter: Parameter, value: ParamValue) -> Option<ParamValue> {
		self.slots[parameter.index()].replace(value)
	}

	/// Copies every set value of `other` into this table, overwriting.
	pub(crate) fn merge(&mut self, other: &ParamTable) {
		for (slot, value) in self.slots.iter_mut().zip(&other.slots) {
			if let Some(value) = value {
				*slot = Some(value.clone());
			}
		}
	}

	pub(crate) fn len(&self) -> usize {
		self.slots.iter().filter(|v| v.is_some()).count()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.slots.iter().all(Option::is_none)
	}

	/// Iterates set parameters in declaration order.
	pub(crate) fn iter(&self) -> impl Iterator<Item = (Parameter, &ParamValue)> + '_ {
		Parameter::iter().filter_map(|p| self.get(p).map(|v| (p, v)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_replaces() {
		let mut table = ParamTable::default();
		assert_eq!(table.insert(Parameter::Exif, ParamValue::Int(21)), None);
		assert_eq!(table.insert(Parameter::Exif, ParamValue::Int(42)), Some(ParamValue::Int(21)));
		assert_eq!(table.get(Parameter::Exif), Some(&ParamValue::Int(42)));
		assert_eq!(table.len(), 1);
	}

	#[test]
	fn test_merge_overwrites_only_set_slots() {
		let mut base = ParamTable::default();
		base.insert(Parameter::Verbose, ParamValue::Bool(true));
		base.insert(Parameter::Strict, ParamValue::Bool(false));

		let mut overlay = ParamTable::default();
		overlay.insert(Parameter::Strict, ParamValue::Bool(true));
		overlay.insert(Parameter::Exif, ParamValue::Int(1));

		base.merge(&overlay);
		assert_eq!(base.get(Parameter::Verbose), Some(&ParamValue::Bool(true)));
		assert_eq!(base.get(Parameter::Strict), Some(&ParamValue::Bool(true)));
		assert_eq!(base.get(Parameter::Exif), Some(&ParamValue::Int(1)));
		assert_eq!(base.len(), 3);
	}

	#[test]
	fn test_iter_skips_empty_slots() {
		let mut table = ParamTable::default();
		assert!(table.is_empty());
		table.insert(Parameter::PixelDensity, ParamValue::Bool(false));
		table.insert(Parameter::Verbose, ParamValue::Bool(true));

		let keys: Vec<_> = table.iter().map(|(p, _)| p).collect();
		assert_eq!(keys, vec![Parameter::Verbose, Parameter::PixelDensity]);
		assert!(!table.contains(Parameter::Exif));
	}
}
