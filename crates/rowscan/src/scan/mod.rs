// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

//! The row scanner: resolves reported columns to addressable fields on the
//! supplied destination records and delegates one-row population to the
//! [`RowSource`].

use std::any::Any;

use tracing::debug;

use crate::{
	error::{Result, ScanError, SourceError},
	layout::LayoutCache,
	record::Destination,
};

/// One resolved scan target: the position of the column in the reported
/// column list and the addressable field it landed in.
pub struct ScanTarget<'a> {
	pub column: usize,
	pub value: &'a mut dyn Any,
}

impl ScanTarget<'_> {
	/// Writes `value` into the target. Returns `false` when the field's
	/// type differs from `T`, leaving the field untouched.
	pub fn set<T: 'static>(&mut self, value: T) -> bool {
		match self.value.downcast_mut::<T>() {
			Some(slot) => {
				*slot = value;
				true
			}
			None => false,
		}
	}
}

/// Capability over query results, one row at a time.
///
/// Implementations own query execution, iteration and value conversion; the
/// scanner only asks three things of them.
pub trait RowSource {
	/// Prior failure state of the source. A failed source rejects the
	/// scan before any column resolution happens.
	fn check(&self) -> std::result::Result<(), SourceError>;

	/// Ordered column names of the current result set.
	fn columns(&self) -> std::result::Result<Vec<String>, SourceError>;

	/// Populates the resolved targets with the current row's values. Each
	/// target carries the index of its column in the list reported by
	/// [`columns`](RowSource::columns); columns without a target were left
	/// unresolved and must be skipped.
	fn populate(&mut self, targets: &mut [ScanTarget<'_>]) -> std::result::Result<(), SourceError>;
}

/// Scans rows into destination records, resolving columns through a shared
/// [`LayoutCache`].
pub struct Scanner {
	layouts: LayoutCache,
}

impl Scanner {
	pub fn new() -> Self {
		Self {
			layouts: LayoutCache::new(),
		}
	}

	/// A scanner resolving through an existing, possibly shared cache.
	pub fn with_cache(layouts: LayoutCache) -> Self {
		Self {
			layouts,
		}
	}

	pub fn cache(&self) -> &LayoutCache {
		&self.layouts
	}

	/// Scans one row into `destination`.
	pub fn scan_one(&self, rows: &mut dyn RowSource, destination: &mut dyn Destination) -> Result<()> {
		self.scan(rows, &mut [destination])
	}

	/// Scans one row into the supplied destinations.
	///
	/// Each reported column binds to the first destination, in caller
	/// order, whose layout declares it; remaining destinations are not
	/// consulted for that column. Columns no destination declares resolve
	/// to nothing and are skipped by the source. A column whose field was
	/// already claimed by an earlier duplicate column is also skipped:
	/// a field is addressable at most once per scan.
	///
	/// Layouts for all destinations are resolved up front; any
	/// non-record destination fails the whole scan before population.
	pub fn scan(&self, rows: &mut dyn RowSource, destinations: &mut [&mut dyn Destination]) -> Result<()> {
		rows.check().map_err(|cause| ScanError::Source {
			cause,
		})?;
		let columns = rows.columns().map_err(|cause| ScanError::Source {
			cause,
		})?;

		let mut layouts = Vec::with_capacity(destinations.len());
		for destination in destinations.iter() {
			layouts.push(self.layouts.get(&**destination)?);
		}

		let mut slots: Vec<Vec<Option<&mut dyn Any>>> = Vec::with_capacity(destinations.len());
		for destination in destinations.iter_mut() {
			slots.push(destination.field_targets().into_iter().map(Some).collect());
		}

		let mut targets = Vec::with_capacity(columns.len());
		for (position, column) in columns.iter().enumerate() {
			let mut claimed = false;
			for (layout, slots) in layouts.iter().zip(slots.iter_mut()) {
				let Some(descriptor) = layout.field(column) else {
					continue;
				};
				if let Some(value) = slots.get_mut(descriptor.index).and_then(Option::take) {
					targets.push(ScanTarget {
						column: position,
						value,
					});
					claimed = true;
				}
				// First declaring destination wins, claimed or not.
				break;
			}
			if !claimed {
				debug!(column = column.as_str(), "column resolved to no destination field");
			}
		}

		rows.populate(&mut targets).map_err(|cause| ScanError::Populate {
			cause,
		})
	}
}

impl Default for Scanner {
	fn default() -> Self {
		Self::new()
	}
}
