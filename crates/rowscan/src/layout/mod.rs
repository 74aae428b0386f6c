// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

//! Per-type column layouts: which resolved column name binds which declared
//! field. Built once per record type, then shared read-only.

mod cache;

use std::{collections::HashMap, ops::Deref, sync::Arc};

pub use cache::LayoutCache;

use crate::{
	error::{Result, ScanError},
	record::{FieldDef, Kind, TypeInfo},
};

/// One declared field and the column name it binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
	/// Column name after applying the annotation rules.
	pub column: &'static str,
	/// Declared field name.
	pub field: &'static str,
	/// Position of the field in the record's declaration order.
	pub index: usize,
}

#[derive(Debug, Clone)]
pub struct RecordLayout(Arc<RecordLayoutInner>);

impl Deref for RecordLayout {
	type Target = RecordLayoutInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[derive(Debug)]
pub struct RecordLayoutInner {
	/// Name of the record type this layout was built from.
	pub record: &'static str,
	fields: HashMap<&'static str, FieldDescriptor>,
}

impl RecordLayout {
	/// Builds the layout for a record type descriptor.
	///
	/// Fields are visited in declaration order. Nested-record fields and
	/// fields excluded by their annotation are omitted; when two fields
	/// resolve to the same column name the later one wins.
	pub fn discover(info: &'static TypeInfo) -> Result<Self> {
		if info.kind != Kind::Record {
			return Err(ScanError::InvalidDestination {
				type_name: info.name,
				kind: info.kind,
			});
		}

		let mut fields = HashMap::with_capacity(info.fields.len());
		for (index, field) in info.fields.iter().enumerate() {
			if field.kind == Kind::Record {
				// Nested records are not flattened.
				continue;
			}
			let Some(column) = resolved_column(field) else {
				continue;
			};
			fields.insert(
				column,
				FieldDescriptor {
					column,
					field: field.name,
					index,
				},
			);
		}

		Ok(Self(Arc::new(RecordLayoutInner {
			record: info.name,
			fields,
		})))
	}
}

impl RecordLayoutInner {
	/// The field bound to `column`, if any.
	pub fn field(&self, column: &str) -> Option<&FieldDescriptor> {
		self.fields.get(column)
	}

	/// Number of bindable columns.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
		self.fields.values()
	}
}

/// Column name a field binds to, or `None` when the field is excluded.
///
/// Only the first comma-separated segment of the annotation is interpreted:
/// `-` excludes the field, an empty segment falls back to the declared field
/// name, anything else is the literal column name.
fn resolved_column(field: &'static FieldDef) -> Option<&'static str> {
	let Some(tag) = field.tag else {
		return Some(field.name);
	};
	let first = match tag.split_once(',') {
		Some((first, _)) => first,
		None => tag,
	};
	match first {
		"-" => None,
		"" => Some(field.name),
		column => Some(column),
	}
}
