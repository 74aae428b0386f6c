// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

use std::any::Any;

use super::Kind;

/// Marker for types that may appear as record fields.
///
/// The associated kind is captured into the generated [`FieldDef`] table and
/// is what layout discovery uses to recognize nested records. The derive adds
/// a [`Kind::Record`] impl for every derived record type; `Option` and `Box`
/// propagate the kind of their payload, so `R`, `Box<R>` and `Option<Box<R>>`
/// are all nested records for a derived `R`.
///
/// [`FieldDef`]: super::FieldDef
pub trait ColumnType: Any {
	const KIND: Kind = Kind::Scalar;
}

impl<T: ColumnType> ColumnType for Option<T> {
	const KIND: Kind = T::KIND;
}

impl<T: ColumnType> ColumnType for Box<T> {
	const KIND: Kind = T::KIND;
}
