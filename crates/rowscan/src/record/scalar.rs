// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

use super::{ColumnType, Destination, Kind, TypeInfo};

// Scalars are bindable as fields and rejectable as destinations.
macro_rules! impl_scalar {
	($($ty:ty => $name:literal),* $(,)?) => {
		$(
			impl ColumnType for $ty {}

			impl Destination for $ty {
				fn type_info(&self) -> &'static TypeInfo {
					static INFO: TypeInfo = TypeInfo {
						name: $name,
						kind: Kind::Scalar,
						fields: &[],
					};
					&INFO
				}
			}
		)*
	};
}

impl_scalar!(
	bool => "bool",
	i8 => "i8",
	i16 => "i16",
	i32 => "i32",
	i64 => "i64",
	i128 => "i128",
	u8 => "u8",
	u16 => "u16",
	u32 => "u32",
	u64 => "u64",
	u128 => "u128",
	f32 => "f32",
	f64 => "f64",
	String => "String",
	Vec<u8> => "Vec<u8>",
);
