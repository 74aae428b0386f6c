// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

//! Expansion of the `Destination` derive: a static field table describing the
//! record plus an addressable target per declared field, both in declaration
//! order, and a `ColumnType` impl marking the type itself as a record.

use proc_macro2::TokenStream;

use crate::{
	generate::{compile_error, str_literal},
	parse::ParsedStruct,
};

pub fn expand(parsed: &ParsedStruct) -> TokenStream {
	expand_with_crate(parsed, "rowscan")
}

pub fn expand_with_crate(parsed: &ParsedStruct, crate_path: &str) -> TokenStream {
	let root = format!("::{}", crate_path);

	let mut defs = String::new();
	let mut targets = String::new();
	for field in &parsed.fields {
		let name = str_literal(&field.name);
		let tag = match &field.tag {
			Some(tag) => format!("::core::option::Option::Some({})", str_literal(tag)),
			None => String::from("::core::option::Option::None"),
		};
		// Excluded fields never reach discovery's kind check, so their
		// types are not required to implement ColumnType.
		let kind = if field.tag.as_deref().is_some_and(excluded) {
			format!("{root}::Kind::Scalar")
		} else {
			format!("<{} as {root}::ColumnType>::KIND", field.ty)
		};
		defs.push_str(&format!("{root}::FieldDef {{ name: {name}, tag: {tag}, kind: {kind} }},\n"));
		targets.push_str(&format!("&mut self.{} as &mut dyn ::core::any::Any,\n", field.ident));
	}

	let record = &parsed.name;
	let record_name = str_literal(record);
	let source = format!(
		"impl {root}::Destination for {record} {{\n\
		 	fn type_info(&self) -> &'static {root}::TypeInfo {{\n\
		 		static INFO: {root}::TypeInfo = {root}::TypeInfo {{\n\
		 			name: {record_name},\n\
		 			kind: {root}::Kind::Record,\n\
		 			fields: &[\n{defs}],\n\
		 		}};\n\
		 		&INFO\n\
		 	}}\n\
		 	fn field_targets(&mut self) -> ::std::vec::Vec<&mut dyn ::core::any::Any> {{\n\
		 		::std::vec![\n{targets}]\n\
		 	}}\n\
		 }}\n\
		 impl {root}::ColumnType for {record} {{\n\
		 	const KIND: {root}::Kind = {root}::Kind::Record;\n\
		 }}\n"
	);

	source.parse().unwrap_or_else(|_| compile_error("Destination derive produced invalid code"))
}

/// First comma-separated segment of a tag equals the exclusion marker.
fn excluded(tag: &str) -> bool {
	let first = match tag.split_once(',') {
		Some((first, _)) => first,
		None => tag,
	};
	first == "-"
}
