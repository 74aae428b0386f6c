// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

//! Implementation for the rowscan derive macros.
//!
//! This crate provides the implementation logic used by the proc-macro crate.
//! It's not intended for direct use - use `rowscan-derive`, or the re-export
//! in `rowscan`, instead.

pub mod expand;
pub mod generate;
pub mod parse;

use proc_macro2::TokenStream;

/// Derive `Destination` with the default crate path (rowscan).
pub fn derive_destination(input: TokenStream) -> TokenStream {
	derive_destination_with_crate(input, "rowscan")
}

/// Derive `Destination` with a custom crate path.
///
/// # Arguments
/// * `input` - The derive macro input TokenStream
/// * `crate_path` - The crate the generated code resolves items through
pub fn derive_destination_with_crate(input: TokenStream, crate_path: &str) -> TokenStream {
	match parse::parse_struct(input) {
		Ok(parsed) => expand::expand_with_crate(&parsed, crate_path),
		Err(err) => err,
	}
}
