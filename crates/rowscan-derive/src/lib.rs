// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

//! `#[derive(Destination)]` for rowscan scan destinations.
//!
//! Generates the static field metadata and per-instance field targets the
//! scanner resolves columns against. Use through the re-export in `rowscan`.

use proc_macro::TokenStream;

/// Derives `rowscan::Destination` for a non-generic struct with named fields.
///
/// The optional `#[col("…")]` field attribute controls the bound column name:
/// the first comma-separated segment is the column name, `-` excludes the
/// field, an empty segment keeps the declared field name.
#[proc_macro_derive(Destination, attributes(col))]
pub fn derive_destination(input: TokenStream) -> TokenStream {
	rowscan_macro_impl::derive_destination(input.into()).into()
}
