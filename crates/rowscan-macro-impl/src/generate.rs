// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

//! Token emission helpers shared by parsing and expansion.

use proc_macro2::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

/// Creates a compile_error!("message") invocation.
pub fn compile_error(message: &str) -> TokenStream {
	[
		TokenTree::Ident(Ident::new("compile_error", Span::call_site())),
		TokenTree::Punct(Punct::new('!', Spacing::Alone)),
		TokenTree::Group(Group::new(
			Delimiter::Parenthesis,
			TokenStream::from(TokenTree::Literal(Literal::string(message))),
		)),
	]
	.into_iter()
	.collect()
}

/// Renders a string as an escaped Rust string literal, quotes included.
pub fn str_literal(value: &str) -> String {
	Literal::string(value).to_string()
}
