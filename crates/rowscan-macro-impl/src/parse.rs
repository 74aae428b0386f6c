// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

//! Hand-rolled parser for the subset of struct syntax the derive accepts:
//! non-generic structs with named fields, with optional `#[col("…")]` field
//! attributes. Everything else is reported through `compile_error!`.

use std::iter::Peekable;

use proc_macro2::{Delimiter, TokenStream, TokenTree, token_stream};

use crate::generate::compile_error;

type Tokens = Peekable<token_stream::IntoIter>;

#[derive(Debug, PartialEq)]
pub struct ParsedStruct {
	pub name: String,
	pub fields: Vec<ParsedField>,
}

#[derive(Debug, PartialEq)]
pub struct ParsedField {
	/// Field identifier as written, possibly `r#`-prefixed.
	pub ident: String,
	/// Declared field name, `r#` prefix stripped.
	pub name: String,
	/// `#[col("…")]` annotation value, verbatim.
	pub tag: Option<String>,
	/// Field type tokens, rendered back to source text.
	pub ty: String,
}

pub fn parse_struct(input: TokenStream) -> Result<ParsedStruct, TokenStream> {
	let mut tokens = input.into_iter().peekable();

	skip_attributes(&mut tokens);
	skip_visibility(&mut tokens);

	match tokens.next() {
		Some(TokenTree::Ident(ident)) if ident == "struct" => {}
		Some(TokenTree::Ident(ident)) => {
			return Err(compile_error(&format!("Destination cannot be derived for {} types", ident)));
		}
		_ => return Err(compile_error("Destination can only be derived for structs")),
	}

	let name = match tokens.next() {
		Some(TokenTree::Ident(ident)) => ident.to_string(),
		_ => return Err(compile_error("expected a struct name")),
	};

	match tokens.next() {
		Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Brace => {
			let fields = parse_fields(group.stream())?;
			Ok(ParsedStruct {
				name,
				fields,
			})
		}
		Some(TokenTree::Punct(punct)) if punct.as_char() == '<' => {
			Err(compile_error("Destination cannot be derived for generic structs"))
		}
		_ => Err(compile_error("Destination requires a struct with named fields")),
	}
}

/// Consumes leading `#[…]` attributes without interpreting them.
fn skip_attributes(tokens: &mut Tokens) {
	while matches!(tokens.peek(), Some(TokenTree::Punct(punct)) if punct.as_char() == '#') {
		tokens.next();
		tokens.next();
	}
}

/// Consumes `pub`, `pub(crate)` and friends.
fn skip_visibility(tokens: &mut Tokens) {
	if matches!(tokens.peek(), Some(TokenTree::Ident(ident)) if *ident == "pub") {
		tokens.next();
		if matches!(
			tokens.peek(),
			Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Parenthesis
		) {
			tokens.next();
		}
	}
}

fn parse_fields(stream: TokenStream) -> Result<Vec<ParsedField>, TokenStream> {
	let mut tokens = stream.into_iter().peekable();
	let mut fields = Vec::new();

	while tokens.peek().is_some() {
		let tag = parse_field_attributes(&mut tokens)?;
		skip_visibility(&mut tokens);

		let ident = match tokens.next() {
			Some(TokenTree::Ident(ident)) => ident.to_string(),
			_ => return Err(compile_error("Destination requires named fields")),
		};
		let name = ident.strip_prefix("r#").unwrap_or(&ident).to_string();

		match tokens.next() {
			Some(TokenTree::Punct(punct)) if punct.as_char() == ':' => {}
			_ => return Err(compile_error("expected `:` after field name")),
		}

		let ty = parse_field_type(&mut tokens);
		if ty.is_empty() {
			return Err(compile_error("expected a field type"));
		}

		fields.push(ParsedField {
			ident,
			name,
			tag,
			ty,
		});
	}

	Ok(fields)
}

/// Consumes the attributes in front of a field, returning the `col` value.
fn parse_field_attributes(tokens: &mut Tokens) -> Result<Option<String>, TokenStream> {
	let mut tag = None;

	while matches!(tokens.peek(), Some(TokenTree::Punct(punct)) if punct.as_char() == '#') {
		tokens.next();
		let group = match tokens.next() {
			Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Bracket => group,
			_ => return Err(compile_error("malformed field attribute")),
		};
		if let Some(value) = parse_col_attribute(group.stream())? {
			if tag.replace(value).is_some() {
				return Err(compile_error("duplicate `col` attribute"));
			}
		}
	}

	Ok(tag)
}

/// The value of a `col` attribute, or `None` for attributes owned by others
/// (docs, serde, …), which the derive leaves alone.
fn parse_col_attribute(stream: TokenStream) -> Result<Option<String>, TokenStream> {
	let mut tokens = stream.into_iter();

	match tokens.next() {
		Some(TokenTree::Ident(ident)) if ident == "col" => {}
		_ => return Ok(None),
	}

	let group = match tokens.next() {
		Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Parenthesis => group,
		_ => return Err(compile_error("expected `col(\"…\")`")),
	};

	let mut inner = group.stream().into_iter();
	let value = match inner.next() {
		Some(TokenTree::Literal(literal)) => match unquote(&literal.to_string()) {
			Some(value) => value,
			None => return Err(compile_error("`col` expects a plain string literal")),
		},
		_ => return Err(compile_error("`col` expects a plain string literal")),
	};

	if inner.next().is_some() || tokens.next().is_some() {
		return Err(compile_error("expected `col(\"…\")`"));
	}

	Ok(Some(value))
}

/// Collects type tokens up to the next field separator. Commas nested in
/// angle brackets belong to the type.
fn parse_field_type(tokens: &mut Tokens) -> String {
	let mut ty = TokenStream::new();
	let mut depth = 0usize;

	while let Some(token) = tokens.next() {
		if let TokenTree::Punct(punct) = &token {
			match punct.as_char() {
				',' if depth == 0 => break,
				'<' => depth += 1,
				'>' => depth = depth.saturating_sub(1),
				_ => {}
			}
		}
		ty.extend([token]);
	}

	ty.to_string()
}

fn unquote(literal: &str) -> Option<String> {
	let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
	let mut value = String::with_capacity(inner.len());
	let mut chars = inner.chars();
	while let Some(ch) = chars.next() {
		if ch == '\\' {
			value.push(chars.next()?);
		} else {
			value.push(ch);
		}
	}
	Some(value)
}
