// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

//! Maps relational query result rows onto record structs by column name.
//!
//! Record types describe themselves through static metadata generated by
//! `#[derive(Destination)]`. The [`LayoutCache`] turns that metadata into a
//! per-type [`RecordLayout`] (resolved column name to field identity) exactly
//! once, and the [`Scanner`] uses cached layouts to resolve each reported
//! column to the first destination record declaring a matching field before
//! delegating the actual value population to a [`RowSource`].
//!
//! Query execution, row iteration and value conversion all live behind the
//! [`RowSource`] capability; this crate only decides *which* field of *which*
//! destination a column lands in.

mod error;
mod layout;
mod record;
mod scan;

pub use error::{Result, ScanError, SourceError};
pub use layout::{FieldDescriptor, LayoutCache, RecordLayout, RecordLayoutInner};
pub use record::{ColumnType, Destination, FieldDef, Kind, TypeInfo};
pub use rowscan_derive::Destination;
pub use scan::{RowSource, ScanTarget, Scanner};
