// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::record::Kind;

/// Error reported by a [`RowSource`](crate::RowSource) implementation.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Any variant means the scan wrote no row data, except where the row source
/// itself partially wrote before failing.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
	#[error("destination type {type_name} is not a record aggregate (found {kind})")]
	InvalidDestination {
		type_name: &'static str,
		kind: Kind,
	},

	#[error("row source rejected the scan")]
	Source {
		#[source]
		cause: SourceError,
	},

	#[error("row source failed to populate the resolved targets")]
	Populate {
		#[source]
		cause: SourceError,
	},
}

pub type Result<T> = std::result::Result<T, ScanError>;
