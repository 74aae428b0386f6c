// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

use rowscan::{RowSource, ScanTarget, SourceError};

/// One column value of the in-memory test row.
pub enum Cell {
	Int(i64),
	Text(&'static str),
	Real(f64),
	Flag(bool),
}

/// In-memory row source holding a single row.
pub struct TestRows {
	columns: Vec<&'static str>,
	row: Vec<Cell>,
	failed: Option<&'static str>,
	/// Number of targets handed to the last `populate` call.
	pub populated: Option<usize>,
}

impl TestRows {
	pub fn new(columns: &[&'static str], row: Vec<Cell>) -> Self {
		Self {
			columns: columns.to_vec(),
			row,
			failed: None,
			populated: None,
		}
	}

	/// A source already in a failed state.
	#[allow(dead_code)]
	pub fn failed(message: &'static str) -> Self {
		Self {
			columns: Vec::new(),
			row: Vec::new(),
			failed: Some(message),
			populated: None,
		}
	}
}

impl RowSource for TestRows {
	fn check(&self) -> Result<(), SourceError> {
		match self.failed {
			Some(message) => Err(message.into()),
			None => Ok(()),
		}
	}

	fn columns(&self) -> Result<Vec<String>, SourceError> {
		Ok(self.columns.iter().map(|column| column.to_string()).collect())
	}

	fn populate(&mut self, targets: &mut [ScanTarget<'_>]) -> Result<(), SourceError> {
		self.populated = Some(targets.len());
		for target in targets.iter_mut() {
			let cell = self
				.row
				.get(target.column)
				.ok_or_else(|| SourceError::from("column index out of range"))?;
			let written = match cell {
				Cell::Int(value) => target.set(*value),
				Cell::Text(value) => target.set(value.to_string()),
				Cell::Real(value) => target.set(*value),
				Cell::Flag(value) => target.set(*value),
			};
			if !written {
				return Err(format!("type mismatch at column {}", target.column).into());
			}
		}
		Ok(())
	}
}
