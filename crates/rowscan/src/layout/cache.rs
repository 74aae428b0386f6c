// Copyright (c) rowscan.dev 2025
// This file is licensed under the MIT, see license.md file

use std::{
	any::{Any, TypeId},
	collections::HashMap,
	sync::Arc,
};

use parking_lot::RwLock;
use tracing::debug;

use super::RecordLayout;
use crate::{error::Result, record::Destination};

/// Shared cache of record layouts, keyed by destination type identity.
///
/// Entries are created lazily on first use and never evicted; type shapes do
/// not change while the process runs. Clones share the same underlying map,
/// so one cache can be handed to every component that scans.
///
/// The write lock covers only the insert, not the discovery computation.
/// Callers racing on a never-yet-cached type may discover it redundantly;
/// discovery is deterministic per type, so the last insert wins without any
/// observable difference.
#[derive(Clone)]
pub struct LayoutCache {
	layouts: Arc<RwLock<HashMap<TypeId, RecordLayout>>>,
}

impl LayoutCache {
	pub fn new() -> Self {
		Self {
			layouts: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	/// The layout of the destination's type, discovered on first use.
	pub fn get(&self, destination: &dyn Destination) -> Result<RecordLayout> {
		let destination_any: &dyn Any = destination;
		let type_id = destination_any.type_id();

		if let Some(layout) = self.layouts.read().get(&type_id) {
			return Ok(layout.clone());
		}

		let info = destination.type_info();
		let layout = RecordLayout::discover(info)?;
		debug!(record = info.name, columns = layout.len(), "discovered record layout");

		self.layouts.write().insert(type_id, layout.clone());
		Ok(layout)
	}

	/// Number of cached record types.
	pub fn len(&self) -> usize {
		self.layouts.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.layouts.read().is_empty()
	}
}

impl Default for LayoutCache {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	mod get {
		use std::{any::Any, sync::Arc, thread};

		use crate::{
			Destination, FieldDef, Kind, LayoutCache, ScanError, TypeInfo,
		};

		#[derive(Default)]
		struct Account {
			id: i64,
			owner: String,
		}

		impl Destination for Account {
			fn type_info(&self) -> &'static TypeInfo {
				static INFO: TypeInfo = TypeInfo {
					name: "Account",
					kind: Kind::Record,
					fields: &[
						FieldDef {
							name: "id",
							tag: Some("account_id"),
							kind: Kind::Scalar,
						},
						FieldDef {
							name: "owner",
							tag: None,
							kind: Kind::Scalar,
						},
					],
				};
				&INFO
			}

			fn field_targets(&mut self) -> Vec<&mut dyn Any> {
				vec![&mut self.id as &mut dyn Any, &mut self.owner as &mut dyn Any]
			}
		}

		#[test]
		fn test_second_call_is_a_cache_hit() {
			let cache = LayoutCache::new();
			let account = Account::default();

			let first = cache.get(&account).unwrap();
			let second = cache.get(&account).unwrap();

			assert!(Arc::ptr_eq(&first.0, &second.0));
			assert_eq!(cache.len(), 1);
			assert_eq!(second.field("account_id").unwrap().index, 0);
			assert_eq!(second.field("owner").unwrap().index, 1);
		}

		#[test]
		fn test_scalar_destination_is_rejected_and_not_cached() {
			let cache = LayoutCache::new();
			let value = 7i64;

			let err = cache.get(&value).unwrap_err();
			assert!(matches!(err, ScanError::InvalidDestination { .. }));
			assert!(cache.is_empty());
		}

		#[test]
		fn test_distinct_types_get_distinct_entries() {
			let cache = LayoutCache::new();
			let account = Account::default();
			let flag = false;

			cache.get(&account).unwrap();
			cache.get(&flag).unwrap_err();
			cache.get(&account).unwrap();

			assert_eq!(cache.len(), 1);
		}

		#[test]
		fn test_concurrent_first_discovery_leaves_one_correct_entry() {
			let cache = LayoutCache::new();

			thread::scope(|scope| {
				for _ in 0..8 {
					let cache = cache.clone();
					scope.spawn(move || {
						let account = Account::default();
						let layout = cache.get(&account).unwrap();
						assert_eq!(layout.len(), 2);
					});
				}
			});

			assert_eq!(cache.len(), 1);
			let layout = cache.get(&Account::default()).unwrap();
			assert_eq!(layout.field("account_id").unwrap().field, "id");
			assert_eq!(layout.field("owner").unwrap().field, "owner");
		}
	}
}
