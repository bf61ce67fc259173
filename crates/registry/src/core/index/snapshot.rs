//! Frozen registry state and pinning handles.
//!
//! # Role
//!
//! This module provides the immutable view types used to resolve ids and names.
//! It contains no mutation logic.
//!
//! # Invariants
//!
//! - `RegistryRef` and `CapabilityHandle` keep their source `Snapshot` alive while held
//!   (see `invariants::test_handles_pin_snapshot_across_extension`).

use std::sync::Arc;

use iid_primitives::{InterfaceId, TypeKind};
use rustc_hash::FxHashMap;

use crate::core::{CapabilityMiss, Instance, LookupError, TypeEntry};

/// Immutable, validated identity table.
///
/// Produced by [`RegistryBuilder::build`](super::RegistryBuilder::build). Safe to share across
/// threads; nothing in it changes after construction.
pub struct Snapshot {
	pub(crate) label: Arc<str>,
	pub(crate) table: Box<[TypeEntry]>,
	pub(crate) by_id: FxHashMap<InterfaceId, u32>,
	pub(crate) by_name: FxHashMap<Arc<str>, InterfaceId>,
}

impl Snapshot {
	#[inline]
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the entry for `id`, if registered.
	#[inline]
	pub fn get(&self, id: InterfaceId) -> Option<&TypeEntry> {
		self.slot(id).map(|slot| &self.table[slot as usize])
	}

	/// Returns the id bound to `name`. Exact, case-sensitive match.
	#[inline]
	pub fn id_of(&self, name: &str) -> Option<InterfaceId> {
		self.by_name.get(name).copied()
	}

	/// Returns the entry bound to `name`.
	pub fn get_by_name(&self, name: &str) -> Option<&TypeEntry> {
		self.id_of(name).and_then(|id| self.get(id))
	}

	#[inline]
	pub(crate) fn slot(&self, id: InterfaceId) -> Option<u32> {
		self.by_id.get(&id).copied()
	}

	/// Checks that the class `object` satisfies `requested`; returns the class slot.
	pub(crate) fn capability_slot(
		&self,
		object: InterfaceId,
		requested: InterfaceId,
	) -> Result<u32, LookupError> {
		let miss = |reason| LookupError::NoSuchCapability {
			object,
			requested,
			reason,
		};
		let slot = self.slot(object).ok_or_else(|| miss(CapabilityMiss::UnknownObject))?;
		let entry = &self.table[slot as usize];
		if entry.kind != TypeKind::Class {
			return Err(miss(CapabilityMiss::NotAClass));
		}
		if !entry.satisfies(requested) {
			return Err(miss(CapabilityMiss::NotDeclared));
		}
		Ok(slot)
	}

	/// Returns true if objects of class `object` may be viewed as `requested`.
	pub fn supports(&self, object: InterfaceId, requested: InterfaceId) -> bool {
		self.capability_slot(object, requested).is_ok()
	}

	/// Constructs a new object of class `class` through its registered factory.
	pub fn create_instance(&self, class: InterfaceId) -> Result<Instance, LookupError> {
		let entry = self.get(class).ok_or(LookupError::NotFound { id: class })?;
		match entry.factory {
			Some(factory) if entry.kind.is_instantiable() => Ok(Instance {
				class,
				object: factory(),
			}),
			_ => Err(LookupError::NotInstantiable {
				id: class,
				name: entry.name.clone(),
			}),
		}
	}

	/// Returns the classes that declare `iid` in their capability set, in registration order.
	pub fn implementors(&self, iid: InterfaceId) -> impl Iterator<Item = &TypeEntry> + '_ {
		self.table
			.iter()
			.filter(move |e| e.kind == TypeKind::Class && e.capabilities.contains(&iid))
	}

	/// Returns all entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &TypeEntry> + '_ {
		self.table.iter()
	}

	/// Returns the number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.table.len()
	}

	/// Returns true if the snapshot holds no entries.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Counts entries of one kind.
	pub fn count(&self, kind: TypeKind) -> usize {
		self.table.iter().filter(|e| e.kind == kind).count()
	}
}

impl std::fmt::Debug for Snapshot {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Snapshot")
			.field("label", &self.label)
			.field("len", &self.table.len())
			.finish()
	}
}

/// Snapshot-pinning handle that provides `&TypeEntry` access.
#[derive(Clone)]
pub struct RegistryRef {
	pub(crate) snap: Arc<Snapshot>,
	pub(crate) slot: u32,
}

impl RegistryRef {
	/// Returns the snapshot this handle was resolved against.
	pub fn snapshot(&self) -> &Arc<Snapshot> {
		&self.snap
	}
}

impl std::ops::Deref for RegistryRef {
	type Target = TypeEntry;

	fn deref(&self) -> &TypeEntry {
		&self.snap.table[self.slot as usize]
	}
}

impl std::fmt::Debug for RegistryRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RegistryRef")
			.field("name", &self.name())
			.field("id", &self.id())
			.finish()
	}
}
