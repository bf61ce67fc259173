//! Registry container with atomic publication.
//!
//! # Role
//!
//! This module provides the thread-safe entrypoint for resolving identities after
//! initialization, and the explicitly synchronized extension phase.
//!
//! # Invariants
//!
//! - Reads never lock (see `invariants::test_concurrent_readers_agree`).
//! - Extensions are serialized and all-or-nothing (see `invariants::test_extension_is_atomic`).

use std::sync::Arc;

use arc_swap::ArcSwap;
use iid_primitives::{InterfaceId, TypeKind};
use parking_lot::Mutex;

use super::build::RegistryBuilder;
use super::capability::CapabilityHandle;
use super::snapshot::{RegistryRef, Snapshot};
use crate::config::RegistryConfig;
use crate::core::{Instance, LookupError, RegistryError, RegistrySource, TypeDef};

/// Published identity registry.
///
/// Holds the current [`Snapshot`] behind an [`ArcSwap`]: every read is a wait-free
/// load. The only writer is [`IdentityRegistry::extend`], which serializes on a
/// mutex, re-validates against the current snapshot and swaps in the result.
pub struct IdentityRegistry {
	config: RegistryConfig,
	snap: ArcSwap<Snapshot>,
	write: Mutex<()>,
}

impl IdentityRegistry {
	/// Publishes a built snapshot.
	pub fn new(config: RegistryConfig, snapshot: Snapshot) -> Self {
		tracing::info!(
			registry = %snapshot.label,
			entries = snapshot.len(),
			interfaces = snapshot.count(TypeKind::Interface),
			classes = snapshot.count(TypeKind::Class),
			"identity registry frozen"
		);
		Self {
			config,
			snap: ArcSwap::from_pointee(snapshot),
			write: Mutex::new(()),
		}
	}

	/// Publishes a built snapshot that can never be extended.
	pub fn frozen(snapshot: Snapshot) -> Self {
		let config = RegistryConfig {
			label: snapshot.label().to_owned(),
			..RegistryConfig::default()
		};
		Self::new(config, snapshot)
	}

	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	/// Returns the current snapshot for bulk reads.
	pub fn snapshot(&self) -> Arc<Snapshot> {
		self.snap.load_full()
	}

	/// Resolves an id to its entry. `None` for ids never registered.
	#[inline]
	pub fn resolve_by_id(&self, id: InterfaceId) -> Option<RegistryRef> {
		let snap = self.snap.load_full();
		let slot = snap.slot(id)?;
		Some(RegistryRef { snap, slot })
	}

	/// Resolves a symbolic name to its id.
	#[inline]
	pub fn resolve_by_name(&self, name: &str) -> Option<InterfaceId> {
		self.snap.load().id_of(name)
	}

	/// Resolves a symbolic name to its entry.
	pub fn get(&self, name: &str) -> Option<RegistryRef> {
		let snap = self.snap.load_full();
		let id = snap.id_of(name)?;
		let slot = snap.slot(id)?;
		Some(RegistryRef { snap, slot })
	}

	/// Asks whether an object of class `object` can be viewed as `requested`.
	///
	/// Refusal is an ordinary outcome: the object simply does not support that feature.
	pub fn query_capability(
		&self,
		object: InterfaceId,
		requested: InterfaceId,
	) -> Result<CapabilityHandle, LookupError> {
		let snap = self.snap.load_full();
		let slot = snap.capability_slot(object, requested)?;
		Ok(CapabilityHandle {
			snap,
			object: slot,
			interface: requested,
		})
	}

	/// Constructs an object by class id.
	pub fn create_instance(&self, class: InterfaceId) -> Result<Instance, LookupError> {
		self.snap.load().create_instance(class)
	}

	/// Returns the ids of every class declaring `iid`, in registration order.
	pub fn implementors(&self, iid: InterfaceId) -> Vec<InterfaceId> {
		self.snap.load().implementors(iid).map(|e| e.id()).collect()
	}

	/// Returns handles to all entries in registration order.
	pub fn all(&self) -> Vec<RegistryRef> {
		let snap = self.snap.load_full();
		snap.iter()
			.map(|entry| RegistryRef {
				snap: snap.clone(),
				slot: entry.ordinal,
			})
			.collect()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	/// Returns true if the registry holds no entries.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Adds definitions after initialization.
	///
	/// Writers serialize on an internal lock; readers keep using the previous snapshot
	/// until the new one is published. The same uniqueness and capability rules as the
	/// initial build apply, and a failure leaves the registry untouched. Entries already
	/// published can be restated but never changed. Returns the number of new entries;
	/// a batch that adds nothing publishes nothing.
	pub fn extend<'a, I>(&self, defs: I) -> Result<usize, RegistryError>
	where
		I: IntoIterator<Item = &'a TypeDef>,
	{
		if !self.config.allow_runtime_extension {
			tracing::warn!(registry = %self.config.label, "extension refused: registry is frozen");
			return Err(RegistryError::ExtensionDisabled {
				label: self.config.label.as_str().into(),
			});
		}

		let _guard = self.write.lock();
		let current = self.snap.load_full();
		let mut builder = RegistryBuilder::from_snapshot(&current, self.config.strict_capabilities);
		builder.extend(defs, RegistrySource::Runtime)?;
		let next = builder.build()?;

		let added = next.len() - current.len();
		if added == 0 {
			return Ok(0);
		}
		tracing::debug!(registry = %next.label, added, total = next.len(), "registry extended");
		self.snap.store(Arc::new(next));
		Ok(added)
	}
}

impl std::fmt::Debug for IdentityRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("IdentityRegistry")
			.field("label", &self.config.label)
			.field("len", &self.len())
			.finish()
	}
}
