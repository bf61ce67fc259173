use std::sync::Arc;

use iid_primitives::{InterfaceId, TypeKind};
use rustc_hash::{FxHashMap, FxHashSet};

use super::snapshot::Snapshot;
use crate::config::RegistryConfig;
use crate::core::{Factory, RegistryError, RegistrySource, TypeDef, TypeEntry};
use crate::module::ModuleTable;

/// An accepted registration that has not been validated against the full table yet.
struct PendingEntry {
	name: Arc<str>,
	id: InterfaceId,
	kind: TypeKind,
	capabilities: Vec<InterfaceId>,
	source: RegistrySource,
	factory: Option<Factory>,
}

/// Single-threaded builder that accumulates registrations and freezes them into a [`Snapshot`].
///
/// Uniqueness (ids and names) is enforced on every insertion; capability references are
/// checked once the whole table is known, in [`RegistryBuilder::build`].
pub struct RegistryBuilder {
	label: Arc<str>,
	strict_capabilities: bool,
	/// Entries below this slot come from a published snapshot and may not change.
	published: usize,
	entries: Vec<PendingEntry>,
	by_id: FxHashMap<InterfaceId, u32>,
	by_name: FxHashMap<Arc<str>, InterfaceId>,
}

impl RegistryBuilder {
	/// Creates a new builder with the given label for diagnostics.
	pub fn new(label: impl Into<Arc<str>>) -> Self {
		Self {
			label: label.into(),
			strict_capabilities: true,
			published: 0,
			entries: Vec::new(),
			by_id: FxHashMap::default(),
			by_name: FxHashMap::default(),
		}
	}

	/// Creates a builder honoring the label and validation settings of `config`.
	pub fn from_config(config: &RegistryConfig) -> Self {
		Self::new(config.label.as_str()).strict_capabilities(config.strict_capabilities)
	}

	/// Seeds a builder with every entry of an existing snapshot, keeping their sources
	/// and ordinals, so that further registrations are validated against it.
	///
	/// Seeded entries are sealed: registering them again is only accepted as an exact
	/// no-op.
	pub(crate) fn from_snapshot(snap: &Snapshot, strict_capabilities: bool) -> Self {
		let mut builder = Self::new(snap.label.clone()).strict_capabilities(strict_capabilities);
		for (slot, entry) in snap.table.iter().enumerate() {
			builder.by_id.insert(entry.id, slot_number(slot));
			builder.by_name.insert(entry.name.clone(), entry.id);
			builder.entries.push(PendingEntry {
				name: entry.name.clone(),
				id: entry.id,
				kind: entry.kind,
				capabilities: entry.capabilities.to_vec(),
				source: entry.source,
				factory: entry.factory,
			});
		}
		builder.published = builder.entries.len();
		builder
	}

	/// Sets whether capability lists must only name registered interfaces.
	pub fn strict_capabilities(mut self, on: bool) -> Self {
		self.strict_capabilities = on;
		self
	}

	/// Returns the number of distinct entries registered so far.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing has been registered yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Binds `name` to `id` with the given kind.
	///
	/// Registering an identical triple again succeeds without changing anything.
	pub fn register(
		&mut self,
		name: &str,
		id: InterfaceId,
		kind: TypeKind,
	) -> Result<(), RegistryError> {
		self.insert(name, id, kind, &[], RegistrySource::Builtin, None)
	}

	/// Registers a full static definition.
	pub fn register_def(&mut self, def: &TypeDef) -> Result<(), RegistryError> {
		self.register_def_from(def, RegistrySource::Builtin)
	}

	/// Registers a full static definition, recording where it came from.
	pub fn register_def_from(
		&mut self,
		def: &TypeDef,
		source: RegistrySource,
	) -> Result<(), RegistryError> {
		self.insert(
			def.name,
			def.id,
			def.kind,
			def.capabilities,
			source,
			def.factory,
		)
	}

	/// Registers every definition in `defs`, stopping at the first error.
	pub fn extend<'a, I>(&mut self, defs: I, source: RegistrySource) -> Result<(), RegistryError>
	where
		I: IntoIterator<Item = &'a TypeDef>,
	{
		for def in defs {
			self.register_def_from(def, source)?;
		}
		Ok(())
	}

	/// Ingests every [`ModuleTable`] linked into the process.
	///
	/// Tables are visited in module-name order so that the resulting ordinals do not
	/// depend on link order. Returns the number of tables ingested.
	pub fn extend_modules(&mut self) -> Result<usize, RegistryError> {
		let mut tables: Vec<&'static ModuleTable> = inventory::iter::<ModuleTable>.into_iter().collect();
		tables.sort_by(|a, b| a.module.cmp(b.module));

		for table in &tables {
			tracing::debug!(
				registry = %self.label,
				module = table.module,
				entries = table.entries.len(),
				"ingesting module table"
			);
			self.extend(table.entries, RegistrySource::Crate(table.module))?;
		}
		Ok(tables.len())
	}

	fn insert(
		&mut self,
		name: &str,
		id: InterfaceId,
		kind: TypeKind,
		capabilities: &[InterfaceId],
		source: RegistrySource,
		factory: Option<Factory>,
	) -> Result<(), RegistryError> {
		if name.is_empty() {
			return Err(RegistryError::EmptyName { id });
		}
		if id.is_nil() {
			return Err(RegistryError::NilId { name: name.into() });
		}

		if let Some(&slot) = self.by_id.get(&id) {
			let existing = &mut self.entries[slot as usize];
			if &*existing.name != name {
				return Err(RegistryError::DuplicateId {
					id,
					existing: existing.name.clone(),
					incoming: name.into(),
				});
			}
			if existing.kind != kind {
				return Err(RegistryError::KindMismatch {
					name: existing.name.clone(),
					id,
					existing: existing.kind,
					incoming: kind,
				});
			}
			// Same triple: a plain re-registration is a no-op, a definition may fill in
			// what a bare triple left empty.
			if !capabilities.is_empty()
				&& !existing.capabilities.is_empty()
				&& !same_set(&existing.capabilities, capabilities)
			{
				return Err(RegistryError::ConflictingCapabilities {
					name: existing.name.clone(),
				});
			}
			if let (Some(current), Some(incoming)) = (existing.factory, factory)
				&& !std::ptr::fn_addr_eq(current, incoming)
			{
				return Err(RegistryError::ConflictingFactory {
					name: existing.name.clone(),
				});
			}

			let fills_capabilities = !capabilities.is_empty() && existing.capabilities.is_empty();
			let fills_factory = factory.is_some() && existing.factory.is_none();
			if !fills_capabilities && !fills_factory {
				return Ok(());
			}
			if (slot as usize) < self.published {
				return Err(RegistryError::PublishedEntryChanged {
					name: existing.name.clone(),
					id,
				});
			}
			if fills_capabilities {
				existing.capabilities = capabilities.to_vec();
			}
			if fills_factory {
				existing.factory = factory;
			}
			return Ok(());
		}

		if let Some(&existing) = self.by_name.get(name) {
			return Err(RegistryError::DuplicateName {
				name: name.into(),
				existing,
				incoming: id,
			});
		}

		let name: Arc<str> = name.into();
		let slot = slot_number(self.entries.len());
		self.by_id.insert(id, slot);
		self.by_name.insert(name.clone(), id);
		self.entries.push(PendingEntry {
			name,
			id,
			kind,
			capabilities: capabilities.to_vec(),
			source,
			factory,
		});
		Ok(())
	}

	/// Validates capability declarations and freezes the table.
	pub fn build(self) -> Result<Snapshot, RegistryError> {
		for entry in &self.entries {
			match entry.kind {
				TypeKind::Interface => {
					if !entry.capabilities.is_empty() || entry.factory.is_some() {
						return Err(RegistryError::InterfaceWithCapabilities {
							name: entry.name.clone(),
						});
					}
				}
				TypeKind::Class => self.check_capabilities(entry)?,
			}
		}

		let table: Vec<TypeEntry> = self
			.entries
			.into_iter()
			.enumerate()
			.map(|(ordinal, entry)| {
				let mut seen = FxHashSet::default();
				let capabilities: Vec<InterfaceId> = entry
					.capabilities
					.into_iter()
					.filter(|iid| seen.insert(*iid))
					.collect();
				TypeEntry {
					name: entry.name,
					id: entry.id,
					kind: entry.kind,
					capabilities: Arc::from(capabilities),
					source: entry.source,
					factory: entry.factory,
					ordinal: slot_number(ordinal),
				}
			})
			.collect();

		Ok(Snapshot {
			label: self.label,
			table: table.into_boxed_slice(),
			by_id: self.by_id,
			by_name: self.by_name,
		})
	}

	fn check_capabilities(&self, class: &PendingEntry) -> Result<(), RegistryError> {
		for &capability in &class.capabilities {
			match self.by_id.get(&capability) {
				Some(&slot) => {
					let target = &self.entries[slot as usize];
					if target.kind != TypeKind::Interface {
						return Err(RegistryError::CapabilityNotInterface {
							class: class.name.clone(),
							capability,
							name: target.name.clone(),
						});
					}
				}
				None if self.strict_capabilities => {
					return Err(RegistryError::UnknownCapability {
						class: class.name.clone(),
						capability,
					});
				}
				None => {
					tracing::warn!(
						registry = %self.label,
						class = %class.name,
						%capability,
						"class declares an unregistered capability"
					);
				}
			}
		}
		Ok(())
	}
}

/// Converts a table position to a slot number.
///
/// # Panics
///
/// Panics past `u32::MAX` entries; no identity table comes close.
fn slot_number(pos: usize) -> u32 {
	match u32::try_from(pos) {
		Ok(slot) => slot,
		Err(_) => panic!("identity table exceeds {} entries", u32::MAX),
	}
}

fn same_set(a: &[InterfaceId], b: &[InterfaceId]) -> bool {
	a.iter().all(|x| b.contains(x)) && b.iter().all(|x| a.contains(x))
}
