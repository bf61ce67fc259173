use std::sync::Arc;

use iid_primitives::{InterfaceId, TypeKind};

use super::def::{Factory, RegistrySource};

/// A validated registry entry, owned by a [`Snapshot`](super::Snapshot).
pub struct TypeEntry {
	pub(crate) name: Arc<str>,
	pub(crate) id: InterfaceId,
	pub(crate) kind: TypeKind,
	pub(crate) capabilities: Arc<[InterfaceId]>,
	pub(crate) source: RegistrySource,
	pub(crate) factory: Option<Factory>,
	pub(crate) ordinal: u32,
}

impl TypeEntry {
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[inline]
	pub fn id(&self) -> InterfaceId {
		self.id
	}

	#[inline]
	pub fn kind(&self) -> TypeKind {
		self.kind
	}

	/// Declared capability set, in declaration order.
	#[inline]
	pub fn capabilities(&self) -> &[InterfaceId] {
		&self.capabilities
	}

	#[inline]
	pub fn source(&self) -> RegistrySource {
		self.source
	}

	/// Registration ordinal; iteration follows it.
	#[inline]
	pub fn ordinal(&self) -> u32 {
		self.ordinal
	}

	/// Returns true if this entry can be constructed through the registry.
	#[inline]
	pub fn is_instantiable(&self) -> bool {
		self.kind.is_instantiable() && self.factory.is_some()
	}

	/// Returns true if a handle to an object of this class may be viewed as `iid`.
	///
	/// Only ids in the declared capability set qualify; the class id itself does not.
	/// Interfaces satisfy nothing.
	#[inline]
	pub fn satisfies(&self, iid: InterfaceId) -> bool {
		self.kind == TypeKind::Class && self.capabilities.contains(&iid)
	}
}

impl std::fmt::Debug for TypeEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeEntry")
			.field("name", &self.name)
			.field("id", &self.id)
			.field("kind", &self.kind)
			.field("capabilities", &self.capabilities)
			.field("source", &self.source)
			.field("factory", &self.factory.is_some())
			.finish()
	}
}
