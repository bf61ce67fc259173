use std::sync::Arc;

use iid_primitives::InterfaceId;

use super::snapshot::Snapshot;
use crate::core::TypeEntry;

/// Proof that an object class satisfies an interface.
///
/// Returned by a successful capability query. It pins the snapshot the query was
/// answered from, so the answer stays valid even if the registry is extended later.
#[derive(Clone)]
pub struct CapabilityHandle {
	pub(crate) snap: Arc<Snapshot>,
	pub(crate) object: u32,
	pub(crate) interface: InterfaceId,
}

impl CapabilityHandle {
	/// The class entry of the queried object.
	pub fn object(&self) -> &TypeEntry {
		&self.snap.table[self.object as usize]
	}

	#[inline]
	pub fn object_id(&self) -> InterfaceId {
		self.object().id()
	}

	/// The granted interface id.
	#[inline]
	pub fn interface_id(&self) -> InterfaceId {
		self.interface
	}

	/// The entry of the granted interface.
	///
	/// `None` only when capability checking is relaxed and the class declared an id
	/// that no loaded module registered.
	pub fn interface(&self) -> Option<&TypeEntry> {
		self.snap.get(self.interface)
	}
}

impl std::fmt::Debug for CapabilityHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CapabilityHandle")
			.field("object", &self.object().name())
			.field("interface", &self.interface)
			.finish()
	}
}
