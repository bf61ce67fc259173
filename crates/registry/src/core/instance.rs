use std::any::Any;

use iid_primitives::InterfaceId;

/// An object constructed by identity, tagged with the class id it was created from.
///
/// The class id is what later capability queries are made against.
pub struct Instance {
	pub(crate) class: InterfaceId,
	pub(crate) object: Box<dyn Any + Send + Sync>,
}

impl Instance {
	#[inline]
	pub fn class_id(&self) -> InterfaceId {
		self.class
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.object.downcast_ref()
	}

	pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
		self.object.downcast_mut()
	}

	/// Unwraps the constructed object.
	pub fn into_inner(self) -> Box<dyn Any + Send + Sync> {
		self.object
	}
}

impl std::fmt::Debug for Instance {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Instance").field("class", &self.class).finish_non_exhaustive()
	}
}
