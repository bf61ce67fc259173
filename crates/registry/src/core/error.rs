use std::sync::Arc;

use iid_primitives::{InterfaceId, TypeKind};

/// Fatal registration errors.
///
/// Raised while building or extending a registry. A registry that reports one of
/// these must not be published: every later identity comparison would be suspect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The id is already bound to a different symbolic name.
	#[error("duplicate id {id}: bound to {existing:?}, cannot also bind {incoming:?}")]
	DuplicateId {
		id: InterfaceId,
		existing: Arc<str>,
		incoming: Arc<str>,
	},
	/// The symbolic name is already bound to a different id.
	#[error("duplicate name {name:?}: bound to {existing}, cannot also bind {incoming}")]
	DuplicateName {
		name: Arc<str>,
		existing: InterfaceId,
		incoming: InterfaceId,
	},
	#[error("empty symbolic name for id {id}")]
	EmptyName { id: InterfaceId },
	#[error("{name:?} uses the nil id")]
	NilId { name: Arc<str> },
	/// Same name and id registered again with another kind.
	#[error("{name:?} ({id}) registered as both {existing} and {incoming}")]
	KindMismatch {
		name: Arc<str>,
		id: InterfaceId,
		existing: TypeKind,
		incoming: TypeKind,
	},
	/// Same class registered twice with different capability sets.
	#[error("{name:?} registered twice with different capability sets")]
	ConflictingCapabilities { name: Arc<str> },
	/// Same class registered twice with different constructors.
	#[error("{name:?} registered twice with different constructors")]
	ConflictingFactory { name: Arc<str> },
	/// An extension tried to add capabilities or a constructor to a published entry.
	#[error("{name:?} ({id}) is already published; its capabilities and constructor are fixed")]
	PublishedEntryChanged { name: Arc<str>, id: InterfaceId },
	#[error("class {class:?} declares unknown capability {capability}")]
	UnknownCapability {
		class: Arc<str>,
		capability: InterfaceId,
	},
	#[error("class {class:?} declares {capability} ({name:?}), which is not an interface")]
	CapabilityNotInterface {
		class: Arc<str>,
		capability: InterfaceId,
		name: Arc<str>,
	},
	#[error("interface {name:?} declares capabilities or a constructor")]
	InterfaceWithCapabilities { name: Arc<str> },
	#[error("registry {label:?} is frozen; runtime extension is disabled")]
	ExtensionDisabled { label: Arc<str> },
}

/// Why a capability query was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityMiss {
	/// The object id is not registered.
	UnknownObject,
	/// The object id names an interface, not a class.
	NotAClass,
	/// The class does not declare the requested interface.
	NotDeclared,
}

impl std::fmt::Display for CapabilityMiss {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnknownObject => write!(f, "unknown object class"),
			Self::NotAClass => write!(f, "object id is not a class"),
			Self::NotDeclared => write!(f, "not declared by the class"),
		}
	}
}

/// Recoverable lookup failures. Callers treat these as ordinary branches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
	#[error("no type registered for {id}")]
	NotFound { id: InterfaceId },
	#[error("object {object} does not support {requested}: {reason}")]
	NoSuchCapability {
		object: InterfaceId,
		requested: InterfaceId,
		reason: CapabilityMiss,
	},
	#[error("{name:?} ({id}) cannot be instantiated")]
	NotInstantiable { id: InterfaceId, name: Arc<str> },
}
