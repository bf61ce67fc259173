use std::any::Any;

use iid_primitives::{InterfaceId, TypeKind};

/// Constructor stored for an instantiable class.
pub type Factory = fn() -> Box<dyn Any + Send + Sync>;

/// Represents where a registry entry was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrySource {
	/// Registered directly on a builder.
	Builtin,
	/// Contributed by the module table of a compiled crate.
	Crate(&'static str),
	/// Added through the runtime extension phase.
	Runtime,
}

impl std::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Crate(name) => write!(f, "crate:{name}"),
			Self::Runtime => write!(f, "runtime"),
		}
	}
}

/// Static definition of one identity, as written in a type table.
#[derive(Debug, Clone, Copy)]
pub struct TypeDef {
	/// Symbolic name, used for diagnostics and lookup by name.
	pub name: &'static str,
	/// The permanent identifier.
	pub id: InterfaceId,
	/// Interface or class.
	pub kind: TypeKind,
	/// Interface ids a class satisfies. Empty for interfaces.
	pub capabilities: &'static [InterfaceId],
	/// Constructor for a class; `None` for interfaces and abstract classes.
	pub factory: Option<Factory>,
}

impl TypeDef {
	/// Declares an interface.
	pub const fn interface(name: &'static str, id: InterfaceId) -> Self {
		Self {
			name,
			id,
			kind: TypeKind::Interface,
			capabilities: &[],
			factory: None,
		}
	}

	/// Declares a class and the interfaces it satisfies.
	pub const fn class(
		name: &'static str,
		id: InterfaceId,
		capabilities: &'static [InterfaceId],
	) -> Self {
		Self {
			name,
			id,
			kind: TypeKind::Class,
			capabilities,
			factory: None,
		}
	}

	/// Attaches a constructor.
	pub const fn with_factory(mut self, factory: Factory) -> Self {
		self.factory = Some(factory);
		self
	}
}
