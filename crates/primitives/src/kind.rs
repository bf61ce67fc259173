use std::fmt;

use serde::{Deserialize, Serialize};

/// What an [`InterfaceId`](crate::InterfaceId) names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
	/// A capability contract. Never constructed directly.
	Interface,
	/// A concrete, instantiable type that declares the interfaces it satisfies.
	Class,
}

impl TypeKind {
	/// Returns true if ids of this kind may be constructed.
	pub const fn is_instantiable(self) -> bool {
		matches!(self, Self::Class)
	}
}

impl fmt::Display for TypeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Interface => write!(f, "interface"),
			Self::Class => write!(f, "class"),
		}
	}
}
