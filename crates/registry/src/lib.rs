//! Interface identity registry.
//!
//! Binds symbolic interface and class names to permanent 128-bit ids and answers,
//! at runtime and across independently compiled modules:
//!
//! - which type an id names ([`IdentityRegistry::resolve_by_id`]),
//! - which id a name is bound to ([`IdentityRegistry::resolve_by_name`]),
//! - whether an object of some class may be viewed as an interface
//!   ([`IdentityRegistry::query_capability`]),
//! - how to construct a class from its id ([`IdentityRegistry::create_instance`]).
//!
//! Tables are declared with [`type_table!`] in the crates that own them and collected at
//! startup into the process-wide database ([`db::get_db`]).

pub mod config;
pub mod core;
pub mod db;
mod macros;
pub mod module;

pub use config::{ConfigError, RegistryConfig};
pub use crate::core::{
	CapabilityHandle, CapabilityMiss, Factory, IdentityRegistry, Instance, LookupError,
	RegistryBuilder, RegistryError, RegistryRef, RegistrySource, Snapshot, TypeDef, TypeEntry,
};
pub use iid_primitives::{InterfaceId, ParseIdError, TypeKind};
#[doc(hidden)]
pub use inventory;
pub use module::ModuleTable;
