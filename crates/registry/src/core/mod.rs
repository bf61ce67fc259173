//! Shared registry infrastructure.

pub mod def;
pub mod entry;
pub mod error;
pub mod index;
pub mod instance;

pub use def::{Factory, RegistrySource, TypeDef};
pub use entry::TypeEntry;
pub use error::{CapabilityMiss, LookupError, RegistryError};
pub use index::{CapabilityHandle, IdentityRegistry, RegistryBuilder, RegistryRef, Snapshot};
pub use instance::Instance;
