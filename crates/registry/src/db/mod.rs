//! Process-wide identity database and its global accessor.
//!
//! The database is built on first use from every [`ModuleTable`](crate::ModuleTable)
//! linked into the process, frozen, and never rebuilt. Any duplicate id or name aborts
//! initialization: a process running on an inconsistent identity table cannot trust any
//! later comparison.

use std::sync::OnceLock;

use crate::config::RegistryConfig;
use crate::core::{IdentityRegistry, RegistryBuilder, RegistryError};

static DB: OnceLock<IdentityRegistry> = OnceLock::new();

/// Builds a registry from every linked module table.
pub fn build_from_modules(config: RegistryConfig) -> Result<IdentityRegistry, RegistryError> {
	let mut builder = RegistryBuilder::from_config(&config);
	let modules = builder.extend_modules()?;
	tracing::debug!(registry = %config.label, modules, "module tables collected");
	let snapshot = builder.build()?;
	Ok(IdentityRegistry::new(config, snapshot))
}

/// Returns the process-wide registry, building it with the default config on first use.
///
/// # Panics
///
/// Panics if the linked module tables are inconsistent (duplicate id or name, invalid
/// capability declaration). Use [`try_init`] to handle that case without unwinding.
pub fn get_db() -> &'static IdentityRegistry {
	DB.get_or_init(|| match build_from_modules(RegistryConfig::default()) {
		Ok(registry) => registry,
		Err(e) => {
			tracing::error!(error = %e, "identity registry initialization failed");
			panic!("identity registry initialization failed: {e}");
		}
	})
}

/// Initializes the process-wide registry with `config`.
///
/// Returns the already published registry if initialization happened before; in that
/// case `config` is ignored.
pub fn try_init(config: RegistryConfig) -> Result<&'static IdentityRegistry, RegistryError> {
	if let Some(db) = DB.get() {
		return Ok(db);
	}
	let registry = build_from_modules(config)?;
	// A concurrent initializer may have won; its registry was built from the same tables.
	Ok(DB.get_or_init(|| registry))
}
