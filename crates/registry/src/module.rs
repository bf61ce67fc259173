//! Module tables contributed by independently compiled crates.
//!
//! A crate that defines identities declares them in one or more [`ModuleTable`]s
//! (usually with [`type_table!`](crate::type_table)) and submits them with
//! `inventory::submit!`. At startup, the linking step collects every submission and
//! [`RegistryBuilder::extend_modules`](crate::RegistryBuilder::extend_modules) ingests them.

use crate::core::TypeDef;

/// Static list of type definitions owned by one module.
#[derive(Debug)]
pub struct ModuleTable {
	/// Module name, recorded as the entries' source.
	pub module: &'static str,
	pub entries: &'static [TypeDef],
}

impl ModuleTable {
	pub const fn new(module: &'static str, entries: &'static [TypeDef]) -> Self {
		Self { module, entries }
	}
}

inventory::collect!(ModuleTable);
