//! Registry configuration.
//!
//! Hosts normally rely on [`RegistryConfig::default`]; the TOML form exists for
//! deployments that load optional modules and need relaxed capability checks or a
//! runtime extension phase.

use serde::{Deserialize, Serialize};

/// Settings applied when building and publishing an identity registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	/// Label used in logs and diagnostics.
	pub label: String,
	/// Allows [`IdentityRegistry::extend`](crate::IdentityRegistry::extend) after publication.
	pub allow_runtime_extension: bool,
	/// Requires every declared capability to name a registered interface.
	pub strict_capabilities: bool,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			label: "types".to_owned(),
			allow_runtime_extension: false,
			strict_capabilities: true,
		}
	}
}

/// Error loading a [`RegistryConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid registry config: {0}")]
	Toml(#[from] toml::de::Error),
}

impl RegistryConfig {
	/// Parses a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(s)?)
	}

	/// Returns a copy with runtime extension enabled.
	pub fn extensible(mut self) -> Self {
		self.allow_runtime_extension = true;
		self
	}

	/// Returns a copy with the given label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
}

#[cfg(test)]
mod tests;
