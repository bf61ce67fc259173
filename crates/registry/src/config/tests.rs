use super::*;

#[test]
fn empty_document_yields_defaults() {
	let config = RegistryConfig::from_toml_str("").unwrap();
	assert_eq!(config, RegistryConfig::default());
	assert!(!config.allow_runtime_extension);
	assert!(config.strict_capabilities);
}

#[test]
fn parses_all_keys() {
	const CONFIG: &str = r#"
		label = "views"
		allow_runtime_extension = true
		strict_capabilities = false
	"#;
	let config = RegistryConfig::from_toml_str(CONFIG).unwrap();
	assert_eq!(config.label, "views");
	assert!(config.allow_runtime_extension);
	assert!(!config.strict_capabilities);
}

#[test]
fn rejects_unknown_keys() {
	let err = RegistryConfig::from_toml_str("allow_overwrite = true").unwrap_err();
	assert!(err.to_string().contains("allow_overwrite"), "{err}");
}

#[test]
fn rejects_wrong_types() {
	assert!(RegistryConfig::from_toml_str("strict_capabilities = \"yes\"").is_err());
}
