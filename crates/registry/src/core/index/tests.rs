use std::sync::Arc;

use iid_primitives::{InterfaceId, TypeKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::test_fixtures::{
	I_NOTIFY_CHANGE, I_ROOT_BOX, I_SELECTION, I_STYLESHEET, ROOT_BOX, ROOT_BOX_CAPS, RootBox,
	STYLESHEET, extensible_sample_registry, iid, new_root_box, sample_builder, sample_registry,
	synthetic_builder,
};
use super::{IdentityRegistry, RegistryBuilder};
use crate::core::{CapabilityMiss, LookupError, RegistryError, RegistrySource, TypeDef};

#[test]
fn register_then_resolve_round_trips() {
	let registry = sample_registry();
	for entry in registry.all() {
		assert_eq!(registry.resolve_by_name(entry.name()), Some(entry.id()));
		let back = registry.resolve_by_id(entry.id()).expect("registered id resolves");
		assert_eq!(back.name(), entry.name());
	}
	assert_eq!(registry.len(), 6);
}

#[test]
fn identical_triple_is_idempotent() {
	let mut builder = RegistryBuilder::new("test");
	builder.register("IVwSelection", I_SELECTION, TypeKind::Interface).unwrap();
	builder.register("IVwSelection", I_SELECTION, TypeKind::Interface).unwrap();
	assert_eq!(builder.len(), 1);

	let snap = builder.build().unwrap();
	assert_eq!(snap.len(), 1);
	assert_eq!(snap.id_of("IVwSelection"), Some(I_SELECTION));
}

#[test]
fn id_bound_to_other_name_is_duplicate_id() {
	let mut builder = RegistryBuilder::new("test");
	builder.register("IVwSelection", I_SELECTION, TypeKind::Interface).unwrap();
	let err = builder
		.register("IVwSelection2", I_SELECTION, TypeKind::Interface)
		.unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateId {
			id: I_SELECTION,
			existing: "IVwSelection".into(),
			incoming: "IVwSelection2".into(),
		}
	);
	assert_eq!(builder.len(), 1);
}

#[test]
fn name_bound_to_other_id_is_duplicate_name() {
	let mut builder = RegistryBuilder::new("test");
	builder.register("IVwSelection", I_SELECTION, TypeKind::Interface).unwrap();
	let err = builder
		.register("IVwSelection", I_ROOT_BOX, TypeKind::Interface)
		.unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateName {
			name: "IVwSelection".into(),
			existing: I_SELECTION,
			incoming: I_ROOT_BOX,
		}
	);
}

#[test]
fn duplicate_error_message_names_both_parties() {
	let mut builder = RegistryBuilder::new("test");
	builder.register("IVwSelection", I_SELECTION, TypeKind::Interface).unwrap();
	let msg = builder
		.register("IVwOther", I_SELECTION, TypeKind::Interface)
		.unwrap_err()
		.to_string();
	assert!(msg.contains("IVwSelection"), "{msg}");
	assert!(msg.contains("IVwOther"), "{msg}");
	assert!(msg.contains("{4F8B678D-C5BA-4A2F-B9B3-2780956E3616}"), "{msg}");
}

#[test]
fn rejects_empty_name_nil_id_and_kind_change() {
	let mut builder = RegistryBuilder::new("test");
	assert_eq!(
		builder.register("", I_SELECTION, TypeKind::Interface),
		Err(RegistryError::EmptyName { id: I_SELECTION })
	);
	assert_eq!(
		builder.register("Nil", InterfaceId::NIL, TypeKind::Class),
		Err(RegistryError::NilId { name: "Nil".into() })
	);

	builder.register("IVwSelection", I_SELECTION, TypeKind::Interface).unwrap();
	assert!(matches!(
		builder.register("IVwSelection", I_SELECTION, TypeKind::Class),
		Err(RegistryError::KindMismatch {
			existing: TypeKind::Interface,
			incoming: TypeKind::Class,
			..
		})
	));
}

#[test]
fn names_match_exactly() {
	let registry = sample_registry();
	assert_eq!(registry.resolve_by_name("IVwSelection"), Some(I_SELECTION));
	assert_eq!(registry.resolve_by_name("ivwselection"), None);
	assert_eq!(registry.resolve_by_name("IVwSelection "), None);
}

#[test]
fn unknown_id_is_not_found() {
	let registry = sample_registry();
	assert!(registry.resolve_by_id(iid(404)).is_none());
	assert!(registry.resolve_by_id(InterfaceId::NIL).is_none());
	assert!(registry.snapshot().get(iid(404)).is_none());
}

#[test]
fn root_box_supports_selection() {
	let registry = sample_registry();

	let handle = registry
		.query_capability(ROOT_BOX, I_SELECTION)
		.expect("VwRootBox declares IVwSelection");
	assert_eq!(handle.object_id(), ROOT_BOX);
	assert_eq!(handle.object().name(), "VwRootBox");
	assert_eq!(handle.interface_id(), I_SELECTION);
	assert_eq!(handle.interface().map(|e| e.name()), Some("IVwSelection"));

	assert_eq!(
		registry.query_capability(ROOT_BOX, iid(404)).unwrap_err(),
		LookupError::NoSuchCapability {
			object: ROOT_BOX,
			requested: iid(404),
			reason: CapabilityMiss::NotDeclared,
		}
	);
}

#[test]
fn capability_query_is_exact_membership() {
	let registry = sample_registry();
	for iid in [I_ROOT_BOX, I_NOTIFY_CHANGE, I_SELECTION] {
		assert!(registry.query_capability(ROOT_BOX, iid).is_ok());
	}
	assert!(registry.query_capability(ROOT_BOX, I_STYLESHEET).is_err());
	assert!(registry.query_capability(STYLESHEET, I_STYLESHEET).is_ok());
	assert!(registry.query_capability(STYLESHEET, I_SELECTION).is_err());
}

#[test]
fn class_id_is_not_a_capability() {
	let registry = sample_registry();
	assert_eq!(
		registry.query_capability(ROOT_BOX, ROOT_BOX).unwrap_err(),
		LookupError::NoSuchCapability {
			object: ROOT_BOX,
			requested: ROOT_BOX,
			reason: CapabilityMiss::NotDeclared,
		}
	);
	assert!(registry.implementors(ROOT_BOX).is_empty());
}

#[test]
fn capability_query_on_non_class_objects_misses() {
	let registry = sample_registry();
	let reason = |object| match registry.query_capability(object, I_SELECTION) {
		Err(LookupError::NoSuchCapability { reason, .. }) => reason,
		other => panic!("expected NoSuchCapability, got {other:?}"),
	};
	assert_eq!(reason(iid(404)), CapabilityMiss::UnknownObject);
	assert_eq!(reason(I_SELECTION), CapabilityMiss::NotAClass);
}

#[test]
fn strict_build_rejects_unknown_capability() {
	static CAPS: [InterfaceId; 1] = [iid(77)];
	static DEF: TypeDef = TypeDef::class("VwOrphan", iid(78), &CAPS);

	let mut builder = RegistryBuilder::new("test");
	builder.register_def(&DEF).unwrap();
	assert_eq!(
		builder.build().unwrap_err(),
		RegistryError::UnknownCapability {
			class: "VwOrphan".into(),
			capability: iid(77),
		}
	);
}

#[test]
fn relaxed_build_keeps_unknown_capability() {
	static CAPS: [InterfaceId; 1] = [iid(77)];
	static DEF: TypeDef = TypeDef::class("VwOrphan", iid(78), &CAPS);

	let mut builder = RegistryBuilder::new("test").strict_capabilities(false);
	builder.register_def(&DEF).unwrap();
	let registry = IdentityRegistry::frozen(builder.build().unwrap());

	let handle = registry.query_capability(iid(78), iid(77)).unwrap();
	assert!(handle.interface().is_none());
}

#[test]
fn capability_must_name_an_interface() {
	static CAPS: [InterfaceId; 1] = [ROOT_BOX];
	static DEF: TypeDef = TypeDef::class("VwWrapper", iid(90), &CAPS);

	let mut builder = sample_builder();
	builder.register_def(&DEF).unwrap();
	assert_eq!(
		builder.build().unwrap_err(),
		RegistryError::CapabilityNotInterface {
			class: "VwWrapper".into(),
			capability: ROOT_BOX,
			name: "VwRootBox".into(),
		}
	);
}

#[test]
fn interface_cannot_declare_capabilities() {
	static DEF: TypeDef = TypeDef {
		capabilities: &[I_SELECTION],
		..TypeDef::interface("IVwBroken", iid(91))
	};

	let mut builder = sample_builder();
	builder.register_def(&DEF).unwrap();
	assert_eq!(
		builder.build().unwrap_err(),
		RegistryError::InterfaceWithCapabilities {
			name: "IVwBroken".into()
		}
	);
}

#[test]
fn definition_completes_a_bare_triple() {
	let mut builder = RegistryBuilder::new("test");
	builder.register("VwRootBox", ROOT_BOX, TypeKind::Class).unwrap();
	builder.register("IVwSelection", I_SELECTION, TypeKind::Interface).unwrap();

	static CAPS: [InterfaceId; 1] = [I_SELECTION];
	static DEF: TypeDef = TypeDef::class("VwRootBox", ROOT_BOX, &CAPS);
	builder.register_def(&DEF).unwrap();
	builder.register_def(&DEF).unwrap();

	let snap = builder.build().unwrap();
	assert_eq!(snap.len(), 2);
	assert_eq!(snap.get(ROOT_BOX).unwrap().capabilities(), &[I_SELECTION]);
}

#[test]
fn conflicting_capability_sets_are_rejected() {
	static A: TypeDef = TypeDef::class("VwRootBox", ROOT_BOX, &[I_SELECTION]);
	static B: TypeDef = TypeDef::class("VwRootBox", ROOT_BOX, &[I_ROOT_BOX]);

	let mut builder = RegistryBuilder::new("test");
	builder.register_def(&A).unwrap();
	assert_eq!(
		builder.register_def(&B),
		Err(RegistryError::ConflictingCapabilities {
			name: "VwRootBox".into()
		})
	);
}

fn new_other_root_box() -> Box<dyn std::any::Any + Send + Sync> {
	Box::new(RootBox { roots: 1 })
}

#[test]
fn conflicting_factories_are_rejected() {
	static A: TypeDef =
		TypeDef::class("VwRootBox", ROOT_BOX, &ROOT_BOX_CAPS).with_factory(new_root_box);
	static B: TypeDef =
		TypeDef::class("VwRootBox", ROOT_BOX, &ROOT_BOX_CAPS).with_factory(new_other_root_box);

	let mut builder = sample_builder();
	builder.register_def(&A).unwrap();
	assert_eq!(
		builder.register_def(&B),
		Err(RegistryError::ConflictingFactory {
			name: "VwRootBox".into()
		})
	);

	let registry = IdentityRegistry::frozen(builder.build().unwrap());
	let instance = registry.create_instance(ROOT_BOX).unwrap();
	assert_eq!(instance.downcast_ref::<RootBox>(), Some(&RootBox { roots: 0 }));
}

#[test]
fn repeated_capabilities_collapse() {
	static DEF: TypeDef =
		TypeDef::class("VwTwice", iid(95), &[I_SELECTION, I_ROOT_BOX, I_SELECTION]);

	let mut builder = sample_builder();
	builder.register_def(&DEF).unwrap();
	let snap = builder.build().unwrap();
	assert_eq!(snap.get(iid(95)).unwrap().capabilities(), &[I_SELECTION, I_ROOT_BOX]);
}

#[test]
fn create_instance_uses_factory() {
	let registry = sample_registry();

	let mut instance = registry.create_instance(ROOT_BOX).unwrap();
	assert_eq!(instance.class_id(), ROOT_BOX);
	instance.downcast_mut::<RootBox>().unwrap().roots = 2;
	assert_eq!(instance.downcast_ref::<RootBox>(), Some(&RootBox { roots: 2 }));

	assert!(registry.query_capability(instance.class_id(), I_SELECTION).is_ok());
}

#[test]
fn create_instance_refuses_interfaces_and_abstract_classes() {
	let registry = sample_registry();
	assert_eq!(
		registry.create_instance(I_SELECTION).unwrap_err(),
		LookupError::NotInstantiable {
			id: I_SELECTION,
			name: "IVwSelection".into()
		}
	);
	assert!(matches!(
		registry.create_instance(STYLESHEET),
		Err(LookupError::NotInstantiable { .. })
	));
	assert_eq!(
		registry.create_instance(iid(404)).unwrap_err(),
		LookupError::NotFound { id: iid(404) }
	);
}

#[test]
fn implementors_lists_declaring_classes() {
	let registry = sample_registry();
	assert_eq!(registry.implementors(I_SELECTION), vec![ROOT_BOX]);
	assert_eq!(registry.implementors(I_STYLESHEET), vec![STYLESHEET]);
	assert!(registry.implementors(iid(404)).is_empty());
}

#[test]
fn iteration_follows_registration_order() {
	let registry = sample_registry();
	let names: Vec<String> = registry.all().iter().map(|e| e.name().to_owned()).collect();
	assert_eq!(
		names,
		[
			"IVwNotifyChange",
			"IVwSelection",
			"IVwRootBox",
			"IVwStylesheet",
			"VwRootBox",
			"VwStylesheet"
		]
	);
	let ordinals: Vec<u32> = registry.all().iter().map(|e| e.ordinal()).collect();
	assert_eq!(ordinals, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn frozen_registry_refuses_extension() {
	static DEF: TypeDef = TypeDef::interface("IVwLate", iid(100));

	let registry = sample_registry();
	assert_eq!(
		registry.extend([&DEF]),
		Err(RegistryError::ExtensionDisabled {
			label: "test".into()
		})
	);
	assert!(registry.resolve_by_id(iid(100)).is_none());
}

#[test]
fn extension_adds_runtime_entries() {
	static CAPS: [InterfaceId; 2] = [iid(100), I_SELECTION];
	static DEFS: [TypeDef; 2] = [
		TypeDef::interface("IVwLate", iid(100)),
		TypeDef::class("VwLate", iid(101), &CAPS),
	];

	let registry = extensible_sample_registry();
	assert_eq!(registry.extend(&DEFS), Ok(2));
	assert_eq!(registry.len(), 8);

	let late = registry.resolve_by_id(iid(101)).unwrap();
	assert_eq!(late.source(), RegistrySource::Runtime);
	assert_eq!(late.ordinal(), 7);
	assert!(registry.query_capability(iid(101), I_SELECTION).is_ok());
	assert_eq!(registry.implementors(I_SELECTION), vec![ROOT_BOX, iid(101)]);

	// Re-applying the same batch is a no-op.
	assert_eq!(registry.extend(&DEFS), Ok(0));
	assert_eq!(registry.len(), 8);
}

#[test]
fn extension_validates_against_existing_entries() {
	static CLASH: TypeDef = TypeDef::interface("IVwImpostor", I_SELECTION);

	let registry = extensible_sample_registry();
	assert!(matches!(
		registry.extend([&CLASH]),
		Err(RegistryError::DuplicateId { .. })
	));
	assert_eq!(registry.resolve_by_name("IVwImpostor"), None);
	assert_eq!(
		registry.resolve_by_id(I_SELECTION).map(|e| e.name().to_owned()),
		Some("IVwSelection".to_owned())
	);
}

#[test]
fn extension_cannot_complete_published_entries() {
	static WITH_FACTORY: TypeDef =
		TypeDef::class("VwStylesheet", STYLESHEET, &[I_STYLESHEET]).with_factory(new_root_box);
	static BARE_CAPS: [InterfaceId; 1] = [I_SELECTION];
	static WITH_CAPS: TypeDef = TypeDef::class("VwBare", iid(120), &BARE_CAPS);

	let mut builder = sample_builder();
	builder.register("VwBare", iid(120), TypeKind::Class).unwrap();
	let config = crate::config::RegistryConfig::default().extensible();
	let registry = IdentityRegistry::new(config, builder.build().unwrap());
	let before = registry.snapshot();

	assert_eq!(
		registry.extend([&WITH_FACTORY]),
		Err(RegistryError::PublishedEntryChanged {
			name: "VwStylesheet".into(),
			id: STYLESHEET,
		})
	);
	assert_eq!(
		registry.extend([&WITH_CAPS]),
		Err(RegistryError::PublishedEntryChanged {
			name: "VwBare".into(),
			id: iid(120),
		})
	);

	assert!(Arc::ptr_eq(&before, &registry.snapshot()));
	assert!(registry.create_instance(STYLESHEET).is_err());
	assert!(registry.query_capability(iid(120), I_SELECTION).is_err());

	// Re-stating a published entry exactly as it is stays a no-op.
	assert_eq!(registry.extend(&super::test_fixtures::SAMPLE_DEFS), Ok(0));
}

#[test]
fn unchanged_registry_keeps_snapshot() {
	let registry = extensible_sample_registry();
	let before = registry.snapshot();
	assert_eq!(registry.extend(&super::test_fixtures::SAMPLE_DEFS), Ok(0));
	assert!(Arc::ptr_eq(&before, &registry.snapshot()));
}

#[test]
fn synthetic_builder_resolves_every_id() {
	let snap = synthetic_builder(64).build().unwrap();
	assert_eq!(snap.len(), 64);
	assert_eq!(snap.count(TypeKind::Interface), 64);
	assert_eq!(snap.id_of("I64"), Some(iid(64)));
}

proptest! {
	#[test]
	fn registered_pairs_round_trip(ids in prop::collection::hash_set(1u32.., 1..64)) {
		let mut builder = RegistryBuilder::new("prop");
		for &n in &ids {
			builder.register(&format!("T{n}"), iid(n), TypeKind::Interface).unwrap();
		}
		for &n in &ids {
			// Second pass is idempotent.
			builder.register(&format!("T{n}"), iid(n), TypeKind::Interface).unwrap();
		}
		let snap = builder.build().unwrap();
		prop_assert_eq!(snap.len(), ids.len());
		for &n in &ids {
			let name = format!("T{n}");
			prop_assert_eq!(snap.id_of(&name), Some(iid(n)));
			prop_assert_eq!(snap.get(iid(n)).map(|e| e.name()), Some(name.as_str()));
		}
	}
}
