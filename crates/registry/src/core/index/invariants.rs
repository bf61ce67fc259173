#![allow(dead_code)]

use std::sync::Arc;

use iid_primitives::{InterfaceId, TypeKind};

use super::{IdentityRegistry, RegistryBuilder};
use crate::config::RegistryConfig;
use crate::core::{RegistryError, TypeDef};

const fn id(n: u32) -> InterfaceId {
	InterfaceId::from_fields(n, 0x1AB3, 0xC970, [0xA7, 0xB8, 0x12, 0x26, 0x42, 0xAF, 0x63, 0x33])
}

const IA: InterfaceId = id(1);
const IB: InterfaceId = id(2);
const IC: InterfaceId = id(3);
const ID: InterfaceId = id(4);
const AB: InterfaceId = id(10);
const IX1: InterfaceId = id(40);
const IX2: InterfaceId = id(41);

static INTERFACES: [TypeDef; 4] = [
	TypeDef::interface("IA", id(1)),
	TypeDef::interface("IB", id(2)),
	TypeDef::interface("IC", id(3)),
	TypeDef::interface("ID", id(4)),
];

static CLASSES: [TypeDef; 2] = [
	TypeDef::class("AB", AB, &[IA, IB]),
	TypeDef::class("CD", id(11), &[IC, ID]),
];

fn registry(extensible: bool) -> IdentityRegistry {
	let mut builder = RegistryBuilder::new("inv");
	for def in INTERFACES.iter().chain(&CLASSES) {
		builder.register_def(def).unwrap();
	}
	let mut config = RegistryConfig::default().with_label("inv");
	config.allow_runtime_extension = extensible;
	IdentityRegistry::new(config, builder.build().unwrap())
}

/// Invariant: every id has one name and every name one id, whatever order conflicting
/// registrations arrive in.
pub(crate) fn inv_unique_bindings() {
	let mut builder = RegistryBuilder::new("inv");
	builder.register("IA", id(1), TypeKind::Interface).unwrap();
	builder.register("IB", id(2), TypeKind::Interface).unwrap();

	assert!(matches!(
		builder.register("IA", id(2), TypeKind::Interface),
		Err(RegistryError::DuplicateId { .. })
	));
	assert!(matches!(
		builder.register("IA", id(3), TypeKind::Interface),
		Err(RegistryError::DuplicateName { .. })
	));
	assert!(matches!(
		builder.register("IC", id(1), TypeKind::Interface),
		Err(RegistryError::DuplicateId { .. })
	));

	let snap = builder.build().unwrap();
	assert_eq!(snap.len(), 2);
	assert_eq!(snap.id_of("IA"), Some(id(1)));
	assert_eq!(snap.id_of("IB"), Some(id(2)));
	assert_eq!(snap.id_of("IC"), None);
}

#[cfg_attr(test, test)]
pub(crate) fn test_unique_bindings() {
	inv_unique_bindings()
}

/// Invariant: capability sets only ever name interfaces.
pub(crate) fn inv_capabilities_name_interfaces() {
	let registry = registry(false);
	let snap = registry.snapshot();
	for class in snap.iter().filter(|e| e.kind() == TypeKind::Class) {
		for &cap in class.capabilities() {
			assert_eq!(snap.get(cap).map(|e| e.kind()), Some(TypeKind::Interface));
		}
	}

	static NESTED: TypeDef = TypeDef::class("Nested", id(12), &[AB]);
	let mut builder = RegistryBuilder::new("inv");
	for def in INTERFACES.iter().chain(&CLASSES).chain([&NESTED]) {
		builder.register_def(def).unwrap();
	}
	assert!(matches!(
		builder.build(),
		Err(RegistryError::CapabilityNotInterface { .. })
	));
}

#[cfg_attr(test, test)]
pub(crate) fn test_capabilities_name_interfaces() {
	inv_capabilities_name_interfaces()
}

/// Invariant: handles resolved before an extension keep answering from their snapshot.
pub(crate) fn inv_handles_pin_snapshot_across_extension() {
	static LATE: TypeDef = TypeDef::interface("ILate", id(20));

	let registry = registry(true);
	let entry = registry.resolve_by_id(id(10)).unwrap();
	let handle = registry.query_capability(id(10), id(1)).unwrap();
	let before = registry.snapshot();

	registry.extend([&LATE]).unwrap();

	assert!(!Arc::ptr_eq(&before, &registry.snapshot()));
	assert!(Arc::ptr_eq(entry.snapshot(), &before));
	assert_eq!(entry.name(), "AB");
	assert_eq!(handle.object().name(), "AB");
	assert!(before.get(id(20)).is_none());
	assert!(registry.resolve_by_id(id(20)).is_some());
}

#[cfg_attr(test, test)]
pub(crate) fn test_handles_pin_snapshot_across_extension() {
	inv_handles_pin_snapshot_across_extension()
}

/// Invariant: a rejected extension batch publishes none of its entries.
pub(crate) fn inv_extension_is_atomic() {
	static BATCH: [TypeDef; 3] = [
		TypeDef::interface("IFresh", id(30)),
		TypeDef::interface("IOther", id(31)),
		TypeDef::interface("IA", id(32)),
	];

	let registry = registry(true);
	let before = registry.snapshot();
	assert!(matches!(
		registry.extend(&BATCH),
		Err(RegistryError::DuplicateName { .. })
	));
	assert!(Arc::ptr_eq(&before, &registry.snapshot()));
	assert!(registry.resolve_by_name("IFresh").is_none());
	assert!(registry.resolve_by_name("IOther").is_none());
}

#[cfg_attr(test, test)]
pub(crate) fn test_extension_is_atomic() {
	inv_extension_is_atomic()
}

fn spawn_ab() -> Box<dyn std::any::Any + Send + Sync> {
	Box::new(AB)
}

/// Invariant: once published, an entry answers every query the same way for the life of
/// the process; extensions can only add entries.
pub(crate) fn inv_published_entries_are_sealed() {
	static GROWN: TypeDef = TypeDef::class("AB", AB, &[IA, IB]).with_factory(spawn_ab);
	static BARE: TypeDef = TypeDef::class("AB", AB, &[]);

	let registry = registry(true);
	let held = registry.resolve_by_id(AB).unwrap();

	assert!(matches!(
		registry.extend([&GROWN]),
		Err(RegistryError::PublishedEntryChanged { .. })
	));
	assert_eq!(registry.extend([&BARE]), Ok(0));
	assert_eq!(registry.extend(&CLASSES), Ok(0));

	let now = registry.resolve_by_id(AB).unwrap();
	assert!(!now.is_instantiable());
	assert_eq!(now.capabilities(), held.capabilities());
	assert!(Arc::ptr_eq(held.snapshot(), now.snapshot()));
}

#[cfg_attr(test, test)]
pub(crate) fn test_published_entries_are_sealed() {
	inv_published_entries_are_sealed()
}

/// Invariant: concurrent readers observe a consistent table, with or without a writer
/// extending it at the same time.
pub(crate) fn inv_concurrent_readers_agree() {
	const READERS: usize = 8;
	const ROUNDS: u32 = 5_000;
	static EXTRA: [TypeDef; 4] = [
		TypeDef::interface("IX1", id(40)),
		TypeDef::interface("IX2", id(41)),
		TypeDef::class("X", id(42), &[IX1, IX2]),
		TypeDef::interface("IX3", id(43)),
	];

	let registry = registry(true);

	std::thread::scope(|s| {
		for reader in 0..READERS {
			let registry = &registry;
			s.spawn(move || {
				for round in 0..ROUNDS {
					let n = (round + reader as u32) % 4 + 1;
					let entry = registry.resolve_by_id(id(n)).expect("interface resolves");
					assert_eq!(registry.resolve_by_name(entry.name()), Some(id(n)));

					let class = if n <= 2 { id(10) } else { id(11) };
					let other = if n <= 2 { id(11) } else { id(10) };
					assert!(registry.query_capability(class, id(n)).is_ok());
					assert!(registry.query_capability(other, id(n)).is_err());

					// Whatever snapshot is observed, it is internally consistent.
					let snap = registry.snapshot();
					if let Some(x) = snap.get(id(42)) {
						assert!(snap.get(id(40)).is_some() && snap.get(id(41)).is_some());
						assert_eq!(x.capabilities(), &[IX1, IX2]);
					}
				}
			});
		}

		s.spawn(|| {
			for def in &EXTRA {
				registry.extend([def]).unwrap_or_else(|e| panic!("extension failed: {e}"));
			}
		});
	});

	assert_eq!(registry.len(), INTERFACES.len() + CLASSES.len() + EXTRA.len());
}

#[cfg_attr(test, test)]
pub(crate) fn test_concurrent_readers_agree() {
	inv_concurrent_readers_agree()
}
