use std::any::Any;

use iid_primitives::{InterfaceId, TypeKind};

use super::{IdentityRegistry, RegistryBuilder};
use crate::config::RegistryConfig;
use crate::core::TypeDef;

pub(crate) const I_NOTIFY_CHANGE: InterfaceId = InterfaceId::from_fields(
	0x6C45_6541,
	0xC2B6,
	0x11d3,
	[0x80, 0x78, 0x00, 0x00, 0xC0, 0xFB, 0x81, 0xB5],
);
pub(crate) const I_SELECTION: InterfaceId = InterfaceId::from_fields(
	0x4F8B_678D,
	0xC5BA,
	0x4a2f,
	[0xB9, 0xB3, 0x27, 0x80, 0x95, 0x6E, 0x36, 0x16],
);
pub(crate) const I_ROOT_BOX: InterfaceId = InterfaceId::from_fields(
	0x85DB_7D7D,
	0xD47B,
	0x440e,
	[0xA2, 0x13, 0xF6, 0x2D, 0x52, 0x24, 0xC9, 0x82],
);
pub(crate) const ROOT_BOX: InterfaceId = InterfaceId::from_fields(
	0x705C_1A9A,
	0xD6DC,
	0x4C3F,
	[0x9B, 0x29, 0x85, 0xF0, 0xC4, 0xF4, 0xB7, 0xBE],
);
pub(crate) const I_STYLESHEET: InterfaceId = InterfaceId::from_fields(
	0xD77C_0DBC,
	0xC7BC,
	0x441d,
	[0x95, 0x87, 0x1E, 0x36, 0x64, 0xE1, 0xBC, 0xD3],
);
pub(crate) const STYLESHEET: InterfaceId = InterfaceId::from_fields(
	0xCCE2_A7ED,
	0x464C,
	0x4ec7,
	[0xA0, 0xB0, 0xE3, 0xC1, 0xF6, 0xB9, 0x4C, 0x5A],
);

/// Synthetic id for tests that need many distinct identities.
pub(crate) const fn iid(n: u32) -> InterfaceId {
	InterfaceId::from_fields(n, 0x5EED, 0x7E57, [0x80, 0, 0, 0, 0, 0, 0, 0x01])
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RootBox {
	pub(crate) roots: usize,
}

pub(crate) fn new_root_box() -> Box<dyn Any + Send + Sync> {
	Box::new(RootBox { roots: 0 })
}

pub(crate) static ROOT_BOX_CAPS: [InterfaceId; 3] = [I_ROOT_BOX, I_NOTIFY_CHANGE, I_SELECTION];

pub(crate) static SAMPLE_DEFS: [TypeDef; 6] = [
	TypeDef::interface("IVwNotifyChange", I_NOTIFY_CHANGE),
	TypeDef::interface("IVwSelection", I_SELECTION),
	TypeDef::interface("IVwRootBox", I_ROOT_BOX),
	TypeDef::interface("IVwStylesheet", I_STYLESHEET),
	TypeDef::class("VwRootBox", ROOT_BOX, &ROOT_BOX_CAPS).with_factory(new_root_box),
	TypeDef::class("VwStylesheet", STYLESHEET, &[I_STYLESHEET]),
];

/// Builder preloaded with [`SAMPLE_DEFS`].
pub(crate) fn sample_builder() -> RegistryBuilder {
	let mut builder = RegistryBuilder::new("test");
	for def in &SAMPLE_DEFS {
		builder.register_def(def).expect("sample defs are consistent");
	}
	builder
}

pub(crate) fn sample_registry() -> IdentityRegistry {
	IdentityRegistry::frozen(sample_builder().build().expect("sample defs build"))
}

pub(crate) fn extensible_sample_registry() -> IdentityRegistry {
	let config = RegistryConfig::default().with_label("test").extensible();
	IdentityRegistry::new(config, sample_builder().build().expect("sample defs build"))
}

/// Builder holding `n` synthetic interfaces named `I1` through `I{n}`.
pub(crate) fn synthetic_builder(n: u32) -> RegistryBuilder {
	let mut builder = RegistryBuilder::new("synthetic");
	for i in 1..=n {
		builder
			.register(&format!("I{i}"), iid(i), TypeKind::Interface)
			.expect("synthetic ids are unique");
	}
	builder
}
