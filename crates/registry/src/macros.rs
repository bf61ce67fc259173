//! Declaration macro for type tables.

/// Declares a module of identities and submits it as a [`ModuleTable`](crate::ModuleTable).
///
/// One line per symbol, `interface` or `class`, followed by the id's four GUID fields.
/// Classes may list the interfaces they satisfy (by symbol, from the same table) and a
/// constructor:
///
/// ```ignore
/// iid_registry::type_table! {
///     pub mod shapes = "shapes" {
///         interface IShape = (0x11111111, 0x2222, 0x3333, [0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB]);
///         class Circle = (0x11111112, 0x2222, 0x3333, [0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB])
///             implements [IShape] factory new_circle;
///     }
/// }
/// ```
///
/// The generated module exposes `ids::<Symbol>` constants, the `TABLE` slice, and the
/// `MODULE` label recorded as the entries' source.
#[macro_export]
macro_rules! type_table {
	(@def interface $name:ident) => {
		$crate::TypeDef::interface(stringify!($name), ids::$name)
	};
	(@def class $name:ident $([$($cap:ident),*])? $(factory $factory:path)?) => {
		$crate::TypeDef::class(stringify!($name), ids::$name, &[$($(ids::$cap),*)?])
			$(.with_factory($factory))?
	};
	(
		$(#[$attr:meta])*
		$vis:vis mod $module:ident = $label:literal {
			$(
				$kind:ident $name:ident = (
					$d1:literal, $d2:literal, $d3:literal, [$($d4:literal),+ $(,)?]
				)
				$(implements [$($cap:ident),* $(,)?])?
				$(factory $factory:path)?
				;
			)*
		}
	) => {
		$(#[$attr])*
		$vis mod $module {
			#[allow(unused_imports)]
			use super::*;

			/// Identifiers declared by this table.
			#[allow(non_upper_case_globals)]
			pub mod ids {
				$(
					pub const $name: $crate::InterfaceId =
						$crate::InterfaceId::from_fields($d1, $d2, $d3, [$($d4),+]);
				)*
			}

			/// Module label recorded as the source of every entry.
			pub const MODULE: &str = $label;

			/// Every definition of this table, in declaration order.
			pub const TABLE: &[$crate::TypeDef] = &[
				$( $crate::type_table!(@def $kind $name $([$($cap),*])? $(factory $factory)?), )*
			];

			$crate::inventory::submit! { $crate::ModuleTable::new(MODULE, TABLE) }
		}
	};
}
