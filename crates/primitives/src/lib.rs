//! Identity primitives shared by every crate that names types across module boundaries.

/// 128-bit interface and class identifiers.
pub mod id;
/// Interface/class discrimination.
pub mod kind;

pub use id::{InterfaceId, ParseIdError};
pub use kind::TypeKind;
