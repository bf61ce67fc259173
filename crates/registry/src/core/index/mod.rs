#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Identity index infrastructure.
//!
//! # Purpose
//!
//! The `index` subsystem turns static type tables into a validated, immutable mapping from
//! 128-bit ids to entries (and from symbolic names to ids), and answers identity and
//! capability queries against it.
//!
//! # Mental Model
//!
//! 1. **Build Phase:** [`RegistryBuilder`] ingests registrations single-threaded, rejecting
//!    duplicate ids and names as they arrive, then validates capability declarations and
//!    freezes a [`Snapshot`].
//! 2. **Publication:** The [`Snapshot`] is handed to an [`IdentityRegistry`], which keeps it
//!    behind an atomic pointer.
//! 3. **Consumption:** Readers load the current [`Snapshot`] and perform O(1) lookups by id,
//!    receiving a [`RegistryRef`] or [`CapabilityHandle`] that pins that snapshot.
//! 4. **Extension:** [`IdentityRegistry::extend`] rebuilds under a write lock from the current
//!    snapshot plus the new definitions and swaps the result in.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`RegistryBuilder`] | Accumulates registrations and enforces uniqueness. |
//! | [`Snapshot`] | Frozen table with id and name maps. |
//! | [`IdentityRegistry`] | Publishes the current snapshot; serializes extensions. |
//! | [`RegistryRef`] | A pinned handle to an entry. |
//! | [`CapabilityHandle`] | A pinned proof that a class satisfies an interface. |
//!
//! # Concurrency
//!
//! - **Reads:** Wait-free (atomic load of current snapshot).
//! - **Writes:** Serialized by a mutex; published with a single atomic store.
//!
//! # Invariants
//!
//! - Must bind each id to exactly one name and each name to exactly one id.
//!   - Enforced in: [`RegistryBuilder::register`], [`IdentityRegistry::extend`].
//!   - Tested by: [`crate::core::index::invariants::test_unique_bindings`]
//!   - Failure symptom: Two types answer to the same identity.
//!
//! - Must only accept interface ids in class capability sets.
//!   - Enforced in: [`RegistryBuilder::build`].
//!   - Tested by: [`crate::core::index::invariants::test_capabilities_name_interfaces`]
//!   - Failure symptom: A capability query hands out a class where an interface was promised.
//!
//! - Must keep snapshots alive while handles reference them.
//!   - Enforced in: [`RegistryRef`] and [`CapabilityHandle`] (hold `Arc<Snapshot>`).
//!   - Tested by: [`crate::core::index::invariants::test_handles_pin_snapshot_across_extension`]
//!   - Failure symptom: A handle observes entries it was not resolved against.
//!
//! - Must not change a published entry's capabilities or constructor.
//!   - Enforced in: [`RegistryBuilder`] (entries seeded from a snapshot are sealed).
//!   - Tested by: [`crate::core::index::invariants::test_published_entries_are_sealed`]
//!   - Failure symptom: Two readers get different capability answers for the same class.
//!
//! - Must never publish a partially applied extension.
//!   - Enforced in: [`IdentityRegistry::extend`] (build fully, then store).
//!   - Tested by: [`crate::core::index::invariants::test_extension_is_atomic`]
//!   - Failure symptom: Readers see some entries of a rejected batch.

mod build;
mod capability;
mod runtime;
mod snapshot;

pub use build::RegistryBuilder;
pub use capability::CapabilityHandle;
pub use runtime::IdentityRegistry;
pub use snapshot::{RegistryRef, Snapshot};

#[cfg(any(test, doc))]
pub(crate) mod invariants;

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
mod tests;
