//! Content-addressed object storage interface for cairn.
//!
//! The object store is one of the two backends the path adapter sits on. It
//! knows nothing about paths: writing bytes returns an opaque
//! [`ContentHash`](cairn_types::ContentHash), and reading requires that hash.
//! All hierarchy emulation lives in the index layer, not here.
//!
//! # Design Rules
//!
//! 1. Writing the same bytes always yields the same hash (idempotent,
//!    deduplicating).
//! 2. Content is immutable once written.
//! 3. The store never interprets content; it is a pure bytes-by-hash store.
//! 4. All backend errors are propagated, never silently ignored.
//!
//! # Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`InMemoryObjectStore`] — `HashMap`-based store for tests and embedding

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryObjectStore;
pub use traits::ObjectStore;
