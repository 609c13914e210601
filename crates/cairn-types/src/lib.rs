//! Foundation types for cairn.
//!
//! This crate provides the two primitives shared by every other cairn crate:
//! the opaque [`ContentHash`] identifier handed back by a content-addressed
//! object store, and the path canonicalization helpers that turn arbitrary
//! caller-supplied paths into the slash-delimited keys the index layer
//! stores.
//!
//! # Key Types
//!
//! - [`ContentHash`] — Opaque content-addressed identifier, carried as a
//!   string between the object store that produced it and the index mappings
//!   that reference it
//! - [`path`] — Canonicalization and segmentation of path strings

pub mod hash;
pub mod path;

pub use hash::ContentHash;
