//! Diff tree data model for asmdiff.
//!
//! This crate provides the tree that comparison results are assembled into:
//! leaf records, named composite directories, whole-tree aggregation, and
//! the canonical JSON wire form. It knows nothing about any particular
//! domain being compared; the engine crate builds these trees.
//!
//! # Key Types
//!
//! - [`RecordKind`] — The four comparison outcomes (Exact/Change/Remove/Substitute)
//! - [`Record`] — Immutable leaf node for one scalar comparison
//! - [`Directory`] — Named composite node owning records and subdirectories
//! - [`DiffTree`] — Root wrapper: existence check, per-kind counts, JSON I/O

pub mod directory;
pub mod error;
pub mod json;
pub mod record;
pub mod tree;

pub use directory::Directory;
pub use error::{TreeError, TreeResult};
pub use record::{Record, RecordKind};
pub use tree::DiffTree;
