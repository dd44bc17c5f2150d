//! Comparison engine for asmdiff.
//!
//! Turns pairs of already-stringified domain values into diff records and
//! whole sequences of child entities into aligned subtrees. The engine is
//! domain-agnostic: it never parses anything and never enumerates entity
//! attributes itself. Domain code supplies the attribute call sites and the
//! recursion between entity kinds through the comparator seams.
//!
//! Comparison is synchronous, allocation-only, and free of shared state;
//! every call appends into a tree the caller exclusively owns.
//!
//! # Key Types
//!
//! - [`compare_scalar`] / [`Reporter`] — One attribute pair, one record
//! - [`compare_sequences`] / [`ExcessPolicy`] — Positional alignment of child sequences
//! - [`Comparable`] / [`Comparator`] — Seams for domain-driven recursion
//! - [`EngineError`] — Contract violations at the dynamic seam

pub mod comparator;
pub mod error;
pub mod scalar;
pub mod sequence;

pub use comparator::{downcast_pair, Comparable, Comparator, TypedComparator};
pub use error::{EngineError, EngineResult};
pub use scalar::{compare_scalar, Reporter};
pub use sequence::{compare_sequences, ExcessPolicy, ExcessSpec, Side};
