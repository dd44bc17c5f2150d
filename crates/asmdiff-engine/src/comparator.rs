//! Comparator seams between the engine and domain code.
//!
//! Domain entities recurse into each other (types contain methods, methods
//! contain bodies, bodies contain instructions). Rather than hard-wiring
//! that recursion into the engine, domains implement [`Comparable`] and
//! drive the recursion themselves; the engine only supplies the scalar and
//! sequence primitives. [`Comparator`] is the object-safe variant for
//! registries that dispatch over dynamically typed operands.

use std::any::Any;

use asmdiff_tree::Directory;

use crate::error::{EngineError, EngineResult};

/// A domain value that can be structurally compared against another of its
/// own type, producing one diff directory.
pub trait Comparable {
    /// Compare `self` (left side) against `other` (right side).
    fn compare(&self, other: &Self) -> Directory;
}

/// An object-safe comparator over dynamically typed operands.
///
/// Implementations downcast both operands to their entity type, usually via
/// [`downcast_pair`], and reject mismatched pairs instead of attempting any
/// coercion.
pub trait Comparator {
    /// Compare two operands, or fail with
    /// [`EngineError::Incomparable`] if they are not both of this
    /// comparator's operand type.
    fn compare(&self, left: &dyn Any, right: &dyn Any) -> EngineResult<Directory>;
}

/// Downcast both operands to `T`, or report them as incomparable.
pub fn downcast_pair<'a, T: Any>(
    left: &'a dyn Any,
    right: &'a dyn Any,
) -> EngineResult<(&'a T, &'a T)> {
    match (left.downcast_ref::<T>(), right.downcast_ref::<T>()) {
        (Some(l), Some(r)) => Ok((l, r)),
        _ => Err(EngineError::Incomparable {
            expected: std::any::type_name::<T>(),
        }),
    }
}

/// Blanket bridge: any `Comparable` entity type is usable behind the
/// dynamic seam through this adapter.
pub struct TypedComparator<T> {
    _marker: std::marker::PhantomData<fn(&T)>,
}

impl<T> TypedComparator<T> {
    /// Create the adapter for entity type `T`.
    pub fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> Default for TypedComparator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Comparable + Any> Comparator for TypedComparator<T> {
    fn compare(&self, left: &dyn Any, right: &dyn Any) -> EngineResult<Directory> {
        let (l, r) = downcast_pair::<T>(left, right)?;
        Ok(l.compare(r))
    }
}
