//! Leaf records: one scalar comparison outcome each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// The outcome of comparing one attribute (or one excess sequence element).
///
/// The four names form a stable enumeration contract for serialized trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Both sides are present at the same position and are identical.
    Exact,
    /// Both sides are present at the same position but differ.
    Change,
    /// The element exists only on the left (longer) side.
    Remove,
    /// The element exists only on the right (longer) side.
    Substitute,
}

impl RecordKind {
    /// All kinds, in summary-reporting order.
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Exact,
        RecordKind::Change,
        RecordKind::Remove,
        RecordKind::Substitute,
    ];

    /// The symbolic name used in serialized trees.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Exact => "Exact",
            RecordKind::Change => "Change",
            RecordKind::Remove => "Remove",
            RecordKind::Substitute => "Substitute",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Exact" => Ok(RecordKind::Exact),
            "Change" => Ok(RecordKind::Change),
            "Remove" => Ok(RecordKind::Remove),
            "Substitute" => Ok(RecordKind::Substitute),
            other => Err(TreeError::UnknownKind(other.to_string())),
        }
    }
}

/// An immutable leaf node capturing one comparison outcome.
///
/// `left` and `right` hold string renderings of the two compared values.
/// Callers normalize absent values to a sentinel such as `"null"` or
/// `"[none]"` before constructing a record; the fields are never optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    kind: RecordKind,
    value_kind: String,
    left: String,
    right: String,
    reason: String,
}

impl Record {
    /// Create a record.
    ///
    /// `value_kind` tags the domain concept this record describes (e.g.
    /// `"Field"`, `"Instruction"`); the tree treats it opaquely. `reason`
    /// names the compared attribute (e.g. `"Name"`, `"Static"`).
    pub fn new(
        kind: RecordKind,
        value_kind: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            value_kind: value_kind.into(),
            left: left.into(),
            right: right.into(),
            reason: reason.into(),
        }
    }

    /// The comparison outcome.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The caller-supplied domain tag.
    pub fn value_kind(&self) -> &str {
        &self.value_kind
    }

    /// String rendering of the left-hand value.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// String rendering of the right-hand value.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// The name of the compared attribute.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
