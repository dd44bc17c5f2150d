//! Scalar comparison: one attribute pair, one record.

use asmdiff_tree::{Directory, Record, RecordKind};

/// Compare two already-stringified attribute values.
///
/// Ordinal string equality: equal values yield an `Exact` record, anything
/// else a `Change`. Callers normalize absent values to a sentinel string
/// (`"null"`, `"[none]"`) before calling; the engine never sees an absent
/// operand.
pub fn compare_scalar(
    value_kind: &str,
    reason: &str,
    left: &str,
    right: &str,
) -> Record {
    let kind = if left == right {
        RecordKind::Exact
    } else {
        RecordKind::Change
    };
    Record::new(kind, value_kind, left, right, reason)
}

/// Pushes scalar comparison records into one directory under a fixed
/// `value_kind` tag.
///
/// Domain comparators report many attributes of the same entity in a row;
/// a reporter keeps those call sites down to one line per attribute.
pub struct Reporter<'a> {
    dir: &'a mut Directory,
    value_kind: String,
}

impl<'a> Reporter<'a> {
    /// Create a reporter appending to `dir`, tagging every record with
    /// `value_kind`.
    pub fn new(dir: &'a mut Directory, value_kind: impl Into<String>) -> Self {
        Self {
            dir,
            value_kind: value_kind.into(),
        }
    }

    /// Compare one attribute and append the resulting record.
    pub fn report(&mut self, reason: &str, left: &str, right: &str) {
        self.dir
            .push_record(compare_scalar(&self.value_kind, reason, left, right));
    }
}
