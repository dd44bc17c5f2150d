//! The root wrapper around a comparison result.

use std::io;

use crate::directory::Directory;
use crate::error::TreeResult;
use crate::json;
use crate::record::RecordKind;

/// A complete diff tree: one root [`Directory`] plus whole-tree queries.
///
/// Built once per comparison run, read any number of times, then dropped.
/// The tree exclusively owns its nodes, so independent comparisons can run
/// concurrently without synchronization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffTree {
    root: Directory,
}

impl DiffTree {
    /// Wrap a finished root directory.
    pub fn new(root: Directory) -> Self {
        Self { root }
    }

    /// The root directory.
    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// Unwrap the root directory.
    pub fn into_root(self) -> Directory {
        self.root
    }

    /// Whether any record exists anywhere in the tree, including the root's
    /// own direct records. Short-circuits on the first hit.
    pub fn has_diff_records(&self) -> bool {
        self.root.has_records_recursive()
    }

    /// Count records of `kind` across the tree.
    ///
    /// Counting starts at the root's child directories; records pushed
    /// directly onto the root are excluded (see [`Directory::count_all`]).
    pub fn count_all(&self, kind: RecordKind) -> usize {
        self.root.count_all(kind)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> TreeResult<String> {
        json::to_json(&self.root)
    }

    /// Serialize to indented JSON. A pure formatting variant of
    /// [`DiffTree::to_json`].
    pub fn to_json_pretty(&self) -> TreeResult<String> {
        json::to_json_pretty(&self.root)
    }

    /// Stream compact JSON into `writer`.
    pub fn write_json<W: io::Write>(&self, writer: W) -> TreeResult<()> {
        json::write_json(&self.root, writer)
    }

    /// Parse a serialized diff tree.
    pub fn from_json(text: &str) -> TreeResult<Self> {
        Ok(Self::new(json::from_json(text)?))
    }
}
