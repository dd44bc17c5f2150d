//! Composite tree nodes: named containers of records and subdirectories.

use crate::record::{Record, RecordKind};

/// A named tree node grouping related [`Record`]s and nested directories.
///
/// A directory is append-only while its owning comparison builds it; once
/// handed to a consumer it is logically read-only (all read access goes
/// through shared slices). Children are owned values in vectors, so an
/// "absent child" cannot be represented and never needs a defensive check.
///
/// Insertion order is comparison order and is significant: serialization and
/// aggregation both walk children in the order they were pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directory {
    dir_type: String,
    records: Vec<Record>,
    directories: Vec<Directory>,
}

impl Directory {
    /// Create an empty directory labeled with `dir_type` (e.g. `"Type"`,
    /// `"Methods"`, `"Instruction;Nop,Nop"`).
    pub fn new(dir_type: impl Into<String>) -> Self {
        Self {
            dir_type: dir_type.into(),
            records: Vec::new(),
            directories: Vec::new(),
        }
    }

    /// The label naming what this subtree represents.
    pub fn dir_type(&self) -> &str {
        &self.dir_type
    }

    /// Append a leaf record.
    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Append a child directory.
    pub fn push_directory(&mut self, directory: Directory) {
        self.directories.push(directory);
    }

    /// This node's direct records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// This node's child directories, in insertion order.
    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    /// Whether this node has any direct records.
    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    /// Whether this node has any child directories.
    pub fn has_directories(&self) -> bool {
        !self.directories.is_empty()
    }

    /// Count records of `kind` across this node's *descendants*.
    ///
    /// The receiver's own direct records are excluded: counting starts at
    /// the child directories. Call this on a root whose records live one
    /// level down, which is how comparison roots are built.
    pub fn count_all(&self, kind: RecordKind) -> usize {
        self.directories
            .iter()
            .map(|dir| dir.count_with_own(kind))
            .sum()
    }

    fn count_with_own(&self, kind: RecordKind) -> usize {
        let own = self.records.iter().filter(|r| r.kind() == kind).count();
        own + self.count_all(kind)
    }

    /// Whether any record exists anywhere in this subtree, including the
    /// receiver's own direct records. Short-circuits on the first hit.
    pub fn has_records_recursive(&self) -> bool {
        if self.has_records() {
            return true;
        }
        self.directories.iter().any(Directory::has_records_recursive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: RecordKind) -> Record {
        Record::new(kind, "Field", "a", "b", "Name")
    }

    #[test]
    fn empty_directory() {
        let dir = Directory::new("Root");
        assert_eq!(dir.dir_type(), "Root");
        assert!(!dir.has_records());
        assert!(!dir.has_directories());
        assert!(!dir.has_records_recursive());
        assert_eq!(dir.count_all(RecordKind::Exact), 0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut dir = Directory::new("Field");
        dir.push_record(Record::new(RecordKind::Exact, "Field", "x", "x", "Name"));
        dir.push_record(Record::new(RecordKind::Change, "Field", "i32", "i64", "Type"));
        let reasons: Vec<_> = dir.records().iter().map(Record::reason).collect();
        assert_eq!(reasons, ["Name", "Type"]);
    }

    #[test]
    fn count_all_skips_own_records() {
        let mut root = Directory::new("Root");
        root.push_record(record(RecordKind::Change));

        let mut child = Directory::new("Field");
        child.push_record(record(RecordKind::Change));
        child.push_record(record(RecordKind::Exact));
        root.push_directory(child);

        // The root's own Change record is not counted.
        assert_eq!(root.count_all(RecordKind::Change), 1);
        assert_eq!(root.count_all(RecordKind::Exact), 1);
    }

    #[test]
    fn count_all_descends_nested_directories() {
        let mut inner = Directory::new("Instruction");
        inner.push_record(record(RecordKind::Remove));
        inner.push_record(record(RecordKind::Remove));

        let mut middle = Directory::new("MethodBody");
        middle.push_record(record(RecordKind::Remove));
        middle.push_directory(inner);

        let mut root = Directory::new("Method");
        root.push_directory(middle);

        assert_eq!(root.count_all(RecordKind::Remove), 3);
        assert_eq!(root.count_all(RecordKind::Substitute), 0);
    }

    #[test]
    fn has_records_recursive_finds_deep_record() {
        let mut deep = Directory::new("Variable");
        deep.push_record(record(RecordKind::Exact));

        let mut middle = Directory::new("Variables");
        middle.push_directory(deep);

        let mut root = Directory::new("Root");
        root.push_directory(Directory::new("Empty"));
        root.push_directory(middle);

        assert!(root.has_records_recursive());
    }

    #[test]
    fn has_records_recursive_counts_own_records() {
        let mut root = Directory::new("Root");
        root.push_record(record(RecordKind::Exact));
        assert!(root.has_records_recursive());
    }
}
