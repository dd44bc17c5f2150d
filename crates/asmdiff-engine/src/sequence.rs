//! Positional sequence alignment.
//!
//! Two ordered sequences are paired strictly by index up to the shorter
//! length; each pair is compared by a caller-supplied closure into a child
//! directory. Excess trailing items on the longer side become one record
//! apiece. There is no identity matching and no edit-distance alignment:
//! item `i` on the left is always compared against item `i` on the right,
//! which keeps alignment O(n) at the cost of false `Change` results when
//! corresponding items are reordered.

use asmdiff_tree::{Directory, Record, RecordKind};

/// Which side of a comparison an excess element sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The left (old) sequence.
    Left,
    /// The right (new) sequence.
    Right,
}

/// How excess elements on the longer side are reported.
///
/// The canonical policy is [`ExcessPolicy::Directional`]. [`AlwaysRemove`]
/// reproduces the legacy reports in which a longer right side was also
/// tallied under `Remove`; it exists so consumers of those reports can keep
/// their counts stable, and is otherwise not recommended.
///
/// [`AlwaysRemove`]: ExcessPolicy::AlwaysRemove
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExcessPolicy {
    /// Excess on the left is `Remove`, excess on the right is `Substitute`.
    #[default]
    Directional,
    /// Excess on either side is `Remove`.
    AlwaysRemove,
}

impl ExcessPolicy {
    /// The record kind assigned to an excess element on `side`.
    pub fn kind_for(self, side: Side) -> RecordKind {
        match (self, side) {
            (ExcessPolicy::Directional, Side::Left) => RecordKind::Remove,
            (ExcessPolicy::Directional, Side::Right) => RecordKind::Substitute,
            (ExcessPolicy::AlwaysRemove, _) => RecordKind::Remove,
        }
    }
}

/// Tagging and policy for the excess records of one alignment call.
#[derive(Clone, Copy, Debug)]
pub struct ExcessSpec<'a> {
    /// Domain tag stamped on every excess record.
    pub value_kind: &'a str,
    /// Attribute label stamped on every excess record.
    pub reason: &'a str,
    /// Kind assignment for excess elements.
    pub policy: ExcessPolicy,
}

impl<'a> ExcessSpec<'a> {
    /// Spec with the default [`ExcessPolicy::Directional`] policy.
    pub fn new(value_kind: &'a str, reason: &'a str) -> Self {
        Self {
            value_kind,
            reason,
            policy: ExcessPolicy::default(),
        }
    }

    /// Override the excess policy.
    pub fn with_policy(mut self, policy: ExcessPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Align `left` against `right` into `dest`.
///
/// For `i` in `[0, min(m, n))`, `pair(&left[i], &right[i])` produces a child
/// directory appended to `dest` in index order. For each of the `|m - n|`
/// excess trailing items, `placeholder` renders the record's left/right text
/// (callers typically show the known side and a `"[none]"` or `"..."`
/// sentinel for the missing one) and the spec's policy picks the kind.
/// Equal-length input, including two empty sequences, emits no excess
/// records at all.
pub fn compare_sequences<T>(
    dest: &mut Directory,
    left: &[T],
    right: &[T],
    excess: ExcessSpec<'_>,
    mut pair: impl FnMut(&T, &T) -> Directory,
    mut placeholder: impl FnMut(Side, &T) -> (String, String),
) {
    let aligned = left.len().min(right.len());
    for i in 0..aligned {
        dest.push_directory(pair(&left[i], &right[i]));
    }

    let (side, tail) = if left.len() > right.len() {
        (Side::Left, &left[aligned..])
    } else {
        (Side::Right, &right[aligned..])
    };
    for item in tail {
        let (l, r) = placeholder(side, item);
        dest.push_record(Record::new(
            excess.policy.kind_for(side),
            excess.value_kind,
            l,
            r,
            excess.reason,
        ));
    }
}

#[cfg(test)]
mod tests {
    use asmdiff_tree::DiffTree;

    use super::*;
    use crate::scalar::compare_scalar;

    /// Trivial element comparator: one directory holding one string
    /// equality record.
    fn pair_strings(l: &&str, r: &&str) -> Directory {
        let mut dir = Directory::new("Item");
        dir.push_record(compare_scalar("Item", "Value", l, r));
        dir
    }

    fn elide(_: Side, _: &&str) -> (String, String) {
        ("...".to_string(), "...".to_string())
    }

    fn align(left: &[&str], right: &[&str], policy: ExcessPolicy) -> Directory {
        let mut dest = Directory::new("Items");
        compare_sequences(
            &mut dest,
            left,
            right,
            ExcessSpec::new("Item", "Item").with_policy(policy),
            pair_strings,
            elide,
        );
        dest
    }

    #[test]
    fn equal_length_sequences_emit_no_excess_records() {
        let dest = align(&["a", "b", "c"], &["a", "b", "c"], ExcessPolicy::Directional);
        assert_eq!(dest.directories().len(), 3);
        assert!(dest.records().is_empty());
    }

    #[test]
    fn both_empty_is_vacuously_exact() {
        let dest = align(&[], &[], ExcessPolicy::Directional);
        assert!(dest.records().is_empty());
        assert!(dest.directories().is_empty());
    }

    #[test]
    fn longer_left_side_emits_remove_records() {
        let dest = align(&["A", "B", "C"], &["A", "B"], ExcessPolicy::Directional);
        assert_eq!(dest.directories().len(), 2);
        assert!(dest
            .directories()
            .iter()
            .all(|d| d.records()[0].kind() == RecordKind::Exact));
        assert_eq!(dest.records().len(), 1);
        assert_eq!(dest.records()[0].kind(), RecordKind::Remove);
    }

    #[test]
    fn longer_right_side_emits_substitute_records() {
        let dest = align(&["A"], &["A", "B", "C"], ExcessPolicy::Directional);
        assert_eq!(dest.directories().len(), 1);
        assert_eq!(dest.records().len(), 2);
        assert!(dest
            .records()
            .iter()
            .all(|r| r.kind() == RecordKind::Substitute));
    }

    #[test]
    fn always_remove_policy_flattens_both_directions() {
        let right_heavy = align(&["A"], &["A", "B"], ExcessPolicy::AlwaysRemove);
        assert_eq!(right_heavy.records()[0].kind(), RecordKind::Remove);

        let left_heavy = align(&["A", "B"], &["A"], ExcessPolicy::AlwaysRemove);
        assert_eq!(left_heavy.records()[0].kind(), RecordKind::Remove);
    }

    #[test]
    fn pairing_is_positional_not_content_based() {
        // The same elements rotated by one: every aligned pair differs.
        let dest = align(&["a", "b", "c"], &["c", "a", "b"], ExcessPolicy::Directional);
        assert!(dest
            .directories()
            .iter()
            .all(|d| d.records()[0].kind() == RecordKind::Change));
    }

    #[test]
    fn placeholder_sees_the_excess_element() {
        let mut dest = Directory::new("Instructions");
        compare_sequences(
            &mut dest,
            &["nop", "ret", "add"],
            &["nop"],
            ExcessSpec::new("Instruction", "Instruction"),
            pair_strings,
            |side, item| {
                assert_eq!(side, Side::Left);
                (item.to_string(), "[none]".to_string())
            },
        );
        let lefts: Vec<_> = dest.records().iter().map(|r| r.left()).collect();
        assert_eq!(lefts, ["ret", "add"]);
        assert!(dest.records().iter().all(|r| r.right() == "[none]"));
    }

    #[test]
    fn excess_counts_feed_tree_aggregation() {
        let mut root = Directory::new("Root");
        let mut items = Directory::new("Items");
        compare_sequences(
            &mut items,
            &["a", "b", "c", "d"],
            &["a"],
            ExcessSpec::new("Item", "Item"),
            pair_strings,
            elide,
        );
        root.push_directory(items);
        let tree = DiffTree::new(root);

        assert_eq!(tree.count_all(RecordKind::Remove), 3);
        assert_eq!(tree.count_all(RecordKind::Exact), 1);
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn alignment_shape_holds_for_any_lengths(
                left in proptest::collection::vec("[a-z]{0,4}", 0..12),
                right in proptest::collection::vec("[a-z]{0,4}", 0..12),
            ) {
                let left: Vec<&str> = left.iter().map(String::as_str).collect();
                let right: Vec<&str> = right.iter().map(String::as_str).collect();
                let dest = align(&left, &right, ExcessPolicy::Directional);

                prop_assert_eq!(
                    dest.directories().len(),
                    left.len().min(right.len())
                );
                prop_assert_eq!(
                    dest.records().len(),
                    left.len().abs_diff(right.len())
                );
                let expected = if left.len() > right.len() {
                    RecordKind::Remove
                } else {
                    RecordKind::Substitute
                };
                prop_assert!(dest.records().iter().all(|r| r.kind() == expected));
            }
        }
    }
}
