//! Order-preserving grouping of fields into composite variables.

use crate::field::{FieldId, FieldSpec};
use fxhash::FxHashMap;
use std::borrow::Cow;
use std::fmt;

/// `(variable, block)` pair under which fields are written as one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    variable: Cow<'static, str>,
    block: Option<Cow<'static, str>>,
}

impl GroupKey {
    /// Key of a top-level (unblocked) variable.
    pub fn new(variable: impl Into<Cow<'static, str>>) -> Self {
        Self { variable: variable.into(), block: None }
    }

    pub fn in_block(
        variable: impl Into<Cow<'static, str>>,
        block: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { variable: variable.into(), block: Some(block.into()) }
    }

    pub(crate) fn of(spec: &FieldSpec) -> Self {
        Self { variable: spec.raw_variable().clone(), block: spec.raw_block().cloned() }
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    #[must_use]
    pub fn block(&self) -> Option<&str> {
        self.block.as_deref()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.block {
            Some(block) => write!(f, "{block}/{}", self.variable),
            None => f.write_str(&self.variable),
        }
    }
}

/// One composite variable: its key and member fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    key: GroupKey,
    members: Vec<FieldId>,
}

impl Group {
    #[must_use]
    pub const fn key(&self) -> &GroupKey {
        &self.key
    }

    /// Never empty: a group only exists because a field opened it.
    #[must_use]
    pub fn members(&self) -> &[FieldId] {
        &self.members
    }
}

/// Maps each distinct `(variable, block)` to the fields that jointly form it.
///
/// Groups iterate in the order their key first appears among the fields; the hash map is
/// only a lookup side table and never drives iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingIndex {
    groups: Vec<Group>,
    lookup: FxHashMap<GroupKey, usize>,
}

impl GroupingIndex {
    /// Scans `fields` in declaration order, opening a group on first sight of a key and
    /// appending every occurrence to it.
    #[must_use]
    pub fn build(fields: &[FieldSpec]) -> Self {
        let mut index = Self::default();
        for (position, spec) in fields.iter().enumerate() {
            let key = GroupKey::of(spec);
            let slot = match index.lookup.get(&key) {
                Some(&slot) => slot,
                None => {
                    let slot = index.groups.len();
                    index.lookup.insert(key.clone(), slot);
                    index.groups.push(Group { key, members: Vec::new() });
                    slot
                },
            };
            index.groups[slot].members.push(FieldId(position));
        }
        index
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &GroupKey) -> Option<&Group> {
        self.lookup.get(key).map(|&slot| &self.groups[slot])
    }

    #[must_use]
    pub fn contains(&self, key: &GroupKey) -> bool {
        self.lookup.contains_key(key)
    }

    /// Member fields of `key`.
    ///
    /// # Panics
    /// Panics when `key` is not part of this index. Keys come from the index itself or
    /// from validated override tables, so a miss is a programming error.
    #[must_use]
    pub fn members(&self, key: &GroupKey) -> &[FieldId] {
        match self.get(key) {
            Some(group) => group.members(),
            None => panic!("grouping key `{key}` has no fields in this section"),
        }
    }

    /// Distinct block names in first-appearance order.
    pub fn blocks(&self) -> impl Iterator<Item = &str> {
        let mut seen = Vec::new();
        self.groups.iter().filter_map(|g| g.key.block()).filter(move |b| {
            if seen.contains(b) {
                false
            } else {
                seen.push(*b);
                true
            }
        })
    }
}

impl<'a> IntoIterator for &'a GroupingIndex {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_like() -> Vec<FieldSpec> {
        vec![
            FieldSpec::float("f1", "LONMIN", 14.0),
            FieldSpec::integer("f2", "NX", 50),
            FieldSpec::boolean("f3", "NX", false).label("RESOLUTION"),
            FieldSpec::float("f4", "NX", 0.1),
            FieldSpec::float("f5", "FI_MEAN", 2.5).block("IF_GAUSSIAN"),
            FieldSpec::string("f6", "FI_MEAN", "0.25 0.75").block("IF_BIGAUSSIAN"),
            FieldSpec::float("f7", "LATMIN", 36.5),
        ]
    }

    #[test]
    fn composite_members_keep_declaration_order() {
        let index = GroupingIndex::build(&grid_like());
        let members = index.members(&GroupKey::new("NX"));
        assert_eq!(members, &[FieldId(1), FieldId(2), FieldId(3)]);
    }

    #[test]
    fn groups_follow_first_appearance() {
        let index = GroupingIndex::build(&grid_like());
        let keys: Vec<String> = index.iter().map(|g| g.key().to_string()).collect();
        assert_eq!(keys, ["LONMIN", "NX", "IF_GAUSSIAN/FI_MEAN", "IF_BIGAUSSIAN/FI_MEAN", "LATMIN"]);
    }

    #[test]
    fn same_variable_in_different_blocks_is_distinct() {
        let index = GroupingIndex::build(&grid_like());
        assert!(index.contains(&GroupKey::in_block("FI_MEAN", "IF_GAUSSIAN")));
        assert!(index.contains(&GroupKey::in_block("FI_MEAN", "IF_BIGAUSSIAN")));
        assert!(!index.contains(&GroupKey::new("FI_MEAN")));
        assert_eq!(index.blocks().collect::<Vec<_>>(), ["IF_GAUSSIAN", "IF_BIGAUSSIAN"]);
    }

    #[test]
    #[should_panic(expected = "has no fields")]
    fn unknown_key_fails_fast() {
        let index = GroupingIndex::build(&grid_like());
        let _ = index.members(&GroupKey::new("NZ"));
    }
}
