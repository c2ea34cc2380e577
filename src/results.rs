use std::collections::BTreeMap;

use derive_new::new;
use itertools::Itertools;

/// A single group and the letter it was assigned
#[derive(Debug, Clone, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupLabel {
    pub group: String,
    pub label: String,
}

/// Mapping from group to display label
///
/// Entries are kept in the order the groups were scanned while handing out
/// letters, which is the order the labels first appear in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LetterAssignment {
    entries: Vec<GroupLabel>,
}
impl LetterAssignment {
    pub fn from_vec(entries: Vec<GroupLabel>) -> Self {
        Self { entries }
    }

    /// Label of `group`, if it was part of the assignment
    pub fn label(&self, group: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.group == group)
            .map(|entry| entry.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupLabel> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if both groups are present and carry the same label
    pub fn same_label(&self, first: &str, second: &str) -> bool {
        match (self.label(first), self.label(second)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Distinct labels in order of first appearance
    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.label.as_str())
            .unique()
            .collect()
    }

    /// Groups sharing each label
    pub fn clusters(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut clusters: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for entry in &self.entries {
            clusters
                .entry(entry.label.as_str())
                .or_default()
                .push(entry.group.as_str());
        }
        clusters
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|entry| (entry.group.clone(), entry.label.clone()))
            .collect()
    }

    pub fn pprint(&self) {
        println!("Group\tLabel");
        for entry in &self.entries {
            println!("{}\t{}", entry.group, entry.label);
        }
    }
}
impl<'a> IntoIterator for &'a LetterAssignment {
    type Item = &'a GroupLabel;
    type IntoIter = std::slice::Iter<'a, GroupLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
