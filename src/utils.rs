use std::collections::HashSet;

use crate::error::{CldError, MissingFrom, Result};

/// Returns the label for the `index`-th distinct cluster
///
/// Labels run `a`..`z`, then `aa`, `ab`, ..., `zz`, `aaa` (bijective base 26).
pub fn letter_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        n -= 1;
        label.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    label.into_iter().rev().collect()
}

/// Fails on the first group listed twice
pub fn ensure_unique<S: AsRef<str>>(groups: &[S]) -> Result<()> {
    let mut seen = HashSet::with_capacity(groups.len());
    for group in groups {
        if !seen.insert(group.as_ref()) {
            return Err(CldError::DuplicateGroup {
                group: group.as_ref().to_string(),
            });
        }
    }
    Ok(())
}

/// Checks that the dataset and the post-hoc table name exactly the same groups
pub fn match_group_sets<S: AsRef<str>, T: AsRef<str>>(dataset: &[S], posthoc: &[T]) -> Result<()> {
    let dataset_set = dataset.iter().map(|g| g.as_ref()).collect::<HashSet<_>>();
    let posthoc_set = posthoc.iter().map(|g| g.as_ref()).collect::<HashSet<_>>();

    if let Some(group) = posthoc.iter().find(|g| !dataset_set.contains(g.as_ref())) {
        return Err(CldError::GroupMismatch {
            group: group.as_ref().to_string(),
            missing_from: MissingFrom::Dataset,
        });
    }
    if let Some(group) = dataset.iter().find(|g| !posthoc_set.contains(g.as_ref())) {
        return Err(CldError::GroupMismatch {
            group: group.as_ref().to_string(),
            missing_from: MissingFrom::PostHoc,
        });
    }
    Ok(())
}
