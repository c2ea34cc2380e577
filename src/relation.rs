use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    error::{CldError, MissingFrom, Result},
    utils::ensure_unique,
};

/// Pairwise "statistically indistinguishable" verdicts over a fixed group set
///
/// Verdicts are stored once per unordered pair, so the relation is symmetric
/// by construction. Groups keep the order in which the post-hoc step reported
/// them; that order drives the pair enumeration of the letter assigner.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseRelation {
    groups: Vec<String>,
    index: HashMap<String, usize>,
    verdicts: HashMap<(usize, usize), bool>,
}
impl PairwiseRelation {
    /// Creates a relation with no verdicts yet
    pub(crate) fn new<S: AsRef<str>>(groups: &[S]) -> Result<Self> {
        ensure_unique(groups)?;
        let groups = groups
            .iter()
            .map(|g| g.as_ref().to_string())
            .collect::<Vec<_>>();
        let index = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.clone(), i))
            .collect();
        Ok(Self {
            groups,
            index,
            verdicts: HashMap::new(),
        })
    }

    /// Creates a relation from `(first, second, indistinguishable)` verdicts
    ///
    /// Pairs left out stay without a verdict and are reported when letters
    /// are assigned.
    pub fn from_verdicts<S, A, B, I>(groups: &[S], verdicts: I) -> Result<Self>
    where
        S: AsRef<str>,
        A: AsRef<str>,
        B: AsRef<str>,
        I: IntoIterator<Item = (A, B, bool)>,
    {
        let mut relation = Self::new(groups)?;
        for (first, second, indistinguishable) in verdicts {
            relation.set(first.as_ref(), second.as_ref(), indistinguishable)?;
        }
        Ok(relation)
    }

    /// Creates a relation where every pair shares the same verdict
    pub fn uniform<S: AsRef<str>>(groups: &[S], indistinguishable: bool) -> Result<Self> {
        let mut relation = Self::new(groups)?;
        for pair in (0..relation.len()).tuple_combinations() {
            relation.verdicts.insert(pair, indistinguishable);
        }
        Ok(relation)
    }

    /// Records the verdict for the pair (`first`, `second`)
    ///
    /// Self-comparisons are ignored. Recording a pair twice is allowed only
    /// if both verdicts agree.
    pub(crate) fn set(&mut self, first: &str, second: &str, indistinguishable: bool) -> Result<()> {
        let key = match self.key(first, second)? {
            Some(key) => key,
            None => return Ok(()),
        };
        match self.verdicts.insert(key, indistinguishable) {
            Some(previous) if previous != indistinguishable => Err(CldError::ConflictingVerdict {
                first: first.to_string(),
                second: second.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Returns the verdict for a pair, `None` if it was never recorded
    pub fn get(&self, first: &str, second: &str) -> Result<Option<bool>> {
        if first == second {
            self.position(first)?;
            return Ok(Some(true));
        }
        Ok(self
            .key(first, second)?
            .and_then(|key| self.verdicts.get(&key).copied()))
    }

    /// Groups in reported order
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True if every pair of distinct groups carries a verdict
    pub fn is_complete(&self) -> bool {
        self.pairs().all(|pair| pair.is_ok())
    }

    /// Iterates over all unordered pairs in combination order of the reported groups
    ///
    /// Yields `(first, second, indistinguishable)`, or
    /// [`CldError::IncompleteRelation`] for a pair without a verdict.
    pub fn pairs(&self) -> impl Iterator<Item = Result<(&str, &str, bool)>> + '_ {
        (0..self.groups.len())
            .tuple_combinations()
            .map(move |(i, j)| {
                let first = self.groups[i].as_str();
                let second = self.groups[j].as_str();
                match self.verdicts.get(&(i, j)) {
                    Some(verdict) => Ok((first, second, *verdict)),
                    None => Err(CldError::IncompleteRelation {
                        first: first.to_string(),
                        second: second.to_string(),
                    }),
                }
            })
    }

    fn position(&self, group: &str) -> Result<usize> {
        self.index
            .get(group)
            .copied()
            .ok_or_else(|| CldError::GroupMismatch {
                group: group.to_string(),
                missing_from: MissingFrom::Dataset,
            })
    }

    /// Normalized storage key, `None` for a self-pair
    fn key(&self, first: &str, second: &str) -> Result<Option<(usize, usize)>> {
        let i = self.position(first)?;
        let j = self.position(second)?;
        Ok(match i.cmp(&j) {
            std::cmp::Ordering::Less => Some((i, j)),
            std::cmp::Ordering::Greater => Some((j, i)),
            std::cmp::Ordering::Equal => None,
        })
    }
}
