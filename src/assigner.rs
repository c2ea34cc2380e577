use std::collections::{BTreeSet, HashMap};

use derive_new::new;
use tracing::{debug, trace, warn};

use crate::{
    config::{CldConfig, DegeneratePolicy, LetterOrder},
    error::{CldError, Result},
    relation::PairwiseRelation,
    results::{GroupLabel, LetterAssignment},
    utils::letter_label,
};

/// Condenses a pairwise relation into a compact letter display
///
/// The assigner is stateless: the label counter and the cluster bookkeeping
/// live only for the duration of one [`LetterAssigner::assign`] call, so the
/// same assigner may be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct LetterAssigner {
    letter_order: LetterOrder,
    degenerate: DegeneratePolicy,
}
impl From<&CldConfig> for LetterAssigner {
    fn from(config: &CldConfig) -> Self {
        Self::new(config.letter_order, config.degenerate)
    }
}
impl LetterAssigner {
    /// Assign a letter to every group of the relation
    ///
    /// The assignment is a two-step process:
    /// 1. Merge the clusters of every indistinguishable pair, in combination
    ///    order of the reported groups
    /// 2. Scan the groups and give each distinct final cluster the next letter
    pub fn assign(&self, relation: &PairwiseRelation) -> Result<LetterAssignment> {
        if relation.len() < 2 {
            return self.assign_degenerate(relation);
        }
        let clusters = self.merge_clusters(relation)?;
        Ok(self.label_clusters(relation, &clusters))
    }

    /// Builds the final cluster of every group
    ///
    /// Each indistinguishable pair replaces the clusters of both groups, and
    /// of every group already sharing them, with their union. Clusters are
    /// only ever grown, never split.
    fn merge_clusters<'a>(
        &self,
        relation: &'a PairwiseRelation,
    ) -> Result<HashMap<&'a str, BTreeSet<&'a str>>> {
        let mut clusters = relation
            .groups()
            .iter()
            .map(|g| (g.as_str(), BTreeSet::from([g.as_str()])))
            .collect::<HashMap<_, _>>();

        for pair in relation.pairs() {
            let (first, second, indistinguishable) = pair?;
            if !indistinguishable {
                trace!(first, second, "distinguishable pair, no merge");
                continue;
            }
            let merged = clusters[first]
                .union(&clusters[second])
                .copied()
                .collect::<BTreeSet<_>>();
            debug!(first, second, size = merged.len(), "merging clusters");
            for group in &merged {
                clusters.insert(*group, merged.clone());
            }
        }
        Ok(clusters)
    }

    /// Hands out letters to the distinct clusters in scan order
    fn label_clusters(
        &self,
        relation: &PairwiseRelation,
        clusters: &HashMap<&str, BTreeSet<&str>>,
    ) -> LetterAssignment {
        let mut seen: HashMap<Vec<&str>, String> = HashMap::new();
        let mut entries = Vec::with_capacity(relation.len());

        for group in self.scan_order(relation) {
            // BTreeSet iterates sorted, so this is the canonical key
            let key = clusters[group].iter().copied().collect::<Vec<_>>();
            let next_index = seen.len();
            let label = seen
                .entry(key)
                .or_insert_with(|| {
                    let label = letter_label(next_index);
                    debug!(group, label = label.as_str(), "new cluster label");
                    label
                })
                .clone();
            entries.push(GroupLabel::new(group.to_string(), label));
        }
        LetterAssignment::from_vec(entries)
    }

    fn scan_order<'a>(&self, relation: &'a PairwiseRelation) -> Vec<&'a str> {
        let groups = relation.groups().iter().map(|g| g.as_str());
        match self.letter_order {
            LetterOrder::Lexical => {
                let mut groups = groups.collect::<Vec<_>>();
                groups.sort_unstable();
                groups
            }
            LetterOrder::Reported => groups.collect(),
        }
    }

    fn assign_degenerate(&self, relation: &PairwiseRelation) -> Result<LetterAssignment> {
        match self.degenerate {
            DegeneratePolicy::Reject => Err(CldError::EmptyGroupSet {
                found: relation.len(),
            }),
            DegeneratePolicy::SingleLabel => {
                warn!(
                    groups = relation.len(),
                    "fewer than two groups, assigning a single label"
                );
                let entries = relation
                    .groups()
                    .iter()
                    .map(|g| GroupLabel::new(g.clone(), letter_label(0)))
                    .collect();
                Ok(LetterAssignment::from_vec(entries))
            }
        }
    }
}
