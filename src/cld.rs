use rayon::prelude::*;
use tracing::info;

use crate::{
    assigner::LetterAssigner,
    config::CldConfig,
    error::Result,
    posthoc::{DunnTable, PostHocResult, TukeyTable},
    relation::PairwiseRelation,
    results::LetterAssignment,
    utils::ensure_unique,
};

/// Compact letter display over the groups of one dataset
///
/// Turns post-hoc test output into letters such that groups sharing a letter
/// were not found to differ. One instance can label several post-hoc results
/// for the same dataset; each result is labelled independently.
pub struct CompactLetterDisplay<'a> {
    groups: &'a [String],
    config: CldConfig,
    assigner: LetterAssigner,
}
impl<'a> CompactLetterDisplay<'a> {
    /// Fails if `groups` contains duplicates or the configured alpha is out of range
    pub fn new(groups: &'a [String], config: CldConfig) -> Result<Self> {
        config.validate()?;
        ensure_unique(groups)?;
        let assigner = LetterAssigner::from(&config);
        Ok(Self {
            groups,
            config,
            assigner,
        })
    }

    pub fn config(&self) -> &CldConfig {
        &self.config
    }

    /// Label the groups from a single post-hoc result
    ///
    /// The run is a two-step process:
    /// 1. Build the pairwise relation, checking it covers exactly the dataset groups
    /// 2. Assign letters to the relation
    pub fn run(&self, posthoc: &PostHocResult) -> Result<LetterAssignment> {
        let relation = posthoc.relation(self.groups, self.config.alpha, self.config.transform)?;
        self.assign(posthoc.method(), &relation)
    }

    pub fn tukey(&self, table: &TukeyTable) -> Result<LetterAssignment> {
        let relation = table.relation(self.groups)?;
        self.assign("tukey", &relation)
    }

    pub fn dunn(&self, table: &DunnTable) -> Result<LetterAssignment> {
        let relation = table.relation(self.groups, self.config.alpha, self.config.transform)?;
        self.assign("dunn", &relation)
    }

    fn assign(&self, method: &str, relation: &PairwiseRelation) -> Result<LetterAssignment> {
        let assignment = self.assigner.assign(relation)?;
        info!(
            method,
            groups = assignment.len(),
            letters = assignment.labels().len(),
            "assigned significance letters"
        );
        Ok(assignment)
    }

    /// Label a Tukey and a Dunn result concurrently
    pub fn run_pair(
        &self,
        tukey: &TukeyTable,
        dunn: &DunnTable,
    ) -> Result<(LetterAssignment, LetterAssignment)> {
        let (tukey, dunn) = rayon::join(|| self.tukey(tukey), || self.dunn(dunn));
        Ok((tukey?, dunn?))
    }

    /// Label every result in parallel, preserving input order
    ///
    /// Returns the first error encountered if any result fails.
    pub fn run_many(&self, results: &[PostHocResult]) -> Result<Vec<LetterAssignment>> {
        results.par_iter().map(|posthoc| self.run(posthoc)).collect()
    }
}
