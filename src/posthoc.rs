use derive_new::new;
use itertools::Itertools;
use tracing::debug;

use crate::{
    config::{validate_alpha, TransformConfig},
    error::{CldError, Result},
    relation::PairwiseRelation,
    utils::{ensure_unique, match_group_sets},
};

/// Output of a Tukey HSD test
///
/// Holds the compared pairs in the order the test reported them and a
/// parallel flag telling whether equality was rejected for that pair.
#[derive(Debug, Clone, PartialEq, new)]
pub struct TukeyTable {
    comparisons: Vec<(String, String)>,
    reject: Vec<bool>,
}
impl TukeyTable {
    /// Pairs `reject` with the combinations of `groups` in natural order
    ///
    /// This is the layout produced by a multiple-comparison routine that
    /// compares `groups[0]` with every later group, then `groups[1]`, and so on.
    pub fn from_reject<S: AsRef<str>>(groups: &[S], reject: Vec<bool>) -> Self {
        let comparisons = groups
            .iter()
            .map(|g| g.as_ref().to_string())
            .tuple_combinations()
            .collect();
        Self::new(comparisons, reject)
    }

    /// Groups in order of first appearance in the comparisons
    fn reported_groups(&self) -> Vec<&str> {
        self.comparisons
            .iter()
            .flat_map(|(a, b)| [a.as_str(), b.as_str()])
            .unique()
            .collect()
    }

    /// Translate into a relation over the dataset groups
    ///
    /// A pair is indistinguishable when equality was not rejected.
    pub fn relation<S: AsRef<str>>(&self, groups: &[S]) -> Result<PairwiseRelation> {
        if self.comparisons.len() != self.reject.len() {
            return Err(CldError::LengthMismatch {
                comparisons: self.comparisons.len(),
                reject: self.reject.len(),
            });
        }
        ensure_unique(groups)?;
        let reported = self.reported_groups();
        match_group_sets(groups, &reported)?;

        let mut relation = PairwiseRelation::new(&reported)?;
        for ((first, second), reject) in self.comparisons.iter().zip(&self.reject) {
            relation.set(first, second, !reject)?;
        }
        debug!(
            groups = relation.len(),
            comparisons = self.comparisons.len(),
            "built relation from Tukey HSD table"
        );
        Ok(relation)
    }
}

/// Output of Dunn's test
///
/// A square matrix of p-values whose rows and columns are both indexed by
/// `labels`. The diagonal is never read.
#[derive(Debug, Clone, PartialEq, new)]
pub struct DunnTable {
    labels: Vec<String>,
    pvalues: Vec<Vec<f64>>,
}
impl DunnTable {
    fn validate_shape(&self) -> Result<()> {
        let expected = self.labels.len();
        if self.pvalues.len() != expected {
            // A missing row has no columns and an extra row should have none
            let row = self.pvalues.len().min(expected);
            return Err(CldError::MalformedMatrix {
                row,
                found: self.pvalues.get(row).map_or(0, Vec::len),
                expected: if row < expected { expected } else { 0 },
            });
        }
        for (row, values) in self.pvalues.iter().enumerate() {
            if values.len() != expected {
                return Err(CldError::MalformedMatrix {
                    row,
                    found: values.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Applies `transform` jointly to both triangles of the matrix
    ///
    /// The upper and lower triangles are each treated as one family of
    /// `k * (k - 1) / 2` comparisons, in combination order.
    fn transformed(&self, transform: TransformConfig) -> Vec<Vec<f64>> {
        let k = self.labels.len();
        let mut adjusted = self.pvalues.clone();
        let pairs = (0..k).tuple_combinations::<(usize, usize)>().collect::<Vec<_>>();
        if pairs.is_empty() {
            return adjusted;
        }

        let upper = pairs.iter().map(|&(i, j)| self.pvalues[i][j]).collect::<Vec<_>>();
        let lower = pairs.iter().map(|&(i, j)| self.pvalues[j][i]).collect::<Vec<_>>();
        let upper = transform.transform(&upper);
        let lower = transform.transform(&lower);

        for (idx, &(i, j)) in pairs.iter().enumerate() {
            adjusted[i][j] = upper[idx];
            adjusted[j][i] = lower[idx];
        }
        adjusted
    }

    /// Translate into a relation over the dataset groups
    ///
    /// A pair is indistinguishable when its p-value, after `transform`, is
    /// strictly greater than `alpha` in either triangle of the matrix. NaN
    /// p-values are never greater than alpha, with or without `transform`.
    pub fn relation<S: AsRef<str>>(
        &self,
        groups: &[S],
        alpha: f64,
        transform: TransformConfig,
    ) -> Result<PairwiseRelation> {
        validate_alpha(alpha)?;
        self.validate_shape()?;
        ensure_unique(groups)?;
        ensure_unique(&self.labels)?;
        match_group_sets(groups, &self.labels)?;

        let pvalues = self.transformed(transform);
        let mut relation = PairwiseRelation::new(&self.labels)?;
        for (i, j) in (0..self.labels.len()).tuple_combinations() {
            let indistinguishable = pvalues[i][j] > alpha || pvalues[j][i] > alpha;
            relation.set(&self.labels[i], &self.labels[j], indistinguishable)?;
        }
        debug!(
            groups = relation.len(),
            alpha,
            ?transform,
            "built relation from Dunn p-value matrix"
        );
        Ok(relation)
    }
}

/// A post-hoc result from either supported test
#[derive(Debug, Clone, PartialEq)]
pub enum PostHocResult {
    Tukey(TukeyTable),
    Dunn(DunnTable),
}
impl PostHocResult {
    pub fn method(&self) -> &'static str {
        match self {
            PostHocResult::Tukey(_) => "tukey",
            PostHocResult::Dunn(_) => "dunn",
        }
    }

    /// Translate into a relation; alpha and transform only apply to Dunn
    pub fn relation<S: AsRef<str>>(
        &self,
        groups: &[S],
        alpha: f64,
        transform: TransformConfig,
    ) -> Result<PairwiseRelation> {
        validate_alpha(alpha)?;
        match self {
            PostHocResult::Tukey(table) => table.relation(groups),
            PostHocResult::Dunn(table) => table.relation(groups, alpha, transform),
        }
    }
}
impl From<TukeyTable> for PostHocResult {
    fn from(table: TukeyTable) -> Self {
        PostHocResult::Tukey(table)
    }
}
impl From<DunnTable> for PostHocResult {
    fn from(table: DunnTable) -> Self {
        PostHocResult::Dunn(table)
    }
}
