use adjustp::{adjust, Procedure};
use bon::Builder;

use crate::error::{CldError, Result};

/// Significance threshold used when none is configured
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Multiple-testing adjustment applied to Dunn p-values before thresholding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransformConfig {
    /// P-values are taken as already adjusted
    #[default]
    Identity,
    Fdr,
    Bonferroni,
}
impl TransformConfig {
    /// Adjusts `pvalues` as one family of comparisons
    ///
    /// NaN entries stay NaN and are left out of the family, so they never
    /// count towards the number of comparisons.
    pub fn transform(&self, pvalues: &[f64]) -> Vec<f64> {
        let procedure = match self {
            TransformConfig::Identity => return pvalues.to_vec(),
            TransformConfig::Fdr => Procedure::BenjaminiHochberg,
            TransformConfig::Bonferroni => Procedure::Bonferroni,
        };
        let (positions, family): (Vec<usize>, Vec<f64>) = pvalues
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_nan())
            .map(|(i, p)| (i, *p))
            .unzip();
        let mut adjusted = vec![f64::NAN; pvalues.len()];
        if family.is_empty() {
            return adjusted;
        }
        for (i, p) in positions.into_iter().zip(adjust(&family, procedure)) {
            adjusted[i] = p;
        }
        adjusted
    }
}

/// Checks that alpha lies strictly inside (0, 1)
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(CldError::InvalidAlpha { alpha })
    }
}

/// Order in which groups are scanned when handing out letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterOrder {
    /// Ascending lexical order of the group identifiers
    #[default]
    Lexical,
    /// The order in which the post-hoc step reported the groups
    Reported,
}

/// What to do when fewer than two groups are supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Fail with [`CldError::EmptyGroupSet`]
    #[default]
    Reject,
    /// Give every group (there is at most one) the first letter
    SingleLabel,
}

/// Configuration of a compact letter display run
///
/// ```
/// use cldisplay::{CldConfig, LetterOrder};
///
/// let config = CldConfig::builder()
///     .alpha(0.01)
///     .letter_order(LetterOrder::Reported)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct CldConfig {
    /// P-values strictly above alpha are treated as indistinguishable
    #[builder(default = DEFAULT_ALPHA)]
    pub alpha: f64,
    #[builder(default)]
    pub transform: TransformConfig,
    #[builder(default)]
    pub letter_order: LetterOrder,
    #[builder(default)]
    pub degenerate: DegeneratePolicy,
}
impl Default for CldConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
impl CldConfig {
    /// Checks that alpha lies strictly inside (0, 1)
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.alpha)
    }
}
