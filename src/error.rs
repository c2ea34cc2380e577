use std::fmt;

/// Which side of a comparison a group was missing from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFrom {
    /// The group is named by the post-hoc table but not by the dataset
    Dataset,
    /// The group is named by the dataset but not by the post-hoc table
    PostHoc,
}
impl fmt::Display for MissingFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingFrom::Dataset => write!(f, "dataset"),
            MissingFrom::PostHoc => write!(f, "post-hoc table"),
        }
    }
}

/// Errors raised while building a pairwise relation or assigning letters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CldError {
    #[error("group `{group}` is missing from the {missing_from}")]
    GroupMismatch {
        group: String,
        missing_from: MissingFrom,
    },

    #[error("no verdict for the pair ({first}, {second})")]
    IncompleteRelation { first: String, second: String },

    #[error("at least two groups are required, found {found}")]
    EmptyGroupSet { found: usize },

    #[error("group `{group}` is listed more than once")]
    DuplicateGroup { group: String },

    #[error("alpha must lie in (0, 1), got {alpha}")]
    InvalidAlpha { alpha: f64 },

    #[error("{comparisons} comparisons but {reject} reject flags")]
    LengthMismatch { comparisons: usize, reject: usize },

    #[error("p-value matrix row {row} has {found} columns, expected {expected}")]
    MalformedMatrix {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("conflicting verdicts for the pair ({first}, {second})")]
    ConflictingVerdict { first: String, second: String },
}

pub type Result<T> = std::result::Result<T, CldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_mismatch_message() {
        let err = CldError::GroupMismatch {
            group: "West".to_string(),
            missing_from: MissingFrom::PostHoc,
        };
        assert_eq!(err.to_string(), "group `West` is missing from the post-hoc table");
    }

    #[test]
    fn test_incomplete_relation_message() {
        let err = CldError::IncompleteRelation {
            first: "A".to_string(),
            second: "B".to_string(),
        };
        assert_eq!(err.to_string(), "no verdict for the pair (A, B)");
    }
}
