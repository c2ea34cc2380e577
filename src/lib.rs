//! cldisplay: Compact Letter Displays for post-hoc comparisons
//!
//! This library condenses the pairwise verdicts of a post-hoc test (Tukey HSD
//! or Dunn's test) into a compact letter display: every group receives a
//! letter, and groups that were merged as statistically indistinguishable
//! share the same letter.
//!
//! The main components of this library are:
//! - `CompactLetterDisplay`: Builds relations from post-hoc output and assigns letters
//! - `TukeyTable` / `DunnTable`: Post-hoc test output as produced by external tools
//! - `PairwiseRelation`: The symmetric "indistinguishable" relation over a group set
//! - `LetterAssigner`: The letter assignment algorithm
//! - `CldConfig`: Significance threshold, p-value transform and labelling options
//! - `LetterAssignment`: Structure to hold and display the labels
//!
//! ```
//! use cldisplay::{CldConfig, CompactLetterDisplay, TukeyTable};
//!
//! let groups = vec!["North".to_string(), "South".to_string(), "East".to_string()];
//! let tukey = TukeyTable::from_reject(&["East", "North", "South"], vec![true, true, false]);
//!
//! let cld = CompactLetterDisplay::new(&groups, CldConfig::default())?;
//! let letters = cld.tukey(&tukey)?;
//! assert_eq!(letters.label("East"), Some("a"));
//! assert_eq!(letters.label("North"), Some("b"));
//! assert_eq!(letters.label("South"), Some("b"));
//! # Ok::<(), cldisplay::CldError>(())
//! ```

mod assigner;
mod cld;
mod config;
mod error;
mod posthoc;
mod relation;
mod results;
mod utils;

pub use assigner::LetterAssigner;
pub use cld::CompactLetterDisplay;
pub use config::{CldConfig, DegeneratePolicy, LetterOrder, TransformConfig, DEFAULT_ALPHA};
pub use error::{CldError, MissingFrom, Result};
pub use posthoc::{DunnTable, PostHocResult, TukeyTable};
pub use relation::PairwiseRelation;
pub use results::{GroupLabel, LetterAssignment};
pub use utils::letter_label;
