use anyhow::Result;
use cldisplay::{
    CldConfig, CldError, CompactLetterDisplay, DunnTable, LetterOrder, MissingFrom,
    PairwiseRelation, PostHocResult, TransformConfig, TukeyTable,
};

fn regions() -> Vec<String> {
    ["Coast", "Desert", "Mountain", "Plain"]
        .iter()
        .map(|g| g.to_string())
        .collect()
}

/// Tukey output with the groups in sorted order
///
/// Coast~Desert and Mountain~Plain, every other pair differs.
fn tukey() -> TukeyTable {
    TukeyTable::from_reject(
        &["Coast", "Desert", "Mountain", "Plain"],
        vec![false, true, true, true, true, false],
    )
}

/// Dunn output where Desert bridges Coast and Mountain
fn dunn() -> DunnTable {
    DunnTable::new(
        regions(),
        vec![
            vec![1.0, 0.40, 0.01, 0.001],
            vec![0.40, 1.0, 0.20, 0.002],
            vec![0.01, 0.20, 1.0, 0.003],
            vec![0.001, 0.002, 0.003, 1.0],
        ],
    )
}

#[test]
fn tukey_and_dunn_are_labelled_independently() -> Result<()> {
    let groups = regions();
    let cld = CompactLetterDisplay::new(&groups, CldConfig::default())?;
    let (tukey, dunn) = cld.run_pair(&tukey(), &dunn())?;

    let tukey = tukey.to_map();
    assert_eq!(tukey["Coast"], "a");
    assert_eq!(tukey["Desert"], "a");
    assert_eq!(tukey["Mountain"], "b");
    assert_eq!(tukey["Plain"], "b");

    // Coast and Mountain differ directly but merge through Desert
    let dunn = dunn.to_map();
    assert_eq!(dunn["Coast"], "a");
    assert_eq!(dunn["Desert"], "a");
    assert_eq!(dunn["Mountain"], "a");
    assert_eq!(dunn["Plain"], "b");
    Ok(())
}

#[test]
fn fdr_transform_merges_borderline_pairs() -> Result<()> {
    let groups = regions();
    let config = CldConfig::builder()
        .alpha(0.005)
        .transform(TransformConfig::Fdr)
        .build();
    let cld = CompactLetterDisplay::new(&groups, config)?;
    let letters = cld.run(&PostHocResult::from(dunn()))?;

    // Plain vs Mountain (0.003) no longer clears 0.005 once adjusted
    assert!(letters.same_label("Plain", "Mountain"));
    assert!(letters.same_label("Plain", "Coast"));
    assert_eq!(letters.labels(), vec!["a"]);
    Ok(())
}

#[test]
fn reported_order_controls_letter_order() -> Result<()> {
    let groups = vec!["North".to_string(), "South".to_string(), "East".to_string()];
    let relation = PairwiseRelation::from_verdicts(
        &groups,
        [
            ("North", "South", true),
            ("North", "East", false),
            ("South", "East", false),
        ],
    )?;

    let config = CldConfig::builder()
        .letter_order(LetterOrder::Reported)
        .build();
    let cld = CompactLetterDisplay::new(&groups, config)?;
    let table = TukeyTable::new(
        vec![
            ("North".to_string(), "South".to_string()),
            ("North".to_string(), "East".to_string()),
            ("South".to_string(), "East".to_string()),
        ],
        vec![false, true, true],
    );
    let letters = cld.tukey(&table)?;
    assert_eq!(letters.label("North"), Some("a"));
    assert_eq!(letters.label("South"), Some("a"));
    assert_eq!(letters.label("East"), Some("b"));

    let direct = cldisplay::LetterAssigner::from(cld.config()).assign(&relation)?;
    assert_eq!(direct, letters);
    Ok(())
}

#[test]
fn dataset_and_posthoc_groups_must_match() -> Result<()> {
    let groups = regions();
    let cld = CompactLetterDisplay::new(&groups, CldConfig::default())?;
    let partial = TukeyTable::from_reject(&["Coast", "Desert", "Mountain"], vec![false; 3]);
    let err = cld.tukey(&partial).unwrap_err();
    assert_eq!(
        err,
        CldError::GroupMismatch {
            group: "Plain".to_string(),
            missing_from: MissingFrom::PostHoc,
        }
    );
    assert_eq!(err.to_string(), "group `Plain` is missing from the post-hoc table");
    Ok(())
}
