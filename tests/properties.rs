use cldisplay::{letter_label, LetterAssigner, PairwiseRelation};
use itertools::Itertools;
use proptest::prelude::*;

fn group_names(k: usize) -> Vec<String> {
    (0..k).map(|i| format!("group_{i:02}")).collect()
}

fn build_relation(groups: &[String], verdicts: &[bool]) -> PairwiseRelation {
    let pairs = groups
        .iter()
        .tuple_combinations()
        .zip(verdicts)
        .map(|((first, second), verdict)| (first, second, *verdict));
    PairwiseRelation::from_verdicts(groups, pairs).unwrap()
}

fn relation_strategy() -> impl Strategy<Value = (Vec<String>, Vec<bool>)> {
    (2usize..9).prop_flat_map(|k| {
        (
            Just(group_names(k)),
            prop::collection::vec(any::<bool>(), k * (k - 1) / 2),
        )
    })
}

proptest! {
    #[test]
    fn relation_is_symmetric((groups, verdicts) in relation_strategy()) {
        let relation = build_relation(&groups, &verdicts);
        for (a, b) in groups.iter().tuple_combinations() {
            prop_assert_eq!(relation.get(a, b).unwrap(), relation.get(b, a).unwrap());
        }
    }

    #[test]
    fn every_group_is_labelled((groups, verdicts) in relation_strategy()) {
        let relation = build_relation(&groups, &verdicts);
        let assignment = LetterAssigner::default().assign(&relation).unwrap();
        prop_assert_eq!(assignment.len(), groups.len());
        for group in &groups {
            prop_assert!(assignment.same_label(group, group));
        }
    }

    #[test]
    fn assignment_is_deterministic((groups, verdicts) in relation_strategy()) {
        let relation = build_relation(&groups, &verdicts);
        let assigner = LetterAssigner::default();
        prop_assert_eq!(assigner.assign(&relation).unwrap(), assigner.assign(&relation).unwrap());
    }

    #[test]
    fn merged_pairs_share_a_label((groups, verdicts) in relation_strategy()) {
        let relation = build_relation(&groups, &verdicts);
        let assignment = LetterAssigner::default().assign(&relation).unwrap();
        for pair in relation.pairs() {
            let (a, b, indistinguishable) = pair.unwrap();
            if indistinguishable {
                prop_assert!(assignment.same_label(a, b), "{} and {} were split", a, b);
            }
        }
    }

    #[test]
    fn reported_order_does_not_change_lexical_labels((groups, verdicts) in relation_strategy()) {
        let relation = build_relation(&groups, &verdicts);
        let reversed_groups = groups.iter().rev().cloned().collect::<Vec<_>>();
        let flipped = relation
            .pairs()
            .map(|pair| pair.map(|(a, b, verdict)| (b, a, verdict)))
            .collect::<cldisplay::Result<Vec<_>>>()
            .unwrap();
        let reversed = PairwiseRelation::from_verdicts(&reversed_groups, flipped).unwrap();
        let assigner = LetterAssigner::default();
        prop_assert_eq!(assigner.assign(&relation).unwrap(), assigner.assign(&reversed).unwrap());
    }

    #[test]
    fn labels_are_handed_out_in_sequence((groups, verdicts) in relation_strategy()) {
        let relation = build_relation(&groups, &verdicts);
        let assignment = LetterAssigner::default().assign(&relation).unwrap();
        let labels = assignment.labels();
        let expected = (0..labels.len()).map(letter_label).collect::<Vec<_>>();
        prop_assert_eq!(labels, expected);
    }

    #[test]
    fn all_indistinguishable_gives_one_label(k in 2usize..30) {
        let relation = PairwiseRelation::uniform(&group_names(k), true).unwrap();
        let assignment = LetterAssigner::default().assign(&relation).unwrap();
        prop_assert_eq!(assignment.labels(), vec!["a"]);
    }

    #[test]
    fn all_distinguishable_gives_ascending_labels(k in 2usize..30) {
        let groups = group_names(k);
        let relation = PairwiseRelation::uniform(&groups, false).unwrap();
        let assignment = LetterAssigner::default().assign(&relation).unwrap();
        for (i, group) in groups.iter().enumerate() {
            let expected = letter_label(i);
            prop_assert_eq!(assignment.label(group), Some(expected.as_str()));
        }
    }
}
