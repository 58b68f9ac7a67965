//! Property-based invariant tests for familize.
//!
//! 1. Round trip: walking a test's occurrences yields its steps
//! 2. Idempotence: the same list always yields the same tree
//! 3. Title conservation: every non-empty test is a terminal exactly once
//! 4. Shared-prefix merge: tests share a node iff they share the prefix
//! 5. Every step occurrence is recorded exactly once

use crate::common::*;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn walk_reconstructs_every_test(tests in arb_tests()) {
        let tree = familize(&tests);
        for (i, test) in tests.iter().enumerate() {
            prop_assert_eq!(&reconstruct(&tree, i), &test.steps);
        }
    }

    #[test]
    fn familize_is_idempotent(tests in arb_tests()) {
        let a = familize(&tests);
        let b = familize(&tests);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn titles_are_conserved(tests in arb_distinct_tests()) {
        let tree = familize(&tests);

        let mut titles: Vec<(usize, String)> = tree
            .terminal_nodes()
            .flat_map(|n| n.terminals().iter().map(|t| (t.test_index, t.title.clone())))
            .collect();
        titles.sort();

        let expected: Vec<(usize, String)> = tests
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.title.clone()))
            .collect();
        prop_assert_eq!(titles, expected);
        prop_assert!(tree.duplicate_groups().is_empty());
    }

    #[test]
    fn nodes_merge_exactly_on_shared_prefixes(tests in arb_tests()) {
        let tree = familize(&tests);

        for (_, node) in tree.iter() {
            let first = node.occurrences()[0];
            let prefix = &tests[first.test_index].steps[..=first.step_index];
            for occurrence in node.occurrences() {
                prop_assert_eq!(occurrence.step_index, first.step_index);
                let other = &tests[occurrence.test_index].steps[..=occurrence.step_index];
                prop_assert_eq!(other, prefix);
            }

            let keys: HashSet<&str> = node.children().keys().collect();
            prop_assert_eq!(keys.len(), node.children().len());
        }

        // two tests with the same first step always share a root
        let roots: HashSet<String> = tests
            .iter()
            .filter_map(|t| t.steps.first())
            .map(|s| s.key())
            .collect();
        prop_assert_eq!(roots.len(), tree.roots().len());
    }

    #[test]
    fn every_occurrence_recorded_once(tests in arb_tests()) {
        let tree = familize(&tests);

        let mut recorded: Vec<Occurrence> = tree
            .iter()
            .flat_map(|(_, n)| n.occurrences().iter().copied())
            .collect();
        recorded.sort();

        let mut expected: Vec<Occurrence> = tests
            .iter()
            .enumerate()
            .flat_map(|(t, test)| (0..test.steps.len()).map(move |s| Occurrence::new(t, s)))
            .collect();
        expected.sort();

        prop_assert_eq!(recorded, expected);
    }
}
