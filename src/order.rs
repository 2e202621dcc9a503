//! Derive an alphabet ordering from words sorted in that ordering.

use crate::error::{OrderError, Result};
use crate::graph::{find_cycle, topological_sort, PrecedenceGraph};
use crate::models::{AlphabetOrder, Options};
use std::collections::HashSet;
use tracing::debug;

/// Return one ordering of the alphabet consistent with `words`, or an empty
/// string when none exists.
///
/// An empty input also yields an empty string. Use [`derive_order`] to tell
/// the two apart and to learn why an input was rejected.
pub fn alien_order<S: AsRef<str>>(words: &[S]) -> String {
    solve(words, &Options::default(), Witness::Skip)
        .map(AlphabetOrder::into_string)
        .unwrap_or_default()
}

/// Like [`alien_order`] but reports prefix violations and cycles as errors.
pub fn derive_order<S: AsRef<str>>(words: &[S]) -> Result<AlphabetOrder> {
    derive_order_with(words, &Options::default())
}

pub fn derive_order_with<S: AsRef<str>>(words: &[S], options: &Options) -> Result<AlphabetOrder> {
    solve(words, options, Witness::Find)
}

/// Whether a cycle error carries a concrete cycle path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Witness {
    Find,
    Skip,
}

fn solve<S: AsRef<str>>(
    words: &[S],
    options: &Options,
    witness: Witness,
) -> Result<AlphabetOrder> {
    let graph = PrecedenceGraph::build(words)?;
    let sorted = topological_sort(&graph, options.tie_break);

    if sorted.len() < graph.alphabet().len() {
        let emitted: HashSet<char> = sorted.iter().copied().collect();
        let unresolved: Vec<char> = graph
            .alphabet()
            .iter()
            .copied()
            .filter(|c| !emitted.contains(c))
            .collect();
        let path = match witness {
            Witness::Find => find_cycle(&graph, &unresolved).unwrap_or_default(),
            Witness::Skip => Vec::new(),
        };

        debug!(unresolved = unresolved.len(), "cycle detected");
        return Err(OrderError::CycleDetected { unresolved, path });
    }

    debug!(tie_break = %options.tie_break, "ordering found");
    Ok(AlphabetOrder::new(sorted, &graph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TieBreak;
    use crate::scenarios::SCENARIOS;

    #[test]
    fn test_scenarios() {
        for scenario in SCENARIOS {
            assert_eq!(
                alien_order(scenario.words),
                scenario.expected,
                "scenario: {}",
                scenario.name
            );
        }
    }

    #[test]
    fn test_empty_input_is_valid() {
        let words: Vec<String> = Vec::new();
        let order = derive_order(&words).unwrap();

        assert_eq!(order.as_str(), "");
        assert_eq!(order.alphabet_size, 0);
    }

    #[test]
    fn test_cycle_error_details() {
        let err = derive_order(&["z", "x", "z"]).unwrap_err();

        match err {
            OrderError::CycleDetected { unresolved, path } => {
                assert_eq!(unresolved, vec!['z', 'x']);
                assert_eq!(path, vec!['z', 'x', 'z']);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cycle_with_free_chars() {
        let err = derive_order(&["ab", "ba", "c", "b"]).unwrap_err();

        match err {
            OrderError::CycleDetected { unresolved, path } => {
                assert_eq!(unresolved, vec!['b', 'c']);
                assert_eq!(path, vec!['b', 'c', 'b']);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_prefix_violation_wins_over_later_edges() {
        let err = derive_order(&["b", "a", "abc", "ab", "c"]).unwrap_err();
        assert!(matches!(err, OrderError::PrefixViolation { index: 2, .. }));
        assert_eq!(alien_order(&["b", "a", "abc", "ab", "c"]), "");
    }

    #[test]
    fn test_duplicate_words() {
        assert_eq!(alien_order(&["ab", "ab", "ab"]), "ab");
        assert_eq!(alien_order(&["", "", "a"]), "a");
    }

    #[test]
    fn test_result_is_permutation_and_consistent() {
        let inputs: &[&[&str]] = &[
            &["wrt", "wrf", "er", "ett", "rftt"],
            &["baa", "abcd", "abca", "cab", "cad"],
            &["caa", "aaa", "aab"],
            &["x", "xy", "y", "yz"],
        ];

        for &words in inputs {
            for tie_break in [TieBreak::FirstSeen, TieBreak::Lexical] {
                let options = Options { tie_break };
                let order = derive_order_with(words, &options).unwrap();
                let graph = PrecedenceGraph::build(words).unwrap();

                let chars: HashSet<char> = order.as_str().chars().collect();
                let alphabet: HashSet<char> = graph.alphabet().iter().copied().collect();
                assert_eq!(chars, alphabet);
                assert_eq!(order.as_str().chars().count(), alphabet.len());
                assert!(order.is_consistent_with(&graph), "{words:?} {tie_break}");
            }
        }
    }

    #[test]
    fn test_repeat_runs_agree() {
        let words = ["baa", "abcd", "abca", "cab", "cad"];

        assert_eq!(alien_order(&words), alien_order(&words));
        assert_eq!(alien_order(&words), "bdac");
    }

    #[test]
    fn test_lexical_tie_break() {
        let options = Options {
            tie_break: TieBreak::Lexical,
        };
        let order = derive_order_with(&["dcb"], &options).unwrap();

        assert_eq!(order.as_str(), "bcd");
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(alien_order(&["ä", "ö", "öü"]), "äüö");
    }

    fn supplementary_chars(count: u32) -> Vec<char> {
        (0..count)
            .map(|i| char::from_u32(0x10000 + i).unwrap())
            .collect()
    }

    #[test]
    fn test_long_cycle_returns_empty() {
        let chars = supplementary_chars(200_000);
        let mut words: Vec<String> = chars.iter().map(char::to_string).collect();
        words.push(chars[0].to_string());

        assert_eq!(alien_order(&words), "");

        match derive_order(&words).unwrap_err() {
            OrderError::CycleDetected { unresolved, path } => {
                assert_eq!(unresolved.len(), chars.len());
                assert_eq!(path.len(), chars.len() + 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_long_chain_ending_in_cycle() {
        let chars = supplementary_chars(60_000);
        let mut words: Vec<String> = chars.iter().map(char::to_string).collect();
        words.push(chars[chars.len() - 2].to_string());

        assert_eq!(alien_order(&words), "");

        match derive_order(&words).unwrap_err() {
            OrderError::CycleDetected { unresolved, path } => {
                let tail = &chars[chars.len() - 2..];
                assert_eq!(unresolved, tail);
                assert_eq!(path, vec![tail[0], tail[1], tail[0]]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_long_chain_is_ordered() {
        let chars = supplementary_chars(60_000);
        let words: Vec<String> = chars.iter().map(char::to_string).collect();

        let expected: String = chars.iter().collect();
        assert_eq!(alien_order(&words), expected);
    }
}
