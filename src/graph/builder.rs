//! Alphabet collection and precedence edges from adjacent word pairs.

use crate::error::{OrderError, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Characters of the input and the "must precede" edges between them.
///
/// The alphabet keeps first-seen order and each successor list keeps edge
/// insertion order, so traversals over the graph are deterministic.
#[derive(Debug, Clone, Default)]
pub struct PrecedenceGraph {
    alphabet: Vec<char>,
    successors: HashMap<char, Vec<char>>,
    edge_set: HashSet<(char, char)>,
    in_degree: HashMap<char, usize>,
}

impl PrecedenceGraph {
    /// Build the graph from words sorted in the unknown order.
    ///
    /// Fails with [`OrderError::PrefixViolation`] as soon as a word is
    /// followed by a strict prefix of itself; later pairs are not examined.
    pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let mut graph = Self::default();

        for word in words {
            for c in word.as_ref().chars() {
                graph.add_char(c);
            }
        }

        for (index, pair) in words.windows(2).enumerate() {
            let (earlier, later) = (pair[0].as_ref(), pair[1].as_ref());

            if earlier.len() > later.len() && earlier.starts_with(later) {
                debug!(index, earlier, later, "prefix violation");
                return Err(OrderError::PrefixViolation {
                    index,
                    earlier: earlier.to_string(),
                    later: later.to_string(),
                });
            }

            // Only the first difference carries ordering information
            if let Some((from, to)) = earlier
                .chars()
                .zip(later.chars())
                .find(|(a, b)| a != b)
            {
                graph.add_edge(from, to);
            }
        }

        debug!(
            alphabet = graph.alphabet.len(),
            edges = graph.edge_set.len(),
            "built precedence graph"
        );
        Ok(graph)
    }

    fn add_char(&mut self, c: char) {
        if !self.in_degree.contains_key(&c) {
            self.in_degree.insert(c, 0);
            self.alphabet.push(c);
        }
    }

    /// Returns false when the edge was already present.
    fn add_edge(&mut self, from: char, to: char) -> bool {
        if !self.edge_set.insert((from, to)) {
            return false;
        }

        debug!(%from, %to, "new edge");
        self.successors.entry(from).or_default().push(to);
        *self.in_degree.entry(to).or_insert(0) += 1;
        true
    }

    /// Every character of the input, in first-seen order
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Characters that must come after `c`, in insertion order
    pub fn successors(&self, c: char) -> &[char] {
        self.successors.get(&c).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct predecessors of `c`
    pub fn in_degree(&self, c: char) -> usize {
        self.in_degree.get(&c).copied().unwrap_or(0)
    }

    pub fn has_edge(&self, from: char, to: char) -> bool {
        self.edge_set.contains(&(from, to))
    }

    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    /// All edges grouped by source, sources in alphabet order
    pub fn edges(&self) -> Vec<(char, char)> {
        self.alphabet
            .iter()
            .flat_map(|&from| self.successors(from).iter().map(move |&to| (from, to)))
            .collect()
    }

    /// Working copy of the in-degree map for the sorter to consume
    pub(crate) fn in_degrees(&self) -> HashMap<char, usize> {
        self.in_degree.clone()
    }
}
