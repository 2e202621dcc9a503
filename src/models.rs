use crate::error::OrderError;
use crate::graph::PrecedenceGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// How the sorter picks among several characters that are free at once
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// First-in first-out, seeded in the order characters first appear
    #[default]
    FirstSeen,
    /// Smallest character value first
    Lexical,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::FirstSeen => "first-seen",
            TieBreak::Lexical => "lexical",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Knobs for a single derivation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub tie_break: TieBreak,
}

/// A complete, valid ordering of the input alphabet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphabetOrder {
    pub order: String,
    pub alphabet_size: usize,
    pub edges: Vec<(char, char)>,
}

impl AlphabetOrder {
    pub(crate) fn new(order: Vec<char>, graph: &PrecedenceGraph) -> Self {
        Self {
            alphabet_size: graph.alphabet().len(),
            order: order.into_iter().collect(),
            edges: graph.edges(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.order
    }

    pub fn into_string(self) -> String {
        self.order
    }

    /// Edges of `graph` this ordering puts backwards, or whose characters it
    /// is missing
    pub fn respects(&self, graph: &PrecedenceGraph) -> Vec<OrderConflict> {
        let ranks: HashMap<char, usize> = self
            .order
            .chars()
            .enumerate()
            .map(|(i, c)| (c, i))
            .collect();

        graph
            .edges()
            .into_iter()
            .filter(|(before, after)| match (ranks.get(before), ranks.get(after)) {
                (Some(b), Some(a)) => b > a,
                _ => true,
            })
            .map(|(before, after)| OrderConflict { before, after })
            .collect()
    }

    pub fn is_consistent_with(&self, graph: &PrecedenceGraph) -> bool {
        self.respects(graph).is_empty()
    }
}

impl fmt::Display for AlphabetOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.order)
    }
}

/// An edge `before → after` that an ordering fails to honour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderConflict {
    pub before: char,
    pub after: char,
}

/// Machine-readable outcome of one derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    pub order: String,
    pub valid: bool,
    pub error: Option<String>,
    pub kind: Option<&'static str>,
}

impl From<&crate::Result<AlphabetOrder>> for OrderReport {
    fn from(result: &crate::Result<AlphabetOrder>) -> Self {
        match result {
            Ok(order) => OrderReport {
                order: order.order.clone(),
                valid: true,
                error: None,
                kind: None,
            },
            Err(e) => OrderReport::invalid(e),
        }
    }
}

impl OrderReport {
    fn invalid(e: &OrderError) -> Self {
        OrderReport {
            order: String::new(),
            valid: false,
            error: Some(e.to_string()),
            kind: Some(e.kind()),
        }
    }
}
