//! Topological sorting using Kahn's algorithm.

use super::PrecedenceGraph;
use crate::models::TieBreak;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use tracing::trace;

/// Characters whose in-degree has dropped to zero
#[derive(Debug)]
enum ReadySet {
    Fifo(VecDeque<char>),
    /// BinaryHeap is a max-heap, so wrap in Reverse for smallest-first
    Lexical(BinaryHeap<Reverse<char>>),
}

impl ReadySet {
    fn new(tie_break: TieBreak) -> Self {
        match tie_break {
            TieBreak::FirstSeen => ReadySet::Fifo(VecDeque::new()),
            TieBreak::Lexical => ReadySet::Lexical(BinaryHeap::new()),
        }
    }

    fn push(&mut self, c: char) {
        match self {
            ReadySet::Fifo(queue) => queue.push_back(c),
            ReadySet::Lexical(heap) => heap.push(Reverse(c)),
        }
    }

    fn pop(&mut self) -> Option<char> {
        match self {
            ReadySet::Fifo(queue) => queue.pop_front(),
            ReadySet::Lexical(heap) => heap.pop().map(|Reverse(c)| c),
        }
    }
}

/// Sort the alphabet so every edge points forward.
///
/// The returned sequence is shorter than the alphabet exactly when the graph
/// has a cycle; the characters left out are those on or behind a cycle.
pub fn topological_sort(graph: &PrecedenceGraph, tie_break: TieBreak) -> Vec<char> {
    let mut in_degree = graph.in_degrees();
    let mut ready = ReadySet::new(tie_break);

    for &c in graph.alphabet() {
        if in_degree.get(&c).copied().unwrap_or(0) == 0 {
            ready.push(c);
        }
    }

    let mut result = Vec::with_capacity(graph.alphabet().len());

    while let Some(current) = ready.pop() {
        trace!(%current, "emit");
        result.push(current);

        for &next in graph.successors(current) {
            if let Some(degree) = in_degree.get_mut(&next) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push(next);
                }
            }
        }
    }

    result
}
