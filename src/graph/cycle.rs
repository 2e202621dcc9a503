//! Cycle reporting for alphabets the sorter could not drain.

use super::PrecedenceGraph;
use std::collections::HashSet;

/// Find one cycle among the `unresolved` characters.
///
/// Returns the cycle closed on its first character, e.g. `[z, x, z]`.
/// Characters left over by Kahn's algorithm always contain a cycle, so this
/// only returns None for a set that was not produced by the sorter.
pub fn find_cycle(graph: &PrecedenceGraph, unresolved: &[char]) -> Option<Vec<char>> {
    let allowed: HashSet<char> = unresolved.iter().copied().collect();
    let mut visited = HashSet::new();

    for &start in unresolved {
        if !visited.insert(start) {
            continue;
        }

        if let Some(cycle) = dfs_detect_cycle(graph, &allowed, start, &mut visited) {
            return Some(cycle);
        }
    }

    None
}

/// Iterative DFS following successors inside `allowed`.
///
/// Each stack frame is a node and the index of its next successor to try;
/// the stack is always the current path.
fn dfs_detect_cycle(
    graph: &PrecedenceGraph,
    allowed: &HashSet<char>,
    start: char,
    visited: &mut HashSet<char>,
) -> Option<Vec<char>> {
    let mut on_path: HashSet<char> = HashSet::from([start]);
    let mut stack: Vec<(char, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        let next = graph.successors(node).get(frame.1).copied();
        frame.1 += 1;

        match next {
            None => {
                on_path.remove(&node);
                stack.pop();
            }
            Some(next) if !allowed.contains(&next) => {}
            Some(next) if on_path.contains(&next) => return Some(cycle_from(&stack, next)),
            Some(next) => {
                if visited.insert(next) {
                    on_path.insert(next);
                    stack.push((next, 0));
                }
            }
        }
    }

    None
}

/// Trim the DFS path down to the cycle closed by `closing`
fn cycle_from(stack: &[(char, usize)], closing: char) -> Vec<char> {
    let pos = stack
        .iter()
        .position(|&(c, _)| c == closing)
        .unwrap_or(0);

    stack[pos..]
        .iter()
        .map(|&(c, _)| c)
        .chain(std::iter::once(closing))
        .collect()
}
