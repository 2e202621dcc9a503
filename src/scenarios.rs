//! Reference inputs and their expected orderings, shared by `demo` and tests.

/// One word list with the ordering the default tie-break produces for it
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub words: &'static [&'static str],
    /// Empty when the input admits no ordering
    pub expected: &'static str,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "normal input",
        words: &["wrt", "wrf", "er", "ett", "rftt"],
        expected: "wertf",
    },
    Scenario {
        name: "cycle in graph",
        words: &["z", "x", "z"],
        expected: "",
    },
    Scenario {
        name: "single word",
        words: &["abc"],
        expected: "abc",
    },
    Scenario {
        name: "invalid prefix",
        words: &["abc", "ab"],
        expected: "",
    },
    Scenario {
        name: "two letters",
        words: &["a", "b"],
        expected: "ab",
    },
    Scenario {
        name: "empty input",
        words: &[],
        expected: "",
    },
];
