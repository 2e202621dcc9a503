//! Precedence graph construction, topological sorting and cycle reporting.

pub mod builder;
pub mod cycle;
pub mod sort;

pub use builder::PrecedenceGraph;
pub use cycle::find_cycle;
pub use sort::topological_sort;
