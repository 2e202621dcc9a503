//! # alien-order
//!
//! Recover the character ordering of an unknown alphabet from a list of words
//! sorted in that ordering. Adjacent words yield "must precede" edges, and a
//! topological sort over those edges yields the ordering, unless the input
//! contains a cycle or a word followed by its own prefix.

pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod models;
pub mod order;
pub mod scenarios;

pub use error::{OrderError, Result};
pub use graph::PrecedenceGraph;
pub use models::*;
pub use order::{alien_order, derive_order, derive_order_with};
