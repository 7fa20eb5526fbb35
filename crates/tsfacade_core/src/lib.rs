//! tsfacade_core: Core utilities for the tsfacade converter.
//!
//! Provides the identifier rules of the Scala target (reserved words,
//! backtick escaping, package clauses) and the ordered collections used
//! for source-order deduplication.

pub mod collections;
pub mod names;

// Re-export commonly used items
pub use collections::OrderedSet;
pub use names::{
    capitalize, escape_identifier, is_identifier, is_reserved_word, package_clause_name,
    unquote,
};
