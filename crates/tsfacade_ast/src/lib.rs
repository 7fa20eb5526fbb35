//! tsfacade_ast: Declaration tree consumed by the facade emitter.
//!
//! The tree covers the declaration-level subset of TypeScript that an
//! ambient `.d.ts` file contains. Nodes are produced by an external front
//! end and deserialised with serde; every node kind outside that subset
//! is kept as an `Unknown`/`Other` placeholder instead of failing.

pub mod node;
pub mod types;

// Re-export key types
pub use node::*;
pub use types::*;
