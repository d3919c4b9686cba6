//! Shared, hash-consed decision DAGs for Boolean functions.
//!
//! Nouns: [`Arena`](arena::Arena), [`NodeHandle`](arena::NodeHandle). Verbs:
//! [`literal`](algebra::literal), [`invert`](algebra::invert),
//! [`disjoin`](algebra::disjoin), [`conjoin`](algebra::conjoin) and friends
//! in [`algebra`], [`evaluate`](eval::evaluate), [`print`](printer::print),
//! [`parse`](parser::parse).
//!
//! There is no process-wide arena; every operation takes one explicitly.
//! Handles from different arenas must never be mixed.

pub mod algebra;
pub mod arena;
pub mod eval;
pub mod parser;
pub mod printer;

pub use algebra::{
    conjoin, conjoin_all, disjoin, disjoin_all, exnor, exnor_all, exnor_vec, exor, exor_all,
    exor_vec, invert, literal, multiply,
};
pub use arena::{Arena, NodeHandle};
pub use eval::evaluate;
pub use parser::parse;
pub use printer::print;
