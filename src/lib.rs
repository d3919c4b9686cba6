//! ## About
//!
//! Shared-reduced decision DAGs and generalization trees for Boolean
//! functions of a fixed set of indexed variables.
//!
//! The [`dag`] module is the core: an [`dag::Arena`] hash-conses nodes of a
//! reduced binary decision graph, and a small algebra
//! ([`dag::literal`], [`dag::invert`], [`dag::disjoin`], [`dag::conjoin`],
//! [`dag::exor`], [`dag::exnor`], [`dag::multiply`]) builds functions over
//! it. [`dag::evaluate`] runs a function against a concrete input;
//! [`dag::print`] and [`dag::parse`] convert to and from an infix textual
//! form.
//!
//! The [`tree`] module builds a separate kind of structure — a
//! [`tree::Tree`] that generalizes from labeled examples (bit vectors
//! classified `zero` or `one`) by recursively splitting on the literal that
//! contaminates the fewest negative examples. [`tree::predict`] classifies
//! new inputs; [`tree::tree_print`] renders the tree, omitting branches that
//! can never be satisfied.
//!
//! There is no process-wide state anywhere in this crate: every operation
//! takes the arena (or tree) it operates on as an explicit argument.
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories,
//!             which use substantives (i.e., omit a `get_` prefix) much like
//!             the standard library.

pub mod dag;
pub mod errors;
pub mod tree;

pub use dag::{Arena, NodeHandle};
pub use errors::{IndexOutOfRange, LengthMismatch, ParseError};
pub use tree::Tree;
