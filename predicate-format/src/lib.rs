//! This crate contains the syntax layer for predicate expressions such as
//! `neq(abs(sub(q0,q1)),2)`: nested applications of named operators to identifiers, integer
//! constants and other applications.
//!
//! To scan an expression see [`scanner::scan`], which produces a [`Node`] tree. The tree knows
//! nothing about variables or constraints; turning it into a constraint graph is left to its
//! consumers. Writing a [`Node`] with [`std::fmt::Display`] gives its canonical form, which
//! scans back into an equal tree.

mod node;

pub mod scanner;

pub use node::*;
pub use scanner::scan;
pub use scanner::ParseError;
