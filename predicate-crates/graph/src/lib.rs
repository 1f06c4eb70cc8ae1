//! Compiles predicate expressions such as `neq(abs(sub(q0,q1)),2)` into a constraint
//! hypergraph.
//!
//! The graph consists of [`variables::Variable`]s connected by [`constraints::Constraint`]s. A
//! constraint is either functional (it defines an auxiliary variable as the result of an
//! operator, e.g. `_1 = sub(q0, q1)`) or general (a relation without a result, e.g.
//! `neq(_0, 2)`). Every expression compiles into exactly one general constraint plus one
//! functional constraint per nested application.
//!
//! Expressions are scanned with [`predicate_format`] and lowered by the
//! [`compiler::ConstraintParser`] into any [`ProblemStore`]; [`Problem`] is the in-memory store.
//!
//! # Example
//! ```
//! use predicate_graph::Problem;
//!
//! let mut problem = Problem::default();
//! let _ = problem.post("neq(abs(sub(q0,q1)),2)").expect("valid expression");
//!
//! assert_eq!(2, problem.named_variables().count());
//! assert_eq!(3, problem.auxiliary_variables().count());
//! assert_eq!(3, problem.num_constraints());
//! ```

pub mod compiler;
pub mod constraints;
mod containers;
pub mod variables;

mod problem;
mod store;

pub use predicate_format;

pub use crate::problem::Problem;
pub use crate::store::ProblemStore;
