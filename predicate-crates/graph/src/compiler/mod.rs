//! Lowers predicate expressions into a [`ProblemStore`].
//!
//! An expression such as `neq(abs(sub(q0,q1)),2)` is compiled bottom-up:
//! - identifiers resolve to the named variable of the store, which is created on first use;
//! - integer literals become anonymous constant variables;
//! - every nested application gets a fresh auxiliary variable `r` and a functional constraint
//!   `r = op(operands)`;
//! - the application at the root becomes the one general constraint over its lowered operands.
//!
//! The example above therefore yields `_a = sub(q0,q1)`, `_b = abs(_a)` and `neq(_b, 2)`.

mod error;
mod lower_operand;
mod options;

pub use error::CompileError;
use log::debug;
pub use options::*;
use predicate_format::scan;

use crate::constraints::ConstraintId;
use crate::constraints::GeneralConstraint;
use crate::containers::HashMap;
use crate::store::ProblemStore;
use crate::variables::VariableId;

/// Compiles expressions into the constraints and variables of a [`ProblemStore`].
///
/// Named variables are shared through the store, so compiling several expressions with one
/// parser, with several parsers, or through [`crate::Problem::post`] all refer to the same
/// variable for the same name.
#[derive(Debug)]
pub struct ConstraintParser<'store, Store> {
    store: &'store mut Store,
    options: CompilerOptions,
    /// Constant variables by value, only populated with [`ConstantSharing::PerValue`].
    constants: HashMap<i64, VariableId>,
    /// The number of auxiliary variables introduced by the current expression.
    num_auxiliaries: usize,
}

impl<'store, Store: ProblemStore> ConstraintParser<'store, Store> {
    pub fn new(store: &'store mut Store) -> Self {
        ConstraintParser::with_options(store, CompilerOptions::default())
    }

    pub fn with_options(store: &'store mut Store, options: CompilerOptions) -> Self {
        ConstraintParser {
            store,
            options,
            constants: HashMap::default(),
            num_auxiliaries: 0,
        }
    }

    /// Compile `expression` into the store.
    ///
    /// The root of the expression has to be an operator application; it is registered as a
    /// [`GeneralConstraint`] whose id is returned. Nested applications are registered as
    /// functional constraints defining auxiliary variables.
    ///
    /// # Example
    /// ```
    /// # use predicate_graph::compiler::ConstraintParser;
    /// # use predicate_graph::Problem;
    /// let mut problem = Problem::default();
    /// let mut parser = ConstraintParser::new(&mut problem);
    ///
    /// let neq = parser.split("neq(abs(sub(q0,q1)),2)").expect("valid expression");
    /// assert!(parser.split("q0").is_err());
    ///
    /// let constraint = problem.get_constraint(neq).expect("registered constraint");
    /// assert_eq!("neq", constraint.operator());
    /// assert_eq!(3, problem.num_constraints());
    /// ```
    pub fn split(&mut self, expression: &str) -> Result<ConstraintId, CompileError> {
        let root = scan(expression)?;

        if root.is_leaf() {
            return Err(CompileError::InvalidExpression {
                expression: expression.to_owned(),
            });
        }

        self.num_auxiliaries = 0;
        let operands = self.lower_operands(&root);

        let constraint_id = self.store.add_constraint(
            GeneralConstraint {
                operator: root.operator_rc(),
                parameters: root.parameters().to_vec(),
                operands,
            }
            .into(),
        );

        debug!(
            "compiled '{root}' ({} operands, {} leaves, depth {}) with {} auxiliary variables",
            root.children().len(),
            root.leaf_count(),
            root.depth(),
            self.num_auxiliaries,
        );

        Ok(constraint_id)
    }

    /// Compile the `expressions` in order, stopping at the first one that fails.
    ///
    /// Expressions before the failing one stay compiled into the store.
    pub fn split_all<'expr>(
        &mut self,
        expressions: impl IntoIterator<Item = &'expr str>,
    ) -> Result<Vec<ConstraintId>, CompileError> {
        expressions
            .into_iter()
            .map(|expression| self.split(expression))
            .collect()
    }
}
