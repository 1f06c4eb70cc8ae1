use crate::constraints::Constraint;
use crate::constraints::ConstraintId;
use crate::variables::Variable;
use crate::variables::VariableId;

#[cfg(doc)]
use crate::compiler::ConstraintParser;
#[cfg(doc)]
use crate::Problem;

/// The storage a [`ConstraintParser`] compiles expressions into.
///
/// The store owns all variables and constraints; everything else refers to them through the
/// returned ids. [`Problem`] is the in-memory implementation provided by this crate.
///
/// A store is not meant to be shared between threads while expressions are being compiled into
/// it: [`ProblemStore::intern_variable`] has to observe and update the name mapping in one go.
pub trait ProblemStore {
    /// Look up the variable registered under `name`.
    fn variable(&self, name: &str) -> Option<VariableId>;

    /// Register a new variable.
    ///
    /// Callers must not register the same logical variable twice; use
    /// [`ProblemStore::intern_variable`] for named variables.
    fn add_variable(&mut self, variable: Variable) -> VariableId;

    /// Register a new constraint. All variables it refers to must already be registered.
    fn add_constraint(&mut self, constraint: Constraint) -> ConstraintId;

    /// Get the variable named `name`, registering a new named variable if there is none.
    ///
    /// Every call with the same name returns the same id. The default implementation combines
    /// [`ProblemStore::variable`] and [`ProblemStore::add_variable`]; stores that keep a name
    /// map should do the lookup and the insertion as a single operation.
    fn intern_variable(&mut self, name: &str) -> VariableId {
        match self.variable(name) {
            Some(existing) => existing,
            None => self.add_variable(Variable::named(name)),
        }
    }
}
