use std::fmt::Display;
use std::fmt::Formatter;
use std::rc::Rc;

use log::trace;
use log::warn;
use predicate_format::Parameter;

use crate::compiler::CompileError;
use crate::compiler::ConstraintParser;
use crate::constraints::Constraint;
use crate::constraints::ConstraintId;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::store::ProblemStore;
use crate::variables::Variable;
use crate::variables::VariableId;

/// An in-memory constraint hypergraph.
///
/// Variables are the vertices and constraints the hyperedges. Named variables are interned: a
/// name is registered at most once, and every reference to it resolves to the same
/// [`VariableId`].
///
/// # Example
/// ```
/// # use predicate_graph::Problem;
/// let mut problem = Problem::default();
///
/// let _ = problem.post("neq(q0,q1)").expect("valid expression");
/// let _ = problem
///     .post("neq(abs(sub(q0,q1)),1)")
///     .expect("valid expression");
///
/// // `q0` and `q1` are shared between both constraints.
/// assert_eq!(2, problem.named_variables().count());
/// let q0 = problem.variable_named("q0").expect("q0 is registered");
/// assert_eq!(2, problem.constraints_of(q0).count());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Problem {
    variables: KeyedVec<VariableId, Variable>,
    constraints: KeyedVec<ConstraintId, Constraint>,
    variable_by_name: HashMap<Rc<str>, VariableId>,
}

impl Problem {
    /// Compile `expression` into this problem with the default compiler options.
    ///
    /// Returns the id of the constraint asserted by the expression.
    pub fn post(&mut self, expression: &str) -> Result<ConstraintId, CompileError> {
        ConstraintParser::new(self).split(expression)
    }

    pub fn variable_named(&self, name: &str) -> Option<VariableId> {
        self.variable_by_name.get(name).copied()
    }

    pub fn get_variable(&self, variable: VariableId) -> Option<&Variable> {
        self.variables.get(variable)
    }

    pub fn get_constraint(&self, constraint: ConstraintId) -> Option<&Constraint> {
        self.constraints.get(constraint)
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// All variables, in the order they were registered.
    pub fn variables(&self) -> impl Iterator<Item = (VariableId, &Variable)> + '_ {
        self.variables.iter_with_keys()
    }

    /// All constraints, in the order they were registered.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> + '_ {
        self.constraints.iter_with_keys()
    }

    pub fn named_variables(&self) -> impl Iterator<Item = (VariableId, &Variable)> + '_ {
        self.variables()
            .filter(|(_, variable)| variable.name().is_some())
    }

    pub fn auxiliary_variables(&self) -> impl Iterator<Item = (VariableId, &Variable)> + '_ {
        self.variables()
            .filter(|(_, variable)| variable.is_auxiliary())
    }

    /// The constraints which have `variable` in their scope.
    pub fn constraints_of(&self, variable: VariableId) -> impl Iterator<Item = ConstraintId> + '_ {
        self.constraints()
            .filter(move |(_, constraint)| constraint.involves(variable))
            .map(|(id, _)| id)
    }

    /// The text used for `variable` when writing constraints: its name, its value for a
    /// constant, or its id for an unnamed auxiliary variable.
    fn label(&self, variable: VariableId) -> String {
        match self.variables.get(variable) {
            Some(var) => match (var.name(), var.value()) {
                (Some(name), _) => name.to_owned(),
                (None, Some(value)) => value.to_string(),
                (None, None) => variable.to_string(),
            },
            None => variable.to_string(),
        }
    }

    fn write_call(
        &self,
        f: &mut Formatter<'_>,
        operator: &str,
        parameters: &[Parameter],
        operands: &[VariableId],
    ) -> std::fmt::Result {
        write!(f, "{operator}")?;

        if !parameters.is_empty() {
            let parameters = parameters
                .iter()
                .map(Parameter::to_string)
                .collect::<Vec<_>>();
            write!(f, "{{{}}}", parameters.join(", "))?;
        }

        let operands = operands
            .iter()
            .map(|&operand| self.label(operand))
            .collect::<Vec<_>>();
        write!(f, "({})", operands.join(", "))
    }
}

impl ProblemStore for Problem {
    fn variable(&self, name: &str) -> Option<VariableId> {
        self.variable_named(name)
    }

    fn add_variable(&mut self, variable: Variable) -> VariableId {
        let Some(name) = variable.name_rc() else {
            return self.variables.push(variable);
        };

        if let Some(&existing) = self.variable_by_name.get(&name) {
            warn!("variable '{name}' is already registered, keeping {existing}");
            return existing;
        }

        let id = self.variables.push(variable);
        let _ = self.variable_by_name.insert(name, id);
        id
    }

    fn add_constraint(&mut self, constraint: Constraint) -> ConstraintId {
        self.constraints.push(constraint)
    }

    fn intern_variable(&mut self, name: &str) -> VariableId {
        let name: Rc<str> = Rc::from(name);
        let variables = &mut self.variables;

        *self
            .variable_by_name
            .entry(Rc::clone(&name))
            .or_insert_with(|| {
                trace!("registering variable '{name}'");
                variables.push(Variable::named(name))
            })
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "variables:")?;
        for (id, variable) in self.variables() {
            write!(f, "  {}", self.label(id))?;
            if variable.is_constant() {
                write!(f, " (constant)")?;
            } else if variable.is_auxiliary() {
                write!(f, " (auxiliary)")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "constraints:")?;
        for (_, constraint) in self.constraints() {
            write!(f, "  ")?;
            if let Some(result) = constraint.result() {
                write!(f, "{} = ", self.label(result))?;
            }
            self.write_call(
                f,
                constraint.operator(),
                constraint.parameters(),
                constraint.operands(),
            )?;
            writeln!(f)?;
        }

        Ok(())
    }
}
