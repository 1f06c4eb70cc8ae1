//! The hyperedges of the constraint graph.
//!
//! A constraint is a relation over an ordered list of variables; the position of a variable in
//! the list is its argument position for the operator. Constraints only hold [`VariableId`]s,
//! the variables themselves are owned by the [`crate::ProblemStore`].
use std::rc::Rc;

use predicate_format::Parameter;

use crate::containers::StorageKey;
use crate::variables::VariableId;

/// A handle to a [`Constraint`] registered in a [`crate::ProblemStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId {
    pub id: u32,
}

impl ConstraintId {
    pub fn new(id: u32) -> Self {
        ConstraintId { id }
    }
}

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId::new(index as u32)
    }
}

/// Defines `result` as the value of `operator` applied to `operands`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionalConstraint {
    pub result: VariableId,
    pub operator: Rc<str>,
    pub parameters: Vec<Parameter>,
    pub operands: Vec<VariableId>,
}

/// A relation named `operator` which has to hold over `operands`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneralConstraint {
    pub operator: Rc<str>,
    pub parameters: Vec<Parameter>,
    pub operands: Vec<VariableId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    Functional(FunctionalConstraint),
    General(GeneralConstraint),
}

impl Constraint {
    pub fn operator(&self) -> &str {
        match self {
            Constraint::Functional(constraint) => &constraint.operator,
            Constraint::General(constraint) => &constraint.operator,
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        match self {
            Constraint::Functional(constraint) => &constraint.parameters,
            Constraint::General(constraint) => &constraint.parameters,
        }
    }

    pub fn operands(&self) -> &[VariableId] {
        match self {
            Constraint::Functional(constraint) => &constraint.operands,
            Constraint::General(constraint) => &constraint.operands,
        }
    }

    /// The variable defined by a functional constraint.
    pub fn result(&self) -> Option<VariableId> {
        match self {
            Constraint::Functional(constraint) => Some(constraint.result),
            Constraint::General(_) => None,
        }
    }

    pub fn is_functional(&self) -> bool {
        matches!(self, Constraint::Functional(_))
    }

    /// All variables in the scope of the constraint: the result (if any) followed by the
    /// operands.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.result()
            .into_iter()
            .chain(self.operands().iter().copied())
    }

    pub fn involves(&self, variable: VariableId) -> bool {
        self.variables().any(|other| other == variable)
    }
}

impl From<FunctionalConstraint> for Constraint {
    fn from(constraint: FunctionalConstraint) -> Self {
        Constraint::Functional(constraint)
    }
}

impl From<GeneralConstraint> for Constraint {
    fn from(constraint: GeneralConstraint) -> Self {
        Constraint::General(constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(id: u32) -> VariableId {
        VariableId::new(id)
    }

    #[test]
    fn functional_scope_starts_with_the_result() {
        let constraint = Constraint::from(FunctionalConstraint {
            result: var(2),
            operator: "sub".into(),
            parameters: vec![],
            operands: vec![var(0), var(1)],
        });

        assert_eq!(Some(var(2)), constraint.result());
        assert_eq!(
            vec![var(2), var(0), var(1)],
            constraint.variables().collect::<Vec<_>>()
        );
    }

    #[test]
    fn general_constraints_have_no_result() {
        let constraint = Constraint::from(GeneralConstraint {
            operator: "neq".into(),
            parameters: vec![Parameter::Int(1)],
            operands: vec![var(0), var(1)],
        });

        assert_eq!(None, constraint.result());
        assert_eq!("neq", constraint.operator());
        assert_eq!(&[Parameter::Int(1)], constraint.parameters());
        assert!(constraint.involves(var(1)));
        assert!(!constraint.involves(var(2)));
    }
}
