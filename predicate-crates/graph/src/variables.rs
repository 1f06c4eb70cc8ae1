//! The vertices of the constraint graph.
use std::fmt::Display;
use std::fmt::Formatter;
use std::rc::Rc;

use crate::containers::StorageKey;

/// A handle to a [`Variable`] registered in a [`crate::ProblemStore`].
///
/// Two handles are equal exactly when they refer to the same variable, so a shared named
/// variable shows up as the same id in every constraint it takes part in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId {
    pub id: u32,
}

impl VariableId {
    pub fn new(id: u32) -> Self {
        VariableId { id }
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId::new(index as u32)
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "_{}", self.id)
    }
}

/// A variable of the problem.
///
/// Variables written by the user have a name. Auxiliary variables are introduced while
/// compiling an expression: either to hold the result of a nested sub-expression, in which case
/// they have no name, or to hold an integer constant, in which case they carry its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    name: Option<Rc<str>>,
    auxiliary: bool,
    value: Option<i64>,
}

impl Variable {
    /// A decision variable the user refers to by `name`.
    pub fn named(name: impl Into<Rc<str>>) -> Variable {
        Variable {
            name: Some(name.into()),
            auxiliary: false,
            value: None,
        }
    }

    /// An unnamed variable holding the result of a sub-expression.
    pub fn auxiliary() -> Variable {
        Variable {
            name: None,
            auxiliary: true,
            value: None,
        }
    }

    /// An anonymous variable fixed to `value`.
    pub fn constant(value: i64) -> Variable {
        Variable {
            name: None,
            auxiliary: true,
            value: Some(value),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn name_rc(&self) -> Option<Rc<str>> {
        self.name.as_ref().map(Rc::clone)
    }

    pub fn is_auxiliary(&self) -> bool {
        self.auxiliary
    }

    /// The value of a constant variable.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn is_constant(&self) -> bool {
        self.value.is_some()
    }
}
