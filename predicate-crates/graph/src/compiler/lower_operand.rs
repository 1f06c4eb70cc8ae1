use log::trace;
use predicate_format::Node;
use predicate_format::NodeKind;

use super::ConstantSharing;
use super::ConstraintParser;
use crate::constraints::FunctionalConstraint;
use crate::store::ProblemStore;
use crate::variables::Variable;
use crate::variables::VariableId;

impl<Store: ProblemStore> ConstraintParser<'_, Store> {
    /// Lower the children of `node`, left to right.
    pub(super) fn lower_operands(&mut self, node: &Node) -> Vec<VariableId> {
        node.children()
            .iter()
            .map(|child| self.lower_operand(child))
            .collect()
    }

    /// Get the variable which stands for `node` in the constraint of its parent.
    fn lower_operand(&mut self, node: &Node) -> VariableId {
        match node.kind() {
            NodeKind::Identifier => self.store.intern_variable(node.operator()),

            NodeKind::Integer(value) => self.constant(value),

            NodeKind::Operator => {
                // The result is registered before the operands, so it precedes them in the store.
                let result = self.store.add_variable(Variable::auxiliary());
                self.num_auxiliaries += 1;

                let operands = self.lower_operands(node);
                trace!("defining {result} as '{node}'");

                let _ = self.store.add_constraint(
                    FunctionalConstraint {
                        result,
                        operator: node.operator_rc(),
                        parameters: node.parameters().to_vec(),
                        operands,
                    }
                    .into(),
                );

                result
            }
        }
    }

    fn constant(&mut self, value: i64) -> VariableId {
        match self.options.constants {
            ConstantSharing::PerOccurrence => self.new_constant(value),

            ConstantSharing::PerValue => match self.constants.get(&value) {
                Some(&existing) => existing,
                None => {
                    let constant = self.new_constant(value);
                    let _ = self.constants.insert(value, constant);
                    constant
                }
            },
        }
    }

    fn new_constant(&mut self, value: i64) -> VariableId {
        self.num_auxiliaries += 1;
        self.store.add_variable(Variable::constant(value))
    }
}
