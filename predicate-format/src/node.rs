//! The syntax tree produced by [`crate::scanner::scan`].
use std::fmt::Display;
use std::fmt::Formatter;
use std::rc::Rc;

/// How a [`Node`] should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A leaf naming a variable.
    Identifier,
    /// A leaf holding an integer constant.
    Integer(i64),
    /// The application of an operator to its children.
    Operator,
}

/// A literal attached to an operator between `{` and `}`.
///
/// Parameters configure a relation (e.g. a modulus or an exception value) but are never
/// operands of it, so they are kept apart from [`Node::children`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    Int(i64),
    Identifier(Rc<str>),
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Parameter::Int(value) => write!(f, "{value}"),
            Parameter::Identifier(identifier) => write!(f, "{identifier}"),
        }
    }
}

/// A node in the parse tree of a predicate expression.
///
/// A node is either a leaf ([`NodeKind::Identifier`] or [`NodeKind::Integer`]) or an operator
/// application. Leaves never have children or parameters; the constructors are the only way to
/// build a node, which keeps this invariant intact.
///
/// The [`Display`] implementation writes the canonical form of the tree, which scans back into
/// an equal tree:
/// ```
/// # use predicate_format::scanner::scan;
/// let node = scan("neq( abs(sub(q0, q1)), 2 )").expect("valid expression");
/// assert_eq!("neq(abs(sub(q0,q1)),2)", node.to_string());
/// assert_eq!(node, scan(&node.to_string()).expect("canonical form scans"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    operator: Rc<str>,
    parameters: Vec<Parameter>,
    children: Vec<Node>,
    kind: NodeKind,
}

impl Node {
    pub fn identifier(name: impl Into<Rc<str>>) -> Node {
        Node {
            operator: name.into(),
            parameters: vec![],
            children: vec![],
            kind: NodeKind::Identifier,
        }
    }

    /// Create an integer leaf. The operator text is the decimal form of `value`.
    pub fn integer(value: i64) -> Node {
        Node::integer_literal(value.to_string(), value)
    }

    /// Create an integer leaf for the literal `text` as written in an expression, e.g. `007`
    /// with `value` 7.
    pub fn integer_literal(text: impl Into<Rc<str>>, value: i64) -> Node {
        Node {
            operator: text.into(),
            parameters: vec![],
            children: vec![],
            kind: NodeKind::Integer(value),
        }
    }

    /// Create the application of `operator` to `children`, configured by `parameters`.
    pub fn application(
        operator: impl Into<Rc<str>>,
        parameters: Vec<Parameter>,
        children: Vec<Node>,
    ) -> Node {
        Node {
            operator: operator.into(),
            parameters,
            children,
            kind: NodeKind::Operator,
        }
    }

    /// The operator name, identifier name, or text of the integer literal.
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// The operator as a shared string, so the name can be kept without a new allocation.
    pub fn operator_rc(&self) -> Rc<str> {
        Rc::clone(&self.operator)
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self.kind, NodeKind::Operator)
    }

    /// The value of an integer leaf, `None` for any other node.
    pub fn integer_value(&self) -> Option<i64> {
        match self.kind {
            NodeKind::Integer(value) => Some(value),
            NodeKind::Identifier | NodeKind::Operator => None,
        }
    }

    /// The number of nodes on the longest path from this node to a leaf, counting both ends.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// The number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Node::leaf_count).sum()
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.operator)?;

        if self.is_leaf() {
            return Ok(());
        }

        if !self.parameters.is_empty() {
            write!(f, "{{")?;
            write_separated(f, &self.parameters)?;
            write!(f, "}}")?;
        }

        write!(f, "(")?;
        write_separated(f, &self.children)?;
        write!(f, ")")
    }
}

fn write_separated<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> std::fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }

    Ok(())
}
