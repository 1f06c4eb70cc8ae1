//! Turns an expression string into a [`Node`] tree.
//!
//! The grammar, ignoring whitespace between tokens:
//! ```text
//! term      := INTEGER
//!            | OPERATOR ['{' paramList '}'] '(' [term (',' term)*] ')'
//!            | IDENTIFIER
//! paramList := literal (',' literal)*
//! literal   := INTEGER | IDENTIFIER
//! INTEGER   := ['-'] digit+
//! IDENTIFIER, OPERATOR := [A-Za-z_][A-Za-z0-9_]*
//! ```
//! A word that reads as an integer always becomes an integer leaf, never an identifier.
//!
//! Operator applications may nest at most [`MAX_NESTING_DEPTH`] levels deep.

mod error;
mod tokens;

use std::collections::BTreeSet;
use std::rc::Rc;

use chumsky::error::Rich;
use chumsky::extra::{self};
use chumsky::prelude::choice;
use chumsky::prelude::end;
use chumsky::prelude::recursive;
use chumsky::IterParser;
use chumsky::Parser;
pub use error::ParseError;

use crate::node::Node;

#[derive(Clone, Debug, Default)]
struct ScanState {
    /// The identifiers encountered so far.
    strings: BTreeSet<Rc<str>>,
}

impl ScanState {
    fn get_interned(&mut self, string: &str) -> Rc<str> {
        match self.strings.get(string) {
            Some(interned) => Rc::clone(interned),
            None => {
                let interned: Rc<str> = Rc::from(string);
                let _ = self.strings.insert(Rc::clone(&interned));
                interned
            }
        }
    }
}

/// The deepest nesting of operand lists accepted by [`scan`].
pub const MAX_NESTING_DEPTH: usize = 256;

type ScanExtra<'src> = extra::Full<Rich<'src, char>, extra::SimpleState<ScanState>, ()>;

/// Scan `expression` into a syntax tree.
///
/// The whole input has to form a single term. A bare identifier or integer is a valid term, it
/// is up to the consumer of the tree to decide whether a leaf is acceptable at the root.
///
/// # Example
/// ```
/// use predicate_format::scanner::scan;
/// use predicate_format::NodeKind;
///
/// let root = scan("neq(abs(sub(q0,q1)),2)").expect("valid expression");
///
/// assert_eq!("neq", root.operator());
/// assert_eq!(2, root.children().len());
/// assert_eq!(NodeKind::Integer(2), root.children()[1].kind());
///
/// let error = scan("").expect_err("nothing to scan");
/// assert_eq!(0, error.position());
/// ```
pub fn scan(expression: &str) -> Result<Node, ParseError> {
    check_nesting(expression)?;

    let mut state = extra::SimpleState(ScanState::default());

    term()
        .then_ignore(end())
        .parse_with_state(expression, &mut state)
        .into_result()
        .map_err(|errors| {
            errors
                .first()
                .map(|error| ParseError::from_rich(expression, error))
                .unwrap_or_else(|| ParseError::unknown(expression))
        })
}

/// Reject input whose parentheses nest deeper than [`MAX_NESTING_DEPTH`] before the recursive
/// grammar (and every later walk over the tree) gets to see it.
fn check_nesting(expression: &str) -> Result<(), ParseError> {
    let mut depth = 0_usize;

    for (offset, character) in expression.char_indices() {
        match character {
            '(' => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(ParseError::too_deep(expression, offset));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}

fn term<'src>() -> impl Parser<'src, &'src str, Node, ScanExtra<'src>> + Clone {
    recursive(|term| {
        let operands = term
            .separated_by(tokens::comma())
            .collect::<Vec<_>>()
            .delimited_by(tokens::open_paren(), tokens::close_paren());

        let application = tokens::identifier()
            .then(tokens::parameter_list().or_not())
            .then(operands)
            .map(|((operator, parameters), children)| {
                Node::application(operator, parameters.unwrap_or_default(), children)
            });

        // Integers are tried first so that a numeric word is never taken for a name.
        choice((tokens::integer_leaf(), application, tokens::identifier_leaf())).padded()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::node::Parameter;

    fn leaf(name: &str) -> Node {
        Node::identifier(name)
    }

    #[test]
    fn flat_application() {
        let node = scan("neq(x,y)").expect("valid expression");

        assert_eq!(
            Node::application("neq", vec![], vec![leaf("x"), leaf("y")]),
            node
        );
    }

    #[test]
    fn nested_application() {
        let node = scan("neq(abs(sub(q0,q1)),2)").expect("valid expression");

        let sub = Node::application("sub", vec![], vec![leaf("q0"), leaf("q1")]);
        let abs = Node::application("abs", vec![], vec![sub]);
        assert_eq!(
            Node::application("neq", vec![], vec![abs, Node::integer(2)]),
            node
        );
    }

    #[test]
    fn whitespace_is_insignificant() {
        let spaced = scan("  neq ( abs ( sub ( q0 , q1 ) ) ,\n\t2 )  ").expect("valid expression");
        let compact = scan("neq(abs(sub(q0,q1)),2)").expect("valid expression");

        assert_eq!(compact, spaced);
    }

    #[test]
    fn parameters_are_kept_apart_from_operands() {
        let node = scan("mod{7, exact}(x, 3)").expect("valid expression");

        assert_eq!(
            &[Parameter::Int(7), Parameter::Identifier("exact".into())],
            node.parameters()
        );
        assert_eq!(&[leaf("x"), Node::integer(3)], node.children());
    }

    #[test]
    fn negative_integer_operands() {
        let node = scan("eq(x,-5)").expect("valid expression");

        assert_eq!(NodeKind::Integer(-5), node.children()[1].kind());
        assert_eq!("-5", node.children()[1].operator());
    }

    #[test]
    fn operand_order_is_preserved() {
        let node = scan("f(a,b,c)").expect("valid expression");

        let names = node
            .children()
            .iter()
            .map(Node::operator)
            .collect::<Vec<_>>();
        assert_eq!(vec!["a", "b", "c"], names);
    }

    #[test]
    fn zero_operands_are_accepted() {
        let node = scan("f()").expect("valid expression");

        assert!(!node.is_leaf());
        assert!(node.children().is_empty());
    }

    #[test]
    fn leaves_scan_at_the_root() {
        assert_eq!(leaf("x"), scan("x").expect("valid term"));
        assert_eq!(Node::integer(42), scan(" 42 ").expect("valid term"));
    }

    #[test]
    fn empty_input_is_rejected() {
        let error = scan("").expect_err("nothing to scan");

        assert_eq!(0, error.position());
        assert_eq!(1, error.line());
    }

    #[test]
    fn unbalanced_delimiters_are_rejected() {
        assert!(scan("neq(x,y").is_err());
        assert!(scan("neq(x,y))").is_err());
        assert!(scan("neq{1(x)").is_err());
    }

    #[test]
    fn missing_operands_are_rejected() {
        assert!(scan("neq(x,)").is_err());
        assert!(scan("neq(,x)").is_err());
        assert!(scan("neq(x,,y)").is_err());
    }

    #[test]
    fn malformed_words_are_rejected() {
        assert!(scan("neq(3x,y)").is_err());
        assert!(scan("neq(x-y)").is_err());
        assert!(scan("2(x)").is_err());
    }

    #[test]
    fn error_reports_the_offending_line() {
        let error = scan("neq(x,\n  y,\n  )").expect_err("dangling separator");

        assert_eq!(3, error.line());
    }

    #[test]
    fn canonical_form_scans_back_to_the_same_tree() {
        for expression in [
            "neq(x,y)",
            "neq(abs(sub(q0,q1)),2)",
            "f()",
            "mod{7,exact}(add(x,-1),y)",
            "all_different(a , b, c , mul(d, 10))",
        ] {
            let node = scan(expression).expect("valid expression");
            let canonical = node.to_string();

            assert_eq!(node, scan(&canonical).expect("canonical form is valid"));
        }
    }

    #[test]
    fn integer_leaves_keep_their_literal_text() {
        let node = scan("eq(x,007)").expect("valid expression");

        assert_eq!("007", node.children()[1].operator());
        assert_eq!(NodeKind::Integer(7), node.children()[1].kind());
        assert_eq!("eq(x,007)", node.to_string());
        assert_eq!(node, scan(&node.to_string()).expect("canonical form is valid"));
    }

    fn nested(depth: usize) -> String {
        format!("{}x{}", "f(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn nesting_up_to_the_limit_is_accepted() {
        let node = scan(&nested(MAX_NESTING_DEPTH)).expect("valid expression");

        assert_eq!(MAX_NESTING_DEPTH + 1, node.depth());
        assert_eq!(1, node.leaf_count());
    }

    #[test]
    fn nesting_beyond_the_limit_is_rejected() {
        let error = scan(&nested(MAX_NESTING_DEPTH + 1)).expect_err("too deep");

        // The first parenthesis past the limit.
        assert_eq!(2 * MAX_NESTING_DEPTH + 1, error.position());
        assert_eq!(1, error.line());

        assert!(scan(&nested(100_000)).is_err());
    }

    #[test]
    fn repeated_identifiers_share_their_name() {
        let node = scan("eq(x,x)").expect("valid expression");

        assert!(Rc::ptr_eq(
            &node.children()[0].operator_rc(),
            &node.children()[1].operator_rc()
        ));
    }
}
