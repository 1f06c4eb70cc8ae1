use std::rc::Rc;

use chumsky::error::Rich;
use chumsky::extra::{self};
use chumsky::prelude::choice;
use chumsky::prelude::just;
use chumsky::text::ascii::ident;
use chumsky::text::digits;
use chumsky::IterParser;
use chumsky::Parser;

use super::ScanExtra;
use super::ScanState;
use crate::node::Node;
use crate::node::Parameter;

/// `['-'] digit+`, parsed into an `i64`.
pub(super) fn int_literal<'src>() -> impl Parser<'src, &'src str, i64, ScanExtra<'src>> + Clone {
    just('-')
        .or_not()
        .then(digits(10))
        .to_slice()
        .try_map(|slice: &str, span| {
            slice
                .parse()
                .map_err(|_| Rich::custom(span, format!("integer literal '{slice}' is out of range")))
        })
}

/// An identifier, interned so that repeated names in one expression share their allocation.
pub(super) fn identifier<'src>() -> impl Parser<'src, &'src str, Rc<str>, ScanExtra<'src>> + Clone {
    ident().map_with(|id, extra| {
        let state: &mut extra::SimpleState<ScanState> = extra.state();

        state.get_interned(id)
    })
}

/// An integer leaf, keeping the literal as written as its text.
pub(super) fn integer_leaf<'src>() -> impl Parser<'src, &'src str, Node, ScanExtra<'src>> + Clone {
    int_literal().map_with(|value, extra| Node::integer_literal(extra.slice(), value))
}

pub(super) fn identifier_leaf<'src>() -> impl Parser<'src, &'src str, Node, ScanExtra<'src>> + Clone {
    identifier().map(Node::identifier)
}

/// `'{' literal (',' literal)* '}'`
pub(super) fn parameter_list<'src>(
) -> impl Parser<'src, &'src str, Vec<Parameter>, ScanExtra<'src>> + Clone {
    parameter()
        .separated_by(comma())
        .at_least(1)
        .collect::<Vec<_>>()
        .delimited_by(open_brace(), close_brace())
}

fn parameter<'src>() -> impl Parser<'src, &'src str, Parameter, ScanExtra<'src>> + Clone {
    choice((
        int_literal().map(Parameter::Int),
        identifier().map(Parameter::Identifier),
    ))
    .padded()
}

macro_rules! punctuation {
    ($name:ident, $seq:expr) => {
        pub(super) fn $name<'src>() -> impl Parser<'src, &'src str, (), ScanExtra<'src>> + Clone {
            just($seq).padded().ignored()
        }
    };
}

punctuation!(comma, ',');
punctuation!(open_paren, '(');
punctuation!(close_paren, ')');
punctuation!(open_brace, '{');
punctuation!(close_brace, '}');
