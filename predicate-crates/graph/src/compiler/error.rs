use predicate_format::ParseError;

/// The ways compiling an expression can fail.
///
/// A failure while scanning leaves the store untouched. Lowering itself cannot fail, so a
/// [`CompileError::InvalidExpression`] is also raised before anything is registered.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("expected a constraint, got the single term '{expression}'")]
    InvalidExpression { expression: String },
}
