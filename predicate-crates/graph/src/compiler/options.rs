/// Determines which integer literals of an expression share a constant variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ConstantSharing {
    /// Every literal occurrence gets its own anonymous constant variable, so `neq(x,3)`
    /// compiled twice introduces two variables fixed to `3`.
    #[default]
    PerOccurrence,
    /// Literals with the same value share one constant variable for the lifetime of the
    /// [`super::ConstraintParser`].
    PerValue,
}

/// Options for the [`super::ConstraintParser`] which determine how it lowers expressions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompilerOptions {
    /// How integer literals are turned into variables.
    pub constants: ConstantSharing,
}
