//! Contains the errors reported by the unifier.

use std::fmt;

use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::Getters;
use robinson_term::{Application, Model, Term, Variable};

/// A variable was about to be bound to a term that structurally contains the
/// variable itself, which would create an infinite term.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    thiserror::Error,
    new,
)]
#[error("`{variable}` occurs in `{term}`")]
pub struct Occurs<M: Model> {
    /// The variable that was about to be bound.
    pub variable: Variable<M>,

    /// The term containing the variable.
    pub term: Term<M>,
}

/// Two applications forced to be equal apply different function symbols or
/// have different arities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Mismatch<M: Model> {
    /// The application on the source side.
    pub source: Application<M>,

    /// The application on the target side.
    pub target: Application<M>,
}

impl<M: Model> Mismatch<M> {
    /// Returns `true` if both applications have the same function symbol and
    /// differ only in the number of arguments.
    #[must_use]
    pub fn is_arity_mismatch(&self) -> bool {
        self.source.symbol == self.target.symbol
    }
}

impl<M: Model> fmt::Display for Mismatch<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_arity_mismatch() {
            write!(
                f,
                "`{}` is applied to {} argument(s) in `{}` but to {} in `{}`",
                self.source.symbol,
                self.source.arity(),
                self.source,
                self.target.arity(),
                self.target
            )
        } else {
            write!(
                f,
                "function symbol `{}` of `{}` does not match `{}` of `{}`",
                self.source.symbol,
                self.source,
                self.target.symbol,
                self.target
            )
        }
    }
}

impl<M: Model> std::error::Error for Mismatch<M> {}

/// The unification nested deeper than [`crate::Config::max_depth`] allows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    thiserror::Error,
)]
#[error(
    "exceeded the limit of nested unification steps; the terms are too deeply \
     nested"
)]
pub struct OverflowError;

/// The immediate reason why a unification failed.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, EnumAsInner,
)]
#[allow(missing_docs)]
pub enum Cause<M: Model> {
    #[error(transparent)]
    Occurs(#[from] Occurs<M>),

    #[error(transparent)]
    Mismatch(#[from] Mismatch<M>),

    #[error(transparent)]
    Overflow(#[from] OverflowError),
}

/// A pair of terms whose unification was in progress when the failure
/// happened.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Derivation<M: Model> {
    /// The source term of the pair.
    pub source: Term<M>,

    /// The target term of the pair.
    pub target: Term<M>,
}

impl<M: Model> fmt::Display for Derivation<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while unifying {} with {}", self.source, self.target)
    }
}

/// The error returned by [`crate::unify`].
///
/// Besides the [`Cause`], the error records the derivation trail: every pair
/// of terms whose unification failed because of the cause, innermost first.
/// The last entry is always the pair originally given to the outermost call.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Error<M: Model> {
    /// The immediate reason of the failure.
    #[get = "pub"]
    cause: Cause<M>,

    /// The pairs being unified when the failure happened, innermost first.
    #[get = "pub"]
    trail: Vec<Derivation<M>>,
}

impl<M: Model> Error<M> {
    pub(crate) fn new(cause: impl Into<Cause<M>>) -> Self {
        Self { cause: cause.into(), trail: Vec::new() }
    }

    /// Records that the failure happened while unifying the given pair.
    #[must_use]
    pub(crate) fn within(mut self, source: &Term<M>, target: &Term<M>) -> Self {
        self.trail.push(Derivation::new(source.clone(), target.clone()));
        self
    }

    /// Like [`Self::within`] but skips the pair if it's already the last
    /// recorded one.
    #[must_use]
    pub(crate) fn within_outermost(
        self,
        source: &Term<M>,
        target: &Term<M>,
    ) -> Self {
        match self.trail.last() {
            Some(last) if last.source == *source && last.target == *target => {
                self
            }
            _ => self.within(source, target),
        }
    }

    /// Returns the pair of terms given to the outermost unification call.
    #[must_use]
    pub fn outermost(&self) -> Option<&Derivation<M>> { self.trail.last() }

    /// Returns the pair of terms whose unification directly triggered the
    /// failure.
    #[must_use]
    pub fn innermost(&self) -> Option<&Derivation<M>> { self.trail.first() }

    /// Consumes the error and returns its [`Cause`].
    #[must_use]
    pub fn into_cause(self) -> Cause<M> { self.cause }

    /// Returns `true` if the failure is caused by the occurs-check.
    #[must_use]
    pub const fn is_occurs(&self) -> bool {
        matches!(self.cause, Cause::Occurs(_))
    }

    /// Returns `true` if the failure is caused by mismatched applications.
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self.cause, Cause::Mismatch(_))
    }

    /// Returns `true` if the unification ran out of its nesting budget.
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self.cause, Cause::Overflow(_))
    }
}

impl<M: Model> fmt::Display for Error<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for derivation in self.trail.iter().rev() {
            write!(f, "{derivation}: ")?;
        }

        write!(f, "{}", self.cause)
    }
}

impl<M: Model> std::error::Error for Error<M> {}
