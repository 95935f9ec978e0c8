//! Contains the definition of the first-order terms that are subject to
//! unification.
//!
//! A [`Term`] is either a [`Variable`] or an [`Application`] of a function
//! symbol to an ordered list of argument terms. Terms are plain immutable
//! values; equality between them is purely syntactic and never consults any
//! substitution.

use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};

use derive_new::new;
use enum_as_inner::EnumAsInner;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub mod shared_str;

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;

pub use shared_str::SharedStr;

/// The model that the terms will be based on.
///
/// The model decides which tokens identify function symbols and variables.
/// Nothing is assumed about the tokens beyond comparison and hashing: two
/// symbols (or two variable names) denote the same entity if and only if they
/// compare equal.
pub trait Model:
    Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Hash
    + std::default::Default
    + 'static
    + Send
    + Sync
{
    /// The token identifying the function symbol of an [`Application`].
    type Symbol: Debug
        + Display
        + Clone
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash
        + 'static
        + Send
        + Sync
        + Serialize
        + for<'x> Deserialize<'x>;

    /// The token identifying a [`Variable`].
    type Name: Debug
        + Display
        + Clone
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash
        + 'static
        + Send
        + Sync
        + Serialize
        + for<'x> Deserialize<'x>;
}

/// The default model where both the function symbols and the variable names
/// are [`SharedStr`].
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
    Serialize,
    Deserialize,
)]
pub struct Default;

impl Model for Default {
    type Symbol = SharedStr;
    type Name = SharedStr;
}

/// Represents a logical variable, a named placeholder that can be unified with
/// any term not containing it.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    new,
)]
#[serde(bound = "")]
pub struct Variable<M: Model> {
    /// The name identifying the variable.
    pub name: M::Name,
}

impl<M: Model> Display for Variable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Represents an application of a function symbol to the list of arguments,
/// denoted by `symbol(arg, arg, ...arg)` syntax.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    new,
)]
#[serde(bound = "")]
pub struct Application<M: Model> {
    /// The function symbol being applied.
    pub symbol: M::Symbol,

    /// The ordered list of arguments supplied to the function symbol.
    pub arguments: Vec<Term<M>>,
}

impl<M: Model> Application<M> {
    /// Returns the number of arguments supplied to the function symbol.
    #[must_use]
    pub fn arity(&self) -> usize { self.arguments.len() }

    /// Checks whether both applications apply the same function symbol with
    /// the same arity.
    #[must_use]
    pub fn same_functor(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.arity() == other.arity()
    }

    /// Structural equality; see [`Term::matches`].
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.same_functor(other)
            && self
                .arguments
                .iter()
                .zip(&other.arguments)
                .all(|(lhs, rhs)| lhs.matches(rhs))
    }
}

impl<M: Model> Display for Application<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.symbol, self.arguments.iter().format(", "))
    }
}

/// Represents a first-order term: the unit of unification.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumAsInner,
    Serialize,
    Deserialize,
    derive_more::From,
)]
#[serde(bound = "")]
#[allow(missing_docs)]
pub enum Term<M: Model> {
    Variable(Variable<M>),
    Application(Application<M>),
}

impl<M: Model> Term<M> {
    /// Creates a [`Term::Variable`] with the given name.
    #[must_use]
    pub fn variable(name: impl Into<M::Name>) -> Self {
        Self::Variable(Variable::new(name.into()))
    }

    /// Creates a [`Term::Application`] of the given symbol to the given
    /// arguments.
    #[must_use]
    pub fn application(
        symbol: impl Into<M::Symbol>,
        arguments: impl IntoIterator<Item = Self>,
    ) -> Self {
        Self::Application(Application::new(
            symbol.into(),
            arguments.into_iter().collect(),
        ))
    }

    /// Creates a nullary [`Term::Application`], a constant.
    #[must_use]
    pub fn constant(symbol: impl Into<M::Symbol>) -> Self {
        Self::Application(Application::new(symbol.into(), Vec::new()))
    }

    /// Checks whether the two terms are structurally identical.
    ///
    /// Two variables match if their names are equal. Two applications match
    /// if they apply the same symbol with the same arity and their arguments
    /// match pairwise. A variable never matches an application.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Variable(lhs), Self::Variable(rhs)) => lhs.name == rhs.name,
            (Self::Application(lhs), Self::Application(rhs)) => {
                lhs.matches(rhs)
            }
            _ => false,
        }
    }

    /// Checks whether the given variable appears anywhere in the raw
    /// structure of this term.
    #[must_use]
    pub fn occurs(&self, variable: &Variable<M>) -> bool {
        match self {
            Self::Variable(this) => this == variable,
            Self::Application(application) => application
                .arguments
                .iter()
                .any(|argument| argument.occurs(variable)),
        }
    }

    /// Returns the distinct variables appearing in this term, in the order of
    /// their first appearance.
    #[must_use]
    pub fn variables(&self) -> Vec<&Variable<M>> {
        let mut variables = Vec::new();
        self.collect_variables(&mut variables);

        variables.into_iter().unique().collect()
    }

    fn collect_variables<'a>(&'a self, variables: &mut Vec<&'a Variable<M>>) {
        match self {
            Self::Variable(variable) => variables.push(variable),
            Self::Application(application) => {
                for argument in &application.arguments {
                    argument.collect_variables(variables);
                }
            }
        }
    }

    /// Checks whether the term contains no variables at all.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        match self {
            Self::Variable(_) => false,
            Self::Application(application) => {
                application.arguments.iter().all(Self::is_ground)
            }
        }
    }

    /// Returns the number of nested applications along the deepest path of
    /// the term. Variables have depth zero and constants depth one.
    ///
    /// The term is walked with an explicit stack, so this is safe to call on
    /// arbitrarily nested terms.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];

        while let Some((term, depth)) = stack.pop() {
            if let Self::Application(application) = term {
                let depth = depth + 1;
                deepest = deepest.max(depth);

                stack.extend(
                    application.arguments.iter().map(|argument| (argument, depth)),
                );
            }
        }

        deepest
    }
}

impl<M: Model> Display for Term<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(variable) => Display::fmt(variable, f),
            Self::Application(application) => Display::fmt(application, f),
        }
    }
}
