//! Contains the definition of [`Store`], the substitution produced by the
//! unifier.

use std::{collections::BTreeMap, fmt, sync::Arc};

use itertools::Itertools;
use log::trace;
use robinson_term::{Model, Term, Variable};
use serde::{Deserialize, Serialize};

use crate::{
    error::OverflowError,
    evaluation::{eval, eval_with},
};

/// A mapping from variables to the terms they are bound to, always kept in
/// the solved form.
///
/// The store is persistent: the bindings are shared behind an [`Arc`], so
/// cloning is cheap, and a store is never modified after being handed out.
/// Operations that add bindings produce a new store instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    bound = "",
    try_from = "BTreeMap<Variable<M>, Term<M>>",
    into = "BTreeMap<Variable<M>, Term<M>>"
)]
pub struct Store<M: Model> {
    bindings: Arc<BTreeMap<Variable<M>, Term<M>>>,
}

impl<M: Model> Default for Store<M> {
    fn default() -> Self { Self { bindings: Arc::new(BTreeMap::new()) } }
}

impl<M: Model> Store<M> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the term bound to the given variable.
    #[must_use]
    pub fn get(&self, variable: &Variable<M>) -> Option<&Term<M>> {
        self.bindings.get(variable)
    }

    /// Returns `true` if the given variable is bound in this store.
    #[must_use]
    pub fn contains(&self, variable: &Variable<M>) -> bool {
        self.bindings.contains_key(variable)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize { self.bindings.len() }

    /// Returns `true` if the store has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.bindings.is_empty() }

    /// Iterates over the bindings ordered by variable.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable<M>, &Term<M>)> {
        self.bindings.iter()
    }

    /// Iterates over the bound variables.
    pub fn variables(&self) -> impl Iterator<Item = &Variable<M>> {
        self.bindings.keys()
    }

    /// Checks whether both stores bind the same variables to structurally
    /// identical terms.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(variable, term)| {
                other.get(variable).is_some_and(|other| other.matches(term))
            })
    }

    /// Checks whether no bound variable appears in any bound term.
    ///
    /// Stores produced by the unifier are always solved unless a binding was
    /// created whose cycle could only be seen through existing bindings; the
    /// occurs-check inspects the raw terms only.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.bindings.values().all(|term| {
            term.variables().into_iter().all(|variable| !self.contains(variable))
        })
    }

    /// Applies this store to the given term; see [`eval`].
    #[must_use]
    pub fn resolve(&self, term: &Term<M>) -> Term<M> { eval(term, self) }

    /// Returns the depth of the deepest bound term; see [`Term::depth`].
    #[must_use]
    pub fn depth(&self) -> usize {
        self.bindings.values().map(Term::depth).max().unwrap_or(0)
    }

    /// Creates a new store with the additional `variable -> value` binding.
    ///
    /// The `value` must already be evaluated against `self` and `variable`
    /// must not be bound in `self`. Every existing binding mentioning
    /// `variable` gets `value` substituted in so that the new store stays in
    /// the solved form.
    ///
    /// Fails with [`OverflowError`] if `value` or any of the rewritten
    /// bindings is nested deeper than `max_depth`.
    pub(crate) fn with_binding(
        &self,
        variable: Variable<M>,
        value: Term<M>,
        max_depth: usize,
    ) -> Result<Self, OverflowError> {
        debug_assert!(!self.contains(&variable));
        trace!("binding {variable} -> {value}");

        if value.depth() > max_depth {
            return Err(OverflowError);
        }

        let mut bindings = self
            .bindings
            .iter()
            .map(|(bound, term)| {
                if !term.occurs(&variable) {
                    return Ok((bound.clone(), term.clone()));
                }

                let term = eval_with(term, &|other| {
                    (*other == variable).then_some(&value)
                });

                if term.depth() > max_depth {
                    Err(OverflowError)
                } else {
                    Ok((bound.clone(), term))
                }
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        bindings.insert(variable, value);

        Ok(Self { bindings: Arc::new(bindings) })
    }
}

impl<M: Model> fmt::Display for Store<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter().format_with(", ", |(variable, term), f| {
                f(&format_args!("{variable} -> {term}"))
            })
        )
    }
}

/// The bindings given to [`Store::try_from`] are not in the solved form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error,
)]
#[error("a bound variable appears in the term bound to another variable")]
pub struct NotSolvedError;

impl<M: Model> TryFrom<BTreeMap<Variable<M>, Term<M>>> for Store<M> {
    type Error = NotSolvedError;

    fn try_from(
        bindings: BTreeMap<Variable<M>, Term<M>>,
    ) -> Result<Self, Self::Error> {
        let store = Self { bindings: Arc::new(bindings) };

        if store.is_solved() {
            Ok(store)
        } else {
            Err(NotSolvedError)
        }
    }
}

impl<M: Model> From<Store<M>> for BTreeMap<Variable<M>, Term<M>> {
    fn from(store: Store<M>) -> Self { Arc::unwrap_or_clone(store.bindings) }
}

impl<'a, M: Model> IntoIterator for &'a Store<M> {
    type Item = (&'a Variable<M>, &'a Term<M>);
    type IntoIter = std::collections::btree_map::Iter<'a, Variable<M>, Term<M>>;

    fn into_iter(self) -> Self::IntoIter { self.bindings.iter() }
}

#[cfg(test)]
mod test;
