//! Contains the unification logic.

use log::{debug, trace};
use robinson_term::{Application, Model, Term, Variable};

use crate::{
    error::{Error, Mismatch, Occurs, OverflowError},
    evaluation::eval,
    store::Store,
    Config,
};

/// Unifies `source` with `target` on top of the bindings already present in
/// `store`, using the default [`Config`].
///
/// See [`unify_with`] for the details.
///
/// # Errors
///
/// See [`unify_with`].
pub fn unify<M: Model>(
    source: &Term<M>,
    target: &Term<M>,
    store: &Store<M>,
) -> Result<Store<M>, Error<M>> {
    unify_with(source, target, store, &Config::default())
}

/// Unifies `source` with `target` on top of the bindings already present in
/// `store`.
///
/// On success, returns the store that makes both terms structurally identical
/// once evaluated against it. The returned store replaces the given one: it
/// contains all the previous bindings (possibly reduced further) plus the new
/// ones. The given store is never modified.
///
/// If the two terms are already structurally identical, the given store is
/// returned as is.
///
/// # Errors
///
/// - [`crate::Cause::Occurs`] if a variable would be bound to a term that
///   contains it.
/// - [`crate::Cause::Mismatch`] if two applications with different function
///   symbols or arities are forced to be equal.
/// - [`crate::Cause::Overflow`] if the unification nests deeper than
///   [`Config::max_depth`], or if `source`, `target`, a term bound in `store`
///   or a binding produced along the way is nested deeper than that.
///
/// The error's trail always ends with the `source`/`target` pair.
pub fn unify_with<M: Model>(
    source: &Term<M>,
    target: &Term<M>,
    store: &Store<M>,
    config: &Config,
) -> Result<Store<M>, Error<M>> {
    let max_depth = config.max_depth();

    // the structural walks below recurse on the terms, keep them in budget
    let result = if source.depth() > max_depth
        || target.depth() > max_depth
        || store.depth() > max_depth
    {
        Err(Error::new(OverflowError))
    } else {
        Unifier { config, depth: 0 }.unify(source, target, store)
    };

    result.map_err(|error| {
        let error = error.within_outermost(source, target);
        debug!("{error}");

        error
    })
}

/// Unifies every pair in order, threading the store from one pair to the
/// next.
///
/// # Errors
///
/// Returns the error of the first pair that fails to unify; see
/// [`unify_with`].
pub fn unify_all<'a, M: Model>(
    pairs: impl IntoIterator<Item = (&'a Term<M>, &'a Term<M>)>,
    store: &Store<M>,
) -> Result<Store<M>, Error<M>> {
    pairs
        .into_iter()
        .try_fold(store.clone(), |store, (source, target)| {
            unify(source, target, &store)
        })
}

impl<M: Model> Store<M> {
    /// Unifies `source` with `target` on top of this store; see [`unify`].
    ///
    /// # Errors
    ///
    /// See [`unify_with`].
    pub fn unify(
        &self,
        source: &Term<M>,
        target: &Term<M>,
    ) -> Result<Self, Error<M>> {
        unify(source, target, self)
    }
}

struct Unifier<'a> {
    config: &'a Config,
    depth: usize,
}

impl Unifier<'_> {
    fn unify<M: Model>(
        &mut self,
        source: &Term<M>,
        target: &Term<M>,
        store: &Store<M>,
    ) -> Result<Store<M>, Error<M>> {
        if self.depth >= self.config.max_depth() {
            return Err(Error::new(OverflowError));
        }

        self.depth += 1;
        let result = self.unify_terms(source, target, store);
        self.depth -= 1;

        result
    }

    fn unify_terms<M: Model>(
        &mut self,
        source: &Term<M>,
        target: &Term<M>,
        store: &Store<M>,
    ) -> Result<Store<M>, Error<M>> {
        trace!("unifying {source} with {target} under {store}");

        // the accumulated store must survive trivially equal pairs
        if source.matches(target) {
            return Ok(store.clone());
        }

        match (source, target) {
            (Term::Variable(variable), _) => self
                .unify_variable(variable, target, store)
                .map_err(|error| error.within(source, target)),

            (Term::Application(_), Term::Variable(_)) => {
                self.unify(target, source, store)
            }

            (Term::Application(lhs), Term::Application(rhs)) => self
                .unify_applications(lhs, rhs, store)
                .map_err(|error| error.within(source, target)),
        }
    }

    fn unify_variable<M: Model>(
        &mut self,
        variable: &Variable<M>,
        term: &Term<M>,
        store: &Store<M>,
    ) -> Result<Store<M>, Error<M>> {
        if term.occurs(variable) {
            return Err(Error::new(Occurs::new(variable.clone(), term.clone())));
        }

        self.bind(variable, term, store)
    }

    fn bind<M: Model>(
        &mut self,
        variable: &Variable<M>,
        term: &Term<M>,
        store: &Store<M>,
    ) -> Result<Store<M>, Error<M>> {
        // the existing binding is authoritative, the new term must agree
        if let Some(bound) = store.get(variable) {
            return self.unify(term, bound, store);
        }

        let value = eval(term, store);

        // `term` resolves back to `variable`, nothing to record
        if value.as_variable() == Some(variable) {
            return Ok(store.clone());
        }

        store
            .with_binding(variable.clone(), value, self.config.max_depth())
            .map_err(Error::new)
    }

    fn unify_applications<M: Model>(
        &mut self,
        source: &Application<M>,
        target: &Application<M>,
        store: &Store<M>,
    ) -> Result<Store<M>, Error<M>> {
        if !source.same_functor(target) {
            return Err(Error::new(Mismatch::new(
                source.clone(),
                target.clone(),
            )));
        }

        source.arguments.iter().zip(&target.arguments).try_fold(
            store.clone(),
            |store, (source, target)| self.unify(source, target, &store),
        )
    }
}
