//! Contains the code related to applying a [`Store`] to terms.

use robinson_term::{Application, Model, Term, Variable};

use crate::store::Store;

/// Applies the store to the given term.
///
/// Every variable bound in the store is replaced by its bound term and every
/// unbound variable is kept as is. The replacement is performed in a single
/// step: the bound terms are not evaluated again since the store is in the
/// solved form and they are already fully reduced.
#[must_use]
pub fn eval<M: Model>(term: &Term<M>, store: &Store<M>) -> Term<M> {
    eval_with(term, &|variable| store.get(variable))
}

pub(crate) fn eval_with<'a, M: Model>(
    term: &Term<M>,
    lookup: &impl Fn(&Variable<M>) -> Option<&'a Term<M>>,
) -> Term<M> {
    match term {
        Term::Variable(variable) => {
            lookup(variable).map_or_else(|| term.clone(), Clone::clone)
        }
        Term::Application(application) => {
            Term::Application(Application::new(
                application.symbol.clone(),
                application
                    .arguments
                    .iter()
                    .map(|argument| eval_with(argument, lookup))
                    .collect(),
            ))
        }
    }
}
