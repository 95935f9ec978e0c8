//! Implements the [`Arbitrary`] trait for testing purposes.
//!
//! The generated terms draw from a deliberately small pool of variable names
//! and function symbols so that independently generated terms share
//! variables and functors often enough to be interesting to unify.

use proptest::{
    arbitrary::Arbitrary,
    collection, prop_oneof,
    sample::select,
    strategy::{BoxedStrategy, Strategy},
};

use crate::{Default, Term, Variable};

/// The variable names drawn by the generated terms.
pub const VARIABLE_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// The constant symbols drawn by the generated terms.
pub const CONSTANTS: [&str; 2] = ["a", "b"];

/// The non-nullary function symbols, with their arities, drawn by the
/// generated terms. `f` appears with two arities on purpose.
pub const FUNCTORS: [(&str, usize); 4] =
    [("g", 1), ("f", 2), ("f", 1), ("h", 3)];

impl Arbitrary for Variable<Default> {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        select(VARIABLE_NAMES.to_vec())
            .prop_map(|name| Self::new(name.into()))
            .boxed()
    }
}

impl Arbitrary for Term<Default> {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            2 => Variable::<Default>::arbitrary().prop_map(Self::Variable),
            1 => constant(),
        ];

        nest(leaf.boxed())
    }
}

/// Returns a strategy generating terms that contain no variables.
#[must_use]
pub fn ground_term() -> BoxedStrategy<Term<Default>> { nest(constant()) }

fn constant() -> BoxedStrategy<Term<Default>> {
    select(CONSTANTS.to_vec()).prop_map(Term::<Default>::constant).boxed()
}

fn nest(leaf: BoxedStrategy<Term<Default>>) -> BoxedStrategy<Term<Default>> {
    leaf.prop_recursive(4, 24, 3, |inner| {
        select(FUNCTORS.to_vec()).prop_flat_map(move |(symbol, arity)| {
            collection::vec(inner.clone(), arity)
                .prop_map(move |arguments| Term::application(symbol, arguments))
        })
    })
    .boxed()
}
