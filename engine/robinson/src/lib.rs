//! Computes most general unifiers of first-order terms.
//!
//! This crate bundles the term model of [`robinson_term`] with the
//! substitution store and the unifier of [`robinson_unification`].
//!
//! ```
//! use robinson::{eval, unify, Default, Store, Term};
//!
//! let source = Term::<Default>::application("f", [
//!     Term::variable("x"),
//!     Term::application("g", [Term::variable("x")]),
//! ]);
//! let target = Term::application("f", [
//!     Term::constant("a"),
//!     Term::variable("y"),
//! ]);
//!
//! let store = unify(&source, &target, &Store::new()).unwrap();
//!
//! assert_eq!(store.to_string(), "{x -> a(), y -> g(a())}");
//! assert_eq!(eval(&source, &store), eval(&target, &store));
//! ```

pub use robinson_term::{
    Application, Default, Model, SharedStr, Term, Variable,
};
pub use robinson_unification::{
    error, eval, unify, unify_all, unify_with, Cause, Config, Derivation,
    Error, Mismatch, Occurs, OverflowError, Store,
};
