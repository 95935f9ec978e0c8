//! Implements the Robinson unification of first-order terms.
//!
//! The substitutions produced by the unifier are kept in the *solved form*:
//! no variable bound in a [`Store`] appears in the term bound to any variable
//! of the same store. As a consequence, looking up a variable once yields a
//! fully reduced term and [`eval`] never has to follow chains of bindings.
//!
//! Stores are persistent values. Every operation that adds a binding returns
//! a new [`Store`] and leaves the one it was given untouched, which makes it
//! cheap to try many unifications against the same base store.

use derive_new::new;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod evaluation;
pub mod store;
pub mod unification;

pub use error::{Cause, Derivation, Error, Mismatch, Occurs, OverflowError};
pub use evaluation::eval;
pub use store::Store;
pub use unification::{unify, unify_all, unify_with};

/// Configures the resource limits of a unification.
///
/// The unifier recurses over the structure of the terms. Instead of risking
/// the exhaustion of the native stack on pathologically nested terms, it
/// gives up with [`OverflowError`] once the number of nested unification
/// steps, or the [`depth`](robinson_term::Term::depth) of any term it is
/// given or would bind, exceeds [`Config::max_depth`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    CopyGetters,
    new,
)]
pub struct Config {
    /// The maximum number of nested unification steps and the maximum depth
    /// of the terms being unified or bound.
    #[get_copy = "pub"]
    max_depth: usize,
}

impl Config {
    /// The nesting limit used by [`Config::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 512;
}

impl Default for Config {
    fn default() -> Self { Self::new(Self::DEFAULT_MAX_DEPTH) }
}
