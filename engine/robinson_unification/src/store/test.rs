use std::collections::BTreeMap;

use robinson_term::{Default, Term, Variable};

use super::{NotSolvedError, Store};
use crate::{unify, Config, OverflowError};

const MAX_DEPTH: usize = Config::DEFAULT_MAX_DEPTH;

fn var(name: &str) -> Term<Default> { Term::variable(name) }

fn variable(name: &str) -> Variable<Default> { Variable::new(name.into()) }

#[test]
fn empty_store() {
    let store = Store::<Default>::new();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.is_solved());
    assert_eq!(store.to_string(), "{}");
}

#[test]
fn new_binding_reduces_existing_ones() {
    let base = unify(
        &Term::application("f", [var("y"), var("z")]),
        &Term::application("f", [
            Term::application("g", [var("x")]),
            Term::application("h", [var("x"), var("x")]),
        ]),
        &Store::new(),
    )
    .unwrap();

    let store = base
        .with_binding(variable("x"), Term::constant("a"), MAX_DEPTH)
        .unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get(&variable("x")), Some(&Term::constant("a")));
    assert_eq!(
        store.get(&variable("y")),
        Some(&Term::application("g", [Term::constant("a")]))
    );
    assert_eq!(
        store.get(&variable("z")),
        Some(&Term::application("h", [
            Term::constant("a"),
            Term::constant("a")
        ]))
    );
    assert!(store.is_solved());

    // the original store is untouched
    assert_eq!(base.len(), 2);
    assert!(!base.contains(&variable("x")));
}

#[test]
fn rewritten_binding_beyond_the_budget_is_rejected() {
    let base = unify(
        &var("y"),
        &Term::application("g", [Term::application("g", [var("x")])]),
        &Store::new(),
    )
    .unwrap();
    let value = Term::application("g", [Term::constant("a")]);

    assert_eq!(base.depth(), 2);
    assert_eq!(
        base.with_binding(variable("x"), value.clone(), 3),
        Err(OverflowError)
    );
    assert_eq!(
        base.with_binding(variable("x"), value.clone(), 1),
        Err(OverflowError)
    );

    let store = base.with_binding(variable("x"), value, 4).unwrap();
    assert_eq!(store.depth(), 4);
}

#[test]
fn display() {
    let store = unify(
        &Term::application("f", [var("y"), var("x")]),
        &Term::application("f", [
            Term::application("g", [Term::constant("a")]),
            var("z"),
        ]),
        &Store::new(),
    )
    .unwrap();

    assert_eq!(store.to_string(), "{x -> z, y -> g(a())}");
}

#[test]
fn matches_ignores_identity_of_the_store() {
    let lhs = unify(&var("x"), &var("y"), &Store::new()).unwrap();
    let rhs = unify(
        &Term::application("f", [var("x")]),
        &Term::application("f", [var("y")]),
        &Store::new(),
    )
    .unwrap();

    assert!(lhs.matches(&rhs));
    assert_eq!(lhs, rhs);
    assert!(!lhs.matches(&Store::new()));
}

#[test]
fn iteration_follows_variable_order() {
    let store = unify(
        &Term::application("f", [var("z"), var("x")]),
        &Term::application("f", [Term::constant("a"), Term::constant("b")]),
        &Store::new(),
    )
    .unwrap();

    let names = store
        .variables()
        .map(|variable| variable.name.as_str())
        .collect::<Vec<_>>();

    assert_eq!(names, ["x", "z"]);
    assert_eq!(store.iter().count(), (&store).into_iter().count());
}

#[test]
fn unsolved_bindings_are_rejected() {
    let bindings = BTreeMap::from([
        (variable("x"), Term::application("g", [var("y")])),
        (variable("y"), Term::constant("a")),
    ]);

    assert_eq!(Store::try_from(bindings), Err(NotSolvedError));
}

#[test]
fn serialization() {
    let store = unify(
        &Term::application("f", [var("x"), var("y")]),
        &Term::application("f", [
            Term::application("g", [var("z")]),
            Term::constant("a"),
        ]),
        &Store::new(),
    )
    .unwrap();

    let serialized = ron::to_string(&store).unwrap();
    let deserialized = ron::from_str::<Store<Default>>(&serialized).unwrap();

    assert!(deserialized.matches(&store));
}
