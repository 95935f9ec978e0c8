//! Benchmarks of the unifier.

#![allow(missing_docs)]

use std::hint::black_box;

use divan::Bencher;
use robinson_term::{Default, Term};
use robinson_unification::{unify, unify_all, Store};

fn main() { divan::main(); }

fn var(name: &str) -> Term<Default> { Term::variable(name) }

fn constant(symbol: &str) -> Term<Default> { Term::constant(symbol) }

fn app<const N: usize>(
    symbol: &str,
    arguments: [Term<Default>; N],
) -> Term<Default> {
    Term::application(symbol, arguments)
}

fn table() -> Vec<(Term<Default>, Term<Default>)> {
    let (x, y, z) = (|| var("x"), || var("y"), || var("z"));
    let (a, b) = (|| constant("a"), || constant("b"));

    vec![
        (a(), a()),
        (a(), b()),
        (a(), x()),
        (x(), x()),
        (x(), y()),
        (app("f", [a(), x()]), app("f", [a(), b()])),
        (app("f", [x()]), app("g", [x()])),
        (app("f", [a()]), app("f", [b()])),
        (app("f", [x()]), app("f", [x(), y()])),
        (x(), app("f", [z()])),
        (app("f", [x()]), app("f", [z()])),
        (app("f", [x(), x()]), app("f", [y(), z()])),
        (app("f", [app("g", [x()])]), app("f", [y()])),
        (app("f", [x(), app("g", [x()])]), app("f", [a(), y()])),
        (app("f", [app("g", [x()]), x()]), app("f", [y(), a()])),
        (x(), app("f", [x()])),
    ]
}

#[divan::bench]
fn unification_table(bencher: Bencher) {
    let cases = table();

    bencher.bench(|| {
        for (source, target) in &cases {
            let _ = black_box(unify(
                black_box(source),
                black_box(target),
                &Store::new(),
            ));
        }
    });
}

/// `g(g(...g(x)...))` against `g(g(...g(a)...))`.
#[divan::bench(args = [8, 64, 256])]
fn nested_terms(bencher: Bencher, depth: usize) {
    let source = (0..depth).fold(var("x"), |term, _| app("g", [term]));
    let target = (0..depth).fold(constant("a"), |term, _| app("g", [term]));

    bencher.bench(|| {
        black_box(unify(black_box(&source), black_box(&target), &Store::new()))
    });
}

/// `h(x0, ..., xn)` against `h(g(x1), ..., g(xn), a)`; every new binding
/// rewrites the ones before it.
#[divan::bench(args = [8, 64, 256])]
fn chained_bindings(bencher: Bencher, width: usize) {
    let source =
        Term::application("h", (0..=width).map(|index| var(&format!("x{index}"))));
    let target = Term::application(
        "h",
        (1..=width)
            .map(|index| app("g", [var(&format!("x{index}"))]))
            .chain([constant("a")]),
    );

    bencher.bench(|| {
        black_box(unify(black_box(&source), black_box(&target), &Store::new()))
    });
}

/// Many independent pairs threaded through a single store.
#[divan::bench(args = [16, 128, 1024])]
fn wide_store(bencher: Bencher, pairs: usize) {
    let pairs = (0..pairs)
        .map(|index| (var(&format!("x{index}")), constant(&format!("c{index}"))))
        .collect::<Vec<_>>();

    bencher.bench(|| {
        black_box(unify_all(
            pairs.iter().map(|(source, target)| (source, target)),
            &Store::new(),
        ))
    });
}
