use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dlx_cover::{ColumnRule, Links};

/// Latin squares of order `n`: one row per (cell, symbol), with columns for
/// each cell, each (row, symbol) and each (column, symbol).
fn latin_square(n: usize) -> Vec<Vec<bool>> {
    let mut rows = Vec::new();
    for r in 0..n {
        for c in 0..n {
            for v in 0..n {
                let mut row = vec![false; 3 * n * n];
                row[r * n + c] = true;
                row[n * n + r * n + v] = true;
                row[2 * n * n + c * n + v] = true;
                rows.push(row);
            }
        }
    }
    rows
}

/// Langford pairs: place two copies of each of 1..=n in 2n slots with `k`
/// numbers between the copies of `k`. Columns are the n values then the 2n
/// slots.
fn langford(n: usize) -> Vec<Vec<bool>> {
    let mut rows = Vec::new();
    for k in 1..=n {
        for first in 0..(2 * n) {
            let second = first + k + 1;
            if second >= 2 * n {
                break;
            }
            let mut row = vec![false; 3 * n];
            row[k - 1] = true;
            row[n + first] = true;
            row[n + second] = true;
            rows.push(row);
        }
    }
    rows
}

fn bench_enumerate(c: &mut Criterion) {
    let cases = [("latin_square_4", latin_square(4)), ("langford_7", langford(7))];

    for (name, matrix) in cases {
        for rule in [ColumnRule::Leftmost, ColumnRule::Smallest] {
            let mut links = Links::build(&matrix).unwrap();
            c.bench_function(&format!("{name}_{rule:?}"), |b| {
                b.iter(|| black_box(links.solutions_with(rule).count()))
            });
        }
    }
}

fn bench_build(c: &mut Criterion) {
    let matrix = langford(7);
    c.bench_function("build_langford_7", |b| {
        b.iter(|| black_box(Links::build(black_box(&matrix)).unwrap()))
    });
}

criterion_group!(benches, bench_enumerate, bench_build);
criterion_main!(benches);
