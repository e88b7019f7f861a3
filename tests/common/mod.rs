//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Turn a 0/1 matrix into booleans.
pub fn bools(matrix: &[Vec<u8>]) -> Vec<Vec<bool>> {
    matrix
        .iter()
        .map(|row| row.iter().map(|&cell| cell != 0).collect())
        .collect()
}

/// A set of solutions, each an ordered set of row indices.
pub fn as_set<I>(solutions: I) -> BTreeSet<BTreeSet<usize>>
where
    I: IntoIterator<Item = Vec<usize>>,
{
    solutions
        .into_iter()
        .map(|solution| solution.into_iter().collect())
        .collect()
}

/// Build a solution set from literal row lists.
pub fn expected(solutions: &[&[usize]]) -> BTreeSet<BTreeSet<usize>> {
    solutions
        .iter()
        .map(|solution| solution.iter().copied().collect())
        .collect()
}

/// True when the selected rows cover every column exactly once.
///
/// A row with no set cell covers nothing, so it never belongs to a cover;
/// otherwise every cover would have a copy padded with each empty row.
pub fn is_exact_cover(matrix: &[Vec<bool>], rows: &[usize]) -> bool {
    let width = matrix.first().map_or(0, Vec::len);
    rows.iter().all(|&y| matrix[y].iter().any(|&cell| cell))
        && (0..width).all(|x| rows.iter().filter(|&&y| matrix[y][x]).count() == 1)
}

/// Every exact cover, found by trying all subsets of rows.
pub fn brute_force(matrix: &[Vec<bool>]) -> BTreeSet<BTreeSet<usize>> {
    let height = matrix.len();
    assert!(height < 20, "too many rows to brute force");

    let mut found = BTreeSet::new();
    for mask in 0u32..(1 << height) {
        let rows: Vec<usize> = (0..height).filter(|&y| mask & (1 << y) != 0).collect();
        if is_exact_cover(matrix, &rows) {
            found.insert(rows.into_iter().collect());
        }
    }
    found
}

/// A small deterministic generator, so the random matrices are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Lcg {
        Lcg(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    /// A `height`x`width` matrix where each cell is set with probability
    /// about `percent`/100.
    pub fn matrix(&mut self, height: usize, width: usize, percent: u64) -> Vec<Vec<bool>> {
        (0..height)
            .map(|_| (0..width).map(|_| self.next() % 100 < percent).collect())
            .collect()
    }
}

/// Domino placements on a `w`x`h` board; one column per square.
pub fn dominoes(w: usize, h: usize) -> Vec<Vec<bool>> {
    let mut rows = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if x + 1 < w {
                let mut row = vec![false; w * h];
                row[y * w + x] = true;
                row[y * w + x + 1] = true;
                rows.push(row);
            }
            if y + 1 < h {
                let mut row = vec![false; w * h];
                row[y * w + x] = true;
                row[(y + 1) * w + x] = true;
                rows.push(row);
            }
        }
    }
    rows
}
