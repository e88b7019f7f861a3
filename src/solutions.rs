//! Lazy solution sequences and the convenience entry points built on them.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::nodes::{Entry, Links};
use crate::search::{ColumnRule, Search};
use crate::InvalidInputError;

/// Settings for a full enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Column selection rule; this decides the order solutions come out in.
    pub rule: ColumnRule,
    /// Stop after this many solutions.
    pub limit: Option<usize>,
}

/// An iterator over the exact covers of a borrowed [`Links`].
///
/// Dropping it early uncovers whatever is still covered, so the structure can
/// be enumerated again afterwards.
pub struct Solutions<'a> {
    links: &'a mut Links,
    search: Search,
}

impl Links {
    /// Enumerate the exact covers, branching on the leftmost column.
    pub fn solutions(&mut self) -> Solutions<'_> {
        self.solutions_with(ColumnRule::default())
    }

    /// Enumerate the exact covers, branching on columns chosen by `rule`.
    pub fn solutions_with(&mut self, rule: ColumnRule) -> Solutions<'_> {
        Solutions {
            links: self,
            search: Search::new(rule),
        }
    }

    /// Consume the structure, enumerating its exact covers.
    pub fn into_solutions(self, rule: ColumnRule) -> IntoSolutions {
        IntoSolutions {
            links: self,
            search: Search::new(rule),
        }
    }
}

impl Solutions<'_> {
    /// Number of solutions produced so far.
    pub fn found(&self) -> usize {
        self.search.found()
    }
}

impl Iterator for Solutions<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.search.next_solution(self.links)
    }
}

impl FusedIterator for Solutions<'_> {}

impl Drop for Solutions<'_> {
    fn drop(&mut self) {
        if !self.search.is_done() {
            self.search.abandon(self.links);
        }
    }
}

/// An iterator over the exact covers of an owned [`Links`].
pub struct IntoSolutions {
    links: Links,
    search: Search,
}

impl IntoSolutions {
    /// Number of solutions produced so far.
    pub fn found(&self) -> usize {
        self.search.found()
    }
}

impl Iterator for IntoSolutions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.search.next_solution(&mut self.links)
    }
}

impl FusedIterator for IntoSolutions {}

/// Lazily enumerate the exact covers of a matrix.
///
/// Each solution is the ascending list of selected row indices. Solutions
/// are produced depth first, leftmost column first, trying rows in input
/// order.
pub fn exact_cover<R, E>(input: &[R]) -> Result<IntoSolutions, InvalidInputError>
where
    R: AsRef<[E]>,
    E: Entry,
{
    Ok(Links::build(input)?.into_solutions(ColumnRule::default()))
}

/// Solve the exact cover problem, finding all solutions (up to
/// `options.limit`) returning indices.
pub fn solve_all<R, E>(
    input: &[R],
    options: SearchOptions,
) -> Result<Vec<Vec<usize>>, InvalidInputError>
where
    R: AsRef<[E]>,
    E: Entry,
{
    let solutions = Links::build(input)?.into_solutions(options.rule);
    Ok(match options.limit {
        Some(limit) => solutions.take(limit).collect(),
        None => solutions.collect(),
    })
}

/// Solve the exact cover problem, finding one solution returning indices.
pub fn solve_once<R, E>(input: &[R]) -> Result<Option<Vec<usize>>, InvalidInputError>
where
    R: AsRef<[E]>,
    E: Entry,
{
    Ok(exact_cover(input)?.next())
}
