//! Algorithm X over the link structure, as a resumable state machine.
//!
//! The recursion of the textbook algorithm is replaced by a stack of
//! [`Frame`]s, and every `cover` is recorded on an undo stack so that
//! backtracking is just popping that stack back to a mark. This lets
//! [`Search::next_solution`] return at each solution and pick up exactly
//! where it left off on the next call.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::nodes::{Links, ROOT};

/// How the next column to branch on is chosen.
///
/// Both rules are deterministic and yield the same set of solutions, but in
/// a different order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRule {
    /// The leftmost column that is still uncovered.
    #[default]
    Leftmost,
    /// The uncovered column with the fewest candidate rows, leftmost on ties.
    Smallest,
}

impl ColumnRule {
    /// Pick a header from the root's ring, or `None` if every column is
    /// covered.
    fn select(self, links: &Links) -> Option<usize> {
        let first = links.right(ROOT);
        if first == ROOT {
            return None;
        }

        match self {
            ColumnRule::Leftmost => Some(first),
            ColumnRule::Smallest => {
                // find the column with the smallest amount of ones
                let mut best = first;
                let mut min_size = links.size(first);
                let mut header = links.right(first);
                while header != ROOT && min_size > 0 {
                    let size = links.size(header);
                    if size < min_size {
                        min_size = size;
                        best = header;
                    }
                    header = links.right(header);
                }
                Some(best)
            }
        }
    }
}

/// One level of the search: a covered column and the candidate row
/// currently being tried in it.
#[derive(Clone, Copy, Debug)]
struct Frame {
    header: usize,
    /// The data node whose row is selected, or `header` before the first
    /// candidate has been tried.
    node: usize,
    /// Undo stack length right after `header` itself was covered.
    mark: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// The search state for one enumeration over a [`Links`].
///
/// A `Search` does not own the structure it walks; the same `Links` must be
/// passed to every call until the search is finished or [`Search::abandon`]ed.
/// The iterators in `solutions` hold that `Links` for the whole enumeration.
#[derive(Clone, Debug)]
pub(crate) struct Search {
    rule: ColumnRule,
    phase: Phase,
    frames: Vec<Frame>,
    /// Headers covered so far, in the order they were covered.
    undo: Vec<usize>,
    /// Row indices of the partial solution, in selection order.
    partial: Vec<usize>,
    found: usize,
}

impl Search {
    /// Start a search that has not touched any structure yet.
    pub(crate) fn new(rule: ColumnRule) -> Search {
        Search {
            rule,
            phase: Phase::Fresh,
            frames: Vec::new(),
            undo: Vec::new(),
            partial: Vec::new(),
            found: 0,
        }
    }

    /// Number of solutions produced so far.
    pub(crate) fn found(&self) -> usize {
        self.found
    }

    /// True once the search space is exhausted and the structure restored.
    pub(crate) fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance to the next solution, returning its row indices in ascending
    /// order, or `None` once every solution has been produced.
    pub(crate) fn next_solution(&mut self, links: &mut Links) -> Option<Vec<usize>> {
        match self.phase {
            Phase::Done => return None,
            Phase::Fresh => {
                self.phase = Phase::Running;
                if let Some(solution) = self.descend(links) {
                    return Some(solution);
                }
            }
            Phase::Running => {}
        }

        loop {
            let Some(frame) = self.frames.last_mut() else {
                self.phase = Phase::Done;
                debug!("search exhausted after {} solutions", self.found);
                return None;
            };

            let tried = frame.node != frame.header;
            let Frame { header, mark, .. } = *frame;
            let node = links.down(frame.node);
            frame.node = node;

            if tried {
                // take back the row tried last time
                self.unwind_to(links, mark);
                self.partial.pop();
            }

            if node == header {
                // every candidate in this column has been tried
                self.frames.pop();
                self.unwind_to(links, mark - 1);
                continue;
            }

            self.partial.push(links.row(node));

            // cover every other column of the chosen row
            let mut other = links.right(node);
            while other != node {
                let header = links.header(other);
                self.cover(links, header);
                other = links.right(other);
            }

            if let Some(solution) = self.descend(links) {
                return Some(solution);
            }
        }
    }

    /// Abandon the search, uncovering everything still covered so `links` is
    /// back in its original state.
    pub(crate) fn abandon(&mut self, links: &mut Links) {
        self.unwind_to(links, 0);
        self.frames.clear();
        self.partial.clear();
        self.phase = Phase::Done;
    }

    /// Select the next column. Either every column is covered, which is a
    /// solution; or the column is empty, which is a dead end left for the
    /// caller's loop to back out of; or it gets covered and pushed as a new
    /// frame.
    fn descend(&mut self, links: &mut Links) -> Option<Vec<usize>> {
        let Some(header) = self.rule.select(links) else {
            let mut solution = self.partial.clone();
            solution.sort_unstable();
            self.found += 1;
            trace!("solution {}: rows {:?}", self.found, solution);
            return Some(solution);
        };

        if links.down(header) == header {
            trace!("dead end at depth {}: column {} is empty", self.partial.len(), header - 1);
            return None;
        }

        self.cover(links, header);
        self.frames.push(Frame {
            header,
            node: header,
            mark: self.undo.len(),
        });
        None
    }

    fn cover(&mut self, links: &mut Links, header: usize) {
        links.cover(header);
        self.undo.push(header);
    }

    /// Uncover headers in reverse order until only `mark` remain covered.
    fn unwind_to(&mut self, links: &mut Links, mark: usize) {
        while self.undo.len() > mark {
            if let Some(header) = self.undo.pop() {
                links.uncover(header);
            }
        }
    }
}
