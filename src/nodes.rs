//! Node definitions.
//!
//! The matrix lives in a single arena of [`Node`] records. Every link is an
//! index into that arena, so the toroidal structure needs no shared
//! ownership: index [`ROOT`] is the root sentinel, indices `1..=columns` are
//! the column headers in column order, and the data nodes follow in the order
//! they were created (row by row, left to right).

use log::debug;

use crate::InvalidInputError;

/// Arena index of the root sentinel.
pub(crate) const ROOT: usize = 0;

/// The role a node plays in the structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    /// Anchors the ring of column headers.
    Root,
    /// One column, with the number of data nodes currently in its ring.
    Header { column: usize, size: usize },
    /// A single 1-entry of the matrix.
    Data { row: usize, header: usize },
}

/// The type of nodes used by the solver.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    u: usize,
    d: usize,
    l: usize,
    r: usize,
    kind: Kind,
}

impl Node {
    /// Create a node at arena index `id` that is alone in both of its rings.
    fn new(id: usize, kind: Kind) -> Node {
        Node {
            u: id,
            d: id,
            l: id,
            r: id,
            kind,
        }
    }
}

/// A matrix cell that is either marked or not.
///
/// Integers count as marked when nonzero, so `0`/`1` matrices can be passed
/// as they are.
pub trait Entry {
    fn is_set(&self) -> bool;
}

impl Entry for bool {
    fn is_set(&self) -> bool {
        *self
    }
}

macro_rules! impl_entry_for_int {
    ($($t:ty),*) => {
        $(impl Entry for $t {
            fn is_set(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_entry_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// The dancing links representation of one exact cover matrix.
#[derive(Clone, Debug)]
pub struct Links {
    nodes: Vec<Node>,
    rows: usize,
    columns: usize,
}

impl Links {
    /// Build the structure from a rectangular matrix, taking the width from
    /// the first row.
    ///
    /// An empty matrix has no columns and is rejected.
    pub fn build<R, E>(input: &[R]) -> Result<Links, InvalidInputError>
    where
        R: AsRef<[E]>,
        E: Entry,
    {
        let width = input.first().map_or(0, |row| row.as_ref().len());
        Self::with_columns(width, input)
    }

    /// Build the structure from a matrix whose width is given up front, which
    /// also allows a matrix with no rows at all.
    pub fn with_columns<R, E>(width: usize, input: &[R]) -> Result<Links, InvalidInputError>
    where
        R: AsRef<[E]>,
        E: Entry,
    {
        if width == 0 {
            return Err(InvalidInputError::NoColumns);
        }

        let mut ones = 0;
        for (y, row) in input.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(InvalidInputError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            ones += row.iter().filter(|val| val.is_set()).count();
        }

        let mut links = Links {
            nodes: Vec::with_capacity(1 + width + ones),
            rows: input.len(),
            columns: width,
        };
        links.nodes.push(Node::new(ROOT, Kind::Root));

        // headers go in column order, each appended at the end of the root's ring
        for x in 0..width {
            let header = links.push(Kind::Header { column: x, size: 0 });
            links.append_lr(ROOT, header);
        }

        for (y, row) in input.iter().enumerate() {
            let mut first = None;

            for (x, val) in row.as_ref().iter().enumerate() {
                if !val.is_set() {
                    continue;
                }

                let header = Self::header_index(x);
                let node = links.push(Kind::Data { row: y, header });
                links.append_ud(header, node);
                links.resize(header, |size| size + 1);

                match first {
                    None => first = Some(node),
                    Some(first) => links.append_lr(first, node),
                }
            }
        }

        debug!(
            "built links for {}x{} matrix with {} nodes",
            links.rows,
            links.columns,
            links.nodes.len()
        );

        Ok(links)
    }

    /// Number of rows (choices) in the source matrix.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (constraints) in the source matrix.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of 1-entries, i.e. data nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1 - self.columns
    }

    /// True when the matrix has no 1-entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rebuild the boolean matrix by walking the header ring and each
    /// header's column ring.
    ///
    /// Columns that are currently covered are not visited, so this only
    /// reproduces the input while no search is in progress.
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        let mut matrix = vec![vec![false; self.columns]; self.rows];

        let mut header = self.right(ROOT);
        while header != ROOT {
            let column = self.column(header);

            let mut node = self.down(header);
            while node != header {
                matrix[self.row(node)][column] = true;
                node = self.down(node);
            }

            header = self.right(header);
        }

        matrix
    }

    /// Check the structural invariants: every ring is closed, every column
    /// ring holds exactly its own data nodes in row order, and every header's
    /// size matches its ring.
    ///
    /// Only meaningful while nothing is covered, since covered nodes are
    /// deliberately left pointing into rings that no longer contain them.
    pub fn is_consistent(&self) -> bool {
        for (id, node) in self.nodes.iter().enumerate() {
            if self.nodes[node.l].r != id
                || self.nodes[node.r].l != id
                || self.nodes[node.u].d != id
                || self.nodes[node.d].u != id
            {
                return false;
            }
        }

        let mut seen = 0;
        let mut expected_header = ROOT;
        let mut header = self.right(ROOT);
        while header != ROOT {
            expected_header += 1;
            if header != expected_header {
                return false;
            }
            let Kind::Header { size, .. } = self.nodes[header].kind else {
                return false;
            };

            let mut count = 0;
            let mut last_row = None;
            let mut node = self.down(header);
            while node != header {
                let Kind::Data { row, header: owner } = self.nodes[node].kind else {
                    return false;
                };
                if owner != header || last_row.is_some_and(|last| last >= row) {
                    return false;
                }
                last_row = Some(row);
                count += 1;
                node = self.down(node);
            }

            if count != size {
                return false;
            }
            seen += count;
            header = self.right(header);
        }

        expected_header == self.columns && seen == self.len()
    }

    /// Arena index of the header for column `x`.
    fn header_index(x: usize) -> usize {
        x + 1
    }

    fn push(&mut self, kind: Kind) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, kind));
        id
    }

    pub(crate) fn up(&self, node: usize) -> usize {
        self.nodes[node].u
    }

    pub(crate) fn down(&self, node: usize) -> usize {
        self.nodes[node].d
    }

    pub(crate) fn left(&self, node: usize) -> usize {
        self.nodes[node].l
    }

    pub(crate) fn right(&self, node: usize) -> usize {
        self.nodes[node].r
    }

    /// Row index of a data node.
    pub(crate) fn row(&self, node: usize) -> usize {
        match self.nodes[node].kind {
            Kind::Data { row, .. } => row,
            kind => unreachable!("row of non-data node {node}: {kind:?}"),
        }
    }

    /// Header owning a data node.
    pub(crate) fn header(&self, node: usize) -> usize {
        match self.nodes[node].kind {
            Kind::Data { header, .. } => header,
            kind => unreachable!("header of non-data node {node}: {kind:?}"),
        }
    }

    fn column(&self, header: usize) -> usize {
        match self.nodes[header].kind {
            Kind::Header { column, .. } => column,
            kind => unreachable!("column of non-header node {header}: {kind:?}"),
        }
    }

    /// Number of data nodes currently in a header's column ring.
    pub(crate) fn size(&self, header: usize) -> usize {
        match self.nodes[header].kind {
            Kind::Header { size, .. } => size,
            kind => unreachable!("size of non-header node {header}: {kind:?}"),
        }
    }

    fn resize(&mut self, header: usize, f: impl FnOnce(usize) -> usize) {
        if let Kind::Header { size, .. } = &mut self.nodes[header].kind {
            *size = f(*size);
        }
    }

    /// Unlink a node horizontally by node.L.R ← node.R, node.R.L ← node.L
    fn unlink_lr(&mut self, node: usize) {
        let Node { l, r, .. } = self.nodes[node];
        self.nodes[l].r = r;
        self.nodes[r].l = l;
    }

    /// Unlink a node vertically by node.U.D ← node.D, node.D.U ← node.U
    fn unlink_ud(&mut self, node: usize) {
        let Node { u, d, .. } = self.nodes[node];
        self.nodes[u].d = d;
        self.nodes[d].u = u;
    }

    /// Relink a node horizontally by node.L.R ← node, node.R.L ← node
    fn link_lr(&mut self, node: usize) {
        let Node { l, r, .. } = self.nodes[node];
        self.nodes[l].r = node;
        self.nodes[r].l = node;
    }

    /// Relink a node vertically by node.U.D ← node, node.D.U ← node
    fn link_ud(&mut self, node: usize) {
        let Node { u, d, .. } = self.nodes[node];
        self.nodes[u].d = node;
        self.nodes[d].u = node;
    }

    /// Insert a lone node at the end of `anchor`'s horizontal ring.
    fn append_lr(&mut self, anchor: usize, node: usize) {
        self.nodes[node].l = self.nodes[anchor].l;
        self.nodes[node].r = anchor;
        self.link_lr(node);
    }

    /// Insert a lone node at the bottom of `header`'s column ring.
    fn append_ud(&mut self, header: usize, node: usize) {
        self.nodes[node].u = self.nodes[header].u;
        self.nodes[node].d = header;
        self.link_ud(node);
    }

    /// Cover a column.
    pub(crate) fn cover(&mut self, header: usize) {
        // get rid of it from col headers
        self.unlink_lr(header);

        // loop through all nodes in the column
        let mut row = self.down(header);
        while row != header {
            // loop through all nodes in this row
            let mut node = self.right(row);
            while node != row {
                // remove it from its column, decrement size
                self.unlink_ud(node);
                self.resize(self.header(node), |size| size - 1);

                node = self.right(node);
            }

            row = self.down(row);
        }
    }

    /// Undo the covering operation from a column.
    pub(crate) fn uncover(&mut self, header: usize) {
        // bottom to top, right to left: the exact reverse of cover
        let mut row = self.up(header);
        while row != header {
            let mut node = self.left(row);
            while node != row {
                self.resize(self.header(node), |size| size + 1);
                self.link_ud(node);

                node = self.left(node);
            }

            row = self.up(row);
        }

        // put it back into column headers
        self.link_lr(header);
    }
}
