//! DLX library to enumerate the exact covers of a 0/1 matrix.
//!
//! A matrix is turned into a toroidal web of doubly linked [`Links`], and
//! Knuth's Algorithm X walks it, covering and uncovering columns in place.
//! Solutions come out lazily, one per iterator step:
//!
//! ```
//! let matrix = [
//!     [0, 0, 1, 0, 1, 1, 0],
//!     [1, 0, 0, 1, 0, 0, 1],
//!     [0, 1, 1, 0, 0, 1, 0],
//!     [1, 0, 0, 1, 0, 0, 0],
//!     [0, 1, 0, 0, 0, 0, 1],
//!     [0, 0, 0, 1, 1, 0, 1],
//! ];
//!
//! let solutions: Vec<Vec<usize>> = dlx_cover::exact_cover(&matrix)?.collect();
//! assert_eq!(vec![vec![0, 3, 4]], solutions);
//! # Ok::<(), dlx_cover::InvalidInputError>(())
//! ```
//!
//! A matrix with no columns is rejected with [`InvalidInputError::NoColumns`]
//! rather than reported as having one empty cover.

mod bindings;
mod error;
mod nodes;
mod search;
mod solutions;

pub use bindings::*;
pub use error::*;
pub use nodes::{Entry, Links};
pub use search::ColumnRule;
pub use solutions::*;
