//! Derivations of the visible slice: search first, then pagination.

pub mod pagination;
pub mod search;

pub use pagination::{PageRequest, Pager, page_slice, total_pages};
pub use search::{filter_rows, matches};
