//! # paged-list — page-based result slicing
//!
//! Wraps an ordered, not-yet-evaluated query source, counts it, slices one
//! page out of it and returns the page together with its metadata.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PagedList`] | One materialized page plus `total_count`, `total_pages`, `has_next`, ... |
//! | [`Window`] | Offset/limit pair derived from a 1-based page number and a page size |
//! | [`QuerySource`] / [`AsyncQuerySource`] | Blocking / suspending count + fetch capability |
//! | [`Paginate`] / [`AsyncPaginate`] | `to_paged_list*` extension methods over any source |
//! | [`InMemoryQuery`] | Ordered in-memory source |
//! | [`QueryStringParameters`] | Normalized `q`, `pageSize`, `pageNumber`, `from`, `to` |
//! | [`QueryBuilder`] | SQL `SELECT` / `COUNT` builder used by backend crates |
//!
//! ```
//! use paged_list::prelude::*;
//!
//! let source = InMemoryQuery::new(1..=23);
//! let page = source.to_paged_list(3, 10).unwrap();
//!
//! assert_eq!(page.items(), &[21, 22, 23]);
//! assert_eq!(page.total_pages(), 3);
//! assert!(page.has_previous());
//! assert!(!page.has_next());
//! ```

pub mod error;
pub mod memory;
pub mod page;
pub mod paginate;
pub mod params;
pub mod query;
pub mod source;
pub mod window;

pub use error::DataError;
pub use memory::InMemoryQuery;
pub use page::PagedList;
pub use paginate::{AsyncPaginate, Paginate};
pub use params::{HasQueryParameters, PagingLimits, QueryStringParameters};
pub use query::{Dialect, QueryBuilder};
pub use source::{AsyncQuerySource, QuerySource};
pub use window::Window;

pub mod prelude {
    //! Re-exports of the most commonly used pagination types.
    pub use crate::{
        AsyncPaginate, AsyncQuerySource, HasQueryParameters, InMemoryQuery, Paginate, PagedList,
        QueryBuilder, QuerySource, QueryStringParameters, Window,
    };
}
