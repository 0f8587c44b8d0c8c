//! The pagination operations, as extension methods over query sources.
//!
//! All entry points run the same steps: count the source, derive the
//! [`Window`] for the requested page, fetch it, optionally project each row,
//! and wrap the result in a [`PagedList`]. The blocking and suspending
//! flavours differ only in how `count`/`fetch` are driven; in the suspending
//! flavour the count completes before the fetch starts.
//!
//! Errors from the source are returned unchanged. A failing count aborts
//! before anything is fetched.

use crate::page::{project_indexed, PagedList};
use crate::source::{AsyncQuerySource, QuerySource};
use crate::window::Window;
use std::future::Future;

fn assemble<T>(rows: Vec<T>, total_count: i64, page_number: i64, page_size: i64) -> PagedList<T> {
    let page = PagedList::new(rows, total_count, page_number, page_size);
    tracing::debug!(
        page = page_number,
        size = page_size,
        total_count,
        total_pages = page.total_pages(),
        items = page.len(),
        "assembled page"
    );
    page
}

/// Blocking pagination over any [`QuerySource`].
///
/// # Example
///
/// ```
/// use paged_list::prelude::*;
///
/// let source = InMemoryQuery::new(1..=25);
/// let page = source.to_paged_list_map(2, 10, |n| n * 2).unwrap();
/// assert_eq!(page.items().first(), Some(&22));
/// assert_eq!(page.total_count(), 25);
/// ```
pub trait Paginate: QuerySource {
    fn to_paged_list(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<PagedList<Self::Item>, Self::Error> {
        let total_count = self.count()?;
        let rows = self.fetch(Window::for_page(page_number, page_size))?;
        Ok(assemble(rows, total_count, page_number, page_size))
    }

    fn to_paged_list_map<R, F>(
        &self,
        page_number: i64,
        page_size: i64,
        projector: F,
    ) -> Result<PagedList<R>, Self::Error>
    where
        F: FnMut(Self::Item) -> R,
    {
        Ok(self.to_paged_list(page_number, page_size)?.map(projector))
    }

    /// The projector receives each row and its zero-based position in the page.
    fn to_paged_list_map_indexed<R, F>(
        &self,
        page_number: i64,
        page_size: i64,
        projector: F,
    ) -> Result<PagedList<R>, Self::Error>
    where
        F: FnMut(Self::Item, usize) -> R,
    {
        Ok(self
            .to_paged_list(page_number, page_size)?
            .map_indexed(projector))
    }
}

impl<S: QuerySource> Paginate for S {}

/// Suspending pagination over any [`AsyncQuerySource`].
pub trait AsyncPaginate: AsyncQuerySource {
    fn to_paged_list_async(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> impl Future<Output = Result<PagedList<Self::Item>, Self::Error>> + Send {
        async move {
            let total_count = self.count_async().await?;
            let rows = self
                .fetch_async(Window::for_page(page_number, page_size))
                .await?;
            Ok(assemble(rows, total_count, page_number, page_size))
        }
    }

    fn to_paged_list_map_async<R, F>(
        &self,
        page_number: i64,
        page_size: i64,
        projector: F,
    ) -> impl Future<Output = Result<PagedList<R>, Self::Error>> + Send
    where
        F: FnMut(Self::Item) -> R + Send,
        R: Send,
    {
        async move {
            let page = self.to_paged_list_async(page_number, page_size).await?;
            Ok(page.map(projector))
        }
    }

    fn to_paged_list_map_indexed_async<R, F>(
        &self,
        page_number: i64,
        page_size: i64,
        projector: F,
    ) -> impl Future<Output = Result<PagedList<R>, Self::Error>> + Send
    where
        F: FnMut(Self::Item, usize) -> R + Send,
        R: Send,
    {
        async move {
            let page = self.to_paged_list_async(page_number, page_size).await?;
            Ok(page.map_indexed(projector))
        }
    }

    /// Fetch and project one page without counting the source.
    ///
    /// Returns the bare items, no pagination metadata. Prefer
    /// [`to_paged_list_map_indexed_async`](Self::to_paged_list_map_indexed_async)
    /// when the caller needs `total_pages` or `has_next`.
    fn to_page_items_async<R, F>(
        &self,
        page_number: i64,
        page_size: i64,
        projector: F,
    ) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send
    where
        F: FnMut(Self::Item, usize) -> R + Send,
        R: Send,
    {
        async move {
            let rows = self
                .fetch_async(Window::for_page(page_number, page_size))
                .await?;
            Ok(project_indexed(rows, projector))
        }
    }
}

impl<S: AsyncQuerySource> AsyncPaginate for S {}
