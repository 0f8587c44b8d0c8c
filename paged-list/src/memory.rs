use crate::source::{AsyncQuerySource, QuerySource};
use crate::window::Window;
use std::convert::Infallible;
use std::future::Future;

/// An ordered in-memory query source.
///
/// Rows keep insertion order unless re-ordered with [`order_by_key`](Self::order_by_key)
/// (stable sort). Both the blocking and the suspending capability are
/// implemented; neither can fail.
///
/// # Example
///
/// ```
/// use paged_list::prelude::*;
///
/// let page = InMemoryQuery::new(vec!["pear", "apple", "fig"])
///     .order_by_key(|name| *name)
///     .to_paged_list(1, 2)
///     .unwrap();
/// assert_eq!(page.items(), &["apple", "fig"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryQuery<T> {
    rows: Vec<T>,
}

impl<T> InMemoryQuery<T> {
    pub fn new(rows: impl IntoIterator<Item = T>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Keep only the rows matching `predicate`.
    pub fn filter(mut self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.rows.retain(|row| predicate(row));
        self
    }

    pub fn order_by_key<K: Ord>(mut self, key: impl FnMut(&T) -> K) -> Self {
        self.rows.sort_by_key(key);
        self
    }

    pub fn order_by_key_desc<K: Ord>(mut self, mut key: impl FnMut(&T) -> K) -> Self {
        self.rows.sort_by_key(|row| std::cmp::Reverse(key(row)));
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }
}

impl<T> From<Vec<T>> for InMemoryQuery<T> {
    fn from(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

impl<T> FromIterator<T> for InMemoryQuery<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Clone> QuerySource for InMemoryQuery<T> {
    type Item = T;
    type Error = Infallible;

    fn count(&self) -> Result<i64, Infallible> {
        Ok(self.rows.len() as i64)
    }

    fn fetch(&self, window: Window) -> Result<Vec<T>, Infallible> {
        Ok(window.apply(self.rows.iter().cloned()))
    }
}

impl<T: Clone + Send + Sync> AsyncQuerySource for InMemoryQuery<T> {
    type Item = T;
    type Error = Infallible;

    fn count_async(&self) -> impl Future<Output = Result<i64, Infallible>> + Send {
        async move { Ok(self.rows.len() as i64) }
    }

    fn fetch_async(
        &self,
        window: Window,
    ) -> impl Future<Output = Result<Vec<T>, Infallible>> + Send {
        async move { Ok(window.apply(self.rows.iter().cloned())) }
    }
}
