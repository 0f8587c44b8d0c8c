use crate::window::Window;
use std::future::Future;

/// Blocking query capability: an ordered, not-yet-evaluated sequence of records.
///
/// Implement one adapter per backend. `fetch` covers skip, limit and
/// materialization in one call and must preserve the source's ordering;
/// pagination over an unordered source yields arbitrary page contents.
///
/// # Example
///
/// ```ignore
/// impl QuerySource for UserTable {
///     type Item = User;
///     type Error = DbError;
///     fn count(&self) -> Result<i64, DbError> { ... }
///     fn fetch(&self, window: Window) -> Result<Vec<User>, DbError> { ... }
/// }
/// ```
pub trait QuerySource {
    type Item;
    type Error;

    /// Total number of elements in the unsliced source.
    fn count(&self) -> Result<i64, Self::Error>;

    /// Skip `window.offset` elements, keep at most `window.limit`, materialize.
    fn fetch(&self, window: Window) -> Result<Vec<Self::Item>, Self::Error>;
}

/// Suspending counterpart of [`QuerySource`].
///
/// Uses RPITIT (return-position `impl Trait` in traits), no `async-trait` needed.
/// A source bound to a single connection must not be paginated twice concurrently;
/// that constraint belongs to the backend and is not enforced here.
pub trait AsyncQuerySource: Send + Sync {
    type Item: Send;
    type Error: Send;

    fn count_async(&self) -> impl Future<Output = Result<i64, Self::Error>> + Send;

    fn fetch_async(
        &self,
        window: Window,
    ) -> impl Future<Output = Result<Vec<Self::Item>, Self::Error>> + Send;
}
