//! # paged-list-sqlx — SQLx backend for paged-list
//!
//! Provides [`SqlxQuery`], an [`AsyncQuerySource`](paged_list::AsyncQuerySource)
//! over an `sqlx::Pool`, so that any table reachable through a
//! [`QueryBuilder`](paged_list::QueryBuilder) can be paginated with
//! `to_paged_list_async` and friends.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SqlxQuery`] | Pool + query builder + columns; `COUNT(*)`, then `LIMIT/OFFSET` |
//! | [`SqlDialect`] | Placeholder style per driver, applied to the builder |
//! | [`SqlxErrorExt`] | Converts `sqlx::Error` → `DataError` (`.into_data_error()`) |
//! | [`SqlxResult<T>`] | Type alias for `Result<T, DataError>` |
//!
//! # Feature flags
//!
//! | Feature    | Driver |
//! |------------|--------|
//! | `sqlite`   | SQLite via `sqlx/sqlite` (default) |
//! | `postgres` | PostgreSQL via `sqlx/postgres` |
//!
//! # Quick start
//!
//! ```ignore
//! use paged_list::prelude::*;
//! use paged_list_sqlx::SqlxQuery;
//!
//! let builder = QueryBuilder::new("articles")
//!     .apply_parameters(&params, "title", "published_at")
//!     .order_by("id", true);
//! let page = SqlxQuery::<Article, Sqlite>::new(pool.clone(), builder)
//!     .to_paged_list_async(params.page_number(), params.page_size())
//!     .await?;
//! ```
//!
//! Bind values are passed as text. With Postgres, compare against
//! text-compatible columns or cast in the column expression.

pub mod error;
pub mod query;

pub use error::{SqlxErrorExt, SqlxResult};
pub use query::{SqlDialect, SqlxQuery};

/// Re-exports of the most commonly used types from both `paged-list` and this crate.
pub mod prelude {
    pub use crate::{SqlxErrorExt, SqlxQuery};
    pub use paged_list::prelude::*;
}
