use paged_list::{DataError, Dialect, QueryBuilder};
use sqlx::{Database, Pool};
use std::marker::PhantomData;

/// Placeholder style of a database driver.
pub trait SqlDialect: Database {
    const DIALECT: Dialect;
}

#[cfg(feature = "sqlite")]
impl SqlDialect for sqlx::Sqlite {
    const DIALECT: Dialect = Dialect::Generic;
}

#[cfg(feature = "postgres")]
impl SqlDialect for sqlx::Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

/// A paginable SQL query: a pool, the statement builder and the selected columns.
///
/// `count_async` runs `SELECT COUNT(*)` over the builder's filters;
/// `fetch_async` runs the ordered `SELECT ... LIMIT ... OFFSET ...` and maps
/// rows through `sqlx::FromRow`. Identifiers are validated before anything is
/// sent to the database. The builder's dialect is set from `DB`.
///
/// # Example
///
/// ```ignore
/// let builder = QueryBuilder::new("articles").order_by("id", true);
/// let query = SqlxQuery::<Article, Sqlite>::new(pool.clone(), builder)
///     .columns("id, title, published_at");
/// let page = query.to_paged_list_async(2, 10).await?;
/// ```
pub struct SqlxQuery<T, DB: Database> {
    pool: Pool<DB>,
    builder: QueryBuilder,
    columns: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T, DB: SqlDialect> SqlxQuery<T, DB> {
    pub fn new(pool: Pool<DB>, builder: QueryBuilder) -> Self {
        if !builder.is_ordered() {
            tracing::warn!("paginating a query without ORDER BY; page contents are not stable");
        }
        Self {
            pool,
            builder: builder.dialect(DB::DIALECT),
            columns: "*".to_string(),
            _marker: PhantomData,
        }
    }
}

impl<T, DB: Database> SqlxQuery<T, DB> {
    /// Select these columns (comma-separated) instead of `*`.
    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    pub fn pool(&self) -> &Pool<DB> {
        &self.pool
    }

    pub fn builder(&self) -> &QueryBuilder {
        &self.builder
    }

    fn checked(&self) -> Result<(), DataError> {
        self.builder.validate(&self.columns)
    }
}

impl<T, DB: Database> Clone for SqlxQuery<T, DB> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            builder: self.builder.clone(),
            columns: self.columns.clone(),
            _marker: PhantomData,
        }
    }
}

macro_rules! impl_async_query_source {
    ($db:ty, $row:ty) => {
        impl<T> paged_list::AsyncQuerySource for SqlxQuery<T, $db>
        where
            T: for<'r> sqlx::FromRow<'r, $row> + Send + Unpin + 'static,
        {
            type Item = T;
            type Error = DataError;

            fn count_async(
                &self,
            ) -> impl std::future::Future<Output = Result<i64, DataError>> + Send {
                async move {
                    self.checked()?;
                    let (sql, params) = self.builder.build_count();
                    tracing::debug!(sql = %sql, "counting rows");
                    let mut query = sqlx::query_scalar::<$db, i64>(&sql);
                    for value in params {
                        query = query.bind(value);
                    }
                    query
                        .fetch_one(&self.pool)
                        .await
                        .map_err(crate::SqlxErrorExt::into_data_error)
                }
            }

            fn fetch_async(
                &self,
                window: paged_list::Window,
            ) -> impl std::future::Future<Output = Result<Vec<T>, DataError>> + Send {
                async move {
                    self.checked()?;
                    let (sql, params) = self.builder.build_select(&self.columns, window);
                    tracing::debug!(
                        sql = %sql,
                        offset = window.offset,
                        limit = window.limit,
                        "fetching page"
                    );
                    let mut query = sqlx::query_as::<$db, T>(&sql);
                    for value in params {
                        query = query.bind(value);
                    }
                    query
                        .fetch_all(&self.pool)
                        .await
                        .map_err(crate::SqlxErrorExt::into_data_error)
                }
            }
        }
    };
}

#[cfg(feature = "sqlite")]
impl_async_query_source!(sqlx::Sqlite, sqlx::sqlite::SqliteRow);

#[cfg(feature = "postgres")]
impl_async_query_source!(sqlx::Postgres, sqlx::postgres::PgRow);
