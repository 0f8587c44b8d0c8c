/// Errors raised by pagination backends.
///
/// The pagination operations themselves never produce this type: they hand
/// back whatever error the source reports. Backend crates (e.g.
/// `paged-list-sqlx`) use it as their source error.
#[derive(Debug)]
pub enum DataError {
    Database(Box<dyn std::error::Error + Send + Sync>),
    InvalidQuery(String),
    Config(String),
}

impl DataError {
    /// Construct a `Database` variant from any driver error.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Database(err) => write!(f, "Database error: {err}"),
            DataError::InvalidQuery(msg) => write!(f, "Invalid query: {msg}"),
            DataError::Config(msg) => write!(f, "Pagination config error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_database_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let err = DataError::database(io);
        assert_eq!(err.to_string(), "Database error: reset by peer");
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_invalid_query_has_no_source() {
        let err = DataError::InvalidQuery("bad column".into());
        assert_eq!(err.to_string(), "Invalid query: bad column");
        assert!(err.source().is_none());
    }
}
