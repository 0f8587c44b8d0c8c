/// Offset/limit pair describing which slice of an ordered source makes up a page.
///
/// # Example
///
/// ```
/// use paged_list::Window;
///
/// let window = Window::for_page(3, 10);
/// assert_eq!(window, Window::new(20, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Number of leading elements to skip
    pub offset: i64,
    /// Maximum number of elements to keep
    pub limit: i64,
}

impl Window {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Window for a 1-based page number: `offset = (page_number - 1) * page_size`.
    ///
    /// Inputs are not validated. A page number below 1 yields a zero or
    /// negative offset; what a source does with it is up to the source.
    pub fn for_page(page_number: i64, page_size: i64) -> Self {
        let offset = page_number.saturating_sub(1).saturating_mul(page_size);
        tracing::debug!(page_number, page_size, offset, "computed page window");
        Self {
            offset,
            limit: page_size,
        }
    }

    /// Slice an in-memory ordered sequence.
    ///
    /// A negative offset skips nothing; a zero or negative limit keeps nothing.
    pub fn apply<T, I>(&self, rows: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        rows.into_iter()
            .skip(clamp_to_usize(self.offset))
            .take(clamp_to_usize(self.limit))
            .collect()
    }
}

fn clamp_to_usize(value: i64) -> usize {
    if value <= 0 {
        0
    } else {
        usize::try_from(value).unwrap_or(usize::MAX)
    }
}
