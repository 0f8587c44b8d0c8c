use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One materialized page of a larger ordered result set, with pagination metadata.
///
/// `total_pages` is computed once, at construction, as
/// `ceil(total_count / page_size)`. It is a stored value: reassigning the
/// count through [`set_total_count`](Self::set_total_count) leaves it
/// untouched. Use [`with_total_count`](Self::with_total_count) to rebuild
/// consistent metadata.
///
/// Page number and page size are stored verbatim. A `page_size` of zero makes
/// the ceiling computation degenerate (the float division saturates to
/// `i64::MAX`, `i64::MIN` or `0`); callers are expected to pass a positive size.
///
/// # Example
///
/// ```
/// use paged_list::PagedList;
///
/// let page = PagedList::new(vec![21, 22, 23], 23, 3, 10);
/// assert_eq!(page.total_pages(), 3);
/// assert!(page.has_previous());
/// assert!(!page.has_next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    items: Vec<T>,
    total_count: i64,
    page_size: i64,
    current_page: i64,
    total_pages: i64,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, total_count: i64, current_page: i64, page_size: i64) -> Self {
        Self {
            items,
            total_count,
            page_size,
            current_page,
            total_pages: total_pages(total_count, page_size),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// 1-based index of this page, as requested by the caller.
    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Reassign the total count. `total_pages` is *not* recomputed.
    pub fn set_total_count(&mut self, total_count: i64) {
        self.total_count = total_count;
    }

    pub fn set_total_pages(&mut self, total_pages: i64) {
        self.total_pages = total_pages;
    }

    /// Rebuild the page around a new total count, re-deriving `total_pages`.
    pub fn with_total_count(self, total_count: i64) -> Self {
        Self::new(self.items, total_count, self.current_page, self.page_size)
    }

    /// Swap the page content for `items`, returning the previous content.
    pub fn replace_items(&mut self, items: Vec<T>) -> Vec<T> {
        std::mem::replace(&mut self.items, items)
    }

    /// Project every item, keeping the metadata as-is.
    pub fn map<R, F>(self, f: F) -> PagedList<R>
    where
        F: FnMut(T) -> R,
    {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }

    /// Like [`map`](Self::map), but the projector also receives the item's
    /// zero-based position within the page.
    pub fn map_indexed<R, F>(self, f: F) -> PagedList<R>
    where
        F: FnMut(T, usize) -> R,
    {
        let PagedList {
            items,
            total_count,
            page_size,
            current_page,
            total_pages,
        } = self;
        PagedList {
            items: project_indexed(items, f),
            total_count,
            page_size,
            current_page,
            total_pages,
        }
    }
}

pub(crate) fn total_pages(total_count: i64, page_size: i64) -> i64 {
    (total_count as f64 / page_size as f64).ceil() as i64
}

pub(crate) fn project_indexed<T, R, F>(items: Vec<T>, mut f: F) -> Vec<R>
where
    F: FnMut(T, usize) -> R,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| f(item, index))
        .collect()
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Derived flags are emitted alongside the stored fields so the wire shape
// matches `items/totalCount/pageSize/currentPage/totalPages/hasPrevious/hasNext`.
impl<T: Serialize> Serialize for PagedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PagedList", 7)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("totalCount", &self.total_count)?;
        state.serialize_field("pageSize", &self.page_size)?;
        state.serialize_field("currentPage", &self.current_page)?;
        state.serialize_field("totalPages", &self.total_pages)?;
        state.serialize_field("hasPrevious", &self.has_previous())?;
        state.serialize_field("hasNext", &self.has_next())?;
        state.end()
    }
}
