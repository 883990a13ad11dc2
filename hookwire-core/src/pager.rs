//! Validated pagination.
//!
//! [`Page::new`] rejects bad bounds up front, before any query or pipeline
//! runs. A [`Paginator`] asks its source for one item more than the page
//! size so it can tell whether a next page exists without a count query.

use crate::error::PageError;

/// Offset and size of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    from: i64,
    count: i64,
}

impl Page {
    /// Create a page, rejecting a non-positive `count` or a negative `from`.
    pub fn new(from: i64, count: i64) -> Result<Self, PageError> {
        if count <= 0 {
            return Err(PageError::InvalidCount(count));
        }
        if from < 0 {
            return Err(PageError::InvalidFrom(from));
        }
        Ok(Self { from, count })
    }

    /// Create a page without validation, for input that is already trusted.
    pub const fn relaxed(from: i64, count: i64) -> Self {
        Self { from, count }
    }

    /// Offset of the first item.
    pub const fn from(&self) -> i64 {
        self.from
    }

    /// Maximum number of items on the page.
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Start paginating over this page.
    pub fn paginator(self) -> Paginator {
        Paginator::new(self)
    }
}

/// Tracks one pass over a page of results.
#[derive(Debug, Clone)]
pub struct Paginator {
    page: Page,
    seen: i64,
}

impl Paginator {
    /// Create a paginator for `page`.
    pub fn new(page: Page) -> Self {
        Self { page, seen: 0 }
    }

    /// The page being iterated.
    pub fn page(&self) -> Page {
        self.page
    }

    /// How many items the source should fetch: one past the page size.
    pub fn fetch_count(&self) -> i64 {
        self.page.count.saturating_add(1)
    }

    /// Yield at most `count` items from `source`.
    pub fn scan<I: IntoIterator>(&mut self, source: I) -> Scan<'_, I::IntoIter> {
        Scan {
            source: source.into_iter(),
            paginator: self,
            done: false,
        }
    }

    /// Whether the source had more items than fit on the page.
    pub fn has_next(&self) -> bool {
        self.seen > self.page.count
    }
}

/// Iterator returned by [`Paginator::scan`].
#[derive(Debug)]
pub struct Scan<'a, I> {
    source: I,
    paginator: &'a mut Paginator,
    done: bool,
}

impl<I: Iterator> Iterator for Scan<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(item) = self.source.next() else {
            self.done = true;
            return None;
        };
        self.paginator.seen += 1;
        if self.paginator.has_next() {
            self.done = true;
            return None;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert_eq!(Page::new(0, 0), Err(PageError::InvalidCount(0)));
        assert_eq!(Page::new(0, -3), Err(PageError::InvalidCount(-3)));
        assert_eq!(Page::new(-1, 10), Err(PageError::InvalidFrom(-1)));
        assert_eq!(Page::new(5, 10).map(|p| (p.from(), p.count())), Ok((5, 10)));
    }

    #[test]
    fn test_relaxed_skips_validation() {
        let page = Page::relaxed(-1, 0);
        assert_eq!(page.from(), -1);
        assert_eq!(page.count(), 0);
    }

    #[test]
    fn test_scan_with_next_page() {
        let mut paginator = Page::new(0, 3).unwrap().paginator();
        assert_eq!(paginator.fetch_count(), 4);

        let items: Vec<i32> = paginator.scan(1..=4).collect();
        assert_eq!(items, vec![1, 2, 3]);
        assert!(paginator.has_next());
    }

    #[test]
    fn test_scan_last_page() {
        let mut paginator = Page::new(6, 3).unwrap().paginator();
        let items: Vec<i32> = paginator.scan([7, 8]).collect();
        assert_eq!(items, vec![7, 8]);
        assert!(!paginator.has_next());
    }

    #[test]
    fn test_scan_exact_fit() {
        let mut paginator = Page::new(0, 2).unwrap().paginator();
        let items: Vec<&str> = paginator.scan(["a", "b"]).collect();
        assert_eq!(items, vec!["a", "b"]);
        assert!(!paginator.has_next());
    }
}
