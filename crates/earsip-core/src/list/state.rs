//! Generic list state with request tickets.

use earsip_api::{ListQuery, Page};
use tracing::debug;

/// Identifies one fetch issued by a [`ListState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// What [`ListState::apply`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUpdate<E> {
    /// Rows replaced with the response.
    Updated,
    /// Response belonged to an older request or a detached card; dropped.
    Stale,
    /// The fetch failed; previous rows are kept.
    Failed(E),
}

/// Rows, paging and search term of one list card.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    page: u32,
    pages: u32,
    total: Option<u64>,
    limit: u32,
    search: String,
    loading: bool,
    loaded: bool,
    issued: u64,
    detached: bool,
}

impl<T> ListState<T> {
    /// Creates an empty list showing `limit` rows per page.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            pages: 1,
            total: None,
            limit: limit.max(1),
            search: String::new(),
            loading: false,
            loaded: false,
            issued: 0,
            detached: false,
        }
    }

    /// Rows of the current page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Total pages, at least 1.
    #[must_use]
    pub const fn pages(&self) -> u32 {
        self.pages
    }

    /// Total rows, when the service reports it.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Rows per page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Current search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns true while a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns true once a fetch succeeded with no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded && self.items.is_empty()
    }

    /// Returns true after the owning card went away.
    #[must_use]
    pub const fn is_detached(&self) -> bool {
        self.detached
    }

    /// Returns true if `page` is a valid target.
    #[must_use]
    pub const fn can_go(&self, page: u32) -> bool {
        page >= 1 && page <= self.pages
    }

    /// Returns true if a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.can_go(self.page.saturating_sub(1))
    }

    /// Returns true if a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.can_go(self.page.saturating_add(1))
    }

    /// Display number of the row at `index` on the current page.
    #[must_use]
    pub fn row_number(&self, index: usize) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit) + index as u64 + 1
    }

    /// Updates the search term without fetching.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Starts a fetch of `page`.
    ///
    /// Returns `None` (no-op) for out-of-range pages and detached lists.
    pub fn request(&mut self, page: u32) -> Option<(Ticket, ListQuery)> {
        if self.detached || !self.can_go(page) {
            debug!("Ignoring request for page {} of {}", page, self.pages);
            return None;
        }
        Some(self.issue(page))
    }

    /// Refetches the current page (after a mutation).
    pub fn refresh(&mut self) -> Option<(Ticket, ListQuery)> {
        if self.detached {
            return None;
        }
        let page = self.page.clamp(1, self.pages);
        Some(self.issue(page))
    }

    /// Fetches the first page with the current search term.
    pub fn submit_search(&mut self) -> Option<(Ticket, ListQuery)> {
        if self.detached {
            return None;
        }
        Some(self.issue(1))
    }

    fn issue(&mut self, page: u32) -> (Ticket, ListQuery) {
        self.issued += 1;
        self.loading = true;
        let query = ListQuery::new(page, self.limit).with_search(&self.search);
        (Ticket(self.issued), query)
    }

    /// Feeds back the result of the fetch identified by `ticket`.
    pub fn apply<E>(&mut self, ticket: Ticket, result: Result<Page<T>, E>) -> ListUpdate<E> {
        if self.detached || ticket.0 != self.issued {
            debug!("Dropping stale list response {:?}", ticket);
            return ListUpdate::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.page = page.page;
                self.pages = page.pages.max(1);
                self.total = page.total;
                self.loaded = true;
                ListUpdate::Updated
            }
            Err(e) => ListUpdate::Failed(e),
        }
    }

    /// Stops accepting responses; called when the card is unmounted.
    pub fn detach(&mut self) {
        self.detached = true;
        self.loading = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn page_of(range: std::ops::RangeInclusive<u32>, page: u32, pages: u32) -> Page<u32> {
        Page::new(range.collect(), page, pages)
    }

    #[test]
    fn test_first_fetch() {
        let mut list = ListState::<u32>::new(10);
        assert!(!list.is_empty());
        let (ticket, query) = list.request(1).unwrap();
        assert_eq!(query, ListQuery::new(1, 10));
        assert!(list.is_loading());

        let update = list.apply::<String>(ticket, Ok(page_of(1..=10, 1, 3)));
        assert_eq!(update, ListUpdate::Updated);
        assert!(!list.is_loading());
        assert_eq!(list.pages(), 3);
        assert!(list.has_next());
        assert!(!list.has_prev());
    }

    #[test]
    fn test_empty_result() {
        let mut list = ListState::<u32>::new(10);
        let (ticket, _) = list.request(1).unwrap();
        list.apply::<String>(ticket, Ok(Page::empty()));
        assert!(list.is_empty());
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut list = ListState::<u32>::new(10);
        let (first, _) = list.request(1).unwrap();
        list.apply::<String>(first, Ok(page_of(1..=10, 1, 3)));

        let (slow, _) = list.request(2).unwrap();
        let (fast, _) = list.request(3).unwrap();
        assert_eq!(list.apply::<String>(fast, Ok(page_of(21..=25, 3, 3))), ListUpdate::Updated);
        assert_eq!(list.apply::<String>(slow, Ok(page_of(11..=20, 2, 3))), ListUpdate::Stale);
        assert_eq!(list.page(), 3);
        assert_eq!(list.items()[0], 21);
    }

    #[test]
    fn test_failure_keeps_rows() {
        let mut list = ListState::<u32>::new(10);
        let (ticket, _) = list.request(1).unwrap();
        list.apply::<String>(ticket, Ok(page_of(1..=10, 1, 2)));

        let (ticket, _) = list.request(2).unwrap();
        let update = list.apply(ticket, Err("Gagal memuat surat masuk".to_string()));
        assert_eq!(update, ListUpdate::Failed("Gagal memuat surat masuk".to_string()));
        assert_eq!(list.page(), 1);
        assert_eq!(list.items().len(), 10);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_detach_drops_in_flight() {
        let mut list = ListState::<u32>::new(10);
        let (ticket, _) = list.request(1).unwrap();
        list.detach();
        assert_eq!(list.apply::<String>(ticket, Ok(page_of(1..=3, 1, 1))), ListUpdate::Stale);
        assert!(list.items().is_empty());
        assert!(list.request(1).is_none());
        assert!(list.refresh().is_none());
    }

    #[test]
    fn test_search_resets_to_first_page() {
        let mut list = ListState::<u32>::new(10);
        let (ticket, _) = list.request(1).unwrap();
        list.apply::<String>(ticket, Ok(page_of(1..=10, 1, 4)));
        let (ticket, _) = list.request(3).unwrap();
        list.apply::<String>(ticket, Ok(page_of(21..=30, 3, 4)));

        list.set_search("undangan");
        let (_, query) = list.submit_search().unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.search.as_deref(), Some("undangan"));
    }

    #[test]
    fn test_refresh_clamps_to_known_pages() {
        let mut list = ListState::<u32>::new(10);
        let (ticket, _) = list.request(1).unwrap();
        list.apply::<String>(ticket, Ok(page_of(1..=1, 2, 1)));
        let (_, query) = list.refresh().unwrap();
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_row_numbers() {
        let mut list = ListState::<u32>::new(10);
        let (ticket, _) = list.request(1).unwrap();
        list.apply::<String>(ticket, Ok(page_of(1..=10, 1, 3)));
        let (ticket, _) = list.request(3).unwrap();
        list.apply::<String>(ticket, Ok(page_of(21..=22, 3, 3)));
        assert_eq!(list.row_number(0), 21);
        assert_eq!(list.row_number(1), 22);
    }

    proptest! {
        #[test]
        fn prop_requests_outside_bounds_are_noops(pages in 1u32..50, target in 0u32..60) {
            let mut list = ListState::<u32>::new(10);
            let (ticket, _) = list.request(1).unwrap();
            list.apply::<String>(ticket, Ok(Page::new(Vec::new(), 1, pages)));

            let issued = list.request(target);
            if target == 0 || target > pages {
                prop_assert!(issued.is_none());
                prop_assert!(!list.is_loading());
            } else {
                let (_, query) = issued.unwrap();
                prop_assert_eq!(query.page, target);
                prop_assert_eq!(query.limit, 10);
            }
        }

        #[test]
        fn prop_row_numbers_follow_offset(page in 1u32..100, limit in 1u32..50, index in 0usize..50) {
            let mut list = ListState::<u32>::new(limit);
            let (ticket, _) = list.request(1).unwrap();
            list.apply::<String>(ticket, Ok(Page::new(Vec::new(), page, page)));
            let expected = u64::from(page - 1) * u64::from(limit) + index as u64 + 1;
            prop_assert_eq!(list.row_number(index), expected);
        }
    }
}
