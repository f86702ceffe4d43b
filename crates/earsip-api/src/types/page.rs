//! Paginated list queries and responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Query string for list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Records per page.
    pub limit: u32,
    /// Free-text filter; omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    /// Creates a query for `page` without a search term.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            search: None,
        }
    }

    /// Sets the search term; blank terms are dropped.
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

/// One page of a list resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Total number of pages, at least 1.
    pub pages: u32,
    /// Total record count, when the service reports it.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// Creates a page, clamping page numbers to at least 1.
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, pages: u32) -> Self {
        Self {
            items,
            page: page.max(1),
            pages: pages.max(1),
            total: None,
        }
    }

    /// An empty first page.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), 1, 1)
    }

    /// Returns true if the page has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageRepr<T> {
    List(Vec<T>),
    Envelope(Envelope<T>),
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(
        default = "Vec::new",
        alias = "documents",
        alias = "users",
        alias = "data",
        alias = "inbox",
        alias = "outbox"
    )]
    items: Vec<T>,
    #[serde(default)]
    pagination: Option<Pagination>,
    #[serde(default, rename = "currentPage")]
    current_page: Option<u32>,
    #[serde(default, rename = "totalPages")]
    total_pages: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Deserialize)]
struct Pagination {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default, alias = "totalPages")]
    pages: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match PageRepr::<T>::deserialize(deserializer)? {
            PageRepr::List(items) => Self::new(items, 1, 1),
            PageRepr::Envelope(env) => {
                let (page, pages, total) = match env.pagination {
                    Some(p) => (p.page, p.pages, p.total.or(env.total)),
                    None => (env.current_page, env.total_pages, env.total),
                };
                let mut out = Self::new(env.items, page.unwrap_or(1), pages.unwrap_or(1));
                out.total = total;
                out
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        n: u32,
    }

    #[test]
    fn test_documents_envelope() {
        let page: Page<Row> = serde_json::from_str(
            r#"{"documents":[{"n":1},{"n":2}],"pagination":{"page":2,"pages":5,"total":42}}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 5);
        assert_eq!(page.total, Some(42));
    }

    #[test]
    fn test_data_envelope() {
        let page: Page<Row> =
            serde_json::from_str(r#"{"data":[{"n":7}],"currentPage":3,"totalPages":4}"#).unwrap();
        assert_eq!(page.items, vec![Row { n: 7 }]);
        assert_eq!((page.page, page.pages), (3, 4));
    }

    #[test]
    fn test_users_envelope_and_zero_pages() {
        let page: Page<Row> =
            serde_json::from_str(r#"{"users":[],"pagination":{"page":1,"pages":0}}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn test_bare_array() {
        let page: Page<Row> = serde_json::from_str(r#"[{"n":1}]"#).unwrap();
        assert_eq!((page.page, page.pages), (1, 1));
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_query_skips_blank_search() {
        let query = ListQuery::new(1, 10).with_search("   ");
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("search").is_none());

        let query = ListQuery::new(2, 10).with_search(" undangan ");
        assert_eq!(query.search.as_deref(), Some("undangan"));
    }
}
