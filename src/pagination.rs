/**
 * List Query Parameters
 *
 * Shared pagination/filter/sort parameters for the list endpoints. The
 * page size is capped so a caller cannot request unbounded result sets,
 * and zero or negative inputs are normalized instead of rejected.
 */

use serde::Deserialize;

/// Hard cap on the number of rows a single page may return.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Query parameters accepted by the list endpoints
/// (`?pageNumber=&pageSize=&searchTerm=&sortBy=`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParameters {
    pub page_number: i64,
    pub page_size: i64,
    /// Case-insensitive substring filter
    pub search_term: Option<String>,
    /// Accepted for interface compatibility; newest-first is the only ordering
    pub sort_by: Option<String>,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: None,
            sort_by: None,
        }
    }
}

impl QueryParameters {
    /// Effective page size: clamped to `1..=MAX_PAGE_SIZE`.
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset for the requested page. Page numbers below 1 are treated
    /// as page 1.
    pub fn offset(&self) -> i64 {
        (self.page_number.max(1) - 1).saturating_mul(self.limit())
    }

    /// The search term, if present and non-empty.
    pub fn search(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// SQL `LIKE` pattern for the search term.
    pub fn search_pattern(&self) -> Option<String> {
        self.search().map(|term| format!("%{term}%"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let params = QueryParameters::default();
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.search(), None);
    }

    #[test]
    fn test_page_size_clamped_to_max() {
        let params = QueryParameters {
            page_size: 500,
            ..Default::default()
        };
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_zero_and_negative_inputs_do_not_panic() {
        let params = QueryParameters {
            page_number: 0,
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(params.limit(), 1);
        assert_eq!(params.offset(), 0);

        let params = QueryParameters {
            page_number: -7,
            page_size: -3,
            ..Default::default()
        };
        assert_eq!(params.limit(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_for_later_pages() {
        let params = QueryParameters {
            page_number: 3,
            page_size: 20,
            ..Default::default()
        };
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn test_blank_search_term_is_ignored() {
        let params = QueryParameters {
            search_term: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(params.search(), None);
        assert_eq!(params.search_pattern(), None);
    }

    #[test]
    fn test_search_pattern_wraps_term() {
        let params = QueryParameters {
            search_term: Some("calculus".to_string()),
            ..Default::default()
        };
        assert_eq!(params.search_pattern().as_deref(), Some("%calculus%"));
    }

    #[test]
    fn test_camel_case_query_names() {
        let params: QueryParameters =
            serde_json::from_str(r#"{"pageNumber": 2, "pageSize": 25, "searchTerm": "rust"}"#)
                .unwrap();
        assert_eq!(params.page_number, 2);
        assert_eq!(params.page_size, 25);
        assert_eq!(params.search(), Some("rust"));
    }
}
