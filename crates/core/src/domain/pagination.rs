// Paginator - page bounds and page-count arithmetic

use crate::domain::job::Job;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Validated page request (page >= 1, limit >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Pages below 1 are clamped to 1; a non-positive limit falls back to the default.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: if limit > 0 { limit } else { DEFAULT_LIMIT },
        }
    }

    /// Build from raw query-string values. Missing or non-numeric values
    /// fall back to the defaults.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            parse_number(page).unwrap_or(DEFAULT_PAGE),
            parse_number(limit).unwrap_or(DEFAULT_LIMIT),
        )
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of records to skip before this page
    pub fn skip(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`; zero records means zero pages
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total - 1) / self.limit + 1
    }

    /// Slice an already filtered and ordered sequence. Out-of-range pages are empty.
    #[cfg(test)]
    pub(crate) fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let skip = usize::try_from(self.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.iter().skip(skip).take(limit).cloned().collect()
    }
}

/// Decimal integers only: fractions (`2.5`) and exponents (`1e1`) are not numbers here
fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)?.parse().ok()
}

/// One page of a filtered, ordered listing plus metadata over the whole filtered set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total_jobs: i64,
    pub num_of_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageRequest::from_raw(None, None);
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 10);
        assert_eq!(page.skip(), 0);
    }

    #[test]
    fn test_fractional_and_exponent_values_fall_back() {
        for raw in ["2.5", "1e1", "0x10", "3 pages"] {
            let page = PageRequest::from_raw(Some(raw), Some(raw));
            assert_eq!(page, PageRequest::default(), "raw={}", raw);
        }

        // Surrounding whitespace and an explicit sign still parse
        let page = PageRequest::from_raw(Some(" 3 "), Some("+5"));
        assert_eq!((page.page(), page.limit()), (3, 5));
        assert_eq!(page.skip(), 10);
    }

    #[test]
    fn test_non_numeric_falls_back() {
        let page = PageRequest::from_raw(Some("abc"), Some("ten"));
        assert_eq!(page, PageRequest::default());

        let page = PageRequest::from_raw(Some(" 3 "), Some("5"));
        assert_eq!(page.page(), 3);
        assert_eq!(page.skip(), 10);
    }

    #[test]
    fn test_page_below_one_is_clamped() {
        for raw in ["0", "-1", "-100"] {
            let page = PageRequest::from_raw(Some(raw), Some("10"));
            assert_eq!(page.skip(), 0, "page {} must not produce a negative skip", raw);
        }
    }

    #[test]
    fn test_non_positive_limit_falls_back() {
        assert_eq!(PageRequest::new(1, 0).limit(), DEFAULT_LIMIT);
        assert_eq!(PageRequest::new(1, -5).limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_skip_uses_page_size() {
        assert_eq!(PageRequest::new(3, 25).skip(), 50);
        assert_eq!(PageRequest::new(i64::MAX, 10).skip(), i64::MAX);
    }

    #[test]
    fn test_total_pages() {
        let page = PageRequest::new(1, 10);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(1), 1);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
        assert_eq!(PageRequest::new(1, 3).total_pages(7), 3);
    }

    #[test]
    fn test_slice_past_the_end_is_empty() {
        let items: Vec<i32> = (1..=12).collect();

        assert_eq!(PageRequest::new(2, 10).slice(&items), vec![11, 12]);
        assert!(PageRequest::new(3, 10).slice(&items).is_empty());
        assert!(PageRequest::new(i64::MAX, 10).slice(&items).is_empty());
    }
}
