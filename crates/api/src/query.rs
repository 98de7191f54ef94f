//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default page size for post listings.
pub const POSTS_PAGE_SIZE: i64 = 10;

/// Default page size for the media library.
pub const MEDIA_PAGE_SIZE: i64 = 20;

/// Pagination parameters (`?page=&size=`), `page` is 0-based.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    /// Resolve to `(page, size)` with negative pages clamped to 0 and the
    /// size clamped to `1..=MAX_PAGE_SIZE`.
    pub fn resolve(&self, default_size: i64) -> (i64, i64) {
        let page = self.page.unwrap_or(0).max(0);
        let size = self.size.unwrap_or(default_size).clamp(1, MAX_PAGE_SIZE);
        (page, size)
    }

    /// `(page, size, limit, offset)` ready for a repository call. The offset
    /// saturates, so an absurd page is simply past the end.
    pub fn limit_offset(&self, default_size: i64) -> (i64, i64, i64, i64) {
        let (page, size) = self.resolve(default_size);
        (page, size, size, page.saturating_mul(size))
    }
}

/// `?category=` filter on the public post endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

/// `?category=&hashtag=` filter on the public post listing.
#[derive(Debug, Default, Deserialize)]
pub struct PostFilter {
    pub category: Option<String>,
    pub hashtag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_clamping() {
        assert_eq!(PageParams::default().resolve(10), (0, 10));
        let p = PageParams {
            page: Some(-3),
            size: Some(1000),
        };
        assert_eq!(p.resolve(10), (0, MAX_PAGE_SIZE));
        let p = PageParams {
            page: Some(2),
            size: Some(0),
        };
        assert_eq!(p.limit_offset(20), (2, 1, 1, 2));
    }

    #[test]
    fn huge_page_saturates_offset() {
        let p = PageParams {
            page: Some(i64::MAX),
            size: Some(10),
        };
        assert_eq!(p.limit_offset(10), (i64::MAX, 10, 10, i64::MAX));
    }
}
