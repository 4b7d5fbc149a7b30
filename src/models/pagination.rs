use serde::{Deserialize, Serialize};

/// Pagination block reported alongside order listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Total matching rows
    pub total: i64,
    /// ceil(total / per_page)
    pub total_pages: i64,
    pub current_page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn new(total: i64, current_page: i64, per_page: i64) -> Self {
        let total_pages = if per_page > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };

        Self {
            total,
            total_pages,
            current_page,
            per_page,
        }
    }
}

/// `limit`/`offset` query parameters for simple listings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListQuery {
    /// Defaults: limit 10 (must be > 0), offset 0 (must be >= 0).
    pub fn normalize(&self) -> (i64, i64) {
        let limit = self.limit.filter(|l| *l > 0).unwrap_or(10);
        let offset = self.offset.filter(|o| *o >= 0).unwrap_or(0);
        (limit, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults() {
        assert_eq!(ListQuery::default().normalize(), (10, 0));
        let query = ListQuery {
            limit: Some(-3),
            offset: Some(-1),
        };
        assert_eq!(query.normalize(), (10, 0));
        let query = ListQuery {
            limit: Some(25),
            offset: Some(50),
        };
        assert_eq!(query.normalize(), (25, 50));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::new(0, 1, 10).total_pages, 0);
        assert_eq!(Pagination::new(10, 1, 10).total_pages, 1);
        assert_eq!(Pagination::new(11, 2, 10).total_pages, 2);
        assert_eq!(Pagination::new(25, 1, 10).total_pages, 3);
    }
}
