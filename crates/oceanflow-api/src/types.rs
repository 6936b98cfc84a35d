//! Types shared across resource families

use serde::{Deserialize, Serialize};

/// Page requested when the caller does not pick one
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the caller does not pick one
pub const DEFAULT_PER_PAGE: i64 = 25;
/// Hard cap the API places on page size
pub const MAX_PER_PAGE: i64 = 200;

/// Page selection for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page: i64,
    pub per_page: i64,
}

impl ListOptions {
    /// Resolve caller-supplied pagination to effective values.
    ///
    /// Missing or non-positive values fall back to the defaults; `per_page`
    /// is clamped to the API maximum of 200.
    pub fn resolve(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p,
            _ => DEFAULT_PAGE,
        };
        let per_page = match per_page {
            Some(p) if p > 0 => p.min(MAX_PER_PAGE),
            _ => DEFAULT_PER_PAGE,
        };
        Self { page, per_page }
    }

    /// Number of pages needed to cover `total` entries at this page size.
    ///
    /// A hand-built value with a non-positive `per_page` counts as one
    /// entry per page rather than dividing by zero.
    pub fn pages(&self, total: i64) -> i64 {
        let per_page = self.per_page.max(1);
        (total + per_page - 1) / per_page
    }

    pub(crate) fn query(&self) -> String {
        format!("page={}&per_page={}", self.page, self.per_page)
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub total: i64,
}

/// Navigation links attached to list responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<PageLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// Region block embedded in resource payloads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

/// Long-running operation record returned by action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub resource_id: i64,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub region_slug: String,
}

// Single-action envelope shared by every `.../actions` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ActionRoot {
    pub action: Action,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_when_absent() {
        let opts = ListOptions::resolve(None, None);
        assert_eq!(opts.page, 1);
        assert_eq!(opts.per_page, 25);
    }

    #[test]
    fn test_resolve_defaults_when_non_positive() {
        let opts = ListOptions::resolve(Some(0), Some(-5));
        assert_eq!(opts.page, 1);
        assert_eq!(opts.per_page, 25);
    }

    #[test]
    fn test_resolve_keeps_valid_values() {
        let opts = ListOptions::resolve(Some(3), Some(50));
        assert_eq!(opts.page, 3);
        assert_eq!(opts.per_page, 50);
    }

    #[test]
    fn test_resolve_clamps_per_page() {
        let opts = ListOptions::resolve(Some(1), Some(500));
        assert_eq!(opts.per_page, 200);
    }

    #[test]
    fn test_pages_rounds_up() {
        let opts = ListOptions::resolve(None, None);
        assert_eq!(opts.pages(0), 0);
        assert_eq!(opts.pages(25), 1);
        assert_eq!(opts.pages(26), 2);
        assert_eq!(opts.pages(51), 3);
    }

    #[test]
    fn test_pages_tolerates_non_positive_per_page() {
        let opts = ListOptions {
            page: 1,
            per_page: 0,
        };
        assert_eq!(opts.pages(10), 10);

        let opts = ListOptions {
            page: 1,
            per_page: -3,
        };
        assert_eq!(opts.pages(0), 0);
    }

    #[test]
    fn test_query_format() {
        let opts = ListOptions::resolve(Some(2), Some(10));
        assert_eq!(opts.query(), "page=2&per_page=10");
    }

    #[test]
    fn test_action_from_api_json() {
        let action: Action = serde_json::from_str(
            r#"{
                "id": 36804636,
                "status": "in-progress",
                "type": "attach_volume",
                "started_at": "2020-03-01T21:36:20Z",
                "completed_at": null,
                "resource_id": 3164444,
                "resource_type": "volume",
                "region_slug": "nyc1"
            }"#,
        )
        .unwrap();
        assert_eq!(action.id, 36804636);
        assert_eq!(action.kind, "attach_volume");
        assert_eq!(action.region_slug, "nyc1");
        assert!(action.completed_at.is_none());
    }
}
