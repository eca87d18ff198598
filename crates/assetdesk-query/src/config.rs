//! Query configuration.
//!
//! The sentinel strings and page-size defaults are shared by every entity
//! kind. They live here, in one value, so the four list endpoints cannot
//! drift apart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Multi-select value that disables a state or category filter. Matched exactly.
pub const ALL_SENTINEL: &str = "All";

/// Single-value type filter that disables the dimension. Matched ignoring case.
pub const TYPE_SENTINEL: &str = "all";

/// Page size used when neither the request nor the configuration names one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Settings consulted by the pipeline.
///
/// Every field has a default, so partial YAML documents are valid:
///
/// ```
/// use assetdesk_query::QueryConfig;
///
/// let config: QueryConfig = serde_yaml::from_str("page_sizes:\n  user: 25\n").unwrap();
/// assert_eq!(config.page_size_for("user"), 25);
/// assert_eq!(config.page_size_for("asset"), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Page size for entities without an override.
    pub default_page_size: u32,

    /// Per-entity page size overrides, keyed by schema entity name.
    pub page_sizes: BTreeMap<String, u32>,

    /// Upper bound on requested page sizes. Unbounded when absent.
    pub max_page_size: Option<u32>,

    /// Multi-select "no filter" sentinel.
    pub all_sentinel: String,

    /// Single-value type "no filter" sentinel.
    pub type_sentinel: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_sizes: BTreeMap::new(),
            max_page_size: None,
            all_sentinel: ALL_SENTINEL.to_string(),
            type_sentinel: TYPE_SENTINEL.to_string(),
        }
    }
}

impl QueryConfig {
    /// Page size used for `entity` when the request leaves it open.
    pub fn page_size_for(&self, entity: &str) -> u32 {
        self.page_sizes
            .get(entity)
            .copied()
            .unwrap_or(self.default_page_size)
            .max(1)
    }

    /// Overlays `other` onto this configuration.
    ///
    /// Scalar fields are taken from `other` when they differ from the
    /// built-in default; page size overrides are merged key by key.
    pub fn merge(&mut self, other: QueryConfig) {
        let defaults = QueryConfig::default();
        if other.default_page_size != defaults.default_page_size {
            self.default_page_size = other.default_page_size;
        }
        self.page_sizes.extend(other.page_sizes);
        if other.max_page_size.is_some() {
            self.max_page_size = other.max_page_size;
        }
        if other.all_sentinel != defaults.all_sentinel {
            self.all_sentinel = other.all_sentinel;
        }
        if other.type_sentinel != defaults.type_sentinel {
            self.type_sentinel = other.type_sentinel;
        }
    }
}
