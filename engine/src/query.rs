//! Query parameter resolution.
//!
//! Turns raw, query-string shaped pagination input into a validated
//! [`PageQuery`]. Resolution has no side effects and never touches the store,
//! so malformed input is rejected before any read happens.

use crate::{error::Result, Error};
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: u64 = 10;

/// Page number used when the caller does not supply one.
pub const DEFAULT_PAGE: u64 = 1;

/// Raw pagination input, as received from a request's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub search: Option<String>,
}

impl PageParams {
    /// Params for an explicit page and size, without a search term.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            limit: Some(limit.to_string()),
            page: Some(page.to_string()),
            search: None,
        }
    }

    /// Attach a search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Resolve into a validated [`PageQuery`].
    pub fn resolve(&self) -> Result<PageQuery> {
        let limit = parse_positive("limit", self.limit.as_deref(), DEFAULT_LIMIT)?;
        let page = parse_positive("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or_else(|| Error::invalid("page", "offset out of range"))?;

        Ok(PageQuery {
            page,
            limit,
            offset,
            search: normalize_search(self.search.as_deref()),
        })
    }
}

/// A validated pagination descriptor.
///
/// Invariants: `limit >= 1`, `page >= 1`, `offset == (page - 1) * limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
    /// Case-insensitive substring filter on question text
    pub search: Option<String>,
}

impl PageQuery {
    /// The same page without a search filter.
    pub fn unfiltered(&self) -> Self {
        Self {
            search: None,
            ..self.clone()
        }
    }

    /// The same page restricted by `term`. A blank term clears the filter.
    pub fn searching(&self, term: &str) -> Self {
        Self {
            search: normalize_search(Some(term)),
            ..self.clone()
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            offset: 0,
            search: None,
        }
    }
}

fn parse_positive(name: &'static str, raw: Option<&str>, default: u64) -> Result<u64> {
    let raw = match raw.map(str::trim) {
        None => return Ok(default),
        Some(raw) => raw,
    };

    match raw.parse::<i64>() {
        Ok(value) if value >= 1 => Ok(value as u64),
        Ok(value) => Err(Error::invalid(
            name,
            format!("must be at least 1, got {}", value),
        )),
        Err(_) => Err(Error::invalid(
            name,
            format!("expected a positive integer, got '{}'", raw),
        )),
    }
}

fn normalize_search(term: Option<&str>) -> Option<String> {
    term.filter(|t| !t.trim().is_empty()).map(str::to_string)
}
