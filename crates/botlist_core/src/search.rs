//! Bot search query and response models.

use crate::{Bot, Validate};
use botlist_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// The largest `limit` the platform honors; larger requests are capped
/// server-side.
pub const SEARCH_LIMIT_MAX: u64 = 500;

/// Parameters for a search request.
///
/// Every member is optional; an empty query returns the default first page.
/// The platform caps `limit` at [`SEARCH_LIMIT_MAX`] regardless of the
/// requested value, so the builder clamps to keep a locally built query in
/// agreement with what the server will honor.
///
/// # Examples
///
/// ```
/// use botlist_core::{SearchQuery, SortDirection};
///
/// let query = SearchQuery::builder()
///     .limit(50)
///     .filter("username", "luca")
///     .sort("points", SortDirection::Descending)
///     .build();
/// assert_eq!(query.sort().as_deref(), Some("-points"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SearchQuery {
    /// Bots to return. Capped at 500 by the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<u64>,
    /// Bots to skip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    offset: Option<u64>,
    /// Search string in the form `field: value field2: value2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    /// Field to sort by. A `-` prefix reverses the order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
    /// Comma-separated list of fields to project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fields: Option<String>,
}

impl SearchQuery {
    /// Creates a new search query builder.
    pub fn builder() -> SearchQueryBuilder {
        SearchQueryBuilder::default()
    }

    /// The populated members as key/value pairs, ready for a client's
    /// query-string encoder.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(fields) = &self.fields {
            pairs.push(("fields", fields.clone()));
        }
        pairs
    }
}

/// Sort order for a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest values first.
    #[default]
    Ascending,
    /// Largest values first: rendered as a `-` prefix on the sort field.
    Descending,
}

/// Builder for `SearchQuery`.
#[derive(Debug, Default)]
pub struct SearchQueryBuilder {
    limit: Option<u64>,
    offset: Option<u64>,
    filters: Vec<(String, String)>,
    sort: Option<(String, SortDirection)>,
    projection: Vec<String>,
}

impl SearchQueryBuilder {
    /// Sets the number of bots to return, clamped to [`SEARCH_LIMIT_MAX`].
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit.min(SEARCH_LIMIT_MAX));
        self
    }

    /// Sets the number of bots to skip.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds a `field: value` pair to the search string.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Sets the field to sort by.
    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some((field.into(), direction));
        self
    }

    /// Adds a field to the projection list.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.projection.push(name.into());
        self
    }

    /// Builds the query.
    pub fn build(self) -> SearchQuery {
        let search = if self.filters.is_empty() {
            None
        } else {
            Some(
                self.filters
                    .iter()
                    .map(|(field, value)| format!("{field}: {value}"))
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        };
        let sort = self.sort.map(|(field, direction)| match direction {
            SortDirection::Ascending => field,
            SortDirection::Descending => format!("-{field}"),
        });
        let fields = if self.projection.is_empty() {
            None
        } else {
            Some(self.projection.join(","))
        };
        SearchQuery {
            limit: self.limit,
            offset: self.offset,
            search,
            sort,
            fields,
        }
    }
}

/// A paged search result.
///
/// `results` is ordered and carries no deduplication guarantee. `count` is
/// the length of `results`; `total` is the server-side number of matches and
/// may exceed `count` when the page is not the whole result set.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SearchResponse {
    /// The matching bots, in server order.
    results: Vec<Bot>,
    /// The limit the server applied.
    limit: u64,
    /// The offset the server applied.
    offset: u64,
    /// The length of `results`.
    count: u64,
    /// Total bots matching the search server-side.
    total: u64,
}

impl Validate for SearchResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        let results = self.results.len() as u64;
        if self.count != results {
            return Err(ValidationError::new(
                ValidationErrorKind::ResultCountMismatch {
                    count: self.count,
                    results,
                },
            ));
        }
        if self.total < self.count {
            return Err(ValidationError::new(ValidationErrorKind::TotalBelowCount {
                total: self.total,
                count: self.count,
            }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamps_to_server_cap() {
        let query = SearchQuery::builder().limit(1000).build();
        assert_eq!(query.limit(), &Some(500));

        let query = SearchQuery::builder().limit(50).build();
        assert_eq!(query.limit(), &Some(50));
    }

    #[test]
    fn test_filters_render_space_separated() {
        let query = SearchQuery::builder()
            .filter("username", "luca")
            .filter("tags", "music")
            .build();
        assert_eq!(
            query.search().as_deref(),
            Some("username: luca tags: music")
        );
    }

    #[test]
    fn test_sort_direction_prefix() {
        let ascending = SearchQuery::builder()
            .sort("points", SortDirection::Ascending)
            .build();
        assert_eq!(ascending.sort().as_deref(), Some("points"));

        let descending = SearchQuery::builder()
            .sort("points", SortDirection::Descending)
            .build();
        assert_eq!(descending.sort().as_deref(), Some("-points"));
    }

    #[test]
    fn test_projection_joins_with_commas() {
        let query = SearchQuery::builder()
            .field("id")
            .field("username")
            .field("points")
            .build();
        assert_eq!(query.fields().as_deref(), Some("id,username,points"));
    }

    #[test]
    fn test_to_pairs_skips_absent_members() {
        let query = SearchQuery::builder().limit(25).offset(50).build();
        assert_eq!(
            query.to_pairs(),
            vec![("limit", "25".to_string()), ("offset", "50".to_string())]
        );

        assert!(SearchQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn test_empty_query_serializes_empty() {
        let value = serde_json::to_value(SearchQuery::default()).unwrap();
        assert!(value.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_response_count_mismatch() {
        let response = SearchResponseBuilder::default()
            .results(Vec::<Bot>::new())
            .limit(50_u64)
            .offset(0_u64)
            .count(1_u64)
            .total(4_u64)
            .build()
            .unwrap();
        let err = response.validate().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::ResultCountMismatch {
                count: 1,
                results: 0
            }
        );
    }

    #[test]
    fn test_response_total_below_count() {
        let json = r#"{
            "results": [{
                "defAvatar": "6debd47ed13483642cf09e832ed0bc1b",
                "shortdesc": "An example bot",
                "prefix": "-",
                "lib": "",
                "clientid": "264811613708746752",
                "id": "264811613708746752",
                "discriminator": "1375",
                "username": "Luca",
                "date": "2017-04-26T18:08:17.125Z",
                "monthlyPoints": 32,
                "points": 1000,
                "certifiedBot": false,
                "owners": ["129908908096487424"],
                "tags": ["music"]
            }],
            "limit": 50,
            "offset": 0,
            "count": 1,
            "total": 0
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let err = response.validate().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::TotalBelowCount { total: 0, count: 1 }
        );
    }

    #[test]
    fn test_empty_response_validates() {
        let response = SearchResponseBuilder::default()
            .results(Vec::<Bot>::new())
            .limit(50_u64)
            .offset(0_u64)
            .count(0_u64)
            .total(10_u64)
            .build()
            .unwrap();
        assert!(response.validate().is_ok());
    }
}
