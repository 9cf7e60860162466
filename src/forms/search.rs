//! Filter parser: turns raw query-string values into a typed search request.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::filters::{SearchFilters, SortBy, SortOrder};
use crate::dto::property::PropertySearchRequest;

pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Cap on `limit` so a single request cannot enumerate the whole table.
pub const MAX_PAGE_SIZE: usize = 100;

/// Raw query-string parameters as the client sent them. Everything arrives
/// as a string; unknown keys are dropped by serde, absent keys stay `None`.
#[derive(Debug, Default, Deserialize)]
pub struct PropertySearchParams {
    pub location: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
    /// Comma-separated list; multiple types are OR-ed together.
    #[serde(rename = "propertyType")]
    pub property_type: Option<String>,
    pub borough: Option<String>,
    pub neighborhood: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchParamsError {
    #[error("`{0}` is not a valid number")]
    InvalidNumber(&'static str),

    #[error("`{0}` must be at least 1")]
    BelowMinimum(&'static str),

    #[error("`limit` cannot exceed {MAX_PAGE_SIZE}")]
    PageSizeTooLarge,

    #[error("unknown sort field `{0}`")]
    InvalidSortBy(String),

    #[error("unknown sort order `{0}`")]
    InvalidSortOrder(String),
}

fn parse_price(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<f64>, SearchParamsError> {
    value
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or(SearchParamsError::InvalidNumber(field))
        })
        .transpose()
}

fn parse_count(
    field: &'static str,
    value: Option<String>,
    default: usize,
) -> Result<usize, SearchParamsError> {
    let Some(value) = value else {
        return Ok(default);
    };
    let count = value
        .trim()
        .parse::<usize>()
        .map_err(|_| SearchParamsError::InvalidNumber(field))?;
    if count < 1 {
        return Err(SearchParamsError::BelowMinimum(field));
    }
    Ok(count)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl PropertySearchParams {
    /// Validates and normalizes the raw parameters. Pure; never touches
    /// storage, so a coercion failure costs no database round trip.
    pub fn parse(self) -> Result<PropertySearchRequest, SearchParamsError> {
        let min_price = parse_price("minPrice", self.min_price)?;
        let max_price = parse_price("maxPrice", self.max_price)?;

        let bedrooms = self
            .bedrooms
            .map(|v| {
                v.trim()
                    .parse::<i32>()
                    .ok()
                    .filter(|n| *n >= 0)
                    .ok_or(SearchParamsError::InvalidNumber("bedrooms"))
            })
            .transpose()?;

        let page = parse_count("page", self.page, 1)?;
        let limit = parse_count("limit", self.limit, DEFAULT_PAGE_SIZE)?;
        if limit > MAX_PAGE_SIZE {
            return Err(SearchParamsError::PageSizeTooLarge);
        }

        let sort_by = match self.sort_by.as_deref().map(str::trim) {
            None => SortBy::default(),
            Some(v) => {
                SortBy::parse(v).ok_or_else(|| SearchParamsError::InvalidSortBy(v.to_string()))?
            }
        };
        let sort_order = match self.sort_order.as_deref().map(str::trim) {
            None => SortOrder::default(),
            Some(v) => SortOrder::parse(v)
                .ok_or_else(|| SearchParamsError::InvalidSortOrder(v.to_string()))?,
        };

        let property_types = self
            .property_type
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(PropertySearchRequest {
            filters: SearchFilters {
                location: non_empty(self.location),
                min_price,
                max_price,
                bedrooms,
                property_types,
                borough: non_empty(self.borough),
                neighborhood: non_empty(self.neighborhood),
            },
            sort_by,
            sort_order,
            page,
            limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_everything_is_absent() {
        let request = PropertySearchParams::default().parse().unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(request.sort_by, SortBy::Newest);
        assert_eq!(request.sort_order, SortOrder::Desc);
        assert_eq!(request.filters, SearchFilters::default());
    }

    #[test]
    fn numeric_coercion_failure_is_rejected() {
        let params = PropertySearchParams {
            bedrooms: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.parse().unwrap_err(),
            SearchParamsError::InvalidNumber("bedrooms")
        );

        let params = PropertySearchParams {
            min_price: Some("2,000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.parse().unwrap_err(),
            SearchParamsError::InvalidNumber("minPrice")
        );
    }

    #[test]
    fn page_and_limit_must_be_at_least_one() {
        let params = PropertySearchParams {
            page: Some("0".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.parse().unwrap_err(),
            SearchParamsError::BelowMinimum("page")
        );

        let params = PropertySearchParams {
            limit: Some("-3".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.parse().unwrap_err(),
            SearchParamsError::InvalidNumber("limit")
        );
    }

    #[test]
    fn limit_is_capped() {
        let params = PropertySearchParams {
            limit: Some("101".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.parse().unwrap_err(),
            SearchParamsError::PageSizeTooLarge
        );

        let params = PropertySearchParams {
            limit: Some("100".to_string()),
            ..Default::default()
        };
        assert_eq!(params.parse().unwrap().limit, 100);
    }

    #[test]
    fn sort_values_outside_the_enumerated_sets_fail() {
        let params = PropertySearchParams {
            sort_by: Some("sqft".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.parse().unwrap_err(),
            SearchParamsError::InvalidSortBy("sqft".to_string())
        );

        let params = PropertySearchParams {
            sort_order: Some("up".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.parse().unwrap_err(),
            SearchParamsError::InvalidSortOrder("up".to_string())
        );
    }

    #[test]
    fn property_type_splits_into_ored_values() {
        let params = PropertySearchParams {
            property_type: Some("condo, apartment,".to_string()),
            ..Default::default()
        };
        let request = params.parse().unwrap();
        assert_eq!(
            request.filters.property_types,
            vec!["condo".to_string(), "apartment".to_string()]
        );
    }

    #[test]
    fn filters_are_trimmed_and_blank_values_dropped() {
        let params = PropertySearchParams {
            location: Some("  Astoria ".to_string()),
            borough: Some("   ".to_string()),
            min_price: Some(" 1500 ".to_string()),
            ..Default::default()
        };
        let request = params.parse().unwrap();
        assert_eq!(request.filters.location.as_deref(), Some("Astoria"));
        assert_eq!(request.filters.borough, None);
        assert_eq!(request.filters.min_price, Some(1500.0));
    }
}
