use serde::{Deserialize, Serialize};

/// Ephemeral search constraints; every field is optional and absence means
/// "no constraint". Multiple property types are OR-ed together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free-text match against neighborhood, borough or address.
    pub location: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Exact bedroom count (0 = studio).
    pub bedrooms: Option<i32>,
    /// Exact property types; empty means any.
    pub property_types: Vec<String>,
    pub borough: Option<String>,
    pub neighborhood: Option<String>,
}

impl SearchFilters {
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn price_between(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn bedrooms(mut self, bedrooms: i32) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    pub fn property_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.property_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn borough(mut self, borough: impl Into<String>) -> Self {
        self.borough = Some(borough.into());
        self
    }

    pub fn neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }
}

/// Column a search result set can be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Price,
    #[default]
    Newest,
    Bedrooms,
}

impl SortBy {
    /// Parses the `sortBy` query value; anything outside the enumerated set
    /// is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price" => Some(Self::Price),
            "newest" => Some(Self::Newest),
            "bedrooms" => Some(Self::Bedrooms),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}
