use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A rentable listing exposed through the search and detail endpoints.
///
/// `price` and `bathrooms` are stored as non-negative reals (SQLite has no
/// decimal type); `bedrooms == 0` denotes a studio. Inactive listings are
/// invisible to every read path.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub neighborhood: String,
    pub borough: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: Option<i32>,
    pub property_type: String,
    pub image_url: Option<String>,
    pub available_date: Option<NaiveDateTime>,
    pub walk_score: Option<i32>,
    pub transit_score: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Data for the administrative insert path.
#[derive(Clone, Debug, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub neighborhood: String,
    pub borough: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: Option<i32>,
    pub property_type: String,
    pub image_url: Option<String>,
    pub available_date: Option<NaiveDateTime>,
    pub walk_score: Option<i32>,
    pub transit_score: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewProperty {
    /// Normalizes the free-text fields, trimming whitespace and dropping
    /// empty optionals.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.address = self.address.trim().to_string();
        self.neighborhood = self.neighborhood.trim().to_string();
        self.borough = self.borough.trim().to_string();
        self.property_type = self.property_type.trim().to_string();
        self.description = self
            .description
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.image_url = self
            .image_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }
}
