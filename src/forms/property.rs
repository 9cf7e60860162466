use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::property::NewProperty;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of the administrative listing insert.
pub struct CreatePropertyForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "neighborhood is required"))]
    pub neighborhood: String,
    #[validate(length(min = 1, message = "borough is required"))]
    pub borough: String,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    #[validate(range(min = 0, message = "bedrooms cannot be negative"))]
    pub bedrooms: i32,
    #[validate(range(min = 0.0, message = "bathrooms cannot be negative"))]
    pub bathrooms: f64,
    pub square_feet: Option<i32>,
    #[validate(length(min = 1, message = "propertyType is required"))]
    pub property_type: String,
    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
    pub available_date: Option<NaiveDateTime>,
    #[validate(range(min = 0, max = 100))]
    pub walk_score: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub transit_score: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<CreatePropertyForm> for NewProperty {
    fn from(form: CreatePropertyForm) -> Self {
        NewProperty {
            title: form.title,
            description: form.description,
            address: form.address,
            neighborhood: form.neighborhood,
            borough: form.borough,
            price: form.price,
            bedrooms: form.bedrooms,
            bathrooms: form.bathrooms,
            square_feet: form.square_feet,
            property_type: form.property_type,
            image_url: form.image_url,
            available_date: form.available_date,
            walk_score: form.walk_score,
            transit_score: form.transit_score,
            latitude: form.latitude,
            longitude: form.longitude,
        }
        .normalized()
    }
}
