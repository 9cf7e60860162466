use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::property::{NewProperty as DomainNewProperty, Property as DomainProperty};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::properties)]
/// Diesel model for [`crate::domain::property::Property`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::properties)]
/// Insertable form of [`Property`]. `id` and `created_at` come from the
/// database; new listings always start out active.
pub struct NewProperty<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub address: &'a str,
    pub neighborhood: &'a str,
    pub borough: &'a str,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: Option<i32>,
    pub property_type: &'a str,
    pub image_url: Option<&'a str>,
    pub available_date: Option<NaiveDateTime>,
    pub walk_score: Option<i32>,
    pub transit_score: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
}

impl From<Property> for DomainProperty {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            title: property.title,
            description: property.description,
            address: property.address,
            neighborhood: property.neighborhood,
            borough: property.borough,
            price: property.price,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            square_feet: property.square_feet,
            property_type: property.property_type,
            image_url: property.image_url,
            available_date: property.available_date,
            walk_score: property.walk_score,
            transit_score: property.transit_score,
            latitude: property.latitude,
            longitude: property.longitude,
            is_active: property.is_active,
            created_at: property.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProperty> for NewProperty<'a> {
    fn from(property: &'a DomainNewProperty) -> Self {
        Self {
            title: property.title.as_str(),
            description: property.description.as_deref(),
            address: property.address.as_str(),
            neighborhood: property.neighborhood.as_str(),
            borough: property.borough.as_str(),
            price: property.price,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            square_feet: property.square_feet,
            property_type: property.property_type.as_str(),
            image_url: property.image_url.as_deref(),
            available_date: property.available_date,
            walk_score: property.walk_score,
            transit_score: property.transit_score,
            latitude: property.latitude,
            longitude: property.longitude,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewProperty {
            title: "Sunny 1BR".to_string(),
            description: Some("Top floor".to_string()),
            address: "123 Bedford Ave".to_string(),
            neighborhood: "Williamsburg".to_string(),
            borough: "Brooklyn".to_string(),
            price: 2450.0,
            bedrooms: 1,
            bathrooms: 1.0,
            square_feet: Some(620),
            property_type: "apartment".to_string(),
            image_url: None,
            available_date: None,
            walk_score: Some(95),
            transit_score: Some(88),
            latitude: None,
            longitude: None,
        };
        let new: NewProperty = (&domain).into();
        assert_eq!(new.title, domain.title);
        assert_eq!(new.description, domain.description.as_deref());
        assert_eq!(new.price, domain.price);
        assert_eq!(new.bedrooms, domain.bedrooms);
        assert!(new.is_active);
    }

    #[test]
    fn property_into_domain() {
        let now = Utc::now().naive_utc();
        let db_property = Property {
            id: 7,
            title: "Loft".to_string(),
            description: None,
            address: "1 Main St".to_string(),
            neighborhood: "Dumbo".to_string(),
            borough: "Brooklyn".to_string(),
            price: 3900.0,
            bedrooms: 2,
            bathrooms: 2.0,
            square_feet: Some(1100),
            property_type: "condo".to_string(),
            image_url: Some("https://example.com/loft.jpg".to_string()),
            available_date: None,
            walk_score: None,
            transit_score: None,
            latitude: Some(40.7033),
            longitude: Some(-73.9881),
            is_active: true,
            created_at: now,
        };
        let domain: DomainProperty = db_property.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.neighborhood, "Dumbo");
        assert_eq!(domain.price, 3900.0);
        assert_eq!(domain.created_at, now);
        assert!(domain.is_active);
    }
}
