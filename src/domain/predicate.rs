//! Pure predicate tree composed from [`SearchFilters`].
//!
//! The search and count paths must agree on which rows qualify, so both are
//! driven by the same [`Predicate`] value: the repository lowers it to SQL
//! while [`Predicate::matches`] evaluates it in memory for tests.

use crate::domain::filters::SearchFilters;
use crate::domain::property::Property;

/// Text column a predicate leaf can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Address,
    Neighborhood,
    Borough,
    PropertyType,
}

/// A boolean condition over listing fields. `All`/`Any` nodes nest; every
/// tree produced by [`build_predicate`] starts with the `Active` leaf, so
/// inactive listings never qualify regardless of filters.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    /// Case-sensitive exact match.
    Eq(TextField, String),
    /// Case-insensitive substring match.
    Contains(TextField, String),
    /// Inclusive lower price bound.
    MinPrice(f64),
    /// Inclusive upper price bound.
    MaxPrice(f64),
    Bedrooms(i32),
    Active,
}

/// Composes the conjunctive predicate tree for a set of search filters.
///
/// Absent filters contribute nothing; `location` expands to an OR over
/// neighborhood, borough and address; multiple property types become an OR
/// of exact matches.
pub fn build_predicate(filters: &SearchFilters) -> Predicate {
    let mut conditions = vec![Predicate::Active];

    if let Some(location) = filters.location.as_deref().map(str::trim)
        && !location.is_empty()
    {
        conditions.push(Predicate::Any(vec![
            Predicate::Contains(TextField::Neighborhood, location.to_string()),
            Predicate::Contains(TextField::Borough, location.to_string()),
            Predicate::Contains(TextField::Address, location.to_string()),
        ]));
    }

    if let Some(min_price) = filters.min_price {
        conditions.push(Predicate::MinPrice(min_price));
    }

    if let Some(max_price) = filters.max_price {
        conditions.push(Predicate::MaxPrice(max_price));
    }

    if let Some(bedrooms) = filters.bedrooms {
        conditions.push(Predicate::Bedrooms(bedrooms));
    }

    if !filters.property_types.is_empty() {
        conditions.push(Predicate::Any(
            filters
                .property_types
                .iter()
                .map(|t| Predicate::Eq(TextField::PropertyType, t.clone()))
                .collect(),
        ));
    }

    if let Some(borough) = &filters.borough {
        conditions.push(Predicate::Eq(TextField::Borough, borough.clone()));
    }

    if let Some(neighborhood) = &filters.neighborhood {
        conditions.push(Predicate::Eq(TextField::Neighborhood, neighborhood.clone()));
    }

    Predicate::All(conditions)
}

fn field_value<'a>(property: &'a Property, field: TextField) -> &'a str {
    match field {
        TextField::Address => &property.address,
        TextField::Neighborhood => &property.neighborhood,
        TextField::Borough => &property.borough,
        TextField::PropertyType => &property.property_type,
    }
}

impl Predicate {
    /// Evaluates the tree against a single listing in memory.
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            Predicate::All(conditions) => conditions.iter().all(|c| c.matches(property)),
            Predicate::Any(conditions) => conditions.iter().any(|c| c.matches(property)),
            Predicate::Eq(field, value) => field_value(property, *field) == value,
            Predicate::Contains(field, value) => field_value(property, *field)
                .to_lowercase()
                .contains(&value.to_lowercase()),
            Predicate::MinPrice(min) => property.price >= *min,
            Predicate::MaxPrice(max) => property.price <= *max,
            Predicate::Bedrooms(bedrooms) => property.bedrooms == *bedrooms,
            Predicate::Active => property.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn listing(id: i32, price: f64, bedrooms: i32) -> Property {
        Property {
            id,
            title: format!("Listing {id}"),
            description: None,
            address: format!("{id} Bedford Ave"),
            neighborhood: "Williamsburg".to_string(),
            borough: "Brooklyn".to_string(),
            price,
            bedrooms,
            bathrooms: 1.0,
            square_feet: None,
            property_type: "apartment".to_string(),
            image_url: None,
            available_date: None,
            walk_score: None,
            transit_score: None,
            latitude: None,
            longitude: None,
            is_active: true,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn empty_filters_only_require_active() {
        let predicate = build_predicate(&SearchFilters::default());
        assert_eq!(predicate, Predicate::All(vec![Predicate::Active]));

        let mut inactive = listing(1, 2000.0, 1);
        inactive.is_active = false;
        assert!(predicate.matches(&listing(1, 2000.0, 1)));
        assert!(!predicate.matches(&inactive));
    }

    #[test]
    fn price_and_bedroom_fixture_selects_two_of_five() {
        let filters = SearchFilters::default()
            .price_between(Some(2000.0), Some(3000.0))
            .bedrooms(1);
        let predicate = build_predicate(&filters);

        let fixture = [
            listing(1, 1800.0, 1),
            listing(2, 2200.0, 1),
            listing(3, 2900.0, 2),
            listing(4, 3100.0, 1),
            listing(5, 2500.0, 1),
        ];
        let matched: Vec<i32> = fixture
            .iter()
            .filter(|p| predicate.matches(p))
            .map(|p| p.id)
            .collect();
        assert_eq!(matched, vec![2, 5]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let predicate =
            build_predicate(&SearchFilters::default().price_between(Some(2000.0), Some(3000.0)));
        assert!(predicate.matches(&listing(1, 2000.0, 1)));
        assert!(predicate.matches(&listing(2, 3000.0, 1)));
        assert!(!predicate.matches(&listing(3, 1999.99, 1)));
    }

    #[test]
    fn location_matches_any_of_three_fields_case_insensitively() {
        let predicate = build_predicate(&SearchFilters::default().location("brook"));
        assert!(predicate.matches(&listing(1, 2000.0, 1)));

        let by_address = build_predicate(&SearchFilters::default().location("BEDFORD"));
        assert!(by_address.matches(&listing(1, 2000.0, 1)));

        let miss = build_predicate(&SearchFilters::default().location("Queens"));
        assert!(!miss.matches(&listing(1, 2000.0, 1)));
    }

    #[test]
    fn blank_location_adds_no_condition() {
        let predicate = build_predicate(&SearchFilters::default().location("   "));
        assert_eq!(predicate, Predicate::All(vec![Predicate::Active]));
    }

    #[test]
    fn multiple_property_types_are_ored() {
        let predicate = build_predicate(
            &SearchFilters::default().property_types(["condo", "apartment"]),
        );
        assert!(predicate.matches(&listing(1, 2000.0, 1)));

        let condo_only = build_predicate(&SearchFilters::default().property_types(["condo"]));
        assert!(!condo_only.matches(&listing(1, 2000.0, 1)));
    }

    #[test]
    fn exact_matches_are_case_sensitive() {
        let predicate = build_predicate(&SearchFilters::default().borough("brooklyn"));
        assert!(!predicate.matches(&listing(1, 2000.0, 1)));
    }
}
