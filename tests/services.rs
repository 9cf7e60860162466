use cityrent::domain::filters::{SearchFilters, SortBy, SortOrder};
use cityrent::dto::property::PropertySearchRequest;
use cityrent::repository::{DieselRepository, PropertyWriter};
use cityrent::services::ServiceError;
use cityrent::services::inquiry as inquiry_service;
use cityrent::services::property as property_service;

mod common;

fn request(filters: SearchFilters, page: usize, limit: usize) -> PropertySearchRequest {
    PropertySearchRequest {
        filters,
        sort_by: SortBy::Newest,
        sort_order: SortOrder::Desc,
        page,
        limit,
    }
}

#[test]
fn test_search_envelope_matches_fetch_and_count() {
    let test_db = common::TestDb::new("test_service_search_envelope.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    for i in 0..5 {
        repo.create_property(&common::listing(
            &format!("L{i}"),
            "Astoria",
            "Queens",
            2000.0 + f64::from(i) * 100.0,
            1,
            "apartment",
        ))
        .unwrap();
    }

    let page = property_service::search_properties(
        &repo,
        request(SearchFilters::default(), 2, 2),
    )
    .unwrap();

    assert_eq!(page.properties.len(), 2);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.limit, 2);
    assert_eq!(page.pagination.total, 5);
    assert_eq!(page.pagination.pages, 3);
}

#[test]
fn test_get_property_hides_inactive_listings() {
    let test_db = common::TestDb::new("test_service_get_property.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let property = repo
        .create_property(&common::listing("A", "Astoria", "Queens", 2000.0, 1, "apartment"))
        .unwrap();
    assert!(property_service::get_property(&repo, property.id).is_ok());

    property_service::deactivate_property(&repo, property.id).unwrap();
    assert!(matches!(
        property_service::get_property(&repo, property.id),
        Err(ServiceError::NotFound)
    ));
    assert!(matches!(
        property_service::get_property(&repo, 999),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_create_inquiry_requires_visible_listing() {
    let test_db = common::TestDb::new("test_service_create_inquiry.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let property = repo
        .create_property(&common::listing("A", "Astoria", "Queens", 2000.0, 1, "apartment"))
        .unwrap();
    repo.deactivate_property(property.id).unwrap();

    let form = |id| {
        cityrent::domain::inquiry::NewInquiry::new(
            id,
            "Jane".to_string(),
            "jane@example.com".to_string(),
            None,
            "Hello".to_string(),
        )
    };

    // inactive listing is indistinguishable from a missing one
    assert!(matches!(
        inquiry_service::create_inquiry(&repo, form(property.id)),
        Err(ServiceError::NotFound)
    ));
    assert!(matches!(
        inquiry_service::create_inquiry(&repo, form(999)),
        Err(ServiceError::NotFound)
    ));

    // nothing was persisted for the rejected submissions
    assert!(matches!(
        inquiry_service::list_property_inquiries(&repo, property.id),
        Err(ServiceError::NotFound)
    ));
}
