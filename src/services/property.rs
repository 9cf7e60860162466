use crate::domain::property::{NewProperty, Property};
use crate::dto::property::{PaginationInfo, PropertySearchPage, PropertySearchRequest};
use crate::repository::{PropertyReader, PropertySearchQuery, PropertyWriter};
use crate::services::{ServiceError, ServiceResult};

/// Runs a paged search and assembles the response envelope.
///
/// The page fetch and the count are independent reads; a listing created or
/// deactivated between them can skew `total` by one, which is acceptable
/// staleness for this domain.
pub fn search_properties<R>(
    repo: &R,
    request: PropertySearchRequest,
) -> ServiceResult<PropertySearchPage>
where
    R: PropertyReader + ?Sized,
{
    let PropertySearchRequest {
        filters,
        sort_by,
        sort_order,
        page,
        limit,
    } = request;

    let query = PropertySearchQuery::new(filters)
        .sort(sort_by, sort_order)
        .paginate(page, limit);
    let (total, properties) = repo.search_properties(query)?;

    Ok(PropertySearchPage {
        properties,
        pagination: PaginationInfo {
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
        },
    })
}

/// Fetches a single visible listing; an inactive listing is reported the
/// same way as a missing one.
pub fn get_property<R>(repo: &R, property_id: i32) -> ServiceResult<Property>
where
    R: PropertyReader + ?Sized,
{
    repo.get_property_by_id(property_id)?
        .ok_or(ServiceError::NotFound)
}

/// Administrative insert path; new listings start out active.
pub fn create_property<R>(repo: &R, new_property: &NewProperty) -> ServiceResult<Property>
where
    R: PropertyWriter + ?Sized,
{
    repo.create_property(new_property).map_err(ServiceError::from)
}

/// Soft-deactivates a listing, hiding it from every read path.
pub fn deactivate_property<R>(repo: &R, property_id: i32) -> ServiceResult<()>
where
    R: PropertyWriter + ?Sized,
{
    repo.deactivate_property(property_id)
        .map_err(ServiceError::from)
}

pub fn list_neighborhoods<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: PropertyReader + ?Sized,
{
    repo.list_neighborhoods().map_err(ServiceError::from)
}

pub fn list_boroughs<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: PropertyReader + ?Sized,
{
    repo.list_boroughs().map_err(ServiceError::from)
}
