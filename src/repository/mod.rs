use crate::db::DbPool;
use crate::domain::filters::{SearchFilters, SortBy, SortOrder};
use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::domain::property::{NewProperty, Property};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod inquiry;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod property;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Storage-facing description of a property search: validated filters plus
/// ordering and an optional page window.
#[derive(Debug, Clone, Default)]
pub struct PropertySearchQuery {
    pub filters: SearchFilters,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub pagination: Option<Pagination>,
}

impl PropertySearchQuery {
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    pub fn sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait PropertyReader {
    /// Looks up a listing by id; inactive listings are indistinguishable
    /// from absent ones.
    fn get_property_by_id(&self, id: i32) -> RepositoryResult<Option<Property>>;
    /// Returns the total count of matching listings together with the
    /// requested page. Count and page apply the identical predicate set.
    fn search_properties(
        &self,
        query: PropertySearchQuery,
    ) -> RepositoryResult<(usize, Vec<Property>)>;
    fn list_neighborhoods(&self) -> RepositoryResult<Vec<String>>;
    fn list_boroughs(&self) -> RepositoryResult<Vec<String>>;
}

pub trait PropertyWriter {
    fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property>;
    /// Soft-deletes a listing. Fails with `NotFound` when the listing is
    /// absent or already inactive.
    fn deactivate_property(&self, property_id: i32) -> RepositoryResult<()>;
}

pub trait InquiryReader {
    fn list_inquiries(&self, property_id: i32) -> RepositoryResult<Vec<Inquiry>>;
}

pub trait InquiryWriter {
    fn create_inquiry(&self, new_inquiry: &NewInquiry) -> RepositoryResult<Inquiry>;
}

/// Diesel-backed implementation of the repository traits. Cheap to clone;
/// each call borrows one pooled connection and releases it on return.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(crate::db::get_connection(&self.pool)?)
    }
}
