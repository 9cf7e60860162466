use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;

use crate::domain::filters::{SortBy, SortOrder};
use crate::domain::predicate::{Predicate, TextField, build_predicate};
use crate::domain::property::{NewProperty, Property};
use crate::repository::{
    DieselRepository, PropertyReader, PropertySearchQuery, PropertyWriter,
    errors::{RepositoryError, RepositoryResult},
};
use crate::schema::properties;

type BoxedCondition =
    Box<dyn BoxableExpression<properties::table, Sqlite, SqlType = Bool>>;

/// Lowers the pure predicate tree into a boxed Diesel expression.
///
/// SQLite `LIKE` is case-insensitive for ASCII, which matches the
/// in-memory [`Predicate::matches`] semantics for substring leaves.
fn lower_predicate(predicate: &Predicate) -> BoxedCondition {
    match predicate {
        Predicate::All(conditions) => conditions
            .iter()
            .map(lower_predicate)
            .reduce(|acc, cond| Box::new(acc.and(cond)) as BoxedCondition)
            // an empty conjunction holds for every row
            .unwrap_or_else(|| Box::new(properties::id.eq(properties::id))),
        Predicate::Any(conditions) => conditions
            .iter()
            .map(lower_predicate)
            .reduce(|acc, cond| Box::new(acc.or(cond)) as BoxedCondition)
            // an empty disjunction holds for no row
            .unwrap_or_else(|| Box::new(properties::id.ne(properties::id))),
        Predicate::Eq(field, value) => {
            let value = value.clone();
            match field {
                TextField::Address => Box::new(properties::address.eq(value)),
                TextField::Neighborhood => Box::new(properties::neighborhood.eq(value)),
                TextField::Borough => Box::new(properties::borough.eq(value)),
                TextField::PropertyType => Box::new(properties::property_type.eq(value)),
            }
        }
        Predicate::Contains(field, value) => {
            let pattern = format!("%{value}%");
            match field {
                TextField::Address => Box::new(properties::address.like(pattern)),
                TextField::Neighborhood => Box::new(properties::neighborhood.like(pattern)),
                TextField::Borough => Box::new(properties::borough.like(pattern)),
                TextField::PropertyType => Box::new(properties::property_type.like(pattern)),
            }
        }
        Predicate::MinPrice(min) => Box::new(properties::price.ge(*min)),
        Predicate::MaxPrice(max) => Box::new(properties::price.le(*max)),
        Predicate::Bedrooms(bedrooms) => Box::new(properties::bedrooms.eq(*bedrooms)),
        Predicate::Active => Box::new(properties::is_active.eq(true)),
    }
}

impl PropertyReader for DieselRepository {
    fn get_property_by_id(&self, id: i32) -> RepositoryResult<Option<Property>> {
        use crate::models::property::Property as DbProperty;

        let mut conn = self.conn()?;
        let property = properties::table
            .find(id)
            .filter(properties::is_active.eq(true))
            .first::<DbProperty>(&mut conn)
            .optional()?;

        Ok(property.map(Into::into))
    }

    fn search_properties(
        &self,
        query: PropertySearchQuery,
    ) -> RepositoryResult<(usize, Vec<Property>)> {
        use crate::models::property::Property as DbProperty;

        let mut conn = self.conn()?;
        let predicate = build_predicate(&query.filters);

        // The count applies the identical predicate set so the reported
        // total stays consistent with what paging would enumerate.
        let total: i64 = properties::table
            .filter(lower_predicate(&predicate))
            .count()
            .get_result(&mut conn)?;

        let mut stmt = properties::table
            .filter(lower_predicate(&predicate))
            .into_boxed();

        // Ties are broken by primary key in the requested direction, so
        // rows created within the same timestamp page out deterministically.
        stmt = match (query.sort_by, query.sort_order) {
            (SortBy::Newest, SortOrder::Asc) => stmt
                .order(properties::created_at.asc())
                .then_order_by(properties::id.asc()),
            (SortBy::Newest, SortOrder::Desc) => stmt
                .order(properties::created_at.desc())
                .then_order_by(properties::id.desc()),
            (SortBy::Price, SortOrder::Asc) => stmt
                .order(properties::price.asc())
                .then_order_by(properties::id.asc()),
            (SortBy::Price, SortOrder::Desc) => stmt
                .order(properties::price.desc())
                .then_order_by(properties::id.desc()),
            (SortBy::Bedrooms, SortOrder::Asc) => stmt
                .order(properties::bedrooms.asc())
                .then_order_by(properties::id.asc()),
            (SortBy::Bedrooms, SortOrder::Desc) => stmt
                .order(properties::bedrooms.desc())
                .then_order_by(properties::id.desc()),
        };

        if let Some(pagination) = &query.pagination {
            // saturate instead of overflowing: a page far past the data
            // lands beyond any row and yields an empty result
            let per_page = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            let offset = pagination.page.saturating_sub(1).saturating_mul(pagination.per_page);
            stmt = stmt
                .limit(per_page)
                .offset(i64::try_from(offset).unwrap_or(i64::MAX));
        }

        let items = stmt
            .load::<DbProperty>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Property>>();

        Ok((total as usize, items))
    }

    fn list_neighborhoods(&self) -> RepositoryResult<Vec<String>> {
        let mut conn = self.conn()?;
        let neighborhoods = properties::table
            .filter(properties::is_active.eq(true))
            .filter(properties::neighborhood.ne(""))
            .select(properties::neighborhood)
            .distinct()
            .order(properties::neighborhood.asc())
            .load::<String>(&mut conn)?;

        Ok(neighborhoods)
    }

    fn list_boroughs(&self) -> RepositoryResult<Vec<String>> {
        let mut conn = self.conn()?;
        let boroughs = properties::table
            .filter(properties::is_active.eq(true))
            .filter(properties::borough.ne(""))
            .select(properties::borough)
            .distinct()
            .order(properties::borough.asc())
            .load::<String>(&mut conn)?;

        Ok(boroughs)
    }
}

impl PropertyWriter for DieselRepository {
    fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property> {
        use crate::models::property::{NewProperty as DbNewProperty, Property as DbProperty};

        let mut conn = self.conn()?;
        let insertable: DbNewProperty = new_property.into();
        let created = diesel::insert_into(properties::table)
            .values(&insertable)
            .get_result::<DbProperty>(&mut conn)?;

        Ok(created.into())
    }

    fn deactivate_property(&self, property_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let affected = diesel::update(
            properties::table
                .find(property_id)
                .filter(properties::is_active.eq(true)),
        )
        .set(properties::is_active.eq(false))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
