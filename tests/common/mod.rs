use cityrent::db::{DbPool, establish_connection_pool};
use cityrent::domain::property::NewProperty;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A throwaway SQLite database, migrated and removed with its temp dir.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("non-utf8 temp path"))
            .expect("failed to build pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[allow(dead_code)]
pub fn listing(
    title: &str,
    neighborhood: &str,
    borough: &str,
    price: f64,
    bedrooms: i32,
    property_type: &str,
) -> NewProperty {
    NewProperty {
        title: title.to_string(),
        description: None,
        address: format!("{title} St"),
        neighborhood: neighborhood.to_string(),
        borough: borough.to_string(),
        price,
        bedrooms,
        bathrooms: 1.0,
        square_feet: None,
        property_type: property_type.to_string(),
        image_url: None,
        available_date: None,
        walk_score: None,
        transit_score: None,
        latitude: None,
        longitude: None,
    }
}
