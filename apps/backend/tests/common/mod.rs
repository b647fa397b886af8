//! Common test utilities and fixtures for integration tests.
//!
//! `TestContext::new` needs a PostgreSQL database (set DATABASE_URL).
//! `TestContext::without_database` uses a lazy pool that never connects,
//! for endpoints that must not touch the store.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use sat_prep_backend::config::Config;
use sat_prep_backend::db::Database;
use sat_prep_backend::{build_router, AppState};

/// Test context containing the store and router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a context backed by a real database.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        let config = Config::from_env().expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&config.database_url, config.database_max_connections)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self::with_parts(db, config)
    }

    /// Create a context whose pool never connects.
    pub fn without_database() -> Self {
        let config = test_config();
        let db = Database::connect_lazy(&config.database_url).expect("Failed to build lazy pool");
        Self::with_parts(db, config)
    }

    fn with_parts(db: Database, config: Config) -> Self {
        let db = Arc::new(db);
        let state = AppState {
            db: db.clone(),
            config: Arc::new(config),
        };

        Self {
            db,
            app: build_router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// A test identifier no other test uses.
    pub fn new_test_id() -> Uuid {
        Uuid::new_v4()
    }

    /// Remove a test's questions.
    pub async fn cleanup_test(&self, test_id: Uuid) {
        let _ = self.db.delete_questions_for_test(test_id).await;
    }
}

fn test_config() -> Config {
    Config {
        database_url: "postgres://postgres@127.0.0.1:1/unused".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        default_category: "Math".to_string(),
        default_difficulty: "Medium".to_string(),
    }
}
