//! Database Module
//!
//! Embedded SurrealDB: RocksDB on disk, or in memory for tests and demos.

pub mod models;
pub mod repository;

use crate::core::{Config, DatabaseMode};
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const SCHEMA: &str = include_str!("schema.surql");

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the store selected by `config` and apply the schema
    pub async fn open(config: &Config) -> Result<Self, AppError> {
        let db = match config.database_mode {
            DatabaseMode::RocksDb => {
                let db_path = config.database_dir().join("tasks.db");
                let db_path_str = db_path.to_string_lossy().to_string();
                let db = Surreal::new::<RocksDb>(db_path_str.as_str())
                    .await
                    .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
                tracing::info!(path = %db_path_str, "Database connection established (RocksDB)");
                db
            }
            DatabaseMode::Memory => {
                let db = Surreal::new::<Mem>(())
                    .await
                    .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
                tracing::info!("Database connection established (memory)");
                db
            }
        };

        Self::prepare(db, &config.db_namespace, &config.db_name).await
    }

    /// In-memory store with the schema applied
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::prepare(db, "taskboard", "test").await
    }

    async fn prepare(db: Surreal<Db>, namespace: &str, database: &str) -> Result<Self, AppError> {
        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::info!(namespace, database, "Database schema applied");

        Ok(Self { db })
    }
}
