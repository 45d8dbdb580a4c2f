//! Repository Module
//!
//! CRUD operations for the three independent collections. No operation
//! spans more than one record; concurrent updates are last-write-wins.

pub mod employee;
pub mod task;
pub mod team_lead;

// Re-exports
pub use employee::EmployeeRepository;
pub use task::TaskRepository;
pub use team_lead::TeamLeadRepository;

use shared::error::{AppError, ErrorCode};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{1}")]
    NotFound(ErrorCode, String),

    #[error("{1}")]
    Duplicate(ErrorCode, String),

    #[error("{1}")]
    Validation(ErrorCode, String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // 唯一索引冲突
        if msg.contains("already contains") {
            return RepoError::Duplicate(ErrorCode::AlreadyExists, msg);
        }
        RepoError::Database(msg)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(code, msg)
            | RepoError::Duplicate(code, msg)
            | RepoError::Validation(code, msg) => AppError::with_message(code, msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Store operation failed");
                AppError::database(msg)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn find_all(&self) -> RepoResult<Vec<T>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>>;
    async fn create(&self, data: CreateDto) -> RepoResult<T>;
    async fn update(&self, id: &str, data: UpdateDto) -> RepoResult<T>;
    async fn delete(&self, id: &str) -> RepoResult<()>;
    /// Delete each id independently, returning how many records were removed
    async fn delete_many(&self, ids: &[String]) -> RepoResult<u64>;
}

// =============================================================================
// ID Convention
// =============================================================================
//
// 客户端看到的 `_id` 是纯 key (不带表名)；路径参数也接受 "table:key"。
//   - 创建: RecordId::from_table_key(TABLE, key)
//   - 获取纯ID: id.key().to_string()

/// Build the record id for `id` in `table`, accepting `key` or `table:key`
pub fn record_id(table: &str, id: &str) -> RecordId {
    let id = id.trim();
    let key = id
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id);
    let key = key.trim_start_matches('⟨').trim_end_matches('⟩');
    RecordId::from_table_key(table, key)
}

/// Refine a unique-index violation into the code of the offending field.
///
/// `indexes` pairs each index name with its code and a readable message.
pub(crate) fn refine_duplicate(err: RepoError, indexes: &[(&str, ErrorCode, String)]) -> RepoError {
    match err {
        RepoError::Duplicate(_, msg) => indexes
            .iter()
            .find(|(index, _, _)| msg.contains(index))
            .map(|(_, code, readable)| RepoError::Duplicate(*code, readable.clone()))
            .unwrap_or(RepoError::Duplicate(ErrorCode::AlreadyExists, msg)),
        other => other,
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Whether another record in `table` has `field = value`
    ///
    /// `exclude` skips the record being updated.
    pub async fn exists_with(
        &self,
        table: &str,
        field: &str,
        value: &str,
        exclude: Option<&RecordId>,
    ) -> RepoResult<bool> {
        let sql = format!(
            "SELECT VALUE id FROM type::table($table) WHERE {field} = $value AND id != $exclude LIMIT 1"
        );
        let ids: Vec<RecordId> = self
            .db
            .query(sql)
            .bind(("table", table.to_string()))
            .bind(("value", value.to_string()))
            .bind(("exclude", exclude.cloned()))
            .await?
            .take(0)?;
        Ok(!ids.is_empty())
    }

    /// Delete every id concurrently; unknown ids are not counted
    pub async fn delete_many<T>(&self, table: &str, ids: &[String]) -> RepoResult<u64>
    where
        T: serde::de::DeserializeOwned,
    {
        let deletions = ids.iter().map(|id| {
            let thing = record_id(table, id);
            async move {
                let removed: Option<T> = self.db.delete(thing).await?;
                Ok::<bool, RepoError>(removed.is_some())
            }
        });

        let mut count = 0;
        for result in futures::future::join_all(deletions).await {
            if result? {
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_strips_table_prefix() {
        assert_eq!(record_id("task", "abc"), RecordId::from_table_key("task", "abc"));
        assert_eq!(record_id("task", "task:abc"), RecordId::from_table_key("task", "abc"));
        assert_eq!(record_id("task", " abc "), RecordId::from_table_key("task", "abc"));
        assert_eq!(
            record_id("task", "employee:abc"),
            RecordId::from_table_key("task", "employee:abc")
        );
    }

    #[test]
    fn test_refine_duplicate_by_index_name() {
        let raw = RepoError::Duplicate(
            ErrorCode::AlreadyExists,
            "Database index `employee_email` already contains 'a@x'".into(),
        );
        let refined = refine_duplicate(
            raw,
            &[
                ("employee_business_id", ErrorCode::EmployeeIdExists, "id taken".into()),
                ("employee_email", ErrorCode::EmployeeEmailExists, "email taken".into()),
            ],
        );
        match refined {
            RepoError::Duplicate(code, msg) => {
                assert_eq!(code, ErrorCode::EmployeeEmailExists);
                assert_eq!(msg, "email taken");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_repo_error_maps_to_app_error() {
        let err: AppError = RepoError::NotFound(ErrorCode::TaskNotFound, "Task not found".into()).into();
        assert_eq!(err.code, ErrorCode::TaskNotFound);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);

        let err: AppError = RepoError::Database("boom".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
