//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult, Repository, record_id, refine_duplicate};
use crate::db::models::{EmployeeContent, EmployeeRecord};
use shared::error::ErrorCode;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, Role};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find employees with the given role, in creation order
    pub async fn find_by_role(&self, role: Role) -> RepoResult<Vec<Employee>> {
        let records: Vec<EmployeeRecord> = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE role = $role ORDER BY created_at ASC")
            .bind(("role", role))
            .await?
            .take(0)?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    async fn ensure_unique(&self, content: &EmployeeContent, exclude: Option<&RecordId>) -> RepoResult<()> {
        if self
            .base
            .exists_with(TABLE, "business_id", &content.business_id, exclude)
            .await?
        {
            return Err(RepoError::Duplicate(
                ErrorCode::EmployeeIdExists,
                format!("Employee with id '{}' already exists", content.business_id),
            ));
        }
        if self
            .base
            .exists_with(TABLE, "email", &content.email, exclude)
            .await?
        {
            return Err(RepoError::Duplicate(
                ErrorCode::EmployeeEmailExists,
                format!("Employee with email '{}' already exists", content.email),
            ));
        }
        Ok(())
    }

    fn refine(err: RepoError, content: &EmployeeContent) -> RepoError {
        refine_duplicate(
            err,
            &[
                (
                    "employee_business_id",
                    ErrorCode::EmployeeIdExists,
                    format!("Employee with id '{}' already exists", content.business_id),
                ),
                (
                    "employee_email",
                    ErrorCode::EmployeeEmailExists,
                    format!("Employee with email '{}' already exists", content.email),
                ),
            ],
        )
    }

    fn not_found() -> RepoError {
        RepoError::NotFound(
            ErrorCode::EmployeeNotFound,
            "Employee not found".to_string(),
        )
    }
}

impl Repository<Employee, EmployeeCreate, EmployeeUpdate> for EmployeeRepository {
    /// Find all employees, in creation order
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let records: Vec<EmployeeRecord> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY created_at ASC")
            .await?
            .take(0)?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let record: Option<EmployeeRecord> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(record.map(Employee::from))
    }

    /// Create a new employee
    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let role = data.role.ok_or_else(|| {
            RepoError::Validation(ErrorCode::RequiredField, "role is required".to_string())
        })?;

        let content = EmployeeContent {
            business_id: data.id,
            name: data.name,
            role,
            team: data.team,
            experience: data.experience,
            salary: data.salary,
            mobile: data.mobile,
            email: data.email,
            address: data.address,
            created_at: shared::util::creation_stamp(),
        };

        self.ensure_unique(&content, None).await?;

        let created: Option<EmployeeRecord> = self
            .base
            .db()
            .query("CREATE employee CONTENT $data RETURN AFTER")
            .bind(("data", content.clone()))
            .await
            .map_err(RepoError::from)?
            .take(0)
            .map_err(|e| Self::refine(e.into(), &content))?;

        let employee: Employee = created
            .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))?
            .into();
        tracing::info!(resource = TABLE, id = %employee.store_id, "Employee created");
        Ok(employee)
    }

    /// Update an employee; only provided fields change
    async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = record_id(TABLE, id);
        let existing: EmployeeRecord = self
            .base
            .db()
            .select(thing.clone())
            .await?
            .ok_or_else(Self::not_found)?;

        let mut content = existing.into_content();
        content.apply(data);

        self.ensure_unique(&content, Some(&thing)).await?;

        let updated: Option<EmployeeRecord> = self
            .base
            .db()
            .query("UPDATE $thing CONTENT $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", content.clone()))
            .await
            .map_err(RepoError::from)?
            .take(0)
            .map_err(|e| Self::refine(e.into(), &content))?;

        let employee: Employee = updated.ok_or_else(Self::not_found)?.into();
        tracing::info!(resource = TABLE, id = %employee.store_id, "Employee updated");
        Ok(employee)
    }

    /// Hard delete an employee
    async fn delete(&self, id: &str) -> RepoResult<()> {
        let removed: Option<EmployeeRecord> = self.base.db().delete(record_id(TABLE, id)).await?;
        if removed.is_none() {
            return Err(Self::not_found());
        }
        tracing::info!(resource = TABLE, id = %id, "Employee deleted");
        Ok(())
    }

    async fn delete_many(&self, ids: &[String]) -> RepoResult<u64> {
        let count = self.base.delete_many::<EmployeeRecord>(TABLE, ids).await?;
        tracing::info!(resource = TABLE, requested = ids.len(), deleted = count, "Employees bulk deleted");
        Ok(count)
    }
}
