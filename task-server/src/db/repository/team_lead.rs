//! Team Lead Repository
//!
//! Team leads are their own collection; `id`, `email` and `mobile` are each
//! unique, checked on create and on update.

use super::{BaseRepository, RepoError, RepoResult, Repository, record_id, refine_duplicate};
use crate::db::models::{TeamLeadContent, TeamLeadRecord};
use shared::error::ErrorCode;
use shared::models::{Role, TeamLead, TeamLeadCreate, TeamLeadUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "team_lead";

#[derive(Clone)]
pub struct TeamLeadRepository {
    base: BaseRepository,
}

impl TeamLeadRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Unique fields: (column, code, readable message)
    fn unique_fields(content: &TeamLeadContent) -> [(&'static str, ErrorCode, &str, String); 3] {
        [
            (
                "business_id",
                ErrorCode::TeamLeadIdExists,
                content.business_id.as_str(),
                format!("Team Lead with id '{}' already exists", content.business_id),
            ),
            (
                "email",
                ErrorCode::TeamLeadEmailExists,
                content.email.as_str(),
                format!("Team Lead with email '{}' already exists", content.email),
            ),
            (
                "mobile",
                ErrorCode::TeamLeadMobileExists,
                content.mobile.as_str(),
                format!("Team Lead with mobile '{}' already exists", content.mobile),
            ),
        ]
    }

    async fn ensure_unique(&self, content: &TeamLeadContent, exclude: Option<&RecordId>) -> RepoResult<()> {
        for (field, code, value, message) in Self::unique_fields(content) {
            if self.base.exists_with(TABLE, field, value, exclude).await? {
                return Err(RepoError::Duplicate(code, message));
            }
        }
        Ok(())
    }

    fn refine(err: RepoError, content: &TeamLeadContent) -> RepoError {
        let indexes: Vec<(&str, ErrorCode, String)> = Self::unique_fields(content)
            .into_iter()
            .map(|(field, code, _, message)| match field {
                "business_id" => ("team_lead_business_id", code, message),
                "email" => ("team_lead_email", code, message),
                _ => ("team_lead_mobile", code, message),
            })
            .collect();
        refine_duplicate(err, &indexes)
    }

    fn not_found() -> RepoError {
        RepoError::NotFound(
            ErrorCode::TeamLeadNotFound,
            "Team Lead not found".to_string(),
        )
    }
}

impl Repository<TeamLead, TeamLeadCreate, TeamLeadUpdate> for TeamLeadRepository {
    /// Find all team leads, in creation order
    async fn find_all(&self) -> RepoResult<Vec<TeamLead>> {
        let records: Vec<TeamLeadRecord> = self
            .base
            .db()
            .query("SELECT * FROM team_lead ORDER BY created_at ASC")
            .await?
            .take(0)?;
        Ok(records.into_iter().map(TeamLead::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<TeamLead>> {
        let record: Option<TeamLeadRecord> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(record.map(TeamLead::from))
    }

    /// Create a new team lead; role is always "Team Lead"
    async fn create(&self, data: TeamLeadCreate) -> RepoResult<TeamLead> {
        let experience = data.experience.ok_or_else(|| {
            RepoError::Validation(ErrorCode::RequiredField, "experience is required".to_string())
        })?;
        let salary = data.salary.ok_or_else(|| {
            RepoError::Validation(ErrorCode::RequiredField, "salary is required".to_string())
        })?;

        let content = TeamLeadContent {
            business_id: data.id,
            name: data.name,
            role: Role::TeamLead,
            team: data.team,
            experience,
            salary,
            mobile: data.mobile,
            email: data.email,
            address: data.address,
            certifications: data.certifications.unwrap_or_default(),
            leadership_experience: data.leadership_experience.unwrap_or(0.0),
            created_at: shared::util::creation_stamp(),
        };

        self.ensure_unique(&content, None).await?;

        let created: Option<TeamLeadRecord> = self
            .base
            .db()
            .query("CREATE team_lead CONTENT $data RETURN AFTER")
            .bind(("data", content.clone()))
            .await
            .map_err(RepoError::from)?
            .take(0)
            .map_err(|e| Self::refine(e.into(), &content))?;

        let lead: TeamLead = created
            .ok_or_else(|| RepoError::Database("Failed to create team lead".to_string()))?
            .into();
        tracing::info!(resource = TABLE, id = %lead.store_id, "Team lead created");
        Ok(lead)
    }

    /// Update a team lead; only provided fields change
    async fn update(&self, id: &str, data: TeamLeadUpdate) -> RepoResult<TeamLead> {
        let thing = record_id(TABLE, id);
        let existing: TeamLeadRecord = self
            .base
            .db()
            .select(thing.clone())
            .await?
            .ok_or_else(Self::not_found)?;

        let mut content = existing.into_content();
        content.apply(data);

        self.ensure_unique(&content, Some(&thing)).await?;

        let updated: Option<TeamLeadRecord> = self
            .base
            .db()
            .query("UPDATE $thing CONTENT $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", content.clone()))
            .await
            .map_err(RepoError::from)?
            .take(0)
            .map_err(|e| Self::refine(e.into(), &content))?;

        let lead: TeamLead = updated.ok_or_else(Self::not_found)?.into();
        tracing::info!(resource = TABLE, id = %lead.store_id, "Team lead updated");
        Ok(lead)
    }

    /// Hard delete a team lead
    async fn delete(&self, id: &str) -> RepoResult<()> {
        let removed: Option<TeamLeadRecord> = self.base.db().delete(record_id(TABLE, id)).await?;
        if removed.is_none() {
            return Err(Self::not_found());
        }
        tracing::info!(resource = TABLE, id = %id, "Team lead deleted");
        Ok(())
    }

    async fn delete_many(&self, ids: &[String]) -> RepoResult<u64> {
        let count = self.base.delete_many::<TeamLeadRecord>(TABLE, ids).await?;
        tracing::info!(resource = TABLE, requested = ids.len(), deleted = count, "Team leads bulk deleted");
        Ok(count)
    }
}
