use async_trait::async_trait;
use uuid::Uuid;
use sqlx::{self, PgPool, types::Json};

use crate::{
    entities::project::{Project, ProjectInput, ProjectRow},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

/// Attach the operation name to generic store failures; permission and
/// not-found classifications pass through untouched.
fn with_op(op: &str, e: sqlx::Error) -> AppError {
    match AppError::from(e) {
        AppError::InternalError(msg) => AppError::InternalError(format!("{op}: {msg}")),
        other => other,
    }
}

#[async_trait]
pub trait ProjectRepository: Sync + Send {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, input: &ProjectInput) -> Result<Uuid, AppError>;
    async fn update_project(&self, id: &Uuid, input: &ProjectInput) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(read_pool: PgPool, write_pool: PgPool) -> Self {
        SqlxProjectRepo { read_pool, write_pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        // Newest first, matching the public showcase ordering
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, data, created_at, updated_at
            FROM projects
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.read_pool)
        .await
        .map_err(|e| with_op("list_projects", e))?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, data, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.read_pool)
        .await
        .map_err(|e| with_op("get_project_by_id", e))?;

        Ok(row.map(Project::from))
    }

    async fn create_project(&self, input: &ProjectInput) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO projects (data, created_at, updated_at)
            VALUES ($1, NOW(), NOW())
            RETURNING id
            "#,
        )
        .bind(Json(input))
        .fetch_one(&self.write_pool)
        .await
        .map_err(|e| with_op("create_project", e))?;

        Ok(id)
    }

    async fn update_project(&self, id: &Uuid, input: &ProjectInput) -> Result<Project, AppError> {
        // `||` merges the submitted fields over the stored document; the
        // store keeps single-document atomicity, last write wins.
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            UPDATE projects
            SET data = data || $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, data, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(Json(input))
        .fetch_optional(&self.write_pool)
        .await
        .map_err(|e| with_op("update_project", e))?;

        row.map(Project::from)
            .ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.write_pool)
        .await
        .map_err(|e| with_op("delete_project", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }

        Ok(())
    }
}
