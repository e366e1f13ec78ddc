use crate::{
    constants::PUBLIC_PROJECT_PATHS,
    entities::project::{Project, ProjectCreatedResponse, ProjectForm, ProjectInput},
    errors::AppError,
    cache::revalidate::PathInvalidator,
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R, C>
where
    R: ProjectRepository,
    C: PathInvalidator,
{
    pub project_repo: R,
    pub invalidator: C,
}

impl<R, C> ProjectHandler<R, C>
where
    R: ProjectRepository,
    C: PathInvalidator,
{
    pub fn new(project_repo: R, invalidator: C) -> Self {
        ProjectHandler { project_repo, invalidator }
    }

    /// Creates a new project from the admin form payload
    pub async fn create_project(&self, form: ProjectForm) -> Result<ProjectCreatedResponse, AppError> {
        let input = ProjectInput::try_from(form)?;

        let id = self.project_repo.create_project(&input).await?;
        self.invalidate_public_views().await;

        let response = ProjectCreatedResponse {
            id,
            admin_url: format!("/admin/projects/{}/edit", id),
        };

        Ok(response)
    }

    /// Retrieves all projects, newest first
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// Retrieves a project by its ID; absent ids are `None`, not an error
    pub async fn get_project_by_id(&self, project_id: &str) -> Result<Option<Project>, AppError> {
        let valid_id = valid_uuid(project_id)?;
        self.project_repo.get_project_by_id(&valid_id).await
    }

    /// Overwrites an existing project with the submitted form payload
    pub async fn update_project(&self, project_id: &str, form: ProjectForm) -> Result<Project, AppError> {
        let valid_id = valid_uuid(project_id)?;
        let input = ProjectInput::try_from(form)?;

        let updated = self.project_repo.update_project(&valid_id, &input).await?;
        self.invalidate_public_views().await;

        Ok(updated)
    }

    /// Hard-deletes a project by its ID
    pub async fn delete_project(&self, project_id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(project_id)?;

        self.project_repo.delete_project(&valid_id).await?;
        self.invalidate_public_views().await;

        Ok(())
    }

    // A stale cached page is recoverable; a failed write is not. The write
    // has already committed here, so cache trouble is only logged.
    async fn invalidate_public_views(&self) {
        for path in PUBLIC_PROJECT_PATHS {
            if let Err(e) = self.invalidator.invalidate(path).await {
                tracing::warn!("Failed to invalidate cached view {}: {}", path, e);
            }
        }
    }
}
