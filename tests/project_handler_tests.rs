mod test_forms;

use test_forms::valid_form;

use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use showcase_backend::{
    cache::revalidate::PathInvalidator,
    constants::PUBLIC_PROJECT_PATHS,
    entities::project::{Project, ProjectInput},
    errors::AppError,
    repositories::project::ProjectRepository,
    use_cases::projects::ProjectHandler,
};

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
        async fn create_project(&self, input: &ProjectInput) -> Result<Uuid, AppError>;
        async fn update_project(&self, id: &Uuid, input: &ProjectInput) -> Result<Project, AppError>;
        async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub Invalidator {}

    #[async_trait::async_trait]
    impl PathInvalidator for Invalidator {
        async fn invalidate(&self, path: &str) -> Result<(), AppError>;
    }
}

fn project_from_input(id: Uuid, input: &ProjectInput) -> Project {
    Project {
        id,
        title: input.title.clone(),
        short_description: input.short_description.clone(),
        long_description: input.long_description.clone(),
        category: input.category.clone(),
        technologies: input.technologies.clone(),
        thumbnail_url: input.thumbnail_url.clone(),
        preview_url: input.preview_url.clone(),
        project_url: input.project_url.clone(),
        source_code_url: input.source_code_url.clone(),
        download_url: input.download_url.clone(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn invalidator_expecting_all_public_paths() -> MockInvalidator {
    let mut invalidator = MockInvalidator::new();
    invalidator
        .expect_invalidate()
        .withf(|path| PUBLIC_PROJECT_PATHS.contains(&path))
        .times(PUBLIC_PROJECT_PATHS.len())
        .returning(|_| Ok(()));
    invalidator
}

#[actix_rt::test]
async fn create_valid_project_persists_and_invalidates_public_views() {
    let id = Uuid::new_v4();

    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .withf(|input| input.technologies == vec!["React", "Firebase"])
        .returning(move |_| Ok(id));

    let handler = ProjectHandler::new(repo, invalidator_expecting_all_public_paths());

    let response = handler.create_project(valid_form()).await.unwrap();

    assert_eq!(response.id, id);
    assert_eq!(response.admin_url, format!("/admin/projects/{}/edit", id));
}

#[actix_rt::test]
async fn create_with_empty_technologies_attempts_no_write() {
    // No expectations registered: any repo or cache call panics the test
    let repo = MockProjectRepo::new();
    let invalidator = MockInvalidator::new();
    let handler = ProjectHandler::new(repo, invalidator);

    let mut form = valid_form();
    form.technologies = "".to_string();

    let result = handler.create_project(form).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn create_with_malformed_thumbnail_attempts_no_write() {
    let repo = MockProjectRepo::new();
    let invalidator = MockInvalidator::new();
    let handler = ProjectHandler::new(repo, invalidator);

    let mut form = valid_form();
    form.thumbnail_url = "not a url".to_string();

    let result = handler.create_project(form).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn create_then_get_round_trip_preserves_fields() {
    let id = Uuid::new_v4();

    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .returning(move |input| {
            assert_eq!(input.title, "Demo");
            Ok(id)
        });
    repo.expect_get_project_by_id()
        .with(eq(id))
        .returning(move |found_id| {
            let input = ProjectInput::try_from(valid_form()).unwrap();
            Ok(Some(project_from_input(*found_id, &input)))
        });

    let handler = ProjectHandler::new(repo, invalidator_expecting_all_public_paths());

    let created = handler.create_project(valid_form()).await.unwrap();
    let fetched = handler
        .get_project_by_id(&created.id.to_string())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.id, id);
    assert_eq!(fetched.title, "Demo");
    assert_eq!(fetched.category, "Web");
    assert_eq!(fetched.technologies, vec!["React", "Firebase"]);
    assert_eq!(fetched.thumbnail_url, "https://x/a.png");
}

#[actix_rt::test]
async fn get_missing_project_returns_none_not_an_error() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_id().returning(|_| Ok(None));

    let handler = ProjectHandler::new(repo, MockInvalidator::new());

    let result = handler
        .get_project_by_id(&Uuid::new_v4().to_string())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[actix_rt::test]
async fn get_with_invalid_id_is_rejected() {
    let handler = ProjectHandler::new(MockProjectRepo::new(), MockInvalidator::new());

    let result = handler.get_project_by_id("not-a-uuid").await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[actix_rt::test]
async fn list_projects_passes_through_store_order() {
    let newer = project_from_input(
        Uuid::new_v4(),
        &ProjectInput::try_from(valid_form()).unwrap(),
    );
    let older = project_from_input(
        Uuid::new_v4(),
        &ProjectInput::try_from(valid_form()).unwrap(),
    );

    let expected = vec![newer.clone(), older.clone()];
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .returning(move || Ok(expected.clone()));

    let handler = ProjectHandler::new(repo, MockInvalidator::new());

    let projects = handler.list_projects().await.unwrap();

    assert_eq!(projects, vec![newer, older]);
}

#[actix_rt::test]
async fn applying_the_same_update_twice_stores_the_same_fields() {
    let id = Uuid::new_v4();

    let mut repo = MockProjectRepo::new();
    repo.expect_update_project()
        .times(2)
        .returning(|id, input| Ok(project_from_input(*id, input)));

    let mut invalidator = MockInvalidator::new();
    invalidator
        .expect_invalidate()
        .times(2 * PUBLIC_PROJECT_PATHS.len())
        .returning(|_| Ok(()));

    let handler = ProjectHandler::new(repo, invalidator);

    let first = handler
        .update_project(&id.to_string(), valid_form())
        .await
        .unwrap();
    let second = handler
        .update_project(&id.to_string(), valid_form())
        .await
        .unwrap();

    assert_eq!(first.title, second.title);
    assert_eq!(first.technologies, second.technologies);
    assert_eq!(first.thumbnail_url, second.thumbnail_url);
    assert_eq!(first.project_url, second.project_url);
}

#[actix_rt::test]
async fn update_of_missing_project_is_not_found_and_skips_invalidation() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project()
        .returning(|_, _| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectHandler::new(repo, MockInvalidator::new());

    let result = handler
        .update_project(&Uuid::new_v4().to_string(), valid_form())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn delete_of_missing_project_is_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project()
        .returning(|_| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectHandler::new(repo, MockInvalidator::new());

    let result = handler.delete_project(&Uuid::new_v4().to_string()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn delete_invalidates_public_views() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project().returning(|_| Ok(()));

    let handler = ProjectHandler::new(repo, invalidator_expecting_all_public_paths());

    handler
        .delete_project(&Uuid::new_v4().to_string())
        .await
        .unwrap();
}

#[actix_rt::test]
async fn cache_invalidation_failure_does_not_fail_the_write() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().returning(|_| Ok(Uuid::new_v4()));

    let mut invalidator = MockInvalidator::new();
    invalidator
        .expect_invalidate()
        .times(PUBLIC_PROJECT_PATHS.len())
        .returning(|_| Err(AppError::InternalError("cache down".into())));

    let handler = ProjectHandler::new(repo, invalidator);

    assert!(handler.create_project(valid_form()).await.is_ok());
}

#[actix_rt::test]
async fn permission_denied_from_the_store_is_surfaced_distinctly() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .returning(|_| Err(AppError::PermissionDenied("role lacks INSERT on projects".into())));

    let handler = ProjectHandler::new(repo, MockInvalidator::new());

    let result = handler.create_project(valid_form()).await;

    match result {
        Err(AppError::PermissionDenied(msg)) => {
            assert!(msg.contains("INSERT"));
        }
        other => panic!("expected permission denied, got {:?}", other.map(|r| r.id)),
    }
}
