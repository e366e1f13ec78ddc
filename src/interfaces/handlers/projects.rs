use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::ProjectForm,
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let projects = project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(project_id, state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    match project_handler.get_project_by_id(&project_id).await? {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Project not found"
        }))),
    }
}

#[instrument(skip(_claims, state, data))]
pub async fn create_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<ProjectForm>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let response = project_handler
        .create_project(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, project_id, state, data))]
pub async fn update_project(
    _claims: AdminClaims,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ProjectForm>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let updated_project = project_handler
        .update_project(&project_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated_project))
}

#[instrument(skip(_claims, project_id, state))]
pub async fn delete_project(
    _claims: AdminClaims,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    project_handler.delete_project(&project_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
