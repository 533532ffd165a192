// src/web/project_handlers.rs
use crate::{
    error::AppResult,
    models::{
        filter::{ListQuery, SentinelPolicy},
        project::{Project, ProjectPayload},
    },
    services::project_service,
    state::AppState,
    web::{list_or_empty, require_body, require_id, CreatedResponse, MessageResponse},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

// GET /api/projects?user_id=&view=
// Sem user_id só devolve tudo com view=all; caso contrário lista vazia.
pub async fn handle_list_projects(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Json<Vec<Project>> {
    // Query malformada (ex.: chave repetida) não pode cair no "todos"
    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            tracing::warn!("Query de projetos rejeitada: {}", rejection);
            return Json(Vec::new());
        }
    };
    tracing::info!("A buscar projetos para user_id: {:?} (view: {:?})", query.user_id, query.view);

    let filter = match query.owner_filter(SentinelPolicy::RequireViewAll) {
        Ok(filter) => filter,
        Err(e) => {
            tracing::warn!("user_id inválido ({:?}): {}", query.user_id, e);
            return Json(Vec::new());
        }
    };

    list_or_empty("projetos", project_service::list_projects(&state.db_pool, filter).await)
}

// POST /api/projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let project = require_body(payload)?.validate()?;
    let id = project_service::create_project(&state.db_pool, &project).await?;
    Ok(Json(CreatedResponse::new(id, "Project created successfully")))
}

// DELETE /api/projects/{id}
pub async fn handle_delete_project(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let id = require_id(id, "Project")?;
    project_service::delete_project(&state.db_pool, id).await?;
    Ok(Json(MessageResponse::ok("Project deleted successfully")))
}
