// src/web/internship_handlers.rs
use crate::{
    error::AppResult,
    models::{
        filter::{ListQuery, SentinelPolicy},
        internship::{Internship, InternshipPayload},
    },
    services::internship_service,
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

// GET /api/internships?user_id=&view=
pub async fn handle_list_internships(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Json<Vec<Internship>> {
    // Query malformada (ex.: chave repetida) não pode cair no "todos"
    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            tracing::warn!("Query de estágios rejeitada: {}", rejection);
            return Json(Vec::new());
        }
    };
    tracing::info!("A buscar estágios para user_id: {:?} (view: {:?})", query.user_id, query.view);

    let filter = match query.owner_filter(SentinelPolicy::RequireViewAll) {
        Ok(filter) => filter,
        Err(e) => {
            tracing::warn!("user_id inválido ({:?}): {}", query.user_id, e);
            return Json(Vec::new());
        }
    };

    list_or_empty("estágios", internship_service::list_internships(&state.db_pool, filter).await)
}

// POST /api/internships
pub async fn handle_create_internship(
    State(state): State<AppState>,
    payload: Result<Json<InternshipPayload>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let internship = require_body(payload)?.validate()?;
    let id = internship_service::create_internship(&state.db_pool, &internship).await?;
    Ok(Json(CreatedResponse::new(id, "Internship created successfully")))
}

// DELETE /api/internships/{id}
pub async fn handle_delete_internship(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let id = require_id(id, "Internship")?;
    internship_service::delete_internship(&state.db_pool, id).await?;
    Ok(Json(MessageResponse::ok("Internship deleted successfully")))
}
