// src/web/certificate_handlers.rs
use crate::{
    error::AppResult,
    models::{
        certificate::{Certificate, CertificatePayload},
        filter::{ListQuery, SentinelPolicy},
    },
    services::certificate_service,
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

// GET /api/certificates?user_id=
// Sem user_id (ou sentinela) devolve os certificados de toda a gente.
pub async fn handle_list_certificates(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Json<Vec<Certificate>> {
    // Query malformada (ex.: chave repetida) não pode cair no "todos"
    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            tracing::warn!("Query de certificados rejeitada: {}", rejection);
            return Json(Vec::new());
        }
    };
    tracing::info!("A buscar certificados para user_id: {:?}", query.user_id);

    let filter = match query.owner_filter(SentinelPolicy::ListAll) {
        Ok(filter) => filter,
        Err(e) => {
            tracing::warn!("user_id inválido ({:?}): {}", query.user_id, e);
            return Json(Vec::new());
        }
    };

    list_or_empty(
        "certificados",
        certificate_service::list_certificates(&state.db_pool, filter).await,
    )
}

// POST /api/certificates
pub async fn handle_create_certificate(
    State(state): State<AppState>,
    payload: Result<Json<CertificatePayload>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let certificate = require_body(payload)?.validate()?;
    let id = certificate_service::create_certificate(&state.db_pool, &certificate).await?;
    Ok(Json(CreatedResponse::new(id, "Certificate created successfully")))
}

// DELETE /api/certificates/{id}
pub async fn handle_delete_certificate(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let id = require_id(id, "Certificate")?;
    certificate_service::delete_certificate(&state.db_pool, id).await?;
    Ok(Json(MessageResponse::ok("Certificate deleted successfully")))
}
