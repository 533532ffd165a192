// src/web/mod.rs
pub mod auth_handlers;
pub mod certificate_handlers;
pub mod internship_handlers;
pub mod project_handlers;
pub mod routes;

use crate::error::{AppError, AppResult};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i64,
    pub message: &'static str,
}

impl CreatedResponse {
    pub fn new(id: i64, message: &'static str) -> Self {
        Self { success: true, id, message }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn ok(message: &'static str) -> Self {
        Self { success: true, message }
    }
}

/// Corpo ausente ou JSON inválido conta como "sem dados".
pub(crate) fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::warn!("Corpo do pedido rejeitado: {}", rejection);
            Err(AppError::Validation("No data provided".into()))
        }
    }
}

// Um ID que nem é número não pode existir
pub(crate) fn require_id(
    id: Result<axum::extract::Path<i64>, PathRejection>,
    kind: &'static str,
) -> AppResult<i64> {
    match id {
        Ok(axum::extract::Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::warn!("ID de {} inválido: {}", kind, rejection);
            Err(AppError::NotFound(kind))
        }
    }
}

/// As listagens nunca falham: qualquer erro vira lista vazia (e fica no log).
pub(crate) fn list_or_empty<T>(kind: &str, result: AppResult<Vec<T>>) -> Json<Vec<T>> {
    match result {
        Ok(items) => {
            tracing::info!("Listagem de {}: {} registos.", kind, items.len());
            Json(items)
        }
        Err(e) => {
            tracing::error!("Erro ao listar {}: {:?}", kind, e);
            Json(Vec::new())
        }
    }
}
