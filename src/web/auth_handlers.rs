// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, LoginResponse},
    services::auth_service,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    // Sem username/password nem chegamos à base de dados
    let (username, password) = match payload {
        Ok(Json(LoginRequest {
            username: Some(username),
            password: Some(password),
        })) => (username, password),
        _ => {
            tracing::warn!("Pedido de login sem username ou password.");
            return Err(AppError::MissingCredentials);
        }
    };

    tracing::info!("Tentativa de login para: {}", username);
    let user = auth_service::authenticate(&state.db_pool, &username, &password).await?;

    Ok(Json(LoginResponse {
        success: true,
        user: user.into(),
    }))
}
