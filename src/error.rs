// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro ao processar password")]
    PasswordHashingError,

    // Mensagem já pronta para o cliente (regra de validação que falhou)
    #[error("Dados inválidos: {0}")]
    Validation(String),

    #[error("Credenciais em falta")]
    MissingCredentials,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("{0} não encontrado")]
    NotFound(&'static str),

    #[error("Erro interno inesperado")]
    InternalServerError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MissingCredentials => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SqlxError(_)
            | AppError::PasswordHashingError
            | AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensagem devolvida ao cliente. Erros internos nunca expõem a causa.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::MissingCredentials => "Missing username or password".into(),
            AppError::InvalidCredentials => "Invalid credentials".into(),
            AppError::NotFound(kind) => format!("{} not found", kind),
            _ => "An error occurred".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::debug!("Pedido rejeitado ({}): {}", status, self);
        }

        let body = json!({ "success": false, "message": self.user_message() });
        (status, Json(body)).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
