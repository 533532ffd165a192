// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::User,
    services::user_service,
};
use sqlx::SqlitePool;

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&password, &stored_hash)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (verify_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Gera um hash bcrypt para uma senha.
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt (custo {})...", cost);
        bcrypt::hash(&password, cost)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Confere username + password. Utilizador inexistente e senha errada dão o mesmo erro.
pub async fn authenticate(db_pool: &SqlitePool, username: &str, password: &str) -> AppResult<User> {
    let Some(user) = user_service::find_user_by_username(db_pool, username).await? else {
        tracing::warn!("Login falhado: utilizador '{}' não existe.", username);
        return Err(AppError::InvalidCredentials);
    };

    if verify_password(password, &user.password_hash).await? {
        tracing::info!("✅ Login bem-sucedido para: {} ({})", user.username, user.id);
        Ok(user)
    } else {
        tracing::warn!("Login falhado: senha incorreta para '{}'.", username);
        Err(AppError::InvalidCredentials)
    }
}
