// src/services/mod.rs
pub mod auth_service;
pub mod certificate_service;
pub mod internship_service;
pub mod project_service;
pub mod seed_service;
pub mod user_service;

use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Apaga um registo por ID numa transação. `table` é sempre uma constante interna.
pub(crate) async fn delete_by_id(
    db_pool: &SqlitePool,
    table: &'static str,
    kind: &'static str,
    id: i64,
) -> AppResult<()> {
    let mut tx = db_pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar(&format!("SELECT id FROM {} WHERE id = ?1", table))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    if existing.is_none() {
        tracing::warn!("{} {} não existe; nada a apagar.", kind, id);
        tx.rollback().await?;
        return Err(AppError::NotFound(kind));
    }

    let deleted = sqlx::query(&format!("DELETE FROM {} WHERE id = ?1", table))
        .bind(id)
        .execute(&mut *tx)
        .await;

    if let Err(e) = deleted {
        tracing::error!("Falha ao apagar {} {}: {:?}", kind, id, e);
        tx.rollback().await?;
        return Err(e.into());
    }

    tx.commit().await?;
    tracing::info!("🗑️ {} {} apagado.", kind, id);
    Ok(())
}
