// src/services/certificate_service.rs
use crate::{
    error::AppResult,
    models::{
        certificate::{Certificate, CertificateRow, NewCertificate},
        filter::OwnerFilter,
    },
};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_CERTIFICATES: &str = r#"
    SELECT
        c.id, c.title, c.issuer, c.date_issued, c.user_id, c.created_at, c.updated_at,
        u.id AS owner_id, u.username AS owner_username, u.role AS owner_role, u.name AS owner_name
    FROM certificates c
    LEFT JOIN users u ON u.id = c.user_id
"#;

pub async fn list_certificates(db_pool: &SqlitePool, filter: OwnerFilter) -> AppResult<Vec<Certificate>> {
    let rows = match filter {
        OwnerFilter::Nobody => Vec::new(),
        OwnerFilter::Everyone => {
            sqlx::query_as::<_, CertificateRow>(&format!("{} ORDER BY c.id ASC", SELECT_CERTIFICATES))
                .fetch_all(db_pool)
                .await?
        }
        OwnerFilter::Owner(user_id) => {
            sqlx::query_as::<_, CertificateRow>(&format!(
                "{} WHERE c.user_id = ?1 ORDER BY c.id ASC",
                SELECT_CERTIFICATES
            ))
            .bind(user_id)
            .fetch_all(db_pool)
            .await?
        }
    };

    tracing::debug!("Encontrados {} certificados ({:?}).", rows.len(), filter);
    Ok(rows.into_iter().map(Certificate::from).collect())
}

pub async fn insert_certificate(conn: &mut SqliteConnection, new: &NewCertificate) -> AppResult<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO certificates (title, issuer, date_issued, user_id)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&new.title)
    .bind(&new.issuer)
    .bind(&new.date_issued)
    .bind(new.user_id)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();
    Ok(id)
}

/// Cria o certificado numa transação e devolve o ID gerado.
pub async fn create_certificate(db_pool: &SqlitePool, new: &NewCertificate) -> AppResult<i64> {
    tracing::info!("Criando certificado '{}' para user {}", new.title, new.user_id);
    let mut tx = db_pool.begin().await?;

    let id = match insert_certificate(&mut *tx, new).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Falha ao inserir certificado: {:?}", e);
            tx.rollback().await?;
            return Err(e);
        }
    };

    tx.commit().await?;
    tracing::info!("✅ Certificado criado com ID {}.", id);
    Ok(id)
}

pub async fn delete_certificate(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    super::delete_by_id(db_pool, "certificates", "Certificate", id).await
}
