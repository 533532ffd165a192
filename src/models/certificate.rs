// src/models/certificate.rs
use super::{lenient_id, lenient_text, require_owner, require_present, require_short, user::Role, OwnerSummary};
use crate::error::AppResult;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Linha de 'certificates' com as colunas do dono (LEFT JOIN users)
#[derive(Debug, FromRow)]
pub struct CertificateRow {
    pub id: i64,
    pub title: String,
    pub issuer: String,
    pub date_issued: String,
    pub user_id: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub owner_id: Option<i64>,
    pub owner_username: Option<String>,
    pub owner_role: Option<Role>,
    pub owner_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Certificate {
    pub id: i64,
    pub title: String,
    pub issuer: String,
    pub date_issued: String,
    pub user_id: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub user: Option<OwnerSummary>,
}

impl From<CertificateRow> for Certificate {
    fn from(row: CertificateRow) -> Self {
        Self {
            user: OwnerSummary::from_join(row.owner_id, row.owner_username, row.owner_role, row.owner_name),
            id: row.id,
            title: row.title,
            issuer: row.issuer,
            date_issued: row.date_issued,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Corpo do POST /api/certificates tal como chega do cliente.
#[derive(Debug, Default, Deserialize)]
pub struct CertificatePayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub issuer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_issued: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i64>,
}

/// Certificado já validado, pronto a inserir.
#[derive(Debug, Clone)]
pub struct NewCertificate {
    pub title: String,
    pub issuer: String,
    pub date_issued: String,
    pub user_id: i64,
}

impl CertificatePayload {
    pub fn validate(self) -> AppResult<NewCertificate> {
        require_short(&self.title, "Title is required and must be less than 100 characters")?;
        require_short(&self.issuer, "Issuer is required and must be less than 100 characters")?;
        require_present(&self.date_issued, "Date issued is required")?;
        let user_id = require_owner(self.user_id)?;

        Ok(NewCertificate {
            title: self.title.unwrap_or_default(),
            issuer: self.issuer.unwrap_or_default(),
            date_issued: self.date_issued.unwrap_or_default(),
            user_id,
        })
    }
}
