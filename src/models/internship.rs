// src/models/internship.rs
use super::{lenient_id, lenient_text, require_owner, require_present, require_short, user::Role, OwnerSummary};
use crate::error::AppResult;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct InternshipRow {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub user_id: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub owner_id: Option<i64>,
    pub owner_username: Option<String>,
    pub owner_role: Option<Role>,
    pub owner_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Internship {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub user_id: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub user: Option<OwnerSummary>,
}

impl From<InternshipRow> for Internship {
    fn from(row: InternshipRow) -> Self {
        Self {
            user: OwnerSummary::from_join(row.owner_id, row.owner_username, row.owner_role, row.owner_name),
            id: row.id,
            company: row.company,
            position: row.position,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InternshipPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewInternship {
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub user_id: i64,
}

impl InternshipPayload {
    pub fn validate(self) -> AppResult<NewInternship> {
        require_short(&self.company, "Company is required and must be less than 100 characters")?;
        require_short(&self.position, "Position is required and must be less than 100 characters")?;
        require_present(&self.start_date, "Start date is required")?;
        require_present(&self.end_date, "End date is required")?;
        require_present(&self.description, "Description is required")?;
        let user_id = require_owner(self.user_id)?;

        Ok(NewInternship {
            company: self.company.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date.unwrap_or_default(),
            user_id,
        })
    }
}
