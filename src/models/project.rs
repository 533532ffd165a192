// src/models/project.rs
use super::{lenient_id, lenient_text, require_owner, require_present, require_short, user::Role, OwnerSummary};
use crate::error::AppResult;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
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
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub user_id: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub user: Option<OwnerSummary>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            user: OwnerSummary::from_join(row.owner_id, row.owner_username, row.owner_role, row.owner_name),
            id: row.id,
            title: row.title,
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
pub struct ProjectPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
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
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub user_id: i64,
}

impl ProjectPayload {
    // Sem verificação de ordem entre início e fim
    pub fn validate(self) -> AppResult<NewProject> {
        require_short(&self.title, "Title is required and must be less than 100 characters")?;
        require_present(&self.description, "Description is required")?;
        require_present(&self.start_date, "Start date is required")?;
        require_present(&self.end_date, "End date is required")?;
        let user_id = require_owner(self.user_id)?;

        Ok(NewProject {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date.unwrap_or_default(),
            user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn valid() -> ProjectPayload {
        ProjectPayload {
            title: Some("Portfolio".into()),
            description: Some("x".repeat(5000)),
            start_date: Some("2024-06-01".into()),
            end_date: Some("2024-01-01".into()),
            user_id: Some(3),
        }
    }

    #[test]
    fn long_description_and_reversed_dates_are_fine() {
        let project = valid().validate().unwrap();
        assert_eq!(project.description.len(), 5000);
        assert_eq!(project.user_id, 3);
    }

    #[test]
    fn rules_are_checked_in_order() {
        let cases = [
            (ProjectPayload { title: Some("t".repeat(101)), description: None, ..valid() }, "Title is required and must be less than 100 characters"),
            (ProjectPayload { description: None, start_date: None, ..valid() }, "Description is required"),
            (ProjectPayload { start_date: Some(String::new()), ..valid() }, "Start date is required"),
            (ProjectPayload { end_date: None, ..valid() }, "End date is required"),
            (ProjectPayload { user_id: Some(0), ..valid() }, "User ID is required"),
        ];
        for (payload, expected) in cases {
            match payload.validate() {
                Err(AppError::Validation(msg)) => assert_eq!(msg, expected),
                other => panic!("esperava '{}', veio {:?}", expected, other),
            }
        }
    }
}
