// src/models/user.rs
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

// Representa um utilizador lido da tabela 'users'
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
}

// Corpo do POST /api/login; campos opcionais para distinguir "em falta" (400)
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "credential")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "credential")]
    pub password: Option<String>,
}

// Um valor presente mas que não é string segue como texto JSON e simplesmente não bate certo (401)
fn credential<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
        None => None,
    })
}

/// Parte pública do utilizador (nunca inclui o hash).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub name: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            name: user.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: PublicUser,
}
