// src/models/mod.rs
pub mod certificate;
pub mod filter;
pub mod internship;
pub mod project;
pub mod user;

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Deserializer};

pub const MAX_SHORT_TEXT: usize = 100;

// --- Regras de validação partilhadas pelas três entidades ---

/// Campo obrigatório e com no máximo 100 caracteres.
pub(crate) fn require_short(value: &Option<String>, message: &str) -> AppResult<()> {
    match value {
        Some(v) if !v.is_empty() && v.chars().count() <= MAX_SHORT_TEXT => Ok(()),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

pub(crate) fn require_present(value: &Option<String>, message: &str) -> AppResult<()> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

// 0 também conta como "em falta"
pub(crate) fn require_owner(user_id: Option<i64>) -> AppResult<i64> {
    match user_id {
        Some(id) if id != 0 => Ok(id),
        _ => Err(AppError::Validation("User ID is required".into())),
    }
}

/// Aceita `user_id` como número JSON ou string numérica; qualquer outra coisa fica `None`.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// Campos de texto: só strings contam; qualquer outro tipo JSON fica `None` e cai na regra do campo.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Campos públicos do dono embebidos em cada registo das listagens.
#[derive(Debug, Clone, serde::Serialize, PartialEq)]
pub struct OwnerSummary {
    pub id: i64,
    pub username: String,
    pub role: user::Role,
    pub name: String,
}

impl OwnerSummary {
    // Colunas vindas de um LEFT JOIN: se faltar alguma, não há dono
    pub(crate) fn from_join(
        id: Option<i64>,
        username: Option<String>,
        role: Option<user::Role>,
        name: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            id: id?,
            username: username?,
            role: role?,
            name: name?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_id")]
        user_id: Option<i64>,
    }

    fn probe(json: &str) -> Option<i64> {
        serde_json::from_str::<Probe>(json).unwrap().user_id
    }

    #[derive(Deserialize)]
    struct Titled {
        #[serde(default, deserialize_with = "lenient_text")]
        title: Option<String>,
    }

    fn title(json: &str) -> Option<String> {
        serde_json::from_str::<Titled>(json).unwrap().title
    }

    #[test]
    fn lenient_text_keeps_only_strings() {
        assert_eq!(title(r#"{"title": "Cert"}"#).as_deref(), Some("Cert"));
        assert_eq!(title(r#"{"title": 123}"#), None);
        assert_eq!(title(r#"{"title": ["a"]}"#), None);
        assert_eq!(title(r#"{"title": null}"#), None);
        assert_eq!(title(r#"{}"#), None);
    }

    #[test]
    fn lenient_id_accepts_numbers_and_numeric_strings() {
        assert_eq!(probe(r#"{"user_id": 3}"#), Some(3));
        assert_eq!(probe(r#"{"user_id": " 12 "}"#), Some(12));
        assert_eq!(probe(r#"{"user_id": "abc"}"#), None);
        assert_eq!(probe(r#"{"user_id": null}"#), None);
        assert_eq!(probe(r#"{"user_id": 1.5}"#), None);
        assert_eq!(probe(r#"{}"#), None);
    }

    #[test]
    fn short_text_limit_counts_characters() {
        let exactly = Some("é".repeat(100));
        assert!(require_short(&exactly, "m").is_ok());
        let over = Some("a".repeat(101));
        assert!(matches!(require_short(&over, "m"), Err(AppError::Validation(msg)) if msg == "m"));
        assert!(require_short(&Some(String::new()), "m").is_err());
        assert!(require_short(&None, "m").is_err());
    }

    #[test]
    fn zero_owner_is_missing() {
        assert!(require_owner(Some(0)).is_err());
        assert!(require_owner(None).is_err());
        assert_eq!(require_owner(Some(4)).unwrap(), 4);
    }

    #[test]
    fn owner_summary_needs_every_column() {
        assert!(OwnerSummary::from_join(Some(1), Some("a".into()), Some(user::Role::Admin), None).is_none());
        let owner = OwnerSummary::from_join(Some(1), Some("a".into()), Some(user::Role::Admin), Some("A".into()));
        assert_eq!(owner.map(|o| o.id), Some(1));
    }
}
