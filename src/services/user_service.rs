// src/services/user_service.rs
use crate::{
    error::AppResult,
    models::user::{Role, User},
};
use sqlx::{SqliteConnection, SqlitePool};

/// Conta a criar no arranque (a senha já vem em hash).
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
}

/// Busca um utilizador pelo username (único).
pub async fn find_user_by_username(db_pool: &SqlitePool, username: &str) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador por username: {}", username);
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, role, name
        FROM users
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(db_pool)
    .await?;

    if user.is_some() {
        tracing::debug!("Utilizador '{}' encontrado.", username);
    } else {
        tracing::debug!("Utilizador '{}' não encontrado.", username);
    }
    Ok(user)
}

// Insere com ID explícito; corre dentro da transação de quem chama
pub async fn insert_user(conn: &mut SqliteConnection, user: &SeedUser) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, role, name)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(user.role)
    .bind(&user.name)
    .execute(&mut *conn)
    .await?;

    tracing::debug!("Utilizador '{}' inserido com ID {}.", user.username, user.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn seed_user(id: i64, username: &str, role: Role) -> SeedUser {
        SeedUser {
            id,
            username: username.into(),
            password_hash: "hash".into(),
            role,
            name: username.to_uppercase(),
        }
    }

    #[tokio::test]
    async fn inserted_user_is_found_by_username() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert_user(&mut conn, &seed_user(42, "teacher1", Role::Teacher)).await.unwrap();
        drop(conn);

        let user = find_user_by_username(&pool, "teacher1").await.unwrap().unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.role, Role::Teacher);
        assert_eq!(user.name, "TEACHER1");

        assert!(find_user_by_username(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_fails() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert_user(&mut conn, &seed_user(1, "dup", Role::Student)).await.unwrap();
        assert!(insert_user(&mut conn, &seed_user(2, "dup", Role::Admin)).await.is_err());
    }
}
