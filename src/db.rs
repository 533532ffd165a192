// src/db.rs
use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// Ordem inversa das dependências (filhos antes de 'users')
const DROP_TABLES: &[&str] = &[
    "DROP TABLE IF EXISTS internships",
    "DROP TABLE IF EXISTS projects",
    "DROP TABLE IF EXISTS certificates",
    "DROP TABLE IF EXISTS users",
];

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY,
        username      TEXT    NOT NULL UNIQUE,
        password_hash TEXT    NOT NULL,
        role          TEXT    NOT NULL CHECK (role IN ('student', 'teacher', 'admin')),
        name          TEXT    NOT NULL,
        created_at    TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at    TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS certificates (
        id          INTEGER PRIMARY KEY,
        title       TEXT    NOT NULL,
        issuer      TEXT    NOT NULL,
        date_issued TEXT    NOT NULL,
        user_id     INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        created_at  TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at  TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id          INTEGER PRIMARY KEY,
        title       TEXT    NOT NULL,
        description TEXT    NOT NULL,
        start_date  TEXT    NOT NULL,
        end_date    TEXT    NOT NULL,
        user_id     INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        created_at  TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at  TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS internships (
        id          INTEGER PRIMARY KEY,
        company     TEXT    NOT NULL,
        position    TEXT    NOT NULL,
        description TEXT    NOT NULL,
        start_date  TEXT    NOT NULL,
        end_date    TEXT    NOT NULL,
        user_id     INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        created_at  TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at  TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_certificates_user ON certificates (user_id)",
    "CREATE INDEX IF NOT EXISTS idx_projects_user ON projects (user_id)",
    "CREATE INDEX IF NOT EXISTS idx_internships_user ON internships (user_id)",
];

pub async fn create_db_pool(database_url: &str) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", database_url);

    // Opções de conexão (criar se não existir, timeout, FKs ativas para o CASCADE)
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Cria as tabelas. Com `reset` apaga primeiro tudo o que existir.
pub async fn init_schema(db_pool: &SqlitePool, reset: bool) -> AppResult<()> {
    let mut tx = db_pool.begin().await?;

    if reset {
        tracing::warn!("⚠️ A recriar o schema: todos os dados existentes serão apagados.");
        for stmt in DROP_TABLES {
            sqlx::query(stmt).execute(&mut *tx).await?;
        }
    }

    for stmt in CREATE_TABLES {
        sqlx::query(stmt).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    tracing::info!("Schema pronto.");
    Ok(())
}

/// Pool em memória com uma só conexão (cada conexão `:memory:` é uma DB distinta).
/// Custo bcrypt mínimo, para os testes não perderem tempo a fazer hash.
#[cfg(test)]
pub const TEST_BCRYPT_COST: u32 = 4;

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("url válida")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("pool em memória");
    init_schema(&pool, true).await.expect("schema");
    pool
}
