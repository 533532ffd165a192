// src/state.rs
use sqlx::SqlitePool;

// Único recurso partilhado entre pedidos: o pool da base de dados
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
