// src/main.rs

// --- Declaração dos Módulos ---
mod config;
mod db;
mod error;
mod models;
mod services;
mod state;
mod web;

// --- Imports ---
use crate::{config::AppConfig, state::AppState};
use axum::serve;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuração do Logging (Tracing) ---
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "portfolio_backend=debug,tower_http=info,sqlx=warn".into()
        }))
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando servidor do portfólio...");

    let config = AppConfig::from_env()?;

    // --- Configuração da Base de Dados ---
    let db_pool = match db::create_db_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Falha crítica ao ligar à base de dados: {}", e);
            return Err(anyhow::anyhow!("Falha ao conectar à DB: {}", e));
        }
    };

    // Schema + contas por defeito (destrutivo se RESET_DB_ON_START)
    if let Err(e) = services::seed_service::bootstrap(&db_pool, &config).await {
        tracing::error!("❌ Falha ao inicializar a base de dados: {}", e);
        return Err(anyhow::anyhow!("Falha no bootstrap da DB: {}", e));
    }

    let app_state = AppState { db_pool };

    // --- Configuração do Endereço e Listener ---
    let addr = config.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Falha ao iniciar listener em {}: {}", addr, e);
            return Err(e.into());
        }
    };
    tracing::info!("📡 Servidor escutando em http://{}", addr);

    let app = web::routes::create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    // --- Início do Servidor ---
    if let Err(e) = serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("❌ Erro fatal no servidor: {}", e);
        return Err(e.into());
    }

    tracing::info!("👋 Servidor terminado.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Sem handler não há forma de parar "limpo": fica a correr até ser morto
        tracing::error!("Falha ao instalar handler de Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
