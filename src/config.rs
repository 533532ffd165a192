// src/config.rs
use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Apaga e recria o schema (e semeia os utilizadores por defeito) no arranque.
    pub reset_on_start: bool,
    pub seed_sample_data: bool,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://portfolio.db".into());
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("APP_PORT inválida: {}", v))?,
            Err(_) => 5000,
        };
        let reset_on_start = env_flag("RESET_DB_ON_START", true)?;
        let seed_sample_data = env_flag("SEED_SAMPLE_DATA", false)?;
        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(v) => v
                .parse::<u32>()
                .with_context(|| format!("BCRYPT_COST inválido: {}", v))?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url,
            host,
            port,
            reset_on_start,
            seed_sample_data,
            bcrypt_cost,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_flag(name: &str, default: bool) -> anyhow::Result<bool> {
    match std::env::var(name) {
        Ok(v) => parse_flag(&v).with_context(|| format!("{} tem um valor inválido: {}", name, v)),
        Err(_) => Ok(default),
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("esperado booleano, recebido '{}'", other)),
    }
}
