pub mod domain;
pub mod engine;
pub mod storage;

pub mod config {
    use anyhow::Context;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub database_url: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                database_url: resolve_database_url(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        pub fn require_database_url(&self) -> anyhow::Result<&str> {
            self.database_url
                .as_deref()
                .context("DATABASE_URL (or the POSTGRES_* variables) is required")
        }
    }

    /// `DATABASE_URL` wins; otherwise the URL is composed from the
    /// `POSTGRES_*` variables the docker-compose setup exports.
    fn resolve_database_url() -> Option<String> {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return Some(url);
        }

        let user = env_or("POSTGRES_USER", "postgres");
        let pass = env_or("POSTGRES_PASSWORD", "postgres");
        let host = std::env::var("POSTGRES_HOST").ok()?;
        let port = env_or("POSTGRES_PORT", "5432");
        let db = env_or("POSTGRES_DB", "operadoras_db");

        Some(format!("postgresql://{user}:{pass}@{host}:{port}/{db}"))
    }

    fn env_or(key: &str, default: &str) -> String {
        std::env::var(key).unwrap_or_else(|_| default.to_string())
    }
}
