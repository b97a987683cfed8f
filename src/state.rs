use std::sync::Arc;

use anyhow::Context;

use crate::config::{AppConfig, JwtConfig};
use crate::store::{memory::MemoryStore, postgres::PgStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store: Arc<dyn UserStore> = match &config.database_url {
            Some(url) => {
                let db = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(10)
                    .connect(url)
                    .await
                    .context("connect to database")?;
                if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
                    tracing::warn!(error = %e, "migration failed; continuing");
                }
                Arc::new(PgStore::new(db))
            }
            None => {
                tracing::warn!("DATABASE_URL not set; falling back to the in-memory store");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self { store, config })
    }

    pub fn from_parts(store: Arc<dyn UserStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// Memory-backed state with a fixed secret, for the test suites.
    pub fn for_tests() -> Self {
        let config = Arc::new(AppConfig {
            database_url: None,
            jwt: JwtConfig {
                secret: "test-secret".into(),
                ttl_hours: 1,
            },
        });
        Self {
            store: Arc::new(MemoryStore::new()),
            config,
        }
    }
}
