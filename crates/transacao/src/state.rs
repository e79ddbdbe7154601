use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::{
    abstract_trait::transacao::DynTransacaoRepository,
    config::{Config, ConnectionManager},
    repository::transacao::{InMemoryTransacaoRepository, TransacaoRepository},
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let repository: DynTransacaoRepository = match &config.database_url {
            Some(url) => {
                let pool = ConnectionManager::new_pool(url, config.run_migrations)
                    .await
                    .context("Failed to initialize database pool")?;
                info!("🗄️  Using Postgres repository");
                Arc::new(TransacaoRepository::new(pool)) as DynTransacaoRepository
            }
            None => {
                warn!("DATABASE_URL not set, transactions are kept in memory");
                Arc::new(InMemoryTransacaoRepository::new()) as DynTransacaoRepository
            }
        };

        Ok(Self::from_container(DependenciesInject::new(repository)))
    }

    pub fn from_container(di_container: DependenciesInject) -> Self {
        Self { di_container }
    }
}
