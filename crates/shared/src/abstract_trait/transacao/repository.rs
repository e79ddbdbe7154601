use crate::{errors::RepositoryError, model::transacao::Transacao};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransacaoRepository = Arc<dyn TransacaoRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransacaoRepositoryTrait {
    async fn find_by_numero_cartao(
        &self,
        numero_cartao: &str,
    ) -> Result<Option<Transacao>, RepositoryError>;

    /// Inserts when `id` is 0, otherwise updates the record with that id.
    async fn save(&self, transacao: &Transacao) -> Result<Transacao, RepositoryError>;
}
