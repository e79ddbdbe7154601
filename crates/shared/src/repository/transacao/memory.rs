use crate::{
    abstract_trait::transacao::TransacaoRepositoryTrait, errors::RepositoryError,
    model::transacao::Transacao,
};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct InMemoryTransacaoRepository {
    records: RwLock<BTreeMap<i32, Transacao>>,
    sequence: AtomicI32,
}

impl InMemoryTransacaoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransacaoRepositoryTrait for InMemoryTransacaoRepository {
    async fn find_by_numero_cartao(
        &self,
        numero_cartao: &str,
    ) -> Result<Option<Transacao>, RepositoryError> {
        let records = self.records.read().await;

        Ok(records
            .values()
            .rev()
            .find(|t| t.numero_cartao.as_deref() == Some(numero_cartao))
            .cloned())
    }

    async fn save(&self, transacao: &Transacao) -> Result<Transacao, RepositoryError> {
        let mut records = self.records.write().await;

        let mut saved = transacao.clone();

        if saved.id == 0 {
            saved.id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        } else if !records.contains_key(&saved.id) {
            return Err(RepositoryError::NotFound);
        }

        records.insert(saved.id, saved.clone());

        Ok(saved)
    }
}
