use crate::{errors::ServiceError, model::transacao::Transacao};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransacaoService = Arc<dyn TransacaoServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransacaoServiceTrait {
    async fn buscar_por_numero_cartao(&self, numero_cartao: &str)
    -> Result<Transacao, ServiceError>;
    async fn salvar(&self, transacao: &Transacao) -> Result<Transacao, ServiceError>;
}
