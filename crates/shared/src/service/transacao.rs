use crate::{
    abstract_trait::transacao::{DynTransacaoRepository, TransacaoServiceTrait},
    errors::ServiceError,
    model::transacao::Transacao,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct TransacaoService {
    repository: DynTransacaoRepository,
}

impl TransacaoService {
    pub fn new(repository: DynTransacaoRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TransacaoServiceTrait for TransacaoService {
    async fn buscar_por_numero_cartao(
        &self,
        numero_cartao: &str,
    ) -> Result<Transacao, ServiceError> {
        info!("🔍 Buscando transação do cartão {numero_cartao}");

        let transacao = self
            .repository
            .find_by_numero_cartao(numero_cartao)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch transacao for card {numero_cartao}: {e:?}");
                ServiceError::Repo(e)
            })?;

        match transacao {
            Some(transacao) => {
                info!("✅ Transação {} encontrada", transacao.id);
                Ok(transacao)
            }
            None => {
                info!("Nenhuma transação para o cartão {numero_cartao}");
                Err(ServiceError::Consistencia(format!(
                    "Nenhuma transação encontrada para o cartão {numero_cartao}"
                )))
            }
        }
    }

    async fn salvar(&self, transacao: &Transacao) -> Result<Transacao, ServiceError> {
        info!("💾 Salvando transação | CNPJ: {}", transacao.cnpj);

        let salva = self.repository.save(transacao).await.map_err(|e| {
            error!("❌ Failed to save transacao: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Transação {} salva", salva.id);

        Ok(salva)
    }
}
