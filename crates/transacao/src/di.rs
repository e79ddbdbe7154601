use shared::{
    abstract_trait::transacao::{DynTransacaoRepository, DynTransacaoService},
    service::TransacaoService,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub transacao_service: DynTransacaoService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("transacao_service", &"TransacaoService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(repository: DynTransacaoRepository) -> Self {
        let transacao_service =
            Arc::new(TransacaoService::new(repository)) as DynTransacaoService;

        Self { transacao_service }
    }

    pub fn with_service(transacao_service: DynTransacaoService) -> Self {
        Self { transacao_service }
    }
}
