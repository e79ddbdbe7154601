use crate::model::transacao::Transacao;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoResponse {
    pub id: i32,
    pub cnpj: String,
    pub valor: f64,
    pub qdt_parcelas: i32,
    pub juros: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_cartao: Option<String>,
}

impl From<Transacao> for TransacaoResponse {
    fn from(value: Transacao) -> Self {
        TransacaoResponse {
            id: value.id,
            cnpj: value.cnpj,
            valor: value.valor,
            qdt_parcelas: value.qdt_parcelas,
            juros: value.juros,
            numero_cartao: value.numero_cartao,
        }
    }
}
