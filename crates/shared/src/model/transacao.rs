use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Transacao {
    pub id: i32,
    pub cnpj: String,
    pub valor: f64,
    pub qdt_parcelas: i32,
    pub juros: f64,
    pub numero_cartao: Option<String>,
}
