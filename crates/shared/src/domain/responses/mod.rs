mod api;
mod transacao;

pub use self::api::ApiResponse;
pub use self::transacao::TransacaoResponse;
