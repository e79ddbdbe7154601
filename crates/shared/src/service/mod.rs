mod transacao;

pub use self::transacao::TransacaoService;
