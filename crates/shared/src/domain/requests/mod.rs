pub mod transacao;

pub use self::transacao::TransacaoDto;
