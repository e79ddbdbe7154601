pub mod repository;
pub mod service;

pub use self::repository::{DynTransacaoRepository, TransacaoRepositoryTrait};
pub use self::service::{DynTransacaoService, TransacaoServiceTrait};
