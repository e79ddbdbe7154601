mod memory;
mod postgres;

pub use self::memory::InMemoryTransacaoRepository;
pub use self::postgres::TransacaoRepository;
