pub mod transacao;
