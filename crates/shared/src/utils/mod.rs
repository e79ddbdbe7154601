mod cnpj;
mod gracefull;
mod logs;

pub use self::cnpj::{is_valid_cnpj, only_digits};
pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
