pub mod table;
pub mod errors;
pub mod money;
pub mod notice;

pub use table::Table;
pub use errors::{extract_clean_error, BankError};
pub use money::Money;
