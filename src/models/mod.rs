pub mod currency;
pub mod session;

pub use currency::{CurrencyList, CurrencyListError, DEFAULT_CURRENCIES};
pub use session::{parse_amount, AmountParseError, Failure, Session, Stage};
