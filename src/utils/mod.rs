pub mod address;
pub mod html;
pub mod units;

pub use address::{contract_key, shorten_address};
pub use html::escape_html;
pub use units::{format_balance, parse_raw_balance};
