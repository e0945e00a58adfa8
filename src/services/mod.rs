pub mod balance_query;

pub use balance_query::{fetch_rows, BalanceQueryFlow};
