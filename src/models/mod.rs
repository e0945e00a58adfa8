pub mod balance;
pub mod display;
pub mod metadata;
pub mod state;

pub use balance::{BalanceRecord, TokenBalances};
pub use display::DisplayRow;
pub use metadata::{TokenMetadata, DEFAULT_DECIMALS};
pub use state::{Action, QueryStatus, SessionState};
