pub mod page;
pub mod session;
pub mod wallet;

pub use page::*;
pub use session::*;
pub use wallet::*;
