pub mod page;
pub mod routes;
pub mod session;
pub mod wallet;

pub use routes::*;
