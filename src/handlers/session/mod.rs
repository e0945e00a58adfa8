pub mod dto;
pub mod session;

pub use session::*;
