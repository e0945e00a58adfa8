pub mod dto;
pub mod page;
pub mod render;

pub use page::*;
