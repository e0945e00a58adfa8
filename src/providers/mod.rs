pub mod alchemy;
pub mod rpc;
pub mod token_data;
pub mod wallet;

pub use alchemy::AlchemyClient;
pub use rpc::{JsonRpcClient, RpcCallError};
pub use token_data::TokenDataProvider;
pub use wallet::{RpcWalletProvider, WalletProvider};
