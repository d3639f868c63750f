//! Raw on-chain pool and token reads

pub mod reserves;
pub mod tokens;

pub use reserves::*;
pub use tokens::*;
