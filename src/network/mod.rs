//! Network providers and chain access

pub mod chain;
pub mod providers;

pub use chain::*;
pub use providers::*;
