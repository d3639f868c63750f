//! Core data types and structures

pub mod pools;
pub mod tokens;

pub use pools::*;
pub use tokens::*;
