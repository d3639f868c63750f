//! Error types for the pricing service

pub mod price_error;

pub use price_error::*;
