//! Custom error types for pool pricing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Invalid reserve value {value}")]
    InvalidReserve {
        value: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid token decimals: {decimals} exceeds the supported scale")]
    InvalidDecimals {
        decimals: u32,
    },

    #[error("Division by zero: {side} reserve is empty, pool price is undefined")]
    DivisionByZero {
        side: &'static str,
    },

    #[error("Upstream chain call failed: {message}")]
    Upstream {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type PriceResult<T> = Result<T, PriceError>;
