//! Pool price result types

use alloy::primitives::Address;
use rust_decimal::Decimal;
use serde::Serialize;

/// Spot prices for a pool in both token orders.
///
/// `price` is token1 denominated in token0 units (`amount1 / amount0`),
/// `price_rev` is the inverse. The formatted variants never alter the
/// numeric fields they accompany.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolPrices {
    pub price: Decimal,
    pub price_formatted: String,
    pub price_rev: Decimal,
    pub price_rev_formatted: String,
}

/// Decimal-normalized reserves for each side of the pool.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolReserves {
    pub token0_reserves: Decimal,
    pub token1_reserves: Decimal,
    pub token0_reserves_formatted: String,
    pub token1_reserves_formatted: String,
}

/// Aggregate result for a priced pool.
///
/// Serialized field names (`priceFormatted`, `token0Reserves`, `lpAddress`,
/// ...) are part of the output contract and must not change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolPrice {
    pub price: Decimal,
    pub price_formatted: String,
    pub price_rev: Decimal,
    pub price_rev_formatted: String,
    pub token0_reserves: Decimal,
    pub token1_reserves: Decimal,
    pub token0_reserves_formatted: String,
    pub token1_reserves_formatted: String,
    pub lp_address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn pool_price_serializes_with_fixed_field_names() {
        let result = PoolPrice {
            price: dec!(3),
            price_formatted: "3.00".to_string(),
            price_rev: dec!(0.3333),
            price_rev_formatted: "0.3333".to_string(),
            token0_reserves: dec!(1),
            token1_reserves: dec!(3),
            token0_reserves_formatted: "1.00".to_string(),
            token1_reserves_formatted: "3.00".to_string(),
            lp_address: Address::repeat_byte(0x42),
        };

        let value = serde_json::to_value(&result).expect("serializable");
        for field in [
            "price",
            "priceFormatted",
            "priceRev",
            "priceRevFormatted",
            "token0Reserves",
            "token1Reserves",
            "token0ReservesFormatted",
            "token1ReservesFormatted",
            "lpAddress",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
