// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Conversion between decimal token amounts and smallest-unit integers.

use alloy::primitives::U256;

use super::error::DetherError;

/// Decimals of the Dether token and of ether.
pub const TOKEN_DECIMALS: u8 = 18;

/// Parse a human-readable amount to its smallest unit.
///
/// # Arguments
/// * `amount` - Amount as a string (e.g., "0.01")
/// * `decimals` - Number of decimals
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, DetherError> {
    let amount = amount.trim();
    let parts: Vec<&str> = amount.split('.').collect();

    let digits_only = parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()));
    if parts.len() > 2 || !digits_only || parts.iter().all(|p| p.is_empty()) {
        return Err(DetherError::InvalidInput(format!(
            "Invalid amount format: {amount:?}"
        )));
    }

    let whole = if parts[0].is_empty() {
        0u128
    } else {
        parts[0]
            .parse::<u128>()
            .map_err(|_| DetherError::InvalidInput("Invalid whole number".to_string()))?
    };

    let decimal_part = if parts.len() == 2 && !parts[1].is_empty() {
        let dec_str = parts[1];
        if dec_str.len() > decimals as usize {
            return Err(DetherError::InvalidInput(format!(
                "Too many decimal places (max {decimals})"
            )));
        }
        let padded = format!("{:0<width$}", dec_str, width = decimals as usize);
        padded
            .parse::<u128>()
            .map_err(|_| DetherError::InvalidInput("Invalid decimal".to_string()))?
    } else {
        0u128
    };

    let multiplier = 10u128.pow(decimals as u32);
    let total = whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(decimal_part))
        .ok_or_else(|| DetherError::InvalidInput("Amount overflow".to_string()))?;

    Ok(U256::from(total))
}

/// Parse an 18-decimal amount to wei.
pub fn parse_ether(amount: &str) -> Result<U256, DetherError> {
    parse_units(amount, TOKEN_DECIMALS)
}

/// Format a smallest-unit amount as a decimal string, without trailing zeros.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / divisor;
    let remainder = amount % divisor;

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let decimal_str = format!("{:0>width$}", remainder, width = decimals as usize);
        let trimmed = decimal_str.trim_end_matches('0');
        if trimmed.is_empty() {
            whole.to_string()
        } else {
            format!("{}.{}", whole, trimmed)
        }
    }
}

pub fn format_ether(amount: U256) -> String {
    format_units(amount, TOKEN_DECIMALS)
}

/// Convert wei to a decimal number (`amount / 10^18`).
pub fn wei_to_decimal(amount: U256) -> f64 {
    format_ether(amount).parse::<f64>().unwrap_or(f64::INFINITY)
}
