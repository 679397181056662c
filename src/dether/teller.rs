// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Sell-point payloads and teller records.
//!
//! Human inputs are scaled to the contract's integer fields:
//! coordinates ×100000, rates ×100. Identifiers are packed into `bytes16`;
//! the telegram handle is stored in forward byte order and the username in
//! reverse byte order, both right-padded with zeros.

use alloy::primitives::{FixedBytes, U256};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::blockchain::{
    parse_ether, wei_to_decimal, DetherError, RegisterPointArgs, TellerRecord,
};

pub const COORDINATE_SCALE: f64 = 100_000.0;
pub const RATE_SCALE: f64 = 100.0;
pub const IDENTIFIER_LEN: usize = 16;

/// Byte order an identifier is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Forward,
    Reversed,
}

/// Sell point as entered by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SellPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Zone identifier
    pub zone: i16,
    /// Exchange rate (e.g. 20.20)
    pub rates: f64,
    /// Avatar identifier
    pub avatar: i8,
    /// Currency identifier
    pub currency: i8,
    /// Telegram handle (at most 16 bytes)
    pub telegram: String,
    /// Display name (at most 16 bytes)
    pub username: String,
    /// Escrow deposited with the registration, in ETH (e.g. "0.01")
    pub amount: String,
}

impl SellPoint {
    /// On-chain `registerPoint` arguments for this sell point.
    pub fn register_args(&self) -> Result<RegisterPointArgs, DetherError> {
        Ok(RegisterPointArgs {
            lat: scale(self.lat, COORDINATE_SCALE, "lat")?,
            lng: scale(self.lng, COORDINATE_SCALE, "lng")?,
            zone: self.zone,
            rate: scale(self.rates, RATE_SCALE, "rates")?,
            avatar: self.avatar,
            currency: self.currency,
            telegram: identifier_bytes(&self.telegram, ByteOrder::Forward)?,
            username: identifier_bytes(&self.username, ByteOrder::Reversed)?,
        })
    }

    /// Value attached to the registration, in wei.
    pub fn value(&self) -> Result<U256, DetherError> {
        parse_ether(&self.amount)
    }
}

/// Teller record decoded for display.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TellerInfo {
    pub lat: f64,
    pub lng: f64,
    pub zone: i16,
    pub rates: f64,
    pub avatar: i8,
    pub currency: i8,
    pub telegram: String,
    pub username: String,
    /// Escrowed balance in ETH
    pub balance: f64,
}

impl From<TellerRecord> for TellerInfo {
    fn from(record: TellerRecord) -> Self {
        Self {
            lat: f64::from(record.lat) / COORDINATE_SCALE,
            lng: f64::from(record.lng) / COORDINATE_SCALE,
            zone: record.zone,
            rates: f64::from(record.rate) / RATE_SCALE,
            avatar: record.avatar,
            currency: record.currency,
            telegram: identifier_string(&record.telegram, ByteOrder::Forward),
            username: identifier_string(&record.username, ByteOrder::Reversed),
            balance: wei_to_decimal(record.balance),
        }
    }
}

fn scale<T: TryFrom<i64>>(value: f64, factor: f64, field: &str) -> Result<T, DetherError> {
    let scaled = (value * factor).round();
    if !scaled.is_finite() {
        return Err(DetherError::InvalidInput(format!("{field} is not a finite number")));
    }
    T::try_from(scaled as i64)
        .map_err(|_| DetherError::InvalidInput(format!("{field} is out of range: {value}")))
}

/// Pack a short string into a zero-padded `bytes16`.
pub fn identifier_bytes(value: &str, order: ByteOrder) -> Result<FixedBytes<16>, DetherError> {
    let bytes = value.as_bytes();
    if bytes.len() > IDENTIFIER_LEN {
        return Err(DetherError::InvalidInput(format!(
            "identifier {value:?} is longer than {IDENTIFIER_LEN} bytes"
        )));
    }

    let mut out = [0u8; IDENTIFIER_LEN];
    out[..bytes.len()].copy_from_slice(bytes);
    if order == ByteOrder::Reversed {
        out[..bytes.len()].reverse();
    }
    Ok(FixedBytes::from(out))
}

/// Inverse of [`identifier_bytes`]. Invalid UTF-8 is replaced lossily.
pub fn identifier_string(bytes: &FixedBytes<16>, order: ByteOrder) -> String {
    let len = bytes
        .iter()
        .rposition(|b| *b != 0)
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut raw = bytes[..len].to_vec();
    if order == ByteOrder::Reversed {
        raw.reverse();
    }
    String::from_utf8_lossy(&raw).into_owned()
}
