// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Dether operations: teller balance reads and user sessions.

pub mod balance;
pub mod context;
pub mod teller;
pub mod user;

pub use balance::get_balance;
pub use context::DetherContext;
pub use teller::{SellPoint, TellerInfo};
pub use user::DetherUser;
