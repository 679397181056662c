// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::dether::{DetherContext, DetherUser};

#[derive(Clone)]
pub struct AppState {
    pub context: Arc<DetherContext>,
    /// Operator session; `None` when no wallet key is configured.
    pub user: Option<Arc<DetherUser>>,
}

impl AppState {
    pub fn new(context: Arc<DetherContext>, user: Option<DetherUser>) -> Self {
        Self {
            context,
            user: user.map(Arc::new),
        }
    }
}
