// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::{CredentialStore, SessionIssuer};
use crate::blockchain::NftVerifier;

/// Shared application state.
///
/// Everything here is constructed once at startup and read-only afterwards,
/// so plain `Arc`s suffice (no interior locking).
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialStore>,
    pub sessions: Arc<SessionIssuer>,
    pub verifier: Arc<NftVerifier>,
}

impl AppState {
    pub fn new(credentials: CredentialStore, sessions: SessionIssuer, verifier: NftVerifier) -> Self {
        Self {
            credentials: Arc::new(credentials),
            sessions: Arc::new(sessions),
            verifier: Arc::new(verifier),
        }
    }
}
