// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password login flow.

use std::time::Duration;

use tokio::time::sleep;

use super::error::AuthError;
use super::session::{SessionIssuer, SESSION_KIND_USER};
use super::{password, CredentialStore};
use crate::models::PublicUser;

/// Fixed delay applied to every failed attempt so that unknown-login and
/// wrong-password outcomes take comparable time.
pub const FAILED_LOGIN_DELAY: Duration = Duration::from_millis(100);

/// Authenticate a login/password pair and mint a session on success.
///
/// Every failure path returns the same [`AuthError::InvalidCredentials`]
/// after [`FAILED_LOGIN_DELAY`]; callers cannot distinguish an unknown
/// login from a wrong password.
pub async fn authenticate(
    store: &CredentialStore,
    sessions: &SessionIssuer,
    login: &str,
    password_input: &str,
) -> Result<(PublicUser, String), AuthError> {
    if let Some(user) = store.find_by_login(login) {
        if password::verify(password_input, &user.password_hash) {
            let token = sessions.issue(&user.id, SESSION_KIND_USER);
            tracing::info!(login = %user.login, role = %user.role, "successful login");
            return Ok((user.redacted(), token));
        }
    }

    tracing::warn!(%login, "failed login attempt");
    sleep(FAILED_LOGIN_DELAY).await;
    Err(AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn test_store() -> CredentialStore {
        let stored = password::hash("Secret123!").unwrap();
        let entry = format!("alice:{stored}:alice@x.com:admin:active");
        CredentialStore::from_lookup(|index| (index == 1).then(|| entry.clone())).unwrap()
    }

    #[tokio::test]
    async fn correct_password_yields_redacted_user_and_token() {
        let store = test_store();
        let sessions = SessionIssuer::new("testsecret");

        let (user, token) = authenticate(&store, &sessions, "alice", "Secret123!")
            .await
            .unwrap();

        assert_eq!(user.login, "alice");
        assert!(token.starts_with("testsecret_"));
        assert!(sessions.validate(&token));
    }

    #[tokio::test]
    async fn failures_are_uniform_and_delayed() {
        let store = test_store();
        let sessions = SessionIssuer::new("testsecret");

        let start = Instant::now();
        let unknown = authenticate(&store, &sessions, "nobody", "Secret123!")
            .await
            .unwrap_err();
        let unknown_elapsed = start.elapsed();

        let start = Instant::now();
        let wrong = authenticate(&store, &sessions, "alice", "wrong-password")
            .await
            .unwrap_err();
        let wrong_elapsed = start.elapsed();

        assert!(unknown_elapsed >= FAILED_LOGIN_DELAY);
        assert!(wrong_elapsed >= FAILED_LOGIN_DELAY);
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(unknown.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn blocked_user_cannot_authenticate_with_correct_password() {
        let stored = password::hash("Secret123!").unwrap();
        let entry = format!("bob:{stored}:bob@x.com:user:blocked");
        let store =
            CredentialStore::from_lookup(|index| (index == 1).then(|| entry.clone()));

        // A store holding only blocked users still loads (they are parsed,
        // just never returned by lookup).
        let store = store.unwrap();
        let error = authenticate(&store, &SessionIssuer::new("s"), "bob", "Secret123!")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Invalid credentials");
    }
}
