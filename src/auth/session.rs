// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token issuance and validation.
//!
//! Tokens are `{secret}_{kind}_{subject}_{issuedMs}_{expiresMs}_{sig}` with
//! `sig = HMAC-SHA256(secret, "{kind}_{subject}_{issuedMs}_{expiresMs}")`.
//! Downstream consumers that only prefix-match the shared secret keep
//! working, while validation here recomputes the signature and enforces
//! expiry instead of trusting the prefix alone.

use chrono::Utc;
use hmac::{Hmac, Mac};
use ring::constant_time;
use sha2::Sha256;

use super::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Default token lifetime: 24 hours.
const DEFAULT_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Kind tag for password logins.
pub const SESSION_KIND_USER: &str = "user";

/// Kind tag for wallet logins.
pub const SESSION_KIND_NFT: &str = "nft";

/// Decoded contents of a valid session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub kind: String,
    pub subject: String,
    pub issued_at_ms: i64,
    pub expires_at_ms: i64,
}

/// Issues and validates session tokens bound to a process-wide secret.
pub struct SessionIssuer {
    secret: String,
    ttl_ms: i64,
}

impl SessionIssuer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_ms: DEFAULT_TTL_MS,
        }
    }

    #[cfg(test)]
    fn with_ttl(secret: impl Into<String>, ttl_ms: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_ms,
        }
    }

    /// Mint a token for `subject`, tagged with the flow it came from.
    pub fn issue(&self, subject: &str, kind: &str) -> String {
        let issued = Utc::now().timestamp_millis();
        let expires = issued + self.ttl_ms;
        let payload = format!("{kind}_{subject}_{issued}_{expires}");
        let signature = self.sign(&payload);
        format!("{}_{payload}_{signature}", self.secret)
    }

    /// Whether `token` is well-formed, authentic, and unexpired.
    pub fn validate(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// Decode and authenticate a token.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AuthError> {
        self.decode_at(token, Utc::now().timestamp_millis())
    }

    fn decode_at(&self, token: &str, now_ms: i64) -> Result<SessionClaims, AuthError> {
        let rest = token
            .strip_prefix(&self.secret)
            .and_then(|rest| rest.strip_prefix('_'))
            .ok_or(AuthError::MalformedToken)?;

        // The signature and both timestamps never contain underscores; the
        // subject may (split from the right).
        let mut parts = rest.rsplitn(4, '_');
        let signature = parts.next().ok_or(AuthError::MalformedToken)?;
        let expires_at_ms: i64 = parts
            .next()
            .and_then(|raw| raw.parse().ok())
            .ok_or(AuthError::MalformedToken)?;
        let issued_at_ms: i64 = parts
            .next()
            .and_then(|raw| raw.parse().ok())
            .ok_or(AuthError::MalformedToken)?;
        let kind_subject = parts.next().ok_or(AuthError::MalformedToken)?;
        let (kind, subject) = kind_subject.split_once('_').ok_or(AuthError::MalformedToken)?;

        let payload = format!("{kind}_{subject}_{issued_at_ms}_{expires_at_ms}");
        let expected = self.sign(&payload);
        constant_time::verify_slices_are_equal(expected.as_bytes(), signature.as_bytes())
            .map_err(|_| AuthError::InvalidTokenSignature)?;

        if now_ms >= expires_at_ms {
            return Err(AuthError::TokenExpired);
        }

        Ok(SessionClaims {
            kind: kind.to_string(),
            subject: subject.to_string(),
            issued_at_ms,
            expires_at_ms,
        })
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_validate_and_decode() {
        let issuer = SessionIssuer::new("testsecret");
        let token = issuer.issue("42", SESSION_KIND_USER);

        assert!(token.starts_with("testsecret_"));
        assert!(issuer.validate(&token));

        let claims = issuer.decode(&token).unwrap();
        assert_eq!(claims.kind, "user");
        assert_eq!(claims.subject, "42");
        assert_eq!(claims.expires_at_ms - claims.issued_at_ms, DEFAULT_TTL_MS);
    }

    #[test]
    fn subjects_with_underscores_survive_the_round_trip() {
        let issuer = SessionIssuer::new("testsecret");
        let token = issuer.issue("acct_with_underscores", SESSION_KIND_NFT);

        let claims = issuer.decode(&token).unwrap();
        assert_eq!(claims.kind, "nft");
        assert_eq!(claims.subject, "acct_with_underscores");
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let issuer = SessionIssuer::new("testsecret");
        let token = issuer.issue("42", SESSION_KIND_USER);
        let forged = token.replace("_42_", "_43_");

        assert_ne!(token, forged);
        assert!(matches!(
            issuer.decode(&forged),
            Err(AuthError::InvalidTokenSignature)
        ));
    }

    #[test]
    fn prefix_alone_is_not_enough() {
        let issuer = SessionIssuer::new("testsecret");
        assert!(!issuer.validate("testsecret_user_42_123_456_deadbeef"));
        assert!(!issuer.validate("testsecret"));
        assert!(!issuer.validate("othersecret_user_42"));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let issuer = SessionIssuer::with_ttl("testsecret", 0);
        let token = issuer.issue("42", SESSION_KIND_USER);
        assert!(matches!(
            issuer.decode(&token),
            Err(AuthError::TokenExpired)
        ));
    }
}
