// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password hashing and strength validation.
//!
//! Stored hashes are `hex(salt):hex(derivedKey)` with a 16-byte random salt
//! and a 64-byte Argon2id-derived key. Verification re-derives with the
//! stored salt and compares in constant time; any malformed input or
//! derivation failure verifies as `false` rather than erroring.

use argon2::Argon2;
use ring::constant_time;
use serde::Serialize;

/// Random salt length in bytes.
const SALT_LEN: usize = 16;

/// Derived key length in bytes.
const HASH_LEN: usize = 64;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 12;

/// Punctuation class required by the strength rules.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Substrings that disqualify a password outright (matched case-insensitively).
const WEAK_PATTERNS: &[&str] = &[
    "password",
    "123456",
    "admin",
    "qwerty",
    "letmein",
    "welcome",
    "monkey",
    "1234567890",
    "password123",
];

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to gather randomness from the OS")]
    Rng,
    #[error("key derivation failed")]
    Derivation,
}

/// Hash a password with a fresh random salt.
///
/// Returns the `hex(salt):hex(derivedKey)` storage form.
pub fn hash(password: &str) -> Result<String, PasswordError> {
    let mut salt = [0u8; SALT_LEN];
    getrandom::getrandom(&mut salt).map_err(|_| PasswordError::Rng)?;
    let derived = derive(password.as_bytes(), &salt)?;
    Ok(format!("{}:{}", hex::encode(salt), hex::encode(derived)))
}

fn derive(password: &[u8], salt: &[u8]) -> Result<[u8; HASH_LEN], PasswordError> {
    let mut out = [0u8; HASH_LEN];
    Argon2::default()
        .hash_password_into(password, salt, &mut out)
        .map_err(|_| PasswordError::Derivation)?;
    Ok(out)
}

/// Verify a password against a stored `salt:hash` pair.
///
/// Fails closed: malformed stored strings, bad hex, and derivation errors
/// all return `false`. The comparison is constant-time.
pub fn verify(password: &str, stored: &str) -> bool {
    let Some((salt_hex, hash_hex)) = stored.split_once(':') else {
        return false;
    };
    if salt_hex.is_empty() || hash_hex.is_empty() {
        return false;
    }
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(hash_hex) else {
        return false;
    };
    let Ok(derived) = derive(password.as_bytes(), &salt) else {
        return false;
    };
    constant_time::verify_slices_are_equal(&derived, &expected).is_ok()
}

/// Generate a fresh session secret (64 random bytes, hex-encoded).
pub fn generate_secret() -> Result<String, PasswordError> {
    let mut bytes = [0u8; 64];
    getrandom::getrandom(&mut bytes).map_err(|_| PasswordError::Rng)?;
    Ok(hex::encode(bytes))
}

/// Outcome of a strength check, with every violated rule listed.
#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Check a password against the strength rules.
///
/// Reports all violations, not just the first.
pub fn validate_strength(password: &str) -> StrengthReport {
    let mut errors = Vec::new();

    if password.len() < MIN_PASSWORD_LEN {
        errors.push(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain lowercase letters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain uppercase letters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain numbers".to_string());
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        errors.push("Password must contain special characters".to_string());
    }

    let lowered = password.to_lowercase();
    if WEAK_PATTERNS.iter().any(|weak| lowered.contains(weak)) {
        errors.push("Password contains common weak patterns".to_string());
    }

    StrengthReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
