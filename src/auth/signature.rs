// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet signature verification (EIP-191 personal messages).
//!
//! The wallet signs the fixed challenge message with `personal_sign`. The
//! server recovers the signer address from the 65-byte secp256k1 signature
//! over the EIP-191 digest and requires it to equal the claimed address;
//! the challenge string itself must also match exactly.

use alloy::primitives::{keccak256, Address, B256};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::models::WalletAddress;

/// Fixed challenge prefix; the full message appends the wallet address.
pub const LOGIN_MESSAGE_PREFIX: &str = "Login to OSINT HUB with wallet: ";

/// The exact challenge message a wallet must sign to log in.
pub fn login_message(address: &WalletAddress) -> String {
    format!("{LOGIN_MESSAGE_PREFIX}{}", address.as_str())
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("signature must be 65 hex-encoded bytes")]
    InvalidFormat,
    #[error("signer recovery failed")]
    RecoveryFailed,
    #[error("recovered signer does not match the claimed wallet address")]
    SignerMismatch,
}

/// Verify that `signature` was produced by `address` over `message`.
pub fn verify_wallet_signature(
    address: &WalletAddress,
    message: &str,
    signature: &str,
) -> Result<(), SignatureError> {
    let raw = hex::decode(signature.trim_start_matches("0x"))
        .map_err(|_| SignatureError::InvalidFormat)?;
    if raw.len() != 65 {
        return Err(SignatureError::InvalidFormat);
    }

    // r || s || v, with v either 0/1 or the legacy 27/28
    let v = raw[64];
    let recovery = RecoveryId::from_byte(if v >= 27 { v - 27 } else { v })
        .ok_or(SignatureError::InvalidFormat)?;
    let parsed = Signature::from_slice(&raw[..64]).map_err(|_| SignatureError::InvalidFormat)?;

    let digest = eip191_digest(message);
    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &parsed, recovery)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    let point = key.to_encoded_point(false);
    let recovered = Address::from_raw_public_key(&point.as_bytes()[1..]);

    if recovered == address.address() {
        Ok(())
    } else {
        Err(SignatureError::SignerMismatch)
    }
}

/// EIP-191 `personal_sign` digest of a message.
fn eip191_digest(message: &str) -> B256 {
    let mut data = format!("\x19Ethereum Signed Message:\n{}", message.len()).into_bytes();
    data.extend_from_slice(message.as_bytes());
    keccak256(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::SigningKey;

    fn test_key() -> SigningKey {
        SigningKey::from_slice(&[0x42u8; 32]).unwrap()
    }

    fn address_of(key: &SigningKey) -> WalletAddress {
        let point = key.verifying_key().to_encoded_point(false);
        let address = Address::from_raw_public_key(&point.as_bytes()[1..]);
        WalletAddress::parse(&format!("{address:?}")).unwrap()
    }

    fn sign(key: &SigningKey, message: &str) -> String {
        let (signature, recovery) = key
            .sign_prehash_recoverable(eip191_digest(message).as_slice())
            .unwrap();
        let mut raw = signature.to_bytes().to_vec();
        raw.push(recovery.to_byte() + 27);
        format!("0x{}", hex::encode(raw))
    }

    #[test]
    fn valid_signature_verifies() {
        let key = test_key();
        let wallet = address_of(&key);
        let message = login_message(&wallet);
        let signature = sign(&key, &message);

        assert_eq!(verify_wallet_signature(&wallet, &message, &signature), Ok(()));
    }

    #[test]
    fn signature_by_another_key_is_rejected() {
        let key = test_key();
        let other = SigningKey::from_slice(&[0x24u8; 32]).unwrap();
        let wallet = address_of(&key);
        let message = login_message(&wallet);
        let signature = sign(&other, &message);

        assert_eq!(
            verify_wallet_signature(&wallet, &message, &signature),
            Err(SignatureError::SignerMismatch)
        );
    }

    #[test]
    fn signature_over_a_different_message_is_rejected() {
        let key = test_key();
        let wallet = address_of(&key);
        let signature = sign(&key, "something else entirely");

        // Recovery yields *some* key for the real message digest, just not ours.
        assert!(verify_wallet_signature(&wallet, &login_message(&wallet), &signature).is_err());
    }

    #[test]
    fn malformed_signatures_are_rejected() {
        let key = test_key();
        let wallet = address_of(&key);
        let message = login_message(&wallet);

        for raw in ["", "0x", "0xdeadbeef", "not-hex-at-all"] {
            assert_eq!(
                verify_wallet_signature(&wallet, &message, raw),
                Err(SignatureError::InvalidFormat),
                "accepted {raw:?}"
            );
        }
    }
}
