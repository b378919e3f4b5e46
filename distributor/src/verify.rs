//! Signature verification
//!
//! Verification is delegated to the platform's precompiled ed25519 check
//! through the [`Verifier`] trait, so the scheme can be swapped without
//! touching the claim orchestrator. Callers treat any verification failure
//! as a plain `false`; which party's check failed is decided at the call
//! site, not here.

use cosmwasm_std::{Api, StdError, StdResult};

/// ed25519 public key length in bytes
pub const PUBLIC_KEY_LEN: usize = 32;

/// ed25519 signature length in bytes
pub const SIGNATURE_LEN: usize = 64;

/// A single asymmetric signature check over a claim message.
pub trait Verifier {
    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> StdResult<bool>;
}

/// Production verifier backed by the platform's ed25519 precompile.
pub struct ApiVerifier<'a> {
    api: &'a dyn Api,
}

impl<'a> ApiVerifier<'a> {
    pub fn new(api: &'a dyn Api) -> Self {
        ApiVerifier { api }
    }
}

impl Verifier for ApiVerifier<'_> {
    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> StdResult<bool> {
        self.api
            .ed25519_verify(message, signature, public_key)
            .map_err(StdError::verification_err)
    }
}
