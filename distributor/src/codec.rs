//! Claim message codec
//!
//! Builds the canonical byte string both parties sign. The domain tag and
//! the contract's own identity are part of the message, so a signature can
//! never be replayed against another protocol version or another deployed
//! instance of the same code. The layout is fixed-width with no dynamic
//! framing; any one-bit change in any field changes the output.
//!
//! # Byte Layout (172 bytes total)
//! - Bytes 0-19:    domain tag "DISTRIBUTOR_CLAIM_V1" (20 bytes)
//! - Bytes 20-51:   contract identity (32 bytes)
//! - Bytes 52-83:   token ledger identity (32 bytes)
//! - Bytes 84-115:  user address (32 bytes)
//! - Bytes 116-147: destination address (32 bytes)
//! - Bytes 148-155: amount (u64, little-endian)
//! - Bytes 156-163: nonce (u64, little-endian)
//! - Bytes 164-171: valid_until (i64, little-endian)

use cosmwasm_std::{Addr, Api, StdError, StdResult};

use crate::state::CLAIM_DOMAIN_TAG;

/// Total size of a claim message in bytes
pub const CLAIM_MESSAGE_LEN: usize = 172;

/// Build the canonical claim message for the given request fields.
///
/// Identities are the 32-byte encodings produced by [`encode_claim_address`].
/// Integers are serialized little-endian at fixed offsets.
pub fn claim_message(
    contract_identity: &[u8; 32],
    ledger_identity: &[u8; 32],
    user: &[u8; 32],
    destination: &[u8; 32],
    amount: u64,
    nonce: u64,
    valid_until: i64,
) -> [u8; CLAIM_MESSAGE_LEN] {
    let mut data = [0u8; CLAIM_MESSAGE_LEN];

    data[0..20].copy_from_slice(CLAIM_DOMAIN_TAG);
    data[20..52].copy_from_slice(contract_identity);
    data[52..84].copy_from_slice(ledger_identity);
    data[84..116].copy_from_slice(user);
    data[116..148].copy_from_slice(destination);
    data[148..156].copy_from_slice(&amount.to_le_bytes());
    data[156..164].copy_from_slice(&nonce.to_le_bytes());
    data[164..172].copy_from_slice(&valid_until.to_le_bytes());

    data
}

/// Encode an address as 32 bytes (left-padded)
///
/// Canonical addresses are 20 or 32 bytes on this platform. We left-pad
/// with zeros to a fixed width so field boundaries inside the claim message
/// never shift. Longer canonical forms are rejected; they cannot be framed
/// without shifting the layout.
pub fn encode_claim_address(api: &dyn Api, addr: &Addr) -> StdResult<[u8; 32]> {
    let canonical = api.addr_canonicalize(addr.as_str())?;
    let bytes = canonical.as_slice();

    if bytes.len() > 32 {
        return Err(StdError::generic_err(format!(
            "Canonical address exceeds 32 bytes: got {}",
            bytes.len()
        )));
    }

    let mut result = [0u8; 32];
    let start = 32 - bytes.len();
    result[start..].copy_from_slice(bytes);

    Ok(result)
}
