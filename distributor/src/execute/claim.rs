//! Claim redemption handlers.
//!
//! This module handles:
//! - `Claim` - redeem a signed claim and credit the user's account
//! - `RegisterClaimKey` - register or rotate the sender's claim key
//!
//! A claim passes a fixed gate sequence: expiry, authorizer signature,
//! holder signature, destination binding, nonce, time-lock. Any failure
//! aborts before a single storage write; the nonce advances in the same
//! execution that emits the ledger credit, so the two commit or revert
//! together.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128, Uint64};

use common::LedgerExecuteMsg;

use crate::codec::{claim_message, encode_claim_address};
use crate::error::ContractError;
use crate::state::{UserRecord, CONFIG, FROZEN_ACCOUNTS, USERS};
use crate::verify::{Verifier, PUBLIC_KEY_LEN, SIGNATURE_LEN};

use super::{ledger_msg, load_ledger};

/// Redeem a signed claim. Anyone may submit; authority travels in the
/// signatures, not the transaction sender.
#[allow(clippy::too_many_arguments)]
pub fn execute_claim(
    deps: DepsMut,
    env: Env,
    verifier: &dyn Verifier,
    user: String,
    destination: String,
    amount: Uint64,
    nonce: u64,
    valid_until: i64,
    authorizer_signature: Binary,
    holder_signature: Option<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let ledger = load_ledger(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let user_addr = deps.api.addr_validate(&user)?;
    let destination_addr = deps.api.addr_validate(&destination)?;

    if authorizer_signature.len() != SIGNATURE_LEN {
        return Err(ContractError::InvalidSignatureLength {
            got: authorizer_signature.len(),
        });
    }
    if let Some(signature) = &holder_signature {
        if signature.len() != SIGNATURE_LEN {
            return Err(ContractError::InvalidSignatureLength {
                got: signature.len(),
            });
        }
    }

    // Gate 1: expiry
    let now = env.block.time.seconds() as i64;
    if now > valid_until {
        return Err(ContractError::ClaimExpired { valid_until, now });
    }

    // Gate 2: signatures over the canonical claim message. The message is
    // recomputed here from the submitted fields, never taken from the caller.
    let contract_identity = encode_claim_address(deps.api, &env.contract.address)?;
    let ledger_identity = encode_claim_address(deps.api, &ledger)?;
    let user_identity = encode_claim_address(deps.api, &user_addr)?;
    let destination_identity = encode_claim_address(deps.api, &destination_addr)?;
    let message = claim_message(
        &contract_identity,
        &ledger_identity,
        &user_identity,
        &destination_identity,
        amount.u64(),
        nonce,
        valid_until,
    );

    let authorized = verifier
        .verify(&message, &authorizer_signature, &config.authorizer_pubkey)
        .unwrap_or(false);
    if !authorized {
        return Err(ContractError::InvalidAuthorizerSignature);
    }

    let mut record = USERS
        .may_load(deps.storage, &user_addr)?
        .unwrap_or_else(|| UserRecord::new(user_addr.clone()));

    // The holder check runs when the contract demands it and whenever a
    // holder signature is supplied voluntarily
    match &holder_signature {
        Some(signature) => {
            let claim_pubkey = record
                .claim_pubkey
                .as_ref()
                .ok_or(ContractError::InvalidHolderSignature)?;
            let held = verifier
                .verify(&message, signature, claim_pubkey)
                .unwrap_or(false);
            if !held {
                return Err(ContractError::InvalidHolderSignature);
            }
        }
        None => {
            if config.require_holder_signature {
                return Err(ContractError::InvalidHolderSignature);
            }
        }
    }

    // Gate 3: destination binding. A claim only credits the claimant's own
    // account, so a validly-signed claim cannot be redirected.
    if destination_addr != user_addr {
        return Err(ContractError::UnauthorizedDestination);
    }

    // Gate 4: nonce. Exactly the current value; lower is a replay, higher
    // skips ahead.
    if nonce < record.nonce {
        return Err(ContractError::InvalidNonce {
            expected: record.nonce,
            got: nonce,
        });
    }
    if nonce > record.nonce {
        return Err(ContractError::NonceTooHigh {
            expected: record.nonce,
            got: nonce,
        });
    }

    // Gate 5: time-lock, evaluated against the currently configured period.
    // First-ever claims pass; a disabled lock always passes.
    let now_seconds = env.block.time.seconds();
    if config.time_lock_enabled && record.last_claim_timestamp > 0 {
        let claimable_at = record.last_claim_timestamp + config.claim_period_seconds;
        if now_seconds < claimable_at {
            return Err(ContractError::ClaimTooSoon { claimable_at });
        }
    }

    // Commit: advance the nonce and stamp the record, then emit the ledger
    // credit. Emitted messages run inside the same transaction; if the
    // ledger rejects, these writes revert with it.
    record.nonce += 1;
    record.total_claims += 1;
    record.last_claim_timestamp = now_seconds;
    record.next_allowed_claim_time = if config.time_lock_enabled {
        now_seconds + config.claim_period_seconds
    } else {
        now_seconds
    };
    USERS.save(deps.storage, &user_addr, &record)?;
    FROZEN_ACCOUNTS.save(deps.storage, &destination_addr, &true)?;

    let messages = vec![
        ledger_msg(
            &ledger,
            &LedgerExecuteMsg::Mint {
                recipient: destination_addr.to_string(),
                amount: Uint128::from(amount.u64()),
            },
        )?,
        ledger_msg(
            &ledger,
            &LedgerExecuteMsg::Freeze {
                account: destination_addr.to_string(),
            },
        )?,
    ];

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "claim")
        .add_attribute("user", user_addr)
        .add_attribute("destination", destination_addr)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string()))
}

/// Register or rotate the sender's claim key. Rotation keeps the nonce
/// sequence and claim history intact.
pub fn execute_register_claim_key(
    deps: DepsMut,
    info: MessageInfo,
    public_key: Binary,
) -> Result<Response, ContractError> {
    if public_key.len() != PUBLIC_KEY_LEN {
        return Err(ContractError::InvalidPublicKeyLength {
            got: public_key.len(),
        });
    }

    let mut record = USERS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_else(|| UserRecord::new(info.sender.clone()));
    record.claim_pubkey = Some(public_key);
    USERS.save(deps.storage, &info.sender, &record)?;

    Ok(Response::new()
        .add_attribute("method", "register_claim_key")
        .add_attribute("user", info.sender))
}
