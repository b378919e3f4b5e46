//! Query handlers for the token distributor contract.
//!
//! This module contains all query message handlers for retrieving contract
//! state and for computing the canonical claim message off-chain signers
//! must cover.

use cosmwasm_std::{Binary, Deps, Env, StdError, StdResult, Uint64};

use crate::codec::{claim_message, encode_claim_address};
use crate::msg::{
    ClaimMessageResponse, ClaimableAtResponse, ConfigResponse, FrozenStatusResponse,
    TransferStatusResponse, UserRecordResponse,
};
use crate::state::{CONFIG, FROZEN_ACCOUNTS, LEDGER, TRANSFER_LOCK, TREASURY, USERS};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let ledger = LEDGER.may_load(deps.storage)?;
    let treasury_created = TREASURY.may_load(deps.storage)?.is_some();

    Ok(ConfigResponse {
        admin: config.admin,
        authorizer_pubkey: config.authorizer_pubkey,
        require_holder_signature: config.require_holder_signature,
        time_lock_enabled: config.time_lock_enabled,
        claim_period_seconds: config.claim_period_seconds,
        upgrade_authority: config.upgrade_authority,
        upgradeable: config.upgradeable,
        ledger,
        treasury_created,
    })
}

/// Query the global transfer-lock state.
pub fn query_transfer_status(deps: Deps) -> StdResult<TransferStatusResponse> {
    let lock = TRANSFER_LOCK.load(deps.storage)?;
    Ok(TransferStatusResponse {
        transfers_enabled: lock.transfers_enabled,
        transfers_permanently_enabled: lock.transfers_permanently_enabled,
        transfer_enable_timestamp: lock.transfer_enable_timestamp,
    })
}

/// Query a user's claim record. None if the user has never claimed nor
/// registered a claim key.
pub fn query_user_record(deps: Deps, user: String) -> StdResult<Option<UserRecordResponse>> {
    let user_addr = deps.api.addr_validate(&user)?;
    let record = USERS.may_load(deps.storage, &user_addr)?;

    Ok(record.map(|r| UserRecordResponse {
        owner: r.owner,
        nonce: r.nonce,
        claim_pubkey: r.claim_pubkey,
        last_claim_timestamp: r.last_claim_timestamp,
        next_allowed_claim_time: r.next_allowed_claim_time,
        total_claims: r.total_claims,
    }))
}

/// Query when the user can next claim. Mirrors the claim gate: 0 when the
/// time-lock is off or the user has never claimed.
pub fn query_claimable_at(deps: Deps, user: String) -> StdResult<ClaimableAtResponse> {
    let config = CONFIG.load(deps.storage)?;
    let user_addr = deps.api.addr_validate(&user)?;
    let last = USERS
        .may_load(deps.storage, &user_addr)?
        .map(|r| r.last_claim_timestamp)
        .unwrap_or(0);

    let claimable_at = if !config.time_lock_enabled || last == 0 {
        0
    } else {
        last + config.claim_period_seconds
    };
    Ok(ClaimableAtResponse { claimable_at })
}

/// Query whether an account is frozen.
pub fn query_frozen_status(deps: Deps, account: String) -> StdResult<FrozenStatusResponse> {
    let account_addr = deps.api.addr_validate(&account)?;
    let frozen = FROZEN_ACCOUNTS
        .may_load(deps.storage, &account_addr)?
        .unwrap_or(false);

    Ok(FrozenStatusResponse {
        account: account_addr,
        frozen,
    })
}

/// Compute the canonical claim message for the given fields without
/// touching state. Off-chain signers cover exactly these bytes.
pub fn query_claim_message(
    deps: Deps,
    env: Env,
    user: String,
    destination: String,
    amount: Uint64,
    nonce: u64,
    valid_until: i64,
) -> StdResult<ClaimMessageResponse> {
    let ledger = LEDGER
        .may_load(deps.storage)?
        .ok_or_else(|| StdError::generic_err("No ledger bound"))?;

    let user_addr = deps.api.addr_validate(&user)?;
    let destination_addr = deps.api.addr_validate(&destination)?;

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

    Ok(ClaimMessageResponse {
        message: Binary::from(message.to_vec()),
        message_hex: hex::encode(message),
    })
}
