//! Admin and upgrade-authority operations handlers.
//!
//! This module handles:
//! - Ledger binding
//! - Direct mint/burn (admin-authorized, outside the claim flow)
//! - Time-lock reconfiguration and authorizer key rotation
//! - Upgrade authority transfer and upgrade pre-flight

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Uint128};

use common::LedgerExecuteMsg;

use crate::error::ContractError;
use crate::state::{
    CONFIG, FROZEN_ACCOUNTS, LEDGER, MAX_CLAIM_PERIOD, MIN_CLAIM_PERIOD, TREASURY,
};
use crate::verify::PUBLIC_KEY_LEN;

use super::{ledger_msg, load_ledger};

// ============================================================================
// Ledger Binding
// ============================================================================

/// Bind the token ledger contract. Rebinding clears the treasury, which
/// must be re-created on the new ledger.
pub fn execute_set_ledger(
    deps: DepsMut,
    info: MessageInfo,
    ledger: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let ledger_addr = deps.api.addr_validate(&ledger)?;
    LEDGER.save(deps.storage, &ledger_addr)?;
    TREASURY.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "set_ledger")
        .add_attribute("ledger", ledger_addr))
}

// ============================================================================
// Direct Mint / Burn
// ============================================================================

/// Mint tokens to an account outside the claim flow. The credited
/// account is frozen, matching claim credits.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let ledger = load_ledger(deps.storage)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    FROZEN_ACCOUNTS.save(deps.storage, &recipient_addr, &true)?;

    let messages = vec![
        ledger_msg(
            &ledger,
            &LedgerExecuteMsg::Mint {
                recipient: recipient_addr.to_string(),
                amount,
            },
        )?,
        ledger_msg(
            &ledger,
            &LedgerExecuteMsg::Freeze {
                account: recipient_addr.to_string(),
            },
        )?,
    ];

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "mint")
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount))
}

/// Burn tokens from an account.
pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let ledger = load_ledger(deps.storage)?;
    let owner_addr = deps.api.addr_validate(&owner)?;

    let burn_msg = ledger_msg(
        &ledger,
        &LedgerExecuteMsg::BurnFrom {
            owner: owner_addr.to_string(),
            amount,
        },
    )?;

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("method", "burn")
        .add_attribute("owner", owner_addr)
        .add_attribute("amount", amount))
}

// ============================================================================
// Time Lock & Authorizer Key
// ============================================================================

/// Reconfigure the claim time-lock. Reconfiguration is bounded tighter
/// than instantiation; takes effect on the next claim evaluation.
pub fn execute_set_time_lock(
    deps: DepsMut,
    info: MessageInfo,
    claim_period_seconds: u64,
    time_lock_enabled: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    if !(MIN_CLAIM_PERIOD..=MAX_CLAIM_PERIOD).contains(&claim_period_seconds) {
        return Err(ContractError::InvalidClaimPeriod {
            min: MIN_CLAIM_PERIOD,
            max: MAX_CLAIM_PERIOD,
        });
    }

    config.claim_period_seconds = claim_period_seconds;
    config.time_lock_enabled = time_lock_enabled;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_time_lock")
        .add_attribute("claim_period_seconds", claim_period_seconds.to_string())
        .add_attribute("time_lock_enabled", time_lock_enabled.to_string()))
}

/// Rotate the authorizer public key.
pub fn execute_set_authorizer_key(
    deps: DepsMut,
    info: MessageInfo,
    public_key: Binary,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    if public_key.len() != PUBLIC_KEY_LEN {
        return Err(ContractError::InvalidPublicKeyLength {
            got: public_key.len(),
        });
    }

    config.authorizer_pubkey = public_key;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "set_authorizer_key"))
}

// ============================================================================
// Upgrade Authority
// ============================================================================

/// Transfer the upgrade authority, or clear it with None to make the
/// contract permanently non-upgradeable.
pub fn execute_set_upgrade_authority(
    deps: DepsMut,
    info: MessageInfo,
    new_authority: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if !config.upgradeable {
        return Err(ContractError::ContractNotUpgradeable);
    }
    match &config.upgrade_authority {
        Some(authority) if info.sender == *authority => {}
        _ => return Err(ContractError::UnauthorizedUpgradeAuthority),
    }

    let response = match new_authority {
        Some(addr) => {
            let authority_addr = deps.api.addr_validate(&addr)?;
            config.upgrade_authority = Some(authority_addr.clone());
            Response::new()
                .add_attribute("method", "set_upgrade_authority")
                .add_attribute("new_authority", authority_addr)
        }
        None => {
            config.upgrade_authority = None;
            config.upgradeable = false;
            Response::new()
                .add_attribute("method", "set_upgrade_authority")
                .add_attribute("new_authority", "none")
                .add_attribute("upgradeable", "false")
        }
    };

    CONFIG.save(deps.storage, &config)?;
    Ok(response)
}

/// Pre-flight check run by deployment tooling before a migration.
pub fn execute_validate_upgrade(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !config.upgradeable {
        return Err(ContractError::ContractNotUpgradeable);
    }
    match &config.upgrade_authority {
        Some(authority) if info.sender == *authority => {}
        _ => return Err(ContractError::UnauthorizedUpgradeAuthority),
    }

    Ok(Response::new().add_attribute("method", "validate_upgrade"))
}
