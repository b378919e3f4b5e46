//! Transfer-lock and account freeze handlers.
//!
//! This module handles:
//! - The one-way permanent transfer enable
//! - Soft pause/resume before the permanent transition
//! - Per-account freeze/unfreeze (admin) and self-unfreeze (holder)

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use common::LedgerExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, FROZEN_ACCOUNTS, TRANSFER_LOCK};

use super::{ledger_msg, load_ledger};

// ============================================================================
// Global Transfer Lock
// ============================================================================

/// Permanently enable transfers. One-way: a second call fails, and no
/// later operation can disable transfers again.
pub fn execute_enable_transfers(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let mut lock = TRANSFER_LOCK.load(deps.storage)?;
    if lock.transfers_permanently_enabled {
        return Err(ContractError::TransfersAlreadyPermanentlyEnabled);
    }

    lock.transfers_enabled = true;
    lock.transfers_permanently_enabled = true;
    lock.transfer_enable_timestamp = Some(env.block.time);
    TRANSFER_LOCK.save(deps.storage, &lock)?;

    Ok(Response::new()
        .add_attribute("method", "enable_transfers")
        .add_attribute("enabled_at", env.block.time.seconds().to_string()))
}

/// Pause transfers. Only available before the permanent transition;
/// afterwards every disable attempt fails rather than silently no-ops.
pub fn execute_pause_transfers(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let mut lock = TRANSFER_LOCK.load(deps.storage)?;
    if lock.transfers_permanently_enabled {
        return Err(ContractError::TransfersAlreadyPermanentlyEnabled);
    }

    lock.transfers_enabled = false;
    TRANSFER_LOCK.save(deps.storage, &lock)?;

    Ok(Response::new().add_attribute("method", "pause_transfers"))
}

/// Resume transfers after a pause. Does not write the enable timestamp;
/// that is recorded exactly once, by the permanent transition.
pub fn execute_resume_transfers(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let mut lock = TRANSFER_LOCK.load(deps.storage)?;
    if lock.transfers_permanently_enabled {
        return Err(ContractError::TransfersAlreadyPermanentlyEnabled);
    }

    lock.transfers_enabled = true;
    TRANSFER_LOCK.save(deps.storage, &lock)?;

    Ok(Response::new().add_attribute("method", "resume_transfers"))
}

// ============================================================================
// Account Freeze Controls
// ============================================================================

/// Freeze an account. Available to the admin at any time, independent
/// of the global transfer switch.
pub fn execute_freeze_account(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let ledger = load_ledger(deps.storage)?;
    let account_addr = deps.api.addr_validate(&account)?;

    FROZEN_ACCOUNTS.save(deps.storage, &account_addr, &true)?;

    let freeze_msg = ledger_msg(
        &ledger,
        &LedgerExecuteMsg::Freeze {
            account: account_addr.to_string(),
        },
    )?;

    Ok(Response::new()
        .add_message(freeze_msg)
        .add_attribute("method", "freeze_account")
        .add_attribute("account", account_addr))
}

/// Unfreeze an account. Available to the admin at any time.
pub fn execute_unfreeze_account(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let ledger = load_ledger(deps.storage)?;
    let account_addr = deps.api.addr_validate(&account)?;

    FROZEN_ACCOUNTS.save(deps.storage, &account_addr, &false)?;

    let thaw_msg = ledger_msg(
        &ledger,
        &LedgerExecuteMsg::Thaw {
            account: account_addr.to_string(),
        },
    )?;

    Ok(Response::new()
        .add_message(thaw_msg)
        .add_attribute("method", "unfreeze_account")
        .add_attribute("account", account_addr))
}

/// Unfreeze the sender's own account. Holders may do this themselves
/// only once transfers are permanently enabled.
pub fn execute_unfreeze_self(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let lock = TRANSFER_LOCK.load(deps.storage)?;
    if !lock.transfers_permanently_enabled {
        return Err(ContractError::TransfersNotEnabled);
    }

    let ledger = load_ledger(deps.storage)?;

    FROZEN_ACCOUNTS.save(deps.storage, &info.sender, &false)?;

    let thaw_msg = ledger_msg(
        &ledger,
        &LedgerExecuteMsg::Thaw {
            account: info.sender.to_string(),
        },
    )?;

    Ok(Response::new()
        .add_message(thaw_msg)
        .add_attribute("method", "unfreeze_self")
        .add_attribute("account", info.sender))
}
