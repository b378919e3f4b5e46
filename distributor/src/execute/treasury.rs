//! Treasury handlers.
//!
//! The treasury is the contract's own account on the bound ledger. It is
//! created once per ledger binding (`SetLedger` clears it) and funded or
//! drained only by the admin.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use common::LedgerExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, TREASURY};

use super::{ledger_msg, load_ledger};

/// Record the treasury account. Fails when one already exists for the
/// current ledger binding.
pub fn execute_create_treasury(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    // The ledger must be bound first; the treasury lives on it
    load_ledger(deps.storage)?;

    if TREASURY.may_load(deps.storage)?.is_some() {
        return Err(ContractError::TreasuryAlreadyExists);
    }

    TREASURY.save(deps.storage, &env.contract.address)?;

    Ok(Response::new()
        .add_attribute("method", "create_treasury")
        .add_attribute("treasury", env.contract.address))
}

/// Mint tokens to the treasury.
pub fn execute_mint_to_treasury(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let ledger = load_ledger(deps.storage)?;
    let treasury = TREASURY
        .may_load(deps.storage)?
        .ok_or(ContractError::TreasuryNotCreated)?;

    let mint_msg = ledger_msg(
        &ledger,
        &LedgerExecuteMsg::Mint {
            recipient: treasury.to_string(),
            amount,
        },
    )?;

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("method", "mint_to_treasury")
        .add_attribute("amount", amount))
}

/// Burn tokens from the treasury.
pub fn execute_burn_from_treasury(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }

    let ledger = load_ledger(deps.storage)?;
    let treasury = TREASURY
        .may_load(deps.storage)?
        .ok_or(ContractError::TreasuryNotCreated)?;

    let burn_msg = ledger_msg(
        &ledger,
        &LedgerExecuteMsg::BurnFrom {
            owner: treasury.to_string(),
            amount,
        },
    )?;

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("method", "burn_from_treasury")
        .add_attribute("amount", amount))
}
