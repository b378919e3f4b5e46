//! Execute handlers for the token distributor contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `claim` - Signed-claim redemption and claim key registration
//! - `admin` - Ledger binding, direct mint/burn, time-lock and key rotation,
//!   upgrade authority management
//! - `transfers` - Global transfer lock and per-account freeze controls
//! - `treasury` - Treasury creation and treasury mint/burn

mod admin;
mod claim;
mod transfers;
mod treasury;

pub use admin::*;
pub use claim::*;
pub use transfers::*;
pub use treasury::*;

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Storage, WasmMsg};

use common::LedgerExecuteMsg;

use crate::error::ContractError;
use crate::state::LEDGER;

/// Build an execute message addressed to the bound ledger contract.
pub(crate) fn ledger_msg(ledger: &Addr, msg: &LedgerExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: ledger.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

/// Load the bound ledger address, failing when none is bound yet.
pub(crate) fn load_ledger(storage: &dyn Storage) -> Result<Addr, ContractError> {
    LEDGER
        .may_load(storage)?
        .ok_or(ContractError::LedgerNotSet)
}
