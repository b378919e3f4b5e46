//! Execute and query interface of the external token ledger.
//!
//! The distributor never mutates balances itself; it emits these messages to
//! the ledger contract bound via `SetLedger`. The ledger must grant the
//! distributor mint, burn and freeze authority. `Mint` and `BurnFrom` follow
//! the cw20 field convention; `Freeze`/`Thaw` are the account-level flag the
//! ledger enforces on transfers.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct LedgerInstantiateMsg {
    /// The only address allowed to mint, burn, freeze and thaw
    pub authority: String,
}

#[cw_serde]
pub enum LedgerExecuteMsg {
    /// Credit `amount` to `recipient`'s balance
    Mint { recipient: String, amount: Uint128 },
    /// Debit `amount` from `owner`'s balance
    BurnFrom { owner: String, amount: Uint128 },
    /// Mark `account` frozen; the ledger must reject its outgoing transfers
    Freeze { account: String },
    /// Clear the frozen flag on `account`
    Thaw { account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum LedgerQueryMsg {
    /// Returns the balance held by `account`
    #[returns(LedgerBalanceResponse)]
    Balance { account: String },
    /// Returns whether `account` is currently frozen
    #[returns(LedgerFrozenResponse)]
    FrozenStatus { account: String },
}

#[cw_serde]
pub struct LedgerBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct LedgerFrozenResponse {
    pub frozen: bool,
}
