//! Common - Shared Types for the Token Distributor Contracts
//!
//! This package defines the wire interface between the distributor contract
//! and the external token ledger it holds mint/burn/freeze authority over.

pub mod ledger;

pub use ledger::{
    LedgerBalanceResponse, LedgerExecuteMsg, LedgerFrozenResponse, LedgerInstantiateMsg,
    LedgerQueryMsg,
};
