//! Error types for the token distributor contract
//!
//! Every rejected request surfaces exactly one of these variants; the claim
//! path never silently recovers or partially commits.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    UnauthorizedAdmin,

    #[error("Unauthorized: only the upgrade authority can perform this action")]
    UnauthorizedUpgradeAuthority,

    #[error("Contract is not upgradeable")]
    ContractNotUpgradeable,

    // ========================================================================
    // Claim Signature Errors
    // ========================================================================

    #[error("Invalid authorizer signature")]
    InvalidAuthorizerSignature,

    #[error("Invalid holder signature")]
    InvalidHolderSignature,

    #[error("Invalid public key length: expected 32 bytes, got {got}")]
    InvalidPublicKeyLength { got: usize },

    #[error("Invalid signature length: expected 64 bytes, got {got}")]
    InvalidSignatureLength { got: usize },

    // ========================================================================
    // Claim Validation Errors
    // ========================================================================

    #[error("Claim expired: valid until {valid_until}, now {now}")]
    ClaimExpired { valid_until: i64, now: i64 },

    #[error("Unauthorized destination: claims may only credit the claimant's own account")]
    UnauthorizedDestination,

    #[error("Invalid nonce: expected {expected}, got {got}")]
    InvalidNonce { expected: u64, got: u64 },

    #[error("Nonce too high: expected {expected}, got {got}")]
    NonceTooHigh { expected: u64, got: u64 },

    #[error("Claim too soon: claimable at {claimable_at}")]
    ClaimTooSoon { claimable_at: u64 },

    #[error("Invalid amount: must be greater than zero")]
    InvalidAmount,

    // ========================================================================
    // Transfer-Lock Errors
    // ========================================================================

    #[error("Transfers are not enabled")]
    TransfersNotEnabled,

    #[error("Transfers are permanently enabled and cannot be changed")]
    TransfersAlreadyPermanentlyEnabled,

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid claim period: must be between {min} and {max} seconds")]
    InvalidClaimPeriod { min: u64, max: u64 },

    #[error("Token ledger not set")]
    LedgerNotSet,

    // ========================================================================
    // Treasury Errors
    // ========================================================================

    #[error("Treasury already exists")]
    TreasuryAlreadyExists,

    #[error("Treasury not created")]
    TreasuryNotCreated,
}
