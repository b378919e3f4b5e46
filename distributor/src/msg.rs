//! Message types for the token distributor contract
//!
//! This module defines all messages for instantiation, execution, and queries,
//! including the signed-claim payload and the transfer-lock controls.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128, Uint64};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// 32-byte ed25519 public key of the off-chain claim authorizer
    pub authorizer_pubkey: Binary,
    /// When true, claims must also carry a valid signature from the
    /// holder's registered claim key
    pub require_holder_signature: bool,
    /// Seconds between successive claims per user (30..=31536000 here;
    /// later reconfiguration is bounded to 3600..=31536000)
    pub claim_period_seconds: u64,
    /// Whether the per-user claim time-lock is enforced
    pub time_lock_enabled: bool,
    /// Upgrade authority, distinct from the admin. None deploys the
    /// contract permanently non-upgradeable.
    pub upgrade_authority: Option<String>,
    /// Token ledger contract to credit on claims. Can be bound later
    /// via `SetLedger`; claims fail until one is bound.
    pub ledger: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Claims
    // ========================================================================
    /// Redeem a signed claim and credit `amount` to `destination`
    ///
    /// Authorization: Anyone (authority travels in the signatures, not
    /// the transaction sender)
    ///
    /// The signatures cover the canonical 172-byte claim message (see
    /// `QueryMsg::ClaimMessage`). Credited balances start frozen.
    Claim {
        /// Claiming user (owner of the nonce sequence)
        user: String,
        /// Account to credit; must equal `user`
        destination: String,
        /// Amount to credit (codec-bound to 64 bits)
        amount: Uint64,
        /// Per-user sequence number; must equal the user's current nonce
        nonce: u64,
        /// Expiry as Unix seconds; the claim is invalid once `now > valid_until`
        valid_until: i64,
        /// 64-byte ed25519 signature by the configured authorizer key
        authorizer_signature: Binary,
        /// 64-byte ed25519 signature by the user's registered claim key.
        /// Required when the contract demands holder signatures; verified
        /// whenever present.
        holder_signature: Option<Binary>,
    },

    /// Register or rotate the sender's own 32-byte ed25519 claim key
    ///
    /// Authorization: Anyone (affects only the sender's record)
    RegisterClaimKey {
        /// ed25519 public key (exactly 32 bytes)
        public_key: Binary,
    },

    // ========================================================================
    // Ledger Administration
    // ========================================================================
    /// Bind the token ledger contract that claims and mints credit
    ///
    /// Authorization: Admin only
    ///
    /// Rebinding clears the treasury; it must be re-created on the new
    /// ledger via `CreateTreasury`.
    SetLedger {
        /// Ledger contract address
        ledger: String,
    },

    /// Mint tokens directly to an account (bypasses claim authorization)
    ///
    /// Authorization: Admin only
    ///
    /// The credited account is frozen by default, like claim credits.
    Mint {
        /// Account to credit
        recipient: String,
        /// Amount to mint
        amount: Uint128,
    },

    /// Burn tokens from an account
    ///
    /// Authorization: Admin only
    Burn {
        /// Account to debit
        owner: String,
        /// Amount to burn
        amount: Uint128,
    },

    // ========================================================================
    // Account Freeze Controls
    // ========================================================================
    /// Freeze an account, blocking its transfers on the ledger
    ///
    /// Authorization: Admin only
    FreezeAccount {
        /// Account to freeze
        account: String,
    },

    /// Unfreeze an account
    ///
    /// Authorization: Admin only
    UnfreezeAccount {
        /// Account to unfreeze
        account: String,
    },

    /// Unfreeze the sender's own account
    ///
    /// Authorization: Anyone, but only once transfers are permanently
    /// enabled; fails with `TransfersNotEnabled` before that.
    UnfreezeSelf {},

    // ========================================================================
    // Transfer Lock
    // ========================================================================
    /// Permanently enable transfers (one-way)
    ///
    /// Authorization: Admin only
    ///
    /// Sets both the enabled and permanently-enabled flags and records
    /// the enable timestamp. Irreversible; a second call fails.
    EnableTransfers {},

    /// Pause transfers while they are not yet permanently enabled
    ///
    /// Authorization: Admin only
    ///
    /// Fails with `TransfersAlreadyPermanentlyEnabled` once the one-way
    /// switch has been thrown.
    PauseTransfers {},

    /// Resume transfers after a pause
    ///
    /// Authorization: Admin only
    ///
    /// Does not record an enable timestamp; only the permanent
    /// transition does that.
    ResumeTransfers {},

    // ========================================================================
    // Time Lock & Keys
    // ========================================================================
    /// Reconfigure the per-user claim time-lock
    ///
    /// Authorization: Admin only
    ///
    /// The new period must lie in 3600..=31536000 seconds. Takes effect
    /// on the next claim evaluation.
    SetTimeLock {
        /// Seconds between successive claims per user
        claim_period_seconds: u64,
        /// Whether the time-lock is enforced at all
        time_lock_enabled: bool,
    },

    /// Rotate the authorizer public key
    ///
    /// Authorization: Admin only
    SetAuthorizerKey {
        /// ed25519 public key (exactly 32 bytes)
        public_key: Binary,
    },

    // ========================================================================
    // Upgrade Authority
    // ========================================================================
    /// Transfer or clear the upgrade authority
    ///
    /// Authorization: Current upgrade authority only (not the admin)
    ///
    /// `None` clears the authority and makes the contract permanently
    /// non-upgradeable.
    SetUpgradeAuthority {
        /// New authority, or None to lock upgrades forever
        new_authority: Option<String>,
    },

    /// Pre-flight check used by deployment tooling before a migration
    ///
    /// Authorization: Current upgrade authority only
    ///
    /// Fails with `ContractNotUpgradeable` once the authority has been
    /// cleared.
    ValidateUpgrade {},

    // ========================================================================
    // Treasury
    // ========================================================================
    /// Create the treasury (the contract's own account on the ledger)
    ///
    /// Authorization: Admin only
    ///
    /// Can only be created once per bound ledger.
    CreateTreasury {},

    /// Mint tokens to the treasury
    ///
    /// Authorization: Admin only
    MintToTreasury {
        /// Amount to mint
        amount: Uint128,
    },

    /// Burn tokens from the treasury
    ///
    /// Authorization: Admin only
    BurnFromTreasury {
        /// Amount to burn
        amount: Uint128,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the global transfer-lock state
    #[returns(TransferStatusResponse)]
    TransferStatus {},

    /// Returns a user's claim record, or None if the user has never
    /// claimed nor registered a key
    #[returns(Option<UserRecordResponse>)]
    UserRecord { user: String },

    /// Returns the timestamp (seconds) when the user can next claim.
    /// Returns 0 if the user has never claimed or the time-lock is off.
    #[returns(ClaimableAtResponse)]
    ClaimableAt { user: String },

    /// Returns whether an account is frozen
    #[returns(FrozenStatusResponse)]
    FrozenStatus { account: String },

    /// Compute the canonical claim message for off-chain signing
    #[returns(ClaimMessageResponse)]
    ClaimMessage {
        user: String,
        destination: String,
        amount: Uint64,
        nonce: u64,
        valid_until: i64,
    },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub authorizer_pubkey: Binary,
    pub require_holder_signature: bool,
    pub time_lock_enabled: bool,
    pub claim_period_seconds: u64,
    pub upgrade_authority: Option<Addr>,
    pub upgradeable: bool,
    pub ledger: Option<Addr>,
    pub treasury_created: bool,
}

#[cw_serde]
pub struct TransferStatusResponse {
    pub transfers_enabled: bool,
    pub transfers_permanently_enabled: bool,
    pub transfer_enable_timestamp: Option<Timestamp>,
}

#[cw_serde]
pub struct UserRecordResponse {
    pub owner: Addr,
    pub nonce: u64,
    pub claim_pubkey: Option<Binary>,
    pub last_claim_timestamp: u64,
    pub next_allowed_claim_time: u64,
    pub total_claims: u64,
}

#[cw_serde]
pub struct ClaimableAtResponse {
    pub claimable_at: u64,
}

#[cw_serde]
pub struct FrozenStatusResponse {
    pub account: Addr,
    pub frozen: bool,
}

#[cw_serde]
pub struct ClaimMessageResponse {
    /// The exact 172 bytes callers must sign
    pub message: Binary,
    /// Same bytes hex-encoded, for signing tooling that does not speak base64
    pub message_hex: String,
}
