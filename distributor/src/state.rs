//! State definitions for the token distributor contract
//!
//! This module defines all storage structures for claim authorization:
//! the singleton configuration, the transfer-lock switches, and the
//! per-user claim records.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for mint, burn, freeze and configuration management
    pub admin: Addr,
    /// 32-byte ed25519 public key of the off-chain claim authorizer
    pub authorizer_pubkey: Binary,
    /// Whether claims must also carry the holder's signature
    pub require_holder_signature: bool,
    /// Whether the per-user claim cooldown is enforced
    pub time_lock_enabled: bool,
    /// Minimum seconds between two accepted claims by the same user
    pub claim_period_seconds: u64,
    /// Address allowed to manage deployment code; None = immutable contract
    pub upgrade_authority: Option<Addr>,
    /// Whether upgrade validation can ever pass; cleared together with the authority
    pub upgradeable: bool,
}

/// Global transfer-lock switches
///
/// Transfers start locked. `EnableTransfers` is the one-way transition:
/// it sets both flags and records the timestamp exactly once. The soft
/// pause/resume pair only toggles `transfers_enabled` while the permanent
/// flag is still unset.
#[cw_serde]
pub struct TransferLock {
    /// Whether holders may currently move unlocked balances
    pub transfers_enabled: bool,
    /// One-way flag; once set, no code path clears either flag
    pub transfers_permanently_enabled: bool,
    /// Block time of the permanent enable; written exactly once
    pub transfer_enable_timestamp: Option<Timestamp>,
}

/// Per-user claim record, created lazily on first interaction, never removed
#[cw_serde]
pub struct UserRecord {
    /// The identity this record belongs to
    pub owner: Addr,
    /// Strictly increases by exactly 1 per accepted claim, starting at 0
    pub nonce: u64,
    /// 32-byte ed25519 key the holder signs claims with (strict configurations)
    pub claim_pubkey: Option<Binary>,
    /// Block time (seconds) of the last accepted claim; 0 = never claimed
    pub last_claim_timestamp: u64,
    /// Earliest block time (seconds) the next claim can pass the gate
    pub next_allowed_claim_time: u64,
    /// Number of accepted claims
    pub total_claims: u64,
}

impl UserRecord {
    pub fn new(owner: Addr) -> Self {
        UserRecord {
            owner,
            nonce: 0,
            claim_pubkey: None,
            last_claim_timestamp: 0,
            next_allowed_claim_time: 0,
            total_claims: 0,
        }
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-distributor";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Domain tag prefixed to every claim message (20 bytes)
pub const CLAIM_DOMAIN_TAG: &[u8] = b"DISTRIBUTOR_CLAIM_V1";

/// Lowest claim period accepted at instantiation (bootstrap deployments)
pub const MIN_INITIAL_CLAIM_PERIOD: u64 = 30;

/// Lowest claim period accepted when reconfiguring a live contract (1 hour)
pub const MIN_CLAIM_PERIOD: u64 = 3_600;

/// Highest claim period accepted anywhere (1 year)
pub const MAX_CLAIM_PERIOD: u64 = 31_536_000;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Global transfer-lock switches
pub const TRANSFER_LOCK: Item<TransferLock> = Item::new("transfer_lock");

/// External token ledger this contract holds authority over (unset until bound)
pub const LEDGER: Item<Addr> = Item::new("ledger");

/// Contract-owned treasury entry on the ledger (unset until created)
pub const TREASURY: Item<Addr> = Item::new("treasury");

/// Per-user claim records
/// Key: user address, Value: UserRecord
pub const USERS: Map<&Addr, UserRecord> = Map::new("users");

/// Per-account frozen sub-state, mirrored to the ledger on every change
/// Key: holder address, Value: true if frozen
pub const FROZEN_ACCOUNTS: Map<&Addr, bool> = Map::new("frozen_accounts");
