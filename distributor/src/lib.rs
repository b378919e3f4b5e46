//! Token Distributor Contract - Signed-Claim Distribution with Transfer Lock
//!
//! This contract gates token distribution behind off-chain authorization:
//! users redeem claims signed by a configured authorizer key, and the
//! credited balances stay frozen until transfers are permanently enabled.
//!
//! # Claim Flow
//! 1. The authorizer signs the canonical claim message off-chain
//!    (user, destination, amount, nonce, expiry)
//! 2. Anyone submits `Claim` with the signature(s); the contract recomputes
//!    the message and verifies via the platform ed25519 precompile
//! 3. On success the user's nonce advances and the bound ledger contract
//!    mints to the destination, frozen by default
//!
//! # Transfer Lock
//! 1. Transfers start locked; the admin may soft pause/resume
//! 2. `EnableTransfers` is one-way: both enable flags set, timestamp
//!    recorded once, and every later disable attempt fails
//! 3. Holders unfreeze themselves only after the permanent transition
//!
//! # Security
//! - Per-user strictly sequential nonces prevent replay and reordering
//! - Destination binding stops redirection of validly-signed claims
//! - Claim expiry bounds how long a signed authorization stays live
//! - Optional holder co-signature for stricter deployments
//! - Per-user claim time-lock with admin-tunable period

pub mod codec;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;
pub mod verify;

pub use crate::codec::{claim_message, CLAIM_MESSAGE_LEN};
pub use crate::error::ContractError;
pub use crate::verify::{ApiVerifier, Verifier};
