//! Token Distributor Contract - Entry Points
//!
//! Signed-claim token distribution with per-user nonces, a claim time-lock,
//! and a one-way transfer lock. The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_burn, execute_burn_from_treasury, execute_claim, execute_create_treasury,
    execute_enable_transfers, execute_freeze_account, execute_mint, execute_mint_to_treasury,
    execute_pause_transfers, execute_register_claim_key, execute_resume_transfers,
    execute_set_authorizer_key, execute_set_ledger, execute_set_time_lock,
    execute_set_upgrade_authority, execute_unfreeze_account, execute_unfreeze_self,
    execute_validate_upgrade,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_claim_message, query_claimable_at, query_config, query_frozen_status,
    query_transfer_status, query_user_record,
};
use crate::state::{
    Config, TransferLock, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LEDGER, MAX_CLAIM_PERIOD,
    MIN_INITIAL_CLAIM_PERIOD, TRANSFER_LOCK,
};
use crate::verify::{ApiVerifier, PUBLIC_KEY_LEN};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;

    if msg.authorizer_pubkey.len() != PUBLIC_KEY_LEN {
        return Err(ContractError::InvalidPublicKeyLength {
            got: msg.authorizer_pubkey.len(),
        });
    }

    // Bootstrap allows short periods; later reconfiguration is bounded
    // tighter (see SetTimeLock)
    if !(MIN_INITIAL_CLAIM_PERIOD..=MAX_CLAIM_PERIOD).contains(&msg.claim_period_seconds) {
        return Err(ContractError::InvalidClaimPeriod {
            min: MIN_INITIAL_CLAIM_PERIOD,
            max: MAX_CLAIM_PERIOD,
        });
    }

    let upgrade_authority = msg
        .upgrade_authority
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    let config = Config {
        admin,
        authorizer_pubkey: msg.authorizer_pubkey,
        require_holder_signature: msg.require_holder_signature,
        time_lock_enabled: msg.time_lock_enabled,
        claim_period_seconds: msg.claim_period_seconds,
        upgradeable: upgrade_authority.is_some(),
        upgrade_authority,
    };
    CONFIG.save(deps.storage, &config)?;

    // Transfers start locked
    let lock = TransferLock {
        transfers_enabled: false,
        transfers_permanently_enabled: false,
        transfer_enable_timestamp: None,
    };
    TRANSFER_LOCK.save(deps.storage, &lock)?;

    if let Some(ledger) = msg.ledger {
        let ledger_addr = deps.api.addr_validate(&ledger)?;
        LEDGER.save(deps.storage, &ledger_addr)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute(
            "require_holder_signature",
            msg.require_holder_signature.to_string(),
        )
        .add_attribute("time_lock_enabled", msg.time_lock_enabled.to_string())
        .add_attribute(
            "claim_period_seconds",
            msg.claim_period_seconds.to_string(),
        )
        .add_attribute("upgradeable", config.upgradeable.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Claims
        ExecuteMsg::Claim {
            user,
            destination,
            amount,
            nonce,
            valid_until,
            authorizer_signature,
            holder_signature,
        } => {
            let verifier = ApiVerifier::new(deps.api);
            execute_claim(
                deps,
                env,
                &verifier,
                user,
                destination,
                amount,
                nonce,
                valid_until,
                authorizer_signature,
                holder_signature,
            )
        }
        ExecuteMsg::RegisterClaimKey { public_key } => {
            execute_register_claim_key(deps, info, public_key)
        }

        // Ledger administration
        ExecuteMsg::SetLedger { ledger } => execute_set_ledger(deps, info, ledger),
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { owner, amount } => execute_burn(deps, info, owner, amount),

        // Account freeze controls
        ExecuteMsg::FreezeAccount { account } => execute_freeze_account(deps, info, account),
        ExecuteMsg::UnfreezeAccount { account } => execute_unfreeze_account(deps, info, account),
        ExecuteMsg::UnfreezeSelf {} => execute_unfreeze_self(deps, info),

        // Transfer lock
        ExecuteMsg::EnableTransfers {} => execute_enable_transfers(deps, env, info),
        ExecuteMsg::PauseTransfers {} => execute_pause_transfers(deps, info),
        ExecuteMsg::ResumeTransfers {} => execute_resume_transfers(deps, info),

        // Time lock & keys
        ExecuteMsg::SetTimeLock {
            claim_period_seconds,
            time_lock_enabled,
        } => execute_set_time_lock(deps, info, claim_period_seconds, time_lock_enabled),
        ExecuteMsg::SetAuthorizerKey { public_key } => {
            execute_set_authorizer_key(deps, info, public_key)
        }

        // Upgrade authority
        ExecuteMsg::SetUpgradeAuthority { new_authority } => {
            execute_set_upgrade_authority(deps, info, new_authority)
        }
        ExecuteMsg::ValidateUpgrade {} => execute_validate_upgrade(deps, info),

        // Treasury
        ExecuteMsg::CreateTreasury {} => execute_create_treasury(deps, env, info),
        ExecuteMsg::MintToTreasury { amount } => execute_mint_to_treasury(deps, info, amount),
        ExecuteMsg::BurnFromTreasury { amount } => execute_burn_from_treasury(deps, info, amount),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TransferStatus {} => to_json_binary(&query_transfer_status(deps)?),
        QueryMsg::UserRecord { user } => to_json_binary(&query_user_record(deps, user)?),
        QueryMsg::ClaimableAt { user } => to_json_binary(&query_claimable_at(deps, user)?),
        QueryMsg::FrozenStatus { account } => to_json_binary(&query_frozen_status(deps, account)?),
        QueryMsg::ClaimMessage {
            user,
            destination,
            amount,
            nonce,
            valid_until,
        } => to_json_binary(&query_claim_message(
            deps,
            env,
            user,
            destination,
            amount,
            nonce,
            valid_until,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
