//! Claim flow integration tests.
//!
//! Exercises the full signed-claim lifecycle against a mock ledger:
//! - Happy path (credit, freeze, nonce advance)
//! - Nonce sequencing (replay, skip-ahead, strict monotonicity)
//! - Expiry and destination binding
//! - Authorizer and holder signature verification with real ed25519 keys
//! - Claim key registration and rotation

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    Uint128, Uint64,
};
use cw_multi_test::{
    no_init, App, AppBuilder, BankKeeper, ContractWrapper, Executor, MockAddressGenerator,
    MockApiBech32, WasmKeeper,
};
use cw_storage_plus::{Item, Map};
use ed25519_dalek::{Signer, SigningKey};

use common::{
    LedgerBalanceResponse, LedgerExecuteMsg, LedgerFrozenResponse, LedgerInstantiateMsg,
    LedgerQueryMsg,
};
use distributor::msg::{
    ClaimMessageResponse, ExecuteMsg, InstantiateMsg, QueryMsg, UserRecordResponse,
};

// ============================================================================
// Mock Ledger Contract
// ============================================================================

const LEDGER_AUTHORITY: Item<Addr> = Item::new("authority");
const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
const FROZEN: Map<&Addr, bool> = Map::new("frozen");

fn ledger_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: LedgerInstantiateMsg,
) -> StdResult<Response> {
    let authority = deps.api.addr_validate(&msg.authority)?;
    LEDGER_AUTHORITY.save(deps.storage, &authority)?;
    Ok(Response::new())
}

fn ledger_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: LedgerExecuteMsg,
) -> StdResult<Response> {
    let authority = LEDGER_AUTHORITY.load(deps.storage)?;
    if info.sender != authority {
        return Err(StdError::generic_err("ledger: unauthorized"));
    }

    match msg {
        LedgerExecuteMsg::Mint { recipient, amount } => {
            let addr = deps.api.addr_validate(&recipient)?;
            let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
            BALANCES.save(deps.storage, &addr, &(balance + amount))?;
        }
        LedgerExecuteMsg::BurnFrom { owner, amount } => {
            let addr = deps.api.addr_validate(&owner)?;
            let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
            let remaining = balance
                .checked_sub(amount)
                .map_err(|_| StdError::generic_err("ledger: insufficient balance"))?;
            BALANCES.save(deps.storage, &addr, &remaining)?;
        }
        LedgerExecuteMsg::Freeze { account } => {
            let addr = deps.api.addr_validate(&account)?;
            FROZEN.save(deps.storage, &addr, &true)?;
        }
        LedgerExecuteMsg::Thaw { account } => {
            let addr = deps.api.addr_validate(&account)?;
            FROZEN.save(deps.storage, &addr, &false)?;
        }
    }

    Ok(Response::new())
}

fn ledger_query(deps: Deps, _env: Env, msg: LedgerQueryMsg) -> StdResult<Binary> {
    match msg {
        LedgerQueryMsg::Balance { account } => {
            let addr = deps.api.addr_validate(&account)?;
            let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
            to_json_binary(&LedgerBalanceResponse { balance })
        }
        LedgerQueryMsg::FrozenStatus { account } => {
            let addr = deps.api.addr_validate(&account)?;
            let frozen = FROZEN.may_load(deps.storage, &addr)?.unwrap_or(false);
            to_json_binary(&LedgerFrozenResponse { frozen })
        }
    }
}

fn contract_ledger() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(ledger_execute, ledger_instantiate, ledger_query);
    Box::new(contract)
}

// ============================================================================
// Test Setup
// ============================================================================

/// Multi-test app over the bech32 mock API; canonical addresses then fit
/// the 32-byte claim message fields
type Bech32App = App<BankKeeper, MockApiBech32>;

fn mock_app() -> Bech32App {
    AppBuilder::default()
        .with_api(MockApiBech32::new("terra"))
        .with_wasm(WasmKeeper::default().with_address_generator(MockAddressGenerator))
        .build(no_init)
}

fn contract_distributor() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        distributor::contract::execute,
        distributor::contract::instantiate,
        distributor::contract::query,
    );
    Box::new(contract)
}

/// Fixed authorizer keypair used across tests
fn authorizer() -> SigningKey {
    SigningKey::from_bytes(&[0xA7; 32])
}

fn holder_key() -> SigningKey {
    SigningKey::from_bytes(&[0x42; 32])
}

struct TestEnv {
    app: Bech32App,
    contract_addr: Addr,
    ledger_addr: Addr,
    admin: Addr,
    user: Addr,
    relayer: Addr,
}

fn setup_with(require_holder_signature: bool, time_lock_enabled: bool) -> TestEnv {
    let mut app = mock_app();
    let admin = app.api().addr_make("admin");
    let user = app.api().addr_make("user");
    let relayer = app.api().addr_make("relayer");

    let distributor_code = app.store_code(contract_distributor());
    let ledger_code = app.store_code(contract_ledger());

    let authorizer_pubkey = Binary::from(authorizer().verifying_key().to_bytes().to_vec());

    let contract_addr = app
        .instantiate_contract(
            distributor_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                authorizer_pubkey,
                require_holder_signature,
                claim_period_seconds: 3600,
                time_lock_enabled,
                upgrade_authority: None,
                ledger: None,
            },
            &[],
            "token-distributor",
            Some(admin.to_string()),
        )
        .unwrap();

    // The ledger grants the distributor mint/burn/freeze authority
    let ledger_addr = app
        .instantiate_contract(
            ledger_code,
            admin.clone(),
            &LedgerInstantiateMsg {
                authority: contract_addr.to_string(),
            },
            &[],
            "token-ledger",
            Some(admin.to_string()),
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        contract_addr.clone(),
        &ExecuteMsg::SetLedger {
            ledger: ledger_addr.to_string(),
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        contract_addr,
        ledger_addr,
        admin,
        user,
        relayer,
    }
}

/// Default: holder signature optional, time-lock off
fn setup() -> TestEnv {
    setup_with(false, false)
}

// ============================================================================
// Claim Construction Helpers
// ============================================================================

/// Fetch the canonical message bytes the contract will verify against
fn canonical_message(
    env: &TestEnv,
    user: &Addr,
    destination: &Addr,
    amount: u64,
    nonce: u64,
    valid_until: i64,
) -> Vec<u8> {
    let res: ClaimMessageResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            env.contract_addr.clone(),
            &QueryMsg::ClaimMessage {
                user: user.to_string(),
                destination: destination.to_string(),
                amount: Uint64::new(amount),
                nonce,
                valid_until,
            },
        )
        .unwrap();
    res.message.to_vec()
}

/// Build a fully signed claim for `user`, crediting `destination`
fn signed_claim_to(
    env: &TestEnv,
    user: &Addr,
    destination: &Addr,
    amount: u64,
    nonce: u64,
    valid_until: i64,
    holder: Option<&SigningKey>,
) -> ExecuteMsg {
    let message = canonical_message(env, user, destination, amount, nonce, valid_until);
    let authorizer_signature = Binary::from(authorizer().sign(&message).to_bytes().to_vec());
    let holder_signature = holder.map(|key| Binary::from(key.sign(&message).to_bytes().to_vec()));

    ExecuteMsg::Claim {
        user: user.to_string(),
        destination: destination.to_string(),
        amount: Uint64::new(amount),
        nonce,
        valid_until,
        authorizer_signature,
        holder_signature,
    }
}

/// Build a signed self-claim expiring comfortably in the future
fn signed_claim(env: &TestEnv, user: &Addr, amount: u64, nonce: u64) -> ExecuteMsg {
    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    signed_claim_to(env, user, user, amount, nonce, valid_until, None)
}

fn ledger_balance(env: &TestEnv, account: &Addr) -> Uint128 {
    let res: LedgerBalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            env.ledger_addr.clone(),
            &LedgerQueryMsg::Balance {
                account: account.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn ledger_frozen(env: &TestEnv, account: &Addr) -> bool {
    let res: LedgerFrozenResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            env.ledger_addr.clone(),
            &LedgerQueryMsg::FrozenStatus {
                account: account.to_string(),
            },
        )
        .unwrap();
    res.frozen
}

fn user_record(env: &TestEnv, user: &Addr) -> Option<UserRecordResponse> {
    env.app
        .wrap()
        .query_wasm_smart(
            env.contract_addr.clone(),
            &QueryMsg::UserRecord {
                user: user.to_string(),
            },
        )
        .unwrap()
}

// ============================================================================
// Happy Path
// ============================================================================

#[test]
fn test_claim_credits_and_freezes_destination() {
    let mut env = setup();
    let user = env.user.clone();

    let claim = signed_claim(&env, &user, 1_000_000, 0);
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();

    assert_eq!(ledger_balance(&env, &env.user), Uint128::from(1_000_000u128));
    assert!(ledger_frozen(&env, &env.user));

    let record = user_record(&env, &env.user).expect("record should exist after claim");
    assert_eq!(record.nonce, 1);
    assert_eq!(record.total_claims, 1);
    assert!(record.last_claim_timestamp > 0);
}

#[test]
fn test_claim_submittable_by_anyone() {
    let mut env = setup();
    let user = env.user.clone();

    // A relayer submits the user's claim; the credit still lands on the user
    let claim = signed_claim(&env, &user, 500_000, 0);
    env.app
        .execute_contract(env.relayer.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();

    assert_eq!(ledger_balance(&env, &env.user), Uint128::from(500_000u128));
    assert_eq!(ledger_balance(&env, &env.relayer), Uint128::zero());
}

#[test]
fn test_claim_sequence_is_strictly_monotonic() {
    let mut env = setup();
    let user = env.user.clone();

    for nonce in 0..3u64 {
        let claim = signed_claim(&env, &user, 100, nonce);
        env.app
            .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
            .unwrap();
    }

    let record = user_record(&env, &user).unwrap();
    assert_eq!(record.nonce, 3);
    assert_eq!(record.total_claims, 3);
    assert_eq!(ledger_balance(&env, &user), Uint128::from(300u128));
}

// ============================================================================
// Nonce Guard
// ============================================================================

#[test]
fn test_replayed_claim_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    let claim = signed_claim(&env, &user, 1_000, 0);
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();

    // Resubmitting the identical authorized request must fail
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid nonce: expected 1, got 0"),
        "Expected replay rejection, got: {}",
        err_str
    );

    // Exactly one credit landed
    assert_eq!(ledger_balance(&env, &user), Uint128::from(1_000u128));
}

#[test]
fn test_skipped_nonce_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    let claim = signed_claim(&env, &user, 1_000, 5);
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Nonce too high: expected 0, got 5"),
        "Expected skip-ahead rejection, got: {}",
        err_str
    );

    // The failed attempt left no trace; the correct nonce still works
    let claim = signed_claim(&env, &user, 1_000, 0);
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();
    assert_eq!(user_record(&env, &user).unwrap().nonce, 1);
}

#[test]
fn test_failed_claim_leaves_no_state_change() {
    let mut env = setup();
    let user = env.user.clone();

    let claim = signed_claim(&env, &user, 1_000, 3);
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());

    assert_eq!(ledger_balance(&env, &user), Uint128::zero());
    assert!(!ledger_frozen(&env, &user));
    assert!(user_record(&env, &user).is_none());
}

// ============================================================================
// Expiry
// ============================================================================

#[test]
fn test_expired_claim_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    let now = env.app.block_info().time.seconds() as i64;
    let claim = signed_claim_to(&env, &user, &user, 1_000, 0, now - 1, None);

    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Claim expired"),
        "Expected expiry rejection, got: {}",
        err_str
    );
}

#[test]
fn test_claim_valid_at_exact_expiry_boundary() {
    let mut env = setup();
    let user = env.user.clone();

    // valid_until == now is still valid; only now > valid_until expires
    let now = env.app.block_info().time.seconds() as i64;
    let claim = signed_claim_to(&env, &user, &user, 1_000, 0, now, None);
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();
}

#[test]
fn test_claim_expires_as_time_advances() {
    let mut env = setup();
    let user = env.user.clone();

    let valid_until = env.app.block_info().time.seconds() as i64 + 100;
    let claim = signed_claim_to(&env, &user, &user, 1_000, 0, valid_until, None);

    env.app.update_block(|block| {
        block.time = block.time.plus_seconds(101);
    });

    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Claim expired"),
        "Expected expiry rejection, got: {}",
        err_str
    );
}

// ============================================================================
// Destination Binding
// ============================================================================

#[test]
fn test_claim_to_foreign_destination_rejected() {
    let mut env = setup();
    let user = env.user.clone();
    let other = env.app.api().addr_make("other");

    // Validly signed for destination != user: signatures pass, binding fails
    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let claim = signed_claim_to(&env, &user, &other, 1_000, 0, valid_until, None);

    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Unauthorized destination"),
        "Expected destination binding rejection, got: {}",
        err_str
    );

    // Nothing credited anywhere, nonce untouched
    assert_eq!(ledger_balance(&env, &other), Uint128::zero());
    assert!(user_record(&env, &user).is_none());
}

// ============================================================================
// Authorizer Signature
// ============================================================================

#[test]
fn test_forged_authorizer_signature_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let message = canonical_message(&env, &user, &user, 1_000, 0, valid_until);
    let forger = SigningKey::from_bytes(&[0xEE; 32]);
    let forged = Binary::from(forger.sign(&message).to_bytes().to_vec());

    let claim = ExecuteMsg::Claim {
        user: user.to_string(),
        destination: user.to_string(),
        amount: Uint64::new(1_000),
        nonce: 0,
        valid_until,
        authorizer_signature: forged,
        holder_signature: None,
    };

    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid authorizer signature"),
        "Expected authorizer rejection, got: {}",
        err_str
    );
}

#[test]
fn test_tampered_amount_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    // Signature covers amount 1_000; the submission claims 2_000
    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let message = canonical_message(&env, &user, &user, 1_000, 0, valid_until);
    let signature = Binary::from(authorizer().sign(&message).to_bytes().to_vec());

    let claim = ExecuteMsg::Claim {
        user: user.to_string(),
        destination: user.to_string(),
        amount: Uint64::new(2_000),
        nonce: 0,
        valid_until,
        authorizer_signature: signature,
        holder_signature: None,
    };

    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid authorizer signature"),
        "Expected tamper rejection, got: {}",
        err_str
    );
}

#[test]
fn test_rotated_authorizer_key_invalidates_old_signatures() {
    let mut env = setup();
    let user = env.user.clone();

    let replacement = SigningKey::from_bytes(&[0xB2; 32]);
    env.app
        .execute_contract(
            env.admin.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::SetAuthorizerKey {
                public_key: Binary::from(replacement.verifying_key().to_bytes().to_vec()),
            },
            &[],
        )
        .unwrap();

    // Old authorizer key no longer accepted
    let claim = signed_claim(&env, &user, 1_000, 0);
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());

    // New key works
    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let message = canonical_message(&env, &user, &user, 1_000, 0, valid_until);
    let claim = ExecuteMsg::Claim {
        user: user.to_string(),
        destination: user.to_string(),
        amount: Uint64::new(1_000),
        nonce: 0,
        valid_until,
        authorizer_signature: Binary::from(replacement.sign(&message).to_bytes().to_vec()),
        holder_signature: None,
    };
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();
}

// ============================================================================
// Request Validation
// ============================================================================

#[test]
fn test_zero_amount_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    let claim = signed_claim(&env, &user, 0, 0);
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid amount"),
        "Expected zero-amount rejection, got: {}",
        err_str
    );
}

#[test]
fn test_malformed_signature_length_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let claim = ExecuteMsg::Claim {
        user: user.to_string(),
        destination: user.to_string(),
        amount: Uint64::new(1_000),
        nonce: 0,
        valid_until,
        authorizer_signature: Binary::from(vec![0u8; 63]),
        holder_signature: None,
    };

    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid signature length: expected 64 bytes, got 63"),
        "Expected length rejection, got: {}",
        err_str
    );
}

#[test]
fn test_claim_without_bound_ledger_rejected() {
    let mut app = mock_app();
    let admin = app.api().addr_make("admin");
    let user = app.api().addr_make("user");

    let code_id = app.store_code(contract_distributor());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                authorizer_pubkey: Binary::from(authorizer().verifying_key().to_bytes().to_vec()),
                require_holder_signature: false,
                claim_period_seconds: 3600,
                time_lock_enabled: false,
                upgrade_authority: None,
                ledger: None,
            },
            &[],
            "token-distributor",
            Some(admin.to_string()),
        )
        .unwrap();

    let claim = ExecuteMsg::Claim {
        user: user.to_string(),
        destination: user.to_string(),
        amount: Uint64::new(1_000),
        nonce: 0,
        valid_until: i64::MAX,
        authorizer_signature: Binary::from(vec![0u8; 64]),
        holder_signature: None,
    };

    let res = app.execute_contract(user, contract_addr, &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Token ledger not set"),
        "Expected missing ledger rejection, got: {}",
        err_str
    );
}

// ============================================================================
// Holder Signature - Optional Mode
// ============================================================================

#[test]
fn test_voluntary_holder_signature_verified() {
    let mut env = setup();
    let user = env.user.clone();
    let key = holder_key();

    env.app
        .execute_contract(
            user.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::RegisterClaimKey {
                public_key: Binary::from(key.verifying_key().to_bytes().to_vec()),
            },
            &[],
        )
        .unwrap();

    // Valid voluntary holder signature passes
    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let claim = signed_claim_to(&env, &user, &user, 1_000, 0, valid_until, Some(&key));
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();

    // A wrong voluntary signature is never ignored
    let wrong = SigningKey::from_bytes(&[0x99; 32]);
    let claim = signed_claim_to(&env, &user, &user, 1_000, 1, valid_until, Some(&wrong));
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid holder signature"),
        "Expected holder rejection, got: {}",
        err_str
    );
}

#[test]
fn test_holder_signature_without_registered_key_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    // No key registered; a supplied holder signature cannot be verified
    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let claim = signed_claim_to(&env, &user, &user, 1_000, 0, valid_until, Some(&holder_key()));
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid holder signature"),
        "Expected holder rejection, got: {}",
        err_str
    );
}

// ============================================================================
// Holder Signature - Strict Mode
// ============================================================================

#[test]
fn test_strict_mode_demands_holder_signature() {
    let mut env = setup_with(true, false);
    let user = env.user.clone();
    let key = holder_key();

    env.app
        .execute_contract(
            user.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::RegisterClaimKey {
                public_key: Binary::from(key.verifying_key().to_bytes().to_vec()),
            },
            &[],
        )
        .unwrap();

    // Authorizer-only claim fails in strict mode
    let claim = signed_claim(&env, &user, 1_000, 0);
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid holder signature"),
        "Expected holder requirement, got: {}",
        err_str
    );

    // Co-signed claim passes
    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let claim = signed_claim_to(&env, &user, &user, 1_000, 0, valid_until, Some(&key));
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();
    assert_eq!(ledger_balance(&env, &user), Uint128::from(1_000u128));
}

#[test]
fn test_strict_mode_without_registered_key_rejected() {
    let mut env = setup_with(true, false);
    let user = env.user.clone();

    // Even a signature from the right wallet fails if no key is registered
    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let claim = signed_claim_to(&env, &user, &user, 1_000, 0, valid_until, Some(&holder_key()));
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid holder signature"),
        "Expected holder rejection, got: {}",
        err_str
    );
}

// ============================================================================
// Claim Key Registration
// ============================================================================

#[test]
fn test_register_claim_key_validates_length() {
    let mut env = setup();
    let user = env.user.clone();

    let res = env.app.execute_contract(
        user.clone(),
        env.contract_addr.clone(),
        &ExecuteMsg::RegisterClaimKey {
            public_key: Binary::from(vec![0u8; 31]),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid public key length: expected 32 bytes, got 31"),
        "Expected key length rejection, got: {}",
        err_str
    );
}

#[test]
fn test_claim_key_rotation_preserves_nonce_sequence() {
    let mut env = setup_with(true, false);
    let user = env.user.clone();
    let first_key = holder_key();
    let second_key = SigningKey::from_bytes(&[0x43; 32]);

    env.app
        .execute_contract(
            user.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::RegisterClaimKey {
                public_key: Binary::from(first_key.verifying_key().to_bytes().to_vec()),
            },
            &[],
        )
        .unwrap();

    let valid_until = env.app.block_info().time.seconds() as i64 + 600;
    let claim = signed_claim_to(&env, &user, &user, 1_000, 0, valid_until, Some(&first_key));
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();

    // Rotate; the record keeps its nonce
    env.app
        .execute_contract(
            user.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::RegisterClaimKey {
                public_key: Binary::from(second_key.verifying_key().to_bytes().to_vec()),
            },
            &[],
        )
        .unwrap();
    assert_eq!(user_record(&env, &user).unwrap().nonce, 1);

    // Old key signatures are dead, new key continues the sequence
    let claim = signed_claim_to(&env, &user, &user, 1_000, 1, valid_until, Some(&first_key));
    let res = env
        .app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[]);
    assert!(res.is_err());

    let claim = signed_claim_to(&env, &user, &user, 1_000, 1, valid_until, Some(&second_key));
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();
    assert_eq!(user_record(&env, &user).unwrap().nonce, 2);
}

// ============================================================================
// Per-User Isolation
// ============================================================================

#[test]
fn test_nonce_sequences_are_per_user() {
    let mut env = setup();
    let user = env.user.clone();
    let other = env.app.api().addr_make("other");

    let claim = signed_claim(&env, &user, 1_000, 0);
    env.app
        .execute_contract(user.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();

    // The other user's sequence still starts at 0
    let claim = signed_claim(&env, &other, 2_000, 0);
    env.app
        .execute_contract(other.clone(), env.contract_addr.clone(), &claim, &[])
        .unwrap();

    assert_eq!(user_record(&env, &user).unwrap().nonce, 1);
    assert_eq!(user_record(&env, &other).unwrap().nonce, 1);
    assert_eq!(ledger_balance(&env, &user), Uint128::from(1_000u128));
    assert_eq!(ledger_balance(&env, &other), Uint128::from(2_000u128));
}
