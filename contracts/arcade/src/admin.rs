//! One-time setup, role administration, platform fee configuration and the
//! circuit breaker.

use soroban_sdk::{symbol_short, Address, Env};

use crate::access;
use crate::error::Error;
use crate::events;
use crate::fees::BASIS_POINTS;
use crate::state::{self, SystemState};
use crate::types::{Config, DataKey, Role};

pub fn initialize(
    env: &Env,
    admin: Address,
    fee_recipient: Address,
    platform_fee: u32,
    creation_fee_token: Address,
    free_creation_fee: i128,
    paid_creation_fee: i128,
) -> Result<(), Error> {
    admin.require_auth();

    if env.storage().instance().has(&DataKey::Admin) {
        return Err(Error::AlreadyInitialized);
    }
    if state::is_absent(env, &fee_recipient) || state::is_absent(env, &creation_fee_token) {
        return Err(Error::InvalidInput);
    }
    state::check_fee_cap(platform_fee)?;
    state::check_creation_amount(free_creation_fee)?;
    state::check_creation_amount(paid_creation_fee)?;

    env.storage().instance().set(&DataKey::Admin, &admin);
    state::save_config(
        env,
        &Config {
            fee_recipient,
            platform_fee,
            creation_fee_token,
            free_creation_fee,
            paid_creation_fee,
            max_tournament_fee: 0,
        },
    );
    SystemState { paused: false }.store(env);

    for role in [Role::GameManager, Role::TournamentManager, Role::Depositor] {
        access::grant(env, role, &admin);
    }
    Ok(())
}

pub fn grant_role(env: &Env, caller: &Address, role: Role, account: Address) -> Result<(), Error> {
    caller.require_auth();
    access::require_admin(env, caller)?;

    if access::grant(env, role, &account) {
        events::role_granted(env, role, account);
    }
    Ok(())
}

pub fn revoke_role(env: &Env, caller: &Address, role: Role, account: Address) -> Result<(), Error> {
    caller.require_auth();
    access::require_admin(env, caller)?;

    if access::revoke(env, role, &account) {
        events::role_revoked(env, role, account);
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// FEE CONFIGURATION
// ──────────────────────────────────────────────────────────
//

/// Rejected with `FeeExceeded` when the new fee would push any existing
/// tournament's total take to 100% or more.
pub fn update_platform_fee(env: &Env, caller: &Address, recipient: Address, fee: u32) -> Result<(), Error> {
    caller.require_auth();
    access::require_admin(env, caller)?;

    if state::is_absent(env, &recipient) {
        return Err(Error::InvalidInput);
    }
    state::check_fee_cap(fee)?;

    let mut config = state::load_config(env)?;
    if fee as u64 + config.max_tournament_fee as u64 >= BASIS_POINTS as u64 {
        return Err(Error::FeeExceeded);
    }
    config.fee_recipient = recipient.clone();
    config.platform_fee = fee;
    state::save_config(env, &config);

    events::platform_fee_updated(env, recipient, fee);
    Ok(())
}

pub fn update_creation_fee_token(env: &Env, caller: &Address, token: Address) -> Result<(), Error> {
    caller.require_auth();
    access::require_admin(env, caller)?;

    if state::is_absent(env, &token) {
        return Err(Error::InvalidInput);
    }
    let mut config = state::load_config(env)?;
    config.creation_fee_token = token.clone();
    state::save_config(env, &config);

    events::creation_fee_token_updated(env, token);
    Ok(())
}

pub fn update_free_creation_fee(env: &Env, caller: &Address, amount: i128) -> Result<(), Error> {
    caller.require_auth();
    access::require_admin(env, caller)?;
    state::check_creation_amount(amount)?;

    let mut config = state::load_config(env)?;
    config.free_creation_fee = amount;
    state::save_config(env, &config);

    events::creation_fee_amount_updated(env, symbol_short!("free"), amount);
    Ok(())
}

pub fn update_paid_creation_fee(env: &Env, caller: &Address, amount: i128) -> Result<(), Error> {
    caller.require_auth();
    access::require_admin(env, caller)?;
    state::check_creation_amount(amount)?;

    let mut config = state::load_config(env)?;
    config.paid_creation_fee = amount;
    state::save_config(env, &config);

    events::creation_fee_amount_updated(env, symbol_short!("paid"), amount);
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// CIRCUIT BREAKER
// ──────────────────────────────────────────────────────────
//

pub fn pause(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::GameManager)?;

    let mut system = SystemState::load(env);
    if !system.paused {
        system.paused = true;
        system.store(env);
        events::paused(env, caller.clone());
    }
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::GameManager)?;

    let mut system = SystemState::load(env);
    if system.paused {
        system.paused = false;
        system.store(env);
        events::unpaused(env, caller.clone());
    }
    Ok(())
}
