use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::fees::BASIS_POINTS;
use crate::types::{Config, DataKey};

const LEDGER_THRESHOLD_SHARED: u32 = 518_400; // ~30 days @ 5s/ledger
const LEDGER_BUMP_SHARED: u32 = 1_036_800; // ~60 days @ 5s/ledger

pub fn bump_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn bump_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn load_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance_ttl(env);
}

/// The contract itself stands in for the null address: value sent to it
/// would sit in escrow without a ledger entry.
pub fn is_absent(env: &Env, address: &Address) -> bool {
    *address == env.current_contract_address()
}

pub fn check_fee_cap(fee: u32) -> Result<(), Error> {
    if fee >= BASIS_POINTS {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

pub fn check_creation_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

/// Per-call snapshot of the circuit breaker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SystemState {
    pub paused: bool,
}

impl SystemState {
    pub fn load(env: &Env) -> Self {
        let paused = env
            .storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false);
        SystemState { paused }
    }

    pub fn store(&self, env: &Env) {
        env.storage().instance().set(&DataKey::Paused, &self.paused);
        bump_instance_ttl(env);
    }

    pub fn ensure_active(&self) -> Result<(), Error> {
        if self.paused {
            return Err(Error::SystemPaused);
        }
        Ok(())
    }
}
