//! Role gate consulted at the top of every privileged entry point.
//!
//! The admin is a single address fixed at initialization; it grants and
//! revokes the operational roles. Role membership lives in persistent storage
//! keyed by `(Role, Address)`.

use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::state::bump_persistent_ttl;
use crate::types::{DataKey, Role};

pub fn admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    if admin(env)? != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::RoleMember(role, account.clone()))
        .unwrap_or(false)
}

pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), Error> {
    if !has_role(env, role, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Returns `false` when the account already held the role.
pub fn grant(env: &Env, role: Role, account: &Address) -> bool {
    if has_role(env, role, account) {
        return false;
    }
    let key = DataKey::RoleMember(role, account.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent_ttl(env, &key);
    true
}

/// Returns `false` when the account did not hold the role.
pub fn revoke(env: &Env, role: Role, account: &Address) -> bool {
    if !has_role(env, role, account) {
        return false;
    }
    env.storage()
        .persistent()
        .remove(&DataKey::RoleMember(role, account.clone()));
    true
}
