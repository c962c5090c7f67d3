//! Fungible balance ledger: one non-negative `i128` cell per
//! `(game, tournament, token)`.

use soroban_sdk::{token, Address, Env};

use crate::error::Error;
use crate::events;
use crate::state::bump_persistent_ttl;
use crate::tournaments;
use crate::types::DataKey;

pub fn balance(env: &Env, game_id: u32, tournament_id: u32, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PrizeBalance(game_id, tournament_id, token.clone()))
        .unwrap_or(0)
}

fn store(env: &Env, game_id: u32, tournament_id: u32, token: &Address, value: i128) {
    let key = DataKey::PrizeBalance(game_id, tournament_id, token.clone());
    env.storage().persistent().set(&key, &value);
    bump_persistent_ttl(env, &key);
}

pub fn credit(env: &Env, game_id: u32, tournament_id: u32, token: &Address, amount: i128) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let updated = balance(env, game_id, tournament_id, token)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    store(env, game_id, tournament_id, token, updated);
    Ok(updated)
}

/// Leaves the cell untouched when `amount` exceeds it.
pub fn debit(env: &Env, game_id: u32, tournament_id: u32, token: &Address, amount: i128) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let current = balance(env, game_id, tournament_id, token);
    if amount > current {
        return Err(Error::InsufficientBalance);
    }
    let updated = current - amount;
    store(env, game_id, tournament_id, token, updated);
    Ok(updated)
}

pub fn transfer_in(env: &Env, token: &Address, from: &Address, amount: i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), &amount);
}

pub fn transfer_out(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
}

/// Shape checks for a prize deposit, done before any transfer.
pub fn check_prize(env: &Env, game_id: u32, token: &Address, amount: i128) -> Result<(), Error> {
    if !tournaments::is_distributable(env, game_id, token) {
        return Err(Error::DisallowedAsset);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Pulls `amount` of an allow-listed token from `from` into the pool.
pub fn credit_prize(
    env: &Env,
    game_id: u32,
    tournament_id: u32,
    from: &Address,
    token: &Address,
    amount: i128,
) -> Result<(), Error> {
    check_prize(env, game_id, token, amount)?;

    transfer_in(env, token, from, amount);
    credit(env, game_id, tournament_id, token, amount)?;

    events::prize_deposited(env, game_id, tournament_id, from.clone(), token.clone(), amount);
    Ok(())
}
