//! Non-fungible inventory ledger: escrowed unit counts per
//! `(game, tournament, collection, token id)`, plus the kind each collection
//! was first escrowed as.

use soroban_sdk::{Address, Env, Map, Vec};

use crate::collection;
use crate::error::Error;
use crate::state::bump_persistent_ttl;
use crate::tournaments;
use crate::types::{DataKey, NftBatch, NftKind};

pub fn held(env: &Env, game_id: u32, tournament_id: u32, collection: &Address, token_id: u32) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::NftBalance(game_id, tournament_id, collection.clone(), token_id))
        .unwrap_or(0)
}

fn store(env: &Env, game_id: u32, tournament_id: u32, collection: &Address, token_id: u32, units: u32) {
    let key = DataKey::NftBalance(game_id, tournament_id, collection.clone(), token_id);
    if units == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &units);
        bump_persistent_ttl(env, &key);
    }
}

pub fn kind_of(env: &Env, collection: &Address) -> Option<NftKind> {
    env.storage()
        .persistent()
        .get(&DataKey::CollectionKind(collection.clone()))
}

fn establish_kind(env: &Env, collection: &Address, kind: NftKind) {
    if kind_of(env, collection).is_none() {
        let key = DataKey::CollectionKind(collection.clone());
        env.storage().persistent().set(&key, &kind);
        bump_persistent_ttl(env, &key);
    }
}

/// Sums requested units per token id so repeated ids are checked together.
fn tally(env: &Env, token_ids: &Vec<u32>, amounts: &Vec<u32>) -> Result<Map<u32, u32>, Error> {
    let mut totals: Map<u32, u32> = Map::new(env);
    for (token_id, amount) in token_ids.iter().zip(amounts.iter()) {
        let sum = totals
            .get(token_id)
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        totals.set(token_id, sum);
    }
    Ok(totals)
}

/// Shape, allow-list and kind checks shared by every NFT credit and debit.
pub fn check_batch(env: &Env, game_id: u32, batch: &NftBatch, require_distributable: bool) -> Result<(), Error> {
    if require_distributable && !tournaments::is_distributable(env, game_id, &batch.collection) {
        return Err(Error::DisallowedAsset);
    }
    if batch.token_ids.len() != batch.amounts.len() {
        return Err(Error::MismatchedArrays);
    }
    if batch.token_ids.is_empty() {
        return Err(Error::InvalidInput);
    }
    if let Some(established) = kind_of(env, &batch.collection) {
        if established != batch.kind {
            return Err(Error::KindMismatch);
        }
    }

    for amount in batch.amounts.iter() {
        if amount == 0 {
            return Err(Error::InvalidAmount);
        }
        if batch.kind == NftKind::Unique && amount != 1 {
            return Err(Error::InvalidAmount);
        }
    }
    if batch.kind == NftKind::Unique {
        let totals = tally(env, &batch.token_ids, &batch.amounts)?;
        if totals.len() != batch.token_ids.len() {
            return Err(Error::InvalidAmount);
        }
    }
    Ok(())
}

/// Pulls every item of `batch` from `from` and credits the inventory.
pub fn credit_batch(
    env: &Env,
    game_id: u32,
    tournament_id: u32,
    from: &Address,
    batch: &NftBatch,
) -> Result<(), Error> {
    check_batch(env, game_id, batch, true)?;

    let totals = tally(env, &batch.token_ids, &batch.amounts)?;
    let mut updated: Map<u32, u32> = Map::new(env);
    for (token_id, amount) in totals.iter() {
        let units = held(env, game_id, tournament_id, &batch.collection, token_id)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if batch.kind == NftKind::Unique && units > 1 {
            return Err(Error::InvalidAmount);
        }
        updated.set(token_id, units);
    }

    establish_kind(env, &batch.collection, batch.kind);

    let contract = env.current_contract_address();
    for (token_id, amount) in batch.token_ids.iter().zip(batch.amounts.iter()) {
        collection::move_item(env, &batch.collection, batch.kind, from, &contract, token_id, amount);
    }
    for (token_id, units) in updated.iter() {
        store(env, game_id, tournament_id, &batch.collection, token_id, units);
    }

    crate::events::nft_prize_deposited(
        env,
        game_id,
        tournament_id,
        from.clone(),
        batch.collection.clone(),
        batch.kind,
        batch.token_ids.len(),
    );
    Ok(())
}

/// Removes the batch from the inventory without moving anything; the caller
/// transfers the items out afterwards. Leaves every cell untouched when any
/// item is short.
pub fn debit_batch(env: &Env, game_id: u32, tournament_id: u32, batch: &NftBatch) -> Result<(), Error> {
    let totals = tally(env, &batch.token_ids, &batch.amounts)?;

    let mut updated: Map<u32, u32> = Map::new(env);
    for (token_id, amount) in totals.iter() {
        let units = held(env, game_id, tournament_id, &batch.collection, token_id);
        if amount > units {
            return Err(Error::InsufficientInventory);
        }
        updated.set(token_id, units - amount);
    }

    for (token_id, units) in updated.iter() {
        store(env, game_id, tournament_id, &batch.collection, token_id, units);
    }
    Ok(())
}
