//! Tournament directory: per-game append-only tournament records, entry
//! deposit configuration and the per-game distributable allow-list.

use soroban_sdk::{token, Address, Env, String};

use crate::access;
use crate::error::Error;
use crate::events;
use crate::fees::{resolve_game_fee, FeeRates};
use crate::games;
use crate::inventory;
use crate::ledger;
use crate::state::{self, bump_persistent_ttl, SystemState};
use crate::token_set::TokenSet;
use crate::types::{DataKey, NftBatch, Role, TokenAmount, Tournament};

pub fn count(env: &Env, game_id: u32) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::TournamentCount(game_id))
        .unwrap_or(0)
}

pub fn load(env: &Env, game_id: u32, tournament_id: u32) -> Result<Tournament, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Tournament(game_id, tournament_id))
        .ok_or(Error::NotFound)
}

fn save(env: &Env, game_id: u32, tournament_id: u32, tournament: &Tournament) {
    let key = DataKey::Tournament(game_id, tournament_id);
    env.storage().persistent().set(&key, tournament);
    bump_persistent_ttl(env, &key);
}

/// Fee rates a payout from this tournament is split by.
pub fn fee_rates(env: &Env, tournament: &Tournament) -> Result<FeeRates, Error> {
    let config = state::load_config(env)?;
    Ok(FeeRates {
        platform: config.platform_fee,
        game_creator: tournament.applied_game_fee,
        tournament_creator: tournament.tournament_fee,
    })
}

pub fn is_distributable(env: &Env, game_id: u32, token: &Address) -> bool {
    TokenSet::Distributable.contains(env, game_id, token)
}

//
// ──────────────────────────────────────────────────────────
// CREATION
// ──────────────────────────────────────────────────────────
//

/// Validates name and fees against the game and platform; returns the
/// game-creator fee the tournament will record.
fn resolve_fees(
    env: &Env,
    game_id: u32,
    name: &String,
    proposed_game_fee: u32,
    tournament_fee: u32,
) -> Result<u32, Error> {
    if name.len() == 0 {
        return Err(Error::InvalidInput);
    }

    let game = games::load_active(env, game_id)?;
    let applied_game_fee = resolve_game_fee(game.base_fee, proposed_game_fee)?;

    let config = state::load_config(env)?;
    FeeRates {
        platform: config.platform_fee,
        game_creator: applied_game_fee,
        tournament_creator: tournament_fee,
    }
    .validate()?;

    Ok(applied_game_fee)
}

fn record(
    env: &Env,
    game_id: u32,
    creator: &Address,
    name: String,
    applied_game_fee: u32,
    tournament_fee: u32,
) -> Result<u32, Error> {
    let tournament_id = count(env, game_id);
    let tournament = Tournament {
        creator: creator.clone(),
        name,
        applied_game_fee,
        tournament_fee,
        created_at: env.ledger().timestamp(),
    };
    save(env, game_id, tournament_id, &tournament);

    let count_key = DataKey::TournamentCount(game_id);
    env.storage().persistent().set(&count_key, &(tournament_id + 1));
    bump_persistent_ttl(env, &count_key);

    // Platform fee updates are checked against the largest fee total on record.
    let mut config = state::load_config(env)?;
    let fee_total = applied_game_fee + tournament_fee;
    if fee_total > config.max_tournament_fee {
        config.max_tournament_fee = fee_total;
        state::save_config(env, &config);
    }

    events::tournament_created(
        env,
        game_id,
        tournament_id,
        creator.clone(),
        applied_game_fee,
        tournament_fee,
    );
    Ok(tournament_id)
}

pub fn create_by_manager(
    env: &Env,
    caller: &Address,
    game_id: u32,
    name: String,
    proposed_game_fee: u32,
    tournament_fee: u32,
) -> Result<u32, Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::TournamentManager)?;

    let applied = resolve_fees(env, game_id, &name, proposed_game_fee, tournament_fee)?;
    record(env, game_id, caller, name, applied, tournament_fee)
}

/// Manager creation that also configures the entry deposit and allow-lists
/// a prize token for the game in the same call.
pub fn create_with_tokens(
    env: &Env,
    caller: &Address,
    game_id: u32,
    name: String,
    proposed_game_fee: u32,
    tournament_fee: u32,
    deposit: TokenAmount,
    distributable_token: Address,
) -> Result<u32, Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::TournamentManager)?;

    if deposit.amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let applied = resolve_fees(env, game_id, &name, proposed_game_fee, tournament_fee)?;
    let tournament_id = record(env, game_id, caller, name, applied, tournament_fee)?;
    apply_deposit(env, game_id, tournament_id, deposit.token, deposit.amount);

    if TokenSet::Distributable.insert(env, game_id, &distributable_token) {
        events::distributable_updated(env, game_id, distributable_token, true);
    }
    Ok(tournament_id)
}

/// Open creation path. The creator pays the free or paid creation fee and may
/// seed the prize pool; seeds are validated before anything is written.
pub fn create_by_creator(
    env: &Env,
    creator: &Address,
    game_id: u32,
    name: String,
    proposed_game_fee: u32,
    tournament_fee: u32,
    deposit: Option<TokenAmount>,
    seed: Option<TokenAmount>,
    nft_seed: Option<NftBatch>,
) -> Result<u32, Error> {
    creator.require_auth();

    let applied = resolve_fees(env, game_id, &name, proposed_game_fee, tournament_fee)?;

    if let Some(deposit) = &deposit {
        if deposit.amount < 0 {
            return Err(Error::InvalidAmount);
        }
    }
    if seed.is_some() || nft_seed.is_some() {
        SystemState::load(env).ensure_active()?;
    }
    if let Some(seed) = &seed {
        ledger::check_prize(env, game_id, &seed.token, seed.amount)?;
    }
    if let Some(batch) = &nft_seed {
        inventory::check_batch(env, game_id, batch, true)?;
    }

    let config = state::load_config(env)?;
    let paid = deposit.as_ref().map_or(false, |d| d.amount > 0);
    let creation_fee = if paid {
        config.paid_creation_fee
    } else {
        config.free_creation_fee
    };
    if creation_fee > 0 {
        token::Client::new(env, &config.creation_fee_token).transfer(
            creator,
            &config.fee_recipient,
            &creation_fee,
        );
    }

    let tournament_id = record(env, game_id, creator, name, applied, tournament_fee)?;

    if let Some(deposit) = deposit {
        if deposit.amount > 0 {
            apply_deposit(env, game_id, tournament_id, deposit.token, deposit.amount);
        }
    }
    if let Some(seed) = seed {
        ledger::credit_prize(env, game_id, tournament_id, creator, &seed.token, seed.amount)?;
    }
    if let Some(batch) = nft_seed {
        inventory::credit_batch(env, game_id, tournament_id, creator, &batch)?;
    }

    Ok(tournament_id)
}

//
// ──────────────────────────────────────────────────────────
// TOKEN CONFIGURATION
// ──────────────────────────────────────────────────────────
//

/// The tournament's entry deposit requirement, if any.
pub fn entry_deposit(env: &Env, game_id: u32, tournament_id: u32) -> Option<TokenAmount> {
    env.storage()
        .persistent()
        .get(&DataKey::EntryDeposit(game_id, tournament_id))
}

pub fn deposit_amount(env: &Env, game_id: u32, tournament_id: u32, token: &Address) -> i128 {
    match entry_deposit(env, game_id, tournament_id) {
        Some(deposit) if deposit.token == *token => deposit.amount,
        _ => 0,
    }
}

pub fn update_deposit_token_amount(
    env: &Env,
    caller: &Address,
    game_id: u32,
    tournament_id: u32,
    token: Address,
    amount: i128,
) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::TournamentManager)?;

    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    load(env, game_id, tournament_id)?;
    apply_deposit(env, game_id, tournament_id, token, amount);
    Ok(())
}

/// Zero clears the requirement when `token` is the configured one and is a
/// no-op otherwise; a positive amount sets or replaces it.
fn apply_deposit(env: &Env, game_id: u32, tournament_id: u32, token: Address, amount: i128) {
    let key = DataKey::EntryDeposit(game_id, tournament_id);
    let current = entry_deposit(env, game_id, tournament_id);

    if amount == 0 {
        match current {
            Some(current) if current.token == token => {
                release_deposit_token(env, game_id, &token);
                env.storage().persistent().remove(&key);
            }
            _ => return,
        }
    } else {
        match current {
            Some(current) if current.token == token => {}
            Some(current) => {
                release_deposit_token(env, game_id, &current.token);
                retain_deposit_token(env, game_id, &token);
            }
            None => retain_deposit_token(env, game_id, &token),
        }
        let deposit = TokenAmount {
            token: token.clone(),
            amount,
        };
        env.storage().persistent().set(&key, &deposit);
        bump_persistent_ttl(env, &key);
    }

    events::deposit_token_updated(env, game_id, tournament_id, token, amount);
}

fn retain_deposit_token(env: &Env, game_id: u32, token: &Address) {
    let key = DataKey::DepositTokenRefs(game_id, token.clone());
    let refs: u32 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage().persistent().set(&key, &(refs + 1));
    bump_persistent_ttl(env, &key);

    if refs == 0 {
        TokenSet::DepositTokens.insert(env, game_id, token);
    }
}

fn release_deposit_token(env: &Env, game_id: u32, token: &Address) {
    let key = DataKey::DepositTokenRefs(game_id, token.clone());
    let refs: u32 = env.storage().persistent().get(&key).unwrap_or(0);

    if refs <= 1 {
        env.storage().persistent().remove(&key);
        TokenSet::DepositTokens.remove(env, game_id, token);
    } else {
        env.storage().persistent().set(&key, &(refs - 1));
        bump_persistent_ttl(env, &key);
    }
}

pub fn update_distributable(
    env: &Env,
    caller: &Address,
    game_id: u32,
    token: Address,
    allowed: bool,
) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::GameManager)?;

    games::load(env, game_id)?;

    let changed = if allowed {
        TokenSet::Distributable.insert(env, game_id, &token)
    } else {
        TokenSet::Distributable.remove(env, game_id, &token)
    };
    if changed {
        events::distributable_updated(env, game_id, token, allowed);
    }
    Ok(())
}
