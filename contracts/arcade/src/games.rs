//! Game directory: dense ids, creator address, base creator fee, lifecycle.

use soroban_sdk::{Address, Env, String};

use crate::access;
use crate::error::Error;
use crate::events;
use crate::state::{self, bump_persistent_ttl};
use crate::types::{DataKey, Game, Role};

pub fn count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::GameCount)
        .unwrap_or(0)
}

/// Any registered game, active or deprecated.
pub fn load(env: &Env, game_id: u32) -> Result<Game, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Game(game_id))
        .ok_or(Error::NotFound)
}

pub fn load_active(env: &Env, game_id: u32) -> Result<Game, Error> {
    let game = load(env, game_id)?;
    if !game.active {
        return Err(Error::NotFound);
    }
    Ok(game)
}

fn save(env: &Env, game_id: u32, game: &Game) {
    let key = DataKey::Game(game_id);
    env.storage().persistent().set(&key, game);
    bump_persistent_ttl(env, &key);
}

pub fn add_game(
    env: &Env,
    caller: &Address,
    name: String,
    creator: Address,
    base_fee: u32,
) -> Result<u32, Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::GameManager)?;

    if name.len() == 0 || state::is_absent(env, &creator) {
        return Err(Error::InvalidInput);
    }
    state::check_fee_cap(base_fee)?;

    let game_id = count(env);
    let game = Game {
        name: name.clone(),
        creator: creator.clone(),
        base_fee,
        active: true,
    };
    save(env, game_id, &game);
    env.storage()
        .instance()
        .set(&DataKey::GameCount, &(game_id + 1));
    state::bump_instance_ttl(env);

    events::game_added(env, game_id, name, creator, base_fee);
    Ok(game_id)
}

pub fn remove_game(env: &Env, caller: &Address, game_id: u32) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::GameManager)?;

    let mut game = load_active(env, game_id)?;
    game.active = false;
    save(env, game_id, &game);

    events::game_removed(env, game_id);
    Ok(())
}

pub fn update_creator(
    env: &Env,
    caller: &Address,
    game_id: u32,
    new_creator: Address,
) -> Result<(), Error> {
    caller.require_auth();

    let mut game = load_active(env, game_id)?;
    if game.creator != *caller {
        return Err(Error::Unauthorized);
    }
    if state::is_absent(env, &new_creator) {
        return Err(Error::InvalidInput);
    }

    game.creator = new_creator.clone();
    save(env, game_id, &game);

    events::game_creator_updated(env, game_id, new_creator);
    Ok(())
}

pub fn update_base_fee(env: &Env, caller: &Address, game_id: u32, fee: u32) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::GameManager)?;

    state::check_fee_cap(fee)?;
    let mut game = load_active(env, game_id)?;
    game.base_fee = fee;
    save(env, game_id, &game);

    events::game_fee_updated(env, game_id, fee);
    Ok(())
}
