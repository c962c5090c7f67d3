use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::types::{NftKind, Role};

//
// ──────────────────────────────────────────────────────────
// DIRECTORY EVENTS
// ──────────────────────────────────────────────────────────
//

pub fn game_added(env: &Env, game_id: u32, name: String, creator: Address, base_fee: u32) {
    env.events()
        .publish((symbol_short!("game_add"), game_id), (name, creator, base_fee));
}

pub fn game_removed(env: &Env, game_id: u32) {
    env.events().publish((symbol_short!("game_rem"), game_id), ());
}

pub fn game_creator_updated(env: &Env, game_id: u32, creator: Address) {
    env.events()
        .publish((symbol_short!("g_creator"), game_id), creator);
}

pub fn game_fee_updated(env: &Env, game_id: u32, base_fee: u32) {
    env.events().publish((symbol_short!("g_fee"), game_id), base_fee);
}

pub fn tournament_created(
    env: &Env,
    game_id: u32,
    tournament_id: u32,
    creator: Address,
    applied_game_fee: u32,
    tournament_fee: u32,
) {
    env.events().publish(
        (symbol_short!("t_create"), game_id, tournament_id),
        (creator, applied_game_fee, tournament_fee),
    );
}

pub fn deposit_token_updated(env: &Env, game_id: u32, tournament_id: u32, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("t_deposit"), game_id, tournament_id),
        (token, amount),
    );
}

pub fn distributable_updated(env: &Env, game_id: u32, token: Address, allowed: bool) {
    env.events()
        .publish((symbol_short!("dist_tok"), game_id, token), allowed);
}

//
// ──────────────────────────────────────────────────────────
// ADMIN EVENTS
// ──────────────────────────────────────────────────────────
//

pub fn platform_fee_updated(env: &Env, recipient: Address, fee: u32) {
    env.events()
        .publish((symbol_short!("plat_fee"),), (recipient, fee));
}

pub fn creation_fee_token_updated(env: &Env, token: Address) {
    env.events().publish((symbol_short!("cfee_tok"),), token);
}

/// `tier` is `free` or `paid`.
pub fn creation_fee_amount_updated(env: &Env, tier: Symbol, amount: i128) {
    env.events()
        .publish((symbol_short!("cfee_amt"), tier), amount);
}

pub fn role_granted(env: &Env, role: Role, account: Address) {
    env.events()
        .publish((symbol_short!("role_add"), role), account);
}

pub fn role_revoked(env: &Env, role: Role, account: Address) {
    env.events()
        .publish((symbol_short!("role_rem"), role), account);
}

pub fn paused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("paused"),), caller);
}

pub fn unpaused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("unpaused"),), caller);
}

//
// ──────────────────────────────────────────────────────────
// LEDGER EVENTS
// ──────────────────────────────────────────────────────────
//

pub fn entry_deposited(env: &Env, game_id: u32, tournament_id: u32, user: Address, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("deposit"), game_id, tournament_id),
        (user, token, amount),
    );
}

pub fn prize_deposited(env: &Env, game_id: u32, tournament_id: u32, from: Address, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("prize_in"), game_id, tournament_id),
        (from, token, amount),
    );
}

pub fn nft_prize_deposited(
    env: &Env,
    game_id: u32,
    tournament_id: u32,
    from: Address,
    collection: Address,
    kind: NftKind,
    items: u32,
) {
    env.events().publish(
        (symbol_short!("nft_in"), game_id, tournament_id),
        (from, collection, kind, items),
    );
}

pub fn prize_paid(env: &Env, game_id: u32, tournament_id: u32, to: Address, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("prize_out"), game_id, tournament_id),
        (to, token, amount),
    );
}

pub fn nft_prize_paid(
    env: &Env,
    game_id: u32,
    tournament_id: u32,
    to: Address,
    collection: Address,
    token_id: u32,
    amount: u32,
) {
    env.events().publish(
        (symbol_short!("nft_out"), game_id, tournament_id),
        (to, collection, token_id, amount),
    );
}

pub fn prize_withdrawn(env: &Env, game_id: u32, tournament_id: u32, to: Address, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdraw"), game_id, tournament_id),
        (to, token, amount),
    );
}

pub fn nft_prize_withdrawn(
    env: &Env,
    game_id: u32,
    tournament_id: u32,
    to: Address,
    collection: Address,
    items: u32,
) {
    env.events().publish(
        (symbol_short!("nft_wdraw"), game_id, tournament_id),
        (to, collection, items),
    );
}
