#![no_std]

//! Arcade prize-pool contract.
//!
//! Games register with a creator and a base creator fee; tournaments under a
//! game collect entry deposits and prize seeds (fungible tokens, unique items
//! and multi-unit items) into per-`(game, tournament, asset)` pools. Payouts
//! split each fungible distribution between the winners, the game creator,
//! the tournament creator and the platform. No more value ever leaves a pool
//! than was credited to it.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod access;
mod admin;
mod collection;
mod distribution;
mod error;
mod events;
mod fees;
mod games;
mod inventory;
mod ledger;
mod state;
mod token_set;
mod tournaments;
mod types;

pub use collection::CollectionClient;
pub use error::Error;
pub use types::{Config, Game, NftBatch, NftKind, Role, TokenAmount, Tournament};

use state::SystemState;
use token_set::TokenSet;

#[contract]
pub struct ArcadeContract;

#[contractimpl]
impl ArcadeContract {
    // ───────────── INITIALIZATION & ROLES ─────────────

    /// Sets the admin and platform fee configuration. The admin also receives
    /// the GameManager, TournamentManager and Depositor roles.
    pub fn initialize(
        env: Env,
        admin: Address,
        fee_recipient: Address,
        platform_fee: u32,
        creation_fee_token: Address,
        free_creation_fee: i128,
        paid_creation_fee: i128,
    ) -> Result<(), Error> {
        admin::initialize(
            &env,
            admin,
            fee_recipient,
            platform_fee,
            creation_fee_token,
            free_creation_fee,
            paid_creation_fee,
        )
    }

    pub fn grant_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), Error> {
        admin::grant_role(&env, &caller, role, account)
    }

    pub fn revoke_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), Error> {
        admin::revoke_role(&env, &caller, role, account)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access::has_role(&env, role, &account)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        access::admin(&env)
    }

    // ───────────── GAMES ─────────────

    pub fn add_game(env: Env, caller: Address, name: String, creator: Address, base_fee: u32) -> Result<u32, Error> {
        games::add_game(&env, &caller, name, creator, base_fee)
    }

    /// Deprecates a game. Its id is never reused and its pools stay intact.
    pub fn remove_game(env: Env, caller: Address, game_id: u32) -> Result<(), Error> {
        games::remove_game(&env, &caller, game_id)
    }

    pub fn update_game_creator(env: Env, caller: Address, game_id: u32, new_creator: Address) -> Result<(), Error> {
        games::update_creator(&env, &caller, game_id, new_creator)
    }

    pub fn update_base_game_creator_fee(env: Env, caller: Address, game_id: u32, fee: u32) -> Result<(), Error> {
        games::update_base_fee(&env, &caller, game_id, fee)
    }

    pub fn game_count(env: Env) -> u32 {
        games::count(&env)
    }

    pub fn get_game(env: Env, game_id: u32) -> Result<Game, Error> {
        games::load(&env, game_id)
    }

    pub fn get_game_name(env: Env, game_id: u32) -> Result<String, Error> {
        Ok(games::load(&env, game_id)?.name)
    }

    pub fn get_game_creator(env: Env, game_id: u32) -> Result<Address, Error> {
        Ok(games::load(&env, game_id)?.creator)
    }

    pub fn get_game_base_fee(env: Env, game_id: u32) -> Result<u32, Error> {
        Ok(games::load(&env, game_id)?.base_fee)
    }

    pub fn is_game_deprecated(env: Env, game_id: u32) -> Result<bool, Error> {
        Ok(!games::load(&env, game_id)?.active)
    }

    // ───────────── TOURNAMENTS ─────────────

    pub fn create_tournament_by_manager(
        env: Env,
        caller: Address,
        game_id: u32,
        name: String,
        proposed_game_fee: u32,
        tournament_fee: u32,
    ) -> Result<u32, Error> {
        tournaments::create_by_manager(&env, &caller, game_id, name, proposed_game_fee, tournament_fee)
    }

    /// Manager creation that also sets the entry deposit and allow-lists
    /// `distributable_token` for the game.
    pub fn create_tournament_with_tokens(
        env: Env,
        caller: Address,
        game_id: u32,
        name: String,
        proposed_game_fee: u32,
        tournament_fee: u32,
        deposit: TokenAmount,
        distributable_token: Address,
    ) -> Result<u32, Error> {
        tournaments::create_with_tokens(
            &env,
            &caller,
            game_id,
            name,
            proposed_game_fee,
            tournament_fee,
            deposit,
            distributable_token,
        )
    }

    /// Open creation path. The creator pays the free or paid creation fee and
    /// may seed the prize pool with tokens and items in the same call.
    pub fn create_tournament_by_creator(
        env: Env,
        creator: Address,
        game_id: u32,
        name: String,
        proposed_game_fee: u32,
        tournament_fee: u32,
        deposit: Option<TokenAmount>,
        seed: Option<TokenAmount>,
        nft_seed: Option<NftBatch>,
    ) -> Result<u32, Error> {
        tournaments::create_by_creator(
            &env,
            &creator,
            game_id,
            name,
            proposed_game_fee,
            tournament_fee,
            deposit,
            seed,
            nft_seed,
        )
    }

    pub fn update_deposit_token_amount(
        env: Env,
        caller: Address,
        game_id: u32,
        tournament_id: u32,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        tournaments::update_deposit_token_amount(&env, &caller, game_id, tournament_id, token, amount)
    }

    pub fn update_distributable_token(
        env: Env,
        caller: Address,
        game_id: u32,
        token: Address,
        allowed: bool,
    ) -> Result<(), Error> {
        tournaments::update_distributable(&env, &caller, game_id, token, allowed)
    }

    pub fn get_tournament_count(env: Env, game_id: u32) -> u32 {
        tournaments::count(&env, game_id)
    }

    pub fn get_tournament(env: Env, game_id: u32, tournament_id: u32) -> Result<Tournament, Error> {
        tournaments::load(&env, game_id, tournament_id)
    }

    pub fn get_tournament_name(env: Env, game_id: u32, tournament_id: u32) -> Result<String, Error> {
        Ok(tournaments::load(&env, game_id, tournament_id)?.name)
    }

    pub fn get_tournament_creator(env: Env, game_id: u32, tournament_id: u32) -> Result<Address, Error> {
        Ok(tournaments::load(&env, game_id, tournament_id)?.creator)
    }

    pub fn get_applied_game_creator_fee(env: Env, game_id: u32, tournament_id: u32) -> Result<u32, Error> {
        Ok(tournaments::load(&env, game_id, tournament_id)?.applied_game_fee)
    }

    pub fn get_tournament_creator_fee(env: Env, game_id: u32, tournament_id: u32) -> Result<u32, Error> {
        Ok(tournaments::load(&env, game_id, tournament_id)?.tournament_fee)
    }

    /// Zero when `token` is not the tournament's deposit token.
    pub fn get_deposit_token_amount(env: Env, game_id: u32, tournament_id: u32, token: Address) -> i128 {
        tournaments::deposit_amount(&env, game_id, tournament_id, &token)
    }

    /// Distinct deposit tokens configured across the game's tournaments.
    pub fn get_deposit_token_list(env: Env, game_id: u32) -> Vec<Address> {
        TokenSet::DepositTokens.members(&env, game_id)
    }

    pub fn get_distributable_token_list(env: Env, game_id: u32) -> Vec<Address> {
        TokenSet::Distributable.members(&env, game_id)
    }

    pub fn is_distributable(env: Env, game_id: u32, token: Address) -> bool {
        tournaments::is_distributable(&env, game_id, &token)
    }

    // ───────────── PLATFORM CONFIGURATION ─────────────

    pub fn update_platform_fee(env: Env, caller: Address, recipient: Address, fee: u32) -> Result<(), Error> {
        admin::update_platform_fee(&env, &caller, recipient, fee)
    }

    pub fn update_creation_fee_token(env: Env, caller: Address, token: Address) -> Result<(), Error> {
        admin::update_creation_fee_token(&env, &caller, token)
    }

    pub fn update_free_creation_fee(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        admin::update_free_creation_fee(&env, &caller, amount)
    }

    pub fn update_paid_creation_fee(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        admin::update_paid_creation_fee(&env, &caller, amount)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        state::load_config(&env)
    }

    pub fn platform_fee(env: Env) -> Result<u32, Error> {
        Ok(state::load_config(&env)?.platform_fee)
    }

    pub fn fee_recipient(env: Env) -> Result<Address, Error> {
        Ok(state::load_config(&env)?.fee_recipient)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        admin::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        admin::unpause(&env, &caller)
    }

    pub fn is_paused(env: Env) -> bool {
        SystemState::load(&env).paused
    }

    // ───────────── DEPOSITS ─────────────

    /// Entry deposit of exactly the tournament's configured amount.
    pub fn deposit(env: Env, user: Address, game_id: u32, tournament_id: u32, token: Address) -> Result<(), Error> {
        distribution::deposit(&env, &user, game_id, tournament_id, token)
    }

    pub fn deposit_prize(
        env: Env,
        caller: Address,
        from: Address,
        game_id: u32,
        tournament_id: u32,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        distribution::deposit_prize(&env, &caller, &from, game_id, tournament_id, token, amount)
    }

    pub fn deposit_nft_prize(
        env: Env,
        caller: Address,
        from: Address,
        game_id: u32,
        tournament_id: u32,
        collection: Address,
        kind: NftKind,
        token_ids: Vec<u32>,
        amounts: Vec<u32>,
    ) -> Result<(), Error> {
        let batch = NftBatch {
            collection,
            kind,
            token_ids,
            amounts,
        };
        distribution::deposit_nft_prize(&env, &caller, &from, game_id, tournament_id, batch)
    }

    // ───────────── PAYOUTS ─────────────

    pub fn distribute_prize(
        env: Env,
        caller: Address,
        game_id: u32,
        tournament_id: u32,
        winners: Vec<Address>,
        token: Address,
        amounts: Vec<i128>,
    ) -> Result<(), Error> {
        distribution::distribute_prize(&env, &caller, game_id, tournament_id, winners, token, amounts)
    }

    pub fn distribute_nft_prize(
        env: Env,
        caller: Address,
        game_id: u32,
        tournament_id: u32,
        winners: Vec<Address>,
        collection: Address,
        kind: NftKind,
        token_ids: Vec<u32>,
        amounts: Vec<u32>,
    ) -> Result<(), Error> {
        let batch = NftBatch {
            collection,
            kind,
            token_ids,
            amounts,
        };
        distribution::distribute_nft_prize(&env, &caller, game_id, tournament_id, winners, batch)
    }

    /// Timelock-only emergency extraction. Ignores the allow-list.
    pub fn withdraw_prize(
        env: Env,
        caller: Address,
        to: Address,
        game_id: u32,
        tournament_id: u32,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        distribution::withdraw_prize(&env, &caller, &to, game_id, tournament_id, token, amount)
    }

    pub fn withdraw_nft_prize(
        env: Env,
        caller: Address,
        to: Address,
        game_id: u32,
        tournament_id: u32,
        collection: Address,
        kind: NftKind,
        token_ids: Vec<u32>,
        amounts: Vec<u32>,
    ) -> Result<(), Error> {
        let batch = NftBatch {
            collection,
            kind,
            token_ids,
            amounts,
        };
        distribution::withdraw_nft_prize(&env, &caller, &to, game_id, tournament_id, batch)
    }

    pub fn get_prize_balance(env: Env, game_id: u32, tournament_id: u32, token: Address) -> i128 {
        ledger::balance(&env, game_id, tournament_id, &token)
    }

    pub fn get_nft_balance(env: Env, game_id: u32, tournament_id: u32, collection: Address, token_id: u32) -> u32 {
        inventory::held(&env, game_id, tournament_id, &collection, token_id)
    }

    pub fn get_nft_kind(env: Env, collection: Address) -> Option<NftKind> {
        inventory::kind_of(&env, &collection)
    }
}

#[cfg(test)]
mod testutils;
