//! Prize distribution engine.
//!
//! Every payout path follows the same shape: validate everything, debit the
//! ledger, then transfer. A failing check leaves no state behind and no
//! transfer runs before the debit.

use soroban_sdk::{log, Address, Env, Vec};

use crate::access;
use crate::collection;
use crate::error::Error;
use crate::events;
use crate::fees::{cut, FeeSplit};
use crate::games;
use crate::inventory;
use crate::ledger;
use crate::state::{self, SystemState};
use crate::tournaments;
use crate::types::{DataKey, NftBatch, Role};

/// Marks a `(game, tournament, asset)` pool as mid-payout. Released on drop.
struct PayoutLock<'a> {
    env: &'a Env,
    key: DataKey,
}

impl<'a> PayoutLock<'a> {
    fn acquire(env: &'a Env, game_id: u32, tournament_id: u32, asset: &Address) -> Result<Self, Error> {
        let key = DataKey::PayoutLock(game_id, tournament_id, asset.clone());
        if env.storage().temporary().has(&key) {
            return Err(Error::ReentrantCall);
        }
        env.storage().temporary().set(&key, &true);
        Ok(PayoutLock { env, key })
    }
}

impl Drop for PayoutLock<'_> {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&self.key);
    }
}

/// `from` authorizes separately only when it is not the caller.
fn require_funder_auth(caller: &Address, from: &Address) {
    if from != caller {
        from.require_auth();
    }
}

fn check_winners(env: &Env, winners: &Vec<Address>) -> Result<(), Error> {
    for winner in winners.iter() {
        if state::is_absent(env, &winner) {
            return Err(Error::InvalidWinner);
        }
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// DEPOSITS
// ──────────────────────────────────────────────────────────
//

/// Entry deposit: moves exactly the tournament's configured amount of `token`
/// from `user` into the pool.
pub fn deposit(env: &Env, user: &Address, game_id: u32, tournament_id: u32, token: Address) -> Result<(), Error> {
    user.require_auth();
    SystemState::load(env).ensure_active()?;

    games::load_active(env, game_id)?;
    tournaments::load(env, game_id, tournament_id)?;
    let amount = match tournaments::entry_deposit(env, game_id, tournament_id) {
        Some(deposit) if deposit.token == token && deposit.amount > 0 => deposit.amount,
        _ => return Err(Error::DisallowedAsset),
    };

    ledger::transfer_in(env, &token, user, amount);
    ledger::credit(env, game_id, tournament_id, &token, amount)?;

    events::entry_deposited(env, game_id, tournament_id, user.clone(), token, amount);
    Ok(())
}

pub fn deposit_prize(
    env: &Env,
    caller: &Address,
    from: &Address,
    game_id: u32,
    tournament_id: u32,
    token: Address,
    amount: i128,
) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::Depositor)?;
    require_funder_auth(caller, from);
    SystemState::load(env).ensure_active()?;

    tournaments::load(env, game_id, tournament_id)?;
    games::load_active(env, game_id)?;

    ledger::credit_prize(env, game_id, tournament_id, from, &token, amount)
}

pub fn deposit_nft_prize(
    env: &Env,
    caller: &Address,
    from: &Address,
    game_id: u32,
    tournament_id: u32,
    batch: NftBatch,
) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::Depositor)?;
    require_funder_auth(caller, from);
    SystemState::load(env).ensure_active()?;

    tournaments::load(env, game_id, tournament_id)?;
    games::load_active(env, game_id)?;

    inventory::credit_batch(env, game_id, tournament_id, from, &batch)
}

//
// ──────────────────────────────────────────────────────────
// DISTRIBUTION
// ──────────────────────────────────────────────────────────
//

/// Pays `amounts[i]` gross to `winners[i]` out of the pool. Each winner nets
/// the amount minus all fee rates; the fee parties are paid from the total.
/// The pool is debited only by what is transferred, so rounding dust stays.
pub fn distribute_prize(
    env: &Env,
    caller: &Address,
    game_id: u32,
    tournament_id: u32,
    winners: Vec<Address>,
    token: Address,
    amounts: Vec<i128>,
) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::Distributor)?;
    SystemState::load(env).ensure_active()?;

    if winners.len() != amounts.len() {
        return Err(Error::MismatchedArrays);
    }
    if winners.is_empty() {
        return Err(Error::InvalidInput);
    }

    let tournament = tournaments::load(env, game_id, tournament_id)?;
    let game = games::load(env, game_id)?;
    if !tournaments::is_distributable(env, game_id, &token) {
        return Err(Error::DisallowedAsset);
    }
    check_winners(env, &winners)?;

    let _lock = PayoutLock::acquire(env, game_id, tournament_id, &token)?;

    let rates = tournaments::fee_rates(env, &tournament)?;
    let winner_rate = rates.winner_rate()?;

    let mut total: i128 = 0;
    let mut winners_total: i128 = 0;
    let mut payouts: Vec<i128> = Vec::new(env);
    for amount in amounts.iter() {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        total = total.checked_add(amount).ok_or(Error::Overflow)?;
        let net = cut(amount, winner_rate)?;
        winners_total = winners_total.checked_add(net).ok_or(Error::Overflow)?;
        payouts.push_back(net);
    }

    if total > ledger::balance(env, game_id, tournament_id, &token) {
        return Err(Error::InsufficientBalance);
    }
    let split = FeeSplit::compute(total, winners_total, &rates)?;
    let paid = split.paid()?;
    let remaining = ledger::debit(env, game_id, tournament_id, &token, paid)?;

    log!(env, "distribute", game_id, tournament_id, total, paid, remaining);

    for (winner, net) in winners.iter().zip(payouts.iter()) {
        ledger::transfer_out(env, &token, &winner, net);
        events::prize_paid(env, game_id, tournament_id, winner, token.clone(), net);
    }

    let config = state::load_config(env)?;
    let fee_parties = [
        (game.creator, split.game_creator),
        (tournament.creator, split.tournament_creator),
        (config.fee_recipient, split.platform),
    ];
    for (recipient, amount) in fee_parties {
        if amount == 0 {
            continue;
        }
        ledger::transfer_out(env, &token, &recipient, amount);
        events::prize_paid(env, game_id, tournament_id, recipient, token.clone(), amount);
    }

    Ok(())
}

/// Moves `amounts[i]` units of `token_ids[i]` to `winners[i]`. Item prizes
/// carry no fee split.
pub fn distribute_nft_prize(
    env: &Env,
    caller: &Address,
    game_id: u32,
    tournament_id: u32,
    winners: Vec<Address>,
    batch: NftBatch,
) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::Distributor)?;
    SystemState::load(env).ensure_active()?;

    if winners.len() != batch.token_ids.len() || winners.len() != batch.amounts.len() {
        return Err(Error::MismatchedArrays);
    }
    tournaments::load(env, game_id, tournament_id)?;
    inventory::check_batch(env, game_id, &batch, true)?;
    check_winners(env, &winners)?;

    let _lock = PayoutLock::acquire(env, game_id, tournament_id, &batch.collection)?;

    inventory::debit_batch(env, game_id, tournament_id, &batch)?;

    log!(env, "distribute_nft", game_id, tournament_id, batch.token_ids.len());

    let contract = env.current_contract_address();
    let lines = winners
        .iter()
        .zip(batch.token_ids.iter())
        .zip(batch.amounts.iter());
    for ((winner, token_id), amount) in lines {
        collection::move_item(env, &batch.collection, batch.kind, &contract, &winner, token_id, amount);
        events::nft_prize_paid(
            env,
            game_id,
            tournament_id,
            winner,
            batch.collection.clone(),
            token_id,
            amount,
        );
    }

    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// WITHDRAWALS (timelock)
// ──────────────────────────────────────────────────────────
//

pub fn withdraw_prize(
    env: &Env,
    caller: &Address,
    to: &Address,
    game_id: u32,
    tournament_id: u32,
    token: Address,
    amount: i128,
) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::Timelock)?;
    SystemState::load(env).ensure_active()?;

    if state::is_absent(env, to) {
        return Err(Error::InvalidInput);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let _lock = PayoutLock::acquire(env, game_id, tournament_id, &token)?;

    ledger::debit(env, game_id, tournament_id, &token, amount)?;
    ledger::transfer_out(env, &token, to, amount);

    log!(env, "withdraw", game_id, tournament_id, amount);
    events::prize_withdrawn(env, game_id, tournament_id, to.clone(), token, amount);
    Ok(())
}

pub fn withdraw_nft_prize(
    env: &Env,
    caller: &Address,
    to: &Address,
    game_id: u32,
    tournament_id: u32,
    batch: NftBatch,
) -> Result<(), Error> {
    caller.require_auth();
    access::require_role(env, caller, Role::Timelock)?;
    SystemState::load(env).ensure_active()?;

    if state::is_absent(env, to) {
        return Err(Error::InvalidInput);
    }
    inventory::check_batch(env, game_id, &batch, false)?;

    let _lock = PayoutLock::acquire(env, game_id, tournament_id, &batch.collection)?;

    inventory::debit_batch(env, game_id, tournament_id, &batch)?;

    let contract = env.current_contract_address();
    for (token_id, amount) in batch.token_ids.iter().zip(batch.amounts.iter()) {
        collection::move_item(env, &batch.collection, batch.kind, &contract, to, token_id, amount);
    }

    events::nft_prize_withdrawn(
        env,
        game_id,
        tournament_id,
        to.clone(),
        batch.collection.clone(),
        batch.token_ids.len(),
    );
    Ok(())
}
