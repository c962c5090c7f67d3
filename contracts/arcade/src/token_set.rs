//! Per-game iterable address sets backed by a `Vec` plus a slot index.
//!
//! Membership, insertion and removal are O(1). Removal swaps the last member
//! into the vacated slot, so list order changes after a removal.

use soroban_sdk::{Address, Env, Vec};

use crate::state::bump_persistent_ttl;
use crate::types::DataKey;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenSet {
    /// Assets approved for escrow and payout under a game.
    Distributable,
    /// Tokens currently configured as an entry deposit by some tournament of a game.
    DepositTokens,
}

impl TokenSet {
    fn list_key(self, game_id: u32) -> DataKey {
        match self {
            TokenSet::Distributable => DataKey::DistributableList(game_id),
            TokenSet::DepositTokens => DataKey::DepositTokenList(game_id),
        }
    }

    fn index_key(self, game_id: u32, token: &Address) -> DataKey {
        match self {
            TokenSet::Distributable => DataKey::DistributableIndex(game_id, token.clone()),
            TokenSet::DepositTokens => DataKey::DepositTokenIndex(game_id, token.clone()),
        }
    }

    pub fn members(self, env: &Env, game_id: u32) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&self.list_key(game_id))
            .unwrap_or(Vec::new(env))
    }

    pub fn contains(self, env: &Env, game_id: u32, token: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&self.index_key(game_id, token))
    }

    /// Returns `false` if `token` was already a member.
    pub fn insert(self, env: &Env, game_id: u32, token: &Address) -> bool {
        if self.contains(env, game_id, token) {
            return false;
        }

        let mut list = self.members(env, game_id);
        let slot = list.len();
        list.push_back(token.clone());

        self.store_slot(env, game_id, token, slot);
        self.store_list(env, game_id, &list);
        true
    }

    /// Returns `false` if `token` was not a member.
    pub fn remove(self, env: &Env, game_id: u32, token: &Address) -> bool {
        let index_key = self.index_key(game_id, token);
        let slot: u32 = match env.storage().persistent().get(&index_key) {
            Some(slot) => slot,
            None => return false,
        };

        let mut list = self.members(env, game_id);
        if let Some(last) = list.pop_back() {
            if slot < list.len() {
                list.set(slot, last.clone());
                self.store_slot(env, game_id, &last, slot);
            }
        }

        env.storage().persistent().remove(&index_key);
        self.store_list(env, game_id, &list);
        true
    }

    fn store_slot(self, env: &Env, game_id: u32, token: &Address, slot: u32) {
        let key = self.index_key(game_id, token);
        env.storage().persistent().set(&key, &slot);
        bump_persistent_ttl(env, &key);
    }

    fn store_list(self, env: &Env, game_id: u32, list: &Vec<Address>) {
        let key = self.list_key(game_id);
        env.storage().persistent().set(&key, list);
        bump_persistent_ttl(env, &key);
    }
}
