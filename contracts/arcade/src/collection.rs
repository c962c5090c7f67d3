use soroban_sdk::{contractclient, Address, Env};

use crate::types::NftKind;

/// Transfer surface the arcade expects from an NFT collection contract.
/// Unique collections implement `transfer`; multi-unit collections implement
/// `transfer_units`.
#[allow(dead_code)]
#[contractclient(name = "CollectionClient")]
pub trait Collection {
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
    fn transfer_units(env: Env, from: Address, to: Address, token_id: u32, amount: u32);
}

pub fn move_item(
    env: &Env,
    collection: &Address,
    kind: NftKind,
    from: &Address,
    to: &Address,
    token_id: u32,
    amount: u32,
) {
    let client = CollectionClient::new(env, collection);
    match kind {
        NftKind::Unique => client.transfer(from, to, &token_id),
        NftKind::MultiUnit => client.transfer_units(from, to, &token_id, &amount),
    }
}
