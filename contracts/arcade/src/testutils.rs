#![cfg(test)]

use soroban_sdk::{
    contract, contractimpl, contracttype, testutils::Address as _, token, Address, Env, String,
};

use crate::{ArcadeContract, ArcadeContractClient, Role};

//
// ──────────────────────────────────────────────────────────
// MOCK COLLECTIONS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
enum CollectionKey {
    Owner(u32),
    Units(Address, u32),
}

/// One owner per token id.
#[contract]
pub struct MockUniqueCollection;

#[contractimpl]
impl MockUniqueCollection {
    pub fn mint(env: Env, to: Address, token_id: u32) {
        let key = CollectionKey::Owner(token_id);
        if env.storage().persistent().has(&key) {
            panic!("Token already minted");
        }
        env.storage().persistent().set(&key, &to);
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();
        let key = CollectionKey::Owner(token_id);
        let owner: Address = env.storage().persistent().get(&key).expect("Token not found");
        if owner != from {
            panic!("Not token owner");
        }
        env.storage().persistent().set(&key, &to);
    }

    pub fn owner_of(env: Env, token_id: u32) -> Address {
        env.storage()
            .persistent()
            .get(&CollectionKey::Owner(token_id))
            .expect("Token not found")
    }
}

/// Unit balances per `(owner, token id)`.
#[contract]
pub struct MockMultiCollection;

#[contractimpl]
impl MockMultiCollection {
    pub fn mint_units(env: Env, to: Address, token_id: u32, amount: u32) {
        let units = Self::balance(env.clone(), to.clone(), token_id);
        env.storage()
            .persistent()
            .set(&CollectionKey::Units(to, token_id), &(units + amount));
    }

    pub fn transfer_units(env: Env, from: Address, to: Address, token_id: u32, amount: u32) {
        from.require_auth();
        let from_units = Self::balance(env.clone(), from.clone(), token_id);
        if from_units < amount {
            panic!("Insufficient units");
        }
        let to_units = Self::balance(env.clone(), to.clone(), token_id);
        env.storage()
            .persistent()
            .set(&CollectionKey::Units(from, token_id), &(from_units - amount));
        env.storage()
            .persistent()
            .set(&CollectionKey::Units(to, token_id), &(to_units + amount));
    }

    pub fn balance(env: Env, owner: Address, token_id: u32) -> u32 {
        env.storage()
            .persistent()
            .get(&CollectionKey::Units(owner, token_id))
            .unwrap_or(0)
    }
}

//
// ──────────────────────────────────────────────────────────
// FIXTURE
// ──────────────────────────────────────────────────────────
//

pub const PLATFORM_FEE: u32 = 100;
pub const BASE_FEE: u32 = 100;

pub fn create_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let contract_address = env.register_stellar_asset_contract_v2(admin.clone()).address();
    (
        token::Client::new(env, &contract_address),
        token::StellarAssetClient::new(env, &contract_address),
    )
}

/// An initialized arcade with one active game, dedicated role holders and
/// two tokens: `fee_token` for creation fees and `prize_token` allow-listed
/// for the game.
pub struct Setup<'a> {
    pub env: Env,
    pub client: ArcadeContractClient<'a>,
    pub admin: Address,
    pub fee_recipient: Address,
    pub manager: Address,
    pub distributor: Address,
    pub timelock: Address,
    pub game_creator: Address,
    pub game_id: u32,
    pub fee_token: token::Client<'a>,
    pub fee_token_admin: token::StellarAssetClient<'a>,
    pub prize_token: token::Client<'a>,
    pub prize_token_admin: token::StellarAssetClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, ArcadeContract);
        let client = ArcadeContractClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let fee_recipient = Address::generate(&env);
        let manager = Address::generate(&env);
        let distributor = Address::generate(&env);
        let timelock = Address::generate(&env);
        let game_creator = Address::generate(&env);

        let token_admin = Address::generate(&env);
        let (fee_token, fee_token_admin) = create_token_contract(&env, &token_admin);
        let (prize_token, prize_token_admin) = create_token_contract(&env, &token_admin);

        client.initialize(&admin, &fee_recipient, &PLATFORM_FEE, &fee_token.address, &0, &0);
        client.grant_role(&admin, &Role::TournamentManager, &manager);
        client.grant_role(&admin, &Role::Distributor, &distributor);
        client.grant_role(&admin, &Role::Timelock, &timelock);

        let game_id = client.add_game(&admin, &String::from_str(&env, "Arena"), &game_creator, &BASE_FEE);
        client.update_distributable_token(&admin, &game_id, &prize_token.address, &true);

        Setup {
            env,
            client,
            admin,
            fee_recipient,
            manager,
            distributor,
            timelock,
            game_creator,
            game_id,
            fee_token,
            fee_token_admin,
            prize_token,
            prize_token_admin,
        }
    }

    pub fn name(&self, name: &str) -> String {
        String::from_str(&self.env, name)
    }

    /// Tournament created by `manager` under the default game.
    pub fn tournament(&self, proposed_game_fee: u32, tournament_fee: u32) -> u32 {
        self.client.create_tournament_by_manager(
            &self.manager,
            &self.game_id,
            &self.name("Weekly"),
            &proposed_game_fee,
            &tournament_fee,
        )
    }

    /// Mints `amount` prize tokens to a fresh funder and deposits them into
    /// the pool.
    pub fn fund(&self, tournament_id: u32, amount: i128) -> Address {
        let funder = Address::generate(&self.env);
        self.prize_token_admin.mint(&funder, &amount);
        self.client.deposit_prize(
            &self.admin,
            &funder,
            &self.game_id,
            &tournament_id,
            &self.prize_token.address,
            &amount,
        );
        funder
    }

    pub fn unique_collection(&self) -> MockUniqueCollectionClient<'a> {
        let id = self.env.register_contract(None, MockUniqueCollection);
        let collection = MockUniqueCollectionClient::new(&self.env, &id);
        self.client.update_distributable_token(&self.admin, &self.game_id, &id, &true);
        collection
    }

    pub fn multi_collection(&self) -> MockMultiCollectionClient<'a> {
        let id = self.env.register_contract(None, MockMultiCollection);
        let collection = MockMultiCollectionClient::new(&self.env, &id);
        self.client.update_distributable_token(&self.admin, &self.game_id, &id, &true);
        collection
    }
}
