use soroban_sdk::{contracttype, Address, String, Vec};

//
// ──────────────────────────────────────────────────────────
// ROLES & ASSET KINDS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    GameManager = 0,
    TournamentManager = 1,
    Depositor = 2,
    Distributor = 3,
    Timelock = 4,
}

/// Transfer semantics of an NFT collection, fixed on first escrow.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NftKind {
    Unique = 721,
    MultiUnit = 1155,
}

//
// ──────────────────────────────────────────────────────────
// DATA KEYS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // instance
    Admin,                                   // Address
    Config,                                  // Config
    Paused,                                  // bool
    GameCount,                               // u32

    // persistent
    RoleMember(Role, Address),               // bool
    Game(u32),                               // Game
    TournamentCount(u32),                    // u32 - per game
    Tournament(u32, u32),                    // Tournament - (game, tournament)
    EntryDeposit(u32, u32),                  // TokenAmount - absent when no entry deposit
    DistributableList(u32),                  // Vec<Address>
    DistributableIndex(u32, Address),        // u32 - slot in DistributableList
    DepositTokenList(u32),                   // Vec<Address>
    DepositTokenIndex(u32, Address),         // u32 - slot in DepositTokenList
    DepositTokenRefs(u32, Address),          // u32 - tournaments using the token
    PrizeBalance(u32, u32, Address),         // i128 - (game, tournament, token)
    NftBalance(u32, u32, Address, u32),      // u32 - (game, tournament, collection, token id)
    CollectionKind(Address),                 // NftKind

    // temporary
    PayoutLock(u32, u32, Address),           // bool
}

//
// ──────────────────────────────────────────────────────────
// STRUCTS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub fee_recipient: Address,
    pub platform_fee: u32,                   // basis points of 1000
    pub creation_fee_token: Address,
    pub free_creation_fee: i128,
    pub paid_creation_fee: i128,
    pub max_tournament_fee: u32,             // largest applied game fee + tournament fee on record
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    pub name: String,
    pub creator: Address,
    pub base_fee: u32,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tournament {
    pub creator: Address,
    pub name: String,
    pub applied_game_fee: u32,
    pub tournament_fee: u32,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAmount {
    pub token: Address,
    pub amount: i128,
}

/// A batch of NFT items moving in or out of a prize pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftBatch {
    pub collection: Address,
    pub kind: NftKind,
    pub token_ids: Vec<u32>,
    pub amounts: Vec<u32>,
}
