use soroban_sdk::contracterror;

/// Error codes returned by every arcade entry point.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    NotFound = 4,
    InvalidInput = 5,
    FeeTooLow = 6,
    FeeExceeded = 7,
    DisallowedAsset = 8,
    MismatchedArrays = 9,
    KindMismatch = 10,
    InvalidAmount = 11,
    InvalidWinner = 12,
    InsufficientBalance = 13,
    InsufficientInventory = 14,
    SystemPaused = 15,
    ReentrantCall = 16,
    Overflow = 17,
}
