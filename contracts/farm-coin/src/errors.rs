use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Errors {
    Unauthorized = 1,
    InvalidAmount = 2,
    InsufficientBalance = 3,
    Overflow = 4,
    TokenMissing = 5,
}
