use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Owner,            // : address
    Metadata,         // : Metadata
    TotalSupply,      // : i128
    Balance(Address), // (id) : i128
}
