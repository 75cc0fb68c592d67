use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Deposit {
    pub id: u32,
    pub principal: i128,
    pub lock_months: u32,
    pub start_time: u64,
}

// Accrual checkpoint and running totals for one depositor
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Farmer {
    pub next_id: u32,
    pub accrued_at: u64,
    pub unclaimed: i128,
    pub deposited: i128,
    pub withdrawn: i128,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DepositStatus {
    Active,
    Withdrawable,
    Closed,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Admin,             // : address
    FiatAsset,         // : address
    RewardAsset,       // : address
    FarmPaused,        // : bool
    Farmer(Address),   // (farmer) : Farmer
    Deposits(Address), // (farmer) : Vec<Deposit>
}
