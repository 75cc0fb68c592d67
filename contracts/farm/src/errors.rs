use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Errors {
    InvalidAmount = 1,
    InvalidLockPeriod = 2,
    InsufficientBalance = 3,
    InsufficientAllowance = 4,
    InsufficientDeposit = 5,
    LockNotExpired = 6,
    Overflow = 7,
    FarmPaused = 8,
    FarmNotPaused = 9,
    DepositMissing = 10,
    FarmMissing = 11,
    RewardNotOwned = 12,
}
