use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env, Vec};

use crate::{
    errors::Errors,
    types::{Deposit, Farmer},
    BPS, LOCK_TIERS, MONTH, YEAR,
};

/// Annual reward rate in basis points, `None` for unsupported lock periods.
pub fn lock_rate(lock_months: u32) -> Option<i128> {
    LOCK_TIERS
        .iter()
        .find(|(months, _)| *months == lock_months)
        .map(|(_, rate)| *rate)
}

pub fn maturity(deposit: &Deposit) -> u64 {
    deposit
        .start_time
        .saturating_add(deposit.lock_months as u64 * MONTH)
}

pub fn is_matured(deposit: &Deposit, now: u64) -> bool {
    now >= maturity(deposit)
}

pub fn total_principal(deposits: &Vec<Deposit>) -> i128 {
    deposits.iter().map(|deposit| deposit.principal).sum()
}

pub fn matured_principal(deposits: &Vec<Deposit>, now: u64) -> i128 {
    deposits
        .iter()
        .filter(|deposit| is_matured(deposit, now))
        .map(|deposit| deposit.principal)
        .sum()
}

/// Index of the matured deposit to draw from next: earliest maturity, then
/// earliest start, then lowest id.
pub fn next_matured(deposits: &Vec<Deposit>, now: u64) -> Option<u32> {
    let mut next: Option<(u32, (u64, u64, u32))> = None;

    for (index, deposit) in deposits.iter().enumerate() {
        if deposit.principal == 0 || !is_matured(&deposit, now) {
            continue;
        }

        let order = (maturity(&deposit), deposit.start_time, deposit.id);

        match next {
            Some((_, best)) if best <= order => {}
            _ => next = Some((index as u32, order)),
        }
    }

    next.map(|(index, _)| index)
}

/// Reward earned by `deposit` over `[from, to)`, floored to the smallest unit.
pub fn accrued(env: &Env, deposit: &Deposit, from: u64, to: u64) -> i128 {
    let elapsed = to.saturating_sub(from.max(deposit.start_time));
    let rate = lock_rate(deposit.lock_months).unwrap_or(0);

    if elapsed == 0 || rate == 0 || deposit.principal <= 0 {
        return 0;
    }

    deposit.principal.fixed_mul_floor(
        env,
        &(elapsed as i128 * rate),
        &(YEAR as i128 * BPS),
    )
}

/// Moves everything the farmer's deposits earned since the last checkpoint
/// into `unclaimed` and sets the checkpoint to `now`.
pub fn checkpoint(env: &Env, account: &mut Farmer, deposits: &Vec<Deposit>, now: u64) {
    for deposit in deposits.iter() {
        account.unclaimed = account
            .unclaimed
            .checked_add(accrued(env, &deposit, account.accrued_at, now))
            .unwrap_or_else(|| panic_with_error!(env, &Errors::Overflow));
    }

    account.accrued_at = account.accrued_at.max(now);
}
