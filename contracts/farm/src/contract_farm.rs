use soroban_sdk::{contractimpl, log, panic_with_error, symbol_short, Address, Env, Vec};

use crate::{
    errors::Errors,
    reward::{
        checkpoint, is_matured, lock_rate, matured_principal, next_matured, total_principal,
    },
    storage::{
        extend_instance_ttl, get_deposits, get_farm_paused, get_farmer, get_fiat_asset,
        get_reward_asset, set_deposits, set_farmer,
    },
    types::{Deposit, DepositStatus, Farmer},
    Farm, FarmArgs, FarmClient, FarmTrait, FiatClient, RewardClient, LOCK_TIERS,
};

#[contractimpl]
impl FarmTrait for Farm {
    fn deposit(env: Env, farmer: Address, amount: i128, lock_months: u32) -> u32 {
        farmer.require_auth();

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        if amount <= 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        if lock_rate(lock_months).is_none() {
            panic_with_error!(&env, &Errors::InvalidLockPeriod);
        }

        let farm_address = env.current_contract_address();
        let fiat = FiatClient::new(&env, &get_fiat_asset(&env));

        if fiat.balance(&farmer) < amount {
            panic_with_error!(&env, &Errors::InsufficientBalance);
        }

        if fiat.allowance(&farmer, &farm_address) < amount {
            panic_with_error!(&env, &Errors::InsufficientAllowance);
        }

        let now = env.ledger().timestamp();
        let mut deposits = get_deposits(&env, &farmer);
        let mut account = get_farmer(&env, &farmer);

        // settle what the existing deposits earned before the new one joins
        checkpoint(&env, &mut account, &deposits, now);

        let id = account.next_id;

        account.next_id = id
            .checked_add(1)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::Overflow));
        account.deposited = account
            .deposited
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::Overflow));

        deposits.push_back(Deposit {
            id,
            principal: amount,
            lock_months,
            start_time: now,
        });

        set_deposits(&env, &farmer, &deposits);
        set_farmer(&env, &farmer, &account);

        fiat.transfer_from(&farm_address, &farmer, &farm_address, &amount);

        log!(&env, "deposit", farmer, id, amount, lock_months);
        env.events()
            .publish((symbol_short!("deposit"), farmer), (id, amount, lock_months));

        extend_instance_ttl(&env);

        id
    }

    fn withdraw(env: Env, farmer: Address, amount: i128) -> i128 {
        farmer.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, &Errors::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let mut deposits = get_deposits(&env, &farmer);

        if amount > total_principal(&deposits) {
            panic_with_error!(&env, &Errors::InsufficientDeposit);
        }

        if amount > matured_principal(&deposits, now) {
            panic_with_error!(&env, &Errors::LockNotExpired);
        }

        let mut account = get_farmer(&env, &farmer);

        // withdrawn principal keeps what it earned up to now
        checkpoint(&env, &mut account, &deposits, now);

        let mut remaining = amount;

        while remaining > 0 {
            let index = next_matured(&deposits, now)
                .unwrap_or_else(|| panic_with_error!(&env, &Errors::LockNotExpired));
            let mut deposit = deposits.get_unchecked(index);
            let taken = remaining.min(deposit.principal);

            deposit.principal -= taken;
            remaining -= taken;

            if deposit.principal == 0 {
                log!(&env, "closed", farmer, deposit.id);
                deposits.remove(index);
            } else {
                deposits.set(index, deposit);
            }
        }

        account.withdrawn = account
            .withdrawn
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::Overflow));

        set_deposits(&env, &farmer, &deposits);
        set_farmer(&env, &farmer, &account);

        FiatClient::new(&env, &get_fiat_asset(&env)).transfer(
            &env.current_contract_address(),
            &farmer,
            &amount,
        );

        log!(&env, "withdraw", farmer, amount);
        env.events()
            .publish((symbol_short!("withdraw"), farmer), amount);

        extend_instance_ttl(&env);

        amount
    }

    fn harvest(env: Env, farmer: Address) -> i128 {
        farmer.require_auth();

        let farm_address = env.current_contract_address();
        let reward_client = RewardClient::new(&env, &get_reward_asset(&env));

        if reward_client.owner() != farm_address {
            panic_with_error!(&env, &Errors::RewardNotOwned);
        }

        let now = env.ledger().timestamp();
        let deposits = get_deposits(&env, &farmer);
        let mut account = get_farmer(&env, &farmer);

        checkpoint(&env, &mut account, &deposits, now);

        let reward = account.unclaimed;

        account.unclaimed = 0;

        set_farmer(&env, &farmer, &account);

        if reward > 0 {
            reward_client.mint_to_address(&farm_address, &farmer, &reward);
        }

        log!(&env, "harvest", farmer, reward);
        env.events()
            .publish((symbol_short!("harvest"), farmer), reward);

        extend_instance_ttl(&env);

        reward
    }

    fn deposits(env: Env, farmer: Address) -> Vec<Deposit> {
        get_deposits(&env, &farmer)
    }

    fn status(env: Env, farmer: Address, id: u32) -> DepositStatus {
        if id >= get_farmer(&env, &farmer).next_id {
            panic_with_error!(&env, &Errors::DepositMissing);
        }

        let now = env.ledger().timestamp();

        match get_deposits(&env, &farmer)
            .iter()
            .find(|deposit| deposit.id == id)
        {
            Some(deposit) if is_matured(&deposit, now) => DepositStatus::Withdrawable,
            Some(_) => DepositStatus::Active,
            None => DepositStatus::Closed,
        }
    }

    fn principal(env: Env, farmer: Address) -> i128 {
        total_principal(&get_deposits(&env, &farmer))
    }

    fn withdrawable(env: Env, farmer: Address) -> i128 {
        matured_principal(&get_deposits(&env, &farmer), env.ledger().timestamp())
    }

    fn pending_reward(env: Env, farmer: Address) -> i128 {
        let deposits = get_deposits(&env, &farmer);
        let mut account = get_farmer(&env, &farmer);

        checkpoint(&env, &mut account, &deposits, env.ledger().timestamp());

        account.unclaimed
    }

    fn farmer(env: Env, farmer: Address) -> Farmer {
        get_farmer(&env, &farmer)
    }

    fn lock_tiers(env: Env) -> Vec<u32> {
        let mut tiers = Vec::new(&env);

        for (months, _) in LOCK_TIERS {
            tiers.push_back(months);
        }

        tiers
    }
}
