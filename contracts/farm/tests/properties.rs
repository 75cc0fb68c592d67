use fake_usdc::{FakeUsdc, FakeUsdcClient};
use farm::{Errors, Farm, FarmClient, DECIMALS, LOCK_TIERS, MONTH};
use farm_coin::{FarmCoin, FarmCoinClient};
use proptest::prelude::*;
use soroban_sdk::{
    testutils::{Address as _, EnvTestConfig, Ledger},
    Address, Env, String,
};

const UNIT: i128 = 10i128.pow(DECIMALS);
const FUNDING: i128 = 12_000 * UNIT;

#[derive(Clone, Debug)]
enum Op {
    Deposit {
        farmer: usize,
        amount: i128,
        tier: usize,
    },
    Withdraw {
        farmer: usize,
        amount: i128,
    },
    Harvest {
        farmer: usize,
    },
    Forward {
        seconds: u64,
    },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..2usize, 1..=500i128, 0..LOCK_TIERS.len()).prop_map(|(farmer, amount, tier)| {
            Op::Deposit {
                farmer,
                amount: amount * UNIT,
                tier,
            }
        }),
        (0..2usize, 1..=1000i128).prop_map(|(farmer, amount)| Op::Withdraw {
            farmer,
            amount: amount * UNIT,
        }),
        (0..2usize).prop_map(|farmer| Op::Harvest { farmer }),
        (0..=8 * MONTH).prop_map(|seconds| Op::Forward { seconds }),
    ]
}

struct World<'a> {
    env: Env,
    usdc: FakeUsdcClient<'a>,
    coin: FarmCoinClient<'a>,
    farm: FarmClient<'a>,
    farmers: [Address; 2],
}

impl World<'_> {
    fn new() -> Self {
        let mut env = Env::default();

        env.set_config(EnvTestConfig {
            capture_snapshot_at_drop: false,
        });
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let usdc_address = env.register(
            FakeUsdc,
            (
                &admin,
                String::from_str(&env, "US Dollar Coin"),
                String::from_str(&env, "USDC"),
                DECIMALS,
                0i128,
            ),
        );
        let coin_address = env.register(
            FarmCoin,
            (
                &admin,
                String::from_str(&env, "FarmCoin"),
                String::from_str(&env, "FRMC"),
                DECIMALS,
            ),
        );
        let farm_address = env.register(Farm, (&admin, &usdc_address, &coin_address));

        let usdc = FakeUsdcClient::new(&env, &usdc_address);
        let coin = FarmCoinClient::new(&env, &coin_address);
        let farm = FarmClient::new(&env, &farm_address);

        coin.transfer_ownership(&farm_address);

        let farmers = [Address::generate(&env), Address::generate(&env)];

        for farmer in farmers.iter() {
            usdc.mint(&admin, farmer, &FUNDING);
            usdc.increase_allowance(farmer, &farm_address, &FUNDING);
        }

        World {
            env,
            usdc,
            coin,
            farm,
            farmers,
        }
    }

    fn apply(&self, op: &Op) {
        match *op {
            Op::Deposit {
                farmer,
                amount,
                tier,
            } => {
                let (lock_months, _) = LOCK_TIERS[tier];

                self.farm
                    .deposit(&self.farmers[farmer], &amount, &lock_months);
            }
            Op::Withdraw { farmer, amount } => self.withdraw(farmer, amount),
            Op::Harvest { farmer } => {
                let farmer = &self.farmers[farmer];
                let before = self.coin.balance(farmer);

                let reward = self.farm.harvest(farmer);

                assert!(reward >= 0);
                assert_eq!(self.coin.balance(farmer), before + reward);

                // nothing accrues between two harvests in the same ledger
                assert_eq!(self.farm.harvest(farmer), 0);
                assert_eq!(self.coin.balance(farmer), before + reward);
            }
            Op::Forward { seconds } => {
                self.env
                    .ledger()
                    .set_timestamp(self.env.ledger().timestamp() + seconds);
            }
        }
    }

    fn withdraw(&self, index: usize, amount: i128) {
        let farmer = &self.farmers[index];
        let other = &self.farmers[1 - index];

        let principal = self.farm.principal(farmer);
        let withdrawable = self.farm.withdrawable(farmer);
        let balance = self.usdc.balance(farmer);
        let other_balance = self.usdc.balance(other);
        let other_principal = self.farm.principal(other);

        match self.farm.try_withdraw(farmer, &amount) {
            Ok(Ok(withdrawn)) => {
                assert!(amount <= withdrawable);
                assert_eq!(withdrawn, amount);
                assert_eq!(self.usdc.balance(farmer), balance + amount);
                assert_eq!(self.farm.principal(farmer), principal - amount);
            }
            Err(Ok(err)) if amount > principal => {
                assert_eq!(err, Errors::InsufficientDeposit.into());
            }
            Err(Ok(err)) => {
                assert!(amount > withdrawable);
                assert_eq!(err, Errors::LockNotExpired.into());
                assert_eq!(self.farm.principal(farmer), principal);
            }
            result => panic!("unexpected withdraw result {:?}", result),
        }

        assert_eq!(self.usdc.balance(other), other_balance);
        assert_eq!(self.farm.principal(other), other_principal);
    }

    fn check(&self) {
        let mut total = 0;

        for farmer in self.farmers.iter() {
            let account = self.farm.farmer(farmer);
            let principal = self.farm.principal(farmer);

            assert!(principal <= account.deposited);
            assert_eq!(principal, account.deposited - account.withdrawn);
            assert!(self.farm.withdrawable(farmer) <= principal);

            total += principal;
        }

        assert_eq!(self.usdc.balance(&self.farm.address), total);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn principal_never_exceeds_deposits(ops in prop::collection::vec(op(), 1..24)) {
        let world = World::new();

        for op in ops.iter() {
            world.apply(op);
            world.check();
        }
    }

    #[test]
    fn rewards_grow_with_time(
        amount in 1..=10_000i128,
        tier in 0..LOCK_TIERS.len(),
        first in 1..=12 * MONTH,
        second in 1..=12 * MONTH,
    ) {
        let world = World::new();
        let farmer = &world.farmers[0];
        let (lock_months, _) = LOCK_TIERS[tier];

        world.farm.deposit(farmer, &(amount * UNIT), &lock_months);

        world.apply(&Op::Forward { seconds: first });
        let early = world.farm.pending_reward(farmer);

        world.apply(&Op::Forward { seconds: second });
        let late = world.farm.pending_reward(farmer);

        prop_assert!(early >= 0);
        prop_assert!(late >= early);
        prop_assert_eq!(world.farm.harvest(farmer), late);
    }
}
