mod common;

use anchor_lang::prelude::*;
use common::{Harness, LOCK_SECS};
use stackmint_amm::{
    contexts::{GlobalConfigUpdate, GovernanceApproval, PoolStatus},
    errors::AmmError,
    swap::SwapDirection,
};

#[test]
fn full_lifecycle() {
    let mut h = Harness::standard();
    let alice = Pubkey::new_unique();

    assert_eq!(h.pool.status(&h.global), PoolStatus::Created);

    let deposit = h.provide(alice, 100_000, 200_000).unwrap();
    assert_eq!(deposit.lp_minted, 141_421);
    assert_eq!(h.pool.total_lp_supply, 141_421);
    assert_eq!(h.pool.status(&h.global), PoolStatus::Active);

    let product_before = h.product();
    let swap = h
        .swap(SwapDirection::StackToQuote, 1_000, 1, None)
        .unwrap();
    assert_eq!(swap.amount_out, 1_974);
    // 30 bps of 1_000 is 3 stack, all of it creator fee, paid out as quote
    assert_eq!(swap.fees.creator, 3);
    assert_eq!(swap.fees.protocol, 0);
    assert_eq!(h.pool.creator_claimable, 5);
    assert_eq!(h.vaults.creator_fee, 5);
    assert_eq!(h.vaults.stack, 101_000);
    assert_eq!(h.vaults.quote, 198_021);
    assert!(h.product() >= product_before);

    let half = h.pool.total_lp_supply / 2;
    let supply_before = h.pool.total_lp_supply;
    let reserves_before = h.reserves();
    let withdrawal = h.remove(alice, half).unwrap();
    assert_eq!(h.pool.total_lp_supply, supply_before - half);
    assert_eq!(h.pool.total_lp_supply, h.outstanding_lp());
    assert!(withdrawal.stack_out.abs_diff(reserves_before.stack / 2) <= 1);
    assert!(withdrawal.quote_out.abs_diff(reserves_before.quote / 2) <= 1);

    let creator = h.creator;
    assert_eq!(
        h.claim(creator).unwrap_err(),
        AmmError::BelowDustThreshold.into()
    );
    assert_eq!(h.pool.creator_claimable, 5);
}

#[test]
fn claim_lock_and_reset() {
    let mut h = Harness::standard();
    let creator = h.creator;
    h.provide(Pubkey::new_unique(), 100_000, 200_000).unwrap();

    // quote in: the fee is taken in quote directly, 60 here
    h.swap(SwapDirection::QuoteToStack, 20_000, 1, None).unwrap();
    assert_eq!(h.pool.creator_claimable, 60);

    assert_eq!(
        h.claim(Pubkey::new_unique()).unwrap_err(),
        AmmError::Unauthorized.into()
    );
    assert_eq!(h.claim(creator).unwrap(), 60);
    assert_eq!(h.pool.creator_claimable, 0);
    assert_eq!(h.pool.last_claim_timestamp, h.now);
    assert_eq!(h.vaults.creator_fee, 0);

    h.swap(SwapDirection::QuoteToStack, 20_000, 1, None).unwrap();
    h.now += 100;
    assert_eq!(h.claim(creator).unwrap_err(), AmmError::ClaimLocked.into());

    h.now += LOCK_SECS;
    let claimed = h.claim(creator).unwrap();
    assert!(claimed >= 10);
    assert_eq!(h.pool.creator_claimable, 0);
}

#[test]
fn round_trip_without_swaps_is_lossless() {
    let mut h = Harness::standard();
    let alice = Pubkey::new_unique();
    let plan = h.provide(alice, 123_456, 654_321).unwrap();
    let out = h.remove(alice, plan.lp_minted).unwrap();
    assert_eq!((out.stack_out, out.quote_out), (123_456, 654_321));
    assert_eq!(h.pool.total_lp_supply, 0);
    assert_eq!(h.reserves().stack, 0);
}

#[test]
fn skewed_deposit_only_pulls_the_matching_amount() {
    let mut h = Harness::standard();
    h.provide(Pubkey::new_unique(), 100_000, 200_000).unwrap();
    let bob = Pubkey::new_unique();
    let plan = h.provide(bob, 10_000, 90_000).unwrap();
    assert_eq!(plan.stack_in, 10_000);
    assert_eq!(plan.quote_in, 20_000);
    assert_eq!(h.vaults.quote, 220_000);
}

#[test]
fn pause_freezes_trading_but_not_exits() {
    let mut h = Harness::standard();
    let alice = Pubkey::new_unique();
    let plan = h.provide(alice, 100_000, 200_000).unwrap();
    h.swap(SwapDirection::QuoteToStack, 20_000, 1, None).unwrap();

    h.pause(true);
    assert_eq!(h.pool.status(&h.global), PoolStatus::Paused);
    assert_eq!(
        h.swap(SwapDirection::StackToQuote, 1_000, 1, None).unwrap_err(),
        AmmError::Paused.into()
    );
    assert_eq!(
        h.provide(alice, 1_000, 2_000).unwrap_err(),
        AmmError::Paused.into()
    );
    assert_eq!(
        h.remove(alice, 10).unwrap_err(),
        AmmError::Paused.into()
    );

    // claims and emergency exits still work
    let creator = h.creator;
    assert_eq!(h.claim(creator).unwrap(), 60);
    let out = h.emergency_withdraw(alice, plan.lp_minted).unwrap();
    assert_eq!(out.lp_burned, plan.lp_minted);
    assert_eq!(h.pool.total_lp_supply, 0);
    assert_eq!(h.reserves().stack, 0);
    assert_eq!(h.reserves().quote, 0);

    h.pause(false);
    assert_eq!(h.pool.status(&h.global), PoolStatus::Created);
}

#[test]
fn slippage_failure_changes_nothing() {
    let mut h = Harness::standard();
    h.provide(Pubkey::new_unique(), 100_000, 200_000).unwrap();
    let vaults = h.vaults;
    assert_eq!(
        h.swap(SwapDirection::StackToQuote, 1_000, 2_000, None)
            .unwrap_err(),
        AmmError::SlippageExceeded.into()
    );
    assert_eq!(h.vaults, vaults);
    assert_eq!(h.pool.creator_claimable, 0);
}

#[test]
fn governance_gate_on_large_trades() {
    let mut h = Harness::standard();
    h.provide(Pubkey::new_unique(), 1_000_000, 2_000_000).unwrap();
    let admin = h.admin;
    h.global
        .apply_update(
            &admin,
            &GlobalConfigUpdate {
                governance_notional_threshold: Some(50_000),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(
        h.swap(SwapDirection::QuoteToStack, 60_000, 1, None)
            .unwrap_err(),
        AmmError::GovernanceApprovalRequired.into()
    );

    let approval = GovernanceApproval {
        target: h.pool_key,
        oracle: h.pool.oracle,
        approved: true,
        expiry_ts: h.now + 60,
        nonce: 1,
        bump: 255,
    };
    h.swap(SwapDirection::QuoteToStack, 60_000, 1, Some(&approval))
        .unwrap();

    // consumed
    assert_eq!(
        h.swap(SwapDirection::QuoteToStack, 60_000, 1, Some(&approval))
            .unwrap_err(),
        AmmError::GovernanceApprovalRequired.into()
    );

    // under the threshold nothing is needed
    h.swap(SwapDirection::QuoteToStack, 40_000, 1, None).unwrap();
}

#[test]
fn mixed_decimal_pool_keeps_product() {
    let mut h = Harness::new(300, 30, stackmint_amm::curve::MintDecimals { stack: 6, quote: 9 });
    h.provide(Pubkey::new_unique(), 5_000_000, 20_000_000_000).unwrap();
    let before = h.product();
    h.swap(SwapDirection::StackToQuote, 12_345, 1, None).unwrap();
    assert!(h.product() >= before);
    let before = h.product();
    h.swap(SwapDirection::QuoteToStack, 987_654_321, 1, None).unwrap();
    assert!(h.product() >= before);
    assert_eq!(h.pool.creator_claimable, h.vaults.creator_fee);
}

#[test]
fn taxed_stack_deposit_pulls_only_the_backed_quote() {
    let mut h = Harness::standard();
    h.provide(Pubkey::new_unique(), 100_000, 200_000).unwrap();

    let bob = Pubkey::new_unique();
    // the stack mint keeps 1% of every transfer
    let plan = h.provide_taxed(bob, 10_000, 20_000, 100).unwrap();
    assert_eq!(plan.stack_in, 9_900);
    assert_eq!(plan.quote_in, 19_800);
    assert_eq!(plan.lp_minted, 14_000);
    assert_eq!(h.vaults.stack, 109_900);
    assert_eq!(h.vaults.quote, 219_800);
    assert_eq!(h.pool.total_lp_supply, h.outstanding_lp());
}

#[test]
fn lp_burned_outside_the_pool_stops_counting() {
    let mut h = Harness::standard();
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();
    h.provide(alice, 100_000, 200_000).unwrap();
    let bob_lp = h.provide(bob, 10_000, 20_000).unwrap().lp_minted;
    assert_eq!(bob_lp, 14_142);

    h.burn_outside(alice, 141_421);
    let out = h.remove(bob, bob_lp).unwrap();
    assert_eq!((out.stack_out, out.quote_out), (110_000, 220_000));
    assert_eq!(h.pool.total_lp_supply, 0);
    assert_eq!(h.pool.status(&h.global), PoolStatus::Created);
}

#[test]
fn minting_via_pool_grows_the_product() {
    let mut h = Harness::standard();
    h.provide(Pubkey::new_unique(), 100_000, 200_000).unwrap();
    let before = h.product();

    assert_eq!(
        h.mint_via_pool(20_000, 9_067).unwrap_err(),
        AmmError::SlippageExceeded.into()
    );

    // priced like a quote-to-stack swap, but the stack is new supply
    let plan = h.mint_via_pool(20_000, 9_066).unwrap();
    assert_eq!(plan.amount_out, 9_066);
    assert_eq!(plan.creator_fee_quote, 60);
    assert_eq!(h.stack_minted, 9_066);
    assert_eq!(h.vaults.stack, 100_000);
    assert_eq!(h.vaults.quote, 219_940);
    assert_eq!(h.pool.creator_claimable, 60);
    assert!(h.product() > before);

    h.pause(true);
    assert_eq!(
        h.mint_via_pool(20_000, 1).unwrap_err(),
        AmmError::Paused.into()
    );
}
