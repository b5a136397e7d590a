#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use stackmint_amm::{
    contexts::{
        GlobalConfig, GlobalParams, GovernanceApproval, GovernanceGate, Pool, PoolConfig,
        PoolVaults, StackInfo,
    },
    curve::{MintDecimals, Normalizer, Reserves},
    fees,
    liquidity::{plan_deposit, plan_taxed_deposit, plan_withdrawal, DepositPlan, WithdrawPlan},
    pda,
    swap::{execute_swap, SwapDirection, SwapEnv, SwapPlan, SwapRequest},
};

pub const START: i64 = 1_700_000_000;
pub const LOCK_SECS: i64 = 604_800;

/// Token balances held by the pool's four vaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vaults {
    pub stack: u64,
    pub quote: u64,
    pub protocol_fee: u64,
    pub creator_fee: u64,
}

/// Drives the planning API the way the instruction handlers do, settling
/// against in-memory vault balances instead of token CPIs.
pub struct Harness {
    pub admin: Pubkey,
    pub creator: Pubkey,
    pub global: GlobalConfig,
    pub stack_info: StackInfo,
    pub pool: Pool,
    pub pool_key: Pubkey,
    pub decimals: MintDecimals,
    pub vaults: Vaults,
    pub lp_balances: HashMap<Pubkey, u64>,
    /// Stack supply created through `mint_via_pool`.
    pub stack_minted: u64,
    pub now: i64,
}

impl Harness {
    pub fn new(creator_fee_bps: u16, fee_bps: u16, decimals: MintDecimals) -> Self {
        let admin = Pubkey::new_unique();
        let creator = Pubkey::new_unique();

        let mut global = GlobalConfig::default();
        global
            .initialize(
                admin,
                Pubkey::new_unique(),
                GlobalParams {
                    protocol_fee_bps: 50,
                    pauser: Pubkey::new_unique(),
                    fee_manager: Pubkey::new_unique(),
                    governance: Pubkey::new_unique(),
                    max_fee_bps: 2_000,
                    dust_threshold: 10,
                    creator_claim_lock_secs: LOCK_SECS,
                },
                pda::global_address().1,
            )
            .unwrap();

        let stack_mint = Pubkey::new_unique();
        let quote_mint = Pubkey::new_unique();
        let mut stack_info = StackInfo::default();
        stack_info
            .register(
                &global,
                creator,
                stack_mint,
                pda::stack_mint_authority_address(&stack_mint).0,
                creator_fee_bps,
                pda::stack_info_address(&stack_mint).1,
            )
            .unwrap();

        let (pool_key, pool_bump) = pda::pool_address(&stack_mint, &quote_mint);
        let (vault_authority, vault_authority_bump) = pda::vault_authority_address(&pool_key);
        let mut pool = Pool::default();
        pool.initialize(
            &global,
            &stack_info,
            PoolConfig {
                stack_mint,
                quote_mint,
                lp_mint: pda::lp_mint_address(&pool_key).0,
                fee_bps,
                k_value: 0,
                fee_on_transfer: false,
                decimal_normalize_to: 9,
                vaults: PoolVaults {
                    stack: pda::stack_vault_address(&pool_key).0,
                    quote: pda::quote_vault_address(&pool_key).0,
                    protocol_fee: pda::protocol_fee_vault_address(&pool_key).0,
                    creator_fee: pda::creator_fee_vault_address(&pool_key).0,
                },
                vault_authority,
                oracle: Pubkey::new_unique(),
            },
            pool_bump,
            vault_authority_bump,
        )
        .unwrap();

        Self {
            admin,
            creator,
            global,
            stack_info,
            pool,
            pool_key,
            decimals,
            vaults: Vaults::default(),
            lp_balances: HashMap::new(),
            stack_minted: 0,
            now: START,
        }
    }

    pub fn standard() -> Self {
        Self::new(300, 30, MintDecimals { stack: 9, quote: 9 })
    }

    pub fn reserves(&self) -> Reserves {
        Reserves {
            stack: self.vaults.stack,
            quote: self.vaults.quote,
        }
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.decimals, self.pool.decimal_normalize_to).unwrap()
    }

    /// Product of the normalized reserves.
    pub fn product(&self) -> u128 {
        let n = self.normalizer().reserves(self.reserves()).unwrap();
        n.stack * n.quote
    }

    pub fn lp_balance(&self, who: &Pubkey) -> u64 {
        self.lp_balances.get(who).copied().unwrap_or(0)
    }

    pub fn outstanding_lp(&self) -> u64 {
        self.lp_balances.values().sum()
    }

    /// The LP mint's supply, as the handlers read it.
    fn sync_lp_supply(&mut self) {
        let supply = self.outstanding_lp();
        self.pool.sync_lp_supply(supply);
    }

    pub fn provide(&mut self, who: Pubkey, amount_stack: u64, amount_quote: u64) -> Result<DepositPlan> {
        self.provide_taxed(who, amount_stack, amount_quote, 0)
    }

    /// Deposit where the stack mint withholds `tax_bps` of every transfer.
    pub fn provide_taxed(
        &mut self,
        who: Pubkey,
        amount_stack: u64,
        amount_quote: u64,
        tax_bps: u64,
    ) -> Result<DepositPlan> {
        self.global.ensure_not_paused()?;
        self.sync_lp_supply();
        let normalizer = self.normalizer();
        let reserves = self.reserves();
        let supply = self.pool.total_lp_supply;
        let planned = plan_deposit(&normalizer, reserves, supply, amount_stack, amount_quote)?;
        let received = planned.stack_in - planned.stack_in * tax_bps / 10_000;
        let plan = plan_taxed_deposit(&normalizer, reserves, supply, planned, received)?;
        self.pool.record_deposit(plan.lp_minted)?;
        self.vaults.stack += plan.stack_in;
        self.vaults.quote += plan.quote_in;
        *self.lp_balances.entry(who).or_default() += plan.lp_minted;
        Ok(plan)
    }

    fn withdraw(&mut self, who: Pubkey, lp_amount: u64) -> Result<WithdrawPlan> {
        self.sync_lp_supply();
        let plan = plan_withdrawal(
            self.reserves(),
            self.pool.total_lp_supply,
            self.lp_balance(&who),
            lp_amount,
        )?;
        self.pool.record_withdrawal(plan.lp_burned)?;
        self.vaults.stack -= plan.stack_out;
        self.vaults.quote -= plan.quote_out;
        *self.lp_balances.entry(who).or_default() -= plan.lp_burned;
        Ok(plan)
    }

    pub fn remove(&mut self, who: Pubkey, lp_amount: u64) -> Result<WithdrawPlan> {
        self.global.ensure_not_paused()?;
        self.withdraw(who, lp_amount)
    }

    pub fn emergency_withdraw(&mut self, who: Pubkey, lp_amount: u64) -> Result<WithdrawPlan> {
        self.withdraw(who, lp_amount)
    }

    pub fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: u64,
        min_amount_out: u64,
        approval: Option<&GovernanceApproval>,
    ) -> Result<SwapPlan> {
        self.sync_lp_supply();
        let env = SwapEnv {
            global: &self.global,
            stack_info: &self.stack_info,
            pool_key: self.pool_key,
            decimals: self.decimals,
            reserves: self.reserves(),
            now: self.now,
        };
        let plan = execute_swap(
            &env,
            &mut self.pool,
            SwapRequest {
                direction,
                amount_in,
                min_amount_out,
            },
            GovernanceGate::from(approval),
        )?;

        match direction {
            SwapDirection::StackToQuote => {
                self.vaults.stack += plan.amount_in;
                self.vaults.quote -= plan.amount_out;
            }
            SwapDirection::QuoteToStack => {
                self.vaults.quote += plan.amount_in;
                self.vaults.stack -= plan.amount_out;
            }
        }
        self.vaults.quote -= plan.protocol_fee_quote + plan.creator_fee_quote;
        self.vaults.protocol_fee += plan.protocol_fee_quote;
        self.vaults.creator_fee += plan.creator_fee_quote;
        Ok(plan)
    }

    /// Buys newly minted stack with quote; the stack vault is not touched.
    pub fn mint_via_pool(&mut self, quote_in: u64, min_stack_out: u64) -> Result<SwapPlan> {
        self.sync_lp_supply();
        let env = SwapEnv {
            global: &self.global,
            stack_info: &self.stack_info,
            pool_key: self.pool_key,
            decimals: self.decimals,
            reserves: self.reserves(),
            now: self.now,
        };
        let plan = execute_swap(
            &env,
            &mut self.pool,
            SwapRequest {
                direction: SwapDirection::QuoteToStack,
                amount_in: quote_in,
                min_amount_out: min_stack_out,
            },
            GovernanceGate::None,
        )?;
        self.vaults.quote += plan.amount_in;
        self.vaults.quote -= plan.protocol_fee_quote + plan.creator_fee_quote;
        self.vaults.protocol_fee += plan.protocol_fee_quote;
        self.vaults.creator_fee += plan.creator_fee_quote;
        self.stack_minted += plan.amount_out;
        Ok(plan)
    }

    /// A holder burning shares through the token program, bypassing the pool.
    pub fn burn_outside(&mut self, who: Pubkey, amount: u64) {
        *self.lp_balances.entry(who).or_default() -= amount;
    }

    pub fn claim(&mut self, caller: Pubkey) -> Result<u64> {
        let amount = fees::claim_creator_fees(
            &mut self.pool,
            &self.stack_info,
            &self.global,
            &caller,
            self.now,
        )?;
        self.vaults.creator_fee -= amount;
        Ok(amount)
    }

    pub fn pause(&mut self, paused: bool) {
        let pauser = self.global.pauser;
        self.global.set_paused(&pauser, paused).unwrap();
    }
}
