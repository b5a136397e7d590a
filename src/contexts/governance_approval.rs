use anchor_lang::prelude::*;
use crate::{contexts::Pool, errors::AmmError};

/// Binary approval written by the governance key, at
/// `"governance_approval" + target + nonce`.
#[account]
#[derive(Default, InitSpace)]
pub struct GovernanceApproval {
    pub target: Pubkey,
    pub oracle: Pubkey,
    pub approved: bool,
    pub expiry_ts: i64,
    pub nonce: u64,
    pub bump: u8,
}

impl GovernanceApproval {
    pub fn is_valid_for(&self, target: &Pubkey, pool: &Pool, now: i64) -> bool {
        self.approved
            && now <= self.expiry_ts
            && self.target == *target
            && self.oracle == pool.oracle
            && self.nonce > pool.last_governance_nonce
    }
}

/// Governance proof attached to a gated instruction.
#[derive(Clone, Copy)]
pub enum GovernanceGate<'a> {
    None,
    Approved(&'a GovernanceApproval),
}

impl<'a> From<Option<&'a GovernanceApproval>> for GovernanceGate<'a> {
    fn from(approval: Option<&'a GovernanceApproval>) -> Self {
        match approval {
            Some(approval) => GovernanceGate::Approved(approval),
            None => GovernanceGate::None,
        }
    }
}

impl<'a> GovernanceGate<'a> {
    /// When `required`, checks the proof and consumes its nonce on `pool`.
    pub fn enforce(&self, required: bool, target: &Pubkey, pool: &mut Pool, now: i64) -> Result<()> {
        if !required {
            return Ok(());
        }
        match self {
            GovernanceGate::None => {
                msg!("Governance approval required but none supplied");
                err!(AmmError::GovernanceApprovalRequired)
            }
            GovernanceGate::Approved(approval) => {
                require!(
                    approval.is_valid_for(target, pool, now),
                    AmmError::GovernanceApprovalRequired
                );
                pool.consume_governance_nonce(approval.nonce)
            }
        }
    }
}
