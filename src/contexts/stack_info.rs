use anchor_lang::{prelude::*, solana_program::program_option::COption};
use crate::{constants::STACK_INFO_VERSION, contexts::GlobalConfig, errors::AmmError};

/// Binds a creator to the stack mint they issued, at `"stack_info" + stack_mint`.
#[account]
#[derive(Default, InitSpace)]
pub struct StackInfo {
    pub version: u8,
    pub bump: u8,
    pub creator: Pubkey,
    pub stack_mint: Pubkey,
    pub mint_authority: Pubkey,
    pub creator_fee_bps: u16,
}

impl StackInfo {
    pub fn register(
        &mut self,
        global: &GlobalConfig,
        creator: Pubkey,
        stack_mint: Pubkey,
        mint_authority: Pubkey,
        creator_fee_bps: u16,
        bump: u8,
    ) -> Result<()> {
        global.check_creator_fee(creator_fee_bps)?;
        require!(!self.is_registered(), AmmError::AlreadyRegistered);

        self.version = STACK_INFO_VERSION;
        self.bump = bump;
        self.creator = creator;
        self.stack_mint = stack_mint;
        self.mint_authority = mint_authority;
        self.creator_fee_bps = creator_fee_bps;
        Ok(())
    }

    /// Only whoever can currently mint the token may register it. The right is
    /// then handed to the program's mint authority PDA.
    pub fn ensure_issuer(mint_authority: &COption<Pubkey>, creator: &Pubkey) -> Result<()> {
        match mint_authority {
            COption::Some(authority) if authority == creator => Ok(()),
            _ => err!(AmmError::InvalidMintAuthority),
        }
    }

    pub fn is_registered(&self) -> bool {
        self.version != 0
    }

    pub fn ensure_creator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.creator, AmmError::Unauthorized);
        Ok(())
    }
}
