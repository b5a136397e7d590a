use anchor_lang::prelude::*;
use anchor_spl::token::{
    self, spl_token::instruction::AuthorityType, Burn, Mint, MintTo, SetAuthority, Token,
    TokenAccount, Transfer,
};
use crate::constants::{STACK_MINT_AUTH_SEED, VAULT_AUTHORITY_SEED};

/// Signer seeds of a pool's `vault_authority` PDA.
pub struct VaultSigner {
    pool: Pubkey,
    bump: [u8; 1],
}

impl VaultSigner {
    pub fn new(pool: Pubkey, bump: u8) -> Self {
        Self { pool, bump: [bump] }
    }

    pub fn seeds(&self) -> [&[u8]; 3] {
        [VAULT_AUTHORITY_SEED, self.pool.as_ref(), &self.bump]
    }
}

/// Signer seeds of a stack mint's `stack_mint_auth` PDA.
pub struct StackMintSigner {
    stack_mint: Pubkey,
    bump: [u8; 1],
}

impl StackMintSigner {
    pub fn new(stack_mint: Pubkey, bump: u8) -> Self {
        Self {
            stack_mint,
            bump: [bump],
        }
    }

    pub fn seeds(&self) -> [&[u8]; 3] {
        [STACK_MINT_AUTH_SEED, self.stack_mint.as_ref(), &self.bump]
    }
}

/// Moves user funds into a pool vault, signed by the user.
pub fn deposit_to_vault<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: vault.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        amount,
    )
}

/// Debits a pool vault. Only the vault authority PDA can sign this.
pub fn release_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    vault_authority: &UncheckedAccount<'info>,
    signer: &VaultSigner,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let seeds = signer.seeds();
    let signer_seeds = &[&seeds[..]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: to.to_account_info(),
                authority: vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}

pub fn mint_lp<'info>(
    token_program: &Program<'info, Token>,
    lp_mint: &Account<'info, Mint>,
    to: &Account<'info, TokenAccount>,
    vault_authority: &UncheckedAccount<'info>,
    signer: &VaultSigner,
    amount: u64,
) -> Result<()> {
    let seeds = signer.seeds();
    let signer_seeds = &[&seeds[..]];
    token::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: lp_mint.to_account_info(),
                to: to.to_account_info(),
                authority: vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}

pub fn burn_lp<'info>(
    token_program: &Program<'info, Token>,
    lp_mint: &Account<'info, Mint>,
    from: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    token::burn(
        CpiContext::new(
            token_program.to_account_info(),
            Burn {
                mint: lp_mint.to_account_info(),
                from: from.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        amount,
    )
}

/// Mints new stack supply. Only the stack mint authority PDA can sign this.
pub fn mint_stack<'info>(
    token_program: &Program<'info, Token>,
    stack_mint: &Account<'info, Mint>,
    to: &Account<'info, TokenAccount>,
    mint_authority: &UncheckedAccount<'info>,
    signer: &StackMintSigner,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let seeds = signer.seeds();
    let signer_seeds = &[&seeds[..]];
    token::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: stack_mint.to_account_info(),
                to: to.to_account_info(),
                authority: mint_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}

/// Moves a mint's minting right from its issuer to `new_authority`.
pub fn hand_over_mint_authority<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    issuer: &Signer<'info>,
    new_authority: Pubkey,
) -> Result<()> {
    token::set_authority(
        CpiContext::new(
            token_program.to_account_info(),
            SetAuthority {
                current_authority: issuer.to_account_info(),
                account_or_mint: mint.to_account_info(),
            },
        ),
        AuthorityType::MintTokens,
        Some(new_authority),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pda::{stack_mint_authority_address, vault_authority_address};

    #[test]
    fn signer_seeds_rederive_vault_authority() {
        let pool = Pubkey::new_unique();
        let (authority, bump) = vault_authority_address(&pool);
        let signer = VaultSigner::new(pool, bump);
        let derived = Pubkey::create_program_address(&signer.seeds(), &crate::ID).unwrap();
        assert_eq!(derived, authority);
    }

    #[test]
    fn signer_seeds_rederive_stack_mint_authority() {
        let stack_mint = Pubkey::new_unique();
        let (authority, bump) = stack_mint_authority_address(&stack_mint);
        let signer = StackMintSigner::new(stack_mint, bump);
        let derived = Pubkey::create_program_address(&signer.seeds(), &crate::ID).unwrap();
        assert_eq!(derived, authority);
    }
}
