use anchor_lang::prelude::*;

#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub settlement_authority: Pubkey,
    pub fee_receiver: Pubkey,
}
