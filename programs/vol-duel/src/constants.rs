use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const ROUND_SEED: &str = "round";
#[constant]
pub const VAULT_SEED: &str = "vault";
#[constant]
pub const PREDICTION_SEED: &str = "prediction";

/// Anchor account discriminator size.
pub const DISCRIMINATOR_SIZE: usize = 8;

/// 100% expressed in basis points.
pub const HUNDRED_PERCENT_BPS: u16 = 10_000;
