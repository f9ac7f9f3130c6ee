#![allow(ambiguous_glob_reexports)]

pub mod claim;
pub mod emergency_withdraw;
pub mod initialize;
pub mod settle_round;
pub mod stake;
pub mod start_round;
pub mod update_config;

pub use claim::*;
pub use emergency_withdraw::*;
pub use initialize::*;
pub use settle_round::*;
pub use stake::*;
pub use start_round::*;
pub use update_config::*;
