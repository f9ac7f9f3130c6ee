pub mod config_updated;
pub mod emergency_withdrawn;
pub mod fee_collected;
pub mod protocol_initialized;
pub mod round_settled;
pub mod round_started;
pub mod stake_placed;
pub mod winnings_claimed;

pub use config_updated::*;
pub use emergency_withdrawn::*;
pub use fee_collected::*;
pub use protocol_initialized::*;
pub use round_settled::*;
pub use round_started::*;
pub use stake_placed::*;
pub use winnings_claimed::*;
