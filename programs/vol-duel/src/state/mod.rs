pub mod config;
pub mod prediction;
pub mod round;

pub use config::*;
pub use prediction::*;
pub use round::*;
