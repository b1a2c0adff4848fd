pub mod config;
pub mod error;

pub use config::CombatConfig;
pub use error::{CombatError, Result};
