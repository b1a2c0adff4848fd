use thiserror::Error;

#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Invalid weapon {name:?}: base damage must be positive, got {base_damage}")]
    InvalidWeapon { name: String, base_damage: u32 },

    #[error("Critical chance must be within [0.0, 1.0], got {0}")]
    InvalidChance(f64),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CombatError>;
