use serde::{Deserialize, Serialize};

use crate::errors::MixConfigError;
use crate::mix::DEFAULT_ROUNDS;

/// Upper bound accepted for `MixConfig::rounds`.
pub const MAX_ROUNDS: u32 = 1024;

/// Tunables for the mixing stage of the pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MixConfig {
    /// Passes over the mix buffer; 0 leaves it untouched.
    pub rounds: u32,
}

impl MixConfig {
    pub fn new(rounds: u32) -> Result<Self, MixConfigError> {
        let cfg = Self { rounds };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), MixConfigError> {
        if self.rounds > MAX_ROUNDS {
            return Err(MixConfigError::TooManyRounds {
                rounds: self.rounds,
                max: MAX_ROUNDS,
            });
        }
        Ok(())
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_three_rounds() {
        assert_eq!(MixConfig::default().rounds, 3);
        assert!(MixConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_rounds_is_accepted() {
        assert_eq!(MixConfig::new(0).unwrap().rounds, 0);
    }

    #[test]
    fn rounds_above_max_are_rejected() {
        let err = MixConfig::new(MAX_ROUNDS + 1).unwrap_err();
        assert_eq!(
            err,
            MixConfigError::TooManyRounds {
                rounds: MAX_ROUNDS + 1,
                max: MAX_ROUNDS
            }
        );
        assert!(err.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: MixConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, MixConfig::default());
        let cfg: MixConfig = serde_json::from_str(r#"{"rounds":1}"#).unwrap();
        assert_eq!(cfg.rounds, 1);
        assert!(serde_json::from_str::<MixConfig>(r#"{"round":1}"#).is_err());
    }
}
