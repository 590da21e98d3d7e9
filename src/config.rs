// File: src/config.rs
use crate::core::alphabet::Alphabet;
use crate::error::{GibberishError, Result};
use std::path::PathBuf;

/// Pretend every transition has been seen this many times before counting.
pub const DEFAULT_PRIOR: u64 = 10;

/// Largest accepted prior. Keeps row totals far below `u64::MAX` so corpus
/// counts have room on top of the smoothing.
pub const MAX_PRIOR: u64 = u32::MAX as u64;

pub const DEFAULT_CORPUS_PATH: &str = "big.txt";
pub const DEFAULT_GOOD_PATH: &str = "good.txt";
pub const DEFAULT_BAD_PATH: &str = "bad.txt";
pub const DEFAULT_MODEL_PATH: &str = "gib_model.bin";

/// Knobs for building the transition model.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    pub alphabet: Alphabet,
    pub prior: u64,
}

impl TrainingConfig {
    pub fn new(alphabet: Alphabet, prior: u64) -> Result<Self> {
        if prior == 0 {
            return Err(GibberishError::Configuration(
                "smoothing prior must be at least 1".into(),
            ));
        }
        let k = alphabet.len() as u64;
        let smoothing_total = k.checked_mul(k).and_then(|cells| cells.checked_mul(prior));
        if prior > MAX_PRIOR || smoothing_total.is_none() {
            return Err(GibberishError::Configuration(format!(
                "smoothing prior {prior} is too large, the limit is {MAX_PRIOR}"
            )));
        }
        Ok(Self { alphabet, prior })
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { alphabet: Alphabet::default(), prior: DEFAULT_PRIOR }
    }
}

/// Where a training run reads its inputs and writes the model.
#[derive(Debug, Clone)]
pub struct TrainingPaths {
    pub corpus: PathBuf,
    pub good: PathBuf,
    pub bad: PathBuf,
    pub output: PathBuf,
}

impl Default for TrainingPaths {
    fn default() -> Self {
        Self {
            corpus: DEFAULT_CORPUS_PATH.into(),
            good: DEFAULT_GOOD_PATH.into(),
            bad: DEFAULT_BAD_PATH.into(),
            output: DEFAULT_MODEL_PATH.into(),
        }
    }
}

/// Resolves an alphabet name (`hungarian`, `english`) or a literal character set.
pub fn parse_alphabet(spec: &str) -> Result<Alphabet> {
    match spec {
        "hungarian" | "hu" => Ok(Alphabet::hungarian()),
        "english" | "en" => Ok(Alphabet::english()),
        chars => Alphabet::new(chars),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_setup() {
        let config = TrainingConfig::default();
        assert_eq!(config.prior, 10);
        assert_eq!(config.alphabet, Alphabet::hungarian());
        assert_eq!(TrainingPaths::default().output, PathBuf::from("gib_model.bin"));
    }

    #[test]
    fn out_of_range_priors_are_rejected() {
        let config = |prior| TrainingConfig::new(Alphabet::english(), prior);
        assert!(matches!(config(0), Err(GibberishError::Configuration(_))));
        assert!(matches!(config(u64::MAX), Err(GibberishError::Configuration(_))));
        assert!(matches!(config(MAX_PRIOR + 1), Err(GibberishError::Configuration(_))));
        assert!(config(1).is_ok());
        assert!(config(MAX_PRIOR).is_ok());
    }

    #[test]
    fn alphabet_names_and_literals() {
        assert_eq!(parse_alphabet("english").unwrap(), Alphabet::english());
        assert_eq!(parse_alphabet("hu").unwrap(), Alphabet::hungarian());
        assert_eq!(parse_alphabet("abc ").unwrap().len(), 4);
        assert!(parse_alphabet("aa").is_err());
    }
}
