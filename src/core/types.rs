// src/core/types.rs
use crate::core::{alphabet::Alphabet, matrix::LogProbMatrix, scorer::avg_transition_prob};
use crate::error::{GibberishError, Result};
use serde::{Deserialize, Serialize};

/// Score of a single line: the exponentiated average transition log-probability.
pub type Score = f64;

/// A trained detector: the alphabet it was trained over, the transition
/// log-probabilities and the decision threshold.
///
/// Immutable once built, so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelParts")]
pub struct Model {
    alphabet: Alphabet,
    matrix: LogProbMatrix,
    threshold: f64,
}

impl Model {
    pub fn new(alphabet: Alphabet, matrix: LogProbMatrix, threshold: f64) -> Result<Self> {
        if matrix.size() != alphabet.len() {
            return Err(GibberishError::Configuration(format!(
                "transition matrix is {0}x{0} but the alphabet has {1} characters",
                matrix.size(),
                alphabet.len()
            )));
        }
        if !threshold.is_finite() {
            return Err(GibberishError::Configuration(format!(
                "threshold {threshold} is not a finite number"
            )));
        }
        Ok(Self { alphabet, matrix, threshold })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn matrix(&self) -> &LogProbMatrix {
        &self.matrix
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn score(&self, line: &str) -> Score {
        avg_transition_prob(line, &self.alphabet, &self.matrix)
    }

    /// `true` when `line` looks like plausible text.
    pub fn classify(&self, line: &str) -> bool {
        self.score(line) > self.threshold
    }
}

// Deserialized form, checked by `Model::new` before use.
#[derive(Deserialize)]
struct ModelParts {
    alphabet: Alphabet,
    matrix: LogProbMatrix,
    threshold: f64,
}

impl TryFrom<ModelParts> for Model {
    type Error = GibberishError;

    fn try_from(parts: ModelParts) -> Result<Self> {
        Model::new(parts.alphabet, parts.matrix, parts.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::CountMatrix;

    fn uniform(k: usize) -> LogProbMatrix {
        CountMatrix::new(k, 1).normalize().unwrap()
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let alphabet = Alphabet::new("abc").unwrap();
        assert!(Model::new(alphabet.clone(), uniform(2), 0.5).is_err());
        assert!(Model::new(alphabet.clone(), uniform(3), f64::NAN).is_err());
        assert!(Model::new(alphabet, uniform(3), 0.5).is_ok());
    }

    #[test]
    fn classify_compares_score_against_threshold() {
        let alphabet = Alphabet::new("ab").unwrap();
        // Uniform over two characters: every transition is ln(0.5).
        let model = Model::new(alphabet, uniform(2), 0.5).unwrap();
        let score = model.score("abab");
        assert_eq!(score, ((1.0 + 3.0 * 0.5f64.ln()) / 3.0).exp());
        assert_eq!(model.classify("abab"), score > 0.5);
        // No transitions at all scores e, which clears any sane threshold.
        assert!(model.classify(""));
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Model>();
    }
}
