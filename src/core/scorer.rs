// File: src/core/scorer.rs
use crate::core::{alphabet::Alphabet, bigrams::fold_bigrams, matrix::LogProbMatrix};

/// Starting value of the log-probability sum.
///
/// This is `1.0` rather than `0.0`, so a line with no bigrams scores `e`.
/// Existing models and thresholds were calibrated with this value.
pub const LOG_SUM_SEED: f64 = 1.0;

/// Exponentiated average transition log-probability of `line`.
///
/// Lines with fewer than two accepted characters divide by one instead of zero.
pub fn avg_transition_prob(line: &str, alphabet: &Alphabet, matrix: &LogProbMatrix) -> f64 {
    let (log_sum, transitions) =
        fold_bigrams(alphabet, line, (LOG_SUM_SEED, 0usize), |(sum, n), (a, b)| {
            (sum + matrix.get(a, b), n + 1)
        });
    (log_sum / transitions.max(1) as f64).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::CountMatrix;

    fn ab_matrix() -> (Alphabet, LogProbMatrix) {
        let alphabet = Alphabet::new("ab").unwrap();
        let mut counts = CountMatrix::new(2, 10);
        for _ in 0..5 {
            counts.observe(0, 1).unwrap();
        }
        (alphabet, counts.normalize().unwrap())
    }

    #[test]
    fn no_bigrams_scores_e() {
        let (alphabet, matrix) = ab_matrix();
        assert_eq!(avg_transition_prob("", &alphabet, &matrix), 1.0f64.exp());
        assert_eq!(avg_transition_prob("a", &alphabet, &matrix), 1.0f64.exp());
        assert_eq!(avg_transition_prob("x?y", &alphabet, &matrix), 1.0f64.exp());
    }

    #[test]
    fn averages_over_transitions_including_seed() {
        let (alphabet, matrix) = ab_matrix();
        let expected = ((1.0 + matrix.get(0, 1) + matrix.get(1, 0)) / 2.0).exp();
        assert_eq!(avg_transition_prob("aba", &alphabet, &matrix), expected);
    }

    #[test]
    fn likely_transitions_score_higher() {
        let (alphabet, matrix) = ab_matrix();
        let ab = avg_transition_prob("ab ab ab", &alphabet, &matrix);
        let aa = avg_transition_prob("aaaaaa", &alphabet, &matrix);
        assert!(ab > aa);
    }
}
