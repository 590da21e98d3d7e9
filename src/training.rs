// File: src/training.rs
use crate::config::{TrainingConfig, TrainingPaths};
use crate::core::{
    bigrams::try_fold_bigrams,
    matrix::{CountMatrix, LogProbMatrix},
    scorer::avg_transition_prob,
    types::{Model, Score},
};
use crate::error::{GibberishError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Where the threshold landed between the labeled sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub min_good: Score,
    pub max_bad: Score,
    pub threshold: f64,
}

/// Picks the midpoint between the worst-scoring good line and the
/// best-scoring bad line. Fails unless every good line outscores every bad one.
pub fn select_threshold(good_probs: &[Score], bad_probs: &[Score]) -> Result<Calibration> {
    if good_probs.is_empty() {
        return Err(GibberishError::TrainingValidation("no good examples to calibrate on".into()));
    }
    if bad_probs.is_empty() {
        return Err(GibberishError::TrainingValidation("no bad examples to calibrate on".into()));
    }

    let min_good = good_probs.iter().copied().fold(f64::INFINITY, f64::min);
    let max_bad = bad_probs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(min_good > max_bad) {
        return Err(GibberishError::Separation { min_good, max_bad });
    }

    Ok(Calibration { min_good, max_bad, threshold: (min_good + max_bad) / 2.0 })
}

/// Builds a [`Model`] from a corpus and two labeled example sets.
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Counts every corpus transition on top of the smoothing prior.
    pub fn count_transitions(&self, corpus: &str) -> Result<CountMatrix> {
        let alphabet = &self.config.alphabet;
        let counts = CountMatrix::new(alphabet.len(), self.config.prior);
        let (counts, observed) =
            try_fold_bigrams(alphabet, corpus, (counts, 0u64), |(mut counts, n), (a, b)| {
                counts.observe(a, b)?;
                Ok::<_, GibberishError>((counts, n + 1))
            })?;
        debug!(observed, alphabet = alphabet.len(), "counted corpus transitions");
        Ok(counts)
    }

    pub fn build_matrix(&self, corpus: &str) -> Result<LogProbMatrix> {
        self.count_transitions(corpus)?.normalize()
    }

    /// Trains on in-memory text. Nothing is returned unless the good and bad
    /// lines separate cleanly.
    pub fn train<'a, G, B>(&self, corpus: &str, good: G, bad: B) -> Result<(Model, Calibration)>
    where
        G: IntoIterator<Item = &'a str>,
        B: IntoIterator<Item = &'a str>,
    {
        let matrix = self.build_matrix(corpus)?;
        let alphabet = &self.config.alphabet;
        let score = |line: &str| avg_transition_prob(line, alphabet, &matrix);

        let good_probs: Vec<Score> = good.into_iter().map(score).collect();
        let bad_probs: Vec<Score> = bad.into_iter().map(score).collect();
        debug!(good = good_probs.len(), bad = bad_probs.len(), "scored labeled examples");

        let calibration = select_threshold(&good_probs, &bad_probs)?;
        info!(
            min_good = calibration.min_good,
            max_bad = calibration.max_bad,
            threshold = calibration.threshold,
            "calibrated decision threshold"
        );

        let model = Model::new(alphabet.clone(), matrix, calibration.threshold)?;
        Ok((model, calibration))
    }

    /// Reads the corpus and labeled files named by `paths` and trains on them.
    pub fn train_files(&self, paths: &TrainingPaths) -> Result<(Model, Calibration)> {
        let corpus = read_text(&paths.corpus)?;
        let good = read_text(&paths.good)?;
        let bad = read_text(&paths.bad)?;
        info!(corpus = %paths.corpus.display(), bytes = corpus.len(), "training from corpus");
        self.train(&corpus, example_lines(&good), example_lines(&bad))
    }
}

/// Newline-separated examples, skipping empty lines.
pub fn example_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.is_empty())
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|source| GibberishError::Encoding {
        what: path.display().to_string(),
        source,
    })
}
