// File: src/core/bigrams.rs
use crate::core::alphabet::Alphabet;

/// Adjacent, overlapping pairs `(x[i], x[i + 1])` of an underlying iterator.
///
/// Inputs shorter than two items produce nothing.
pub struct Bigrams<I: Iterator> {
    inner: I,
    prev: Option<I::Item>,
}

impl<I> Iterator for Bigrams<I>
where
    I: Iterator,
    I::Item: Copy,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let prev = match self.prev {
            Some(prev) => prev,
            None => self.inner.next()?,
        };
        let next = self.inner.next()?;
        self.prev = Some(next);
        Some((prev, next))
    }
}

pub fn bigrams<I>(iter: I) -> Bigrams<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Copy,
{
    Bigrams { inner: iter.into_iter(), prev: None }
}

/// Filters `text` through `alphabet`, pairs up adjacent accepted characters by
/// index and folds every pair into `init` with `step`.
///
/// Training counts transitions and scoring sums log-probabilities through this
/// same pipeline; only the accumulator differs.
pub fn fold_bigrams<A, F>(alphabet: &Alphabet, text: &str, init: A, step: F) -> A
where
    F: FnMut(A, (usize, usize)) -> A,
{
    bigrams(alphabet.indices(text)).fold(init, step)
}

/// Like [`fold_bigrams`], but stops at the first step that fails.
pub fn try_fold_bigrams<A, E, F>(alphabet: &Alphabet, text: &str, init: A, step: F) -> Result<A, E>
where
    F: FnMut(A, (usize, usize)) -> Result<A, E>,
{
    bigrams(alphabet.indices(text)).try_fold(init, step)
}
