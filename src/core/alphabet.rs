// File: src/core/alphabet.rs
use crate::error::{GibberishError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hungarian letters plus space. This is the alphabet the reference corpus was built for.
pub const HUNGARIAN_CHARS: &str = "abcdefghijklmnopqrstuvwxyzéáűőúöüóí ";
pub const ENGLISH_CHARS: &str = "abcdefghijklmnopqrstuvwxyz ";

/// The ordered set of accepted characters and their stable indices.
///
/// Serialized as its character string; the index map is rebuilt on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    chars: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new(chars: &str) -> Result<Self> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(GibberishError::Configuration("alphabet is empty".into()));
        }

        let mut positions = HashMap::with_capacity(chars.len());
        for (idx, &c) in chars.iter().enumerate() {
            if fold(c) != Some(c) {
                return Err(GibberishError::Configuration(format!(
                    "alphabet character {c:?} is not lowercase and could never match"
                )));
            }
            if positions.insert(c, idx).is_some() {
                return Err(GibberishError::Configuration(format!(
                    "alphabet character {c:?} appears more than once"
                )));
            }
        }
        Ok(Self { chars, positions })
    }

    pub fn hungarian() -> Self {
        Self::from_known(HUNGARIAN_CHARS)
    }

    pub fn english() -> Self {
        Self::from_known(ENGLISH_CHARS)
    }

    // Built-in alphabets are lowercase and duplicate free.
    fn from_known(chars: &str) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        let positions = chars.iter().enumerate().map(|(idx, &c)| (c, idx)).collect();
        Self { chars, positions }
    }

    /// Number of accepted characters, the `k` of the k×k matrix.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Lazily case-folds `text` and yields the index of every accepted character.
    pub fn indices<'a>(&'a self, text: &'a str) -> impl Iterator<Item = usize> + 'a {
        text.chars()
            .filter_map(fold)
            .filter_map(move |c| self.index_of(c))
    }

    /// Lazily case-folds `text`, dropping every character outside the alphabet.
    pub fn filter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = char> + 'a {
        self.indices(text).map(move |idx| self.chars[idx])
    }

    pub fn filter_str(&self, text: &str) -> String {
        self.filter(text).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::hungarian()
    }
}

impl TryFrom<String> for Alphabet {
    type Error = GibberishError;

    fn try_from(chars: String) -> Result<Self> {
        Self::new(&chars)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.as_string()
    }
}

/// Full Unicode lowercase mapping, kept only when it is a single character.
fn fold(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hungarian_has_stable_unique_indices() {
        let alphabet = Alphabet::hungarian();
        assert_eq!(alphabet.len(), 36);
        assert_eq!(alphabet.index_of('a'), Some(0));
        assert_eq!(alphabet.index_of(' '), Some(35));
        assert_eq!(alphabet.index_of('ő'), Some(29));
        for idx in 0..alphabet.len() {
            let c = alphabet.char_at(idx).unwrap();
            assert_eq!(alphabet.index_of(c), Some(idx));
        }
        assert_eq!(Alphabet::new(HUNGARIAN_CHARS).unwrap(), alphabet);
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn membership_is_by_folded_character() {
        let alphabet = Alphabet::english();
        assert!(alphabet.contains('q'));
        assert!(alphabet.contains(' '));
        assert!(!alphabet.contains('Q'));
        assert!(!alphabet.contains('é'));
        assert!(Alphabet::hungarian().contains('é'));
    }

    #[test]
    fn filter_folds_case_and_drops_unknown_characters() {
        let alphabet = Alphabet::hungarian();
        assert_eq!(alphabet.filter_str("Hello, World! 42"), "hello world ");
        assert_eq!(alphabet.filter_str("ÁRVÍZTŰRŐ tükörfúrógép"), "árvíztűrő tükörfúrógép");
        assert_eq!(alphabet.filter_str("ß\t\n"), "");
        assert_eq!(alphabet.filter_str(""), "");
        assert_eq!(alphabet.filter_str("123 !?"), " ");
    }

    #[test]
    fn filter_is_idempotent() {
        let alphabet = Alphabet::english();
        for text in ["the quick brown fox", "ab  ba", "Mixed CASE words", "zz9 top!"] {
            let once = alphabet.filter_str(text);
            assert_eq!(alphabet.filter_str(&once), once);
        }
    }

    #[test]
    fn multi_char_lowercase_mappings_are_dropped() {
        // U+0130 lowercases to "i\u{307}", which is two characters.
        let alphabet = Alphabet::english();
        assert_eq!(alphabet.filter_str("\u{130}x"), "x");
    }

    #[test]
    fn rejects_invalid_alphabets() {
        assert!(matches!(Alphabet::new(""), Err(GibberishError::Configuration(_))));
        assert!(matches!(Alphabet::new("aba"), Err(GibberishError::Configuration(_))));
        assert!(matches!(Alphabet::new("aB"), Err(GibberishError::Configuration(_))));
    }

    #[test]
    fn serializes_as_character_string() {
        let alphabet = Alphabet::new("ab ").unwrap();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, "\"ab \"");
        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alphabet);
        assert!(serde_json::from_str::<Alphabet>("\"aa\"").is_err());
    }
}
