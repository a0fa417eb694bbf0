//! Dictionary-backed word service that needs no network

use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::{FetchFailure, ValidationFailure, WordService};
use crate::core::Word;

/// Picks secrets from, and validates guesses against, an in-memory word list
pub struct OfflineWordService {
    words: Vec<Word>,
    dictionary: FxHashSet<Word>,
    secret: Option<Word>,
}

impl OfflineWordService {
    /// Build a service over `words`; every secret is drawn at random from them
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let dictionary = words.iter().copied().collect();
        Self {
            words,
            dictionary,
            secret: None,
        }
    }

    /// Always hand out `secret`; it is added to the dictionary if missing
    #[must_use]
    pub fn with_secret(mut self, secret: Word) -> Self {
        self.dictionary.insert(secret);
        self.secret = Some(secret);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}

impl WordService for OfflineWordService {
    fn word_of_the_day(&self) -> Result<Word, FetchFailure> {
        if let Some(secret) = self.secret {
            return Ok(secret);
        }

        let secret = self
            .words
            .choose(&mut rand::rng())
            .copied()
            .ok_or_else(|| FetchFailure::Malformed("word list is empty".to_string()))?;
        debug!(words = self.words.len(), "picked offline secret");
        Ok(secret)
    }

    fn validate(&self, guess: &Word) -> Result<(), ValidationFailure> {
        if self.dictionary.contains(guess) {
            Ok(())
        } else {
            Err(ValidationFailure::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::{embedded_words, words_from_lines};

    #[test]
    fn random_secret_comes_from_the_list() {
        let words = words_from_lines(["crane", "slate", "trace"]);
        let service = OfflineWordService::new(words.clone());

        for _ in 0..20 {
            let secret = service.word_of_the_day().unwrap();
            assert!(words.contains(&secret));
        }
    }

    #[test]
    fn fixed_secret_is_always_returned_and_valid() {
        let secret = Word::new("qajaq").unwrap();
        let service = OfflineWordService::new(embedded_words()).with_secret(secret);

        assert_eq!(service.word_of_the_day().unwrap(), secret);
        assert_eq!(service.validate(&secret), Ok(()));
    }

    #[test]
    fn validates_by_membership() {
        let service = OfflineWordService::new(words_from_lines(["crane", "slate"]));

        assert_eq!(service.validate(&Word::new("CRANE").unwrap()), Ok(()));
        assert_eq!(
            service.validate(&Word::new("xqzvp").unwrap()),
            Err(ValidationFailure::Rejected)
        );
        assert_eq!(service.len(), 2);
    }

    #[test]
    fn empty_list_cannot_supply_a_secret() {
        let service = OfflineWordService::new(Vec::new());
        assert!(service.is_empty());
        assert!(matches!(
            service.word_of_the_day(),
            Err(FetchFailure::Malformed(_))
        ));
    }
}
