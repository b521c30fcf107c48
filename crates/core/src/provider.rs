use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::collection::JokeCollection;
use crate::types::Joke;

/// Serves jokes drawn uniformly at random from a fixed collection.
///
/// The collection is never mutated after construction, so a provider can be
/// shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct JokeProvider {
    collection: JokeCollection,
}

impl JokeProvider {
    pub fn new(collection: JokeCollection) -> Self {
        Self { collection }
    }

    /// Returns a random joke using the thread-local generator.
    pub fn random_joke(&self) -> Result<&Joke, JokeError> {
        self.random_joke_with(&mut rand::thread_rng())
    }

    /// Returns a random joke drawn with the supplied generator.
    ///
    /// Every call draws independently; consecutive calls may repeat.
    pub fn random_joke_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Joke, JokeError> {
        self.collection
            .as_slice()
            .choose(rng)
            .ok_or(JokeError::EmptyCollection)
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn jokes(&self) -> &[Joke] {
        self.collection.as_slice()
    }

    pub fn get(&self, id: u32) -> Option<&Joke> {
        self.collection.get(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JokeError {
    #[error("no jokes are available to serve")]
    EmptyCollection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn chicken() -> Joke {
        Joke::new(
            1,
            "Why did the chicken cross the road?",
            "To get to the other side.",
        )
    }

    fn provider(jokes: Vec<Joke>) -> JokeProvider {
        JokeProvider::new(JokeCollection::new(jokes).expect("valid collection"))
    }

    #[test]
    fn single_joke_is_always_returned() {
        let provider = provider(vec![chicken()]);
        for _ in 0..100 {
            assert_eq!(provider.random_joke().expect("joke"), &chicken());
        }
    }

    #[test]
    fn empty_collection_fails() {
        let provider = provider(Vec::new());
        assert_eq!(provider.random_joke(), Err(JokeError::EmptyCollection));
        assert!(provider.is_empty());
    }

    #[test]
    fn returned_joke_belongs_to_collection() {
        let provider = JokeProvider::new(JokeCollection::bundled().expect("bundled data"));
        let ids: HashSet<u32> = provider.jokes().iter().map(|joke| joke.id).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let joke = provider.random_joke_with(&mut rng).expect("joke");
            assert!(ids.contains(&joke.id));
            assert!(!joke.setup.trim().is_empty());
            assert!(!joke.punchline.trim().is_empty());
            assert_eq!(provider.get(joke.id), Some(joke));
        }
    }

    #[test]
    fn both_jokes_of_a_pair_are_observed() {
        let provider = provider(vec![chicken(), Joke::new(2, "Knock knock.", "Who's there?")]);
        let mut seen = HashSet::new();

        for _ in 0..10_000 {
            seen.insert(provider.random_joke().expect("joke").id);
            if seen.len() == 2 {
                break;
            }
        }

        assert_eq!(seen, HashSet::from([1, 2]));
    }

    #[test]
    fn provider_is_shareable_across_threads() {
        let provider = std::sync::Arc::new(provider(vec![chicken()]));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let provider = provider.clone();
                std::thread::spawn(move || provider.random_joke().map(|joke| joke.id))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("thread"), Ok(1));
        }
    }
}
