use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::types::{Joke, JokeField, JokeRecord};

const BUNDLED_JOKES: &str = include_str!("../data/jokes.json");

/// Ordered, read-only set of jokes available for serving.
#[derive(Debug, Clone, Default)]
pub struct JokeCollection {
    jokes: Vec<Joke>,
}

impl JokeCollection {
    /// Builds a collection, rejecting jokes with blank setup or punchline.
    ///
    /// An empty input is accepted; the provider reports it when asked for a joke.
    pub fn new(jokes: Vec<Joke>) -> Result<Self, LoadError> {
        for (index, joke) in jokes.iter().enumerate() {
            if let Some(field) = joke.blank_field() {
                return Err(LoadError::InvalidJoke { index, field });
            }
        }
        Ok(Self { jokes })
    }

    /// Parses a JSON array of jokes.
    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        let records: Vec<JokeRecord> = serde_json::from_str(raw)?;
        let jokes = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_joke(position))
            .collect();
        Self::new(jokes)
    }

    /// Reads and parses a JSON data file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Returns the data set compiled into the binary.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json_str(BUNDLED_JOKES)
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn as_slice(&self) -> &[Joke] {
        &self.jokes
    }

    /// Looks up the first joke carrying the given identifier.
    pub fn get(&self, id: u32) -> Option<&Joke> {
        self.jokes.iter().find(|joke| joke.id == id)
    }
}

/// Errors raised while building a [`JokeCollection`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read joke data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse joke data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("joke at index {index} has a blank {field}")]
    InvalidJoke { index: usize, field: JokeField },
}
