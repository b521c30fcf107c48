//! Domain layer for the joke service.
//!
//! Holds the joke data model, the collection loader and the random-selection
//! provider shared by the HTTP host.
pub mod collection;
pub mod provider;
pub mod types;

pub use collection::{JokeCollection, LoadError};
pub use provider::{JokeError, JokeProvider};
pub use types::{Joke, JokeField};
