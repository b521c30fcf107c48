use std::fmt;

use serde::{Deserialize, Serialize};

/// A single joke served by the provider.
///
/// Values are created when the collection is loaded and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Joke {
    pub id: u32,
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    pub fn new<S: Into<String>, P: Into<String>>(id: u32, setup: S, punchline: P) -> Self {
        Self {
            id,
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }

    /// Returns the first text field that is blank, if any.
    pub fn blank_field(&self) -> Option<JokeField> {
        if self.setup.trim().is_empty() {
            Some(JokeField::Setup)
        } else if self.punchline.trim().is_empty() {
            Some(JokeField::Punchline)
        } else {
            None
        }
    }
}

/// Text fields carried by a [`Joke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeField {
    Setup,
    Punchline,
}

impl JokeField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Punchline => "punchline",
        }
    }
}

impl fmt::Display for JokeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk representation of a joke.
///
/// Older data files use `joke`/`response` instead of `setup`/`punchline` and
/// carry no identifier; both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JokeRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(alias = "joke")]
    pub setup: String,
    #[serde(alias = "response")]
    pub punchline: String,
}

impl JokeRecord {
    pub(crate) fn into_joke(self, position: usize) -> Joke {
        let id = self
            .id
            .unwrap_or_else(|| u32::try_from(position + 1).unwrap_or(u32::MAX));
        Joke {
            id,
            setup: self.setup,
            punchline: self.punchline,
        }
    }
}
