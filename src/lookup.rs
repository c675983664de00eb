//! Three-way result of an API operation.

use serde::Serialize;

/// Outcome of one API operation.
///
/// Keeps "the service could not be used" apart from "the service answered
/// with nothing":
/// - [`Lookup::Unavailable`]: transport failure, undecodable body, or a
///   request the service rejected outright. The two causes cannot be told
///   apart from the response.
/// - [`Lookup::Empty`]: a well-formed response without matching data.
/// - [`Lookup::Found`]: the extracted value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Lookup<T> {
    Unavailable,
    Empty,
    Found(T),
}

impl<T> Lookup<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the found value, discarding the unavailable/empty distinction.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Unavailable | Self::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Unavailable => Lookup::Unavailable,
            Self::Empty => Lookup::Empty,
            Self::Found(value) => Lookup::Found(f(value)),
        }
    }
}

impl<T: Default> Lookup<T> {
    /// Collapses to `None` when unavailable and to an empty container when empty.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Unavailable => None,
            Self::Empty => Some(T::default()),
            Self::Found(value) => Some(value),
        }
    }
}
