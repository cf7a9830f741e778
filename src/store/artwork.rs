//! Artwork records as read from the data file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Year of an artwork: a plain number or free text such as `"2019–2021"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    /// A single calendar year.
    Number(i64),
    /// Any textual year description.
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One artwork in the portfolio. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Year of creation.
    pub year: Year,
    /// Medium, also the filter key (e.g. `"painting"`).
    pub medium: String,
    /// Image URL or path.
    pub image: String,
}

impl ArtworkRecord {
    /// Caption text shown next to the focused artwork.
    #[must_use]
    pub fn caption(&self) -> Caption {
        Caption {
            title: self.title.clone(),
            meta: format!("{} · {}", self.year, self.medium),
        }
    }
}

/// Title and metadata line for the caption surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// Artwork title.
    pub title: String,
    /// `"{year} · {medium}"`.
    pub meta: String,
}
