//! The active medium filter.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::artwork::ArtworkRecord;

/// Sentinel string for the unfiltered view.
pub const ALL: &str = "all";

/// Which artworks are visible: everything, or one medium.
///
/// Serializes as the medium string, with `"all"` for [`Filter::All`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every artwork is visible.
    #[default]
    All,
    /// Only artworks of this medium are visible.
    Medium(String),
}

impl Filter {
    /// Parse a filter-control value.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Medium(value.to_owned())
        }
    }

    /// Whether `artwork` passes this filter.
    #[must_use]
    pub fn matches(&self, artwork: &ArtworkRecord) -> bool {
        match self {
            Self::All => true,
            Self::Medium(medium) => artwork.medium == *medium,
        }
    }

    /// The filter-control value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Medium(medium) => medium,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
