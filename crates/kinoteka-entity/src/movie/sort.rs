//! Movie listing sort orders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort orders accepted by the movie listing endpoint.
///
/// Rating sorts descending (best first), title ascending, release date
/// descending (newest first). Rating is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieSort {
    /// By rating, highest first.
    #[default]
    Rating,
    /// By title, alphabetical.
    Title,
    /// By release date, newest first.
    Date,
}

impl MovieSort {
    /// Return the sort order as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Title => "title",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for MovieSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MovieSort {
    type Err = kinoteka_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rating" => Ok(Self::Rating),
            "title" => Ok(Self::Title),
            "date" => Ok(Self::Date),
            _ => Err(kinoteka_core::AppError::validation(format!(
                "Invalid sort order: '{s}'. Expected one of: rating, title, date"
            ))),
        }
    }
}
