//! Ten-year demographic buckets ("1950s", "1960s", ...).

use std::fmt;
use std::str::FromStr;

/// A decade, identified by its first year. Displays as "<year>s".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decade(pub i32);

impl Decade {
    /// The decade containing `year`.
    pub fn of_year(year: i32) -> Self {
        Self(year.div_euclid(10) * 10)
    }

    pub fn start_year(&self) -> i32 {
        self.0
    }

    /// Distance used by every nearest-decade fallback.
    pub fn distance(&self, other: Decade) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Pick the key closest to `self`. Ties go to the key seen first, so an
    /// ascending iterator resolves ties to the earlier decade.
    pub fn nearest<I>(&self, candidates: I) -> Option<Decade>
    where
        I: IntoIterator<Item = Decade>,
    {
        let mut best: Option<(Decade, u32)> = None;
        for candidate in candidates {
            let d = self.distance(candidate);
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((candidate, d)),
            }
        }
        best.map(|(decade, _)| decade)
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Error for a label that is not of the form "<N>s".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDecadeError(pub String);

impl fmt::Display for ParseDecadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid decade label {:?} (expected e.g. \"1950s\")", self.0)
    }
}

impl std::error::Error for ParseDecadeError {}

impl FromStr for Decade {
    type Err = ParseDecadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        label
            .strip_suffix('s')
            .and_then(|n| n.parse::<i32>().ok())
            .map(Decade)
            .ok_or_else(|| ParseDecadeError(label.to_string()))
    }
}
