//! Validated tour type.

use serde::Serialize;

use crate::error::{Result, TspError};

/// A closed tour: a permutation of `0..n` where the last city connects
/// back to the first.
///
/// A `Tour` can only be built through [`Tour::from_order`] or
/// [`Tour::parse`], which reject anything that is not a permutation.
///
/// # Examples
///
/// ```
/// use tsp3d::models::Tour;
///
/// let tour = Tour::parse("2 0 1", 3).unwrap();
/// assert_eq!(tour.cities(), &[2, 0, 1]);
/// assert!(Tour::parse("0 0 1", 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Wraps a visiting order after checking it is a permutation of `0..n`.
    pub fn from_order(cities: Vec<usize>, n: usize) -> Result<Self> {
        validate_permutation(&cities, n)?;
        Ok(Self { cities })
    }

    /// Parses a whitespace-delimited list of city indices.
    pub fn parse(text: &str, n: usize) -> Result<Self> {
        let cities = text
            .split_whitespace()
            .map(|tok| {
                tok.parse::<usize>()
                    .map_err(|_| TspError::InvalidTour(format!("'{tok}' is not a city index")))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_order(cities, n)
    }

    /// Wraps an order the caller has built as a permutation.
    pub(crate) fn from_valid(cities: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&cities, cities.len()));
        Self { cities }
    }

    /// The visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for c in &self.cities {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}

/// Checks that `cities` contains every index in `0..n` exactly once.
pub fn validate_permutation(cities: &[usize], n: usize) -> Result<()> {
    if cities.len() != n {
        return Err(TspError::InvalidTour(format!(
            "expected {n} cities, found {}",
            cities.len()
        )));
    }
    let mut seen = vec![false; n];
    for &c in cities {
        if c >= n {
            return Err(TspError::InvalidTour(format!(
                "city {c} out of range 0..{n}"
            )));
        }
        if seen[c] {
            return Err(TspError::InvalidTour(format!("city {c} visited twice")));
        }
        seen[c] = true;
    }
    Ok(())
}

/// Returns true if `cities` is a permutation of `0..n`.
pub fn is_permutation(cities: &[usize], n: usize) -> bool {
    validate_permutation(cities, n).is_ok()
}
