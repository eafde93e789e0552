//! Tour evaluator over any distance source.

use crate::distance::DistanceSource;
use crate::error::Result;
use crate::models::Tour;

/// Total length of the closed tour visiting `tour` in order.
///
/// Sums every consecutive leg and then the leg from the last city back to
/// the first. Tours with fewer than two cities have length zero.
///
/// # Examples
///
/// ```
/// use tsp3d::models::points_from_coords;
/// use tsp3d::distance::DistanceMatrix;
/// use tsp3d::evaluation::tour_length;
///
/// let points = points_from_coords(&[
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [1.0, 1.0, 0.0],
///     [0.0, 1.0, 0.0],
/// ]);
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(tour_length(&[0, 1, 2, 3], &dm), 4.0);
/// assert_eq!(tour_length(&[0, 1, 2, 3], points.as_slice()), 4.0);
/// ```
pub fn tour_length<D: DistanceSource + ?Sized>(tour: &[usize], source: &D) -> f64 {
    let (first, last) = match (tour.first(), tour.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return 0.0,
    };
    let open: f64 = tour
        .windows(2)
        .map(|w| source.distance(w[0], w[1]))
        .sum();
    open + source.distance(last, first)
}

/// Parses a whitespace-separated tour and returns its closed length.
///
/// The text must name every city of `source` exactly once; anything else is
/// an [`InvalidTour`](crate::TspError::InvalidTour) error.
///
/// ```
/// use tsp3d::models::points_from_coords;
/// use tsp3d::evaluation::tour_length_str;
///
/// let points = points_from_coords(&[[0.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
/// assert_eq!(tour_length_str("1 0", points.as_slice()).unwrap(), 4.0);
/// assert!(tour_length_str("1 1", points.as_slice()).is_err());
/// ```
pub fn tour_length_str<D: DistanceSource + ?Sized>(text: &str, source: &D) -> Result<f64> {
    let tour = Tour::parse(text, source.size())?;
    Ok(tour_length(tour.cities(), source))
}
