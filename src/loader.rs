//! Point file loading.
//!
//! Each non-blank line holds one point as whitespace-separated `x y z`
//! fields. Fields past the third are ignored. Point ids follow record order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TspError};
use crate::models::Point;

/// Reads points from a file.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let points = parse_points(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), count = points.len(), "loaded points");
    Ok(points)
}

/// Parses points from any buffered reader.
///
/// The first malformed record aborts parsing with
/// [`TspError::InvalidPointRecord`].
///
/// # Examples
///
/// ```
/// use tsp3d::loader::parse_points;
///
/// let text = "0 0 0\n1.5 2 -3 star-a\n\n4 5 6\n";
/// let points = parse_points(text.as_bytes()).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[1].z(), -3.0);
/// assert_eq!(points[2].id(), 2);
/// ```
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let [x, y, z] = parse_record(&line, idx + 1)?;
        points.push(Point::new(points.len(), x, y, z));
    }
    Ok(points)
}

fn parse_record(line: &str, line_no: usize) -> Result<[f64; 3]> {
    let mut fields = line.split_whitespace();
    let mut coords = [0.0; 3];
    for (axis, slot) in coords.iter_mut().enumerate() {
        let field = fields.next().ok_or_else(|| TspError::InvalidPointRecord {
            line: line_no,
            reason: format!("expected 3 coordinates, found {axis}"),
        })?;
        let value: f64 = field.parse().map_err(|_| TspError::InvalidPointRecord {
            line: line_no,
            reason: format!("'{field}' is not a number"),
        })?;
        if !value.is_finite() {
            return Err(TspError::InvalidPointRecord {
                line: line_no,
                reason: format!("coordinate '{field}' is not finite"),
            });
        }
        *slot = value;
    }
    Ok(coords)
}
