use crate::AXIS_SORT_DECIMALS;

use nalgebra::Point3;
use std::cmp::Ordering;

/// Relative tolerance used when checking that recursion corners collapsed to a single point
pub const COINCIDENCE_RTOL: f64 = 1e-5;
/// Absolute tolerance used when checking that recursion corners collapsed to a single point
pub const COINCIDENCE_ATOL: f64 = 1e-8;

/// Place `n` equidistant points strictly between `from` and `to`, starting on the `from` side
///
/// The segment is split into `n + 1` equal steps and the starting point is dropped, so neither endpoint is ever produced.
pub fn place_between(n: usize, from: &Point3<f64>, to: &Point3<f64>) -> Vec<Point3<f64>> {
    let step = (to - from) / (n + 1) as f64;

    (1..=n)
        .map(|i| Point3::from(step * i as f64 + from.coords))
        .collect()
}

/// Copy of `points` rounded to `AXIS_SORT_DECIMALS` and stably sorted by ascending z, then y, then x
pub fn sort_by_axes(points: &[Point3<f64>]) -> Vec<Point3<f64>> {
    let mut sorted: Vec<Point3<f64>> = points.iter().map(|p| p.map(round_to_sort_grid)).collect();

    sorted.sort_by(|a, b| {
        axis_order(a.z, b.z)
            .then_with(|| axis_order(a.y, b.y))
            .then_with(|| axis_order(a.x, b.x))
    });

    sorted
}

/// Whether two points coincide component-wise within the coincidence tolerances
pub fn coincident(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(ai, bi)| (ai - bi).abs() <= COINCIDENCE_ATOL + COINCIDENCE_RTOL * bi.abs())
}

fn round_to_sort_grid(x: f64) -> f64 {
    let scale = 10_f64.powi(AXIS_SORT_DECIMALS);
    (x * scale).round_ties_even() / scale
}

// -0.0 and 0.0 are equal here
fn axis_order(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
