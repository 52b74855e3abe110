use super::points::{coincident, place_between};

use nalgebra::Point3;
use tracing::trace;

/// Triangle edges as `(from, to)` corner indices, in numbering order
pub const TRIANGLE_EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

/// Tetrahedron edges as `(from, to)` corner indices, in numbering order
pub const TETRAHEDRON_EDGES: [[usize; 2]; 6] = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];

/// Tetrahedron faces as corner triples handed to [`number_triangle`]
///
/// x-z, top, y-z, x-y. This is not the ordering given in the VTK documentation, but it is the one VTK reads.
pub const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 3], [2, 3, 1], [0, 3, 2], [0, 2, 1]];

/// Node coordinates of a triangle of arbitrary order, in VTK order
///
/// Corners, then edge nodes along [`TRIANGLE_EDGES`], then the face nodes, which are
/// numbered as a smaller triangle of `order - 3` nested inside the first layer of face nodes.
///
/// With `skip_corners`, corners and edge nodes of this (outermost) triangle are left out so the routine
/// can number the face of a 3D element whose corners and edges are already numbered.
///
/// # Panics
/// At `order == 0` the three corners must coincide.
pub fn number_triangle(
    corners: &[Point3<f64>; 3],
    order: usize,
    skip_corners: bool,
) -> Vec<Point3<f64>> {
    trace!("numbering triangle of order {} (skip: {})", order, skip_corners);

    if order == 0 {
        assert!(
            coincident(&corners[1], &corners[0]) && coincident(&corners[2], &corners[0]),
            "Triangle corners {:?} must coincide at order 0; Cannot number degenerate Triangle!",
            corners
        );
        return vec![corners[0]];
    }

    let mut coords = Vec::new();
    if !skip_corners {
        coords.extend_from_slice(corners);
    }
    if order == 1 {
        return coords;
    }

    if !skip_corners {
        for [from, to] in TRIANGLE_EDGES {
            coords.extend(place_between(order - 1, &corners[from], &corners[to]));
        }
    }
    if order == 2 {
        return coords;
    }

    // face: shrink by one layer of nodes and recurse
    let e_x = (corners[1] - corners[0]) / order as f64;
    let e_y = (corners[2] - corners[0]) / order as f64;
    let inner = [
        corners[0] + (e_x + e_y),
        corners[1] + (e_x * -2.0 + e_y),
        corners[2] + (e_x + e_y * -2.0),
    ];
    coords.extend(number_triangle(&inner, order - 3, false));

    coords
}

/// Node coordinates of a tetrahedron of arbitrary order, in VTK order
///
/// Corners, edges along [`TETRAHEDRON_EDGES`], face interiors along [`TETRAHEDRON_FACES`] (each a skipped
/// [`number_triangle`]), then the interior, numbered as a tetrahedron of `order - 4` nested inside.
///
/// # Panics
/// At `order == 0` the four corners must coincide.
pub fn number_tetrahedron(corners: &[Point3<f64>; 4], order: usize) -> Vec<Point3<f64>> {
    trace!("numbering tetrahedron of order {}", order);

    if order == 0 {
        assert!(
            corners[1..].iter().all(|c| coincident(c, &corners[0])),
            "Tetrahedron corners {:?} must coincide at order 0; Cannot number degenerate Tetrahedron!",
            corners
        );
        return vec![corners[0]];
    }

    let mut coords = corners.to_vec();
    if order == 1 {
        return coords;
    }

    for [from, to] in TETRAHEDRON_EDGES {
        coords.extend(place_between(order - 1, &corners[from], &corners[to]));
    }
    if order == 2 {
        return coords;
    }

    for [a, b, c] in TETRAHEDRON_FACES {
        coords.extend(number_triangle(
            &[corners[a], corners[b], corners[c]],
            order,
            true,
        ));
    }
    if order == 3 {
        return coords;
    }

    // volume: shrink by one layer of nodes and recurse
    let e_x = (corners[1] - corners[0]) / order as f64;
    let e_y = (corners[2] - corners[0]) / order as f64;
    let e_z = (corners[3] - corners[0]) / order as f64;
    let inner = [
        corners[0] + (e_x + e_y + e_z),
        corners[1] + (e_x * -3.0 + e_y + e_z),
        corners[2] + (e_x + e_y * -3.0 + e_z),
        corners[3] + (e_x + e_y + e_z * -3.0),
    ];
    coords.extend(number_tetrahedron(&inner, order - 4));

    coords
}
