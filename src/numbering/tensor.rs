use super::points::place_between;

use nalgebra::{Point3, Vector3};

/// Quadrilateral edges as `(from, to)` corner indices, in numbering order
///
/// The third edge runs `3 -> 2`, not `2 -> 3`.
pub const QUADRILATERAL_EDGES: [[usize; 2]; 4] = [[0, 1], [1, 2], [3, 2], [0, 3]];

/// Hexahedron edges as `(from, to)` corner indices, in numbering order
///
/// VTK documents `(3, 7)` before `(2, 6)`, but reads the vertical edges in this order.
pub const HEXAHEDRON_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [3, 2],
    [0, 3],
    [4, 5],
    [5, 6],
    [7, 6],
    [4, 7],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Hexahedron faces as corner quadruples handed to [`number_quadrilateral`]
///
/// Each quadruple also fixes the face's local x (`q0 -> q1`) and y (`q0 -> q3`) directions.
pub const HEXAHEDRON_FACES: [[usize; 4]; 6] = [
    [0, 3, 7, 4],
    [1, 2, 6, 5],
    [0, 1, 5, 4],
    [3, 2, 6, 7],
    [0, 1, 2, 3],
    [4, 5, 6, 7],
];

/// Node coordinates of a quadrilateral of arbitrary order, in VTK order
///
/// Corners, edges along [`QUADRILATERAL_EDGES`], then a row-major grid of interior nodes:
/// rows advance along `q0 -> q3`, and each row advances along `q0 -> q1`.
///
/// With `skip_corners`, only the interior grid is produced.
pub fn number_quadrilateral(
    corners: &[Point3<f64>; 4],
    order: usize,
    skip_corners: bool,
) -> Vec<Point3<f64>> {
    let num_on_edge = order.saturating_sub(1);
    let mut coords = Vec::with_capacity((order + 1).pow(2));

    if !skip_corners {
        coords.extend_from_slice(corners);
        for [from, to] in QUADRILATERAL_EDGES {
            coords.extend(place_between(num_on_edge, &corners[from], &corners[to]));
        }
    }

    let e_x = (corners[1] - corners[0]) / order as f64;
    let e_y = (corners[3] - corners[0]) / order as f64;

    let mut pos_y = corners[0];
    for _ in 0..num_on_edge {
        pos_y += e_y;
        coords.extend(march(pos_y, e_x, num_on_edge));
    }

    coords
}

/// Node coordinates of a hexahedron of arbitrary order, in VTK order
///
/// Corners, edges along [`HEXAHEDRON_EDGES`], face interiors along [`HEXAHEDRON_FACES`],
/// then the interior grid: z-major, then y, then x.
pub fn number_hexahedron(corners: &[Point3<f64>; 8], order: usize) -> Vec<Point3<f64>> {
    let num_on_edge = order.saturating_sub(1);
    let mut coords = Vec::with_capacity((order + 1).pow(3));

    coords.extend_from_slice(corners);
    for [from, to] in HEXAHEDRON_EDGES {
        coords.extend(place_between(num_on_edge, &corners[from], &corners[to]));
    }

    for [a, b, c, d] in HEXAHEDRON_FACES {
        coords.extend(number_quadrilateral(
            &[corners[a], corners[b], corners[c], corners[d]],
            order,
            true,
        ));
    }

    let e_x = (corners[1] - corners[0]) / order as f64;
    let e_y = (corners[3] - corners[0]) / order as f64;
    let e_z = (corners[4] - corners[0]) / order as f64;

    let mut pos_z = corners[0];
    for _ in 0..num_on_edge {
        pos_z += e_z;
        let mut pos_zy = pos_z;
        for _ in 0..num_on_edge {
            pos_zy += e_y;
            coords.extend(march(pos_zy, e_x, num_on_edge));
        }
    }

    coords
}

// `count` points reached by repeatedly stepping from `start` (which is not included)
fn march(start: Point3<f64>, step: Vector3<f64>, count: usize) -> impl Iterator<Item = Point3<f64>> {
    (0..count).scan(start, move |pos, _| {
        *pos += step;
        Some(*pos)
    })
}
