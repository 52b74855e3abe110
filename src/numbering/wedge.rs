use super::points::{place_between, sort_by_axes};
use super::simplex::number_triangle;
use super::tensor::number_quadrilateral;

use nalgebra::{Point3, Vector3};

/// Wedge edges as `(from, to)` corner indices, in numbering order
pub const WEDGE_EDGES: [[usize; 2]; 9] = [
    [0, 1],
    [1, 2],
    [2, 0],
    [3, 4],
    [4, 5],
    [5, 3],
    [0, 3],
    [1, 4],
    [2, 5],
];

/// Bottom and top triangular faces
pub const WEDGE_TRIANGULAR_FACES: [[usize; 3]; 2] = [[0, 1, 2], [3, 4, 5]];

/// Quadrilateral side faces
pub const WEDGE_QUADRILATERAL_FACES: [[usize; 4]; 3] = [[0, 1, 4, 3], [1, 2, 5, 4], [2, 0, 3, 5]];

/// Node coordinates of a wedge (triangular prism) of arbitrary order, in VTK order
///
/// Corners, edges along [`WEDGE_EDGES`], the two triangular faces, the three quadrilateral faces,
/// then `order - 1` triangular layers of interior nodes from bottom to top.
///
/// Nodes on the triangular faces and interior layers are not numbered like a standalone triangle:
/// VTK expects them in axis order, so each of these blocks goes through [`sort_by_axes`].
/// This only holds up to 4th order; above that, either the triangular face numbering is different
/// again or VTK itself misreads the cell.
pub fn number_wedge(corners: &[Point3<f64>; 6], order: usize) -> Vec<Point3<f64>> {
    let num_on_edge = order.saturating_sub(1);
    let mut coords = Vec::with_capacity((order + 1).pow(2) * (order + 2) / 2);

    coords.extend_from_slice(corners);
    for [from, to] in WEDGE_EDGES {
        coords.extend(place_between(num_on_edge, &corners[from], &corners[to]));
    }

    for [a, b, c] in WEDGE_TRIANGULAR_FACES {
        let face = number_triangle(&[corners[a], corners[b], corners[c]], order, true);
        coords.extend(sort_by_axes(&face));
    }

    for [a, b, c, d] in WEDGE_QUADRILATERAL_FACES {
        coords.extend(number_quadrilateral(
            &[corners[a], corners[b], corners[c], corners[d]],
            order,
            true,
        ));
    }

    let e_z = (corners[3] - corners[0]) / order as f64;
    let mut shift = Vector3::<f64>::zeros();
    for _ in 0..num_on_edge {
        shift += e_z;
        let layer = [corners[0] + shift, corners[1] + shift, corners[2] + shift];
        let layer_coords = number_triangle(&layer, order, true);
        coords.extend(sort_by_axes(&layer_coords));
    }

    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementType;
    use approx::assert_relative_eq;

    fn unit_wedge() -> [Point3<f64>; 6] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ]
    }

    fn is_axis_sorted(points: &[Point3<f64>]) -> bool {
        points
            .windows(2)
            .all(|w| (w[0].z, w[0].y, w[0].x) <= (w[1].z, w[1].y, w[1].x))
    }

    #[test]
    fn wedge_counts() {
        for order in 1..=10 {
            assert_eq!(
                number_wedge(&unit_wedge(), order).len(),
                ElementType::Wedge.node_count(order)
            );
        }
    }

    #[test]
    fn second_order_wedge() {
        let coords = number_wedge(&unit_wedge(), 2);
        let quad_centers = [
            Point3::new(0.5, 0.0, 0.5),
            Point3::new(0.5, 0.5, 0.5),
            Point3::new(0.0, 0.5, 0.5),
        ];

        assert_eq!(coords.len(), 18);
        assert_relative_eq!(coords[6], Point3::new(0.5, 0.0, 0.0));
        assert_relative_eq!(coords[14], Point3::new(0.0, 1.0, 0.5));
        for (p, c) in coords[15..].iter().zip(quad_centers.iter()) {
            assert_relative_eq!(*p, *c);
        }
    }

    #[test]
    fn triangular_blocks_are_axis_sorted() {
        let order = 4;
        let coords = number_wedge(&unit_wedge(), order);

        let tri = ElementType::Triangle.interior_node_count(order);
        let quad = (order - 1).pow(2);
        let faces_start = 6 + 9 * (order - 1);

        let bottom = &coords[faces_start..faces_start + tri];
        let top = &coords[faces_start + tri..faces_start + 2 * tri];
        assert!(is_axis_sorted(bottom));
        assert!(is_axis_sorted(top));
        assert!(bottom.iter().all(|p| p.z == 0.0));
        assert!(top.iter().all(|p| p.z == 1.0));

        let interior_start = faces_start + 2 * tri + 3 * quad;
        for layer in coords[interior_start..].chunks(tri) {
            assert!(is_axis_sorted(layer));
        }

        assert_relative_eq!(bottom[0], Point3::new(0.25, 0.25, 0.0));
        assert_relative_eq!(bottom[1], Point3::new(0.5, 0.25, 0.0));
        assert_relative_eq!(bottom[2], Point3::new(0.25, 0.5, 0.0));
    }

    #[test]
    fn standalone_triangles_keep_their_recursive_order() {
        let w = unit_wedge();
        let standalone = number_triangle(&[w[0], w[1], w[2]], 5, true);
        assert!(!is_axis_sorted(&standalone));

        let coords = number_wedge(&w, 5);
        let faces_start = 6 + 9 * 4;
        let bottom = &coords[faces_start..faces_start + standalone.len()];
        assert!(is_axis_sorted(bottom));
        assert_eq!(bottom, &sort_by_axes(&standalone)[..]);
    }

    #[test]
    fn interior_layers_advance_bottom_to_top() {
        let order = 4;
        let coords = number_wedge(&unit_wedge(), order);
        let tri = ElementType::Triangle.interior_node_count(order);
        let interior = &coords[coords.len() - (order - 1) * tri..];

        for (k, layer) in interior.chunks(tri).enumerate() {
            let z = (k + 1) as f64 / order as f64;
            for p in layer {
                assert_relative_eq!(p.z, z, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn wedge_nodes_stay_inside() {
        for order in 1..=10 {
            for p in number_wedge(&unit_wedge(), order) {
                assert!(p.x >= -1e-12 && p.y >= -1e-12);
                assert!(p.x + p.y <= 1.0 + 1e-12);
                assert!(p.z >= -1e-12 && p.z <= 1.0 + 1e-12);
            }
        }
    }
}
