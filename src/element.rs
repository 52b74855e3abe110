use crate::error::OrderingError;
use crate::{MAX_ORDER, WEDGE_MAX_VERIFIED_ORDER};

use nalgebra::Point3;
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;

/// Fixed corner set of a reference element (never more than 8 corners)
pub type Corners = SmallVec<[Point3<f64>; 8]>;

/// The Lagrange element shapes supported by the node numbering routines
///
/// ## Reference Corners
/// Each type has one fixed set of unit corners with the right angle at the local origin.
/// The corner order below is the order in which the corners open every node ordering:
///
/// ```text
///  Triangle / Wedge bottom      Quadrilateral / Hex bottom
///
///     2                             3 --------- 2
///     | \                           |           |
///     |   \                         |           |
///     |     \                       |           |
///     0 ----- 1                     0 --------- 1
/// ```
///
/// * Tetrahedron: the triangle corners plus `3` at `(0, 0, 1)`
/// * Hexahedron: the quadrilateral corners at `z = 0`, then `4..8` directly above them at `z = 1`
/// * Wedge: the triangle corners at `z = 0`, then `3..6` directly above them at `z = 1`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementType {
    Triangle,
    Tetrahedron,
    Quadrilateral,
    Hexahedron,
    Wedge,
}

impl ElementType {
    /// Every supported element type
    pub const ALL: [Self; 5] = [
        Self::Triangle,
        Self::Tetrahedron,
        Self::Quadrilateral,
        Self::Hexahedron,
        Self::Wedge,
    ];

    /// Lowercase name, as accepted by [`ElementType::from_str`]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Tetrahedron => "tetrahedron",
            Self::Quadrilateral => "quadrilateral",
            Self::Hexahedron => "hexahedron",
            Self::Wedge => "wedge",
        }
    }

    pub const fn dimension(&self) -> usize {
        match self {
            Self::Triangle | Self::Quadrilateral => 2,
            Self::Tetrahedron | Self::Hexahedron | Self::Wedge => 3,
        }
    }

    pub const fn corner_count(&self) -> usize {
        match self {
            Self::Triangle => 3,
            Self::Tetrahedron | Self::Quadrilateral => 4,
            Self::Wedge => 6,
            Self::Hexahedron => 8,
        }
    }

    /// Cell type id of the matching Lagrange cell in VTK
    pub const fn vtk_cell_type(&self) -> u8 {
        match self {
            Self::Triangle => 69,
            Self::Quadrilateral => 70,
            Self::Tetrahedron => 71,
            Self::Hexahedron => 72,
            Self::Wedge => 73,
        }
    }

    /// Highest order for which the produced ordering has been checked against VTK
    ///
    /// Wedges beyond 4th order number their triangular faces in a way that has not been confirmed.
    pub const fn max_verified_order(&self) -> usize {
        match self {
            Self::Wedge => WEDGE_MAX_VERIFIED_ORDER,
            _ => MAX_ORDER,
        }
    }

    /// The unit reference corners, in the order they are numbered
    pub fn reference_corners(&self) -> Corners {
        match self {
            Self::Triangle => smallvec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            Self::Tetrahedron => smallvec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            Self::Quadrilateral => smallvec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            Self::Hexahedron => smallvec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
            Self::Wedge => smallvec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
        }
    }

    /// Total number of nodes on an element of the given order
    pub fn node_count(&self, order: usize) -> usize {
        let p = order;
        match self {
            Self::Triangle => (p + 1) * (p + 2) / 2,
            Self::Tetrahedron => (p + 1) * (p + 2) * (p + 3) / 6,
            Self::Quadrilateral => (p + 1).pow(2),
            Self::Hexahedron => (p + 1).pow(3),
            Self::Wedge => (p + 1).pow(2) * (p + 2) / 2,
        }
    }

    /// Number of nodes strictly between corners on all edges
    pub fn edge_node_count(&self, order: usize) -> usize {
        let edges = match self {
            Self::Triangle => 3,
            Self::Tetrahedron => 6,
            Self::Quadrilateral => 4,
            Self::Hexahedron => 12,
            Self::Wedge => 9,
        };
        edges * order.saturating_sub(1)
    }

    /// Number of nodes strictly inside the 2D faces of a 3D element (always zero for 2D elements)
    pub fn face_node_count(&self, order: usize) -> usize {
        match self {
            Self::Triangle | Self::Quadrilateral => 0,
            Self::Tetrahedron => 4 * triangle_interior(order),
            Self::Hexahedron => 6 * quad_interior(order),
            Self::Wedge => 2 * triangle_interior(order) + 3 * quad_interior(order),
        }
    }

    /// Number of nodes numbered last, after corners, edges and faces
    pub fn interior_node_count(&self, order: usize) -> usize {
        let m = order.saturating_sub(1);
        match self {
            Self::Triangle => triangle_interior(order),
            Self::Quadrilateral => quad_interior(order),
            Self::Tetrahedron => m * order.saturating_sub(2) * order.saturating_sub(3) / 6,
            Self::Hexahedron => m.pow(3),
            Self::Wedge => m * triangle_interior(order),
        }
    }
}

fn triangle_interior(order: usize) -> usize {
    order.saturating_sub(1) * order.saturating_sub(2) / 2
}

fn quad_interior(order: usize) -> usize {
    order.saturating_sub(1).pow(2)
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ElementType {
    type Err = OrderingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|et| et.name() == name)
            .copied()
            .ok_or_else(|| OrderingError::UnknownElementType(String::from(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for et in ElementType::ALL {
            assert_eq!(et.to_string().parse::<ElementType>().unwrap(), et);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "pyramid".parse::<ElementType>(),
            Err(OrderingError::UnknownElementType(String::from("pyramid")))
        );
        assert!("Triangle".parse::<ElementType>().is_err());
        assert!("".parse::<ElementType>().is_err());
    }

    #[test]
    fn corner_sets_match_corner_counts() {
        for et in ElementType::ALL {
            let corners = et.reference_corners();
            assert_eq!(corners.len(), et.corner_count());
            assert!(!corners.spilled());
            assert_eq!(corners[0], Point3::origin());
        }
    }

    #[test]
    fn block_counts_partition_the_total() {
        for et in ElementType::ALL {
            for order in 1..=MAX_ORDER {
                assert_eq!(
                    et.corner_count()
                        + et.edge_node_count(order)
                        + et.face_node_count(order)
                        + et.interior_node_count(order),
                    et.node_count(order),
                    "{} of order {}",
                    et,
                    order
                );
            }
        }
    }

    #[test]
    fn known_node_counts() {
        assert_eq!(ElementType::Triangle.node_count(2), 6);
        assert_eq!(ElementType::Tetrahedron.node_count(3), 20);
        assert_eq!(ElementType::Quadrilateral.node_count(4), 25);
        assert_eq!(ElementType::Hexahedron.node_count(2), 27);
        assert_eq!(ElementType::Wedge.node_count(2), 18);
        assert_eq!(ElementType::Wedge.node_count(4), 75);
    }

    #[test]
    fn vtk_cell_types() {
        let ids: Vec<u8> = ElementType::ALL.iter().map(|et| et.vtk_cell_type()).collect();
        assert_eq!(ids, vec![69, 71, 70, 72, 73]);
    }

    #[test]
    fn only_wedges_have_a_reduced_verified_range() {
        for et in ElementType::ALL {
            let expected = if et == ElementType::Wedge { 4 } else { 10 };
            assert_eq!(et.max_verified_order(), expected);
        }
    }
}
