/// Equidistant edge points and the axis-lexicographic sort
pub mod points;
/// Recursive numbering of triangles and tetrahedra
pub mod simplex;
/// Grid numbering of quadrilaterals and hexahedra
pub mod tensor;
/// Numbering of wedges (triangular prisms)
pub mod wedge;

use crate::element::{Corners, ElementType};
use crate::error::OrderingError;
use crate::{MAX_ORDER, MIN_ORDER};

use nalgebra::Point3;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub use points::{place_between, sort_by_axes};
pub use simplex::{number_tetrahedron, number_triangle};
pub use tensor::{number_hexahedron, number_quadrilateral};
pub use wedge::number_wedge;

/// Reference coordinates of every node of a Lagrange element, in VTK node order
///
/// The position of a point in the returned list is its node index, so the cell connectivity is simply `0..len`.
///
/// Returns an [`OrderingError::InvalidOrder`] if `order` is outside of `[MIN_ORDER, MAX_ORDER]`.
/// Wedges are only verified up to [`WEDGE_MAX_VERIFIED_ORDER`](crate::WEDGE_MAX_VERIFIED_ORDER);
/// higher orders are still produced, but a warning is logged.
///
/// # Example
/// ```
/// use lagrange_nodes::prelude::*;
///
/// let nodes = node_ordering(ElementType::Triangle, 2).unwrap();
///
/// assert_eq!(nodes.len(), 6);
/// assert_eq!(nodes[3], Point3::new(0.5, 0.0, 0.0));
/// ```
pub fn node_ordering(
    element_type: ElementType,
    order: usize,
) -> Result<Vec<Point3<f64>>, OrderingError> {
    if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
        return Err(OrderingError::InvalidOrder(order));
    }

    if order > element_type.max_verified_order() {
        warn!(
            "{} node ordering of order {} has only been verified up to order {}",
            element_type,
            order,
            element_type.max_verified_order()
        );
    }

    let corners = element_type.reference_corners();
    let coords = match element_type {
        ElementType::Triangle => number_triangle(&corner_array(&corners), order, false),
        ElementType::Tetrahedron => number_tetrahedron(&corner_array(&corners), order),
        ElementType::Quadrilateral => number_quadrilateral(&corner_array(&corners), order, false),
        ElementType::Hexahedron => number_hexahedron(&corner_array(&corners), order),
        ElementType::Wedge => number_wedge(&corner_array(&corners), order),
    };

    debug!(
        "numbered {} of order {}: {} nodes",
        element_type,
        order,
        coords.len()
    );

    Ok(coords)
}

/// [`node_ordering`] with the element type given by its lowercase name
///
/// Unknown names produce an [`OrderingError::UnknownElementType`] carrying the name.
pub fn node_ordering_by_name(
    element_type: impl AsRef<str>,
    order: usize,
) -> Result<Vec<Point3<f64>>, OrderingError> {
    node_ordering(element_type.as_ref().parse()?, order)
}

/// Node orderings of every supported element type at every supported order, computed in parallel
pub fn node_ordering_table() -> Result<BTreeMap<(ElementType, usize), Vec<Point3<f64>>>, OrderingError>
{
    ElementType::ALL
        .iter()
        .flat_map(|et| (MIN_ORDER..=MAX_ORDER).map(move |order| (*et, order)))
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(et, order)| node_ordering(et, order).map(|coords| ((et, order), coords)))
        .collect()
}

fn corner_array<const N: usize>(corners: &Corners) -> [Point3<f64>; N] {
    std::array::from_fn(|i| corners[i])
}
