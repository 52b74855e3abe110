//! Reference node layouts for high-order Lagrange finite elements
//!
//! Generates the coordinates of every node of a single Lagrange triangle, tetrahedron, quadrilateral,
//! hexahedron or wedge on its unit reference element, in the node order VTK expects for its Lagrange cells.
//!
//! ```
//! use lagrange_nodes::prelude::*;
//!
//! let nodes = node_ordering(ElementType::Tetrahedron, 3).unwrap();
//! assert_eq!(nodes.len(), ElementType::Tetrahedron.node_count(3));
//! ```

/// A numbered cell, as handed to a mesh writer
pub mod cell;
/// Supported element types and their reference elements
pub mod element;
/// Errors produced by the numbering entry points
pub mod error;
/// Node numbering routines for each element type
pub mod numbering;

/// Lowest supported polynomial order
pub const MIN_ORDER: usize = 1;

/// Highest supported polynomial order. Requests above this value fail with [`error::OrderingError::InvalidOrder`].
pub const MAX_ORDER: usize = 10;

/// Highest wedge order whose node ordering has been checked against VTK
pub const WEDGE_MAX_VERIFIED_ORDER: usize = 4;

/// Number of decimals coordinates are rounded to before being sorted by axes
pub const AXIS_SORT_DECIMALS: i32 = 12;

pub mod prelude {
    pub use crate::cell::LagrangeCell;
    pub use crate::element::ElementType;
    pub use crate::error::OrderingError;
    pub use crate::numbering::{node_ordering, node_ordering_by_name, node_ordering_table};
    pub use crate::{MAX_ORDER, MIN_ORDER, WEDGE_MAX_VERIFIED_ORDER};
    pub use nalgebra::Point3;
}

pub use cell::LagrangeCell;
pub use element::ElementType;
pub use error::OrderingError;
pub use numbering::{node_ordering, node_ordering_by_name, node_ordering_table};
