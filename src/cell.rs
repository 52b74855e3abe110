use crate::element::ElementType;
use crate::error::OrderingError;
use crate::numbering::node_ordering;

#[cfg(feature = "json_export")]
use json::{object, JsonValue};
use nalgebra::Point3;

/// A single Lagrange cell on its reference element, ready to be handed to a mesh writer
///
/// The points are stored in node order, so the connectivity is the identity permutation.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangeCell {
    pub element_type: ElementType,
    pub order: usize,
    points: Vec<Point3<f64>>,
}

impl LagrangeCell {
    /// Number the nodes of an `element_type` cell of the given `order`
    ///
    /// # Example
    /// ```
    /// use lagrange_nodes::prelude::*;
    ///
    /// let cell = LagrangeCell::new(ElementType::Hexahedron, 3).unwrap();
    ///
    /// assert_eq!(cell.len(), 64);
    /// assert_eq!(cell.connectivity()[63], 63);
    /// assert_eq!(cell.vtk_cell_type(), 72);
    /// ```
    pub fn new(element_type: ElementType, order: usize) -> Result<Self, OrderingError> {
        Ok(Self {
            element_type,
            order,
            points: node_ordering(element_type, order)?,
        })
    }

    pub fn from_name(element_type: impl AsRef<str>, order: usize) -> Result<Self, OrderingError> {
        Self::new(element_type.as_ref().parse()?, order)
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn vtk_cell_type(&self) -> u8 {
        self.element_type.vtk_cell_type()
    }

    /// Point ids of the cell's nodes
    pub fn connectivity(&self) -> Vec<usize> {
        (0..self.points.len()).collect()
    }

    /// Per-point scalar equal to the point index (useful to check the ordering visually)
    pub fn point_numbers(&self) -> Vec<f64> {
        (0..self.points.len()).map(|i| i as f64).collect()
    }

    /// Produce a Json Object that describes this cell
    #[cfg(feature = "json_export")]
    pub fn to_json(&self) -> JsonValue {
        let points = self
            .points
            .iter()
            .map(|p| JsonValue::Array(p.iter().map(|x| JsonValue::from(*x)).collect()))
            .collect();

        object! {
            "element_type": self.element_type.name(),
            "order": self.order,
            "vtk_cell_type": self.vtk_cell_type(),
            "points": JsonValue::Array(points),
            "connectivity": self.connectivity(),
            "point_numbers": self.point_numbers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_is_the_identity() {
        let cell = LagrangeCell::new(ElementType::Wedge, 3).unwrap();

        assert_eq!(cell.len(), 40);
        assert!(!cell.is_empty());
        assert!(cell.connectivity().iter().enumerate().all(|(i, id)| i == *id));
        assert_eq!(cell.point_numbers()[39], 39.0);
    }

    #[test]
    fn invalid_requests_produce_no_cell() {
        assert_eq!(
            LagrangeCell::new(ElementType::Quadrilateral, 0),
            Err(OrderingError::InvalidOrder(0))
        );
        assert_eq!(
            LagrangeCell::from_name("pyramid", 2),
            Err(OrderingError::UnknownElementType(String::from("pyramid")))
        );
    }

    #[test]
    #[cfg(feature = "json_export")]
    fn json_export_layout() {
        let cell = LagrangeCell::from_name("triangle", 2).unwrap();
        let cell_json = cell.to_json();

        assert_eq!(cell_json["element_type"], "triangle");
        assert_eq!(cell_json["order"], 2);
        assert_eq!(cell_json["vtk_cell_type"], 69);
        assert_eq!(cell_json["points"].len(), 6);
        assert_eq!(cell_json["points"][4][0], 0.5);
        assert_eq!(cell_json["points"][4][1], 0.5);
        assert_eq!(cell_json["connectivity"][5], 5);
        assert_eq!(cell_json["point_numbers"][5], 5.0);
    }
}
