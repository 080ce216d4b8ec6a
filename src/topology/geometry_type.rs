//! Structural geometry classifier for mesh entities.
//!
//! A [`GeometryType`] says *what shape* an entity has (triangle, hexahedron,
//! line, ...) independent of where it sits. Two entities of the same
//! codimension but different geometry types never share a local numbering
//! bucket, so the type has value equality, a total order and a hash.

use std::fmt;

/// Basic reference-element family.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BasicType {
    Simplex,
    Cube,
    Prism,
    Pyramid,
    /// Placeholder for entities without a reference element (e.g. general polygons).
    None,
}

/// Shape classifier: basic type plus dimension.
///
/// 0- and 1-dimensional cubes are canonicalized to simplices, so a vertex or a
/// line compares equal regardless of the family it was built from.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct GeometryType {
    basic: BasicType,
    dim: u8,
}

impl GeometryType {
    pub const VERTEX: GeometryType = GeometryType::simplex(0);
    pub const LINE: GeometryType = GeometryType::simplex(1);
    pub const TRIANGLE: GeometryType = GeometryType::simplex(2);
    pub const QUADRILATERAL: GeometryType = GeometryType::cube(2);
    pub const TETRAHEDRON: GeometryType = GeometryType::simplex(3);
    pub const HEXAHEDRON: GeometryType = GeometryType::cube(3);
    pub const PRISM: GeometryType = GeometryType::new(BasicType::Prism, 3);
    pub const PYRAMID: GeometryType = GeometryType::new(BasicType::Pyramid, 3);

    /// Build a geometry type, canonicalizing low-dimensional cubes.
    pub const fn new(basic: BasicType, dim: u8) -> Self {
        let basic = match basic {
            BasicType::Cube if dim <= 1 => BasicType::Simplex,
            other => other,
        };
        Self { basic, dim }
    }

    pub const fn simplex(dim: u8) -> Self {
        Self::new(BasicType::Simplex, dim)
    }

    pub const fn cube(dim: u8) -> Self {
        Self::new(BasicType::Cube, dim)
    }

    pub const fn none(dim: u8) -> Self {
        Self::new(BasicType::None, dim)
    }

    #[inline]
    pub const fn basic_type(self) -> BasicType {
        self.basic
    }

    /// Topological dimension of the reference element.
    #[inline]
    pub const fn dim(self) -> usize {
        self.dim as usize
    }

    #[inline]
    pub fn is_simplex(self) -> bool {
        self.basic == BasicType::Simplex
    }

    /// Vertices and lines are cubes as well as simplices.
    #[inline]
    pub fn is_cube(self) -> bool {
        self.basic == BasicType::Cube || (self.basic == BasicType::Simplex && self.dim <= 1)
    }

    #[inline]
    pub fn is_vertex(self) -> bool {
        self.dim == 0
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.basic {
            BasicType::Simplex => "simplex",
            BasicType::Cube => "cube",
            BasicType::Prism => "prism",
            BasicType::Pyramid => "pyramid",
            BasicType::None => "none",
        };
        write!(f, "({name}, {})", self.dim)
    }
}
