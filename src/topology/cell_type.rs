//! Cell shapes accepted by the grid builder, with their reference connectivity.
//!
//! Cells reference their vertices in the standard ordering:
//!
//! - [`CellType::Segment`]: `(0,1)`
//! - [`CellType::Triangle`]: `(0,1,2)`
//! - [`CellType::Quadrilateral`]: `(0,1,2,3)` in cyclic order
//! - [`CellType::Tetrahedron`]: `(0,1,2,3)`
//! - [`CellType::Hexahedron`]: `(0,..,7)` with `0..=3` the bottom face and
//!   `4..=7` the top face, both cyclic
//! - [`CellType::Prism`]: `(0,..,5)` with `0..=2` the bottom triangle

use crate::topology::geometry_type::GeometryType;

/// Common cell types for mesh elements.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellType {
    /// 1D segment/edge.
    Segment,
    /// 2D simplex (triangle).
    Triangle,
    /// 2D tensor-product cell (quad).
    Quadrilateral,
    /// 3D simplex (tet).
    Tetrahedron,
    /// 3D tensor-product cell (hex).
    Hexahedron,
    /// 3D wedge/prism.
    Prism,
}

impl CellType {
    /// Topological dimension of the cell.
    pub fn dimension(self) -> usize {
        self.geometry_type().dim()
    }

    pub fn geometry_type(self) -> GeometryType {
        match self {
            CellType::Segment => GeometryType::LINE,
            CellType::Triangle => GeometryType::TRIANGLE,
            CellType::Quadrilateral => GeometryType::QUADRILATERAL,
            CellType::Tetrahedron => GeometryType::TETRAHEDRON,
            CellType::Hexahedron => GeometryType::HEXAHEDRON,
            CellType::Prism => GeometryType::PRISM,
        }
    }

    pub fn vertex_count(self) -> usize {
        match self {
            CellType::Segment => 2,
            CellType::Triangle => 3,
            CellType::Quadrilateral | CellType::Tetrahedron => 4,
            CellType::Hexahedron => 8,
            CellType::Prism => 6,
        }
    }

    /// Local vertex pairs of the cell's edges. Empty for segments, whose only
    /// "edge" is the cell itself.
    pub fn edges(self) -> &'static [[usize; 2]] {
        match self {
            CellType::Segment => &[],
            CellType::Triangle => &[[0, 1], [1, 2], [2, 0]],
            CellType::Quadrilateral => &[[0, 1], [1, 2], [2, 3], [3, 0]],
            CellType::Tetrahedron => &[[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]],
            CellType::Hexahedron => &[
                [0, 1],
                [1, 2],
                [2, 3],
                [3, 0],
                [4, 5],
                [5, 6],
                [6, 7],
                [7, 4],
                [0, 4],
                [1, 5],
                [2, 6],
                [3, 7],
            ],
            CellType::Prism => &[
                [0, 1],
                [1, 2],
                [2, 0],
                [3, 4],
                [4, 5],
                [5, 3],
                [0, 3],
                [1, 4],
                [2, 5],
            ],
        }
    }

    /// Local vertex cycles of the cell's 2D faces (3D cells only).
    pub fn faces(self) -> &'static [&'static [usize]] {
        match self {
            CellType::Segment | CellType::Triangle | CellType::Quadrilateral => &[],
            CellType::Tetrahedron => &[&[0, 1, 2], &[0, 1, 3], &[1, 2, 3], &[0, 2, 3]],
            CellType::Hexahedron => &[
                &[0, 1, 2, 3],
                &[4, 5, 6, 7],
                &[0, 1, 5, 4],
                &[1, 2, 6, 5],
                &[2, 3, 7, 6],
                &[3, 0, 4, 7],
            ],
            CellType::Prism => &[
                &[0, 1, 2],
                &[3, 4, 5],
                &[0, 1, 4, 3],
                &[1, 2, 5, 4],
                &[2, 0, 3, 5],
            ],
        }
    }
}

/// Geometry type of a 2D face given its vertex count.
pub(crate) fn face_geometry(vertex_count: usize) -> GeometryType {
    match vertex_count {
        3 => GeometryType::TRIANGLE,
        4 => GeometryType::QUADRILATERAL,
        _ => GeometryType::none(2),
    }
}
