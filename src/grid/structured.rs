//! Generators for structured interval, rectangle and box grids.
//!
//! Vertices are laid out lexicographically (x fastest). In 2D the four sides
//! carry boundary ids `1` (left), `2` (right), `3` (bottom) and `4` (top); in
//! 1D the two end points carry `1` and `2`. 3D boxes leave every boundary
//! facet at [`DEFAULT_BOUNDARY_ID`](super::DEFAULT_BOUNDARY_ID).

use super::builder::GridBuilder;
use super::leaf::LeafGrid;
use crate::mesh_error::MultiscaleError;
use crate::topology::cell_type::CellType;

/// Cell-type choices for structured 2D grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructuredCellType {
    Triangle,
    Quadrilateral,
}

fn invalid_geometry(message: impl Into<String>) -> MultiscaleError {
    MultiscaleError::InvalidGeometry(message.into())
}

/// `n` segments on a line.
pub fn structured_interval(n: usize) -> Result<LeafGrid, MultiscaleError> {
    if n == 0 {
        return Err(invalid_geometry("n must be positive"));
    }
    let mut b = GridBuilder::new(1);
    let v = b.add_vertices(n + 1)?;
    for i in 0..n {
        b.add_cell(CellType::Segment, &[v[i], v[i + 1]])?;
    }
    b.set_boundary_id(&[v[0]], 1)?;
    b.set_boundary_id(&[v[n]], 2)?;
    b.build()
}

/// `nx`×`ny` rectangle grid; each square is split into two triangles when
/// `cell_type` is [`StructuredCellType::Triangle`].
pub fn structured_box_2d(
    nx: usize,
    ny: usize,
    cell_type: StructuredCellType,
) -> Result<LeafGrid, MultiscaleError> {
    if nx == 0 || ny == 0 {
        return Err(invalid_geometry("nx and ny must be positive"));
    }
    let mut b = GridBuilder::new(2);
    let v = b.add_vertices((nx + 1) * (ny + 1))?;
    let row_stride = nx + 1;
    for j in 0..ny {
        for i in 0..nx {
            let v0 = v[j * row_stride + i];
            let v1 = v[j * row_stride + i + 1];
            let v3 = v[(j + 1) * row_stride + i];
            let v2 = v[(j + 1) * row_stride + i + 1];
            match cell_type {
                StructuredCellType::Triangle => {
                    b.add_cell(CellType::Triangle, &[v0, v1, v2])?;
                    b.add_cell(CellType::Triangle, &[v0, v2, v3])?;
                }
                StructuredCellType::Quadrilateral => {
                    b.add_cell(CellType::Quadrilateral, &[v0, v1, v2, v3])?;
                }
            }
        }
    }
    for j in 0..ny {
        b.set_boundary_id(&[v[j * row_stride], v[(j + 1) * row_stride]], 1)?;
        b.set_boundary_id(&[v[j * row_stride + nx], v[(j + 1) * row_stride + nx]], 2)?;
    }
    for i in 0..nx {
        b.set_boundary_id(&[v[i], v[i + 1]], 3)?;
        b.set_boundary_id(&[v[ny * row_stride + i], v[ny * row_stride + i + 1]], 4)?;
    }
    b.build()
}

/// `nx`×`ny`×`nz` hexahedral box grid.
pub fn structured_box_3d(nx: usize, ny: usize, nz: usize) -> Result<LeafGrid, MultiscaleError> {
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(invalid_geometry("nx, ny, and nz must be positive"));
    }
    let mut b = GridBuilder::new(3);
    let v = b.add_vertices((nx + 1) * (ny + 1) * (nz + 1))?;
    let idx = |i: usize, j: usize, k: usize| (k * (ny + 1) + j) * (nx + 1) + i;
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let cell = [
                    v[idx(i, j, k)],
                    v[idx(i + 1, j, k)],
                    v[idx(i + 1, j + 1, k)],
                    v[idx(i, j + 1, k)],
                    v[idx(i, j, k + 1)],
                    v[idx(i + 1, j, k + 1)],
                    v[idx(i + 1, j + 1, k + 1)],
                    v[idx(i, j + 1, k + 1)],
                ];
                b.add_cell(CellType::Hexahedron, &cell)?;
            }
        }
    }
    b.build()
}
