//! Build an interpolated [`LeafGrid`] from cell→vertex connectivity.
//!
//! Cells are given by their vertices in the reference ordering documented on
//! [`CellType`]. The builder creates the intermediate entities so the sieve
//! has `cell → face → edge → vertex` connectivity for 3D cells,
//! `cell → edge → vertex` for 2D cells and `cell → vertex` for segments.
//! Shared edges and faces are created once, keyed by their sorted vertices.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), mesh_multiscale::mesh_error::MultiscaleError> {
//! use mesh_multiscale::grid::{GridBuilder, GridView};
//! use mesh_multiscale::topology::cell_type::CellType;
//!
//! let mut builder = GridBuilder::new(2);
//! let v = builder.add_vertices(4)?;
//! builder.add_cell(CellType::Triangle, &[v[0], v[1], v[2]])?;
//! builder.add_cell(CellType::Triangle, &[v[1], v[3], v[2]])?;
//! let grid = builder.build()?;
//! assert_eq!(grid.entities(1).count(), 5);
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

use super::leaf::LeafGrid;
use crate::mesh_error::MultiscaleError;
use crate::topology::cell_type::{CellType, face_geometry};
use crate::topology::geometry_type::GeometryType;
use crate::topology::point::PointId;
use crate::topology::sieve::{InMemorySieve, Sieve};
use std::collections::{BTreeMap, HashMap};

fn invalid_geometry(message: impl Into<String>) -> MultiscaleError {
    MultiscaleError::InvalidGeometry(message.into())
}

#[derive(Debug)]
pub struct GridBuilder {
    dimension: usize,
    next_id: u64,
    sieve: InMemorySieve<PointId, ()>,
    geometry: HashMap<PointId, GeometryType>,
    edges: BTreeMap<(PointId, PointId), PointId>,
    faces: BTreeMap<Vec<PointId>, PointId>,
    boundary_ids: HashMap<PointId, i32>,
}

impl GridBuilder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            next_id: 1,
            sieve: InMemorySieve::default(),
            geometry: HashMap::new(),
            edges: BTreeMap::new(),
            faces: BTreeMap::new(),
            boundary_ids: HashMap::new(),
        }
    }

    fn alloc_point(&mut self, geometry: GeometryType) -> Result<PointId, MultiscaleError> {
        let p = PointId::new(self.next_id)?;
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(MultiscaleError::InvalidPointId)?;
        self.sieve.add_point(p);
        self.geometry.insert(p, geometry);
        Ok(p)
    }

    pub fn add_vertex(&mut self) -> Result<PointId, MultiscaleError> {
        self.alloc_point(GeometryType::VERTEX)
    }

    pub fn add_vertices(&mut self, n: usize) -> Result<Vec<PointId>, MultiscaleError> {
        (0..n).map(|_| self.add_vertex()).collect()
    }

    /// Add a cell and every edge/face it needs. Returns the cell point.
    pub fn add_cell(
        &mut self,
        cell_type: CellType,
        vertices: &[PointId],
    ) -> Result<PointId, MultiscaleError> {
        if cell_type.dimension() != self.dimension {
            return Err(invalid_geometry(format!(
                "{cell_type:?} cells are not valid in a grid of dimension {}",
                self.dimension
            )));
        }
        if vertices.len() != cell_type.vertex_count() {
            return Err(invalid_geometry(format!(
                "{cell_type:?} expects {} vertices, got {}",
                cell_type.vertex_count(),
                vertices.len()
            )));
        }
        for (i, v) in vertices.iter().enumerate() {
            if self.geometry.get(v) != Some(&GeometryType::VERTEX) {
                return Err(invalid_geometry(format!("{v} is not a vertex of this grid")));
            }
            if vertices[..i].contains(v) {
                return Err(invalid_geometry(format!("vertex {v} repeated in cell")));
            }
        }

        let cell = self.alloc_point(cell_type.geometry_type())?;
        match self.dimension {
            1 => {
                for &v in vertices {
                    self.sieve.add_arrow(cell, v, ());
                }
            }
            2 => {
                for &[a, b] in cell_type.edges() {
                    let edge = self.edge_point(vertices[a], vertices[b])?;
                    self.sieve.add_arrow(cell, edge, ());
                }
            }
            _ => {
                for local in cell_type.faces() {
                    let face_vertices: Vec<PointId> = local.iter().map(|&i| vertices[i]).collect();
                    let face = self.face_point(&face_vertices)?;
                    self.sieve.add_arrow(cell, face, ());
                }
            }
        }
        Ok(cell)
    }

    fn edge_point(&mut self, a: PointId, b: PointId) -> Result<PointId, MultiscaleError> {
        let key = if a < b { (a, b) } else { (b, a) };
        if let Some(&p) = self.edges.get(&key) {
            return Ok(p);
        }
        let edge = self.alloc_point(GeometryType::LINE)?;
        self.edges.insert(key, edge);
        self.sieve.add_arrow(edge, a, ());
        self.sieve.add_arrow(edge, b, ());
        Ok(edge)
    }

    fn face_point(&mut self, vertices: &[PointId]) -> Result<PointId, MultiscaleError> {
        let mut key = vertices.to_vec();
        key.sort_unstable();
        if let Some(&p) = self.faces.get(&key) {
            return Ok(p);
        }
        let face = self.alloc_point(face_geometry(vertices.len()))?;
        self.faces.insert(key, face);
        let n = vertices.len();
        for i in 0..n {
            let edge = self.edge_point(vertices[i], vertices[(i + 1) % n])?;
            self.sieve.add_arrow(face, edge, ());
        }
        Ok(face)
    }

    /// Look up the facet (codim-1 entity) spanned by `vertices`.
    pub fn facet(&self, vertices: &[PointId]) -> Option<PointId> {
        match self.dimension {
            1 => match vertices {
                [v] if self.geometry.get(v) == Some(&GeometryType::VERTEX) => Some(*v),
                _ => None,
            },
            2 => match vertices {
                [a, b] => {
                    let key = if a < b { (*a, *b) } else { (*b, *a) };
                    self.edges.get(&key).copied()
                }
                _ => None,
            },
            _ => {
                let mut key = vertices.to_vec();
                key.sort_unstable();
                self.faces.get(&key).copied()
            }
        }
    }

    /// Tag the facet spanned by `vertices` with a boundary id.
    pub fn set_boundary_id(&mut self, vertices: &[PointId], id: i32) -> Result<(), MultiscaleError> {
        let facet = self
            .facet(vertices)
            .ok_or_else(|| invalid_geometry(format!("no facet spanned by {vertices:?}")))?;
        self.boundary_ids.insert(facet, id);
        Ok(())
    }

    pub fn build(self) -> Result<LeafGrid, MultiscaleError> {
        if self.dimension == 0 || self.dimension > 3 {
            return Err(invalid_geometry(format!(
                "grid dimension must be 1, 2 or 3, got {}",
                self.dimension
            )));
        }
        LeafGrid::new(self.dimension, self.sieve, self.geometry, self.boundary_ids)
    }
}
