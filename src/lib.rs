#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-multiscale
//!
//! mesh-multiscale splits an unstructured grid into subdomains and gives each
//! subdomain its own dense local numbering, as needed by multiscale and domain
//! decomposition solvers.
//!
//! ## Features
//! - Sieve-backed leaf grids in 1D, 2D and 3D with segments, triangles,
//!   quadrilaterals, tetrahedra, hexahedra and prisms
//! - Global indices per geometry type and sub-entity access by codimension
//! - Per-subdomain numbering of cells and all of their sub-entities
//! - Immutable local views sharing one global grid
//! - Optional diagnostic output through the `log` facade or a custom sink
//!
//! ## Usage
//!
//! ```rust
//! # fn try_main() -> Result<(), mesh_multiscale::mesh_error::MultiscaleError> {
//! use mesh_multiscale::prelude::*;
//! use std::sync::Arc;
//!
//! let grid = Arc::new(structured_box_2d(4, 4, StructuredCellType::Triangle)?);
//! let mut ms = Decomposition::new(Arc::clone(&grid)).without_diagnostics();
//! for (n, cell) in grid.entities(0).enumerate() {
//!     ms.add(cell, n % 2)?;
//! }
//! ms.finalize()?;
//! let view = ms.local_view(0);
//! assert_eq!(view.size(0), 16);
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```
//!
//! ## Determinism
//!
//! Entity enumeration, sub-entity order and therefore all local numberings
//! depend only on the grid and the order of `add` calls.

pub mod grid;
pub mod mesh_error;
pub mod multiscale;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::grid::structured::{
        StructuredCellType, structured_box_2d, structured_box_3d, structured_interval,
    };
    pub use crate::grid::{
        CommDirection, DataHandle, GlobalIndex, GridBuilder, GridView, InterfaceKind,
        Intersection, LeafGrid,
    };
    pub use crate::mesh_error::MultiscaleError;
    pub use crate::multiscale::{
        Decomposition, DecompositionOptions, DiagnosticSink, GeometryIndexedLocalMap,
        LocalIndex, LocalMeshView, LogSink, MemorySink, SubdomainId,
    };
    pub use crate::topology::bounds::PointLike;
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::geometry_type::{BasicType, GeometryType};
    pub use crate::topology::point::PointId;
    pub use crate::topology::sieve::{InMemorySieve, Sieve};
}
