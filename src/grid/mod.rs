//! Read-only grid views.
//!
//! [`GridView`] is the interface the decomposition engine consumes: entity
//! enumeration per codimension, global indices, geometry types and
//! sub-entity access. [`leaf::LeafGrid`] is a sieve-backed implementation
//! built with [`builder::GridBuilder`] or the generators in [`structured`].

pub mod builder;
pub mod index_set;
pub mod leaf;
pub mod structured;

pub use builder::GridBuilder;
pub use index_set::IndexSet;
pub use leaf::LeafGrid;

use crate::mesh_error::MultiscaleError;
use crate::topology::bounds::PointLike;
use crate::topology::geometry_type::GeometryType;
use std::fmt;

/// Index of an entity as handed out by a grid view.
///
/// Only the pair `(GeometryType, GlobalIndex)` needs to be unique.
pub type GlobalIndex = usize;

/// Boundary id reported for boundary facets nobody marked.
pub const DEFAULT_BOUNDARY_ID: i32 = 0;

/// A codim-1 facet of a cell, seen from that cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intersection<E> {
    /// Cell the intersection is seen from.
    pub inside: E,
    /// Neighbouring cell across the facet, `None` on the domain boundary.
    pub outside: Option<E>,
    /// The shared facet entity.
    pub facet: E,
    /// Position of `facet` among the codim-1 sub-entities of `inside`.
    pub index_in_inside: usize,
    /// Boundary id of the facet, `None` for interior intersections.
    pub boundary_id: Option<i32>,
}

impl<E> Intersection<E> {
    #[inline]
    pub fn neighbor(&self) -> bool {
        self.outside.is_some()
    }

    #[inline]
    pub fn boundary(&self) -> bool {
        self.outside.is_none()
    }
}

/// Which entity copies take part in a communication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterfaceKind {
    InteriorBorderInteriorBorder,
    InteriorBorderAll,
    AllAll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommDirection {
    Forward,
    Backward,
}

/// User data exchanged between copies of shared entities.
pub trait DataHandle<E> {
    type Data;

    /// Whether data is attached to entities of this dimension/codimension.
    fn contains(&self, dim: usize, codim: usize) -> bool;
    /// Pack the data of `entity` into `buf`.
    fn gather(&self, entity: E, buf: &mut Vec<Self::Data>);
    /// Unpack data received for `entity`.
    fn scatter(&mut self, entity: E, data: &[Self::Data]);
}

/// Read-only view of a whole grid.
///
/// Entities are cheap copyable handles. Implementations must be deterministic:
/// `entities` and `sub_entity` return the same order on every call.
pub trait GridView {
    type Entity: PointLike + fmt::Display;

    /// Topological dimension of the grid.
    fn dimension(&self) -> usize;

    /// All entities of the given codimension. Empty when `codim > dimension()`.
    fn entities<'a>(&'a self, codim: usize) -> Box<dyn Iterator<Item = Self::Entity> + 'a>;

    fn codim(&self, entity: Self::Entity) -> Result<usize, MultiscaleError>;

    fn global_index(&self, entity: Self::Entity) -> Result<GlobalIndex, MultiscaleError>;

    fn geometry_type(&self, entity: Self::Entity) -> Result<GeometryType, MultiscaleError>;

    /// Number of sub-entities of `entity` with grid codimension `codim`.
    fn sub_entity_count(&self, entity: Self::Entity, codim: usize)
    -> Result<usize, MultiscaleError>;

    /// The `i`-th sub-entity of `entity` with grid codimension `codim`.
    fn sub_entity(
        &self,
        entity: Self::Entity,
        codim: usize,
        i: usize,
    ) -> Result<Self::Entity, MultiscaleError>;

    /// Intersections of a codim-0 entity with its neighbours and the boundary.
    fn intersections(
        &self,
        entity: Self::Entity,
    ) -> Result<Vec<Intersection<Self::Entity>>, MultiscaleError>;

    /// Refinement level of the view.
    fn level(&self) -> usize {
        0
    }

    /// Exchange data between copies of shared entities on other processes.
    ///
    /// A serial grid has no remote copies, so the default does nothing.
    fn communicate<H>(
        &self,
        _handle: &mut H,
        _interface: InterfaceKind,
        _direction: CommDirection,
    ) -> Result<(), MultiscaleError>
    where
        H: DataHandle<Self::Entity>,
    {
        Ok(())
    }
}
