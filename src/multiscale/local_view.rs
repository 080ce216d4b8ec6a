//! Immutable per-subdomain view of the global grid.

use super::local_map::{GeometryIndexedLocalMap, LocalIndex};
use super::registry::SubdomainId;
use crate::grid::{CommDirection, DataHandle, GlobalIndex, GridView, InterfaceKind, Intersection};
use crate::mesh_error::MultiscaleError;
use crate::topology::geometry_type::GeometryType;
use std::sync::Arc;

/// The part of a grid that belongs to one subdomain.
///
/// Membership and local numbering come from the subdomain's finalized
/// [`GeometryIndexedLocalMap`]. Everything else (enumeration, intersections,
/// communication) is delegated to the shared global view, restricted to
/// registered entities where that makes sense. Cloning is cheap: both the
/// global view and the map are shared.
#[derive(Debug)]
pub struct LocalMeshView<G: GridView> {
    subdomain: SubdomainId,
    global: Arc<G>,
    map: Arc<GeometryIndexedLocalMap>,
}

impl<G: GridView> Clone for LocalMeshView<G> {
    fn clone(&self) -> Self {
        Self {
            subdomain: self.subdomain,
            global: Arc::clone(&self.global),
            map: Arc::clone(&self.map),
        }
    }
}

impl<G: GridView> LocalMeshView<G> {
    pub(crate) fn new(
        subdomain: SubdomainId,
        global: Arc<G>,
        map: Arc<GeometryIndexedLocalMap>,
    ) -> Self {
        Self {
            subdomain,
            global,
            map,
        }
    }

    #[inline]
    pub fn subdomain(&self) -> SubdomainId {
        self.subdomain
    }

    #[inline]
    pub fn global_view(&self) -> &Arc<G> {
        &self.global
    }

    #[inline]
    pub fn local_map(&self) -> &GeometryIndexedLocalMap {
        &self.map
    }

    #[inline]
    pub fn contains(&self, geometry: GeometryType, global: GlobalIndex) -> bool {
        self.map.contains(geometry, global)
    }

    #[inline]
    pub fn local_index(&self, geometry: GeometryType, global: GlobalIndex) -> Option<LocalIndex> {
        self.map.local_index(geometry, global)
    }

    /// Local index of a grid entity, `None` if it is not in this subdomain.
    ///
    /// # Errors
    /// Propagates lookup failures of the global view (e.g. unknown entities).
    pub fn local_index_of(&self, entity: G::Entity) -> Result<Option<LocalIndex>, MultiscaleError> {
        let geometry = self.global.geometry_type(entity)?;
        let global = self.global.global_index(entity)?;
        Ok(self.map.local_index(geometry, global))
    }

    /// Whether `entity` belongs to this subdomain. Unknown entities do not.
    pub fn contains_entity(&self, entity: G::Entity) -> bool {
        matches!(self.local_index_of(entity), Ok(Some(_)))
    }

    /// Entities of codimension `codim` that belong to this subdomain, in the
    /// global view's enumeration order.
    pub fn entities(&self, codim: usize) -> impl Iterator<Item = G::Entity> + '_ {
        self.global
            .entities(codim)
            .filter(move |&e| self.contains_entity(e))
    }

    /// Codim-0 entities of this subdomain.
    pub fn elements(&self) -> impl Iterator<Item = G::Entity> + '_ {
        self.entities(0)
    }

    /// Number of registered entities of codimension `codim`.
    pub fn size(&self, codim: usize) -> usize {
        match self.global.dimension().checked_sub(codim) {
            Some(dim) => self.map.count_of_dimension(dim),
            None => 0,
        }
    }

    /// Intersections of a codim-0 entity, as seen by the global view.
    ///
    /// Neighbours across an intersection may belong to other subdomains; use
    /// [`contains_entity`](Self::contains_entity) on `outside` to tell.
    pub fn intersections(
        &self,
        entity: G::Entity,
    ) -> Result<Vec<Intersection<G::Entity>>, MultiscaleError> {
        self.global.intersections(entity)
    }

    #[inline]
    pub fn boundary_id(&self, intersection: &Intersection<G::Entity>) -> Option<i32> {
        intersection.boundary_id
    }

    #[inline]
    pub fn level(&self) -> usize {
        self.global.level()
    }

    /// Delegates to the global view.
    pub fn communicate<H>(
        &self,
        handle: &mut H,
        interface: InterfaceKind,
        direction: CommDirection,
    ) -> Result<(), MultiscaleError>
    where
        H: DataHandle<G::Entity>,
    {
        self.global.communicate(handle, interface, direction)
    }
}
