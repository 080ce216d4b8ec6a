//! Assignment of cells to subdomains and per-subdomain local numbering.
//!
//! A [`Decomposition`] goes through two phases:
//!
//! 1. **open**: [`add`](Decomposition::add) assigns codim-0 entities to
//!    subdomains. Each call registers the entity and every sub-entity of every
//!    codimension `1..=dim` in the subdomain's [`GeometryIndexedLocalMap`].
//!    Sub-entities shared by cells of the same subdomain are numbered once;
//!    sub-entities shared with other subdomains are numbered independently in
//!    each of them.
//! 2. **finalized**: after a successful [`finalize`](Decomposition::finalize)
//!    every subdomain `0..size()` has an immutable [`LocalMeshView`].
//!
//! Subdomain ids may be used in any order while open; `finalize` rejects the
//! decomposition unless they form `0..size()`.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), mesh_multiscale::mesh_error::MultiscaleError> {
//! use std::sync::Arc;
//! use mesh_multiscale::grid::GridView;
//! use mesh_multiscale::grid::structured::{StructuredCellType, structured_box_2d};
//! use mesh_multiscale::multiscale::Decomposition;
//!
//! let grid = Arc::new(structured_box_2d(2, 1, StructuredCellType::Quadrilateral)?);
//! let mut ms = Decomposition::new(Arc::clone(&grid));
//! for (i, cell) in grid.entities(0).enumerate() {
//!     ms.add(cell, i)?;
//! }
//! ms.finalize()?;
//! assert_eq!(ms.size(), 2);
//! assert_eq!(ms.local_view(1).size(0), 1);
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

use super::diagnostics::{DiagnosticSink, Diagnostics, LogSink};
use super::local_view::LocalMeshView;
use super::options::DecompositionOptions;
use super::registry::{SubdomainId, SubdomainRegistry};
use crate::grid::{GlobalIndex, GridView};
use crate::mesh_error::MultiscaleError;
use crate::topology::geometry_type::GeometryType;
use std::sync::Arc;

/// Name used in diagnostic output.
pub const ID: &str = "multiscale.decomposition";

/// Subdomain decomposition of a grid view.
pub struct Decomposition<G: GridView> {
    global_view: Arc<G>,
    sink: Option<Arc<dyn DiagnosticSink>>,
    registry: SubdomainRegistry,
    local_views: Vec<Arc<LocalMeshView<G>>>,
    finalized: bool,
}

impl<G: GridView> Decomposition<G> {
    /// Open decomposition over `global_view`, reporting to the `log` facade.
    pub fn new(global_view: Arc<G>) -> Self {
        Self {
            global_view,
            sink: Some(Arc::new(LogSink)),
            registry: SubdomainRegistry::new(),
            local_views: Vec::new(),
            finalized: false,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn without_diagnostics(mut self) -> Self {
        self.sink = None;
        self
    }

    #[inline]
    pub fn global_view(&self) -> &Arc<G> {
        &self.global_view
    }

    /// Number of distinct subdomain ids registered so far.
    #[inline]
    pub fn size(&self) -> usize {
        self.registry.size()
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Registry of the local maps built so far.
    #[inline]
    pub fn registry(&self) -> &SubdomainRegistry {
        &self.registry
    }

    /// [`add_with`](Self::add_with) using default options.
    pub fn add(&mut self, entity: G::Entity, subdomain: SubdomainId) -> Result<(), MultiscaleError> {
        self.add_with(entity, subdomain, &DecompositionOptions::default())
    }

    /// Assign the codim-0 `entity` to `subdomain`.
    ///
    /// All lookups on the global view happen before anything is registered,
    /// so on error the decomposition (including [`size`](Self::size)) is left
    /// untouched.
    ///
    /// # Errors
    /// - [`MultiscaleError::NotACell`] if `entity` is not of codimension 0;
    /// - lookup failures of the global view.
    ///
    /// # Panics
    /// If the decomposition is already finalized.
    pub fn add_with(
        &mut self,
        entity: G::Entity,
        subdomain: SubdomainId,
        options: &DecompositionOptions,
    ) -> Result<(), MultiscaleError> {
        assert!(!self.finalized, "{ID}.add called after finalize");

        let view = &*self.global_view;
        let codim = view.codim(entity)?;
        if codim != 0 {
            return Err(MultiscaleError::NotACell {
                entity: entity.to_string(),
                codim,
            });
        }
        let pairs = collect_closure_pairs(view, entity)?;

        let diag = Diagnostics::new(self.sink.as_deref(), &options.prefix);
        diag.line(format_args!(
            "{ID}.add entity {} to subdomain {subdomain}:",
            pairs[0].1
        ));
        let map = self.registry.entry(subdomain);
        for (geometry, global) in pairs {
            map.add_geometry_and_index(geometry, global, &diag);
        }
        Ok(())
    }

    /// [`finalize_with`](Self::finalize_with) using default options.
    pub fn finalize(&mut self) -> Result<(), MultiscaleError> {
        self.finalize_with(&DecompositionOptions::default())
    }

    /// Validate the subdomain numbering and build one [`LocalMeshView`] per
    /// subdomain, in increasing id order.
    ///
    /// # Errors
    /// [`MultiscaleError::InvalidConfiguration`] if the registered ids are not
    /// exactly `0..size()`. Nothing is published in that case; the caller may
    /// add more entities and try again.
    ///
    /// # Panics
    /// If the decomposition is already finalized.
    pub fn finalize_with(&mut self, options: &DecompositionOptions) -> Result<(), MultiscaleError> {
        assert!(!self.finalized, "{ID}.finalize called twice");

        let diag = Diagnostics::new(self.sink.as_deref(), &options.prefix);
        diag.line(format_args!("finalizing {} subdomains", self.size()));
        if let Err(e) = self.registry.validate_consecutive() {
            diag.line(format_args!("{ID}: {e}"));
            return Err(e);
        }

        let dim = self.global_view.dimension();
        let mut views = Vec::with_capacity(self.size());
        for (subdomain, map) in self.registry.iter() {
            diag.line(format_args!(
                "  subdomain {subdomain} of size {}",
                map.count_of_dimension(dim)
            ));
            views.push(Arc::new(LocalMeshView::new(
                subdomain,
                Arc::clone(&self.global_view),
                Arc::clone(map),
            )));
        }
        self.local_views = views;
        self.finalized = true;
        Ok(())
    }

    /// View of `subdomain`.
    ///
    /// # Panics
    /// If called before [`finalize`](Self::finalize) or with
    /// `subdomain >= size()`. Use [`get_local_view`](Self::get_local_view) for
    /// a non-panicking lookup.
    pub fn local_view(&self, subdomain: SubdomainId) -> Arc<LocalMeshView<G>> {
        assert!(self.finalized, "{ID}.local_view called before finalize");
        assert!(
            subdomain < self.size(),
            "{ID}.local_view: subdomain {subdomain} out of range (size {})",
            self.size()
        );
        Arc::clone(&self.local_views[subdomain])
    }

    pub fn get_local_view(&self, subdomain: SubdomainId) -> Option<&Arc<LocalMeshView<G>>> {
        self.local_views.get(subdomain)
    }

    /// All views in subdomain order; empty until finalized.
    pub fn local_views(&self) -> &[Arc<LocalMeshView<G>>] {
        &self.local_views
    }
}

/// `(geometry, global index)` of `entity` followed by those of its
/// sub-entities for every codimension `1..=dim`.
fn collect_closure_pairs<G: GridView>(
    view: &G,
    entity: G::Entity,
) -> Result<Vec<(GeometryType, GlobalIndex)>, MultiscaleError> {
    let mut pairs = vec![(view.geometry_type(entity)?, view.global_index(entity)?)];
    for codim in 1..=view.dimension() {
        let count = view.sub_entity_count(entity, codim)?;
        pairs.reserve(count);
        for i in 0..count {
            let sub = view.sub_entity(entity, codim, i)?;
            pairs.push((view.geometry_type(sub)?, view.global_index(sub)?));
        }
    }
    Ok(pairs)
}
