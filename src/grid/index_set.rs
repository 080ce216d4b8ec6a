//! Leaf index set: dense per-geometry-type numbering of all grid entities.

use super::GlobalIndex;
use crate::topology::geometry_type::GeometryType;
use crate::topology::point::PointId;
use std::collections::{BTreeMap, HashMap};

/// Assigns every entity an index that is dense and zero-based within its
/// geometry type. Entities are numbered in ascending `PointId` order.
#[derive(Clone, Debug, Default)]
pub struct IndexSet {
    index: HashMap<PointId, GlobalIndex>,
    sizes: BTreeMap<GeometryType, usize>,
    codim_sizes: Vec<usize>,
}

impl IndexSet {
    /// Build from the per-codimension entity lists (each sorted).
    pub(crate) fn build(
        codim_entities: &[Vec<PointId>],
        geometry: &HashMap<PointId, GeometryType>,
    ) -> Self {
        let mut set = IndexSet {
            codim_sizes: codim_entities.iter().map(Vec::len).collect(),
            ..Default::default()
        };
        for &p in codim_entities.iter().flatten() {
            let Some(&gt) = geometry.get(&p) else { continue };
            let next = set.sizes.entry(gt).or_insert(0);
            set.index.insert(p, *next);
            *next += 1;
        }
        set
    }

    #[inline]
    pub fn index(&self, p: PointId) -> Option<GlobalIndex> {
        self.index.get(&p).copied()
    }

    #[inline]
    pub fn contains(&self, p: PointId) -> bool {
        self.index.contains_key(&p)
    }

    /// Number of entities of the given geometry type.
    pub fn size_of(&self, geometry: GeometryType) -> usize {
        self.sizes.get(&geometry).copied().unwrap_or(0)
    }

    /// Number of entities of the given codimension.
    pub fn size(&self, codim: usize) -> usize {
        self.codim_sizes.get(codim).copied().unwrap_or(0)
    }

    /// Geometry types present in the grid, in ascending order.
    pub fn geometry_types(&self) -> impl Iterator<Item = GeometryType> + '_ {
        self.sizes.keys().copied()
    }
}
