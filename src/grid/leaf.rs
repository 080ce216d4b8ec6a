//! Sieve-backed leaf grid.
//!
//! A [`LeafGrid`] is a fully interpolated sieve (every cell reaches its faces,
//! edges and vertices through arrows) together with a geometry type per point.
//! The codimension of a point is `dimension - depth`, and the depth of every
//! point must agree with the dimension of its geometry type.

use super::index_set::IndexSet;
use super::{DEFAULT_BOUNDARY_ID, GlobalIndex, GridView, Intersection};
use crate::mesh_error::MultiscaleError;
use crate::topology::geometry_type::GeometryType;
use crate::topology::point::PointId;
use crate::topology::sieve::{InMemorySieve, Sieve};
use itertools::Itertools;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct LeafGrid {
    dimension: usize,
    sieve: InMemorySieve<PointId, ()>,
    geometry: HashMap<PointId, GeometryType>,
    codim_entities: Vec<Vec<PointId>>,
    index_set: IndexSet,
    boundary_ids: HashMap<PointId, i32>,
}

impl LeafGrid {
    /// Assemble a grid from an interpolated sieve.
    ///
    /// # Errors
    /// - topology errors from strata computation (cycles, dangling arrows);
    /// - [`MultiscaleError::InvalidGeometry`] if a point has no geometry type
    ///   or one of dimension larger than `dimension`;
    /// - [`MultiscaleError::GeometryMismatch`] if a point's sieve depth differs
    ///   from its geometry dimension.
    pub fn new(
        dimension: usize,
        mut sieve: InMemorySieve<PointId, ()>,
        geometry: HashMap<PointId, GeometryType>,
        boundary_ids: HashMap<PointId, i32>,
    ) -> Result<Self, MultiscaleError> {
        sieve.sort_adjacency();
        let mut codim_entities = vec![Vec::new(); dimension + 1];
        {
            let strata = sieve.strata_cache()?;
            for p in sieve.points().sorted() {
                let gt = *geometry.get(&p).ok_or_else(|| {
                    MultiscaleError::InvalidGeometry(format!("point {p} has no geometry type"))
                })?;
                if gt.dim() > dimension {
                    return Err(MultiscaleError::InvalidGeometry(format!(
                        "point {p} has geometry {gt} in a grid of dimension {dimension}"
                    )));
                }
                let depth = strata.depth.get(&p).copied().unwrap_or(0);
                if depth as usize != gt.dim() {
                    return Err(MultiscaleError::GeometryMismatch {
                        point: p,
                        expected: gt,
                        found: depth,
                    });
                }
                codim_entities[dimension - gt.dim()].push(p);
            }
        }
        let index_set = IndexSet::build(&codim_entities, &geometry);
        log::debug!(
            "leaf grid of dimension {dimension}: {:?} entities per codim",
            codim_entities.iter().map(Vec::len).collect::<Vec<_>>()
        );
        Ok(Self {
            dimension,
            sieve,
            geometry,
            codim_entities,
            index_set,
            boundary_ids,
        })
    }

    pub fn builder(dimension: usize) -> super::GridBuilder {
        super::GridBuilder::new(dimension)
    }

    #[inline]
    pub fn sieve(&self) -> &InMemorySieve<PointId, ()> {
        &self.sieve
    }

    #[inline]
    pub fn index_set(&self) -> &IndexSet {
        &self.index_set
    }

    /// Number of entities of the given codimension.
    pub fn size(&self, codim: usize) -> usize {
        self.index_set.size(codim)
    }

    fn ensure_known(&self, p: PointId) -> Result<GeometryType, MultiscaleError> {
        self.geometry
            .get(&p)
            .copied()
            .ok_or(MultiscaleError::UnknownEntity(p))
    }

    /// All sub-entities of `p` with grid codimension `codim`, sorted.
    pub fn sub_entities(&self, p: PointId, codim: usize) -> Result<Vec<PointId>, MultiscaleError> {
        let own_codim = self.codim(p)?;
        if codim > self.dimension {
            return Err(MultiscaleError::CodimOutOfRange {
                codim,
                dimension: self.dimension,
            });
        }
        if codim < own_codim {
            return Ok(Vec::new());
        }
        let target_dim = self.dimension - codim;
        Ok(self
            .sieve
            .closure([p])
            .filter(|q| self.geometry.get(q).is_some_and(|gt| gt.dim() == target_dim))
            .sorted()
            .collect())
    }
}

impl GridView for LeafGrid {
    type Entity = PointId;

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn entities<'a>(&'a self, codim: usize) -> Box<dyn Iterator<Item = PointId> + 'a> {
        match self.codim_entities.get(codim) {
            Some(list) => Box::new(list.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn codim(&self, entity: PointId) -> Result<usize, MultiscaleError> {
        Ok(self.dimension - self.ensure_known(entity)?.dim())
    }

    fn global_index(&self, entity: PointId) -> Result<GlobalIndex, MultiscaleError> {
        self.index_set
            .index(entity)
            .ok_or(MultiscaleError::UnknownEntity(entity))
    }

    fn geometry_type(&self, entity: PointId) -> Result<GeometryType, MultiscaleError> {
        self.ensure_known(entity)
    }

    fn sub_entity_count(&self, entity: PointId, codim: usize) -> Result<usize, MultiscaleError> {
        Ok(self.sub_entities(entity, codim)?.len())
    }

    fn sub_entity(
        &self,
        entity: PointId,
        codim: usize,
        i: usize,
    ) -> Result<PointId, MultiscaleError> {
        let subs = self.sub_entities(entity, codim)?;
        subs.get(i)
            .copied()
            .ok_or(MultiscaleError::SubEntityOutOfRange {
                point: entity,
                codim,
                index: i,
                count: subs.len(),
            })
    }

    fn intersections(
        &self,
        entity: PointId,
    ) -> Result<Vec<Intersection<PointId>>, MultiscaleError> {
        let codim = self.codim(entity)?;
        if codim != 0 {
            return Err(MultiscaleError::NotACell {
                entity: entity.to_string(),
                codim,
            });
        }
        let facets = self.sub_entities(entity, 1)?;
        let mut out = Vec::with_capacity(facets.len());
        for (index_in_inside, facet) in facets.into_iter().enumerate() {
            let outside = self
                .sieve
                .support_points(facet)
                .filter(|&q| q != entity && self.codim(q).is_ok_and(|c| c == 0))
                .min();
            let boundary_id = match outside {
                Some(_) => None,
                None => Some(
                    self.boundary_ids
                        .get(&facet)
                        .copied()
                        .unwrap_or(DEFAULT_BOUNDARY_ID),
                ),
            };
            out.push(Intersection {
                inside: entity,
                outside,
                facet,
                index_in_inside,
                boundary_id,
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(u: u64) -> PointId {
        PointId::new(u).unwrap()
    }

    /// Two segments 10 = [1,2] and 11 = [2,3].
    fn two_segments() -> LeafGrid {
        let mut sieve = InMemorySieve::<PointId, ()>::default();
        for (c, v) in [(10, 1), (10, 2), (11, 2), (11, 3)] {
            sieve.add_arrow(pid(c), pid(v), ());
        }
        let mut geometry = HashMap::new();
        for v in 1..=3 {
            geometry.insert(pid(v), GeometryType::VERTEX);
        }
        geometry.insert(pid(10), GeometryType::LINE);
        geometry.insert(pid(11), GeometryType::LINE);
        let mut boundary = HashMap::new();
        boundary.insert(pid(3), 7);
        LeafGrid::new(1, sieve, geometry, boundary).unwrap()
    }

    #[test]
    fn codims_and_indices() {
        let grid = two_segments();
        assert_eq!(grid.entities(0).collect::<Vec<_>>(), vec![pid(10), pid(11)]);
        assert_eq!(grid.entities(1).count(), 3);
        assert_eq!(grid.entities(2).count(), 0);
        assert_eq!(grid.codim(pid(2)).unwrap(), 1);
        assert_eq!(grid.global_index(pid(11)).unwrap(), 1);
        assert_eq!(grid.global_index(pid(3)).unwrap(), 2);
        assert_eq!(
            grid.global_index(pid(99)),
            Err(MultiscaleError::UnknownEntity(pid(99)))
        );
    }

    #[test]
    fn sub_entities_are_sorted_and_bounded() {
        let grid = two_segments();
        assert_eq!(grid.sub_entity_count(pid(11), 1).unwrap(), 2);
        assert_eq!(grid.sub_entity(pid(11), 1, 0).unwrap(), pid(2));
        assert_eq!(grid.sub_entity(pid(11), 0, 0).unwrap(), pid(11));
        assert!(matches!(
            grid.sub_entity(pid(11), 1, 2),
            Err(MultiscaleError::SubEntityOutOfRange { count: 2, .. })
        ));
        assert!(matches!(
            grid.sub_entity_count(pid(11), 2),
            Err(MultiscaleError::CodimOutOfRange { .. })
        ));
    }

    #[test]
    fn intersections_find_neighbours_and_boundary_ids() {
        let grid = two_segments();
        let is = grid.intersections(pid(11)).unwrap();
        assert_eq!(is.len(), 2);
        assert_eq!(is[0].facet, pid(2));
        assert_eq!(is[0].outside, Some(pid(10)));
        assert!(is[0].neighbor());
        assert_eq!(is[1].boundary_id, Some(7));
        let left = grid.intersections(pid(10)).unwrap();
        assert_eq!(left[0].boundary_id, Some(DEFAULT_BOUNDARY_ID));
        assert!(grid.intersections(pid(1)).is_err());
    }

    #[test]
    fn depth_must_match_geometry() {
        let mut sieve = InMemorySieve::<PointId, ()>::default();
        sieve.add_arrow(pid(10), pid(1), ());
        let mut geometry = HashMap::new();
        geometry.insert(pid(10), GeometryType::TRIANGLE);
        geometry.insert(pid(1), GeometryType::VERTEX);
        let err = LeafGrid::new(2, sieve, geometry, HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            MultiscaleError::GeometryMismatch {
                point: pid(10),
                expected: GeometryType::TRIANGLE,
                found: 1,
            }
        );
    }
}
