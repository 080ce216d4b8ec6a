//! Per-subdomain numbering: geometry type → global index → local index.

use super::diagnostics::Diagnostics;
use crate::grid::GlobalIndex;
use crate::topology::geometry_type::GeometryType;
use std::collections::BTreeMap;

/// Subdomain-and-geometry-type scoped index, dense and zero-based.
pub type LocalIndex = usize;

/// Local numbering of one subdomain.
///
/// Every geometry type has its own bucket. Inside a bucket, local indices are
/// handed out in first-registration order as `0, 1, 2, ...`; a pair that was
/// registered once keeps its local index forever.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeometryIndexedLocalMap {
    buckets: BTreeMap<GeometryType, BTreeMap<GlobalIndex, LocalIndex>>,
}

impl GeometryIndexedLocalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `(geometry, global)`, returning its local index and whether it
    /// was newly inserted. Re-registration is a no-op.
    pub fn insert(&mut self, geometry: GeometryType, global: GlobalIndex) -> (LocalIndex, bool) {
        let bucket = self.buckets.entry(geometry).or_default();
        if let Some(&local) = bucket.get(&global) {
            return (local, false);
        }
        let local = bucket.len();
        bucket.insert(global, local);
        (local, true)
    }

    /// [`insert`](Self::insert) plus a diagnostic line for new entries.
    pub(crate) fn add_geometry_and_index(
        &mut self,
        geometry: GeometryType,
        global: GlobalIndex,
        diag: &Diagnostics<'_>,
    ) -> LocalIndex {
        let (local, inserted) = self.insert(geometry, global);
        if inserted {
            diag.line(format_args!(
                "- added {geometry} with global index {global} and local index {local}"
            ));
        }
        local
    }

    #[inline]
    pub fn local_index(&self, geometry: GeometryType, global: GlobalIndex) -> Option<LocalIndex> {
        self.buckets.get(&geometry)?.get(&global).copied()
    }

    #[inline]
    pub fn contains(&self, geometry: GeometryType, global: GlobalIndex) -> bool {
        self.local_index(geometry, global).is_some()
    }

    pub fn bucket(&self, geometry: GeometryType) -> Option<&BTreeMap<GlobalIndex, LocalIndex>> {
        self.buckets.get(&geometry)
    }

    pub fn bucket_len(&self, geometry: GeometryType) -> usize {
        self.buckets.get(&geometry).map_or(0, BTreeMap::len)
    }

    pub fn geometry_types(&self) -> impl Iterator<Item = GeometryType> + '_ {
        self.buckets.keys().copied()
    }

    /// Total number of registered entities over all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registered entities whose geometry has dimension `dim`.
    pub fn count_of_dimension(&self, dim: usize) -> usize {
        self.buckets
            .iter()
            .filter(|(gt, _)| gt.dim() == dim)
            .map(|(_, bucket)| bucket.len())
            .sum()
    }

    /// `(geometry, global, local)` triples, ordered by geometry then global index.
    pub fn iter(&self) -> impl Iterator<Item = (GeometryType, GlobalIndex, LocalIndex)> + '_ {
        self.buckets.iter().flat_map(|(&gt, bucket)| {
            bucket
                .iter()
                .map(move |(&global, &local)| (gt, global, local))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multiscale::diagnostics::{DiagnosticSink, MemorySink};

    #[test]
    fn local_indices_follow_first_registration() {
        let mut map = GeometryIndexedLocalMap::new();
        assert_eq!(map.insert(GeometryType::LINE, 40), (0, true));
        assert_eq!(map.insert(GeometryType::LINE, 7), (1, true));
        assert_eq!(map.insert(GeometryType::LINE, 40), (0, false));
        assert_eq!(map.insert(GeometryType::VERTEX, 7), (0, true));
        assert_eq!(map.local_index(GeometryType::LINE, 7), Some(1));
        assert_eq!(map.local_index(GeometryType::TRIANGLE, 7), None);
        assert_eq!(map.len(), 3);
        assert_eq!(map.bucket_len(GeometryType::LINE), 2);
        assert_eq!(map.count_of_dimension(0), 1);
    }

    #[test]
    fn buckets_are_independent_per_geometry() {
        let mut map = GeometryIndexedLocalMap::new();
        map.insert(GeometryType::TRIANGLE, 3);
        map.insert(GeometryType::QUADRILATERAL, 3);
        assert_eq!(map.local_index(GeometryType::TRIANGLE, 3), Some(0));
        assert_eq!(map.local_index(GeometryType::QUADRILATERAL, 3), Some(0));
        assert_eq!(map.count_of_dimension(2), 2);
        let types: Vec<_> = map.geometry_types().collect();
        assert_eq!(types, vec![GeometryType::TRIANGLE, GeometryType::QUADRILATERAL]);
    }

    #[test]
    fn iteration_is_ordered() {
        let mut map = GeometryIndexedLocalMap::new();
        map.insert(GeometryType::LINE, 9);
        map.insert(GeometryType::LINE, 2);
        map.insert(GeometryType::VERTEX, 5);
        let triples: Vec<_> = map.iter().collect();
        assert_eq!(
            triples,
            vec![
                (GeometryType::VERTEX, 5, 0),
                (GeometryType::LINE, 2, 1),
                (GeometryType::LINE, 9, 0),
            ]
        );
    }

    #[test]
    fn only_new_entries_are_reported() {
        let sink = MemorySink::new();
        let diag = Diagnostics::new(Some(&sink as &dyn DiagnosticSink), "");
        let mut map = GeometryIndexedLocalMap::new();
        map.add_geometry_and_index(GeometryType::TRIANGLE, 4, &diag);
        map.add_geometry_and_index(GeometryType::TRIANGLE, 4, &diag);
        assert_eq!(
            sink.lines(),
            vec!["- added (simplex, 2) with global index 4 and local index 0".to_string()]
        );
    }
}
