//! Collection of per-subdomain local maps.

use super::local_map::GeometryIndexedLocalMap;
use crate::mesh_error::MultiscaleError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Caller-supplied subdomain identifier.
pub type SubdomainId = usize;

/// One [`GeometryIndexedLocalMap`] per subdomain id seen so far.
///
/// Ids may arrive in any order while building; only
/// [`validate_consecutive`](Self::validate_consecutive) insists that they form
/// `0..size`. Maps are held behind `Arc` so finalized views can share them
/// without copying; while building, the registry is their only owner.
#[derive(Clone, Debug, Default)]
pub struct SubdomainRegistry {
    maps: BTreeMap<SubdomainId, Arc<GeometryIndexedLocalMap>>,
}

impl SubdomainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct subdomain ids registered.
    #[inline]
    pub fn size(&self) -> usize {
        self.maps.len()
    }

    #[inline]
    pub fn contains(&self, id: SubdomainId) -> bool {
        self.maps.contains_key(&id)
    }

    /// Map of `id`, created empty on first use.
    pub fn entry(&mut self, id: SubdomainId) -> &mut GeometryIndexedLocalMap {
        Arc::make_mut(self.maps.entry(id).or_default())
    }

    pub fn get(&self, id: SubdomainId) -> Option<&Arc<GeometryIndexedLocalMap>> {
        self.maps.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = SubdomainId> + '_ {
        self.maps.keys().copied()
    }

    /// Maps in increasing id order.
    pub fn iter(&self) -> impl Iterator<Item = (SubdomainId, &Arc<GeometryIndexedLocalMap>)> {
        self.maps.iter().map(|(&id, map)| (id, map))
    }

    /// Ids in `0..size` that were never registered.
    pub fn missing_ids(&self) -> Vec<SubdomainId> {
        (0..self.size()).filter(|id| !self.contains(*id)).collect()
    }

    /// Check that the registered ids are exactly `0..size`.
    ///
    /// Since `size` counts distinct ids, this holds iff no id in `0..size`
    /// is missing.
    pub fn validate_consecutive(&self) -> Result<(), MultiscaleError> {
        let missing = self.missing_ids();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MultiscaleError::InvalidConfiguration {
                size: self.size(),
                missing,
            })
        }
    }
}
