//! Strata computation utilities for sieves.
//!
//! [`StrataCache`] stores precomputed height, depth and strata for every point
//! of a sieve; [`compute_strata`] builds it.
//!
//! # Errors
//! * [`MultiscaleError::MissingPointInCone`]: an arrow references a point not
//!   present in `base_points ∪ cap_points`.
//! * [`MultiscaleError::CycleDetected`]: the topology contains a cycle.

use crate::mesh_error::MultiscaleError;
use crate::topology::bounds::PointLike;
use crate::topology::sieve::Sieve;
use std::collections::{HashMap, HashSet};

/// Precomputed stratum information for a sieve.
#[derive(Clone, Debug)]
pub struct StrataCache<P> {
    /// Distance from any zero-in-degree source (cells) to the point.
    pub height: HashMap<P, u32>,
    /// Distance from the point down to any zero-out-degree sink (vertices).
    pub depth: HashMap<P, u32>,
    /// `strata[h]` = points at height `h`, sorted.
    pub strata: Vec<Vec<P>>,
    /// Maximum height.
    pub diameter: u32,
}

impl<P: PointLike> StrataCache<P> {
    /// Points at depth `d`, sorted.
    pub fn depth_stratum(&self, d: u32) -> Vec<P> {
        let mut pts: Vec<P> = self
            .depth
            .iter()
            .filter_map(|(&p, &k)| (k == d).then_some(p))
            .collect();
        pts.sort_unstable();
        pts
    }
}

/// Compute strata information on-the-fly (no cache).
///
/// ## Complexity
/// **O(|V| + |E|)**: Kahn topological sort followed by forward/backward passes.
pub fn compute_strata<S>(s: &S) -> Result<StrataCache<S::Point>, MultiscaleError>
where
    S: Sieve,
{
    // Authoritative vertex set: V = base ∪ cap
    let mut in_deg: HashMap<S::Point, u32> = HashMap::new();
    for p in s.base_points().chain(s.cap_points()) {
        in_deg.entry(p).or_insert(0);
    }

    let mut missing: HashSet<S::Point> = HashSet::new();
    let sources: Vec<_> = in_deg.keys().copied().collect();
    for p in sources {
        for (q, _) in s.cone(p) {
            if let Some(d) = in_deg.get_mut(&q) {
                *d += 1;
            } else {
                missing.insert(q);
            }
        }
    }
    if !missing.is_empty() {
        let mut examples: Vec<_> = missing.iter().copied().collect();
        examples.sort_unstable();
        examples.truncate(8);
        return Err(MultiscaleError::MissingPointInCone(format!(
            "{examples:?} ({} missing total)",
            missing.len()
        )));
    }

    let mut stack: Vec<_> = in_deg
        .iter()
        .filter_map(|(&p, &d)| (d == 0).then_some(p))
        .collect();
    let mut topo = Vec::with_capacity(in_deg.len());
    while let Some(p) = stack.pop() {
        topo.push(p);
        for (q, _) in s.cone(p) {
            if let Some(d) = in_deg.get_mut(&q) {
                *d -= 1;
                if *d == 0 {
                    stack.push(q);
                }
            }
        }
    }
    if topo.len() != in_deg.len() {
        return Err(MultiscaleError::CycleDetected);
    }

    let mut height = HashMap::with_capacity(topo.len());
    for &p in &topo {
        let h = s
            .support(p)
            .map(|(pred, _)| height.get(&pred).copied().unwrap_or(0))
            .max()
            .map_or(0, |m| m + 1);
        height.insert(p, h);
    }
    let diameter = height.values().copied().max().unwrap_or(0);
    let mut strata = vec![Vec::new(); diameter as usize + 1];
    for (&p, &h) in &height {
        strata[h as usize].push(p);
    }
    for lev in &mut strata {
        lev.sort_unstable();
    }

    let mut depth = HashMap::with_capacity(topo.len());
    for &p in topo.iter().rev() {
        let d = s
            .cone(p)
            .map(|(succ, _)| depth.get(&succ).copied().unwrap_or(0))
            .max()
            .map_or(0, |m| m + 1);
        depth.insert(p, d);
    }

    Ok(StrataCache {
        height,
        depth,
        strata,
        diameter,
    })
}
