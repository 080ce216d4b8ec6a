//! In-memory implementation of the [`Sieve`] trait.
//!
//! [`InMemorySieve`] stores mirrored outgoing/incoming adjacency lists in hash
//! maps and lazily caches its strata.

use super::sieve_trait::Sieve;
use super::strata::{StrataCache, compute_strata};
use crate::mesh_error::MultiscaleError;
use crate::topology::bounds::PointLike;
use crate::topology::cache::InvalidateCache;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// An in-memory sieve using hash maps for adjacency storage.
///
/// # Type Parameters
/// - `P`: The type of points in the sieve.
/// - `T`: The type of payloads associated with arrows. Defaults to `()`.
#[derive(Clone, Debug)]
pub struct InMemorySieve<P, T = ()>
where
    P: PointLike,
{
    /// Outgoing adjacency: maps each point to its (destination, payload) pairs.
    pub adjacency_out: HashMap<P, Vec<(P, T)>>,
    /// Incoming adjacency: maps each point to its (source, payload) pairs.
    pub adjacency_in: HashMap<P, Vec<(P, T)>>,
    strata: OnceCell<StrataCache<P>>,
}

impl<P: PointLike, T> Default for InMemorySieve<P, T> {
    fn default() -> Self {
        Self {
            adjacency_out: HashMap::new(),
            adjacency_in: HashMap::new(),
            strata: OnceCell::new(),
        }
    }
}

impl<P: PointLike, T: Clone> InMemorySieve<P, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an `InMemorySieve` from an iterator of arrows.
    ///
    /// # Example
    /// ```rust
    /// use mesh_multiscale::topology::sieve::{InMemorySieve, Sieve};
    /// let sieve = InMemorySieve::from_arrows(vec![(1u32, 2, ()), (1, 3, ())]);
    /// assert_eq!(sieve.cone(1).count(), 2);
    /// ```
    pub fn from_arrows<I: IntoIterator<Item = (P, P, T)>>(arrows: I) -> Self {
        let mut sieve = Self::default();
        for (src, dst, payload) in arrows {
            sieve.add_arrow(src, dst, payload);
        }
        sieve
    }

    /// Insert a point with empty cone and support.
    pub fn add_point(&mut self, p: P) {
        self.adjacency_out.entry(p).or_default();
        self.adjacency_in.entry(p).or_default();
        self.invalidate_cache();
    }

    #[inline]
    pub fn has_arrow(&self, src: P, dst: P) -> bool {
        self.adjacency_out
            .get(&src)
            .is_some_and(|v| v.iter().any(|(d, _)| *d == dst))
    }

    /// Height/depth strata, computed on first use and cached until the next mutation.
    #[inline]
    pub fn strata_cache(&self) -> Result<&StrataCache<P>, MultiscaleError> {
        self.strata.get_or_try_init(|| compute_strata(self))
    }

    /// Sort adjacency lists in-place for deterministic neighbor order.
    pub fn sort_adjacency(&mut self) {
        for outs in self.adjacency_out.values_mut() {
            outs.sort_unstable_by_key(|(dst, _)| *dst);
        }
        for ins in self.adjacency_in.values_mut() {
            ins.sort_unstable_by_key(|(src, _)| *src);
        }
    }

    /// Every outgoing arrow has its incoming mirror.
    #[cfg(any(debug_assertions, feature = "check-invariants"))]
    fn debug_assert_consistent(&self) {
        for (src, outs) in &self.adjacency_out {
            for (dst, _) in outs {
                let ok = self
                    .adjacency_in
                    .get(dst)
                    .is_some_and(|ins| ins.iter().any(|(s, _)| s == src));
                assert!(
                    ok,
                    "Missing mirror in[{dst:?}] for out edge ({src:?} -> {dst:?})"
                );
            }
        }
    }
}

impl<P: PointLike, T> InvalidateCache for InMemorySieve<P, T> {
    #[inline]
    fn invalidate_cache(&mut self) {
        self.strata.take();
    }
}

type ConeRefMapIter<'a, P, T> =
    std::iter::Map<std::slice::Iter<'a, (P, T)>, fn(&'a (P, T)) -> (P, &'a T)>;

fn arrow_ref<P: Copy, T>((p, pay): &(P, T)) -> (P, &T) {
    (*p, pay)
}

impl<P: PointLike, T: Clone> Sieve for InMemorySieve<P, T> {
    type Point = P;
    type Payload = T;
    type ConeIter<'a>
        = ConeRefMapIter<'a, P, T>
    where
        Self: 'a;
    type SupportIter<'a>
        = ConeRefMapIter<'a, P, T>
    where
        Self: 'a;

    /// # Example
    /// ```rust
    /// use mesh_multiscale::topology::sieve::{InMemorySieve, Sieve};
    /// let mut s = InMemorySieve::<u32, ()>::new();
    /// s.add_arrow(1, 2, ());
    /// let cone: Vec<_> = s.cone(1).map(|(d, _)| d).collect();
    /// assert_eq!(cone, vec![2]);
    /// ```
    fn cone<'a>(&'a self, p: P) -> Self::ConeIter<'a> {
        let f: fn(&'a (P, T)) -> (P, &'a T) = arrow_ref::<P, T>;
        self.adjacency_out
            .get(&p)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(f)
    }

    fn support<'a>(&'a self, p: P) -> Self::SupportIter<'a> {
        let f: fn(&'a (P, T)) -> (P, &'a T) = arrow_ref::<P, T>;
        self.adjacency_in
            .get(&p)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(f)
    }

    fn add_arrow(&mut self, src: P, dst: P, payload: T) {
        let outs = self.adjacency_out.entry(src).or_default();
        if let Some(slot) = outs.iter_mut().find(|(d, _)| *d == dst) {
            slot.1 = payload.clone();
        } else {
            outs.push((dst, payload.clone()));
        }

        let ins = self.adjacency_in.entry(dst).or_default();
        if let Some(slot) = ins.iter_mut().find(|(s, _)| *s == src) {
            slot.1 = payload;
        } else {
            ins.push((src, payload));
        }

        self.invalidate_cache();

        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_consistent();
    }

    fn remove_arrow(&mut self, src: P, dst: P) -> Option<T> {
        let mut removed = None;
        if let Some(v) = self.adjacency_out.get_mut(&src) {
            if let Some(pos) = v.iter().position(|(d, _)| *d == dst) {
                removed = Some(v.remove(pos).1);
            }
        }
        if let Some(v) = self.adjacency_in.get_mut(&dst) {
            if let Some(pos) = v.iter().position(|(s, _)| *s == src) {
                v.remove(pos);
            }
        }
        self.invalidate_cache();
        removed
    }

    fn base_points<'a>(&'a self) -> Box<dyn Iterator<Item = P> + 'a> {
        Box::new(self.adjacency_out.keys().copied())
    }

    fn cap_points<'a>(&'a self) -> Box<dyn Iterator<Item = P> + 'a> {
        Box::new(self.adjacency_in.keys().copied())
    }
}
