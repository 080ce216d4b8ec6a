//! Core trait for sieve data structures in mesh topology.
//!
//! This module defines the [`Sieve`] trait, a bidirectional incidence API for
//! representing a mesh as a directed acyclic graph of points
//! (cell → face → edge → vertex).

use crate::topology::bounds::PointLike;
use crate::topology::cache::InvalidateCache;
use std::collections::HashSet;

/// Core bidirectional incidence API for mesh topology.
///
/// # Associated Types
/// - `Point`: The type of points in the sieve.
/// - `Payload`: The type of payloads associated with arrows.
/// - `ConeIter`: Iterator over outgoing arrows from a point.
/// - `SupportIter`: Iterator over incoming arrows to a point.
pub trait Sieve: Default + InvalidateCache {
    type Point: PointLike;
    type Payload;

    type ConeIter<'a>: Iterator<Item = (Self::Point, &'a Self::Payload)>
    where
        Self: 'a;
    type SupportIter<'a>: Iterator<Item = (Self::Point, &'a Self::Payload)>
    where
        Self: 'a;

    /// Outgoing arrows from `p`.
    fn cone<'a>(&'a self, p: Self::Point) -> Self::ConeIter<'a>;
    /// Incoming arrows to `p`.
    fn support<'a>(&'a self, p: Self::Point) -> Self::SupportIter<'a>;

    /// Insert arrow `src → dst`, replacing the payload of an existing arrow.
    fn add_arrow(&mut self, src: Self::Point, dst: Self::Point, payload: Self::Payload);
    /// Remove arrow `src → dst`, returning its payload.
    fn remove_arrow(&mut self, src: Self::Point, dst: Self::Point) -> Option<Self::Payload>;

    /// All "base" points (with an outgoing role).
    fn base_points<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Point> + 'a>;
    /// All "cap" points (with an incoming role).
    fn cap_points<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Point> + 'a>;

    /// Every point in the domain, base or cap, without duplicates.
    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Point> + 'a> {
        let mut seen = HashSet::new();
        let all: Vec<_> = self
            .base_points()
            .chain(self.cap_points())
            .filter(|p| seen.insert(*p))
            .collect();
        Box::new(all.into_iter())
    }

    /// Destination points of the cone of `p`.
    fn cone_points<'a>(&'a self, p: Self::Point) -> Box<dyn Iterator<Item = Self::Point> + 'a> {
        Box::new(self.cone(p).map(|(q, _)| q))
    }

    /// Source points of the support of `p`.
    fn support_points<'a>(&'a self, p: Self::Point) -> Box<dyn Iterator<Item = Self::Point> + 'a> {
        Box::new(self.support(p).map(|(q, _)| q))
    }

    /// Transitive cone of `seeds`, seeds included. Order is unspecified.
    fn closure<'s, I>(&'s self, seeds: I) -> Box<dyn Iterator<Item = Self::Point> + 's>
    where
        I: IntoIterator<Item = Self::Point>,
    {
        let mut stack: Vec<_> = seeds.into_iter().collect();
        let mut seen: HashSet<Self::Point> = stack.iter().copied().collect();
        Box::new(std::iter::from_fn(move || {
            let p = stack.pop()?;
            for (q, _) in self.cone(p) {
                if seen.insert(q) {
                    stack.push(q);
                }
            }
            Some(p)
        }))
    }

    /// Transitive support of `seeds`, seeds included. Order is unspecified.
    fn star<'s, I>(&'s self, seeds: I) -> Box<dyn Iterator<Item = Self::Point> + 's>
    where
        I: IntoIterator<Item = Self::Point>,
    {
        let mut stack: Vec<_> = seeds.into_iter().collect();
        let mut seen: HashSet<Self::Point> = stack.iter().copied().collect();
        Box::new(std::iter::from_fn(move || {
            let p = stack.pop()?;
            for (q, _) in self.support(p) {
                if seen.insert(q) {
                    stack.push(q);
                }
            }
            Some(p)
        }))
    }
}
