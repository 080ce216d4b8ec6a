//! Common bound aliases used across topology code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds implements them automatically.

/// Canonical bound set for point identifiers.
///
/// - `Copy` for cheap pass-by-value in tight loops
/// - `Eq + Hash` for `HashMap`-backed adjacencies
/// - `Ord` to allow deterministic ordering (sort strata/neighbors)
/// - `Debug` for diagnostics and invariant checks
pub trait PointLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> PointLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
