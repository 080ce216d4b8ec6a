//! `PointId`: a strong, zero-cost handle for mesh entities
//!
//! Every element of the grid (cell, face, edge, vertex) is represented by a
//! unique, opaque identifier. `PointId` wraps a nonzero `u64` so that 0 stays
//! reserved as an invalid or sentinel value.

use crate::mesh_error::MultiscaleError;
use std::{fmt, num::NonZeroU64};

/// Opaque identifier of a sieve point.
///
/// # Memory layout
/// This type is `repr(transparent)` over `NonZeroU64`, so `Option<PointId>`
/// is the size of a `u64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct PointId(NonZeroU64);

impl PointId {
    /// Creates a new `PointId` from a raw `u64` value.
    ///
    /// # Errors
    /// Returns [`MultiscaleError::InvalidPointId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mesh_multiscale::topology::point::PointId;
    /// let p = PointId::new(1).unwrap();
    /// assert_eq!(p.get(), 1);
    /// assert!(PointId::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, MultiscaleError> {
        NonZeroU64::new(raw)
            .map(PointId)
            .ok_or(MultiscaleError::InvalidPointId)
    }

    /// Returns the inner `u64` value of this `PointId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointId").field(&self.get()).finish()
    }
}

/// Prints only the raw integer.
impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zero_is_rejected() {
        assert_eq!(PointId::new(0), Err(MultiscaleError::InvalidPointId));
    }

    #[test]
    fn new_and_get() {
        let p = PointId::new(42).unwrap();
        assert_eq!(p.get(), 42);
    }

    #[test]
    fn debug_and_display() {
        let p = PointId::new(7).unwrap();
        assert_eq!(format!("{:?}", p), "PointId(7)");
        assert_eq!(format!("{}", p), "7");
    }

    #[test]
    fn ordering_follows_raw_value() {
        let a = PointId::new(1).unwrap();
        let b = PointId::new(2).unwrap();
        assert!(a < b);
        let max = PointId::new(u64::MAX).unwrap();
        assert!(b < max);
    }

    #[test]
    fn json_roundtrip() {
        let p = PointId::new(123).unwrap();
        let s = serde_json::to_string(&p).unwrap();
        assert_eq!(s, "123");
        let p2: PointId = serde_json::from_str(&s).unwrap();
        assert_eq!(p2, p);
    }
}
