//! Mesh topology building blocks.
//!
//! This module provides the point, shape and incidence types the reference
//! grid is built from:
//! - [`point::PointId`] handles for mesh entities
//! - [`geometry_type::GeometryType`] shape classifiers and [`cell_type::CellType`] cell shapes
//! - the [`sieve::Sieve`] trait with its in-memory implementation and strata utilities

pub mod bounds;
pub mod cache;
pub mod cell_type;
pub mod geometry_type;
pub mod point;
pub mod sieve;

pub use cache::InvalidateCache;
pub use geometry_type::{BasicType, GeometryType};
