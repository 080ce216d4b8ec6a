//! MultiscaleError: unified error type for mesh-multiscale public APIs
//!
//! Grid construction, global-view lookups and decomposition finalization all
//! report through this type. Precondition violations (using the decomposition
//! in the wrong phase) are not represented here; they panic.

use crate::topology::geometry_type::GeometryType;
use crate::topology::point::PointId;
use thiserror::Error;

/// Unified error type for mesh-multiscale operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MultiscaleError {
    /// Attempted to construct a PointId with a zero value (invalid).
    #[error("PointId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidPointId,
    /// A point appeared in a cone but wasn't in the point set.
    #[error("Topology error: point `{0}` found in cone but not in point set")]
    MissingPointInCone(String),
    /// The mesh topology contains a cycle; expected a DAG.
    #[error("Topology error: cycle detected in mesh (expected DAG)")]
    CycleDetected,
    /// Cell connectivity handed to the grid builder is malformed.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    /// The sieve depth of a point disagrees with the dimension of its geometry type.
    #[error("point {point} has geometry {expected} but sits at depth {found} of the sieve")]
    GeometryMismatch {
        point: PointId,
        expected: GeometryType,
        found: u32,
    },
    /// The entity is not part of the global grid view.
    #[error("entity {0} is not part of the grid")]
    UnknownEntity(PointId),
    /// Only codim-0 entities can be assigned to a subdomain.
    #[error("entity {entity} has codimension {codim}, expected a codim-0 entity")]
    NotACell { entity: String, codim: usize },
    /// Requested codimension is larger than the grid dimension.
    #[error("codimension {codim} is out of range for a grid of dimension {dimension}")]
    CodimOutOfRange { codim: usize, dimension: usize },
    /// Sub-entity index is past the number of sub-entities of that codimension.
    #[error("sub-entity {index} of codim {codim} requested on {point}, which has only {count}")]
    SubEntityOutOfRange {
        point: PointId,
        codim: usize,
        index: usize,
        count: usize,
    },
    /// Subdomain identifiers do not form the range `0..size` at finalize.
    #[error(
        "numbering of subdomains has to be consecutive upon calling finalize: \
         {size} subdomains registered, missing ids {missing:?}"
    )]
    InvalidConfiguration {
        size: usize,
        missing: Vec<usize>,
    },
}
