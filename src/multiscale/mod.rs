//! Subdomain decomposition of a grid view.
//!
//! Cells are assigned to subdomains with [`Decomposition::add`]; each
//! subdomain numbers the cells and sub-entities it receives densely per
//! geometry type. After [`Decomposition::finalize`] every subdomain is
//! available as a [`LocalMeshView`] sharing the global view.

pub mod decomposition;
pub mod diagnostics;
pub mod local_map;
pub mod local_view;
pub mod options;
pub mod registry;

pub use decomposition::Decomposition;
pub use diagnostics::{DiagnosticSink, LogSink, MemorySink};
pub use local_map::{GeometryIndexedLocalMap, LocalIndex};
pub use local_view::LocalMeshView;
pub use options::DecompositionOptions;
pub use registry::{SubdomainId, SubdomainRegistry};
