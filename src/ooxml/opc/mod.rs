/// Open Packaging Conventions (OPC) writing support.
///
/// The pieces of an OPC package that a generated document needs:
///
/// - Well-known names, content types and relationship types (`constants`)
/// - The `[Content_Types].xml` manifest (`content_types`)
/// - Relationship parts (`rel`)
/// - The ZIP container itself (`phys_pkg`)
pub mod constants;
pub mod content_types;
pub mod phys_pkg;
pub mod rel;

// Re-export commonly used types
pub use content_types::ContentTypes;
pub use phys_pkg::{Compression, PhysPkgWriter};
pub use rel::{RelId, Relationship, Relationships};
