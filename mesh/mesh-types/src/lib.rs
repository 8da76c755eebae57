//! Core mesh types for face mesh export.
//!
//! This crate provides the data model shared by the parser and the
//! serializer:
//!
//! - [`Vertex`] - A point in 3D space, identified by its index
//! - [`TaggedFace`] - A triangle as three vertex indices plus a [`RegionTag`]
//! - [`FaceMesh`] - The vertex sequence paired with the face sequence
//! - [`Aabb`] - Axis-aligned bounding box of the vertex cloud
//! - [`RegionClassifier`] - Pluggable stage that assigns region tags
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero I/O**. It knows nothing about file
//! formats or networks.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64` and are
//! passed through exactly as they appear in the source mesh; no scaling or
//! normalization is applied.
//!
//! # Indexing
//!
//! All face indices are **zero-based** offsets into the vertex sequence.
//! Conversion from one-based source references happens exactly once, in the
//! parser.
//!
//! # Example
//!
//! ```
//! use mesh_types::{FaceMesh, MeshTopology, RegionTag, TaggedFace, Vertex};
//!
//! let mesh = FaceMesh::from_parts(
//!     vec![
//!         Vertex::from_coords(0.0, 0.0, 0.0),
//!         Vertex::from_coords(1.0, 0.0, 0.0),
//!         Vertex::from_coords(0.0, 1.0, 0.0),
//!     ],
//!     vec![TaggedFace::new([0, 1, 2], RegionTag::SKIN)],
//! );
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod face;
mod mesh;
mod region;
mod traits;
mod vertex;

pub use bounds::Aabb;
pub use face::TaggedFace;
pub use mesh::FaceMesh;
pub use region::{RegionClassifier, RegionTag, UniformRegion};
pub use traits::{MeshBounds, MeshTopology};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
