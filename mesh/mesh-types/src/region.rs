//! Region tags and the classification stage that assigns them.
//!
//! Every face carries a [`RegionTag`]. The parser always produces
//! [`RegionTag::SKIN`]; assigning anything else is the job of a
//! [`RegionClassifier`] run as a separate pass over a finished mesh.

use std::fmt;

use crate::FaceMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification tag attached to a face.
///
/// The value is opaque to this crate. Downstream consumers interpret it
/// (for example to color regions differently).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RegionTag(pub u32);

impl RegionTag {
    /// Default tag for every face; the consumer treats it as plain skin.
    pub const SKIN: Self = Self(0);
}

impl fmt::Display for RegionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post-processing stage that assigns a tag to each face of a mesh.
///
/// Implementations see the whole mesh so they can classify by position,
/// adjacency, or index ranges.
pub trait RegionClassifier {
    /// Tag for the face at `face_index` in `mesh`.
    fn classify(&self, mesh: &FaceMesh, face_index: usize) -> RegionTag;
}

/// Classifier that gives every face the same tag.
///
/// # Example
///
/// ```
/// use mesh_types::{FaceMesh, RegionClassifier, RegionTag, UniformRegion};
///
/// let classifier = UniformRegion::default();
/// let mesh = FaceMesh::new();
/// assert_eq!(classifier.classify(&mesh, 0), RegionTag::SKIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniformRegion(pub RegionTag);

impl RegionClassifier for UniformRegion {
    fn classify(&self, _mesh: &FaceMesh, _face_index: usize) -> RegionTag {
        self.0
    }
}

impl<F> RegionClassifier for F
where
    F: Fn(&FaceMesh, usize) -> RegionTag,
{
    fn classify(&self, mesh: &FaceMesh, face_index: usize) -> RegionTag {
        self(mesh, face_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TaggedFace, Vertex};

    fn two_faces() -> FaceMesh {
        FaceMesh::from_parts(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 1.0, 0.0),
                Vertex::from_coords(0.0, 1.0, 0.0),
            ],
            vec![TaggedFace::untagged([0, 1, 2]), TaggedFace::untagged([0, 2, 3])],
        )
    }

    #[test]
    fn default_tag_is_zero() {
        assert_eq!(RegionTag::default(), RegionTag::SKIN);
        assert_eq!(RegionTag::SKIN.0, 0);
        assert_eq!(RegionTag(3).to_string(), "3");
    }

    #[test]
    fn uniform_region_tags_every_face() {
        let mesh = two_faces();
        let classifier = UniformRegion(RegionTag(5));
        assert_eq!(classifier.classify(&mesh, 0), RegionTag(5));
        assert_eq!(classifier.classify(&mesh, 1), RegionTag(5));
    }

    #[test]
    fn closures_are_classifiers() {
        let mesh = two_faces();
        let by_parity = |_: &FaceMesh, i: usize| RegionTag(u32::from(i % 2 == 1));
        assert_eq!(by_parity.classify(&mesh, 0), RegionTag(0));
        assert_eq!(by_parity.classify(&mesh, 1), RegionTag(1));
    }
}
