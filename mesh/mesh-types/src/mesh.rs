//! Vertex and face sequences forming one exported mesh.

use crate::{Aabb, MeshBounds, MeshTopology, RegionClassifier, TaggedFace, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle mesh as two ordered sequences.
///
/// `vertices[i]` is vertex `i`; every face references vertices by that
/// index. Both sequences keep the order in which records appeared in the
/// source text, and the mesh is treated as read-only once built.
///
/// Index validity (`index < vertex_count`) is a property of the source file
/// and is not enforced here. Use [`FaceMesh::dangling_faces`] to inspect it.
///
/// # Example
///
/// ```
/// use mesh_types::{FaceMesh, MeshTopology, TaggedFace, Vertex};
///
/// let mesh = FaceMesh::from_parts(
///     vec![
///         Vertex::from_coords(0.0, 0.0, 0.0),
///         Vertex::from_coords(1.0, 0.0, 0.0),
///         Vertex::from_coords(0.0, 1.0, 0.0),
///     ],
///     vec![TaggedFace::untagged([0, 1, 2])],
/// );
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceMesh {
    /// Vertex positions in source order.
    pub vertices: Vec<Vertex>,

    /// Triangles in source order, quads already split.
    pub faces: Vec<TaggedFace>,
}

impl FaceMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<TaggedFace>) -> Self {
        Self { vertices, faces }
    }

    /// Build a new mesh whose faces are tagged by `classifier`.
    ///
    /// Vertices and face indices are copied unchanged; only tags differ.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{FaceMesh, RegionTag, TaggedFace, UniformRegion, Vertex};
    ///
    /// let mesh = FaceMesh::from_parts(
    ///     vec![Vertex::from_coords(0.0, 0.0, 0.0); 3],
    ///     vec![TaggedFace::untagged([0, 1, 2])],
    /// );
    /// let tagged = mesh.retagged(&UniformRegion(RegionTag(4)));
    /// assert_eq!(tagged.faces[0].to_array(), [0, 1, 2, 4]);
    /// ```
    #[must_use]
    pub fn retagged<C: RegionClassifier + ?Sized>(&self, classifier: &C) -> Self {
        let faces = self
            .faces
            .iter()
            .enumerate()
            .map(|(i, face)| face.with_tag(classifier.classify(self, i)))
            .collect();
        Self::from_parts(self.vertices.clone(), faces)
    }

    /// Number of faces referencing a vertex index that does not exist.
    #[must_use]
    pub fn dangling_faces(&self) -> usize {
        let count = self.vertices.len();
        self.faces
            .iter()
            .filter(|f| usize::try_from(f.max_index()).ok().is_none_or(|i| i >= count))
            .count()
    }
}

impl MeshTopology for FaceMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    #[inline]
    fn face(&self, index: usize) -> Option<&TaggedFace> {
        self.faces.get(index)
    }
}

impl MeshBounds for FaceMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}
