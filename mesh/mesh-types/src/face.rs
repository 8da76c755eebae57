//! Tagged triangle faces.

use crate::RegionTag;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle referencing three vertices by index, plus a region tag.
///
/// Indices are zero-based offsets into the owning mesh's vertex sequence.
/// Winding follows the source record: `indices[0] -> indices[1] -> indices[2]`.
///
/// The face is rendered downstream as the 4-tuple `[a, b, c, tag]`.
///
/// # Example
///
/// ```
/// use mesh_types::{RegionTag, TaggedFace};
///
/// let face = TaggedFace::new([0, 1, 2], RegionTag::SKIN);
/// assert_eq!(face.to_array(), [0, 1, 2, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaggedFace {
    /// Vertex indices, zero-based.
    pub indices: [u32; 3],
    /// Region classification.
    pub tag: RegionTag,
}

impl TaggedFace {
    /// Create a face from indices and a tag.
    #[inline]
    #[must_use]
    pub const fn new(indices: [u32; 3], tag: RegionTag) -> Self {
        Self { indices, tag }
    }

    /// Create a face with the default [`RegionTag::SKIN`] tag.
    #[inline]
    #[must_use]
    pub const fn untagged(indices: [u32; 3]) -> Self {
        Self::new(indices, RegionTag::SKIN)
    }

    /// Return a copy of this face with a different tag.
    #[inline]
    #[must_use]
    pub const fn with_tag(self, tag: RegionTag) -> Self {
        Self::new(self.indices, tag)
    }

    /// Flatten to `[a, b, c, tag]`.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u32; 4] {
        [self.indices[0], self.indices[1], self.indices[2], self.tag.0]
    }

    /// Largest index referenced by this face.
    #[inline]
    #[must_use]
    pub fn max_index(&self) -> u32 {
        self.indices[0].max(self.indices[1]).max(self.indices[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_uses_skin() {
        let face = TaggedFace::untagged([3, 4, 5]);
        assert_eq!(face.tag, RegionTag::SKIN);
        assert_eq!(face.to_array(), [3, 4, 5, 0]);
    }

    #[test]
    fn with_tag_keeps_indices() {
        let face = TaggedFace::untagged([7, 1, 9]).with_tag(RegionTag(2));
        assert_eq!(face.indices, [7, 1, 9]);
        assert_eq!(face.to_array(), [7, 1, 9, 2]);
    }

    #[test]
    fn max_index() {
        assert_eq!(TaggedFace::untagged([7, 1, 9]).max_index(), 9);
        assert_eq!(TaggedFace::untagged([0, 0, 0]).max_index(), 0);
    }
}
