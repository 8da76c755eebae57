//! Wavefront OBJ parsing.
//!
//! Only two record kinds are read; everything else is skipped without
//! complaint.
//!
//! ```text
//! v x y z                 – vertex position (extra components ignored)
//! f v1 v2 v3 [v4]         – face, 1-based vertex references
//! f v1/vt1/vn1 ...        – texture/normal references are dropped
//! ```
//!
//! Triangles pass through unchanged. Quads are fanned from their first
//! vertex into two triangles. Faces with any other vertex count are
//! rejected with [`IoError::UnsupportedFaceArity`] rather than guessed at.
//!
//! Any malformed number aborts the whole parse; no partial mesh is returned.
//!
//! Lines may end in `\n`, `\r\n`, or a lone `\r`. Vertical tab, form feed,
//! and the Unicode line and paragraph separators also end a line.

use std::path::Path;

use mesh_types::{FaceMesh, TaggedFace, Vertex};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Counters collected during a parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjStats {
    /// `v` records read.
    pub vertex_records: usize,
    /// `f` records read.
    pub face_records: usize,
    /// `f` records that were quads and became two triangles.
    pub quads_split: usize,
    /// Non-blank lines that were neither `v` nor `f`.
    pub ignored_lines: usize,
}

/// Parse OBJ text into a mesh.
///
/// Every face is tagged [`mesh_types::RegionTag::SKIN`].
///
/// # Errors
///
/// Returns an error if a vertex coordinate or face reference fails to parse,
/// or a face has a vertex count other than 3 or 4.
///
/// # Example
///
/// ```
/// use mesh_io::parse_obj_str;
///
/// let mesh = parse_obj_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
/// assert_eq!(mesh.vertices.len(), 3);
/// assert_eq!(mesh.faces[0].to_array(), [0, 1, 2, 0]);
/// ```
pub fn parse_obj_str(text: &str) -> IoResult<FaceMesh> {
    parse_obj_with_stats(text).map(|(mesh, _)| mesh)
}

/// Parse OBJ text into a mesh, also returning record counts.
///
/// # Errors
///
/// Same as [`parse_obj_str`].
pub fn parse_obj_with_stats(text: &str) -> IoResult<(FaceMesh, ObjStats)> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    let mut stats = ObjStats::default();
    let mut refs: Vec<u32> = Vec::with_capacity(4);

    for (idx, raw) in source_lines(text).enumerate() {
        let line = idx + 1;
        let mut tokens = raw.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "v" => {
                vertices.push(parse_vertex(tokens, line)?);
                stats.vertex_records += 1;
            }
            "f" => {
                refs.clear();
                for token in tokens {
                    refs.push(parse_face_ref(token, line)?);
                }
                let triangles = triangulate(&refs).ok_or(IoError::UnsupportedFaceArity {
                    line,
                    count: refs.len(),
                })?;
                if triangles.len() == 2 {
                    stats.quads_split += 1;
                }
                faces.extend(triangles.into_iter().map(TaggedFace::untagged));
                stats.face_records += 1;
            }
            _ => stats.ignored_lines += 1,
        }
    }

    debug!(
        vertices = stats.vertex_records,
        faces = stats.face_records,
        quads = stats.quads_split,
        ignored = stats.ignored_lines,
        "Parsed OBJ text"
    );

    Ok((FaceMesh::from_parts(vertices, faces), stats))
}

/// Load and parse an OBJ file from disk.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the path does not exist, an I/O error
/// if it cannot be read as UTF-8, or any error from [`parse_obj_str`].
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<FaceMesh> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    parse_obj_str(&text)
}

/// Split a quad `[a, b, c, d]` into `[a, b, c]` and `[a, c, d]`.
///
/// Both triangles share the diagonal `a-c` and keep the quad's winding.
///
/// # Example
///
/// ```
/// use mesh_io::fan_quad;
///
/// assert_eq!(fan_quad([0, 1, 2, 3]), [[0, 1, 2], [0, 2, 3]]);
/// ```
#[inline]
#[must_use]
pub const fn fan_quad([a, b, c, d]: [u32; 4]) -> [[u32; 3]; 2] {
    [[a, b, c], [a, c, d]]
}

/// Triangulate a face given its zero-based vertex references.
///
/// Returns `None` for faces with fewer than 3 or more than 4 references.
#[must_use]
pub fn triangulate(refs: &[u32]) -> Option<Vec<[u32; 3]>> {
    match *refs {
        [a, b, c] => Some(vec![[a, b, c]]),
        [a, b, c, d] => Some(fan_quad([a, b, c, d]).to_vec()),
        _ => None,
    }
}

/// Split text into lines, counting `\r\n` as a single break.
fn source_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split(is_line_break))
}

const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Parse the coordinates that follow a `v` keyword.
fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> IoResult<Vertex> {
    let mut coords = [0.0_f64; 3];
    for (found, slot) in coords.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or(IoError::MissingCoordinate { line, found })?;
        *slot = parse_coord(token, line)?;
    }
    Ok(Vertex::from(coords))
}

fn parse_coord(token: &str, line: usize) -> IoResult<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite())
        .ok_or_else(|| IoError::InvalidFloat {
            line,
            token: token.to_string(),
        })
}

/// Parse one face-vertex reference (`v`, `v/vt`, `v//vn`, `v/vt/vn`) into a
/// zero-based vertex index.
fn parse_face_ref(token: &str, line: usize) -> IoResult<u32> {
    let head = token.split_once('/').map_or(token, |(head, _)| head);
    head.parse::<u32>()
        .ok()
        .and_then(|one_based| one_based.checked_sub(1))
        .ok_or_else(|| IoError::InvalidIndex {
            line,
            token: token.to_string(),
        })
}
