//! Data-literal export.
//!
//! Renders a [`FaceMesh`] as source text holding one object with two fields:
//!
//! ```text
//! export const FaceData = {
//!     vertices: [
//!         [x, y, z],
//!         ...
//!     ],
//!     indices: [
//!         [a, b, c, tag],
//!         ...
//!     ]
//! };
//! ```
//!
//! # Number Formatting
//!
//! Coordinates use the shortest decimal form that parses back to the same
//! `f64`, always with a decimal point or exponent (`1.0`, `-0.5`, `1e-7`).
//! Indices and tags are plain unsigned integers. Both forms are valid in
//! ECMAScript and JSON, so the syntaxes differ only in framing.

use std::fmt::Write as _;
use std::path::Path;

use mesh_types::{FaceMesh, TaggedFace, Vertex};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Name of the exported binding when none is given.
pub const DEFAULT_EXPORT_NAME: &str = "FaceData";

/// Field holding the vertex tuples.
pub const VERTICES_FIELD: &str = "vertices";

/// Field holding the face tuples.
pub const INDICES_FIELD: &str = "indices";

const INDENT: &str = "    ";

/// Target syntax for the rendered literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralSyntax {
    /// ECMAScript module: `export const <name> = { ... };`
    /// with bare keys and trailing commas.
    EsModule {
        /// Exported binding name.
        name: String,
    },
    /// Strict JSON object with quoted keys and no trailing commas.
    Json,
}

impl Default for LiteralSyntax {
    fn default() -> Self {
        Self::EsModule {
            name: DEFAULT_EXPORT_NAME.to_string(),
        }
    }
}

impl LiteralSyntax {
    /// Conventional file extension for this syntax.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::EsModule { .. } => "js",
            Self::Json => "json",
        }
    }

    fn open(&self, out: &mut String) {
        match self {
            Self::EsModule { name } => {
                let _ = writeln!(out, "export const {name} = {{");
            }
            Self::Json => out.push_str("{\n"),
        }
    }

    fn close(&self, out: &mut String) {
        match self {
            Self::EsModule { .. } => out.push_str("};\n"),
            Self::Json => out.push_str("}\n"),
        }
    }

    fn key(&self, name: &str, out: &mut String) {
        match self {
            Self::EsModule { .. } => {
                let _ = write!(out, "{INDENT}{name}: ");
            }
            Self::Json => {
                let _ = write!(out, "{INDENT}\"{name}\": ");
            }
        }
    }

    const fn trailing_commas(&self) -> bool {
        matches!(self, Self::EsModule { .. })
    }
}

/// Check that `name` can be used as an ECMAScript binding name.
///
/// Accepts ASCII identifiers only: a letter, `_` or `$` followed by
/// letters, digits, `_` or `$`.
#[must_use]
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A number that can be written into a literal.
pub trait LiteralNumber: Copy {
    /// Append the literal form of `self`.
    fn write_literal(self, out: &mut String);
}

impl LiteralNumber for f64 {
    fn write_literal(self, out: &mut String) {
        // Debug keeps the ".0" and round-trips exactly.
        let _ = write!(out, "{self:?}");
    }
}

impl LiteralNumber for u32 {
    fn write_literal(self, out: &mut String) {
        let _ = write!(out, "{self}");
    }
}

/// Format one coordinate using the export number policy.
///
/// # Example
///
/// ```
/// use mesh_io::format_coord;
///
/// assert_eq!(format_coord(1.0), "1.0");
/// assert_eq!(format_coord(-0.03125), "-0.03125");
/// ```
#[must_use]
pub fn format_coord(value: f64) -> String {
    let mut out = String::new();
    value.write_literal(&mut out);
    out
}

/// Render rows of numeric tuples as a nested list literal.
///
/// Writes `[` (no leading indent), then one `[a, b, ...]` row per line at
/// `depth + 1` indent levels, then the closing `]` at `depth` levels.
/// Rows are separated by commas; `trailing_comma` also terminates the
/// last row with one.
pub fn render_tuples<T, const N: usize, I>(
    rows: I,
    depth: usize,
    trailing_comma: bool,
    out: &mut String,
) where
    T: LiteralNumber,
    I: IntoIterator<Item = [T; N]>,
{
    let row_indent = INDENT.repeat(depth + 1);
    out.push_str("[\n");
    let mut rows = rows.into_iter().peekable();
    while let Some(row) = rows.next() {
        out.push_str(&row_indent);
        out.push('[');
        for (i, value) in row.into_iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            value.write_literal(out);
        }
        out.push(']');
        if trailing_comma || rows.peek().is_some() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&INDENT.repeat(depth));
    out.push(']');
}

/// Render a mesh as source text in the given syntax.
///
/// Output depends only on the mesh contents, so equal meshes always
/// render to identical bytes.
#[must_use]
pub fn render_literal(mesh: &FaceMesh, syntax: &LiteralSyntax) -> String {
    // Rough guess: ~60 bytes per vertex row, ~25 per face row.
    let mut out = String::with_capacity(64 + mesh.vertices.len() * 60 + mesh.faces.len() * 25);
    let trailing = syntax.trailing_commas();

    syntax.open(&mut out);

    syntax.key(VERTICES_FIELD, &mut out);
    render_tuples(mesh.vertices.iter().map(Vertex::coords), 1, trailing, &mut out);
    out.push_str(",\n");

    syntax.key(INDICES_FIELD, &mut out);
    render_tuples(mesh.faces.iter().map(TaggedFace::to_array), 1, trailing, &mut out);
    out.push('\n');

    syntax.close(&mut out);
    out
}

/// Render a mesh and write it to `path`, replacing any existing file.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`IoError::WriteFailed`] if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::{parse_obj_str, save_literal, LiteralSyntax};
///
/// let mesh = parse_obj_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
/// save_literal(&mesh, "js/face-data.js", &LiteralSyntax::default()).unwrap();
/// ```
pub fn save_literal<P: AsRef<Path>>(
    mesh: &FaceMesh,
    path: P,
    syntax: &LiteralSyntax,
) -> IoResult<()> {
    let path = path.as_ref();
    let text = render_literal(mesh, syntax);
    std::fs::write(path, &text).map_err(|source| IoError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Wrote mesh literal");
    Ok(())
}
