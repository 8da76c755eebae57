//! The export pipeline: fetch, parse, classify, write.
//!
//! Stages run strictly in order, each on the complete output of the one
//! before. A failure in any stage ends the run; the output file is only
//! opened after parsing has succeeded.

use std::path::{Path, PathBuf};

use mesh_io::{parse_obj_with_stats, save_literal};
use mesh_types::{FaceMesh, MeshBounds, MeshTopology, RegionClassifier, UniformRegion};
use tracing::{debug, info, warn};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::fetch::MeshSource;

/// Progress events reported while a run advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// About to retrieve the source.
    Fetching {
        /// Source description (URL or path).
        source: &'a str,
    },
    /// Source retrieved; parsing begins.
    Parsing,
    /// Parsing and triangulation finished.
    Parsed {
        /// Vertices read.
        vertices: usize,
        /// Triangles produced, after quad splitting.
        triangles: usize,
    },
    /// Output written.
    Wrote {
        /// Output path.
        path: &'a Path,
    },
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Vertices written.
    pub vertices: usize,
    /// Triangles written.
    pub triangles: usize,
    /// Output path.
    pub output: PathBuf,
}

/// Run the whole pipeline with the default classifier.
///
/// # Errors
///
/// See [`export_with`].
pub fn export<S>(
    config: &ExportConfig,
    source: &S,
    on_progress: impl FnMut(Progress<'_>),
) -> Result<ExportSummary, ExportError>
where
    S: MeshSource + ?Sized,
{
    export_with(config, source, &UniformRegion::default(), on_progress)
}

/// Run the whole pipeline, tagging faces with `classifier`.
///
/// # Errors
///
/// - [`ExportError::Fetch`] if the source cannot be retrieved
/// - [`ExportError::Parse`] if the text is not valid OBJ
/// - [`ExportError::Write`] if the output cannot be written
///
/// Nothing is written unless fetching and parsing both succeed.
pub fn export_with<S, C>(
    config: &ExportConfig,
    source: &S,
    classifier: &C,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<ExportSummary, ExportError>
where
    S: MeshSource + ?Sized,
    C: RegionClassifier + ?Sized,
{
    let description = source.describe();
    on_progress(Progress::Fetching {
        source: &description,
    });
    let text = source.fetch()?;

    on_progress(Progress::Parsing);
    let mesh = convert(&text, classifier)?;
    on_progress(Progress::Parsed {
        vertices: mesh.vertex_count(),
        triangles: mesh.face_count(),
    });

    save_literal(&mesh, &config.output, &config.syntax).map_err(ExportError::Write)?;
    on_progress(Progress::Wrote {
        path: &config.output,
    });
    info!(
        output = %config.output.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.face_count(),
        "Export complete"
    );

    Ok(ExportSummary {
        vertices: mesh.vertex_count(),
        triangles: mesh.face_count(),
        output: config.output.clone(),
    })
}

/// Parse OBJ text and tag its faces.
///
/// # Errors
///
/// Returns [`ExportError::Parse`] if the text is not valid OBJ.
pub fn convert<C>(text: &str, classifier: &C) -> Result<FaceMesh, ExportError>
where
    C: RegionClassifier + ?Sized,
{
    let (mesh, stats) = parse_obj_with_stats(text).map_err(ExportError::Parse)?;
    debug!(
        quads = stats.quads_split,
        ignored = stats.ignored_lines,
        "Triangulated faces"
    );

    if let Some(bounds) = mesh.bounds_opt() {
        debug!(
            min = ?bounds.min.coords.as_slice(),
            max = ?bounds.max.coords.as_slice(),
            extent = bounds.max_extent(),
            "Vertex bounds"
        );
    }

    let dangling = mesh.dangling_faces();
    if dangling > 0 {
        warn!(
            dangling,
            vertices = mesh.vertex_count(),
            "Faces reference vertices that do not exist"
        );
    }

    Ok(mesh.retagged(classifier))
}
