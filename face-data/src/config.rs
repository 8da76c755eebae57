//! Export configuration.
//!
//! [`ExportConfig::default`] is the canonical run: fetch the MediaPipe
//! canonical face model and write `js/face-data.js` as an ES module.
//! The command line can override each field; nothing is read from the
//! environment.

use std::path::PathBuf;
use std::time::Duration;

use mesh_io::LiteralSyntax;

use crate::fetch::{FileSource, HttpSource, MeshSource};

/// Canonical face model published with MediaPipe's face geometry module.
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/google/mediapipe/master/mediapipe/modules/face_geometry/data/canonical_face_model.obj";

/// Where the rendered literal is written.
pub const DEFAULT_OUTPUT_PATH: &str = "js/face-data.js";

/// Upper bound on the whole HTTP request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the OBJ text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Fetch over HTTP(S).
    Url(String),
    /// Read a local file.
    File(PathBuf),
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

/// Settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// OBJ source.
    pub source: SourceLocation,
    /// Output file, overwritten on success.
    pub output: PathBuf,
    /// HTTP request timeout. Ignored for file sources.
    pub timeout: Duration,
    /// Output syntax.
    pub syntax: LiteralSyntax,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            source: SourceLocation::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timeout: DEFAULT_TIMEOUT,
            syntax: LiteralSyntax::default(),
        }
    }
}

impl ExportConfig {
    /// Build the [`MeshSource`] for this configuration.
    #[must_use]
    pub fn mesh_source(&self) -> Box<dyn MeshSource> {
        match &self.source {
            SourceLocation::Url(url) => Box::new(HttpSource::new(url.clone(), self.timeout)),
            SourceLocation::File(path) => Box::new(FileSource::new(path.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_run() {
        let config = ExportConfig::default();
        assert_eq!(config.source, SourceLocation::Url(DEFAULT_SOURCE_URL.to_string()));
        assert_eq!(config.output, PathBuf::from("js/face-data.js"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.syntax,
            LiteralSyntax::EsModule {
                name: "FaceData".to_string()
            }
        );
    }

    #[test]
    fn source_follows_location() {
        let mut config = ExportConfig::default();
        assert_eq!(config.mesh_source().describe(), DEFAULT_SOURCE_URL);

        config.source = SourceLocation::File(PathBuf::from("face.obj"));
        assert_eq!(config.mesh_source().describe(), "face.obj");
    }
}
