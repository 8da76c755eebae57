//! Face mesh exporter.
//!
//! Fetches a face mesh in Wavefront OBJ format, triangulates it, and writes
//! it as a data literal for a presentation layer to import:
//!
//! 1. **Fetch** - one request to the configured source ([`fetch`])
//! 2. **Parse** - `v`/`f` records into vertex and face sequences
//!    (`mesh_io::parse_obj_str`), quads fanned into triangles
//! 3. **Classify** - tag each face (always `0` by default)
//! 4. **Write** - render the literal and overwrite the output file
//!
//! Every stage runs once, in order, and any failure ends the run.
//!
//! # Example
//!
//! ```no_run
//! use face_data::config::ExportConfig;
//! use face_data::pipeline::export;
//!
//! let config = ExportConfig::default();
//! let source = config.mesh_source();
//! let summary = export(&config, source.as_ref(), |_| {}).unwrap();
//! println!("{} triangles", summary.triangles);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;

pub use error::{ExportError, FetchError};
