//! Mesh text I/O for face mesh export.
//!
//! This crate converts between text formats and [`mesh_types::FaceMesh`]:
//!
//! - **OBJ** (Wavefront) - read only; vertex and face records
//! - **Data literal** - write only; ECMAScript module or JSON
//!
//! # Layer 0 Crate
//!
//! This crate performs no network access. Callers hand it text and paths;
//! fetching the text is the application's job.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{parse_obj_str, save_literal, LiteralSyntax};
//!
//! let text = std::fs::read_to_string("canonical_face_model.obj").unwrap();
//! let mesh = parse_obj_str(&text).unwrap();
//! save_literal(&mesh, "js/face-data.js", &LiteralSyntax::default()).unwrap();
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod literal;
mod obj;

pub use error::{IoError, IoResult};
pub use literal::{
    DEFAULT_EXPORT_NAME, INDICES_FIELD, LiteralNumber, LiteralSyntax, VERTICES_FIELD,
    format_coord, is_js_identifier, render_literal, render_tuples, save_literal,
};
pub use obj::{ObjStats, fan_quad, load_obj, parse_obj_str, parse_obj_with_stats, triangulate};
