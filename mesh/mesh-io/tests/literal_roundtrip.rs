//! Round-trip tests: OBJ text -> mesh -> data literal -> mesh.
//!
//! The rendered ES module is converted back into JSON by quoting its two
//! keys and dropping trailing commas, then decoded with `serde_json`. The
//! decoded sequences must match the parsed mesh exactly.
//!
//! To run: cargo test -p mesh-io --test literal_roundtrip

#![allow(clippy::unwrap_used, clippy::expect_used)]

use mesh_io::{LiteralSyntax, load_obj, parse_obj_str, render_literal, save_literal};
use mesh_types::{FaceMesh, MeshTopology, TaggedFace, Vertex};
use std::fmt::Write as _;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to a test fixture.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Build OBJ text for a `cols` x `rows` vertex grid with awkward
/// coordinates. Even cells are emitted as quads, odd cells as two triangles,
/// and the reference style rotates through every OBJ form.
fn grid_obj(cols: u32, rows: u32) -> String {
    let mut text = String::from("# generated grid\no Grid\n");
    for r in 0..rows {
        for c in 0..cols {
            let x = f64::from(c) * 0.1 - 1.0 / 3.0;
            let y = f64::from(r).mul_add(-0.07, 1e-9);
            let z = f64::from(c * r).sqrt() * 1e-5;
            writeln!(text, "v {x} {y} {z}").unwrap();
            writeln!(text, "vt {} {}", f64::from(c) / 10.0, f64::from(r) / 10.0).unwrap();
        }
    }
    text.push_str("vn 0 0 1\n\n");

    let style = |i: u32, n: u32| match i % 4 {
        0 => format!("{n}"),
        1 => format!("{n}/{n}"),
        2 => format!("{n}//1"),
        _ => format!("{n}/{n}/1"),
    };

    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            // One-based corners, counter-clockwise.
            let a = r * cols + c + 1;
            let b = a + 1;
            let d = a + cols;
            let cc = d + 1;
            let cell = r * cols + c;
            if cell % 2 == 0 {
                writeln!(
                    text,
                    "f {} {} {} {}",
                    style(cell, a),
                    style(cell + 1, b),
                    style(cell + 2, cc),
                    style(cell + 3, d)
                )
                .unwrap();
            } else {
                writeln!(text, "f {} {} {}", style(cell, a), style(cell, b), style(cell, cc))
                    .unwrap();
                writeln!(text, "f {} {} {}", style(cell, a), style(cell, cc), style(cell, d))
                    .unwrap();
            }
        }
    }
    text
}

/// Decode an ES module literal back into vertex and face sequences.
fn decode_es_module(text: &str) -> (Vec<[f64; 3]>, Vec<[u32; 4]>) {
    let body = text
        .strip_prefix("export const FaceData = ")
        .and_then(|t| t.strip_suffix(";\n"))
        .expect("module framing");
    let json = body
        .replacen("vertices:", "\"vertices\":", 1)
        .replacen("indices:", "\"indices\":", 1)
        .replace(",\n    ]", "\n    ]");
    decode_json(&json)
}

fn decode_json(text: &str) -> (Vec<[f64; 3]>, Vec<[u32; 4]>) {
    #[derive(serde::Deserialize)]
    struct Literal {
        vertices: Vec<[f64; 3]>,
        indices: Vec<[u32; 4]>,
    }
    let literal: Literal = serde_json::from_str(text).expect("valid JSON");
    (literal.vertices, literal.indices)
}

fn sequences(mesh: &FaceMesh) -> (Vec<[f64; 3]>, Vec<[u32; 4]>) {
    (
        mesh.vertices.iter().map(Vertex::coords).collect(),
        mesh.faces.iter().map(TaggedFace::to_array).collect(),
    )
}

#[test]
fn es_module_roundtrip_is_exact() {
    let mesh = parse_obj_str(&grid_obj(9, 7)).unwrap();
    assert_eq!(mesh.vertex_count(), 63);
    // 48 cells, each two triangles.
    assert_eq!(mesh.face_count(), 96);

    let text = render_literal(&mesh, &LiteralSyntax::default());
    assert_eq!(decode_es_module(&text), sequences(&mesh));
}

#[test]
fn json_roundtrip_is_exact() {
    let mesh = parse_obj_str(&grid_obj(5, 5)).unwrap();
    let text = render_literal(&mesh, &LiteralSyntax::Json);
    assert_eq!(decode_json(&text), sequences(&mesh));
}

#[test]
fn grid_faces_reference_existing_vertices() {
    let mesh = parse_obj_str(&grid_obj(6, 4)).unwrap();
    assert_eq!(mesh.dangling_faces(), 0);
}

#[test]
fn rendering_is_idempotent() {
    let source = grid_obj(8, 8);
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.js");
    let second = dir.path().join("second.js");

    save_literal(&parse_obj_str(&source).unwrap(), &first, &LiteralSyntax::default()).unwrap();
    save_literal(&parse_obj_str(&source).unwrap(), &second, &LiteralSyntax::default()).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn face_patch_fixture() {
    let mesh = load_obj(fixture("face_patch.obj")).unwrap();
    assert_eq!(mesh.vertex_count(), 6);
    // Three triangles plus one quad.
    assert_eq!(mesh.face_count(), 5);

    let (vertices, faces) = sequences(&mesh);
    assert_eq!(vertices[3], [-0.463_928, 0.955_357, 6.633_583]);
    assert_eq!(
        faces,
        vec![
            [0, 1, 2, 0],
            [1, 4, 3, 0],
            [3, 4, 5, 0],
            [0, 2, 5, 0],
            [0, 5, 3, 0],
        ]
    );

    let text = render_literal(&mesh, &LiteralSyntax::default());
    assert!(text.contains("        [-0.463928, 0.955357, 6.633583],\n"));
    assert_eq!(decode_es_module(&text), (vertices, faces));
}
