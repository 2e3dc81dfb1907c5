//! File-level tests: cube fixtures on disk, read through the registry.

use approx::assert_relative_eq;
use colorpipe_lut::{FormatRegistry, Interpolation, LutError, ReadOptions};
use std::path::PathBuf;
use tempfile::TempDir;

const IDENTITY_2: &str = "# identity\n\
LUT_3D_SIZE 2\n\
\n\
0.0 0.0 0.0\n\
1.0 0.0 0.0\n\
0.0 1.0 0.0\n\
1.0 1.0 0.0\n\
0.0 0.0 1.0\n\
1.0 0.0 1.0\n\
0.0 1.0 1.0\n\
1.0 1.0 1.0\n";

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn reads_identity_cube_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "identity.cube", IDENTITY_2);

    let lut = FormatRegistry::global()
        .read(&path, &ReadOptions::default())
        .expect("read failed")
        .expect("cube extension not claimed");

    assert_eq!(lut.resolution, [2, 2, 2]);
    assert_eq!(lut.samples.len(), 24);
    assert_eq!(lut.interpolation, Interpolation::Trilinear);

    // Grid corners hold their own coordinates.
    for r in 0..2 {
        for g in 0..2 {
            for b in 0..2 {
                let rgb = lut.at(r, g, b);
                assert_relative_eq!(rgb[0], r as f32);
                assert_relative_eq!(rgb[1], g as f32);
                assert_relative_eq!(rgb[2], b as f32);
            }
        }
    }
}

#[test]
fn extension_dispatch_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "identity.CUBE", IDENTITY_2);

    let lut = FormatRegistry::global()
        .read(&path, &ReadOptions::default())
        .expect("read failed");
    assert!(lut.is_some_and(|l| !l.is_empty()));
}

#[test]
fn wrong_extension_is_the_unhandled_sentinel() {
    let dir = TempDir::new().unwrap();
    // Valid cube contents, wrong extension: the file is not even opened.
    let path = write_fixture(&dir, "identity.txt", IDENTITY_2);

    let result = FormatRegistry::global()
        .read(&path, &ReadOptions::default())
        .expect("read failed");
    assert!(result.is_none());
}

#[test]
fn missing_file_propagates_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.cube");

    let err = FormatRegistry::global()
        .read(&path, &ReadOptions::default())
        .unwrap_err();
    assert!(matches!(err, LutError::Io(_)));
}

#[test]
fn headerless_file_yields_empty_node() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "bare.cube", "0.0 0.0 0.0\n1.0 1.0 1.0\n");

    let lut = FormatRegistry::global()
        .read(&path, &ReadOptions::default())
        .expect("read failed")
        .expect("cube extension not claimed");
    assert!(lut.is_empty());
    assert_eq!(lut.resolution, [0, 0, 0]);
}

#[test]
fn unsupported_range_file_still_loads() {
    let dir = TempDir::new().unwrap();
    let text = format!("LUT_3D_INPUT_RANGE 0 4\n{}", IDENTITY_2);
    let path = write_fixture(&dir, "ranged.cube", &text);

    let lut = FormatRegistry::global()
        .read(&path, &ReadOptions::default())
        .expect("read failed")
        .expect("cube extension not claimed");
    assert_eq!(lut.resolution, [2, 2, 2]);
    assert_relative_eq!(lut.at(1, 1, 1)[0], 1.0);
}

#[test]
fn inverse_request_returns_forward_transform() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "identity.cube", IDENTITY_2);

    let options = ReadOptions {
        inverse: true,
        ..ReadOptions::default()
    };
    let lut = FormatRegistry::global()
        .read(&path, &options)
        .expect("read failed")
        .expect("cube extension not claimed");

    // Inverse is unsupported for this format: same node as a forward read.
    assert_eq!(lut.resolution, [2, 2, 2]);
    assert_relative_eq!(lut.at(1, 0, 0)[0], 1.0);
}
