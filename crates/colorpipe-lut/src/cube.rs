//! Resolve/Adobe .cube 3D LUT reader.
//!
//! The .cube format is a simple line-oriented text format emitted by
//! DaVinci Resolve, Adobe applications, and most grading tools.
//!
//! # Format
//!
//! ```text
//! # Comment
//! LUT_3D_SIZE 33
//! LUT_3D_INPUT_RANGE 0.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Sample rows run in the file's red-fastest raster order; the produced
//! [`Lut3D`] stores them in the pipeline's blue-fastest order.
//!
//! Structural problems never abort a read. A file with no usable header
//! yields the empty node, sample consumption stops at the first row that
//! does not shape up as three floats, and only file access errors
//! propagate. This tolerance is deliberate: hand-edited cube files are
//! common and still have to load.
//!
//! # Example
//!
//! ```rust,no_run
//! use colorpipe_lut::{cube, ReadOptions};
//!
//! let lut = cube::read("grade.cube", &ReadOptions::default())?
//!     .expect("extension not claimed");
//! assert!(!lut.is_empty());
//! # Ok::<(), colorpipe_lut::LutError>(())
//! ```

use crate::format::ReadOptions;
use crate::{BitDepth, Interpolation, Lut3D, LutResult};
use std::path::Path;
use tracing::{info, warn};

/// Extensions claimed by this reader, without dots.
pub const EXTENSIONS: &[&str] = &["cube"];

/// Reads a 3D LUT from a .cube file.
///
/// Returns `Ok(None)` when the path does not carry the `cube` extension
/// (case-insensitive), without touching the filesystem, so callers can
/// hand the file to another format reader. The returned node may be
/// degenerate; check [`Lut3D::is_empty`] before use.
///
/// # Errors
///
/// Only file access failures error. Everything structural degrades.
pub fn read<P: AsRef<Path>>(path: P, options: &ReadOptions) -> LutResult<Option<Lut3D>> {
    let path = path.as_ref();
    info!("cube format read: {}", path.display());

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.trim().to_lowercase());
    if ext.as_deref() != Some("cube") {
        return Ok(None);
    }

    if options.inverse {
        // No inverse construction exists for a 3D cube; never fake one.
        warn!(
            "inverse requested for {}, returning the forward transform",
            path.display()
        );
    }

    let text = std::fs::read_to_string(path)?;
    Ok(Some(parse_3d(&text, options)))
}

/// Parser state accumulated while scanning the header.
#[derive(Debug, Default)]
struct HeaderScan {
    /// Side length from the last `LUT_3D_SIZE` directive.
    size: usize,
    /// True once a size directive parsed; the file is structurally valid.
    valid: bool,
    /// Line index of the first data row.
    data_start: Option<usize>,
    /// Range recorded from `LUT_3D_INPUT_RANGE`.
    input_range: Option<(f32, f32)>,
}

impl HeaderScan {
    /// Only the normalized [0, 1] input range is supported.
    fn range_supported(&self) -> bool {
        match self.input_range {
            Some((min, max)) => min == 0.0 && max == 1.0,
            None => true,
        }
    }
}

/// Scans header lines up to the first data row.
///
/// Directives may repeat; the last occurrence wins. Any non-comment line
/// tokenizing to exactly three fields marks the data start and ends the
/// scan. Malformed directive operands are skipped, not raised.
fn scan_header(lines: &[&str]) -> HeaderScan {
    let mut scan = HeaderScan::default();

    for (idx, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            ["LUT_3D_SIZE", operands @ ..] => {
                if let Some(n) = operands.first().and_then(|t| t.parse::<usize>().ok()) {
                    scan.size = n;
                    scan.valid = true;
                }
            }
            ["LUT_3D_INPUT_RANGE", operands @ ..] => {
                if let [min, max] = operands {
                    if let (Ok(min), Ok(max)) = (min.parse::<f32>(), max.parse::<f32>()) {
                        scan.input_range = Some((min, max));
                    }
                }
            }
            [_, _, _] if !line.starts_with('#') => {
                scan.data_start = Some(idx);
                break;
            }
            _ => {}
        }
    }

    scan
}

/// Converts a file-order raster index into the pipeline-order raster
/// index for a cube of side `size`.
///
/// Cube files increment the red index fastest; the pipeline stores
/// samples blue-fastest.
#[inline]
fn dest_index(raster: usize, size: usize) -> usize {
    let index_r = raster % size;
    let index_g = (raster / size) % size;
    let index_b = raster / (size * size);
    (index_r * size + index_g) * size + index_b
}

/// Parses a data row of exactly three float fields.
fn parse_rgb(line: &str) -> Option<[f32; 3]> {
    let mut fields = line.split_whitespace();
    let r = fields.next()?.parse().ok()?;
    let g = fields.next()?.parse().ok()?;
    let b = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some([r, g, b])
}

/// Parses .cube text into a 3D LUT node.
///
/// Never fails: a file without a size directive, or without a data block
/// past the first line, produces the empty node. A short data block
/// leaves the remaining samples at 0.0; rows past `size^3` are ignored.
pub fn parse_3d(text: &str, options: &ReadOptions) -> Lut3D {
    let lines: Vec<&str> = text.lines().collect();
    let scan = scan_header(&lines);

    if !scan.range_supported() {
        warn!(
            "unsupported input range {:?}, proceeding as [0, 1]",
            scan.input_range
        );
    }

    let interpolation =
        Interpolation::from_name(Interpolation::normalize_name(&options.interpolation));

    let (resolution, samples) = match scan.data_start {
        Some(start) if start > 0 && scan.valid && scan.size > 0 => {
            let size = scan.size;
            let total = size * size * size;
            let mut samples = vec![0.0f32; total * 3];

            for (raster, line) in lines[start..].iter().enumerate() {
                if raster == total {
                    break;
                }
                let Some(rgb) = parse_rgb(line) else {
                    break;
                };
                let dest = dest_index(raster, size) * 3;
                samples[dest..dest + 3].copy_from_slice(&rgb);
            }

            ([size; 3], samples)
        }
        _ => ([0, 0, 0], Vec::new()),
    };

    Lut3D {
        resolution,
        samples,
        interpolation,
        in_depth: BitDepth::Float16,
        out_depth: BitDepth::Float16,
    }
}
