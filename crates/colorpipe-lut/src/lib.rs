//! # colorpipe-lut
//!
//! LUT node types and format parsing for color transform pipelines.
//!
//! This crate turns on-disk LUT files into process nodes a color
//! pipeline can consume. The only format currently wired into the
//! registry is the Resolve/Adobe `.cube` 3D format ([`cube`] module);
//! the [`format`] registry is where further formats plug in.
//!
//! # Reading a LUT
//!
//! ```rust,no_run
//! use colorpipe_lut::{FormatRegistry, ReadOptions};
//! use std::path::Path;
//!
//! let registry = FormatRegistry::global();
//! let lut = registry
//!     .read(Path::new("grade.cube"), &ReadOptions::default())?
//!     .expect("no reader claims this extension");
//! if lut.is_empty() {
//!     eprintln!("file held no usable LUT");
//! }
//! # Ok::<(), colorpipe_lut::LutError>(())
//! ```
//!
//! # Outcomes
//!
//! Reading degrades instead of failing: an unclaimed extension is
//! `Ok(None)`, a structurally unusable file is an empty node, and only
//! file access errors propagate. Warning-class conditions (unsupported
//! input range, inverse requests) are reported through [`tracing`].
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Read diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod bitdepth;
mod error;
mod interp;
mod lut3d;
pub mod cube;
pub mod format;

pub use bitdepth::BitDepth;
pub use cube::read as read_cube;
pub use error::{LutError, LutResult};
pub use format::{FormatCapability, FormatInfo, FormatRegistry, ReadOptions};
pub use interp::Interpolation;
pub use lut3d::Lut3D;
