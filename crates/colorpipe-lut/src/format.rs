//! LUT format registry.
//!
//! Maps file extensions to format handlers. Each handler declares a
//! name, an extension set, and its read/write capabilities; reading
//! through the registry returns a typed "not handled" outcome for
//! unclaimed extensions so callers can fall through to other readers.
//!
//! # Example
//!
//! ```rust,no_run
//! use colorpipe_lut::{FormatRegistry, ReadOptions};
//! use std::path::Path;
//!
//! let registry = FormatRegistry::global();
//! match registry.read(Path::new("grade.cube"), &ReadOptions::default())? {
//!     Some(lut) if !lut.is_empty() => println!("{:?}", lut.resolution),
//!     Some(_) => println!("file held no usable LUT"),
//!     None => println!("extension not claimed by any format"),
//! }
//! # Ok::<(), colorpipe_lut::LutError>(())
//! ```

use crate::{Lut3D, LutResult, cube};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Options accepted by every LUT format reader.
///
/// Some flags only apply to a subset of formats; readers take the full
/// set for interface symmetry and ignore what does not apply to them.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Request the inverse transform. Formats without inverse support
    /// warn and return the forward transform.
    pub inverse: bool,
    /// Caller-facing interpolation name, normalized per format.
    pub interpolation: String,
    /// Build index maps when constructing inverses. Unused by formats
    /// without inverse support.
    pub inverses_use_index_maps: bool,
    /// Sample inverses over the half-float domain. Unused by formats
    /// without inverse support.
    pub inverses_use_half_domain: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            inverse: false,
            interpolation: "linear".to_string(),
            inverses_use_index_maps: true,
            inverses_use_half_domain: true,
        }
    }
}

/// Capability a format handler declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCapability {
    /// The format can be read.
    Read,
    /// The format can be written.
    Write,
}

/// Format entry in the registry.
#[derive(Clone)]
pub struct FormatInfo {
    /// Short format name (e.g. "cube").
    pub name: &'static str,
    /// File extensions without dots.
    pub extensions: &'static [&'static str],
    /// Capabilities supported by this format.
    pub capabilities: &'static [FormatCapability],
    /// Reads a LUT from a path; `Ok(None)` when the handler does not
    /// recognize the file.
    pub read_path: fn(&Path, &ReadOptions) -> LutResult<Option<Lut3D>>,
}

/// Central registry of LUT format handlers.
///
/// The global instance is immutable after initialization, so it can be
/// queried from any thread.
pub struct FormatRegistry {
    formats: HashMap<&'static str, FormatInfo>,
    by_extension: HashMap<&'static str, &'static str>,
}

impl FormatRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            formats: HashMap::new(),
            by_extension: HashMap::new(),
        }
    }

    /// Returns the global registry with built-in formats registered.
    pub fn global() -> &'static FormatRegistry {
        static INSTANCE: OnceLock<FormatRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut registry = FormatRegistry::new();
            registry.register_builtin_formats();
            registry
        })
    }

    fn register_builtin_formats(&mut self) {
        self.register(FormatInfo {
            name: "cube",
            extensions: cube::EXTENSIONS,
            capabilities: &[FormatCapability::Read],
            read_path: |p, o| cube::read(p, o),
        });
    }

    /// Registers a format handler.
    pub fn register(&mut self, info: FormatInfo) {
        let name = info.name;
        for ext in info.extensions {
            self.by_extension.insert(ext, name);
        }
        self.formats.insert(name, info);
    }

    /// Returns an iterator over registered format names.
    pub fn format_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.keys().copied()
    }

    /// Returns format info by name.
    pub fn get(&self, name: &str) -> Option<&FormatInfo> {
        self.formats.get(name)
    }

    /// Returns format info by file extension (case-insensitive).
    pub fn get_by_extension(&self, ext: &str) -> Option<&FormatInfo> {
        let ext_lower = ext.trim().to_lowercase();
        self.by_extension
            .get(ext_lower.as_str())
            .and_then(|name| self.formats.get(name))
    }

    /// Checks whether any handler claims an extension.
    pub fn supports_extension(&self, ext: &str) -> bool {
        self.get_by_extension(ext).is_some()
    }

    /// Checks whether a format supports a capability.
    pub fn supports(&self, format_name: &str, capability: FormatCapability) -> bool {
        self.formats
            .get(format_name)
            .map(|info| info.capabilities.contains(&capability))
            .unwrap_or(false)
    }

    /// Returns all capabilities of a format.
    pub fn capabilities(&self, format_name: &str) -> &[FormatCapability] {
        self.formats
            .get(format_name)
            .map(|info| info.capabilities)
            .unwrap_or(&[])
    }

    /// Reads a LUT by dispatching on the path's extension.
    ///
    /// Returns `Ok(None)` when no handler claims the extension; callers
    /// can then try other readers. The node itself may still be
    /// degenerate, see [`Lut3D::is_empty`].
    pub fn read(&self, path: &Path, options: &ReadOptions) -> LutResult<Option<Lut3D>> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Ok(None);
        };
        match self.get_by_extension(ext) {
            Some(info) => (info.read_path)(path, options),
            None => Ok(None),
        }
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
