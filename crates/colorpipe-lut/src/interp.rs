//! Interpolation vocabulary for LUT nodes.

/// Interpolation method carried on a 3D LUT node.
///
/// The node only transports this as metadata; evaluating the LUT between
/// grid points is the downstream pipeline's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest grid point.
    Nearest,

    /// Trilinear interpolation.
    ///
    /// The 3D rendering of the generic "linear" name.
    #[default]
    Trilinear,

    /// Tetrahedral interpolation.
    Tetrahedral,
}

impl Interpolation {
    /// Maps a caller-facing interpolation name into the pipeline
    /// vocabulary.
    ///
    /// The generic `"linear"` means trilinear for the 3D case; names with
    /// no mapping pass through unchanged.
    pub fn normalize_name(name: &str) -> &str {
        match name {
            "linear" => "trilinear",
            other => other,
        }
    }

    /// Resolves a pipeline interpolation name.
    ///
    /// Unknown names resolve to trilinear, matching how the pipeline
    /// reads the interpolation attribute on process nodes.
    pub fn from_name(name: &str) -> Self {
        match name {
            "nearest" => Interpolation::Nearest,
            "tetrahedral" => Interpolation::Tetrahedral,
            _ => Interpolation::Trilinear,
        }
    }

    /// Canonical attribute name.
    pub fn as_name(&self) -> &'static str {
        match self {
            Interpolation::Nearest => "nearest",
            Interpolation::Trilinear => "trilinear",
            Interpolation::Tetrahedral => "tetrahedral",
        }
    }
}
