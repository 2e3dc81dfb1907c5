//! 3D LUT process node.
//!
//! The durable artifact of a LUT read. A format reader builds one of
//! these per file and hands it off to the color pipeline; how the
//! pipeline stores or applies it is not this crate's concern.

use crate::{BitDepth, Interpolation, LutError, LutResult};

/// A 3D lookup table node handed to the color pipeline.
///
/// # Structure
///
/// Samples are a flat float array of length `r * g * b * 3` in
/// blue-fastest raster order: the blue grid index increments between
/// consecutive triples, red carries the largest stride.
///
/// # Degenerate nodes
///
/// Readers that find no usable LUT in a file produce a node with
/// resolution `[0, 0, 0]` and no samples instead of failing. Consumers
/// must check [`is_empty`](Lut3D::is_empty) before use.
#[derive(Debug, Clone)]
pub struct Lut3D {
    /// Grid side lengths, `[size, size, size]` for cubic LUTs.
    pub resolution: [usize; 3],
    /// Flat sample array, blue-fastest raster order.
    pub samples: Vec<f32>,
    /// Interpolation the pipeline should use when evaluating the node.
    pub interpolation: Interpolation,
    /// Input bit depth.
    pub in_depth: BitDepth,
    /// Output bit depth.
    pub out_depth: BitDepth,
}

impl Lut3D {
    /// Creates the degenerate empty node.
    pub fn empty() -> Self {
        Self {
            resolution: [0, 0, 0],
            samples: Vec::new(),
            interpolation: Interpolation::default(),
            in_depth: BitDepth::default(),
            out_depth: BitDepth::default(),
        }
    }

    /// Creates a node from a resolution and a flat sample array.
    ///
    /// The sample array must hold exactly `r * g * b * 3` floats in
    /// blue-fastest order.
    pub fn from_samples(resolution: [usize; 3], samples: Vec<f32>) -> LutResult<Self> {
        let expected = resolution[0] * resolution[1] * resolution[2] * 3;
        if samples.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} floats for resolution {}x{}x{}, got {}",
                expected,
                resolution[0],
                resolution[1],
                resolution[2],
                samples.len()
            )));
        }
        Ok(Self {
            resolution,
            samples,
            interpolation: Interpolation::default(),
            in_depth: BitDepth::default(),
            out_depth: BitDepth::default(),
        })
    }

    /// Sets the interpolation method.
    pub fn with_interpolation(mut self, interp: Interpolation) -> Self {
        self.interpolation = interp;
        self
    }

    /// Sets the input and output bit depths.
    pub fn with_depths(mut self, in_depth: BitDepth, out_depth: BitDepth) -> Self {
        self.in_depth = in_depth;
        self.out_depth = out_depth;
        self
    }

    /// True when the node carries no usable LUT.
    pub fn is_empty(&self) -> bool {
        self.resolution == [0, 0, 0] || self.samples.is_empty()
    }

    /// Number of grid entries.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.resolution[0] * self.resolution[1] * self.resolution[2]
    }

    /// Flat triple index for grid position (r, g, b).
    #[inline]
    fn index(&self, r: usize, g: usize, b: usize) -> usize {
        (r * self.resolution[1] + g) * self.resolution[2] + b
    }

    /// Sample triple at grid position (r, g, b).
    ///
    /// # Panics
    ///
    /// Panics if any index is outside the grid.
    pub fn at(&self, r: usize, g: usize, b: usize) -> [f32; 3] {
        let i = self.index(r, g, b) * 3;
        [self.samples[i], self.samples[i + 1], self.samples[i + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_node_is_empty() {
        let lut = Lut3D::empty();
        assert!(lut.is_empty());
        assert_eq!(lut.entry_count(), 0);
    }

    #[test]
    fn from_samples_validates_length() {
        assert!(Lut3D::from_samples([2, 2, 2], vec![0.0; 24]).is_ok());

        let err = Lut3D::from_samples([2, 2, 2], vec![0.0; 23]).unwrap_err();
        assert!(matches!(err, LutError::InvalidSize(_)));
    }

    #[test]
    fn grid_accessor_uses_blue_fastest_order() {
        // Tag each triple with its own flat index.
        let samples: Vec<f32> = (0..8).flat_map(|i| [i as f32, 0.0, 0.0]).collect();
        let lut = Lut3D::from_samples([2, 2, 2], samples).unwrap();

        assert_eq!(lut.at(0, 0, 0)[0], 0.0);
        assert_eq!(lut.at(0, 0, 1)[0], 1.0);
        assert_eq!(lut.at(0, 1, 0)[0], 2.0);
        assert_eq!(lut.at(1, 0, 0)[0], 4.0);
        assert_eq!(lut.at(1, 1, 1)[0], 7.0);
    }

    #[test]
    fn builders_set_metadata() {
        let lut = Lut3D::from_samples([1, 1, 1], vec![0.5; 3])
            .unwrap()
            .with_interpolation(Interpolation::Tetrahedral)
            .with_depths(BitDepth::Float16, BitDepth::Float16);
        assert_eq!(lut.interpolation, Interpolation::Tetrahedral);
        assert_eq!(lut.in_depth, BitDepth::Float16);
        assert!(!lut.is_empty());
    }
}
