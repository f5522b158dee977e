//! Curve offset: the "foam burn-off" tone curve.
//!
//! Every luma level is shifted down by a constant, and anything that would
//! drop below zero is pinned to black. In the game, black reads as bare
//! coffee, so a larger offset eats away the thin, dark parts of the foam.

// ============================================================================
// LUT Type
// ============================================================================

/// Pre-computed 256-entry lookup table for the curve offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetLut {
    /// LUT values: lut[input] = output
    pub lut: [u8; 256],
}

impl OffsetLut {
    /// Build the table for a given offset.
    ///
    /// `lut[l] = trunc(clamp(l - offset, 0, 255))`. Fractional offsets are
    /// allowed; negative offsets brighten and saturate at 255.
    pub fn from_offset(offset: f32) -> Self {
        if offset == 0.0 {
            return Self::identity();
        }

        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            let shifted = (i as f64 - offset as f64).clamp(0.0, 255.0);
            *lut_value = shifted as u8;
        }

        Self { lut }
    }

    /// Create identity LUT (no change).
    pub fn identity() -> Self {
        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            *lut_value = i as u8;
        }
        Self { lut }
    }

    /// Check if this LUT is identity.
    pub fn is_identity(&self) -> bool {
        self.lut.iter().enumerate().all(|(i, &v)| v == i as u8)
    }

    /// Map a single luma level.
    #[inline]
    pub fn apply(&self, level: u8) -> u8 {
        self.lut[level as usize]
    }
}

impl Default for OffsetLut {
    fn default() -> Self {
        Self::identity()
    }
}

// ============================================================================
// Application
// ============================================================================

/// Apply the curve offset to a single-channel luma buffer in place.
pub fn apply_curve_offset(luma: &mut [u8], lut: &OffsetLut) {
    if lut.is_identity() {
        return;
    }

    for level in luma.iter_mut() {
        *level = lut.apply(*level);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
