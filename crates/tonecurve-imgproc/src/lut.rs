use tonecurve_interp::Lagrange;

/// A 256-entry lookup table sampling a tone curve over the 8-bit range.
///
/// Building the table evaluates the interpolated curve once per intensity
/// value, so applying it to an image costs a single indexed load per channel
/// value regardless of how many control points the curve has. Rounding and
/// clamping to `0..=255` happen here; the interpolator itself is
/// domain-agnostic and returns unclipped values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveLut([u8; 256]);

impl CurveLut {
    /// The identity table, mapping every intensity to itself.
    pub fn identity() -> Self {
        let mut table = [0u8; 256];
        for (v, entry) in table.iter_mut().enumerate() {
            *entry = v as u8;
        }
        Self(table)
    }

    /// Sample a curve at every 8-bit intensity.
    ///
    /// The curve is expected to be defined over the `0.0..=255.0` domain;
    /// out-of-range outputs are clamped.
    pub fn from_curve(curve: &Lagrange<f32>) -> Self {
        let mut table = [0u8; 256];
        for (v, entry) in table.iter_mut().enumerate() {
            let y = curve.value_of(v as f32);
            *entry = y.round().clamp(0.0, 255.0) as u8;
        }
        Self(table)
    }

    /// Map a single intensity value through the table.
    pub fn map(&self, v: u8) -> u8 {
        self.0[v as usize]
    }

    /// The raw table.
    pub fn as_table(&self) -> &[u8; 256] {
        &self.0
    }
}

impl Default for CurveLut {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<&Lagrange<f32>> for CurveLut {
    fn from(curve: &Lagrange<f32>) -> Self {
        Self::from_curve(curve)
    }
}
