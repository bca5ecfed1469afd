mod equalizer;
mod octave;
pub mod options;
pub mod validate;

pub use equalizer::equalizer;
pub use octave::{bandwidth, octaves, DEFAULT_FRACTION};
pub use options::{EqualizerOptions, OctaveOptions, OctaveSettings, DEFAULT_CENTER, DEFAULT_SPECTRUM};

use serde::{Deserialize, Serialize};

/// One frequency band: lower edge, nominal center and upper edge, in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f64,
    pub center: f64,
    pub high: f64,
}

impl Band {
    /// Band centered at `center` with edges `half_factor` away on a log scale.
    pub(crate) fn around(center: f64, half_factor: f64) -> Self {
        Self {
            low: center / half_factor,
            center,
            high: center * half_factor,
        }
    }

    /// Edges are positive and finite.
    pub fn is_representable(&self) -> bool {
        self.low > 0.0 && self.high.is_finite()
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// `(high - low) / center`
    pub fn fractional_bandwidth(&self) -> f64 {
        self.width() / self.center
    }

    /// Copy with every frequency rounded to `decimals` digits.
    ///
    /// Values that would overflow while scaling are left unrounded.
    pub fn rounded(&self, decimals: usize) -> Self {
        let scale = 10f64.powi(decimals.min(17) as i32);
        let round = |v: f64| {
            let r = (v * scale).round() / scale;
            if r.is_finite() {
                r
            } else {
                v
            }
        };
        Self {
            low: round(self.low),
            center: round(self.center),
            high: round(self.high),
        }
    }
}

impl From<Band> for [f64; 3] {
    fn from(b: Band) -> Self {
        [b.low, b.center, b.high]
    }
}

impl From<[f64; 3]> for Band {
    fn from([low, center, high]: [f64; 3]) -> Self {
        Self { low, center, high }
    }
}

/// Range of admissible center frequencies, `(min, max)` in Hz.
///
/// Serialized as a two-element array, e.g. `[15, 21000]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Spectrum {
    pub min: f64,
    pub max: f64,
}

impl Spectrum {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Number of octaves between `min` and `max`.
    pub fn octaves(&self) -> f64 {
        self.max.log2() - self.min.log2()
    }

    /// Geometric mean of the bounds.
    pub fn geometric_center(&self) -> f64 {
        self.min.sqrt() * self.max.sqrt()
    }
}

impl Default for Spectrum {
    fn default() -> Self {
        let (min, max) = DEFAULT_SPECTRUM;
        Self { min, max }
    }
}

impl From<(f64, f64)> for Spectrum {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<Spectrum> for (f64, f64) {
    fn from(s: Spectrum) -> Self {
        (s.min, s.max)
    }
}
