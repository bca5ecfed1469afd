use serde::{Deserialize, Serialize};

use super::Spectrum;

/// Default center frequency (Hz) the octave walk starts from.
pub const DEFAULT_CENTER: f64 = 1000.0;
/// Default audio spectrum for center frequencies (Hz).
pub const DEFAULT_SPECTRUM: (f64, f64) = (15.0, 21000.0);

/// User-supplied options for [`octaves`](super::octaves).
///
/// Each field overrides its default on its own; anything left `None`
/// falls back to [`DEFAULT_CENTER`] / [`DEFAULT_SPECTRUM`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctaveOptions {
    /// Center frequency (default 1000 Hz)
    pub center: Option<f64>,
    /// Spectrum bounding the band centers (default [15, 21000])
    pub spectrum: Option<Spectrum>,
}

/// Effective octave settings after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctaveSettings {
    pub center: f64,
    pub spectrum: Spectrum,
}

impl Default for OctaveSettings {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            spectrum: Spectrum::default(),
        }
    }
}

impl OctaveOptions {
    pub fn with_center(mut self, center: f64) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_spectrum(mut self, min: f64, max: f64) -> Self {
        self.spectrum = Some(Spectrum::new(min, max));
        self
    }

    /// Fields set on `other` win over fields set on `self`.
    pub fn merge(self, other: OctaveOptions) -> Self {
        Self {
            center: other.center.or(self.center),
            spectrum: other.spectrum.or(self.spectrum),
        }
    }

    pub fn resolve(&self) -> OctaveSettings {
        let defaults = OctaveSettings::default();
        OctaveSettings {
            center: self.center.unwrap_or(defaults.center),
            spectrum: self.spectrum.unwrap_or(defaults.spectrum),
        }
    }
}

/// User-supplied options for [`equalizer`](super::equalizer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EqualizerOptions {
    pub spectrum: Option<Spectrum>,
}

impl EqualizerOptions {
    pub fn with_spectrum(mut self, min: f64, max: f64) -> Self {
        self.spectrum = Some(Spectrum::new(min, max));
        self
    }

    pub fn merge(self, other: EqualizerOptions) -> Self {
        Self {
            spectrum: other.spectrum.or(self.spectrum),
        }
    }

    pub fn resolve(&self) -> Spectrum {
        self.spectrum.unwrap_or_default()
    }
}
