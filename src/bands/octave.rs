use std::collections::VecDeque;

use tracing::debug;

use super::options::OctaveOptions;
use super::{validate, Band};
use crate::error::{BandError, BandResult};

/// Full-octave bands.
pub const DEFAULT_FRACTION: f64 = 1.0;

/// Frequency limits of the (fractional-)octave bands inside a spectrum.
///
/// Centers step by `2^fraction`, edges sit `2^(fraction/2)` either side of
/// their center. The walk starts at `options.center` and goes down while the
/// center stays `>= min`, then up from the next center while it stays
/// `<= max`. Only centers are bounded; edges may fall outside the spectrum.
///
/// Returns bands in ascending center order.
pub fn octaves(fraction: f64, options: &OctaveOptions) -> BandResult<Vec<Band>> {
    validate::fraction(fraction)?;
    let settings = options.resolve();
    let spectrum = settings.spectrum;
    validate::spectrum(&spectrum)?;
    validate::center(settings.center, &spectrum)?;

    let factor = 2f64.powf(fraction);
    let half_factor = std::f64::consts::SQRT_2.powf(fraction);
    validate::step(fraction, factor, half_factor)?;

    let mut bands = VecDeque::new();

    let mut c = settings.center;
    while c >= spectrum.min {
        bands.push_front(validate::edges(Band::around(c, half_factor), fraction)?);
        c /= factor;
    }

    let mut c = settings.center * factor;
    while c <= spectrum.max {
        bands.push_back(validate::edges(Band::around(c, half_factor), fraction)?);
        c *= factor;
    }

    debug!(
        "octaves: fraction={:.4}, center={}, spectrum=[{}, {}] → {} bands",
        fraction,
        settings.center,
        spectrum.min,
        spectrum.max,
        bands.len()
    );
    Ok(bands.into())
}

/// Fractional bandwidth of any band at the given octave fraction:
/// `BW = (f_high - f_low) / f_center = (2^f - 1) / 2^(f/2)`.
pub fn bandwidth(fraction: f64) -> BandResult<f64> {
    validate::fraction(fraction)?;
    let bw = (2f64.powf(fraction) - 1.0) / 2f64.powf(fraction / 2.0);
    if !bw.is_finite() {
        return Err(BandError::EdgeOverflow { fraction });
    }
    Ok(bw)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
