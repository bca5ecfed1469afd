//! Input guards shared by the band generators.
//!
//! Every check returns the first violated precondition as a [`BandError`].

use tracing::warn;

use super::{Band, Spectrum};
use crate::error::{BandError, BandResult};

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

pub fn fraction(fraction: f64) -> BandResult<()> {
    if !is_positive(fraction) {
        warn!("rejected fraction {}", fraction);
        return Err(BandError::InvalidFraction { fraction });
    }
    Ok(())
}

pub fn spectrum(spectrum: &Spectrum) -> BandResult<()> {
    for bound in [spectrum.min, spectrum.max] {
        if !is_positive(bound) {
            warn!("rejected spectrum bound {}", bound);
            return Err(BandError::InvalidSpectrumBound { bound });
        }
    }
    if spectrum.min >= spectrum.max {
        warn!("rejected spectrum [{}, {}]", spectrum.min, spectrum.max);
        return Err(BandError::UnorderedSpectrum {
            min: spectrum.min,
            max: spectrum.max,
        });
    }
    Ok(())
}

/// Center must lie in `[min, max]` (inclusive). NaN never does.
pub fn center(center: f64, spectrum: &Spectrum) -> BandResult<()> {
    if !(spectrum.min..=spectrum.max).contains(&center) {
        warn!("rejected center {} for spectrum [{}, {}]", center, spectrum.min, spectrum.max);
        return Err(BandError::CenterOutOfRange {
            center,
            min: spectrum.min,
            max: spectrum.max,
        });
    }
    Ok(())
}

/// Largest band count accepted by the equalizer.
pub const MAX_BAND_COUNT: usize = 100_000;

/// Convert a real-valued band count (CLI, JSON) into a count of bands.
pub fn band_count(count: f64) -> BandResult<usize> {
    if !is_positive(count) || count.fract() != 0.0 || count > MAX_BAND_COUNT as f64 {
        warn!("rejected band count {}", count);
        return Err(BandError::InvalidBandCount { count });
    }
    Ok(count as usize)
}

pub(crate) fn checked_band_count(count: usize) -> BandResult<()> {
    if count == 0 || count > MAX_BAND_COUNT {
        warn!("rejected band count {}", count);
        return Err(BandError::InvalidBandCount { count: count as f64 });
    }
    Ok(())
}

/// The center step must move (`factor > 1`) and both step ratios must be finite.
pub(crate) fn step(fraction: f64, factor: f64, half_factor: f64) -> BandResult<()> {
    if !factor.is_finite() || !half_factor.is_finite() {
        warn!("fraction {} overflows the step factor", fraction);
        return Err(BandError::EdgeOverflow { fraction });
    }
    if factor <= 1.0 {
        warn!("fraction {} does not move the center", fraction);
        return Err(BandError::DegenerateStep { fraction });
    }
    Ok(())
}

pub(crate) fn edges(band: Band, fraction: f64) -> BandResult<Band> {
    if !band.is_representable() {
        warn!("band around {} Hz has edges [{}, {}]", band.center, band.low, band.high);
        return Err(BandError::EdgeOverflow { fraction });
    }
    Ok(band)
}
