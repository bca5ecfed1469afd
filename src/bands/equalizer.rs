use tracing::debug;

use super::options::EqualizerOptions;
use super::{validate, Band};
use crate::error::{BandError, BandResult};

/// Equalizer bands: `band_count` bands geometrically spaced so the first is
/// centered on the spectrum minimum and the last on the maximum.
///
/// The octave fraction is implicit: `log2(max / min) / (band_count - 1)`.
/// Bands are appended until the last band's upper edge reaches `max`.
///
/// A single band spans the whole spectrum: edges at `min` and `max`,
/// centered on their geometric mean.
pub fn equalizer(band_count: usize, options: &EqualizerOptions) -> BandResult<Vec<Band>> {
    validate::checked_band_count(band_count)?;
    let spectrum = options.resolve();
    validate::spectrum(&spectrum)?;

    if band_count == 1 {
        let center = spectrum.geometric_center();
        debug!("equalizer: single band over [{}, {}]", spectrum.min, spectrum.max);
        return Ok(vec![Band {
            low: spectrum.min,
            center,
            high: spectrum.max,
        }]);
    }

    let fraction = spectrum.octaves() / (band_count - 1) as f64;
    let factor = 2f64.powf(fraction);
    let half_factor = factor.sqrt();
    validate::step(fraction, factor, half_factor)?;

    let mut bands = Vec::with_capacity(band_count);
    let mut last = validate::edges(Band::around(spectrum.min, half_factor), fraction)?;
    bands.push(last);
    while last.high < spectrum.max {
        last = validate::edges(Band::around(last.center * factor, half_factor), fraction)?;
        bands.push(last);
    }

    debug!(
        "equalizer: {} bands requested, fraction={:.4}, spectrum=[{}, {}] → {} bands",
        band_count,
        fraction,
        spectrum.min,
        spectrum.max,
        bands.len()
    );
    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::validate::MAX_BAND_COUNT;
    use crate::bands::{bandwidth, Spectrum};

    #[test]
    fn spans_spectrum_exactly() {
        for n in [2usize, 3, 5, 10, 31, 64] {
            let opts = EqualizerOptions::default().with_spectrum(20.0, 20000.0);
            let bands = equalizer(n, &opts).unwrap();
            assert_eq!(bands.len(), n, "band count for n={n}");
            assert!((bands[0].center - 20.0).abs() < 1e-9);
            let last = bands[n - 1].center;
            assert!((last - 20000.0).abs() < 1e-6, "last center {last} for n={n}");
        }
    }

    #[test]
    fn default_spectrum() {
        let bands = equalizer(10, &EqualizerOptions::default()).unwrap();
        assert_eq!(bands.len(), 10);
        assert!((bands[0].center - 15.0).abs() < 1e-9);
        assert!((bands[9].center - 21000.0).abs() < 1e-6);
    }

    #[test]
    fn constant_bandwidth_matching_implicit_fraction() {
        let opts = EqualizerOptions::default().with_spectrum(31.25, 16000.0);
        // 31.25 → 16000 is 9 octaves, so 10 bands are full-octave
        let bands = equalizer(10, &opts).unwrap();
        let bw = bandwidth(1.0).unwrap();
        for b in &bands {
            assert!(b.low < b.center && b.center < b.high);
            assert!((b.fractional_bandwidth() - bw).abs() < 1e-9);
        }
        assert!((bands[5].center - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn single_band_covers_spectrum() {
        let opts = EqualizerOptions::default().with_spectrum(100.0, 10000.0);
        let bands = equalizer(1, &opts).unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].low, 100.0);
        assert!((bands[0].center - 1000.0).abs() < 1e-9);
        assert_eq!(bands[0].high, 10000.0);
    }

    #[test]
    fn very_wide_spectrum_keeps_band_count() {
        let opts = EqualizerOptions::default().with_spectrum(1e-200, 1e200);
        for n in [101usize, 200, 1000] {
            let bands = equalizer(n, &opts).unwrap();
            assert_eq!(bands.len(), n, "band count for n={n}");
            assert!(bands.iter().all(Band::is_representable));
            assert!((bands[0].center - 1e-200).abs() < 1e-209);
            let last = bands[n - 1].center;
            assert!((last / 1e200 - 1.0).abs() < 1e-9, "last center {last} for n={n}");
        }
        let single = equalizer(1, &opts).unwrap();
        assert!((single[0].center - 1.0).abs() < 1e-12);
    }

    #[test]
    fn wide_spectrum_with_too_few_bands_overflows() {
        let opts = EqualizerOptions::default().with_spectrum(1e-300, 1e300);
        for n in [2usize, 5] {
            assert!(matches!(
                equalizer(n, &opts),
                Err(BandError::EdgeOverflow { .. })
            ));
        }
    }

    #[test]
    fn largest_band_count() {
        let bands = equalizer(MAX_BAND_COUNT, &EqualizerOptions::default()).unwrap();
        assert_eq!(bands.len(), MAX_BAND_COUNT);
    }

    #[test]
    fn rejects_zero_and_oversized_counts() {
        for n in [0, MAX_BAND_COUNT + 1, usize::MAX] {
            assert!(matches!(
                equalizer(n, &EqualizerOptions::default()),
                Err(BandError::InvalidBandCount { .. })
            ));
        }
    }

    #[test]
    fn rejects_bad_spectrum() {
        let opts = EqualizerOptions {
            spectrum: Some(Spectrum::new(200.0, 20.0)),
        };
        assert!(matches!(
            equalizer(4, &opts),
            Err(BandError::UnorderedSpectrum { .. })
        ));
        let opts = EqualizerOptions::default().with_spectrum(-20.0, 200.0);
        assert!(matches!(
            equalizer(4, &opts),
            Err(BandError::InvalidSpectrumBound { .. })
        ));
    }
}
