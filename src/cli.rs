//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::bands::{validate, EqualizerOptions, OctaveOptions, Spectrum, DEFAULT_FRACTION};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "octave-bands")]
#[command(about = "Octave and fractional-octave frequency band calculator", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Decimal places in the printed table or JSON
    #[arg(long, global = true, value_name = "DIGITS", default_value_t = 3)]
    pub precision: usize,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bands of a fixed octave fraction around a center frequency
    Octaves {
        /// Octave fraction, e.g. 1, 0.5 or 1/3
        #[arg(long, short, value_name = "FRACTION", default_value_t = DEFAULT_FRACTION, value_parser = parse_fraction)]
        fraction: f64,

        /// Center frequency the bands are aligned to (Hz)
        #[arg(long, short, value_name = "HZ")]
        center: Option<f64>,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// A fixed number of bands filling the spectrum
    Equalizer {
        /// Number of bands
        #[arg(long, short, value_name = "N", value_parser = parse_band_count)]
        bands: usize,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Fractional bandwidth (f_high - f_low) / f_center for an octave fraction
    Bandwidth {
        /// Octave fraction, e.g. 1, 0.5 or 1/3
        #[arg(long, short, value_name = "FRACTION", default_value_t = DEFAULT_FRACTION, value_parser = parse_fraction)]
        fraction: f64,
    },
}

#[derive(ClapArgs, Debug)]
pub struct RangeArgs {
    /// Spectrum bounding the band centers (Hz)
    #[arg(long, short, num_args = 2, value_names = ["MIN", "MAX"])]
    pub spectrum: Option<Vec<f64>>,

    /// JSON options file; flags override its fields
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RangeArgs {
    fn spectrum(&self) -> Option<Spectrum> {
        match self.spectrum.as_deref() {
            Some(&[min, max]) => Some(Spectrum::new(min, max)),
            _ => None,
        }
    }

    /// Options given on the command line only, without the config file.
    pub fn octave_overrides(&self, center: Option<f64>) -> OctaveOptions {
        OctaveOptions {
            center,
            spectrum: self.spectrum(),
        }
    }

    pub fn equalizer_overrides(&self) -> EqualizerOptions {
        EqualizerOptions {
            spectrum: self.spectrum(),
        }
    }
}

/// Parse an octave fraction written as a decimal (`0.5`) or ratio (`1/3`).
pub fn parse_fraction(s: &str) -> Result<f64, String> {
    let value = match s.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().map_err(|e| format!("bad numerator '{num}': {e}"))?;
            let den: f64 = den.trim().parse().map_err(|e| format!("bad denominator '{den}': {e}"))?;
            num / den
        }
        None => s.trim().parse().map_err(|e| format!("bad fraction '{s}': {e}"))?,
    };
    validate::fraction(value).map_err(|e| e.to_string())?;
    Ok(value)
}

fn parse_band_count(s: &str) -> Result<usize, String> {
    let value: f64 = s.trim().parse().map_err(|e| format!("bad band count '{s}': {e}"))?;
    validate::band_count(value).map_err(|e| e.to_string())
}
