use serde::Serialize;

use crate::bands::validate::MAX_BAND_COUNT;

#[derive(Debug, thiserror::Error)]
pub enum BandError {
    #[error("fraction should be a positive number, got {fraction}")]
    InvalidFraction { fraction: f64 },

    #[error("spectrum bound should be a positive number, got {bound}")]
    InvalidSpectrumBound { bound: f64 },

    #[error("spectrum min should be below max, got [{min}, {max}]")]
    UnorderedSpectrum { min: f64, max: f64 },

    #[error("center frequency {center} is outside spectrum [{min}, {max}]")]
    CenterOutOfRange { center: f64, min: f64, max: f64 },

    #[error("band count should be a positive integer up to {max}, got {count}", max = MAX_BAND_COUNT)]
    InvalidBandCount { count: f64 },

    #[error("fraction {fraction} is too small to step through the spectrum")]
    DegenerateStep { fraction: f64 },

    #[error("fraction {fraction} puts band edges outside the representable frequency range")]
    EdgeOverflow { fraction: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {message}")]
    Config { message: String },
}

pub type BandResult<T> = Result<T, BandError>;

// Serialize BandError as its message for JSON output
impl Serialize for BandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_message() {
        let err = BandError::InvalidFraction { fraction: -1.0 };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"fraction should be a positive number, got -1\"");
    }

    #[test]
    fn band_count_message_names_ceiling() {
        let err = BandError::InvalidBandCount { count: 1e12 };
        assert!(err.to_string().contains(&MAX_BAND_COUNT.to_string()));
    }
}
