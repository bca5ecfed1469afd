use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{BandError, BandResult};

/// Load band options from a JSON file.
///
/// Missing fields keep their defaults, e.g. `{"spectrum": [80, 200]}` only
/// overrides the spectrum.
pub fn load_options<T: DeserializeOwned>(path: &Path) -> BandResult<T> {
    let json = std::fs::read_to_string(path)?;
    let options = parse_options(&json).map_err(|e| match e {
        BandError::Config { message } => BandError::Config {
            message: format!("{}: {}", path.display(), message),
        },
        other => other,
    })?;
    info!("load_options: {}", path.display());
    Ok(options)
}

pub fn parse_options<T: DeserializeOwned>(json: &str) -> BandResult<T> {
    serde_json::from_str(json).map_err(|e| BandError::Config {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::{EqualizerOptions, OctaveOptions, Spectrum};

    #[test]
    fn parses_partial_octave_options() {
        let opts: OctaveOptions = parse_options(r#"{"center": 125, "spectrum": [80, 200]}"#).unwrap();
        assert_eq!(opts.center, Some(125.0));
        assert_eq!(opts.spectrum, Some(Spectrum::new(80.0, 200.0)));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = parse_options::<EqualizerOptions>(r#"{"spectrum": [80]}"#).unwrap_err();
        assert!(matches!(err, BandError::Config { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("octave-bands-no-such-options.json");
        let err = load_options::<OctaveOptions>(&path).unwrap_err();
        assert!(matches!(err, BandError::Io(_)));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("octave-bands-opts-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"spectrum": [20, 20000]}"#).unwrap();
        let opts: EqualizerOptions = load_options(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(opts.resolve(), Spectrum::new(20.0, 20000.0));
    }
}
