pub mod bands;
pub mod cli;
pub mod config;
pub mod error;
pub mod table;

pub use bands::{
    bandwidth, equalizer, octaves, Band, EqualizerOptions, OctaveOptions, OctaveSettings, Spectrum,
    DEFAULT_FRACTION,
};
pub use error::{BandError, BandResult};

use tracing::info;

use cli::{Args, Command};

/// Run one CLI invocation and return what should be printed on stdout.
pub fn run(args: &Args) -> BandResult<String> {
    match &args.command {
        Command::Octaves { fraction, center, range } => {
            let mut options = match &range.config {
                Some(path) => config::load_options::<OctaveOptions>(path)?,
                None => OctaveOptions::default(),
            };
            options = options.merge(range.octave_overrides(*center));
            info!("octaves: fraction={:.4}, options={:?}", fraction, options);
            let bands = octaves(*fraction, &options)?;
            render(&bands, args)
        }
        Command::Equalizer { bands, range } => {
            let mut options = match &range.config {
                Some(path) => config::load_options::<EqualizerOptions>(path)?,
                None => EqualizerOptions::default(),
            };
            options = options.merge(range.equalizer_overrides());
            info!("equalizer: bands={}, options={:?}", bands, options);
            let bands = equalizer(*bands, &options)?;
            render(&bands, args)
        }
        Command::Bandwidth { fraction } => {
            let bw = bandwidth(*fraction)?;
            info!("bandwidth: fraction={:.4} → {}", fraction, bw);
            if args.json {
                Ok(serde_json::json!({ "fraction": fraction, "bandwidth": bw }).to_string())
            } else {
                Ok(format!("{:.*}", args.precision, bw))
            }
        }
    }
}

fn render(bands: &[Band], args: &Args) -> BandResult<String> {
    if args.json {
        let rounded: Vec<Band> = bands.iter().map(|b| b.rounded(args.precision)).collect();
        serde_json::to_string_pretty(&rounded).map_err(|e| BandError::Config {
            message: format!("Serialize error: {e}"),
        })
    } else {
        Ok(table::format_table(bands, args.precision))
    }
}
