//! Command-line interface for dominant_hue
//!
//! Prints the dominant RGB, hue angle and color family of an image.

use clap::{CommandFactory, Parser};
use dominant_hue::{
    analyze_image_with_config, AnalysisError, AnalyzerConfig, ColorResult, HueOutcome,
    OutputFormat,
};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "dominant-hue")]
#[command(version, about = "Determine the dominant hue of an image", long_about = None)]
struct Cli {
    /// Image file to analyze
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Analyze every pixel instead of a 100x100 downsample
    #[arg(long)]
    full_resolution: bool,

    /// Load options from a JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(image_path) = cli.image.as_deref() else {
        let _ = Cli::command().print_help();
        return;
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            println!("{}", error.user_message());
            return;
        }
    };

    run(image_path, &config);
}

/// Merge the optional config file with command-line overrides
fn load_config(cli: &Cli) -> Result<AnalyzerConfig, AnalysisError> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::default(),
    };
    if cli.json {
        config.output = OutputFormat::Json;
    }
    if cli.full_resolution {
        config.downsample = false;
    }
    Ok(config)
}

fn run(image_path: &Path, config: &AnalyzerConfig) {
    match analyze_image_with_config(image_path, config) {
        Ok(outcome) => println!("{}", format_outcome(&outcome, config.output)),
        Err(error) => {
            tracing::debug!(?error, "analysis failed");
            println!("{}", error.user_message());
        }
    }
}

fn format_outcome(outcome: &HueOutcome, output: OutputFormat) -> String {
    match outcome.result() {
        Some(result) => format_result(result, output),
        None => format_too_dark(output),
    }
}

fn format_result(result: &ColorResult, output: OutputFormat) -> String {
    match output {
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .unwrap_or_else(|e| format!("Error analyzing image: {}", e)),
        OutputFormat::Text => {
            let [r, g, b] = result.average_rgb;
            format!(
                "Dominant RGB: ({:.1}, {:.1}, {:.1})\nDominant Hue: {:.1} degrees\nDescription: {}",
                r, g, b, result.hue_degrees, result.color_name
            )
        }
    }
}

fn format_too_dark(output: OutputFormat) -> String {
    match output {
        OutputFormat::Json => serde_json::json!({ "too_dark": true }).to_string(),
        OutputFormat::Text => "Image is too dark to determine hue.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dominant_hue::ColorName;
    use std::ffi::OsString;

    fn orange() -> ColorResult {
        ColorResult {
            average_rgb: [212.44, 118.0, 61.31],
            hue_degrees: 22.5,
            saturation: 0.71,
            value: 0.83,
            color_name: ColorName::Orange,
            hex: "#D4763D".to_string(),
            pixel_count: 9_000,
        }
    }

    #[test]
    fn test_text_output_lines() {
        let text = format_outcome(&HueOutcome::Dominant(orange()), OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Dominant RGB: (212.4, 118.0, 61.2)",
                "Dominant Hue: 22.5 degrees",
                "Description: Orange",
            ]
        );
    }

    #[test]
    fn test_purple_label_in_text_output() {
        let mut result = orange();
        result.color_name = ColorName::PurpleMagenta;
        let text = format_result(&result, OutputFormat::Text);
        assert!(text.ends_with("Description: Purple/Magenta"));
    }

    #[test]
    fn test_too_dark_output() {
        assert_eq!(
            format_outcome(&HueOutcome::TooDark, OutputFormat::Text),
            "Image is too dark to determine hue."
        );

        let json: serde_json::Value =
            serde_json::from_str(&format_outcome(&HueOutcome::TooDark, OutputFormat::Json)).unwrap();
        assert_eq!(json, serde_json::json!({ "too_dark": true }));
    }

    #[test]
    fn test_json_output() {
        let json = format_outcome(&HueOutcome::Dominant(orange()), OutputFormat::Json);
        let parsed: ColorResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.color_name, ColorName::Orange);
        assert_eq!(parsed.hue_degrees, 22.5);
        assert_eq!(parsed.hex, "#D4763D");
        assert_eq!(parsed.pixel_count, 9_000);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["dominant-hue", "--json", "--full-resolution", "a.png"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.downsample);
        assert_eq!(cli.image.as_deref(), Some(Path::new("a.png")));
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["dominant-hue", "a.png"]).unwrap();
        assert_eq!(load_config(&cli).unwrap(), AnalyzerConfig::default());

        let cli = Cli::try_parse_from(["dominant-hue"]).unwrap();
        assert!(cli.image.is_none());
    }

    #[test]
    fn test_config_file_merged_with_flags() {
        let path = std::env::temp_dir().join(format!("dominant_hue_cli_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"downsample": false}"#).unwrap();

        let args: Vec<OsString> = vec![
            "dominant-hue".into(),
            "--config".into(),
            path.clone().into_os_string(),
            "--json".into(),
            "a.png".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let config = load_config(&cli);
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert!(!config.downsample);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let cli = Cli::try_parse_from(["dominant-hue", "--config", "no/such.json", "a.png"]).unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(err.user_message().starts_with("Error loading configuration: "));
    }
}
