//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use mount_core::DisplayUnit;
use std::path::PathBuf;

/// Picture-mount calculator: board size and aperture placement from photo size and borders
#[derive(Parser, Debug, Clone)]
#[command(name = "mountcalc", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the default config as JSON
    Init {
        /// Output file (stdout if omitted)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Compute board and aperture for a config
    #[command(visible_alias = "c")]
    Compute {
        /// Config JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        config: PathBuf,

        /// Display unit for the report (mm, in)
        #[arg(short, long, default_value = "mm")]
        unit: DisplayUnit,

        /// Print the geometry as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Render a preview diagram (.svg or .png)
    #[command(visible_alias = "p")]
    Preview {
        /// Config JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        config: PathBuf,

        /// Output image; format follows the extension
        #[arg(value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,

        /// Pixels per millimetre
        #[arg(long, default_value_t = mount_preview::DEFAULT_PX_PER_MM)]
        px_per_mm: f64,

        /// Display unit for labels (mm, in)
        #[arg(short, long, default_value = "mm")]
        unit: DisplayUnit,
    },

    /// Swap portrait/landscape, turning the photo and custom board with it
    Toggle {
        /// Config JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        config: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Apply a saved advisory response to a config
    Suggest {
        /// Config JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        config: PathBuf,

        /// Advisory response (JSON, possibly wrapped in text)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        response: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// List the board presets
    Papers {
        /// Display unit (mm, in)
        #[arg(short, long, default_value = "mm")]
        unit: DisplayUnit,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_preview_with_unit() {
        let cli = Cli::try_parse_from([
            "mountcalc", "preview", "m.json", "out.png", "--px-per-mm", "3", "-u", "in",
        ])
        .unwrap();
        match cli.command {
            Commands::Preview {
                px_per_mm, unit, ..
            } => {
                assert_eq!(px_per_mm, 3.0);
                assert_eq!(unit, DisplayUnit::In);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["mountcalc", "papers", "--unit", "cm"]).is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["mountcalc", "papers", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
