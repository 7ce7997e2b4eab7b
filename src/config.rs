// config.rs - Command-line options and the settings resolved from them

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use egui::Color32;
use life_engine::{Origin, Pattern, PatternError, Topology, patterns};
use thiserror::Error;

/// Conway's Game of Life with hedge, torus or Klein-bottle edges.
///
/// Sample: life -w 800 -h 600 -s 4 -r 100 -g 250 -b 0 -e torus -o 60,60 -f acorn_106.lif
#[derive(Debug, Parser)]
#[command(name = "life", version, disable_help_flag = true)]
pub struct Args {
    /// Width of the screen in pixels (640, 800, 1024, ...)
    #[arg(short = 'w', long, default_value_t = 800)]
    pub width: u32,

    /// Height of the screen in pixels (480, 600, 768, ...)
    #[arg(short = 'h', long, default_value_t = 600)]
    pub height: u32,

    /// Size of one cell in pixels
    #[arg(short = 's', long = "size", default_value_t = 2)]
    pub cell_size: u32,

    /// Red component of the cell colour
    #[arg(short = 'r', long, default_value_t = 100)]
    pub red: u8,

    /// Green component of the cell colour
    #[arg(short = 'g', long, default_value_t = 100)]
    pub green: u8,

    /// Blue component of the cell colour
    #[arg(short = 'b', long, default_value_t = 250)]
    pub blue: u8,

    /// Type of edge: hedge, torus or klein
    #[arg(short = 'e', long = "edge", default_value_t = Topology::Bounded)]
    pub edge: Topology,

    /// Life 1.06 pattern file
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Built-in pattern, used when no file is given
    #[arg(short = 'p', long = "pattern", default_value = "acorn")]
    pub pattern: String,

    /// Board position `x,y` of the pattern's (0, 0) cell; centred if omitted
    #[arg(short = 'o', long = "origin", allow_hyphen_values = true)]
    pub origin: Option<Origin>,

    /// Milliseconds between generations
    #[arg(short = 'd', long = "delay", default_value_t = 30)]
    pub delay_ms: u64,

    /// Print help
    #[arg(short = 'H', long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,
    #[error("a {width}x{height} screen cannot hold a single {cell_size}px cell")]
    ScreenTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSource {
    File(PathBuf),
    Builtin(String),
}

/// Everything the simulation and window need, validated.
#[derive(Debug, Clone)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub color: Color32,
    pub topology: Topology,
    pub source: PatternSource,
    pub origin: Option<Origin>,
    pub delay: Duration,
}

impl Settings {
    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }

    pub fn cols(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    /// Where `pattern` goes: the `-o` origin if one was given, otherwise
    /// centred on the board.
    pub fn origin_for(&self, pattern: &Pattern) -> Origin {
        self.origin
            .unwrap_or_else(|| pattern.centered_in(self.rows(), self.cols()))
    }

    pub fn load_pattern(&self) -> Result<Pattern, PatternError> {
        match &self.source {
            PatternSource::File(path) => Pattern::from_file(path),
            PatternSource::Builtin(name) => patterns::find(name),
        }
    }
}

impl TryFrom<Args> for Settings {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if args.width < args.cell_size || args.height < args.cell_size {
            return Err(ConfigError::ScreenTooSmall {
                width: args.width,
                height: args.height,
                cell_size: args.cell_size,
            });
        }

        let source = match args.file {
            Some(path) => PatternSource::File(path),
            None => PatternSource::Builtin(args.pattern),
        };

        Ok(Self {
            width: args.width,
            height: args.height,
            cell_size: args.cell_size,
            color: Color32::from_rgb(args.red, args.green, args.blue),
            topology: args.edge,
            source,
            origin: args.origin,
            delay: Duration::from_millis(args.delay_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn settings(argv: &[&str]) -> Result<Settings, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("life").chain(argv.iter().copied())).unwrap();
        Settings::try_from(args)
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_classic_program() {
        let s = settings(&[]).unwrap();
        assert_eq!((s.width, s.height, s.cell_size), (800, 600, 2));
        assert_eq!((s.rows(), s.cols()), (300, 400));
        assert_eq!(s.color, Color32::from_rgb(100, 100, 250));
        assert_eq!(s.topology, Topology::Bounded);
        assert_eq!(s.source, PatternSource::Builtin("acorn".into()));
        assert_eq!(s.origin, None);
    }

    #[test]
    fn sample_command_line() {
        let s = settings(&[
            "-w", "800", "-h", "600", "-s", "4", "-r", "100", "-g", "250", "-b", "0", "-e", "torus", "-o",
            "60,60", "-f", "acorn_106.lif",
        ])
        .unwrap();
        assert_eq!((s.rows(), s.cols()), (150, 200));
        assert_eq!(s.topology, Topology::Toroidal);
        assert_eq!(s.origin, Some(Origin::new(60, 60)));
        assert_eq!(s.source, PatternSource::File("acorn_106.lif".into()));
        assert_eq!(s.color, Color32::from_rgb(100, 250, 0));
    }

    #[test]
    fn pattern_is_centred_without_an_origin() {
        let s = settings(&[]).unwrap();
        let acorn = s.load_pattern().unwrap();
        // acorn spans 7x3 cells; a 400x300 board centres it at (197, 149)
        assert_eq!(s.origin_for(&acorn), Origin::new(197, 149));

        let s = settings(&["-o", "60,60"]).unwrap();
        assert_eq!(s.origin_for(&acorn), Origin::new(60, 60));
    }

    #[test]
    fn klein_and_negative_origin() {
        let s = settings(&["-e", "klein", "-o", "-3,7"]).unwrap();
        assert_eq!(s.topology, Topology::Klein);
        assert_eq!(s.origin, Some(Origin::new(-3, 7)));
    }

    #[test]
    fn unknown_edge_is_rejected() {
        let err = Args::try_parse_from(["life", "-e", "mobius"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn help_uses_capital_h() {
        let err = Args::try_parse_from(["life", "-H"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn rejects_degenerate_screens() {
        assert_eq!(settings(&["-s", "0"]).unwrap_err(), ConfigError::ZeroCellSize);
        assert!(matches!(
            settings(&["-w", "10", "-s", "16"]),
            Err(ConfigError::ScreenTooSmall { .. })
        ));
    }
}
