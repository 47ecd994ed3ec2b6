//! numviz CLI - Command-line front end for the numviz math core

mod commands;
mod error;
mod format;
mod render;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use format::eprintln_colored;

/// Digits computed when neither `--digits` nor the config file sets them
pub(crate) const DEFAULT_DIGITS: usize = 50;

/// Samples per chart when neither `--samples` nor the config file sets them
pub(crate) const DEFAULT_SAMPLES: usize = 101;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CliConfig {
    /// Default verbosity level
    #[serde(default)]
    verbosity: Option<String>,
    /// Default output format
    #[serde(default)]
    format: Option<String>,
    /// Enable colors by default
    #[serde(default)]
    color: Option<bool>,
    /// Default number of digits for precision tasks
    #[serde(default)]
    digits: Option<usize>,
    /// Default number of samples per chart
    #[serde(default)]
    samples: Option<usize>,
}

impl CliConfig {
    /// Load configuration from file
    fn load() -> Self {
        let config_path = dirs::home_dir()
            .map(|mut p| {
                p.push(".numvizrc");
                p
            })
            .filter(|p| p.exists())
            .or_else(|| {
                dirs::config_dir().map(|mut p| {
                    p.push("numviz");
                    p.push("config.yaml");
                    p
                })
            });

        if let Some(path) = config_path
            && path.exists()
            && let Ok(contents) = fs::read_to_string(&path)
            && let Ok(config) = serde_yaml::from_str(&contents)
        {
            return config;
        }

        Self::default()
    }

    /// Merge configuration with command-line arguments
    fn merge_with_args(&self, args: &mut Args) {
        // Only apply config if arg is not explicitly set
        if args.verbosity == Verbosity::Normal
            && let Some(ref v) = self.verbosity
        {
            match v.as_str() {
                "quiet" => args.verbosity = Verbosity::Quiet,
                "verbose" => args.verbosity = Verbosity::Verbose,
                "debug" => args.verbosity = Verbosity::Debug,
                "trace" => args.verbosity = Verbosity::Trace,
                _ => {}
            }
        }

        if args.format == OutputFormat::Text
            && let Some(ref f) = self.format
        {
            match f.as_str() {
                "json" => args.format = OutputFormat::Json,
                "yaml" => args.format = OutputFormat::Yaml,
                _ => {}
            }
        }

        if let Some(color) = self.color
            && !color
        {
            args.no_color = true;
        }

        if args.samples.is_none() {
            args.samples = self.samples;
        }

        if let Commands::Precision { digits, .. } = &mut args.command
            && digits.is_none()
        {
            *digits = self.digits;
        }
    }
}

/// Output format for results
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    /// Plain text and LaTeX (default)
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// No output except results
    Quiet,
    /// Minimal output
    Normal,
    /// Detailed output
    Verbose,
    /// Debug output
    Debug,
    /// Trace output
    Trace,
}

/// numviz - Roots, constants, sequences and calculus charts
#[derive(Parser, Debug, Clone)]
#[command(name = "numviz")]
#[command(version)]
#[command(about = "Numeric core of an educational math visualizer")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level
    #[arg(short, long, global = true, value_enum, default_value = "normal")]
    verbosity: Verbosity,

    /// Enable quiet mode (equivalent to --verbosity quiet)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Samples per chart series
    #[arg(long, global = true)]
    samples: Option<usize>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Solve a polynomial equation of degree 1 to 4
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Polynomial degree
        #[arg(short, long)]
        degree: usize,

        /// Coefficients, highest degree first
        #[arg(required = true, value_name = "COEFFICIENT")]
        coefficients: Vec<String>,
    },

    /// Compute a square root or constant to many digits
    Precision {
        /// Task: sqrt, pi, e or phi
        task: String,

        /// Integer operand for sqrt (1 to 10000)
        #[arg(long)]
        operand: Option<u32>,

        /// Digits after the decimal point
        #[arg(short, long)]
        digits: Option<usize>,

        /// Also write the result to DIR/high_precision_result.txt
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },

    /// Fit a short integer sequence and predict the next terms
    #[command(allow_negative_numbers = true)]
    Sequence {
        /// Up to six sample values, starting at n = 1
        #[arg(required = true, value_name = "VALUE")]
        values: Vec<String>,
    },

    /// Feed key presses to the pocket calculator
    Calc {
        /// Keys: 0-9 . + - * / = C (clear) < (backspace) ~ (negate)
        keys: String,
    },

    /// Sample a calculus chart
    Plot {
        #[command(subcommand)]
        chart: PlotCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
enum PlotCommand {
    /// A function, its derivative and a tangent line
    #[command(allow_negative_numbers = true)]
    Derivative {
        /// Function: square, cube, sin, cos, exp or ln
        function: String,

        /// Point of tangency
        #[arg(long, default_value = "1")]
        at: f64,

        #[command(flatten)]
        window: Window,
    },

    /// A classic limit approached from both sides
    Limit {
        /// Example: sin-over-x, compound-interest or removable-hole
        example: String,

        /// Rows in the approach table
        #[arg(long, default_value = "6")]
        steps: u32,
    },

    /// A function against its Taylor polynomial
    #[command(allow_negative_numbers = true)]
    Taylor {
        /// Function: square, cube, sin, cos, exp or ln
        function: String,

        /// Expansion point
        #[arg(long, default_value = "0")]
        center: f64,

        /// Polynomial order (at most 20)
        #[arg(long, default_value = "5")]
        order: u32,

        #[command(flatten)]
        window: Window,
    },

    /// A definite integral against its Riemann sum
    #[command(allow_negative_numbers = true)]
    Integral {
        /// Function: square, cube, sin, cos, exp or ln
        function: String,

        /// Lower bound
        #[arg(long, default_value = "0")]
        from: f64,

        /// Upper bound
        #[arg(long, default_value = "1")]
        to: f64,

        /// Number of sub-intervals
        #[arg(short = 'n', long, default_value = "10")]
        intervals: usize,

        /// Rule: left, right, midpoint or trapezoid
        #[arg(long, default_value = "midpoint")]
        rule: String,
    },
}

/// Plotting window
#[derive(ClapArgs, Debug, Clone, Copy)]
struct Window {
    /// Left edge of the window
    #[arg(long, default_value = "-5")]
    start: f64,

    /// Right edge of the window
    #[arg(long, default_value = "5")]
    end: f64,
}

fn main() {
    let mut args = Args::parse();

    // Load configuration file and merge with args
    let config = CliConfig::load();
    config.merge_with_args(&mut args);

    // Determine verbosity level
    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else {
        args.verbosity
    };

    // Set up logging
    if verbosity >= Verbosity::Debug {
        let level = match verbosity {
            Verbosity::Trace => Level::TRACE,
            Verbosity::Debug => Level::DEBUG,
            _ => Level::INFO,
        };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln_colored(&args, &format!("Failed to set tracing subscriber: {}", e));
            std::process::exit(1);
        }
    }

    if let Err(e) = commands::run(&args, verbosity) {
        eprintln_colored(&args, &format!("Error: {}", e));
        std::process::exit(1);
    }
}
