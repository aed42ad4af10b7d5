//! CLI Module
//!
//! Command-line interface for building a model from literal values and
//! printing its reduced forms.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tfreduce - reduce transfer functions to FOPDT/SOPDT models
#[derive(Parser, Debug)]
#[command(name = "tfreduce")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Static gain
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub gain: f64,

    /// Transport delay (sign is ignored)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub delay: f64,

    /// Comma-separated zeros, e.g. --zeros=-1,-6,-3
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub zeros: Option<Vec<f64>>,

    /// Comma-separated poles, e.g. --poles 4,1,10,20
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub poles: Option<Vec<f64>>,

    /// Reduction config file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print models as LaTeX formulas
    #[arg(long, global = true)]
    pub latex: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the model as given
    #[command(name = "show")]
    Show,

    /// First-order-plus-dead-time approximation
    #[command(name = "fopdt")]
    Fopdt {
        /// Use the Skogestad half rule instead of the general method
        #[arg(short, long)]
        skogestad: bool,
    },

    /// Second-order-plus-dead-time approximation
    #[command(name = "sopdt")]
    Sopdt,

    /// Print the model, its general FOPDT and its SOPDT
    #[command(name = "all")]
    All,
}
