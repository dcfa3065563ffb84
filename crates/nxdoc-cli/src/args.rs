//! Command-line argument definitions for the nxdl2rst tool.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input definition, where the page is
//! written, the configuration file and the logging verbosity.

use clap::Parser;

/// Render an NXDL class definition as a reStructuredText page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input NXDL file
    #[arg(help = "Path to the input .nxdl.xml file")]
    pub input: String,

    /// Path to the output file; the page goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Category directory name, overriding the input's containing directory
    #[arg(long, value_name = "DIR")]
    pub category: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
