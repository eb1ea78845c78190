use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "Static site generator for directory trees of Markdown", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site directory holding the config, content and templates (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub site: Option<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false, conflicts_with = "quiet")]
    pub debug: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Build your site
    #[command(alias = "b")]
    Build {
        /// Custom configuration file (.json, .toml or .yaml)
        #[arg(short, long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Output directory (overrides the config file)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Hostname used for sitemap URLs (overrides the config file)
        #[arg(long, value_name = "URL")]
        hostname: Option<String>,
    },

    /// Serve your site locally
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Custom configuration file (.json, .toml or .yaml)
        #[arg(short, long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(short = 'H', long, value_name = "HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short = 'P', long, value_name = "PORT", default_value = "4000")]
        port: u16,

        /// Do not rebuild when sources change
        #[arg(long, default_value_t = false)]
        no_watch: bool,
    },

    /// Remove the output directory
    Clean {
        /// Custom configuration file (.json, .toml or .yaml)
        #[arg(short, long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
}
