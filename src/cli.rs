//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Folio static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared arguments for Build and Query commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Override the URL path prefix the site is deployed under.
    ///
    /// Example: deploying to a GitHub Pages project site (alice.github.io/guides):
    ///   folio build --path-prefix "/guides"
    #[arg(long = "path-prefix")]
    pub path_prefix: Option<String>,

    /// Read site metadata from a JSON bundle instead of the config file
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

/// Metadata query to resolve with `folio query`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTarget {
    /// Author, social handles and avatar for the bio block
    Bio,
    /// Site title for the 404 page
    NotFound,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a template site
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Render the home page and the 404 page into the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Resolve a metadata query and print the result as JSON
    Query {
        /// which query to resolve
        #[arg(value_enum)]
        target: QueryTarget,

        /// Print the query shape instead of resolving it
        #[arg(long)]
        shape: bool,

        #[command(flatten)]
        build_args: BuildArgs,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }

    /// Build arguments of the current command, if it takes any.
    pub const fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Build { build_args } | Commands::Query { build_args, .. } => Some(build_args),
            Commands::Init { .. } => None,
        }
    }
}
