//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `inspect`: Run the transform over source files and report what it would emit
//! - `transform`: Run the transform and print or write the rewritten sources
//! - `init`: Initialize the ptmeta configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Inspect(cmd)) => cmd.common.verbose,
            Some(Command::Transform(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read source files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Files or directories to inspect (default: configured source root)
    pub paths: Vec<PathBuf>,

    /// Print one JSON document instead of the human-readable report
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TransformCommand {
    /// Files or directories to transform (default: configured source root)
    pub paths: Vec<PathBuf>,

    /// Overwrite each source file with its transformed code
    #[arg(long)]
    pub write: bool,

    /// Write transformed files under this directory, keeping their relative paths
    #[arg(long, value_name = "DIR", conflicts_with = "write")]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report the components, propTypes, and metadata the transform finds in source files
    Inspect(InspectCommand),
    /// Attach metadata to components and print the transformed sources (or write them with --write / --out-dir)
    Transform(TransformCommand),
    /// Initialize a new .ptmetarc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect() {
        let args =
            Arguments::try_parse_from(["ptmeta", "inspect", "src", "lib/App.jsx", "--json", "-v"])
                .unwrap();
        assert!(args.verbose());
        let Some(Command::Inspect(cmd)) = args.command else {
            panic!("expected inspect command");
        };
        assert_eq!(cmd.paths, vec![PathBuf::from("src"), PathBuf::from("lib/App.jsx")]);
        assert!(cmd.json);
    }

    #[test]
    fn test_parse_transform() {
        let args =
            Arguments::try_parse_from(["ptmeta", "transform", "src", "--out-dir", "build"]).unwrap();
        let Some(Command::Transform(cmd)) = args.command else {
            panic!("expected transform command");
        };
        assert_eq!(cmd.paths, vec![PathBuf::from("src")]);
        assert_eq!(cmd.out_dir, Some(PathBuf::from("build")));
        assert!(!cmd.write);
    }

    #[test]
    fn test_write_conflicts_with_out_dir() {
        let result =
            Arguments::try_parse_from(["ptmeta", "transform", "--write", "--out-dir", "build"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_command() {
        let args = Arguments::try_parse_from(["ptmeta"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.verbose());
    }
}
