//! Command-line surface: `id3 l|g|c [OPTIONS] FILES`.
//!
//! The legacy tool spells its long options with a single dash (`-ndiv`,
//! `-gascii`, …); `clap`'s derive API only emits/accepts the double-dash
//! convention, so [`normalize_args`] rewrites the known flags before
//! handing the argument list to `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::discretize::Policy as DiscretizePolicy;
use crate::error::{Id3Error, Result};
use crate::impute::Policy as ImputePolicy;
use crate::render::Format;

const LEGACY_LONG_FLAGS: &[&str] = &[
    "ndiv", "nfull", "mmaj", "mprb", "mid3", "gascii", "gdot", "gscheme",
];

/// Rewrites single-dash legacy flags (`-ndiv`) to the double-dash spelling
/// `clap` expects (`--ndiv`), leaving everything else untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            for flag in LEGACY_LONG_FLAGS {
                if arg == format!("-{flag}") {
                    return format!("--{flag}");
                }
            }
            arg
        })
        .collect()
}

#[derive(Parser, Debug)]
#[command(name = "id3", about = "Induce, render, and apply ID3 decision trees.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Learn a classifier from an attribute description and a learning set.
    #[command(name = "l")]
    Learn(LearnArgs),
    /// Render a model to indented text, Dot, or Scheme.
    #[command(name = "g")]
    Render(RenderArgs),
    /// Classify a testing set against a model.
    #[command(name = "c")]
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
pub struct LearnArgs {
    pub attr: PathBuf,
    pub learn: PathBuf,
    pub out: PathBuf,

    #[arg(long, conflicts_with = "nfull")]
    pub ndiv: bool,
    #[arg(long)]
    pub nfull: bool,

    #[arg(long, conflicts_with_all = ["mprb", "mid3"])]
    pub mmaj: bool,
    #[arg(long, conflicts_with = "mid3")]
    pub mprb: bool,
    /// Accepted and rejected post-parse: the subprocess-based MISS_ID3
    /// imputer was never finished upstream.
    #[arg(long)]
    pub mid3: bool,
}

impl LearnArgs {
    pub fn discretize_policy(&self) -> DiscretizePolicy {
        if self.nfull {
            DiscretizePolicy::NumFull
        } else {
            DiscretizePolicy::NumDiv
        }
    }

    pub fn impute_policy(&self) -> Result<ImputePolicy> {
        if self.mid3 {
            return Err(Id3Error::usage("-mid3 is not implemented"));
        }
        Ok(if self.mprb { ImputePolicy::Probabilistic } else { ImputePolicy::Majority })
    }
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    pub model: PathBuf,
    pub out: Option<PathBuf>,

    #[arg(long, conflicts_with_all = ["gdot", "gscheme"])]
    pub gascii: bool,
    #[arg(long, conflicts_with = "gscheme")]
    pub gdot: bool,
    #[arg(long)]
    pub gscheme: bool,
}

impl RenderArgs {
    pub fn format(&self) -> Format {
        if self.gdot {
            Format::Dot
        } else if self.gscheme {
            Format::Scheme
        } else {
            Format::Ascii
        }
    }
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    pub model: PathBuf,
    pub test: PathBuf,
    pub out: Option<PathBuf>,
}

/// Parses the process argument list (including argv\[0\]) into a [`Cli`],
/// normalizing legacy single-dash flags first and mapping any parse
/// failure to [`Id3Error::Usage`] so the binary exits 1, not clap's own 2.
pub fn parse<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let normalized = normalize_args(args);
    Cli::try_parse_from(normalized).map_err(|e| Id3Error::usage(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_legacy_flag_rewritten_to_double_dash() {
        let args = normalize_args(vec!["id3", "l", "-nfull", "-mprb"]);
        assert_eq!(args, vec!["id3", "l", "--nfull", "--mprb"]);
    }

    #[test]
    fn is_unrelated_argument_left_untouched() {
        let args = normalize_args(vec!["id3", "l", "attr.txt"]);
        assert_eq!(args, vec!["id3", "l", "attr.txt"]);
    }

    #[test]
    fn is_learn_defaults_ndiv_and_majority() {
        let cli = parse(vec!["id3", "l", "a", "b", "c"]).unwrap();
        let Command::Learn(args) = cli.command else { panic!("expected learn") };
        assert_eq!(args.discretize_policy(), DiscretizePolicy::NumDiv);
        assert_eq!(args.impute_policy().unwrap(), ImputePolicy::Majority);
    }

    #[test]
    fn is_mid3_rejected_after_parse() {
        let cli = parse(vec!["id3", "l", "a", "b", "c", "-mid3"]).unwrap();
        let Command::Learn(args) = cli.command else { panic!("expected learn") };
        assert!(args.impute_policy().is_err());
    }

    #[test]
    fn is_render_format_selected_from_flags() {
        let cli = parse(vec!["id3", "g", "model.out", "-gdot"]).unwrap();
        let Command::Render(args) = cli.command else { panic!("expected render") };
        assert_eq!(args.format(), Format::Dot);
    }

    #[test]
    fn is_unknown_option_a_usage_error() {
        let err = parse(vec!["id3", "l", "a", "b", "c", "--nope"]).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
