use std::path::PathBuf;

use asmdiff_tree::RecordKind;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "asmdiff",
    about = "Inspect and format serialized assembly diff trees",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print per-kind record counts for a diff tree
    Stats(StatsArgs),
    /// Reformat a diff tree document
    Fmt(FmtArgs),
    /// List differing records with their directory path
    Changes(ChangesArgs),
}

#[derive(Args)]
pub struct StatsArgs {
    /// Serialized diff tree (JSON)
    pub tree: PathBuf,
}

#[derive(Args)]
pub struct FmtArgs {
    /// Serialized diff tree (JSON)
    pub tree: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact instead of indented JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args)]
pub struct ChangesArgs {
    /// Serialized diff tree (JSON)
    pub tree: PathBuf,

    /// Only list records of this kind
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    Exact,
    Change,
    Remove,
    Substitute,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Exact => RecordKind::Exact,
            KindArg::Change => RecordKind::Change,
            KindArg::Remove => RecordKind::Remove,
            KindArg::Substitute => RecordKind::Substitute,
        }
    }
}
