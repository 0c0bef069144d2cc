use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use depot_codec::Format;
use depot_types::ItemKind;

#[derive(Parser)]
#[command(
    name = "depot",
    about = "Depot — typed inventory repositories",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Seed sample data and walk through every error kind
    Demo(DemoArgs),
    /// List items, from sample data or a snapshot file
    List(ListArgs),
    /// Seed sample data and save it as a snapshot
    Export(ExportArgs),
    /// Load a snapshot and list its contents
    Import(ImportArgs),
}

#[derive(Args)]
pub struct DemoArgs {}

#[derive(Args)]
pub struct ListArgs {
    #[arg(short, long)]
    pub kind: Option<ItemKind>,
    /// Snapshot to list instead of sample data
    #[arg(long)]
    pub from: Option<PathBuf>,
    #[arg(long)]
    pub format: Option<Format>,
    /// Only show items at or below the low-stock threshold
    #[arg(long)]
    pub low_stock: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    pub path: Option<PathBuf>,
    #[arg(long)]
    pub format: Option<Format>,
}

#[derive(Args)]
pub struct ImportArgs {
    pub path: Option<PathBuf>,
    #[arg(long)]
    pub format: Option<Format>,
}
