//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// webgme - create WebGME projects and manage their components
#[derive(Parser, Debug)]
#[command(name = "webgme")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// npm executable used by `add`
    #[arg(long, global = true, env = "WEBGME_NPM", default_value = "npm")]
    pub npm: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project, or initialize the current directory
    Init(InitArgs),

    /// List the components of a kind
    Ls(LsArgs),

    /// Create a new component from boilerplate
    New(NewArgs),

    /// Add a component from another project
    Add(AddArgs),

    /// Remove a component
    Rm(RmArgs),

    /// Regenerate config/config.webgme.js from webgme-setup.json
    Config,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create; defaults to the current directory
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Component kind (plugin, addon, decorator, visualizer, layout, router, seed)
    pub kind: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Component kind
    pub kind: String,

    /// Component name
    pub name: String,

    /// Exported project to create a seed from
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Component kind
    pub kind: String,

    /// Component name inside the project
    pub name: Option<String>,

    /// npm install spec of the project (name, user/repo, git url, ...)
    pub project: Option<String>,
}

#[derive(Args, Debug)]
pub struct RmArgs {
    /// Component kind
    pub kind: String,

    /// Component name
    pub name: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}
