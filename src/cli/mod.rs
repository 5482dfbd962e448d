pub mod commands;
pub mod prompt;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "intimation")]
#[command(about = "Track accident intimation case files against a spreadsheet store")]
pub struct Cli {
    /// Sheet service URL; overrides INTIMATION_SCRIPT_URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Directory of the local fallback store; overrides INTIMATION_DATA_DIR
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List case files, newest first unless a sort is given
    List {
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long, default_value = "All")]
        status: String,
        /// Field id to sort by (createdAt, updatedAt or a scalar field)
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        desc: bool,
    },
    /// Show every section of one case file
    Show { id: String },
    /// Create a case file from FIELD=VALUE assignments
    Create {
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },
    /// Change fields of an existing case file
    Update {
        id: String,
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },
    /// Delete a case file after confirmation
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Write every case file to files_export_<date>.csv
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Dashboard counts
    Stats,
    /// Print the field catalog
    Schema,
    /// Run a sheet service that the remote store can talk to
    Serve {
        #[arg(long, default_value = "127.0.0.1:8787")]
        addr: String,
        /// JSON file backing the sheet; in memory when omitted
        #[arg(long)]
        sheet: Option<PathBuf>,
    },
}
