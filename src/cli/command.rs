use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::notify::DEFAULT_RECEIVER;

#[derive(Parser, Debug)]
#[command(name = "contacts-skill", version, about = "Voice assistant contact list")]
pub struct Cli {
    /// Storage choice (sqlite, mem) are available
    #[arg(long, env = "CONTACTS_STORAGE", default_value_t = String::from("sqlite"))]
    pub storage: String,

    /// Path to the contacts database
    #[arg(long, env = "CONTACTS_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Where list changes are sent (bus, http, none)
    #[arg(long, env = "CONTACTS_SINK", default_value_t = String::from("none"))]
    pub sink: String,

    /// Endpoint for the http sink
    #[arg(long, env = "CONTACTS_SINK_URL")]
    pub sink_url: Option<String>,

    /// Bus receiver for list notifications
    #[arg(long, env = "CONTACTS_RECEIVER", default_value_t = String::from(DEFAULT_RECEIVER))]
    pub receiver: String,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    /// Missing fields are asked for interactively
    Add {
        /// Contact name
        #[arg(long)]
        name: Option<String>,

        /// Contact email, spoken form ("ann at example dot com") is accepted
        #[arg(long)]
        email: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// List contacts sorted by name
    List,
    /// Remove the contact that best matches a name
    Remove {
        /// Name to look for, asked for when left out
        #[arg(long)]
        name: Option<String>,
    },
    /// Show the contacts that best match a name
    Match {
        query: String,
    },
    /// Read bus messages from stdin, one JSON object per line,
    /// and write replies to stdout
    Events,
}
