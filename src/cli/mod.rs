//! CLI module - Command-line interface for imagemaker
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// imagemaker - account management and image-generation API
#[derive(Parser)]
#[command(name = "imagemaker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (overrides the default search path)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (default)
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// List the available image-generation models
    #[command(alias = "ls")]
    Models,

    /// Manage user accounts
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a user account
    Create {
        /// Email address, must be unique
        email: String,
        /// Plaintext password (hashed before storage)
        password: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Delete a user account and its profiles
    #[command(alias = "rm")]
    Delete {
        /// User ID
        id: String,
    },
}

pub use commands::*;
