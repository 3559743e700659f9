//! # CLI
//!
//! This module defines the command-line interface of `grist` using `clap`.
//!
//! It is responsible for parsing user input and validating JSON bodies against the payload types
//! of `grist_core` before any request is sent.
use clap::{Parser, Subcommand};
use grist_core::client::{Columns, Records, TablesWithColumns};
use serde::de::DeserializeOwned;

#[derive(Parser)]
#[command(name = "grist", version, about = "Command line client for the Grist REST API")]
pub struct Cli {
    /// Base URL of the Grist instance (e.g. https://docs.getgrist.com)
    #[arg(long, env = "GRIST_ENDPOINT", default_value = "http://localhost:8484")]
    pub endpoint: String,

    /// API key, found in the Grist profile settings
    #[arg(long, env = "GRIST_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Request timeout, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage organizations
    Orgs {
        #[command(subcommand)]
        sub: OrgCommands,
    },
    /// Manage workspaces
    Workspaces {
        #[command(subcommand)]
        sub: WorkspaceCommands,
    },
    /// Manage documents
    Docs {
        #[command(subcommand)]
        sub: DocCommands,
    },
    /// List or create the tables of a document
    Tables {
        #[command(subcommand)]
        sub: TableCommands,
    },
    /// List or create the columns of a table
    Columns {
        #[command(subcommand)]
        sub: ColumnCommands,
    },
    /// Read and write the records of a table
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// grist records create <DOC_ID> People --body '{"records": [{"fields": {"name": "Jane"}}]}'
    /// ```
    Records {
        #[command(subcommand)]
        sub: RecordCommands,
    },
}

#[derive(Subcommand)]
pub enum OrgCommands {
    /// List the organizations the API key has access to
    List,
    /// Show a single organization
    Describe { org_id: i64 },
    /// Rename an organization
    Rename { org_id: i64, name: String },
    /// Delete an organization (its current name is required as a confirmation)
    Delete { org_id: i64, name: String },
    /// List the users with access to an organization
    Access { org_id: i64 },
}

#[derive(Subcommand)]
pub enum WorkspaceCommands {
    /// List the workspaces of an organization
    List { org_id: i64 },
    /// Create a workspace and print its id
    Create { org_id: i64, name: String },
    /// Show a single workspace
    Describe { workspace_id: i64 },
    /// Rename a workspace
    Rename { workspace_id: i64, name: String },
    /// Delete a workspace
    Delete { workspace_id: i64 },
}

#[derive(Subcommand)]
pub enum DocCommands {
    /// Create a document in a workspace and print its id
    Create {
        workspace_id: i64,
        name: String,
        /// Pin the document in its workspace
        #[arg(long)]
        pinned: bool,
    },
    /// Show a single document
    Describe { doc_id: String },
    /// Rename a document
    Rename {
        doc_id: String,
        name: String,
        /// Pin the document in its workspace
        #[arg(long)]
        pinned: bool,
    },
    /// Delete a document
    Delete { doc_id: String },
}

#[derive(Subcommand)]
pub enum TableCommands {
    /// List the tables of a document
    List { doc_id: String },
    /// Create tables, body is `{"tables": [{"id": ..., "columns": [...]}]}`
    Create {
        doc_id: String,
        #[arg(long, value_parser = parse_body::<TablesWithColumns>)]
        body: TablesWithColumns,
    },
}

#[derive(Subcommand)]
pub enum ColumnCommands {
    /// List the columns of a table
    List { doc_id: String, table_id: String },
    /// Add columns, body is `{"columns": [{"id": ..., "fields": {...}}]}`
    Create {
        doc_id: String,
        table_id: String,
        #[arg(long, value_parser = parse_body::<Columns>)]
        body: Columns,
    },
}

#[derive(Subcommand)]
pub enum RecordCommands {
    /// List the records of a table
    List { doc_id: String, table_id: String },
    /// Add records, body is `{"records": [{"fields": {...}}]}`
    Create {
        doc_id: String,
        table_id: String,
        #[arg(long, value_parser = parse_body::<Records>)]
        body: Records,
    },
    /// Update records, body is `{"records": [{"id": ..., "fields": {...}}]}`
    Update {
        doc_id: String,
        table_id: String,
        #[arg(long, value_parser = parse_body::<Records>)]
        body: Records,
    },
}

fn parse_body<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_str(value).map_err(|e| format!("Invalid JSON body: {e}"))
}
