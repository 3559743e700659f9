//! # Grist CLI Entry Point
//!
//! The main executable for the `grist` tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Installs the log subscriber and parses command-line arguments using [`cli::Cli`].
//! 2. **Configuration**: Builds a `GristClient` from the endpoint and API key (flags or environment).
//! 3. **Execution**: Delegates the command to the matching client operation.
//! 4. **Presentation**: Formats and prints the resulting data or error to standard output/error.

mod cli;
mod formatter;

use clap::Parser;
use cli::{
    Cli, ColumnCommands, Commands, DocCommands, OrgCommands, RecordCommands, TableCommands,
    WorkspaceCommands,
};
use formatter::{Done, FormattedString, Json, OrgList, UserList, WorkspaceList};
use grist_core::client::{ClientConfig, GristClient, RequestError};
use std::{process, time::Duration};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let client = build_client_or_exit(&args.endpoint, &args.api_key, args.timeout);

    let result = match args.command {
        Commands::Orgs { sub } => run_orgs(&client, sub).await,
        Commands::Workspaces { sub } => run_workspaces(&client, sub).await,
        Commands::Docs { sub } => run_docs(&client, sub).await,
        Commands::Tables { sub } => run_tables(&client, sub).await,
        Commands::Columns { sub } => run_columns(&client, sub).await,
        Commands::Records { sub } => run_records(&client, sub).await,
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

fn build_client_or_exit(endpoint: &str, api_key: &str, timeout: u64) -> GristClient {
    let config = ClientConfig::new(endpoint, api_key).with_timeout(Duration::from_secs(timeout));

    match GristClient::new(config) {
        Ok(client) => {
            tracing::info!(endpoint = %client.api_endpoint(), "client ready");
            client
        }
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn run_orgs(
    client: &GristClient,
    command: OrgCommands,
) -> Result<FormattedString, RequestError> {
    let output: FormattedString = match command {
        OrgCommands::List => OrgList(client.list_orgs().await?).into(),
        OrgCommands::Describe { org_id } => Json(client.describe_org(org_id).await?).into(),
        OrgCommands::Rename { org_id, name } => {
            client.modify_org(org_id, &name).await?;
            Done(format!("Organization {org_id} renamed to '{name}'")).into()
        }
        OrgCommands::Delete { org_id, name } => {
            client.delete_org(org_id, &name).await?;
            Done(format!("Organization {org_id} deleted")).into()
        }
        OrgCommands::Access { org_id } => UserList(client.list_org_access(org_id).await?).into(),
    };
    Ok(output)
}

async fn run_workspaces(
    client: &GristClient,
    command: WorkspaceCommands,
) -> Result<FormattedString, RequestError> {
    let output: FormattedString = match command {
        WorkspaceCommands::List { org_id } => {
            WorkspaceList(client.list_workspaces(org_id).await?).into()
        }
        WorkspaceCommands::Create { org_id, name } => {
            let id = client.create_workspace(org_id, &name).await?;
            Done(format!("Workspace '{name}' created with id {id}")).into()
        }
        WorkspaceCommands::Describe { workspace_id } => {
            Json(client.describe_workspace(workspace_id).await?).into()
        }
        WorkspaceCommands::Rename { workspace_id, name } => {
            client.modify_workspace(workspace_id, &name).await?;
            Done(format!("Workspace {workspace_id} renamed to '{name}'")).into()
        }
        WorkspaceCommands::Delete { workspace_id } => {
            client.delete_workspace(workspace_id).await?;
            Done(format!("Workspace {workspace_id} deleted")).into()
        }
    };
    Ok(output)
}

async fn run_docs(
    client: &GristClient,
    command: DocCommands,
) -> Result<FormattedString, RequestError> {
    let output: FormattedString = match command {
        DocCommands::Create {
            workspace_id,
            name,
            pinned,
        } => {
            let id = client.create_doc(workspace_id, &name, pinned).await?;
            Done(format!("Document '{name}' created with id {id}")).into()
        }
        DocCommands::Describe { doc_id } => client.describe_doc(&doc_id).await?.into(),
        DocCommands::Rename {
            doc_id,
            name,
            pinned,
        } => {
            let id = client.modify_doc(&doc_id, &name, pinned).await?;
            Done(format!("Document {id} renamed to '{name}'")).into()
        }
        DocCommands::Delete { doc_id } => {
            client.delete_doc(&doc_id).await?;
            Done(format!("Document {doc_id} deleted")).into()
        }
    };
    Ok(output)
}

async fn run_tables(
    client: &GristClient,
    command: TableCommands,
) -> Result<FormattedString, RequestError> {
    let output: FormattedString = match command {
        TableCommands::List { doc_id } => client.list_tables(&doc_id).await?.into(),
        TableCommands::Create { doc_id, body } => client.create_tables(&doc_id, &body).await?.into(),
    };
    Ok(output)
}

async fn run_columns(
    client: &GristClient,
    command: ColumnCommands,
) -> Result<FormattedString, RequestError> {
    let output: FormattedString = match command {
        ColumnCommands::List { doc_id, table_id } => {
            client.list_columns(&doc_id, &table_id).await?.into()
        }
        ColumnCommands::Create {
            doc_id,
            table_id,
            body,
        } => client
            .create_columns(&doc_id, &table_id, &body)
            .await?
            .into(),
    };
    Ok(output)
}

async fn run_records(
    client: &GristClient,
    command: RecordCommands,
) -> Result<FormattedString, RequestError> {
    let output: FormattedString = match command {
        RecordCommands::List { doc_id, table_id } => {
            client.list_records(&doc_id, &table_id).await?.into()
        }
        RecordCommands::Create {
            doc_id,
            table_id,
            body,
        } => client
            .create_records(&doc_id, &table_id, &body)
            .await?
            .into(),
        RecordCommands::Update {
            doc_id,
            table_id,
            body,
        } => {
            client.update_records(&doc_id, &table_id, &body).await?;
            Done(format!("{} record(s) updated", body.records.len())).into()
        }
    };
    Ok(output)
}
