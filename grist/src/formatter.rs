use colored::*;
use grist_core::client::{
    ClientBuildError, Columns, Doc, Org, Records, RequestError, Tables, User, Workspace,
};
use serde::Serialize;

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

pub struct OrgList(pub Vec<Org>);

pub struct WorkspaceList(pub Vec<Workspace>);

pub struct UserList(pub Vec<User>);

/// Any payload, printed as pretty JSON.
pub struct Json<T: Serialize>(pub T);

/// Confirmation of a write operation.
pub struct Done(pub String);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl<T: Serialize> From<Json<T>> for FormattedString {
    fn from(Json(value): Json<T>) -> Self {
        match serde_json::to_string_pretty(&value) {
            Ok(out) => FormattedString(out),
            Err(err) => FormattedString(format!(
                "{}\n\n'{}'",
                "Failed to render response:".red().bold(),
                err
            )),
        }
    }
}

impl From<Done> for FormattedString {
    fn from(Done(message): Done) -> Self {
        FormattedString(format!("{} {}", "✔".green().bold(), message))
    }
}

impl From<RequestError> for FormattedString {
    fn from(err: RequestError) -> Self {
        let title = match err {
            RequestError::Api(_) => "Grist API Error:",
            RequestError::InvalidArgument(_) => "Invalid Argument:",
            RequestError::Transport(_) => "Connection Error:",
            RequestError::Encode(_) | RequestError::Decode { .. } => "Invalid Payload:",
        };
        FormattedString(format!("{}\n\n'{}'", title.red().bold(), err))
    }
}

impl From<ClientBuildError> for FormattedString {
    fn from(err: ClientBuildError) -> Self {
        FormattedString(format!(
            "{}\n\n'{}'",
            "Configuration Error:".red().bold(),
            err
        ))
    }
}

impl From<OrgList> for FormattedString {
    fn from(OrgList(orgs): OrgList) -> Self {
        if orgs.is_empty() {
            return FormattedString("No organizations found.".yellow().to_string());
        }

        let mut out = String::from("Organizations:\n");
        for org in orgs {
            out.push_str(&format!(
                "  - {} {} [{}]\n",
                org.name.green(),
                format!("(id {})", org.id).dimmed(),
                org.access.as_str().cyan()
            ));
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<WorkspaceList> for FormattedString {
    fn from(WorkspaceList(workspaces): WorkspaceList) -> Self {
        if workspaces.is_empty() {
            return FormattedString("No workspaces found.".yellow().to_string());
        }

        let mut out = String::from("Workspaces:\n");
        for ws in workspaces {
            out.push_str(&format!(
                "  - {} {}\n",
                ws.name.green(),
                format!("(id {})", ws.id).dimmed()
            ));
            for doc in &ws.docs {
                out.push_str(&format!("      {}\n", doc_line(doc)));
            }
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<UserList> for FormattedString {
    fn from(UserList(users): UserList) -> Self {
        if users.is_empty() {
            return FormattedString("No users found.".yellow().to_string());
        }

        let mut out = String::from("Users:\n");
        for user in users {
            let access = user.access.map(|a| a.as_str()).unwrap_or("none");
            out.push_str(&format!(
                "  - {} <{}> [{}]\n",
                user.name.green(),
                user.email.as_deref().unwrap_or("-"),
                access.cyan()
            ));
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<Tables> for FormattedString {
    fn from(tables: Tables) -> Self {
        if tables.tables.is_empty() {
            return FormattedString("No tables found.".yellow().to_string());
        }

        let mut out = String::from("Tables:\n");
        for table in tables.tables {
            out.push_str(&format!("  - {}\n", table.id.green()));
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<Columns> for FormattedString {
    fn from(columns: Columns) -> Self {
        FormattedString::from(Json(columns))
    }
}

impl From<Records> for FormattedString {
    fn from(records: Records) -> Self {
        FormattedString::from(Json(records))
    }
}

impl From<Doc> for FormattedString {
    fn from(doc: Doc) -> Self {
        FormattedString::from(Json(doc))
    }
}

fn doc_line(doc: &Doc) -> String {
    let pin = if doc.is_pinned {
        format!(" {}", "pinned".purple())
    } else {
        String::new()
    };
    format!(
        "{} {}{}",
        doc.name.yellow(),
        format!("({})", doc.id).dimmed(),
        pin
    )
}
