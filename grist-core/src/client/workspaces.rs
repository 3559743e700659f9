//! # Workspaces
//!
//! See <https://support.getgrist.com/api/#tag/workspaces>
use super::{GristClient, RequestError, Workspace, orgs::NamePatch, require_non_empty};
use crate::transport::Transport;
use http::Method;

impl<T> GristClient<T>
where
    T: Transport,
{
    /// Lists the workspaces of an organization, with their documents.
    pub async fn list_workspaces(&self, org_id: i64) -> Result<Vec<Workspace>, RequestError> {
        let id = org_id.to_string();
        self.fetch(Method::GET, self.url(&["orgs", &id, "workspaces"]))
            .await
    }

    /// Creates a workspace and returns its id.
    pub async fn create_workspace(&self, org_id: i64, name: &str) -> Result<i64, RequestError> {
        require_non_empty("workspace name", name)?;
        let id = org_id.to_string();
        self.exchange(
            Method::POST,
            self.url(&["orgs", &id, "workspaces"]),
            &NamePatch { name },
        )
        .await
    }

    pub async fn describe_workspace(&self, workspace_id: i64) -> Result<Workspace, RequestError> {
        require_workspace_id(workspace_id)?;
        let id = workspace_id.to_string();
        self.fetch(Method::GET, self.url(&["workspaces", &id])).await
    }

    /// Renames a workspace.
    pub async fn modify_workspace(&self, workspace_id: i64, name: &str) -> Result<(), RequestError> {
        require_workspace_id(workspace_id)?;
        require_non_empty("workspace name", name)?;
        let id = workspace_id.to_string();
        self.send(
            Method::PATCH,
            self.url(&["workspaces", &id]),
            Some(&NamePatch { name }),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_workspace(&self, workspace_id: i64) -> Result<(), RequestError> {
        require_workspace_id(workspace_id)?;
        let id = workspace_id.to_string();
        self.send::<()>(Method::DELETE, self.url(&["workspaces", &id]), None)
            .await?;
        Ok(())
    }
}

pub(crate) fn require_workspace_id(workspace_id: i64) -> Result<(), RequestError> {
    if workspace_id <= 0 {
        return Err(RequestError::InvalidArgument(format!(
            "invalid workspace id: {workspace_id}"
        )));
    }
    Ok(())
}
