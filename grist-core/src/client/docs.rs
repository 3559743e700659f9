//! # Documents
//!
//! See <https://support.getgrist.com/api/#tag/docs>
//!
//! Creating and modifying a document both answer with the document id as a bare JSON string,
//! which is returned as is.
use super::{
    Doc, GristClient, RequestError, raw_id, require_non_empty,
    workspaces::require_workspace_id,
};
use crate::transport::Transport;
use http::Method;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocPatch<'a> {
    name: &'a str,
    is_pinned: bool,
}

impl<T> GristClient<T>
where
    T: Transport,
{
    /// Creates a document in a workspace and returns its id.
    pub async fn create_doc(
        &self,
        workspace_id: i64,
        name: &str,
        is_pinned: bool,
    ) -> Result<String, RequestError> {
        require_workspace_id(workspace_id)?;
        require_non_empty("document name", name)?;
        let id = workspace_id.to_string();
        let response = self
            .send(
                Method::POST,
                self.url(&["workspaces", &id, "docs"]),
                Some(&DocPatch { name, is_pinned }),
            )
            .await?;
        Ok(raw_id(&response))
    }

    pub async fn describe_doc(&self, doc_id: &str) -> Result<Doc, RequestError> {
        require_non_empty("document id", doc_id)?;
        self.fetch(Method::GET, self.url(&["docs", doc_id])).await
    }

    /// Updates the name and pinned status of a document, returns its id.
    pub async fn modify_doc(
        &self,
        doc_id: &str,
        name: &str,
        is_pinned: bool,
    ) -> Result<String, RequestError> {
        require_non_empty("document id", doc_id)?;
        require_non_empty("document name", name)?;
        let response = self
            .send(
                Method::PATCH,
                self.url(&["docs", doc_id]),
                Some(&DocPatch { name, is_pinned }),
            )
            .await?;
        Ok(raw_id(&response))
    }

    pub async fn delete_doc(&self, doc_id: &str) -> Result<(), RequestError> {
        require_non_empty("document id", doc_id)?;
        self.send::<()>(Method::DELETE, self.url(&["docs", doc_id]), None)
            .await?;
        Ok(())
    }
}
