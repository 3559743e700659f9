//! # Organizations
//!
//! See <https://support.getgrist.com/api/#tag/orgs>
use super::{AccessUsers, GristClient, Org, RequestError, User, require_non_empty};
use crate::transport::Transport;
use http::Method;
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct NamePatch<'a> {
    pub(crate) name: &'a str,
}

impl<T> GristClient<T>
where
    T: Transport,
{
    /// Lists the organizations the API key has access to.
    pub async fn list_orgs(&self) -> Result<Vec<Org>, RequestError> {
        self.fetch(Method::GET, self.url(&["orgs"])).await
    }

    pub async fn describe_org(&self, org_id: i64) -> Result<Org, RequestError> {
        let id = org_id.to_string();
        self.fetch(Method::GET, self.url(&["orgs", &id])).await
    }

    /// Renames an organization.
    pub async fn modify_org(&self, org_id: i64, name: &str) -> Result<(), RequestError> {
        require_non_empty("organization name", name)?;
        let id = org_id.to_string();
        self.send(Method::PATCH, self.url(&["orgs", &id]), Some(&NamePatch { name }))
            .await?;
        Ok(())
    }

    /// Deletes an organization. Grist asks for its name as a confirmation.
    pub async fn delete_org(&self, org_id: i64, name: &str) -> Result<(), RequestError> {
        require_non_empty("organization name", name)?;
        let id = org_id.to_string();
        self.send::<()>(Method::DELETE, self.url(&["orgs", &id, name]), None)
            .await?;
        Ok(())
    }

    /// Lists the users that have access to an organization.
    pub async fn list_org_access(&self, org_id: i64) -> Result<Vec<User>, RequestError> {
        let id = org_id.to_string();
        let access: AccessUsers = self
            .fetch(Method::GET, self.url(&["orgs", &id, "access"]))
            .await?;
        Ok(access.users)
    }
}
