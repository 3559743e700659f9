//! # Tables
//!
//! See <https://support.getgrist.com/api/#tag/tables>
use super::{GristClient, RequestError, Tables, TablesWithColumns, require_non_empty};
use crate::transport::Transport;
use http::Method;

impl<T> GristClient<T>
where
    T: Transport,
{
    pub async fn list_tables(&self, doc_id: &str) -> Result<Tables, RequestError> {
        require_non_empty("document id", doc_id)?;
        self.fetch(Method::GET, self.url(&["docs", doc_id, "tables"]))
            .await
    }

    /// Creates tables with their columns. The response only carries the new table ids.
    pub async fn create_tables(
        &self,
        doc_id: &str,
        tables: &TablesWithColumns,
    ) -> Result<Tables, RequestError> {
        require_non_empty("document id", doc_id)?;
        if tables.tables.is_empty() {
            return Err(RequestError::InvalidArgument(
                "at least one table is required".to_string(),
            ));
        }
        self.exchange(
            Method::POST,
            self.url(&["docs", doc_id, "tables"]),
            tables,
        )
        .await
    }
}
