//! # Columns
//!
//! See <https://support.getgrist.com/api/#tag/columns>
use super::{Columns, GristClient, RequestError, require_non_empty};
use crate::transport::Transport;
use http::Method;

impl<T> GristClient<T>
where
    T: Transport,
{
    /// Lists the columns of a table with their properties.
    pub async fn list_columns(&self, doc_id: &str, table_id: &str) -> Result<Columns, RequestError> {
        require_non_empty("document id", doc_id)?;
        require_non_empty("table id", table_id)?;
        self.fetch(
            Method::GET,
            self.url(&["docs", doc_id, "tables", table_id, "columns"]),
        )
        .await
    }

    /// Adds columns to a table. The response only carries the new column ids.
    pub async fn create_columns(
        &self,
        doc_id: &str,
        table_id: &str,
        columns: &Columns,
    ) -> Result<Columns, RequestError> {
        require_non_empty("document id", doc_id)?;
        require_non_empty("table id", table_id)?;
        if columns.columns.is_empty() {
            return Err(RequestError::InvalidArgument(
                "at least one column is required".to_string(),
            ));
        }
        self.exchange(
            Method::POST,
            self.url(&["docs", doc_id, "tables", table_id, "columns"]),
            columns,
        )
        .await
    }
}
